use chrono::Utc;
use uuid::Uuid;

/// Identifier-generation strategy. Each resource picks its own id shape.
pub trait IdGenerator {
    type Id;

    fn generate(&self) -> Self::Id;
}

/// Millisecond epoch timestamps for video records. No collision detection;
/// uniqueness is assumed from the clock.
pub struct TimestampId;

impl IdGenerator for TimestampId {
    type Id = i64;

    fn generate(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Random UUID v4 truncated to its first 28 characters, for blog records.
/// Assumed unique by probability.
pub struct TruncatedUuid;

impl IdGenerator for TruncatedUuid {
    type Id = String;

    fn generate(&self) -> String {
        let full = Uuid::new_v4().to_string();
        full[..28].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_ids_are_positive_epoch_millis() {
        let id = TimestampId.generate();
        // Well past 2020 in milliseconds.
        assert!(id > 1_577_836_800_000);
    }

    #[test]
    fn truncated_uuid_is_28_chars() {
        let id = TruncatedUuid.generate();
        assert_eq!(id.len(), 28);
        assert_ne!(id, TruncatedUuid.generate());
    }
}

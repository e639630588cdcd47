use tokio::sync::RwLock;

use crate::models::{Blog, BlogInput, Video};

/// Ordered in-memory video collection. All operations are linear scans,
/// which is fine at this collection size.
#[derive(Default)]
pub struct VideoStore {
    videos: RwLock<Vec<Video>>,
}

impl VideoStore {
    pub async fn all(&self) -> Vec<Video> {
        self.videos.read().await.clone()
    }

    pub async fn find(&self, id: i64) -> Option<Video> {
        self.videos.read().await.iter().find(|v| v.id == id).cloned()
    }

    pub async fn insert(&self, video: Video) {
        self.videos.write().await.push(video);
    }

    /// Replace the record with the given id. Returns false when no record
    /// carries that id.
    pub async fn replace(&self, id: i64, video: Video) -> bool {
        let mut videos = self.videos.write().await;
        match videos.iter().position(|v| v.id == id) {
            Some(index) => {
                videos[index] = video;
                true
            }
            None => false,
        }
    }

    pub async fn remove(&self, id: i64) -> bool {
        let mut videos = self.videos.write().await;
        match videos.iter().position(|v| v.id == id) {
            Some(index) => {
                videos.remove(index);
                true
            }
            None => false,
        }
    }

    pub async fn clear(&self) {
        self.videos.write().await.clear();
    }
}

/// Ordered in-memory blog collection.
#[derive(Default)]
pub struct BlogStore {
    blogs: RwLock<Vec<Blog>>,
}

impl BlogStore {
    pub async fn all(&self) -> Vec<Blog> {
        self.blogs.read().await.clone()
    }

    pub async fn find(&self, id: &str) -> Option<Blog> {
        self.blogs.read().await.iter().find(|b| b.id == id).cloned()
    }

    /// Append a blog, de-duplicating by id: when a record with the same id
    /// already exists the stored record is returned untouched.
    pub async fn add(&self, blog: Blog) -> Blog {
        let mut blogs = self.blogs.write().await;
        if let Some(existing) = blogs.iter().find(|b| b.id == blog.id) {
            return existing.clone();
        }
        blogs.push(blog.clone());
        blog
    }

    /// Update name/description/websiteUrl of the record with the given id,
    /// preserving the id. None when the id is absent.
    pub async fn update(&self, id: &str, input: &BlogInput) -> Option<Blog> {
        let mut blogs = self.blogs.write().await;
        let blog = blogs.iter_mut().find(|b| b.id == id)?;
        blog.name = input.name.clone();
        blog.description = input.description.clone();
        blog.website_url = input.website_url.clone();
        Some(blog.clone())
    }

    pub async fn remove(&self, id: &str) -> bool {
        let mut blogs = self.blogs.write().await;
        match blogs.iter().position(|b| b.id == id) {
            Some(index) => {
                blogs.remove(index);
                true
            }
            None => false,
        }
    }

    pub async fn clear(&self) {
        self.blogs.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn video(id: i64, title: &str) -> Video {
        let now = Utc::now();
        Video {
            id,
            title: title.to_string(),
            author: "author".to_string(),
            can_be_downloaded: false,
            min_age_restriction: None,
            created_at: now,
            publication_date: now,
            available_resolutions: Vec::new(),
        }
    }

    fn blog(id: &str, name: &str) -> Blog {
        Blog {
            id: id.to_string(),
            name: name.to_string(),
            description: "desc".to_string(),
            website_url: "https://example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn video_insert_preserves_order() {
        let store = VideoStore::default();
        store.insert(video(2, "second")).await;
        store.insert(video(1, "first")).await;

        let all = store.all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 2);
        assert_eq!(all[1].id, 1);
    }

    #[tokio::test]
    async fn video_replace_keeps_position() {
        let store = VideoStore::default();
        store.insert(video(1, "a")).await;
        store.insert(video(2, "b")).await;

        assert!(store.replace(1, video(1, "updated")).await);
        let all = store.all().await;
        assert_eq!(all[0].title, "updated");
        assert_eq!(all[1].title, "b");
    }

    #[tokio::test]
    async fn video_replace_missing_id_is_false() {
        let store = VideoStore::default();
        assert!(!store.replace(99, video(99, "x")).await);
    }

    #[tokio::test]
    async fn video_remove_then_find_is_none() {
        let store = VideoStore::default();
        store.insert(video(1, "a")).await;

        assert!(store.remove(1).await);
        assert!(store.find(1).await.is_none());
        assert!(!store.remove(1).await);
    }

    #[tokio::test]
    async fn blog_add_dedupes_by_id() {
        let store = BlogStore::default();
        store.add(blog("abc", "original")).await;
        let returned = store.add(blog("abc", "duplicate")).await;

        assert_eq!(returned.name, "original");
        assert_eq!(store.all().await.len(), 1);
    }

    #[tokio::test]
    async fn blog_update_preserves_id() {
        let store = BlogStore::default();
        store.add(blog("abc", "before")).await;

        let input = BlogInput {
            name: "after".to_string(),
            description: "new desc".to_string(),
            website_url: "https://new.example.com".to_string(),
        };
        let updated = store.update("abc", &input).await.unwrap();
        assert_eq!(updated.id, "abc");
        assert_eq!(updated.name, "after");

        assert!(store.update("missing", &input).await.is_none());
    }

    #[tokio::test]
    async fn clear_empties_collection() {
        let store = BlogStore::default();
        store.add(blog("a", "x")).await;
        store.add(blog("b", "y")).await;

        store.clear().await;
        assert!(store.all().await.is_empty());
    }
}

/*
 * Responsibility
 * - Volatile posts CRUD (no database required)
 * - Integer ids: max(existing) + 1, starting at 1
 */
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::repos::error::RepoResult;
use crate::repos::store::{NewPost, Post, PostChanges, PostId, PostStore};

/// In-memory post store backed by an ordered `Vec`.
///
/// Each operation holds the lock for its whole read-modify-write.
/// Data is lost on process restart.
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(posts: &[Post]) -> i64 {
        posts
            .iter()
            .filter_map(|p| match p.id {
                PostId::Seq(n) => Some(n),
                PostId::Key(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn parse_id(&self, raw: &str) -> Option<PostId> {
        raw.parse::<i64>().ok().map(PostId::Seq)
    }

    async fn list(&self) -> RepoResult<Vec<Post>> {
        Ok(self.posts.read().await.clone())
    }

    async fn get(&self, id: PostId) -> RepoResult<Option<Post>> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, post: NewPost) -> RepoResult<Post> {
        let mut posts = self.posts.write().await;
        let stored = Post {
            id: PostId::Seq(Self::next_id(&posts)),
            title: post.title,
            content: post.content,
            author: post.author,
            date: post.date,
        };
        posts.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> RepoResult<Option<Post>> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        changes.apply(post);
        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: PostId) -> RepoResult<bool> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn new_post(title: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: "body".to_string(),
            author: "Anonymous".to_string(),
            date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn ids_follow_the_largest_existing_id() {
        let store = MemoryPostStore::new();
        let first = store.insert(new_post("one")).await.unwrap();
        let second = store.insert(new_post("two")).await.unwrap();
        let third = store.insert(new_post("three")).await.unwrap();
        assert_eq!(first.id, PostId::Seq(1));
        assert_eq!(second.id, PostId::Seq(2));
        assert_eq!(third.id, PostId::Seq(3));

        // Removing a middle post leaves the maximum in place.
        assert!(store.delete(PostId::Seq(2)).await.unwrap());
        let fourth = store.insert(new_post("four")).await.unwrap();
        assert_eq!(fourth.id, PostId::Seq(4));
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let store = MemoryPostStore::new();
        for title in ["a", "b", "c"] {
            store.insert(new_post(title)).await.unwrap();
        }
        let titles: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_posts() {
        let store = MemoryPostStore::new();
        let changes = PostChanges {
            title: Some("x".into()),
            content: None,
            author: None,
            date: Utc::now(),
        };
        assert!(store.update(PostId::Seq(9), changes).await.unwrap().is_none());
        assert!(!store.delete(PostId::Seq(9)).await.unwrap());
    }

    #[test]
    fn parse_id_accepts_integers_only() {
        let store = MemoryPostStore::new();
        assert_eq!(store.parse_id("12"), Some(PostId::Seq(12)));
        assert_eq!(store.parse_id("abc"), None);
        assert_eq!(store.parse_id("1.5"), None);
        assert_eq!(store.parse_id(""), None);
    }
}

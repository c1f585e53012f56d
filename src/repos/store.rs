//! Post store interface shared by the in-memory and PostgreSQL backends.
use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::error::RepoResult;

/// Identifier of a post.
///
/// The in-memory store hands out sequential integers, the PostgreSQL store
/// uuids. On the wire it is a JSON number or a JSON string respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Seq(i64),
    Key(Uuid),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Seq(n) => write!(f, "{n}"),
            PostId::Key(key) => write!(f, "{key}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: DateTime<Utc>,
}

/// A fully validated post waiting for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: DateTime<Utc>,
}

/// Field replacements for a partial update.
///
/// `None` keeps the stored value. `date` is always written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: DateTime<Utc>,
}

impl PostChanges {
    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
        post.date = self.date;
    }
}

/// Storage backend for the post collection.
///
/// Every method is a single storage operation. Lookups by an id of the other
/// backend's kind behave like a missing record.
#[async_trait]
pub trait PostStore: Send + Sync + 'static {
    // Backend name (for logging).
    fn backend_name(&self) -> &'static str;

    // Parse a path segment into this backend's id kind.
    // `None` means the segment can never name a post here.
    fn parse_id(&self, raw: &str) -> Option<PostId>;

    // All posts in insertion order.
    async fn list(&self) -> RepoResult<Vec<Post>>;

    async fn get(&self, id: PostId) -> RepoResult<Option<Post>>;

    async fn insert(&self, post: NewPost) -> RepoResult<Post>;

    // Insert several posts, preserving their order.
    async fn insert_many(&self, posts: Vec<NewPost>) -> RepoResult<Vec<Post>> {
        let mut stored = Vec::with_capacity(posts.len());
        for post in posts {
            stored.push(self.insert(post).await?);
        }
        Ok(stored)
    }

    // Returns `Ok(None)` when no post has this id.
    async fn update(&self, id: PostId, changes: PostChanges) -> RepoResult<Option<Post>>;

    // Returns `Ok(false)` when no post has this id.
    async fn delete(&self, id: PostId) -> RepoResult<bool>;
}

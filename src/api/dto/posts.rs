/*
 * Responsibility
 * - Posts request/response DTOs
 * - Turn a request into a NewPost / PostChanges (validation + defaults)
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MISSING_FIELDS_MESSAGE;
use crate::repos::{NewPost, Post, PostChanges, PostId};

pub const DEFAULT_AUTHOR: &str = "Anonymous";

// An empty string counts as "not provided".
fn provided(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl CreatePostRequest {
    pub fn into_new_post(self, now: DateTime<Utc>) -> Result<NewPost, &'static str> {
        let (Some(title), Some(content)) = (provided(self.title), provided(self.content)) else {
            return Err(MISSING_FIELDS_MESSAGE);
        };

        Ok(NewPost {
            title,
            content,
            author: provided(self.author).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            date: now,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl UpdatePostRequest {
    /// Missing and empty fields both keep the stored value.
    pub fn into_changes(self, now: DateTime<Utc>) -> PostChanges {
        PostChanges {
            title: provided(self.title),
            content: provided(self.content),
            author: provided(self.author),
            date: now,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            date: post.date,
        }
    }
}

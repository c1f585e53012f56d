//! HTTP client for the post API.
//!
//! One method per backend endpoint, one request per call. Non-2xx answers
//! become [`BackendError::Status`] carrying the `message` of the error body
//! when the backend sent one. Mutations only report success: the pages
//! redirect afterwards, so their response bodies are never decoded.
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub type BackendResult<T> = Result<T, BackendError>;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend answered {status}")]
    Status { status: u16, message: Option<String> },
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend base url cannot take a path")]
    BaseUrl,
}

/// Post id as the backend sends it: a number (in-memory store) or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Seq(i64),
    Key(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Seq(n) => write!(f, "{n}"),
            PostId::Key(key) => f.write_str(key),
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

/// Fields submitted by the browser form; forwarded as JSON unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base: Url,
}

impl BackendClient {
    pub fn new(base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    // base + "/posts[/{id}]"; the id is percent-encoded as a single segment.
    fn posts_url(&self, id: Option<&str>) -> BackendResult<Url> {
        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| BackendError::BaseUrl)?;
            segments.pop_if_empty().push("posts");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    async fn check(res: reqwest::Response) -> BackendResult<reqwest::Response> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }

        let message = res
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.is_empty());
        tracing::debug!(status = status.as_u16(), ?message, "backend returned an error");

        Err(BackendError::Status {
            status: status.as_u16(),
            message,
        })
    }

    pub async fn list_posts(&self) -> BackendResult<Vec<Post>> {
        let res = self.http.get(self.posts_url(None)?).send().await?;
        Ok(Self::check(res).await?.json().await?)
    }

    pub async fn get_post(&self, id: &str) -> BackendResult<Post> {
        let res = self.http.get(self.posts_url(Some(id))?).send().await?;
        Ok(Self::check(res).await?.json().await?)
    }

    pub async fn create_post(&self, form: &PostForm) -> BackendResult<()> {
        let res = self
            .http
            .post(self.posts_url(None)?)
            .json(form)
            .send()
            .await?;
        Self::check(res).await?;
        Ok(())
    }

    pub async fn update_post(&self, id: &str, form: &PostForm) -> BackendResult<()> {
        let res = self
            .http
            .patch(self.posts_url(Some(id))?)
            .json(form)
            .send()
            .await?;
        Self::check(res).await?;
        Ok(())
    }

    pub async fn delete_post(&self, id: &str) -> BackendResult<()> {
        let res = self.http.delete(self.posts_url(Some(id))?).send().await?;
        Self::check(res).await?;
        Ok(())
    }
}

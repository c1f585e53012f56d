/*
 * Responsibility
 * - The post operations the handlers call (list / get / create / update / delete)
 * - Turn "no such row" answers from the store into NotFound
 * - Seed an empty collection according to SeedPolicy
 */
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::repos::{NewPost, Post, PostChanges, PostId, PostStore};
use crate::services::seed::{SeedPolicy, sample_posts};

pub struct PostService {
    store: Arc<dyn PostStore>,
    seed_policy: SeedPolicy,
    // Whether this process has seeded yet. Also serializes seeding.
    seeded: Mutex<bool>,
}

impl std::fmt::Debug for PostService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostService")
            .field("store", &self.store.backend_name())
            .field("seed_policy", &self.seed_policy)
            .finish()
    }
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>, seed_policy: SeedPolicy) -> Self {
        Self {
            store,
            seed_policy,
            seeded: Mutex::new(false),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    pub fn parse_id(&self, raw: &str) -> AppResult<PostId> {
        self.store.parse_id(raw).ok_or(AppError::InvalidIdentifier)
    }

    pub async fn list(&self) -> AppResult<Vec<Post>> {
        let posts = self.store.list().await?;
        if !posts.is_empty() || self.seed_policy == SeedPolicy::Never {
            return Ok(posts);
        }
        self.seed_empty_collection().await
    }

    async fn seed_empty_collection(&self) -> AppResult<Vec<Post>> {
        let mut seeded = self.seeded.lock().await;

        // Another request may have seeded while we waited for the lock.
        let posts = self.store.list().await?;
        if !posts.is_empty() || !self.seed_policy.should_seed(*seeded) {
            return Ok(posts);
        }

        let samples = sample_posts();
        let count = samples.len();
        self.store.insert_many(samples).await?;
        *seeded = true;
        tracing::info!(count, policy = ?self.seed_policy, "seeded empty post collection");

        Ok(self.store.list().await?)
    }

    pub async fn get(&self, id: PostId) -> AppResult<Post> {
        self.store.get(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn create(&self, post: NewPost) -> AppResult<Post> {
        let post = self.store.insert(post).await?;
        tracing::debug!(id = %post.id, "post created");
        Ok(post)
    }

    pub async fn update(&self, id: PostId, changes: PostChanges) -> AppResult<Post> {
        self.store
            .update(id, changes)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn delete(&self, id: PostId) -> AppResult<()> {
        if self.store.delete(id).await? {
            tracing::debug!(%id, "post deleted");
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}

pub mod error;
pub mod memory_post_repo;
pub mod post_repo;
pub mod store;

pub use memory_post_repo::MemoryPostStore;
pub use post_repo::PgPostStore;
pub use store::{NewPost, Post, PostChanges, PostId, PostStore};

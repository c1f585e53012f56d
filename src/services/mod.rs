pub mod posts;
pub mod seed;

pub use posts::PostService;
pub use seed::SeedPolicy;

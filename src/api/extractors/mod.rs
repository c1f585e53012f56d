/**
 * Responsibility
 *  - Request extractors whose rejections are AppError (JSON error body)
 */
mod json_body;
mod post_id;

pub use json_body::JsonBody;
pub use post_id::PostIdParam;

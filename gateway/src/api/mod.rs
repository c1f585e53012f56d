/*
 * Responsibility
 * - Browser-facing routes (routes() re-export)
 */
pub mod pages;
mod routes;

pub use routes::routes;

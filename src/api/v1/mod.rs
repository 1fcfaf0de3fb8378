/*
 * Responsibility
 * - v1 の公開面 (routes(), RequestCtx extractor)
 */
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;

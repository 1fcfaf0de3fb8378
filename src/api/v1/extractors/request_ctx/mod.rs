/*!
 * Request context extractor
 *
 * Responsibility:
 * - auth filter が積んだ結果 (RequestCtx) を handler に渡す
 * - axum との接着は core、型定義は types に置く
 */

mod core;
mod types;

pub use types::RequestCtx;

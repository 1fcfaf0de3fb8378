/*
 * Responsibility
 * - middleware の公開面
 * - auth: route 単位の認可 filter
 * - http / cors / security_headers: app.rs で Router 全体に掛ける layer
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;

pub mod access_jwt;
pub mod factory;

pub use access_jwt::{Claims, TokenVerifier};
pub use factory::build_token_verifier;

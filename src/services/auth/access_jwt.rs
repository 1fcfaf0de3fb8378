use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

// access token 検証のエラー
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("jwt verification failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Decoded access-token payload.
///
/// - `role_name` is the only claim the gate itself reads; a token without it is invalid.
/// - Everything else the issuer put in (`subject`, `username`, `exp`, `iat`, ...) is kept
///   verbatim in `extra` so downstream handlers see exactly what was signed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub role_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// HS256 access-token verifier.
///
/// - The shared secret is injected once at startup; key material is not printable via Debug.
/// - `exp` is enforced when present (with `leeway_seconds` of clock skew) but not required.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 鍵は出力しない
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(secret: &str, leeway_seconds: u64) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.leeway = leeway_seconds;

        Self {
            decoding_key,
            validation,
        }
    }

    /// Verify signature + expiry and decode the payload.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::testing::{SECRET, sign, token_for};
    use super::*;

    fn verifier() -> TokenVerifier {
        TokenVerifier::new(SECRET, 0)
    }

    #[test]
    fn decoded_claims_equal_the_signed_payload() {
        let exp = chrono::Utc::now().timestamp() + 600;
        let payload = json!({
            "subject": 7,
            "username": "alice",
            "role_name": "instructor",
            "exp": exp,
            "nested": { "k": [1, 2, 3] },
        });

        let claims = verifier().verify(&sign(SECRET, &payload)).unwrap();

        assert_eq!(claims.role_name, "instructor");
        assert_eq!(serde_json::to_value(&claims).unwrap(), payload);
        assert_eq!(claims.extra.get("username"), Some(&json!("alice")));
    }

    #[test]
    fn exp_is_optional() {
        let token = sign(SECRET, &json!({ "role_name": "student" }));
        let claims = verifier().verify(&token).unwrap();
        assert_eq!(claims.role_name, "student");
        assert!(claims.extra.is_empty());
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = sign("another-secret", &json!({ "role_name": "admin" }));
        assert!(verifier().verify(&token).is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let exp = chrono::Utc::now().timestamp() - 120;
        let token = sign(SECRET, &json!({ "role_name": "admin", "exp": exp }));
        assert!(verifier().verify(&token).is_err());
    }

    #[test]
    fn leeway_tolerates_small_clock_skew() {
        let exp = chrono::Utc::now().timestamp() - 5;
        let token = sign(SECRET, &json!({ "role_name": "admin", "exp": exp }));
        assert!(TokenVerifier::new(SECRET, 60).verify(&token).is_ok());
    }

    #[test]
    fn rejects_token_without_role_name() {
        let token = sign(SECRET, &json!({ "username": "alice" }));
        assert!(verifier().verify(&token).is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(verifier().verify("not.a.jwt").is_err());
        assert!(verifier().verify("").is_err());

        let mut token = token_for("alice", "student");
        token.push('x');
        assert!(verifier().verify(&token).is_err());
    }

    #[test]
    fn debug_does_not_print_the_key() {
        let out = format!("{:?}", verifier());
        assert!(out.starts_with("TokenVerifier"));
        assert!(!out.contains(SECRET));
    }
}

//! Verification of identity-provider bearer tokens.
//!
//! The platform issues no credentials of its own: callers present an
//! HS256-signed token minted by the identity provider and this module only
//! verifies it. [`generate_token`] exists for integration tests and local
//! tooling that need to mint a caller identity.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by every verified token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the provider-assigned stable user id.
    pub sub: String,
    /// Email; the ownership key for movies.
    pub email: String,
    /// Optional display name.
    pub name: Option<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Configuration for token verification.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret shared with the identity provider.
    pub secret: String,
    /// Token lifetime in minutes for locally minted tokens (default: 60).
    pub token_expiry_mins: i64,
}

/// Default token expiry in minutes.
const DEFAULT_TOKEN_EXPIRY_MINS: i64 = 60;

impl JwtConfig {
    /// Load from `JWT_SECRET` and `JWT_EXPIRY_MINS` environment variables.
    ///
    /// Panics when `JWT_SECRET` is unset -- starting without a verification
    /// key would silently reject every authenticated request.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        let token_expiry_mins = std::env::var("JWT_EXPIRY_MINS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_EXPIRY_MINS);

        Self {
            secret,
            token_expiry_mins,
        }
    }
}

/// Verify a bearer token's signature and expiry, returning its claims.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// Mint a token for the given identity. Test/tooling helper.
pub fn generate_token(
    uid: &str,
    email: &str,
    name: Option<&str>,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let claims = Claims {
        sub: uid.to_string(),
        email: email.to_string(),
        name: name.map(str::to_string),
        exp: (now + chrono::Duration::minutes(config.token_expiry_mins)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            token_expiry_mins: 5,
        }
    }

    #[test]
    fn round_trip_preserves_identity() {
        let config = test_config();
        let token = generate_token("uid-1", "a@example.com", Some("Ada"), &config).unwrap();
        let claims = validate_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "uid-1");
        assert_eq!(claims.email, "a@example.com");
        assert_eq!(claims.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let config = test_config();
        let token = generate_token("uid-1", "a@example.com", None, &config).unwrap();

        let other = JwtConfig {
            secret: "different".to_string(),
            token_expiry_mins: 5,
        };
        assert!(validate_token(&token, &other).is_err());
    }
}

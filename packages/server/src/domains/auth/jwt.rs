use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::MemberId;

/// Tokens are valid for seven days
const TOKEN_LIFETIME_DAYS: i64 = 7;

/// JWT Claims - data stored in the token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,         // Subject (member_id as string)
    pub member_id: MemberId, // Member id
    pub exp: i64,            // Expiration timestamp
    pub iat: i64,            // Issued at timestamp
    pub iss: String,         // Issuer
    pub jti: String,         // JWT ID (unique token identifier)
}

/// JWT Service - creates and verifies JWT tokens.
///
/// Tokens only prove identity. Role and ban state are read from the member
/// record on every request, so a ban takes effect without revoking tokens.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtService {
    /// Create new JWT service with secret and issuer
    pub fn new(secret: &str, issuer: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
        }
    }

    /// Create a new JWT token for a member
    pub fn create_token(&self, member_id: MemberId) -> Result<String> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::days(TOKEN_LIFETIME_DAYS);

        let claims = Claims {
            sub: member_id.to_string(),
            member_id,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a JWT token
    ///
    /// Returns claims if token is valid and not expired
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(Into::into)
    }
}

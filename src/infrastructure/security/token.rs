// src/infrastructure/security/token.rs
//
// Bearer tokens are an HMAC-SHA256 signed JSON claims blob:
// base64url(claims) "." base64url(signature). No key rotation and no
// revocation; a token is valid until it expires.
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::time::Duration;

type HmacSha256 = Hmac<Sha256>;

const MIN_SECRET_BYTES: usize = 32;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i64,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    iat: i64,
    exp: i64,
}

pub struct HmacTokenManager {
    key: Vec<u8>,
    ttl: chrono::Duration,
}

impl HmacTokenManager {
    pub fn new(secret: &str, ttl: Duration) -> ApplicationResult<Self> {
        if secret.len() < MIN_SECRET_BYTES {
            return Err(ApplicationError::infrastructure(format!(
                "session secret must be at least {MIN_SECRET_BYTES} bytes"
            )));
        }
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self {
            key: secret.as_bytes().to_vec(),
            ttl,
        })
    }

    fn sign(&self, payload: &[u8]) -> ApplicationResult<Vec<u8>> {
        let mut mac = HmacSha256::new_from_slice(&self.key)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        mac.update(payload);
        Ok(mac.finalize().into_bytes().to_vec())
    }

    fn verify_signature(&self, payload: &[u8], signature: &[u8]) -> ApplicationResult<()> {
        let mut mac = HmacSha256::new_from_slice(&self.key)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        mac.update(payload);
        mac.verify_slice(signature)
            .map_err(|_| ApplicationError::unauthorized("invalid token"))
    }
}

#[async_trait]
impl TokenManager for HmacTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = Utc::now();
        let expires_at = issued_at + self.ttl;

        let claims = Claims {
            sub: subject.user_id.into(),
            email: subject.email,
            name: subject.name,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };
        let payload = serde_json::to_vec(&claims)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let signature = self.sign(&payload)?;

        let token = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(&signature)
        );

        Ok(AuthTokenDto {
            token,
            issued_at,
            expires_at,
            expires_in: self.ttl.num_seconds(),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let (payload_b64, signature_b64) = token
            .split_once('.')
            .ok_or_else(|| ApplicationError::unauthorized("malformed token"))?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;

        self.verify_signature(&payload, &signature)?;

        let claims: Claims = serde_json::from_slice(&payload)
            .map_err(|_| ApplicationError::unauthorized("malformed token"))?;

        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or_else(|| ApplicationError::unauthorized("malformed token"))?;
        if Utc::now() >= expires_at {
            return Err(ApplicationError::unauthorized("token expired"));
        }
        let issued_at = DateTime::<Utc>::from_timestamp(claims.iat, 0)
            .ok_or_else(|| ApplicationError::unauthorized("malformed token"))?;

        Ok(AuthenticatedUser {
            id: UserId::new(claims.sub)?,
            email: claims.email,
            name: claims.name,
            issued_at,
            expires_at,
        })
    }
}

//! Firebase ID token verification.
//!
//! Tokens are RS256 JWTs signed by keys published as a JWK set. The set is fetched with the
//! shared reqwest client and cached for an hour; a token naming an unknown key id forces a
//! refresh before it is rejected.

use async_trait::async_trait;
use jsonwebtoken::{decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;

use crate::server::error::{auth::AuthError, AppError};

const FIREBASE_JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";
const FIREBASE_ISSUER_PREFIX: &str = "https://securetoken.google.com/";
const JWKS_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Claims read from a verified ID token.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IdTokenClaims {
    /// Identity provider UID of the user.
    pub sub: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Verifies identity tokens presented at phone login.
#[async_trait]
pub trait IdTokenVerifier: Send + Sync {
    /// # Returns
    /// - `Ok(IdTokenClaims)` - Token is authentic and unexpired
    /// - `Err(AppError::AuthErr(InvalidIdToken))` - Token rejected
    /// - `Err(AppError)` - Signing keys could not be fetched
    async fn verify(&self, id_token: &str) -> Result<IdTokenClaims, AppError>;
}

struct CachedJwks {
    keys: JwkSet,
    fetched_at: Instant,
}

/// Verifier for tokens issued to one Firebase project.
pub struct FirebaseTokenVerifier {
    http_client: reqwest::Client,
    project_id: String,
    jwks: Arc<RwLock<Option<CachedJwks>>>,
}

impl FirebaseTokenVerifier {
    pub fn new(http_client: reqwest::Client, project_id: String) -> Self {
        Self {
            http_client,
            project_id,
            jwks: Arc::new(RwLock::new(None)),
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[format!("{}{}", FIREBASE_ISSUER_PREFIX, self.project_id)]);
        validation.set_audience(&[self.project_id.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation
    }

    /// Finds the decoding key for `kid`, refreshing the key set when stale or missing it.
    async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, AppError> {
        {
            let cache = self.jwks.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.fetched_at.elapsed() < JWKS_CACHE_TTL {
                    if let Some(key) = Self::find_key(&cached.keys, kid)? {
                        return Ok(key);
                    }
                }
            }
        }

        let keys = self.fetch_jwks().await?;
        let key = Self::find_key(&keys, kid)?;

        *self.jwks.write().await = Some(CachedJwks {
            keys,
            fetched_at: Instant::now(),
        });

        key.ok_or_else(|| AuthError::InvalidIdToken(format!("unknown key id {}", kid)).into())
    }

    fn find_key(keys: &JwkSet, kid: &str) -> Result<Option<DecodingKey>, AppError> {
        let Some(jwk) = keys.find(kid) else {
            return Ok(None);
        };

        let key = DecodingKey::from_jwk(jwk)
            .map_err(|e| AuthError::InvalidIdToken(format!("unusable key {}: {}", kid, e)))?;

        Ok(Some(key))
    }

    async fn fetch_jwks(&self) -> Result<JwkSet, AppError> {
        let keys = self
            .http_client
            .get(FIREBASE_JWKS_URL)
            .send()
            .await?
            .error_for_status()?
            .json::<JwkSet>()
            .await?;

        Ok(keys)
    }
}

#[async_trait]
impl IdTokenVerifier for FirebaseTokenVerifier {
    async fn verify(&self, id_token: &str) -> Result<IdTokenClaims, AppError> {
        let header =
            decode_header(id_token).map_err(|e| AuthError::InvalidIdToken(e.to_string()))?;

        if header.alg != Algorithm::RS256 {
            return Err(AuthError::InvalidIdToken(format!("unexpected alg {:?}", header.alg)).into());
        }

        let kid = header
            .kid
            .ok_or_else(|| AuthError::InvalidIdToken("missing key id".to_string()))?;

        let key = self.decoding_key(&kid).await?;

        let data = decode::<IdTokenClaims>(id_token, &key, &self.validation())
            .map_err(|e| AuthError::InvalidIdToken(e.to_string()))?;

        if data.claims.sub.is_empty() {
            return Err(AuthError::InvalidIdToken("empty subject".to_string()).into());
        }

        Ok(data.claims)
    }
}

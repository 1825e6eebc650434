//! Phone verification code store.
//!
//! Codes are issued per phone number and kept in memory with a five-minute TTL. A code is
//! consumed on successful verification and discarded after `MAX_VERIFICATION_ATTEMPTS`
//! wrong guesses. No SMS is dispatched; the code reaches the user through whatever
//! channel fronts this service, or is the configured fixed code in development.

use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for verification codes in seconds.
pub const VERIFICATION_CODE_TTL_SECONDS: u64 = 300;

/// Wrong guesses allowed per issued code before it is discarded.
pub const MAX_VERIFICATION_ATTEMPTS: u32 = 5;

const CODE_LENGTH: usize = 6;

#[derive(Clone)]
struct VerificationCode {
    code: String,
    expires_at: Instant,
    failed_attempts: u32,
}

impl VerificationCode {
    fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ttl,
            failed_attempts: 0,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Issues and checks one-time verification codes keyed by phone number.
///
/// Cloning shares the underlying store.
#[derive(Clone)]
pub struct VerificationCodeService {
    codes: Arc<RwLock<HashMap<String, VerificationCode>>>,
    /// Code handed out for every phone number; `None` generates random codes.
    fixed_code: Option<String>,
    ttl: Duration,
}

impl VerificationCodeService {
    /// Creates a store issuing `fixed_code`, or random six-digit codes when `None`.
    pub fn new(fixed_code: Option<String>) -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
            fixed_code,
            ttl: Duration::from_secs(VERIFICATION_CODE_TTL_SECONDS),
        }
    }

    #[cfg(test)]
    fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Issues a code for `phone_number`, replacing any earlier one.
    ///
    /// Expired codes of other numbers are dropped on the way.
    ///
    /// # Returns
    /// - `String` - The issued code
    pub async fn issue(&self, phone_number: &str) -> String {
        let code = match &self.fixed_code {
            Some(code) => code.clone(),
            None => Self::generate_random_code(),
        };

        let mut codes = self.codes.write().await;
        codes.retain(|_, stored| !stored.is_expired());
        codes.insert(
            phone_number.to_string(),
            VerificationCode::new(code.clone(), self.ttl),
        );

        code
    }

    /// Checks `input` against the code issued for `phone_number`.
    ///
    /// A matching code is consumed. An expired code is discarded and fails. A mismatch
    /// keeps the code until `MAX_VERIFICATION_ATTEMPTS` wrong guesses, after which it is
    /// discarded and a new one has to be issued.
    ///
    /// # Returns
    /// - `true` - Code matched and was still valid
    /// - `false` - No code, expired code or mismatch
    pub async fn validate_and_consume(&self, phone_number: &str, input: &str) -> bool {
        let mut codes = self.codes.write().await;

        let Some(stored) = codes.get_mut(phone_number) else {
            return false;
        };

        if stored.is_expired() {
            codes.remove(phone_number);
            return false;
        }

        if stored.code != input {
            stored.failed_attempts += 1;
            if stored.failed_attempts >= MAX_VERIFICATION_ATTEMPTS {
                codes.remove(phone_number);
                tracing::debug!("Discarded verification code after too many wrong guesses");
            }
            return false;
        }

        codes.remove(phone_number);
        true
    }

    fn generate_random_code() -> String {
        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
            .collect()
    }
}

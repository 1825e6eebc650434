use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    service::auth::{
        code::VerificationCodeService,
        firebase::{IdTokenClaims, IdTokenVerifier},
        AuthService,
    },
};
use async_trait::async_trait;
use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};

mod phone_login;
mod verify_code;

/// Verifier accepting tokens of the form `valid:<uid>` or `valid:<uid>:<phone>`.
struct StubVerifier;

#[async_trait]
impl IdTokenVerifier for StubVerifier {
    async fn verify(&self, id_token: &str) -> Result<IdTokenClaims, AppError> {
        let mut parts = id_token.split(':');

        match (parts.next(), parts.next(), parts.next()) {
            (Some("valid"), Some(uid), phone_number) => Ok(IdTokenClaims {
                sub: uid.to_string(),
                phone_number: phone_number.map(str::to_string),
            }),
            _ => Err(AuthError::InvalidIdToken("stub rejected token".to_string()).into()),
        }
    }
}

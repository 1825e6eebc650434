//! Authentication service.
//!
//! Two ways in: a verification code sent to a phone number, or an identity token issued by
//! Firebase phone authentication. Both resolve to a local user, creating one on first login.

pub mod code;
pub mod firebase;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{is_unique_violation, level::LevelRepository, user::UserRepository},
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{CreateUserParam, User},
    service::auth::{code::VerificationCodeService, firebase::IdTokenVerifier},
    util::parse::validate_phone_number,
};

/// Digits of the phone number kept in a generated default name.
const DEFAULT_NAME_DIGITS: usize = 4;

/// Outcome of a phone login.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneLogin {
    pub user: User,
    /// Whether the account was created by this login.
    pub created: bool,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    verification_codes: &'a VerificationCodeService,
    id_token_verifier: &'a dyn IdTokenVerifier,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        verification_codes: &'a VerificationCodeService,
        id_token_verifier: &'a dyn IdTokenVerifier,
    ) -> Self {
        Self {
            db,
            verification_codes,
            id_token_verifier,
        }
    }

    /// Issues a verification code for `phone_number`.
    ///
    /// # Returns
    /// - `Ok(())` - Code issued
    /// - `Err(AppError::BadRequest)` - Phone number empty or too long
    pub async fn send_code(&self, phone_number: &str) -> Result<(), AppError> {
        let phone_number = validate_phone_number(phone_number)?;

        self.verification_codes.issue(phone_number).await;

        tracing::info!("Issued verification code for phone ending {}", phone_tail(phone_number));

        Ok(())
    }

    /// Checks a verification code and returns the user owning the phone number.
    ///
    /// A user is created on first successful verification.
    ///
    /// # Returns
    /// - `Ok(User)` - Verified user
    /// - `Err(AppError::BadRequest)` - Invalid phone number
    /// - `Err(AppError::AuthErr(InvalidVerificationCode))` - Wrong, expired or used code
    pub async fn verify_code(&self, phone_number: &str, code: &str) -> Result<User, AppError> {
        let phone_number = validate_phone_number(phone_number)?;

        if !self
            .verification_codes
            .validate_and_consume(phone_number, code.trim())
            .await
        {
            return Err(AuthError::InvalidVerificationCode.into());
        }

        let (user, _) = self.find_or_create(phone_number, None).await?;

        Ok(user)
    }

    /// Logs in with an identity token.
    ///
    /// The user is looked up by token subject. Failing that, an account with the token's
    /// phone number is linked to the subject if it has none yet; otherwise a new account
    /// is created, which requires the phone number claim.
    ///
    /// # Returns
    /// - `Ok(PhoneLogin)` - Logged-in user and whether it was created
    /// - `Err(AppError::AuthErr(InvalidIdToken))` - Token rejected
    /// - `Err(AppError::AuthErr(MissingPhoneClaim))` - New user without phone claim
    /// - `Err(AppError::Conflict)` - Phone number bound to another identity
    pub async fn phone_login(&self, id_token: &str) -> Result<PhoneLogin, AppError> {
        let claims = self.id_token_verifier.verify(id_token).await?;
        let user_repo = UserRepository::new(self.db);

        if let Some(user) = user_repo.find_by_firebase_uid(&claims.sub).await? {
            return Ok(PhoneLogin {
                user,
                created: false,
            });
        }

        let phone_number = claims
            .phone_number
            .as_deref()
            .ok_or_else(|| AuthError::MissingPhoneClaim(claims.sub.clone()))?;
        let phone_number = validate_phone_number(phone_number)?;

        let (user, created) = self
            .find_or_create(phone_number, Some(claims.sub.clone()))
            .await?;
        if created {
            return Ok(PhoneLogin { user, created });
        }

        let user = self.link_identity(user, claims.sub).await?;

        Ok(PhoneLogin {
            user,
            created: false,
        })
    }

    /// Attaches the token subject `sub` to a user found by phone number.
    ///
    /// Covers accounts made by code verification, including one created concurrently
    /// with this login.
    ///
    /// # Returns
    /// - `Ok(User)` - User carrying `sub`
    /// - `Err(AppError::Conflict)` - Phone number bound to another identity
    async fn link_identity(&self, user: User, sub: String) -> Result<User, AppError> {
        match user.firebase_uid.as_deref() {
            Some(uid) if uid == sub => Ok(user),
            Some(_) => Err(AppError::Conflict(
                "Phone number is linked to another account".to_string(),
            )),
            None => {
                UserRepository::new(self.db)
                    .link_firebase_uid(user.id, sub.clone())
                    .await?;
                tracing::info!("Linked identity token subject to user {}", user.id);

                Ok(User {
                    firebase_uid: Some(sub),
                    ..user
                })
            }
        }
    }

    /// Fetches the user with `phone_number` or creates one at the lowest tier.
    ///
    /// A concurrent creation of the same phone number is resolved by re-reading.
    async fn find_or_create(
        &self,
        phone_number: &str,
        firebase_uid: Option<String>,
    ) -> Result<(User, bool), AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(user) = user_repo.find_by_phone_number(phone_number).await? {
            return Ok((user, false));
        }

        let level = LevelRepository::new(self.db)
            .find_lowest()
            .await?
            .ok_or(InternalError::NoLevelsSeeded)?;

        let param = CreateUserParam {
            name: default_user_name(phone_number),
            phone_number: phone_number.to_string(),
            firebase_uid,
            level_id: level.id,
        };

        match user_repo.create(param).await {
            Ok(user) => {
                tracing::info!("Created user {} on first login", user.id);
                Ok((user, true))
            }
            Err(err) if is_unique_violation(&err) => user_repo
                .find_by_phone_number(phone_number)
                .await?
                .map(|user| (user, false))
                .ok_or_else(|| AppError::from(err)),
            Err(err) => Err(err.into()),
        }
    }
}

fn phone_tail(phone_number: &str) -> &str {
    let start = phone_number
        .char_indices()
        .rev()
        .nth(DEFAULT_NAME_DIGITS - 1)
        .map(|(index, _)| index)
        .unwrap_or(0);

    &phone_number[start..]
}

/// Name given to accounts created by login, such as `player-5678`.
fn default_user_name(phone_number: &str) -> String {
    format!("player-{}", phone_tail(phone_number))
}

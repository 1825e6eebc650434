use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{
            PhoneLoginDto, PhoneLoginResponseDto, SendCodeDto, VerifyCodeDto,
            VerifyCodeResponseDto,
        },
    },
    server::{
        error::AppError, middleware::session::AuthSession, service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

fn auth_service(state: &AppState) -> AuthService<'_> {
    AuthService::new(
        &state.db,
        &state.verification_code_service,
        state.id_token_verifier.as_ref(),
    )
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{} is required", field)))
}

/// Issue a verification code for a phone number.
///
/// No message is dispatched; the code is only held server side for five minutes.
///
/// # Returns
/// - `200 OK` - Code issued
/// - `400 Bad Request` - Missing or malformed phone number
#[utoipa::path(
    post,
    path = "/api/auth/send-code/",
    tag = AUTH_TAG,
    request_body = SendCodeDto,
    responses(
        (status = 200, description = "Verification code issued", body = MessageDto),
        (status = 400, description = "Missing or malformed phone number", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_code(
    State(state): State<AppState>,
    payload: Result<Json<SendCodeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let phone_number = required(payload.phone_number, "Phone number")?;

    auth_service(&state).send_code(&phone_number).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Verification code sent successfully")),
    ))
}

/// Check a verification code and log the matching user in.
///
/// A user is created for the phone number on first successful verification. The code
/// is consumed whether or not a user had to be created.
///
/// # Arguments
/// - `state` - Application state containing the database connection and code store
/// - `session` - Session bound to the user on success
/// - `payload` - Phone number and the code received for it
///
/// # Returns
/// - `200 OK` - Verified; session now belongs to the returned user id
/// - `400 Bad Request` - Missing field or wrong, expired or already used code
#[utoipa::path(
    post,
    path = "/api/auth/verify-code/",
    tag = AUTH_TAG,
    request_body = VerifyCodeDto,
    responses(
        (status = 200, description = "Verification successful", body = VerifyCodeResponseDto),
        (status = 400, description = "Missing field or invalid code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_code(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<VerifyCodeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let phone_number = required(payload.phone_number, "Phone number")?;
    let code = required(payload.verification_code, "Verification code")?;

    let user = auth_service(&state)
        .verify_code(&phone_number, &code)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(VerifyCodeResponseDto {
            message: "Verification successful".to_string(),
            user_id: user.id,
        }),
    ))
}

/// Log in with a Firebase phone authentication ID token.
///
/// # Arguments
/// - `state` - Application state containing the database connection and token verifier
/// - `session` - Session bound to the user on success
/// - `payload` - ID token issued by the identity provider
///
/// # Returns
/// - `200 OK` - `"User created"` on first login, `"Login successful"` afterwards
/// - `400 Bad Request` - Missing or invalid token, or a new user without a phone claim
#[utoipa::path(
    post,
    path = "/api/auth/phone-login/",
    tag = AUTH_TAG,
    request_body = PhoneLoginDto,
    responses(
        (status = 200, description = "Logged in", body = PhoneLoginResponseDto),
        (status = 400, description = "Missing or invalid ID token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn phone_login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<PhoneLoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let id_token = required(payload.id_token, "ID token")?;

    let login = auth_service(&state).phone_login(&id_token).await?;

    AuthSession::new(&session).set_user_id(login.user.id).await?;

    let message = if login.created {
        "User created"
    } else {
        "Login successful"
    };

    Ok((
        StatusCode::OK,
        Json(PhoneLoginResponseDto {
            message: message.to_string(),
            user_id: login.user.id,
            phone_number: login.user.phone_number,
        }),
    ))
}

/// Clear the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout/",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out"))))
}

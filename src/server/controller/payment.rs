use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        payment::{MakePaymentDto, MakePaymentResponseDto, PaymentDto, TransitionPaymentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::payment::{MakePaymentParam, TransitionPaymentParam},
        service::payment::PaymentService,
        state::AppState,
        util::parse::{parse_amount, parse_payment_status},
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// List a user's payments.
///
/// # Access Control
/// - `Owner` - Only the user themself
#[utoipa::path(
    get,
    path = "/api/payments/{user_id}/",
    tag = PAYMENT_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Payments of the user", body = Vec<PaymentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the payment owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payments(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let payments = PaymentService::new(&state.db).get_payments(user_id).await?;
    let dtos: Vec<PaymentDto> = payments.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Start a bank transfer payment.
///
/// The payment is created as `Pending`. `amount` must be positive with at most two
/// decimal places and eight integer digits.
///
/// # Access Control
/// - `Owner` - Only the user themself
///
/// # Returns
/// - `200 OK` - Payment created
/// - `400 Bad Request` - Invalid amount
#[utoipa::path(
    post,
    path = "/api/payments/{user_id}/make/",
    tag = PAYMENT_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = MakePaymentDto,
    responses(
        (status = 200, description = "Payment initiated", body = MakePaymentResponseDto),
        (status = 400, description = "Invalid amount", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the payment owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn make_payment(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    payload: Result<Json<MakePaymentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let amount = parse_amount(&payload.amount)?;
    let payment = PaymentService::new(&state.db)
        .make(MakePaymentParam { user_id, amount })
        .await?;

    Ok((
        StatusCode::OK,
        Json(MakePaymentResponseDto {
            message: "Payment initiated".to_string(),
            payment_id: payment.id,
        }),
    ))
}

/// Move a payment to another status.
///
/// Allowed: `Pending` to `Completed` or `Failed`, and `Completed` to `Refunded`.
///
/// # Access Control
/// - `Owner` - Only the user themself
///
/// The payer can settle and refund their own payment. This guard stands in until an
/// operator role exists to drive payment settlement.
///
/// # Returns
/// - `200 OK` - Payment with its new status
/// - `400 Bad Request` - Unknown status or transition not allowed
/// - `404 Not Found` - No such payment for this user
#[utoipa::path(
    post,
    path = "/api/payments/{user_id}/{payment_id}/transition/",
    tag = PAYMENT_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("payment_id" = i32, Path, description = "Payment ID")
    ),
    request_body = TransitionPaymentDto,
    responses(
        (status = 200, description = "Payment updated", body = PaymentDto),
        (status = 400, description = "Transition not allowed", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the payment owner", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn transition_payment(
    State(state): State<AppState>,
    session: Session,
    Path((user_id, payment_id)): Path<(i32, i32)>,
    payload: Result<Json<TransitionPaymentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner(user_id)])
        .await?;

    let status = parse_payment_status(payload.status.trim())?;
    let payment = PaymentService::new(&state.db)
        .transition(TransitionPaymentParam {
            user_id,
            payment_id,
            status,
        })
        .await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

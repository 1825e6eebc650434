use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{PaymentMethod, PaymentStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentDto {
    pub payment_id: i32,
    #[schema(value_type = String, example = "15000.00")]
    pub amount: Decimal,
    #[schema(value_type = String, example = "Pending")]
    pub status: PaymentStatus,
    #[schema(value_type = String, example = "Bank Transfer")]
    pub method: PaymentMethod,
    pub date: DateTime<Utc>,
}

/// Request body for starting a payment.
///
/// `amount` may be sent as a JSON number or a decimal string.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MakePaymentDto {
    #[serde(default)]
    #[schema(value_type = String, example = "15000.00")]
    pub amount: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MakePaymentResponseDto {
    pub message: String,
    pub payment_id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransitionPaymentDto {
    /// Target status: `Completed`, `Failed` or `Refunded`.
    pub status: String,
}

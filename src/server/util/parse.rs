//! Parsing of loosely typed request values.
//!
//! Request bodies arrive as JSON; a few fields need stricter checks than serde offers, such
//! as rejecting `true` or `"10"` where an integer is required.

use entity::sea_orm_active_enums::PaymentStatus;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use url::Url;

use crate::server::error::AppError;

/// Longest phone number accepted, in characters.
pub const MAX_PHONE_NUMBER_LEN: usize = 15;

/// Payment amounts must stay below `10^8` to fit ten digits with two decimal places.
const MAX_AMOUNT_INTEGER_DIGITS: u32 = 8;
const MAX_AMOUNT_SCALE: u32 = 2;

/// Parses a point delta from a JSON value.
///
/// # Returns
/// - `Ok(i32)` - Non-zero integer delta
/// - `Err(AppError::BadRequest)` - Missing, not an integer (bools, floats and strings
///   included), zero or outside the `i32` range
pub fn parse_points(value: &Value) -> Result<i32, AppError> {
    let points = match value {
        Value::Number(number) => number.as_i64(),
        _ => None,
    }
    .ok_or_else(|| AppError::BadRequest("Points must be an integer".to_string()))?;

    if points == 0 {
        return Err(AppError::BadRequest("Points must not be zero".to_string()));
    }

    i32::try_from(points).map_err(|_| AppError::BadRequest("Points out of range".to_string()))
}

/// Parses a payment amount given as a JSON number or string.
///
/// # Returns
/// - `Ok(Decimal)` - Positive amount with at most 2 decimal places and 8 integer digits
/// - `Err(AppError::BadRequest)` - Missing, malformed or out of range
pub fn parse_amount(value: &Value) -> Result<Decimal, AppError> {
    let invalid = || AppError::BadRequest("Invalid amount".to_string());

    let amount = match value {
        Value::Number(number) => Decimal::from_str(&number.to_string()).ok(),
        Value::String(text) => Decimal::from_str(text.trim()).ok(),
        _ => None,
    }
    .ok_or_else(invalid)?
    .normalize();

    if amount <= Decimal::ZERO {
        return Err(AppError::BadRequest(
            "Amount must be greater than zero".to_string(),
        ));
    }
    if amount.scale() > MAX_AMOUNT_SCALE {
        return Err(AppError::BadRequest(
            "Amount may have at most 2 decimal places".to_string(),
        ));
    }
    if amount.trunc() >= Decimal::from(10_i64.pow(MAX_AMOUNT_INTEGER_DIGITS)) {
        return Err(AppError::BadRequest("Amount is too large".to_string()));
    }

    Ok(amount)
}

/// Parses a payment status name such as `Completed`.
pub fn parse_payment_status(value: &str) -> Result<PaymentStatus, AppError> {
    match value {
        "Pending" => Ok(PaymentStatus::Pending),
        "Completed" => Ok(PaymentStatus::Completed),
        "Failed" => Ok(PaymentStatus::Failed),
        "Refunded" => Ok(PaymentStatus::Refunded),
        other => Err(AppError::BadRequest(format!(
            "Unknown payment status: {}",
            other
        ))),
    }
}

/// Checks a phone number is present and short enough to store.
///
/// # Returns
/// - `Ok(&str)` - Trimmed phone number
/// - `Err(AppError::BadRequest)` - Empty or longer than 15 characters
pub fn validate_phone_number(phone_number: &str) -> Result<&str, AppError> {
    let phone_number = phone_number.trim();

    if phone_number.is_empty() {
        return Err(AppError::BadRequest("Phone number is required".to_string()));
    }
    if phone_number.chars().count() > MAX_PHONE_NUMBER_LEN {
        return Err(AppError::BadRequest("Phone number is too long".to_string()));
    }

    Ok(phone_number)
}

/// Checks a profile picture is an absolute http(s) URL.
pub fn validate_profile_picture_url(value: &str) -> Result<String, AppError> {
    let url = Url::parse(value.trim())
        .map_err(|_| AppError::BadRequest("Invalid profile picture URL".to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        _ => Err(AppError::BadRequest(
            "Profile picture must be an http or https URL".to_string(),
        )),
    }
}

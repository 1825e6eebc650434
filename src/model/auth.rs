use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendCodeDto {
    pub phone_number: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyCodeDto {
    pub phone_number: Option<String>,
    pub verification_code: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyCodeResponseDto {
    pub message: String,
    pub user_id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PhoneLoginDto {
    pub id_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PhoneLoginResponseDto {
    /// `"User created"` on first login, `"Login successful"` afterwards.
    pub message: String,
    pub user_id: i32,
    pub phone_number: String,
}

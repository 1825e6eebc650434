use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Rank tier names, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum LevelName {
    #[sea_orm(string_value = "Novice")]
    Novice,
    #[sea_orm(string_value = "Rookie")]
    Rookie,
    #[sea_orm(string_value = "Professional")]
    Professional,
    #[sea_orm(string_value = "Elite")]
    Elite,
    #[sea_orm(string_value = "Maestro")]
    Maestro,
    #[sea_orm(string_value = "Legend")]
    Legend,
}

/// Badge color for each tier, stored as a hex code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(7))")]
pub enum LevelColor {
    #[sea_orm(string_value = "#FF0000")]
    #[serde(rename = "#FF0000")]
    Red,
    #[sea_orm(string_value = "#000080")]
    #[serde(rename = "#000080")]
    Navy,
    #[sea_orm(string_value = "#FB36FF")]
    #[serde(rename = "#FB36FF")]
    Pink,
    #[sea_orm(string_value = "#9F09AC")]
    #[serde(rename = "#9F09AC")]
    Purple,
    #[sea_orm(string_value = "#000000")]
    #[serde(rename = "#000000")]
    Black,
    #[sea_orm(string_value = "#D1A722")]
    #[serde(rename = "#D1A722")]
    Gold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[sea_orm(string_value = "seoul")]
    Seoul,
    #[sea_orm(string_value = "gyeonggi")]
    Gyeonggi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[sea_orm(string_value = "male")]
    Male,
    #[sea_orm(string_value = "female")]
    Female,
    #[sea_orm(string_value = "mixed")]
    Mixed,
}

/// Lifecycle of a game. `Finished` means the roster is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(15))")]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    #[sea_orm(string_value = "upcoming")]
    Upcoming,
    #[sea_orm(string_value = "in-progress")]
    InProgress,
    #[sea_orm(string_value = "finished")]
    Finished,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "lowercase")]
pub enum PointsLog {
    #[sea_orm(string_value = "earned")]
    Earned,
    #[sea_orm(string_value = "deducted")]
    Deducted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "lowercase")]
pub enum MissionType {
    #[sea_orm(string_value = "individual")]
    Individual,
    #[sea_orm(string_value = "team")]
    Team,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum PaymentStatus {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Completed")]
    Completed,
    #[sea_orm(string_value = "Failed")]
    Failed,
    #[sea_orm(string_value = "Refunded")]
    Refunded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum PaymentMethod {
    #[sea_orm(string_value = "Bank Transfer")]
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum ApplyStatus {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Accepted")]
    Accepted,
    #[sea_orm(string_value = "Rejected")]
    Rejected,
    #[sea_orm(string_value = "Cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    #[sea_orm(string_value = "game_notification")]
    GameNotification,
    #[sea_orm(string_value = "system_notification")]
    SystemNotification,
    #[sea_orm(string_value = "other")]
    Other,
}

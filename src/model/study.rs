use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StartStudyDto {
    pub category_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StartStudyResponseDto {
    pub session_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LevelUpDto {
    pub new_level: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StopStudyResponseDto {
    pub duration_seconds: i64,
    /// Present only when the stop caused at least one level-up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_up: Option<LevelUpDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSessionDto {
    pub session_id: i32,
    pub category_id: Option<i32>,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSessionDto {
    pub active_session: Option<ActiveSessionDto>,
}

/// Total studied seconds for the current local day and week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudySummaryDto {
    pub today: i64,
    pub week: i64,
}

/// Parallel label and value series for charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudyChartDto {
    pub labels: Vec<String>,
    pub seconds: Vec<i64>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{PerformanceMetrics, PlayStyle, PotentialAnalysis};
use crate::domain::RankStanding;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub summoner_input: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub game_name: String,
    pub tag_line: String,
    pub puuid: String,
    pub summoner_level: Option<i64>,
    pub profile_icon_id: Option<i64>,
}

/// Potential analysis plus the data it was computed from
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub potential: PotentialAnalysis,
    pub player: PlayerProfile,
    pub rank: Option<RankStanding>,
    pub metrics: PerformanceMetrics,
    pub playstyle: PlayStyle,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

use axum::http::StatusCode;
use thiserror::Error;

/// Failures talking to the Riot API
#[derive(Debug, Error)]
pub enum RiotApiError {
    #[error("RIOT_API_KEY is not set")]
    MissingApiKey,

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("rate limited by Riot API")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Riot API rejected the API key (401)")]
    Unauthorized,

    #[error("Riot API denied access (403), the key may be expired")]
    Forbidden,

    #[error("Riot API returned status {status} for {resource}")]
    Upstream { status: u16, resource: String },

    #[error("failed to reach Riot API: {0}")]
    Network(#[source] reqwest::Error),

    #[error("failed to decode {resource}: {source}")]
    Decode {
        resource: String,
        #[source]
        source: reqwest::Error,
    },
}

impl RiotApiError {
    /// Map a non-success upstream status to its typed error
    pub fn from_status(status: StatusCode, retry_after_secs: Option<u64>, resource: &str) -> Self {
        match status {
            StatusCode::NOT_FOUND => Self::NotFound {
                resource: resource.to_string(),
            },
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited { retry_after_secs },
            other => Self::Upstream {
                status: other.as_u16(),
                resource: resource.to_string(),
            },
        }
    }

    /// Status code preserved from upstream, if the failure carried one
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::RateLimited { .. } => Some(429),
            Self::Upstream { status, .. } => Some(*status),
            Self::MissingApiKey | Self::Network(_) | Self::Decode { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

/// Rejected `summonerInput` values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("summoner input is empty")]
    Empty,

    #[error("game name must be 1-16 characters")]
    InvalidGameName,

    #[error("tag line must be 3-5 letters or digits")]
    InvalidTagLine,
}

/// Everything a single analysis request can fail with
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Riot(#[from] RiotApiError),
}

impl AnalyzeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Input(_) => StatusCode::BAD_REQUEST,
            Self::Riot(RiotApiError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Riot(RiotApiError::RateLimited { .. }) => StatusCode::TOO_MANY_REQUESTS,
            Self::Riot(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the end user
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Input(InputError::Empty) => "소환사 이름을 입력해주세요.",
            Self::Input(_) => "올바른 Riot ID 형식이 아닙니다. (예: 이름#KR1)",
            Self::Riot(RiotApiError::MissingApiKey) => "서버 설정 오류: API 키가 설정되지 않았습니다.",
            Self::Riot(RiotApiError::NotFound { .. }) => "소환사를 찾을 수 없습니다.",
            Self::Riot(RiotApiError::RateLimited { .. }) => {
                "요청이 너무 많습니다. 잠시 후 다시 시도해주세요."
            }
            Self::Riot(RiotApiError::Unauthorized | RiotApiError::Forbidden) => {
                "Riot API 인증에 실패했습니다."
            }
            Self::Riot(_) => "소환사 분석 중 오류가 발생했습니다.",
        }
    }
}

/// Add context to fetch errors
pub fn fetch_context(target: &str) -> String {
    format!("Failed to fetch {}", target)
}

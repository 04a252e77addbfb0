use std::env;

use crate::analysis::ScoringTables;

const MAX_MATCH_COUNT: usize = 20;

#[derive(Debug, Clone)]
pub struct RiotSettings {
    pub api_key: Option<String>,
    pub platform: String,
    pub region: String,
    pub default_tag_line: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub match_detail_delay_ms: u64,
    pub match_count: usize,
    pub queue: Option<u16>,
    /// Replaces both Riot hosts, e.g. a local proxy or stub server
    pub api_base_url: Option<String>,
}

impl Default for RiotSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            platform: "kr".to_string(),
            region: "asia".to_string(),
            default_tag_line: "KR1",
            user_agent: "SummonerPotential/1.0",
            timeout_secs: 10,
            match_detail_delay_ms: 1200, // stays under 100 req / 2 min
            match_count: MAX_MATCH_COUNT,
            queue: None,
            api_base_url: None,
        }
    }
}

impl RiotSettings {
    /// Host for summoner and league endpoints
    pub fn platform_base_url(&self) -> String {
        self.base_url_or(&self.platform)
    }

    /// Host for account and match endpoints
    pub fn regional_base_url(&self) -> String {
        self.base_url_or(&self.region)
    }

    fn base_url_or(&self, routing: &str) -> String {
        match &self.api_base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{}.api.riotgames.com", routing),
        }
    }

    fn apply_env(mut self) -> Self {
        self.api_key = read_var("RIOT_API_KEY");
        if let Some(platform) = read_var("RIOT_PLATFORM") {
            self.platform = platform.to_lowercase();
        }
        if let Some(region) = read_var("RIOT_REGION") {
            self.region = region.to_lowercase();
        }
        if let Some(count) = read_var("RIOT_MATCH_COUNT").and_then(|v| v.parse::<usize>().ok()) {
            self.match_count = count.clamp(1, MAX_MATCH_COUNT);
        }
        self.queue = read_var("RIOT_QUEUE").and_then(|v| v.parse().ok());
        self.api_base_url = read_var("RIOT_API_BASE_URL");
        self
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub riot: RiotSettings,
    pub scoring: ScoringTables,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            riot: RiotSettings::default(),
            scoring: ScoringTables::default(),
        }
    }

    /// Defaults overridden by the process environment.
    /// A missing API key is not an error here; it surfaces when a client is built.
    pub fn from_env() -> Self {
        Self {
            riot: RiotSettings::default().apply_env(),
            scoring: ScoringTables::default(),
        }
    }
}

fn read_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hosts() {
        let settings = RiotSettings::default();
        assert_eq!(settings.platform_base_url(), "https://kr.api.riotgames.com");
        assert_eq!(settings.regional_base_url(), "https://asia.api.riotgames.com");
        assert_eq!(settings.match_count, 20);
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn test_base_url_override_replaces_both_hosts() {
        let settings = RiotSettings {
            api_base_url: Some("http://127.0.0.1:8080/".to_string()),
            ..RiotSettings::default()
        };
        assert_eq!(settings.platform_base_url(), "http://127.0.0.1:8080");
        assert_eq!(settings.regional_base_url(), "http://127.0.0.1:8080");
    }
}

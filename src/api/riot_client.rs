use log::{info, warn};
use urlencoding::encode;

use crate::config::RiotSettings;
use crate::domain::{
    AccountDto, LeagueEntryDto, MatchDto, MatchRecord, RiotId, SummonerDto,
};
use crate::errors::RiotApiError;
use crate::http::AuthenticatedClient;
use crate::rate_limiter::RateLimiter;

/// Riot Games API client covering the account, summoner, league and match endpoints
pub struct RiotClient {
    client: AuthenticatedClient,
    match_limiter: RateLimiter,
    platform_url: String,
    regional_url: String,
    match_count: usize,
    queue: Option<u16>,
}

impl RiotClient {
    /// Fails with [`RiotApiError::MissingApiKey`] when no key is configured
    pub fn new(settings: &RiotSettings) -> Result<Self, RiotApiError> {
        let api_key = settings
            .api_key
            .as_deref()
            .ok_or(RiotApiError::MissingApiKey)?;
        let client = AuthenticatedClient::new(api_key, settings.user_agent, settings.timeout_secs)?;

        Ok(Self {
            client,
            match_limiter: RateLimiter::new(settings.match_detail_delay_ms),
            platform_url: settings.platform_base_url(),
            regional_url: settings.regional_base_url(),
            match_count: settings.match_count,
            queue: settings.queue,
        })
    }

    pub async fn account_by_riot_id(&self, riot_id: &RiotId) -> Result<AccountDto, RiotApiError> {
        info!("Looking up account {}", riot_id);
        let url = self.account_url(riot_id);
        self.client.get_json(&url, "account").await
    }

    pub async fn summoner_by_puuid(&self, puuid: &str) -> Result<SummonerDto, RiotApiError> {
        let url = format!(
            "{}/lol/summoner/v4/summoners/by-puuid/{}",
            self.platform_url,
            encode(puuid)
        );
        self.client.get_json(&url, "summoner").await
    }

    pub async fn league_entries_by_summoner(
        &self,
        summoner_id: &str,
    ) -> Result<Vec<LeagueEntryDto>, RiotApiError> {
        let url = format!(
            "{}/lol/league/v4/entries/by-summoner/{}",
            self.platform_url,
            encode(summoner_id)
        );
        self.client.get_json(&url, "league entries").await
    }

    pub async fn league_entries_by_puuid(
        &self,
        puuid: &str,
    ) -> Result<Vec<LeagueEntryDto>, RiotApiError> {
        let url = format!(
            "{}/lol/league/v4/entries/by-puuid/{}",
            self.platform_url,
            encode(puuid)
        );
        self.client.get_json(&url, "league entries").await
    }

    pub async fn match_ids_by_puuid(&self, puuid: &str) -> Result<Vec<String>, RiotApiError> {
        let url = self.match_ids_url(puuid);
        self.client.get_json(&url, "match list").await
    }

    pub async fn match_by_id(&self, match_id: &str) -> Result<MatchDto, RiotApiError> {
        let url = format!(
            "{}/lol/match/v5/matches/{}",
            self.regional_url,
            encode(match_id)
        );
        self.client.get_json(&url, "match").await
    }

    /// Fetch match details one at a time with a pause between calls.
    /// A failed match is logged and skipped; rate limiting aborts the batch.
    pub async fn fetch_matches(
        &mut self,
        match_ids: &[String],
    ) -> Result<Vec<MatchRecord>, RiotApiError> {
        info!("Fetching {} match details", match_ids.len());
        self.match_limiter.reset();

        let mut records = Vec::with_capacity(match_ids.len());
        for match_id in match_ids {
            self.match_limiter.wait().await;

            match self.match_by_id(match_id).await {
                Ok(dto) => records.push(MatchRecord::from(&dto)),
                Err(e) if e.is_rate_limited() => return Err(e),
                Err(e) => warn!("Skipping match {}: {}", match_id, e),
            }
        }

        info!(
            "Fetched {}/{} matches in {} calls",
            records.len(),
            match_ids.len(),
            self.match_limiter.calls_in_batch()
        );
        Ok(records)
    }

    // --- Helper Methods ---

    fn account_url(&self, riot_id: &RiotId) -> String {
        format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.regional_url,
            encode(&riot_id.game_name),
            encode(&riot_id.tag_line)
        )
    }

    fn match_ids_url(&self, puuid: &str) -> String {
        let mut url = format!(
            "{}/lol/match/v5/matches/by-puuid/{}/ids?start=0&count={}",
            self.regional_url,
            encode(puuid),
            self.match_count
        );
        if let Some(queue) = self.queue {
            url.push_str(&format!("&queue={}", queue));
        }
        url
    }
}

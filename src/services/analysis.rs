use chrono::Utc;
use log::{info, warn};

use crate::analysis::{aggregate_metrics, evaluate_potential, summarize_playstyle};
use crate::api::RiotClient;
use crate::api::models::{AnalysisReport, PlayerProfile};
use crate::config::AppConfig;
use crate::domain::{AccountDto, RiotId, SummonerDto};
use crate::errors::AnalyzeError;
use crate::services::rank_resolver::{RankLookup, RankResolver};

/// Runs one potential analysis: Riot lookups, aggregation, scoring, text
pub struct AnalysisService<'a> {
    config: &'a AppConfig,
}

impl<'a> AnalysisService<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    pub async fn analyze(&self, summoner_input: &str) -> Result<AnalysisReport, AnalyzeError> {
        let riot_id = RiotId::parse(summoner_input, self.config.riot.default_tag_line)?;
        let mut client = RiotClient::new(&self.config.riot)?;

        info!("=== Analyzing {} ===", riot_id);

        // Step 1: Resolve the player
        let account = client.account_by_riot_id(&riot_id).await?;
        let summoner = self.fetch_summoner(&client, &account.puuid).await?;

        // Step 2: Recent matches
        let match_ids = client.match_ids_by_puuid(&account.puuid).await?;
        info!("  → Found {} recent matches", match_ids.len());
        let matches = client.fetch_matches(&match_ids).await?;

        // Step 3: Aggregate
        let metrics = aggregate_metrics(&matches, &account.puuid);
        let playstyle = summarize_playstyle(&matches, &account.puuid);
        info!(
            "  → {} matches analyzed, KDA {:.2}, win rate {:.0}%",
            metrics.games_analyzed, metrics.avg_kda, metrics.recent_win_rate
        );

        // Step 4: Rank
        let lookup = RankLookup {
            puuid: &account.puuid,
            summoner: summoner.as_ref(),
            metrics: &metrics,
            tables: &self.config.scoring,
        };
        let rank = RankResolver::new(&client).resolve(&lookup).await?;

        // Step 5: Score and narrative
        let potential = evaluate_potential(
            rank.as_ref().and_then(|r| r.official_entry()),
            &metrics,
            &playstyle,
            &self.config.scoring,
        );
        info!("=== {} scored {} ({}) ===", riot_id, potential.score, potential.trend.as_str());

        Ok(AnalysisReport {
            potential,
            player: Self::profile(&riot_id, &account, summoner.as_ref()),
            rank,
            metrics,
            playstyle,
            analyzed_at: Utc::now(),
        })
    }

    /// The summoner record only adds level and icon; losing it is not fatal
    async fn fetch_summoner(
        &self,
        client: &RiotClient,
        puuid: &str,
    ) -> Result<Option<SummonerDto>, AnalyzeError> {
        match client.summoner_by_puuid(puuid).await {
            Ok(summoner) => Ok(Some(summoner)),
            Err(e) if e.is_rate_limited() => Err(e.into()),
            Err(e) => {
                warn!("Summoner lookup failed, continuing without it: {}", e);
                Ok(None)
            }
        }
    }

    fn profile(riot_id: &RiotId, account: &AccountDto, summoner: Option<&SummonerDto>) -> PlayerProfile {
        PlayerProfile {
            game_name: account
                .game_name
                .clone()
                .unwrap_or_else(|| riot_id.game_name.clone()),
            tag_line: account
                .tag_line
                .clone()
                .unwrap_or_else(|| riot_id.tag_line.clone()),
            puuid: account.puuid.clone(),
            summoner_level: summoner.map(|s| s.summoner_level),
            profile_icon_id: summoner.map(|s| s.profile_icon_id),
        }
    }
}

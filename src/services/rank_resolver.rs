use log::{info, warn};

use crate::analysis::{PerformanceMetrics, ScoringTables, estimate_tier, score_from_matches};
use crate::api::RiotClient;
use crate::domain::rank::ESTIMATED_QUEUE;
use crate::domain::{LeagueEntryDto, RankEntry, RankSource, RankStanding, SummonerDto};
use crate::errors::RiotApiError;

/// Ways of finding a player's rank, tried in order until one yields a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankStrategy {
    BySummonerId,
    ByPuuid,
    EstimateFromMatches,
}

impl RankStrategy {
    pub const ORDER: [RankStrategy; 3] = [
        RankStrategy::BySummonerId,
        RankStrategy::ByPuuid,
        RankStrategy::EstimateFromMatches,
    ];
}

pub struct RankLookup<'a> {
    pub puuid: &'a str,
    pub summoner: Option<&'a SummonerDto>,
    pub metrics: &'a PerformanceMetrics,
    pub tables: &'a ScoringTables,
}

pub struct RankResolver<'a> {
    client: &'a RiotClient,
    strategies: &'a [RankStrategy],
}

impl<'a> RankResolver<'a> {
    pub fn new(client: &'a RiotClient) -> Self {
        Self::with_strategies(client, &RankStrategy::ORDER)
    }

    pub fn with_strategies(client: &'a RiotClient, strategies: &'a [RankStrategy]) -> Self {
        Self { client, strategies }
    }

    /// First standing any strategy produces. Only rate limiting is fatal;
    /// other failures fall through to the next strategy.
    pub async fn resolve(&self, lookup: &RankLookup<'_>) -> Result<Option<RankStanding>, RiotApiError> {
        for &strategy in self.strategies {
            match self.try_strategy(strategy, lookup).await {
                Ok(Some(standing)) => {
                    info!("Rank resolved via {:?}: {}", strategy, standing.entry.label());
                    return Ok(Some(standing));
                }
                Ok(None) => continue,
                Err(e) if e.is_rate_limited() => return Err(e),
                Err(e) => warn!("Rank strategy {:?} failed: {}", strategy, e),
            }
        }
        info!("No rank found for {}", lookup.puuid);
        Ok(None)
    }

    async fn try_strategy(
        &self,
        strategy: RankStrategy,
        lookup: &RankLookup<'_>,
    ) -> Result<Option<RankStanding>, RiotApiError> {
        match strategy {
            RankStrategy::BySummonerId => {
                let Some(summoner_id) = lookup.summoner.and_then(|s| s.id.as_deref()) else {
                    return Ok(None);
                };
                let entries = self.client.league_entries_by_summoner(summoner_id).await;
                Ok(standing_from(not_found_as_empty(entries)?, RankSource::SummonerId))
            }
            RankStrategy::ByPuuid => {
                let entries = self.client.league_entries_by_puuid(lookup.puuid).await;
                Ok(standing_from(not_found_as_empty(entries)?, RankSource::Puuid))
            }
            RankStrategy::EstimateFromMatches => Ok(estimate_standing(lookup.metrics, lookup.tables)),
        }
    }
}

fn not_found_as_empty(
    result: Result<Vec<LeagueEntryDto>, RiotApiError>,
) -> Result<Vec<LeagueEntryDto>, RiotApiError> {
    match result {
        Err(e) if e.is_not_found() => Ok(Vec::new()),
        other => other,
    }
}

fn standing_from(entries: Vec<LeagueEntryDto>, source: RankSource) -> Option<RankStanding> {
    RankEntry::pick_preferred(&entries).map(|entry| RankStanding { entry, source })
}

/// Tier guessed from recent match performance, `None` without matches
pub fn estimate_standing(metrics: &PerformanceMetrics, tables: &ScoringTables) -> Option<RankStanding> {
    if metrics.games_analyzed == 0 {
        return None;
    }

    let tier = estimate_tier(score_from_matches(metrics, tables), tables)?;
    Some(RankStanding {
        entry: RankEntry {
            queue_type: ESTIMATED_QUEUE.to_string(),
            tier,
            division: None,
            league_points: 0,
            wins: metrics.wins as i32,
            losses: metrics.losses() as i32,
        },
        source: RankSource::Estimated,
    })
}

#[cfg(test)]
mod tests {
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::http::header::RETRY_AFTER;
    use axum::response::{IntoResponse, Json, Response};
    use axum::routing::get;
    use axum::Router;

    use super::*;
    use crate::api::stub_server;
    use crate::config::RiotSettings;
    use crate::domain::Tier;
    use crate::domain::rank::SOLO_QUEUE;

    #[test]
    fn test_strategy_order() {
        assert_eq!(
            RankStrategy::ORDER,
            [
                RankStrategy::BySummonerId,
                RankStrategy::ByPuuid,
                RankStrategy::EstimateFromMatches
            ]
        );
    }

    #[test]
    fn test_estimate_needs_matches() {
        let tables = ScoringTables::default();
        assert!(estimate_standing(&PerformanceMetrics::default(), &tables).is_none());
    }

    #[test]
    fn test_estimate_from_strong_matches() {
        let tables = ScoringTables::default();
        let metrics = PerformanceMetrics {
            recent_win_rate: 65.0,
            avg_kda: 3.2,
            avg_cs_per_min: 7.0,
            avg_vision_per_min: 1.0,
            games_analyzed: 20,
            wins: 13,
            ..PerformanceMetrics::default()
        };
        // 50 + 25 + 20 + 10 + 0 = 105 -> 100
        let standing = estimate_standing(&metrics, &tables).unwrap();
        assert_eq!(standing.entry.tier, Tier::Diamond);
        assert_eq!(standing.entry.wins, 13);
        assert_eq!(standing.entry.losses, 7);
        assert_eq!(standing.entry.queue_type, ESTIMATED_QUEUE);
        assert!(standing.is_estimated());
    }

    #[test]
    fn test_not_found_means_unranked() {
        let missing = Err(RiotApiError::NotFound {
            resource: "league entries".to_string(),
        });
        assert!(not_found_as_empty(missing).unwrap().is_empty());

        let forbidden: Result<Vec<LeagueEntryDto>, _> = Err(RiotApiError::Forbidden);
        assert!(not_found_as_empty(forbidden).is_err());
    }

    #[tokio::test]
    async fn test_estimate_only_chain_needs_no_network() {
        let settings = RiotSettings {
            api_key: Some("RGAPI-test".to_string()),
            ..RiotSettings::default()
        };
        let client = RiotClient::new(&settings).unwrap();
        let strategies = [RankStrategy::EstimateFromMatches];
        let resolver = RankResolver::with_strategies(&client, &strategies);

        let tables = ScoringTables::default();
        let metrics = PerformanceMetrics {
            games_analyzed: 10,
            wins: 5,
            ..PerformanceMetrics::default()
        };
        let lookup = RankLookup {
            puuid: "me",
            summoner: None,
            metrics: &metrics,
            tables: &tables,
        };

        // defaults score 70 from matches -> PLATINUM band
        let standing = resolver.resolve(&lookup).await.unwrap().unwrap();
        assert_eq!(standing.entry.tier, Tier::Platinum);
        assert_eq!(standing.source, RankSource::Estimated);
    }

    async fn entries_by_summoner(Path(summoner_id): Path<String>) -> Response {
        match summoner_id.as_str() {
            "gone" => StatusCode::NOT_FOUND.into_response(),
            _ => Json(stub_server::league_json(SOLO_QUEUE, "DIAMOND", "I")).into_response(),
        }
    }

    async fn entries_by_puuid(Path(puuid): Path<String>) -> Response {
        match puuid.as_str() {
            "forbidden" => StatusCode::FORBIDDEN.into_response(),
            "limited" => (StatusCode::TOO_MANY_REQUESTS, [(RETRY_AFTER, "5")]).into_response(),
            "ranked" => Json(stub_server::league_json(SOLO_QUEUE, "GOLD", "II")).into_response(),
            _ => Json(serde_json::json!([])).into_response(),
        }
    }

    async fn league_client() -> RiotClient {
        let router = Router::new()
            .route("/lol/league/v4/entries/by-summoner/:summoner_id", get(entries_by_summoner))
            .route("/lol/league/v4/entries/by-puuid/:puuid", get(entries_by_puuid));
        stub_server::client_for(stub_server::spawn(router).await)
    }

    fn summoner(id: Option<&str>) -> SummonerDto {
        SummonerDto {
            id: id.map(str::to_string),
            puuid: "ranked".to_string(),
            profile_icon_id: 1,
            summoner_level: 100,
        }
    }

    fn played_metrics() -> PerformanceMetrics {
        PerformanceMetrics {
            games_analyzed: 10,
            wins: 5,
            ..PerformanceMetrics::default()
        }
    }

    async fn resolve(
        client: &RiotClient,
        puuid: &str,
        summoner: Option<&SummonerDto>,
    ) -> Result<Option<RankStanding>, RiotApiError> {
        let tables = ScoringTables::default();
        let metrics = played_metrics();
        let lookup = RankLookup {
            puuid,
            summoner,
            metrics: &metrics,
            tables: &tables,
        };
        RankResolver::new(client).resolve(&lookup).await
    }

    #[tokio::test]
    async fn test_summoner_id_strategy_wins_first() {
        let client = league_client().await;
        let dto = summoner(Some("sid"));

        let standing = resolve(&client, "ranked", Some(&dto)).await.unwrap().unwrap();

        assert_eq!(standing.source, RankSource::SummonerId);
        assert_eq!(standing.entry.tier, Tier::Diamond);
    }

    #[tokio::test]
    async fn test_missing_summoner_id_goes_to_puuid() {
        let client = league_client().await;
        let dto = summoner(None);

        let standing = resolve(&client, "ranked", Some(&dto)).await.unwrap().unwrap();

        assert_eq!(standing.source, RankSource::Puuid);
        assert_eq!(standing.entry.tier, Tier::Gold);
    }

    #[tokio::test]
    async fn test_summoner_not_found_falls_back_to_puuid() {
        let client = league_client().await;
        let dto = summoner(Some("gone"));

        let standing = resolve(&client, "ranked", Some(&dto)).await.unwrap().unwrap();

        assert_eq!(standing.source, RankSource::Puuid);
        assert_eq!(standing.entry.label(), "GOLD II");
    }

    #[tokio::test]
    async fn test_upstream_failure_falls_back_to_estimate() {
        let client = league_client().await;

        let standing = resolve(&client, "forbidden", None).await.unwrap().unwrap();

        assert_eq!(standing.source, RankSource::Estimated);
        assert_eq!(standing.entry.tier, Tier::Platinum);
    }

    #[tokio::test]
    async fn test_unranked_player_is_estimated() {
        let client = league_client().await;

        let standing = resolve(&client, "unranked", None).await.unwrap().unwrap();

        assert!(standing.is_estimated());
    }

    #[tokio::test]
    async fn test_rate_limit_stops_the_chain() {
        let client = league_client().await;

        let result = resolve(&client, "limited", None).await;

        assert!(matches!(
            result,
            Err(RiotApiError::RateLimited {
                retry_after_secs: Some(5)
            })
        ));
    }
}

use axum::Router;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::api::RiotClient;
use crate::config::RiotSettings;

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Client pointed at `base_url` with no pause between match calls
pub fn client_for(base_url: String) -> RiotClient {
    let settings = RiotSettings {
        api_key: Some("RGAPI-test".to_string()),
        api_base_url: Some(base_url),
        match_detail_delay_ms: 0,
        ..RiotSettings::default()
    };
    RiotClient::new(&settings).unwrap()
}

pub fn match_json(match_id: &str, puuid: &str) -> Value {
    json!({
        "metadata": { "matchId": match_id },
        "info": {
            "gameDuration": 1800,
            "gameEndTimestamp": 1_700_001_800_000_i64,
            "queueId": 420,
            "participants": [{
                "puuid": puuid, "championName": "Ahri", "teamPosition": "MIDDLE",
                "kills": 5, "deaths": 2, "assists": 7, "win": true
            }]
        }
    })
}

pub fn league_json(queue_type: &str, tier: &str, division: &str) -> Value {
    json!([{
        "queueType": queue_type, "tier": tier, "rank": division,
        "leaguePoints": 40, "wins": 30, "losses": 20
    }])
}

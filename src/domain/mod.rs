pub mod match_record;
pub mod models;
pub mod rank;
pub mod riot_id;

pub use match_record::{MatchParticipantRecord, MatchRecord};
pub use models::*;
pub use rank::{RankEntry, RankSource, RankStanding, Tier};
pub use riot_id::RiotId;

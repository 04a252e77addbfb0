pub mod analysis;
pub mod rank_resolver;
pub mod server;

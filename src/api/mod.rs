pub mod handlers;
pub mod models;
pub mod riot_client;
pub mod routes;

#[cfg(test)]
pub(crate) mod stub_server;

pub use riot_client::RiotClient;

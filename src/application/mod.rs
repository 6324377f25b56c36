// Application layer - fetch cycle, derivations and state
pub mod alerts;
pub mod channel_fetcher;
pub mod channel_source;
pub mod dashboard_service;
pub mod dashboard_store;
pub mod normalizer;
pub mod poller;
pub mod stats;
pub mod views;

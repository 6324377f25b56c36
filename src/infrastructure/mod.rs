// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_response;
pub mod json_stream;
pub mod snapshot_mapper;
pub mod thingspeak_client;

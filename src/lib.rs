pub mod api;
pub mod config;
pub mod data_models;
pub mod error;
pub mod generation_client;
pub mod prompts;
pub mod relay;
pub mod search_client;

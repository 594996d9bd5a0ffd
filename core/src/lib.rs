pub mod adapter;
pub mod configuration;
pub mod error;
pub mod manager;
pub mod models;
pub mod redirect_uri;

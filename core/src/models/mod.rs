pub mod authorisation_code;
pub mod client;
pub mod user;

pub use provider::*;

pub mod adapter_container;
pub mod clock;
pub mod provider;
pub mod ttl;

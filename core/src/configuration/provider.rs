use derive_builder::Builder;
use getset::Getters;

use crate::configuration::adapter_container::AdapterContainer;
use crate::configuration::clock::ClockProvider;
use crate::configuration::ttl::TTL;

/// Collaborators shared by the authorization-code lifecycle.
///
/// Built once at startup and handed to each component, nothing here is global.
#[derive(Builder, Getters, Default)]
#[builder(pattern = "owned", setter(into), default)]
#[get = "pub"]
pub struct ProviderConfiguration {
    adapters: AdapterContainer,
    clock_provider: ClockProvider,
    ttl: TTL,
}

#[cfg(test)]
mod tests {
    use time::Duration;

    use super::*;

    #[test]
    fn test_builder_keeps_defaults() {
        let configuration = ProviderConfigurationBuilder::default()
            .ttl(TTL {
                authorization_code: Duration::seconds(30),
            })
            .build()
            .unwrap();

        assert_eq!(Duration::seconds(30), configuration.ttl().authorization_code);
        assert!(matches!(configuration.clock_provider(), ClockProvider::Utc(_)));
    }
}

use std::net::SocketAddr;

use folio_api_rest::RestServerConfig;
use folio_config::Config;
use folio_di::provider;
use folio_extern_impl::contact::ContactApiServiceConfig;
use url::Url;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        // API
        rest_server_config: RestServerConfig,

        // Extern
        contact_api_service_config: ContactApiServiceConfig,
    }
}

impl Provider {
    pub fn new(config: &Config) -> Self {
        // API
        let rest_server_config = RestServerConfig {
            addr: SocketAddr::new(config.http.host, config.http.port),
            max_body_size: config.http.max_body_size,
        };

        // Extern
        let contact_api_service_config = ContactApiServiceConfig {
            endpoint: config.client.endpoint.clone().into(),
        };

        Self {
            _cache: Default::default(),
            rest_server_config,
            contact_api_service_config,
        }
    }

    pub fn with_client_endpoint(mut self, endpoint: Url) -> Self {
        self.contact_api_service_config.endpoint = endpoint.into();
        self
    }
}

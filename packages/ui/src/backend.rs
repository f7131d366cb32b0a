//! Config and backend client contexts.

use api::ApiClient;
use dioxus::prelude::*;
use store::AppConfig;

/// Provides the [`AppConfig`] and a shared [`ApiClient`] built from it.
#[component]
pub fn BackendProvider(config: AppConfig, children: Element) -> Element {
    let client_config = config.clone();
    use_context_provider(move || ApiClient::new(client_config.api.base_url.clone()));
    use_context_provider(move || config);

    rsx! {
        {children}
    }
}

/// The client configuration. Panics outside [`BackendProvider`].
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// The backend client. Panics outside [`BackendProvider`].
pub fn use_backend() -> ApiClient {
    use_context::<ApiClient>()
}

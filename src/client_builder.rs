use reqwest::Client;

use crate::config::AppConfig;

/// Build the upstream client.
///
/// No default headers and no retries. The timeout is only applied when
/// configured.
pub fn build_client(config: &AppConfig) -> Result<Client, reqwest::Error> {
    let mut client_builder = Client::builder();

    if let Some(timeout) = config.request_timeout {
        client_builder = client_builder.timeout(timeout);
    }

    client_builder.build()
}

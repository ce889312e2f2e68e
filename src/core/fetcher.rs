use reqwest::{Client, StatusCode};

/// Issues the single HTTP GET for the grid body.
///
/// Failures never escape this type: every failure path logs a diagnostic
/// and hands back an empty body so the rest of the pipeline degrades to an
/// empty result instead of aborting.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub async fn fetch(&self, url: &str) -> String {
        tracing::debug!("Requesting grid from: {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) if e.is_connect() => {
                tracing::error!("Connection error: {}. The server may be unreachable.", e);
                return String::new();
            }
            Err(e) if e.is_timeout() => {
                tracing::error!("Request timed out: {}. Try again later.", e);
                return String::new();
            }
            Err(e) => {
                tracing::error!("Unexpected error during request: {}", e);
                return String::new();
            }
        };

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status.as_u16() >= 400 {
            if status.is_server_error() {
                tracing::error!("Server responded with {}: problem on the server side.", status);
            } else if status == StatusCode::NOT_FOUND {
                tracing::error!("Server responded with {}: page not found.", status);
            } else {
                tracing::error!("Server responded with {}: check the URL or access.", status);
            }
            return String::new();
        }

        match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Server returned invalid content: {}. Check the URL.", e);
                String::new()
            }
        }
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn returns_body_on_success() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/matrix.txt");
            then.status(200).body("|  1  |  2  |");
        });

        let body = Fetcher::new().fetch(&server.url("/matrix.txt")).await;

        mock.assert();
        assert_eq!(body, "|  1  |  2  |");
    }

    #[tokio::test]
    async fn not_found_yields_empty_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/missing.txt");
            then.status(404);
        });

        let body = Fetcher::new().fetch(&server.url("/missing.txt")).await;

        mock.assert();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn server_error_yields_empty_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/matrix.txt");
            then.status(503);
        });

        let body = Fetcher::new().fetch(&server.url("/matrix.txt")).await;

        mock.assert();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn client_error_yields_empty_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/matrix.txt");
            then.status(403);
        });

        let body = Fetcher::new().fetch(&server.url("/matrix.txt")).await;

        mock.assert();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn connection_failure_yields_empty_body() {
        // Port 1 is reserved and refuses connections on any sane host.
        let body = Fetcher::new().fetch("http://127.0.0.1:1/matrix.txt").await;

        assert!(body.is_empty());
    }
}

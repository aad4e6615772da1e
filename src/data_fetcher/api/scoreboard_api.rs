use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch_json;
use crate::data_fetcher::models::ScoreboardResponse;
use crate::error::AppError;

/// Fetches the live scoreboard.
#[instrument(skip(client))]
pub async fn fetch_scoreboard(client: &Client, url: &str) -> Result<ScoreboardResponse, AppError> {
    let response: ScoreboardResponse = fetch_json(client, url).await?;
    info!("Scoreboard fetched: {} events", response.events.len());
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    #[tokio::test]
    async fn test_fetch_scoreboard_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/scoreboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "events": [{"id": "1", "status": {"type": {"state": "pre"}}}]
            })))
            .mount(&mock_server)
            .await;

        let url = format!("{}/scoreboard", mock_server.uri());
        let response = fetch_scoreboard(&create_test_http_client(), &url)
            .await
            .unwrap();
        assert_eq!(response.events.len(), 1);
        assert_eq!(response.events[0].id, "1");
    }

    #[tokio::test]
    async fn test_fetch_scoreboard_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/scoreboard"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let url = format!("{}/scoreboard", mock_server.uri());
        let result = fetch_scoreboard(&create_test_http_client(), &url).await;
        assert!(matches!(result, Err(AppError::ApiServerError { .. })));
    }
}

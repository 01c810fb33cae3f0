use axum::http::StatusCode;
use contracts::shared::api_error::ApiErrorBody;
use once_cell::sync::OnceCell;

use super::error::ApiError;

static PREDICTION_CLIENT: OnceCell<Option<PredictionClient>> = OnceCell::new();

/// HTTP client for the external prediction service
///
/// Responses are forwarded untouched; only the transport and status are
/// interpreted here.
pub struct PredictionClient {
    client: reqwest::Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint(path);
        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Unavailable(format!("Prediction service unreachable: {}", e)))?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::Upstream {
                status,
                message: upstream_message(status, &text),
            });
        }

        response.json::<serde_json::Value>().await.map_err(|e| ApiError::Upstream {
            status: StatusCode::BAD_GATEWAY,
            message: format!("Malformed response from prediction service: {}", e),
        })
    }
}

/// `error` из тела ответа, иначе общий текст со статусом
fn upstream_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| format!("Prediction service returned {}", status.as_u16()))
}

pub fn initialize(base_url: Option<&str>) -> anyhow::Result<()> {
    let client = match base_url {
        Some(url) => {
            tracing::info!("Prediction routes proxy to {}", url);
            Some(PredictionClient::new(url)?)
        }
        None => {
            tracing::warn!("[prediction] base_url not set, /api/predict/* will answer 503");
            None
        }
    };
    PREDICTION_CLIENT
        .set(client)
        .map_err(|_| anyhow::anyhow!("Prediction client already initialized"))
}

pub fn get_client() -> Result<&'static PredictionClient, ApiError> {
    PREDICTION_CLIENT
        .get()
        .and_then(Option::as_ref)
        .ok_or_else(|| {
            ApiError::Unavailable(
                "Prediction service is not configured (set [prediction] base_url in config.toml)"
                    .into(),
            )
        })
}

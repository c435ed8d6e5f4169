use gloo::net::http::Request;
use shared::SavingsPlan;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const SAVINGS_PLANS_PATH: &str = "/api/savings-plans";
pub const LOGS_PATH: &str = "/api/logs";

/// API client for communicating with the backend server
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client for the build-time `SAVINGS_API_BASE_URL`, or the local backend
    pub fn new() -> Self {
        Self::with_base_url(option_env!("SAVINGS_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch every savings plan. Any non-2xx status counts as a failure.
    pub async fn get_savings_plans(&self) -> Result<Vec<SavingsPlan>, String> {
        let url = self.endpoint(SAVINGS_PLANS_PATH);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<Vec<SavingsPlan>>()
                        .await
                        .map_err(|e| format!("Failed to parse savings plans: {}", e))
                } else {
                    let status = response.status();
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(format!("Server error {}: {}", status, error_text))
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

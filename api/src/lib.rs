//! This crate contains all shared fullstack server functions.

pub mod dashboard;
pub mod money;

use dioxus::prelude::*;

use dashboard::DashboardSummary;

pub type ApiError = anyhow::Error;

/// Retrieves the dashboard snapshot: summary metrics plus the latest
/// payment rows, in the order the backend returns them.
#[post("/api/dashboard")]
pub async fn dashboard() -> Result<DashboardSummary, ApiError> {
    let summary = backend::fetch_dashboard().await?;
    Ok(summary)
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use dioxus::logger::tracing;

    use super::dashboard::DashboardEnvelope;
    use super::dashboard::DashboardSummary;
    use super::dashboard::FetchError;
    use super::ApiError;

    /// Base URL of the upstream REST service.
    pub fn api_base_url() -> String {
        const DEFAULT_URL: &str = "http://127.0.0.1:3000";
        std::env::var("UPLATE_API_URL").unwrap_or_else(|_| DEFAULT_URL.to_string())
    }

    pub async fn fetch_dashboard() -> Result<DashboardSummary, ApiError> {
        let url = format!("{}/api/mobile/dashboard", api_base_url());

        let response = reqwest::Client::new()
            .get(&url)
            .send()
            .await
            .map_err(FetchError::network)?;

        let envelope = response
            .json::<DashboardEnvelope>()
            .await
            .map_err(FetchError::network)?;

        let summary = envelope.into_result().inspect_err(|e| {
            tracing::warn!("dashboard fetch failed: {}", e);
        })?;

        Ok(summary)
    }
}

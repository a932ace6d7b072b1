use crate::shared::api_utils::api_url;
use contracts::domain::dataset::DatasetRow;
use contracts::shared::envelope::ApiEnvelope;
use gloo_net::http::Request;

/// Fetch every recorded comparison row from `GET /dataset`.
pub async fn fetch_dataset() -> Result<Vec<DatasetRow>, String> {
    let response = Request::get(&api_url("/dataset"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {e}"))?;
    let envelope: ApiEnvelope<Vec<DatasetRow>> =
        serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {e}"))?;

    Ok(envelope.data)
}

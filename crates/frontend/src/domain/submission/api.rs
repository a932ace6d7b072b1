use super::model::JdSource;
use crate::shared::api_utils::api_url;
use contracts::domain::submission::SubmissionResult;
use contracts::shared::envelope::ApiEnvelope;
use gloo_net::http::Request;
use web_sys::FormData;

/// Send one draft to `POST /process` and decode the scored result.
///
/// The body is multipart: the résumé binary, exactly one JD part (`jd_file`
/// or `jd_text_input`, never both), the category code and the score string.
/// Transport failures and non-2xx statuses collapse into a uniform error;
/// the caller decides how to surface it.
pub async fn process_submission(
    resume: &web_sys::File,
    jd: &JdSource,
    category: &str,
    score: &str,
) -> Result<SubmissionResult, String> {
    let form = FormData::new().map_err(|e| format!("Failed to build form data: {e:?}"))?;
    form.append_with_blob_and_filename("resume", resume, &resume.name())
        .map_err(|e| format!("Failed to attach resume: {e:?}"))?;

    match jd {
        JdSource::File(file) => form
            .append_with_blob_and_filename("jd_file", file, &file.name())
            .map_err(|e| format!("Failed to attach JD file: {e:?}"))?,
        JdSource::Text(text) => form
            .append_with_str("jd_text_input", text)
            .map_err(|e| format!("Failed to attach JD text: {e:?}"))?,
        JdSource::None => return Err("No job description provided".to_string()),
    }

    form.append_with_str("category", category)
        .map_err(|e| format!("Failed to attach category: {e:?}"))?;
    form.append_with_str("score", score)
        .map_err(|e| format!("Failed to attach score: {e:?}"))?;

    // No explicit Content-Type: the browser sets the multipart boundary.
    let response = Request::post(&api_url("/process"))
        .body(form)
        .map_err(|e| format!("Request failed: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let envelope: ApiEnvelope<SubmissionResult> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))?;

    Ok(envelope.data)
}

use contracts::usecases::u501_contact_inquiry::{SubmitError, Submission};
use gloo_net::http::Request;

/// POST the form, url-encoded, to the static-site form backend
pub async fn post_inquiry(endpoint: &str, submission: &Submission) -> Result<(), SubmitError> {
    let response = Request::post(endpoint)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(submission.body())
        .map_err(|e| SubmitError::Network(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(SubmitError::Rejected(response.status()));
    }

    Ok(())
}

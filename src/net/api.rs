//! HTTP helper for submitting a comment form.
//!
//! Browser-only: the request is built with `gloo-net` from the live form's
//! `FormData`. The `X-Requested-With` marker header tells the server to answer
//! with the JSON projection instead of a redirect.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and payloads missing expected fields
//! all collapse to `Err(String)`; the caller treats every variant uniformly as
//! "submission failed" and leaves the form untouched.

#[cfg(feature = "web")]
use super::types::RenderedComment;

/// Header marking the request as programmatic rather than a navigation.
pub const AJAX_MARKER: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// POST `form` to `action` and parse the rendered comment from the response.
///
/// # Errors
///
/// Returns an error string on network failure, a non-success status, or a
/// response body that does not carry the full comment projection.
#[cfg(feature = "web")]
pub async fn submit_comment(
    action: &str,
    form: web_sys::FormData,
) -> Result<RenderedComment, String> {
    let request = gloo_net::http::Request::post(action)
        .header(AJAX_MARKER.0, AJAX_MARKER.1)
        .body(form)
        .map_err(|e| e.to_string())?;

    let resp = request.send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("server returned status {}", resp.status()));
    }

    resp.json::<RenderedComment>()
        .await
        .map_err(|e| e.to_string())
}

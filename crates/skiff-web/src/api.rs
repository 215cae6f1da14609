use gloo::net::http::Request;
use skiff_core::task::Task;

/// One-shot unauthenticated GET for the initial task list. Called once
/// from the mount effect; the caller decides what a failure means.
pub async fn fetch_todos(url: &str) -> Result<Vec<Task>, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("request error: {e}"))?;

    if !response.ok() {
        return Err(format!(
            "unexpected status {} fetching todos",
            response.status()
        ));
    }

    response
        .json::<Vec<Task>>()
        .await
        .map_err(|e| format!("decode error: {e}"))
}

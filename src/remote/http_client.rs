use super::*;

/// Map error statuses to errors. `setting` names the flag that points at the endpoint.
pub(super) fn ensure_ok(
    resp: reqwest::blocking::Response,
    label: &str,
    setting: &str,
) -> Result<reqwest::blocking::Response> {
    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        anyhow::bail!("{}: remote endpoint not found (check {})", label, setting);
    }
    if resp.status().is_client_error() {
        let status = resp.status();
        let body = resp
            .json::<ErrorBody>()
            .map(|b| b.error)
            .unwrap_or_else(|_| "no details".to_string());
        anyhow::bail!("{}: rejected with {} ({})", label, status, body);
    }
    resp.error_for_status()
        .with_context(|| format!("{} status", label))
}

impl RemoteClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

//! IP intelligence provider client.
//!
//! Fetches the owning organization of a network address from the provider's
//! per-IP endpoint (`GET <base>/<address>`) and parses the JSON response.
//! The `org` and `country` fields degrade to empty strings when absent;
//! everything else the provider returns (`hostname`, `city`, `loc`, ...) is
//! ignored.

use std::net::IpAddr;

use serde_json::{Map, Value};

use crate::config::FETCH_TIMEOUT;
use crate::error_handling::LookupError;
use crate::models::Organization;

/// Fetches the organization owning `address` from the provider.
///
/// Issues a GET against `<base_url>/<address>` with `Accept:
/// application/json` and the fixed read timeout. The connection is released
/// on every exit path; a failed fetch surfaces immediately with no retry.
///
/// # Errors
///
/// Returns [`LookupError::Transport`] if the request fails (connection,
/// timeout, non-success status, undecodable body) and
/// [`LookupError::ResponseFormat`] if the body is not a JSON object.
pub async fn fetch_organization(
    client: &reqwest::Client,
    base_url: &str,
    address: IpAddr,
) -> Result<Organization, LookupError> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), address);
    log::debug!("GET {url}");

    let response = client
        .get(&url)
        .header(reqwest::header::ACCEPT, "application/json")
        .timeout(FETCH_TIMEOUT)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(LookupError::Transport)?;

    let body = response.text().await.map_err(LookupError::Transport)?;
    parse_organization(&body)
}

/// Parses a provider response body into an [`Organization`].
///
/// A missing or non-string `org`/`country` field is not an error; it
/// becomes an empty string in the result.
pub(crate) fn parse_organization(body: &str) -> Result<Organization, LookupError> {
    // Deserializing straight into a map rejects valid-but-non-object JSON
    // ("42", "[]") with a real parse error
    let info: Map<String, Value> =
        serde_json::from_str(body).map_err(LookupError::ResponseFormat)?;

    Ok(Organization {
        name: string_field(&info, "org"),
        country: string_field(&info, "country"),
    })
}

fn string_field(info: &Map<String, Value>, field: &str) -> String {
    info.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

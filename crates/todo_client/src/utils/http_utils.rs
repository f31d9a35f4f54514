use anyhow::Result;
use log::{error, info};
use reqwest::{header, Client, IntoUrl, Method, Response};
use serde::Serialize;

/// Executes a single authenticated HTTP request against the remote todo API.
///
/// Every request carries the caller's bearer authorization and asks for JSON.
/// One attempt only. Transport failures are logged and propagated unchanged.
pub async fn execute_request<T: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: impl IntoUrl,
    authorization: &str,
    json_body: Option<&T>,
) -> Result<Response> {
    let url_val = url.into_url()?;
    let mut request_builder = client
        .request(method.clone(), url_val.clone())
        .header(header::AUTHORIZATION, authorization)
        .header(header::ACCEPT, "application/json");

    if let Some(body) = json_body {
        request_builder = request_builder.json(body);
    }

    info!("Sending {} request to {}", method.as_str(), url_val);

    match request_builder.send().await {
        Ok(response) => {
            info!(
                "Got response from {} with status {}",
                url_val,
                response.status()
            );
            Ok(response)
        }
        Err(e) => {
            error!("Failed HTTP request to {}: {}", url_val, e);
            Err(e.into())
        }
    }
}

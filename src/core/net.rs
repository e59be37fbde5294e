// src/core/net.rs
// Blocking HTTP GET. One attempt, no retries; timeouts are the client's defaults.

use reqwest::blocking::Client;

use crate::error::SheetError;

pub fn client() -> Result<Client, SheetError> {
    let c = Client::builder()
        .user_agent(concat!("acervo/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(c)
}

/// GET `url` and return the body as text. Non-2xx → `SheetError::Network`.
pub fn http_get(client: &Client, url: &str) -> Result<String, SheetError> {
    logd!("Net: GET {}", url);
    let resp = client.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(SheetError::Network { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp.text()?)
}

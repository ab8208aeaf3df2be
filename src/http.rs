/*
 * Copyright Stalwart Labs Ltd. See the COPYING
 * file at the top-level directory of this distribution.
 *
 * Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
 * https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
 * <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
 * option. This file may not be copied, modified, or distributed
 * except according to those terms.
 */

use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Method,
};
use serde::Serialize;

use crate::Error;

#[derive(Debug, Clone)]
pub struct HttpClientBuilder {
    timeout: Duration,
    headers: HeaderMap<HeaderValue>,
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    method: Method,
    timeout: Duration,
    url: String,
    headers: HeaderMap<HeaderValue>,
    body: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        let mut headers = HeaderMap::new();
        headers.append(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Self {
            timeout: Duration::from_secs(30),
            headers,
        }
    }
}

impl HttpClientBuilder {
    pub fn build(&self, method: Method, url: impl Into<String>) -> HttpClient {
        HttpClient {
            method,
            url: url.into(),
            headers: self.headers.clone(),
            body: None,
            timeout: self.timeout,
        }
    }

    pub fn post(&self, url: impl Into<String>) -> HttpClient {
        self.build(Method::POST, url)
    }

    pub fn delete(&self, url: impl Into<String>) -> HttpClient {
        self.build(Method::DELETE, url)
    }

    pub fn with_header(mut self, name: &'static str, value: impl AsRef<str>) -> Self {
        if let Ok(value) = HeaderValue::from_str(value.as_ref()) {
            self.headers.append(name, value);
        }
        self
    }

    /// Add a header whose value is hidden from `Debug` output, for
    /// credentials.
    pub fn with_sensitive_header(mut self, name: &'static str, value: impl AsRef<str>) -> Self {
        if let Ok(mut value) = HeaderValue::from_str(value.as_ref()) {
            value.set_sensitive(true);
            self.headers.append(name, value);
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        if let Some(timeout) = timeout {
            self.timeout = timeout;
        }
        self
    }
}

impl HttpClient {
    pub fn with_body<B: Serialize>(mut self, body: B) -> crate::Result<Self> {
        match serde_json::to_string(&body) {
            Ok(body) => {
                self.body = Some(body);
                Ok(self)
            }
            Err(err) => Err(Error::Serialize(format!(
                "Failed to serialize request: {err}"
            ))),
        }
    }

    /// Send the request once, bounded by the configured timeout.
    ///
    /// A reply with a status in `200..=299` yields the response body, which
    /// is not interpreted further. Any other status becomes [`Error::Api`]
    /// carrying the trimmed body text, and a failure to reach the API at all
    /// becomes [`Error::Transport`].
    pub async fn send(self) -> crate::Result<String> {
        log::debug!("{} {}", self.method, self.url);

        let mut request = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .unwrap_or_default()
            .request(self.method.clone(), &self.url)
            .headers(self.headers);

        if let Some(body) = self.body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|err| {
            Error::Transport(format!("Failed to send request to {}: {err}", self.url))
        })?;

        let status = response.status().as_u16();
        log::debug!("{} {} returned status {status}", self.method, self.url);

        match status {
            200..=299 => response.text().await.map_err(|err| {
                Error::Transport(format!("Failed to read response from {}: {err}", self.url))
            }),
            _ => Err(Error::Api {
                status,
                method: self.method.to_string(),
                body: response.text().await.unwrap_or_default().trim().to_string(),
                url: self.url,
            }),
        }
    }
}

/*
 * Copyright Stalwart Labs LLC See the COPYING
 * file at the top-level directory of this distribution.
 *
 * Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
 * https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
 * <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
 * option. This file may not be copied, modified, or distributed
 * except according to those terms.
 */

use serde::Serialize;

use crate::{config::Config, http::HttpClientBuilder};

/// Client for the TXT record endpoint of the Czechia/ZONER DNS API.
///
/// Both operations target `{api_base}/api/DNS/{zone}/TXT` with the same JSON
/// body, the verb decides between creating and removing the record. Success
/// is a 2xx status, the response body is never parsed.
#[derive(Clone)]
pub struct CzechiaProvider {
    client: HttpClientBuilder,
    config: Config,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TxtRecordParams<'a> {
    pub host_name: &'a str,
    pub text: &'a str,
    pub ttl: i64,
    pub publish_zone: i64,
}

impl CzechiaProvider {
    pub(crate) fn new(config: Config) -> Self {
        let client = HttpClientBuilder::default()
            .with_sensitive_header("authorizationToken", config.token())
            .with_timeout(Some(config.timeout()));

        Self { client, config }
    }

    pub(crate) fn zone(&self) -> &str {
        self.config.zone()
    }

    pub(crate) async fn create_txt(&self, host: &str, text: &str) -> crate::Result<()> {
        log::debug!(
            "Creating TXT record {host} in zone {zone}",
            zone = self.config.zone()
        );
        self.client
            .post(self.endpoint())
            .with_body(self.params(host, text))?
            .send()
            .await
            .map(|_| ())
    }

    pub(crate) async fn delete_txt(&self, host: &str, text: &str) -> crate::Result<()> {
        log::debug!(
            "Deleting TXT record {host} in zone {zone}",
            zone = self.config.zone()
        );
        self.client
            .delete(self.endpoint())
            .with_body(self.params(host, text))?
            .send()
            .await
            .map(|_| ())
    }

    fn endpoint(&self) -> String {
        format!(
            "{api_base}/api/DNS/{zone}/TXT",
            api_base = self.config.api_base(),
            zone = self.config.zone(),
        )
    }

    fn params<'a>(&self, host: &'a str, text: &'a str) -> TxtRecordParams<'a> {
        TxtRecordParams {
            host_name: host,
            text,
            ttl: self.config.ttl(),
            publish_zone: self.config.publish_zone(),
        }
    }
}

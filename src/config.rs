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
use std::{
    fmt::{self, Debug, Formatter},
    time::Duration,
};

use serde::Deserialize;

use crate::Error;

pub const DEFAULT_API_BASE: &str = "https://api.czechia.com";
pub const DEFAULT_TTL: i64 = 3600;
pub const DEFAULT_PUBLISH_ZONE: i64 = 1;
pub const DEFAULT_TIMEOUT: u64 = 30;

/// Raw solver settings, as supplied by the ACME client or its credentials
/// file.
///
/// Only the API token and the apex zone are required, everything else falls
/// back to the documented defaults. Validation and normalization happen when
/// the settings are turned into a [`Config`], not here.
#[derive(Clone, Deserialize)]
pub struct Settings {
    pub authorization_token: String,
    pub zone: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_ttl")]
    pub ttl: i64,
    #[serde(default = "default_publish_zone")]
    pub publish_zone: i64,
    /// HTTP timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Settings {
    pub fn new(authorization_token: impl Into<String>, zone: impl Into<String>) -> Self {
        Settings {
            authorization_token: authorization_token.into(),
            zone: zone.into(),
            api_base: default_api_base(),
            ttl: DEFAULT_TTL,
            publish_zone: DEFAULT_PUBLISH_ZONE,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_ttl(mut self, ttl: i64) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_publish_zone(mut self, publish_zone: i64) -> Self {
        self.publish_zone = publish_zone;
        self
    }

    /// Set the HTTP timeout in seconds.
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Validated operating parameters of one solver.
///
/// Construction normalizes the API base and the zone and rejects an empty
/// zone. Nothing else is checked, the remaining values are forwarded to the
/// API exactly as configured.
#[derive(Clone)]
pub struct Config {
    api_base: String,
    zone: String,
    token: String,
    ttl: i64,
    publish_zone: i64,
    timeout: Duration,
}

impl TryFrom<Settings> for Config {
    type Error = Error;

    fn try_from(settings: Settings) -> crate::Result<Config> {
        let zone = settings.zone.trim_end_matches('.').to_ascii_lowercase();
        if zone.is_empty() {
            return Err(Error::Config(
                "Missing apex zone (domainName)".to_string(),
            ));
        }

        Ok(Config {
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            zone,
            token: settings.authorization_token,
            ttl: settings.ttl,
            publish_zone: settings.publish_zone,
            timeout: Duration::from_secs(settings.timeout),
        })
    }
}

impl Config {
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    pub fn ttl(&self) -> i64 {
        self.ttl
    }

    pub fn publish_zone(&self) -> i64 {
        self.publish_zone
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

// The token is a credential and must never reach the logs.
impl Debug for Settings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("authorization_token", &"***")
            .field("zone", &self.zone)
            .field("api_base", &self.api_base)
            .field("ttl", &self.ttl)
            .field("publish_zone", &self.publish_zone)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_base", &self.api_base)
            .field("zone", &self.zone)
            .field("token", &"***")
            .field("ttl", &self.ttl)
            .field("publish_zone", &self.publish_zone)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_ttl() -> i64 {
    DEFAULT_TTL
}

fn default_publish_zone() -> i64 {
    DEFAULT_PUBLISH_ZONE
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT
}

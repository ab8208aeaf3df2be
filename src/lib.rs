#![doc = include_str!("../README.md")]
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
use std::fmt::{self, Display, Formatter};

use crate::{config::Settings, providers::czechia::CzechiaProvider};

pub mod config;
pub mod http;
pub mod providers;
pub mod tests;

#[derive(Debug, PartialEq)]
pub enum Error {
    /// Required configuration is missing or unusable.
    Config(String),
    /// The validation name is not the configured zone or a descendant of it.
    NotUnderZone { name: String, zone: String },
    /// The API could not be reached: connect, TLS or timeout failure.
    Transport(String),
    /// The API answered with a non-success status code.
    Api {
        status: u16,
        method: String,
        url: String,
        body: String,
    },
    /// A request body could not be encoded.
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// ACME DNS-01 challenge solver backed by the Czechia/ZONER DNS API.
///
/// The ACME client drives it through two entry points: [`perform`] publishes
/// the validation token as a TXT record and [`cleanup`] removes it again on a
/// best-effort basis. Waiting for the record to propagate is the ACME
/// client's job; `perform` returns as soon as the API accepts the record.
///
/// [`perform`]: Dns01Solver::perform
/// [`cleanup`]: Dns01Solver::cleanup
#[derive(Clone)]
pub struct Dns01Solver {
    provider: CzechiaProvider,
}

impl Dns01Solver {
    /// Create a new solver from raw settings, validating them up front so
    /// that configuration problems surface before any network traffic.
    pub fn new(settings: Settings) -> crate::Result<Self> {
        Ok(Dns01Solver {
            provider: CzechiaProvider::new(settings.try_into()?),
        })
    }

    /// Publish the DNS-01 validation token for `validation_name`.
    ///
    /// `domain` is the domain under validation and is only used for
    /// diagnostics; the record location is derived from `validation_name`
    /// and the configured zone.
    pub async fn perform(
        &self,
        domain: impl AsRef<str>,
        validation_name: impl AsRef<str>,
        validation_token: impl AsRef<str>,
    ) -> crate::Result<()> {
        log::debug!(
            "Publishing validation record for {domain} at {name}",
            domain = domain.as_ref(),
            name = validation_name.as_ref()
        );
        let host = relative_host(validation_name.as_ref(), self.provider.zone())?;
        self.provider
            .create_txt(&host, validation_token.as_ref())
            .await
    }

    /// Remove the DNS-01 validation record for `validation_name`.
    ///
    /// Cleanup is best effort: every failure is logged and discarded so that
    /// a leftover record never fails an otherwise successful issuance.
    pub async fn cleanup(
        &self,
        domain: impl AsRef<str>,
        validation_name: impl AsRef<str>,
        validation_token: impl AsRef<str>,
    ) {
        if let Err(err) = self
            .remove(validation_name.as_ref(), validation_token.as_ref())
            .await
        {
            log::warn!(
                "Leaving validation record for {domain} behind: {err}",
                domain = domain.as_ref()
            );
        }
    }

    async fn remove(&self, validation_name: &str, validation_token: &str) -> crate::Result<()> {
        let host = relative_host(validation_name, self.provider.zone())?;
        self.provider.delete_txt(&host, validation_token).await
    }
}

/// Compute the host name of `validation_name` relative to the apex `zone`.
///
/// Both inputs are compared case-insensitively and with or without a
/// trailing dot. The zone apex itself maps to `"@"`, a name outside the zone
/// fails with [`Error::NotUnderZone`].
pub fn relative_host(validation_name: &str, zone: &str) -> crate::Result<String> {
    let name = validation_name.trim_end_matches('.').to_ascii_lowercase();
    let zone = zone.trim_end_matches('.').to_ascii_lowercase();

    if name == zone {
        return Ok("@".to_string());
    }

    match name.strip_suffix(&format!(".{}", zone)) {
        // ".example.com" strips to an empty host, which belongs at the apex.
        Some("") => Ok("@".to_string()),
        Some(host) => Ok(host.to_string()),
        None => Err(Error::NotUnderZone { name, zone }),
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::NotUnderZone { name, zone } => {
                write!(f, "Validation name '{}' is not under zone '{}'", name, zone)
            }
            Error::Transport(e) => write!(f, "Transport error: {}", e),
            Error::Api {
                status,
                method,
                url,
                body,
            } => {
                write!(f, "API error {} for {} {}: {}", status, method, url, body)
            }
            Error::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

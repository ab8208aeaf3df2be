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

#[cfg(test)]
mod tests {
    use crate::{relative_host, Error};

    #[test]
    fn test_relative_host() {
        assert_eq!(
            relative_host("_acme-challenge.example.com", "example.com").unwrap(),
            "_acme-challenge"
        );
        assert_eq!(relative_host("example.com", "example.com").unwrap(), "@");
        assert_eq!(
            relative_host("_acme-challenge.www.example.com", "example.com").unwrap(),
            "_acme-challenge.www"
        );
    }

    #[test]
    fn test_relative_host_normalization() {
        assert_eq!(
            relative_host("_acme-challenge.EXAMPLE.com.", "example.com").unwrap(),
            "_acme-challenge"
        );
        assert_eq!(
            relative_host("_acme-challenge.example.com", "Example.COM.").unwrap(),
            "_acme-challenge"
        );
        assert_eq!(relative_host("EXAMPLE.COM.", "example.com.").unwrap(), "@");
    }

    #[test]
    fn test_relative_host_round_trip() {
        for zone in ["example.com", "sub.example.co.uk", "xn--hkyrky-ptac70bc.cz"] {
            for host in ["_acme-challenge", "www", "a", "_acme-challenge.www"] {
                let name = format!("{host}.{zone}");
                assert_eq!(relative_host(&name, zone).unwrap(), host);
            }
        }
    }

    #[test]
    fn test_relative_host_outside_zone() {
        assert_eq!(
            relative_host("_acme-challenge.other.com", "example.com"),
            Err(Error::NotUnderZone {
                name: "_acme-challenge.other.com".to_string(),
                zone: "example.com".to_string(),
            })
        );
        // A plain suffix match without a label boundary is not a descendant.
        assert!(matches!(
            relative_host("badexample.com", "example.com"),
            Err(Error::NotUnderZone { .. })
        ));
        // The zone being a child of the name does not help either.
        assert!(matches!(
            relative_host("example.com", "www.example.com"),
            Err(Error::NotUnderZone { .. })
        ));
    }

    #[test]
    fn test_relative_host_empty_host_is_apex() {
        assert_eq!(relative_host(".example.com", "example.com").unwrap(), "@");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::Config("Missing apex zone (domainName)".to_string()).to_string(),
            "Configuration error: Missing apex zone (domainName)"
        );
        assert_eq!(
            Error::NotUnderZone {
                name: "challenge.other.com".to_string(),
                zone: "example.com".to_string(),
            }
            .to_string(),
            "Validation name 'challenge.other.com' is not under zone 'example.com'"
        );
        assert_eq!(
            Error::Api {
                status: 500,
                method: "POST".to_string(),
                url: "https://api.czechia.com/api/DNS/example.com/TXT".to_string(),
                body: "rate limited".to_string(),
            }
            .to_string(),
            "API error 500 for POST https://api.czechia.com/api/DNS/example.com/TXT: rate limited"
        );
        assert_eq!(
            Error::Transport("connection refused".to_string()).to_string(),
            "Transport error: connection refused"
        );
    }
}

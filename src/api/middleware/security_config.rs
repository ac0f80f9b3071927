//! Security headers configuration
//!
//! Values are checked once at startup with [`SecurityHeadersConfig::validate`];
//! the middleware then only copies them onto responses.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

/// Strict-Transport-Security max-age used when TLS is on (1 year)
pub const HSTS_MAX_AGE: u64 = 31_536_000;

/// Security headers configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityHeadersConfig {
    /// Content Security Policy
    pub content_security_policy: Option<String>,
    /// Strict Transport Security max age in seconds; only sent over TLS
    pub hsts_max_age: Option<u64>,
    /// Include subdomains in HSTS
    pub hsts_include_subdomains: bool,
    /// X-Frame-Options value
    pub x_frame_options: Option<String>,
    /// X-Content-Type-Options
    pub x_content_type_options: Option<String>,
    /// Referrer-Policy
    pub referrer_policy: Option<String>,
}

impl Default for SecurityHeadersConfig {
    fn default() -> Self {
        Self {
            content_security_policy: Some(
                "default-src 'self'; script-src 'self'; style-src 'self'; img-src 'self' data:; \
                 object-src 'none'; base-uri 'self'; frame-ancestors 'none'"
                    .to_string(),
            ),
            hsts_max_age: None,
            hsts_include_subdomains: false,
            x_frame_options: Some("DENY".to_string()),
            x_content_type_options: Some("nosniff".to_string()),
            referrer_policy: Some("no-referrer".to_string()),
        }
    }
}

impl SecurityHeadersConfig {
    /// Defaults, plus HSTS when the server terminates TLS itself
    pub fn for_server(tls_enabled: bool) -> Self {
        if tls_enabled {
            Self {
                hsts_max_age: Some(HSTS_MAX_AGE),
                hsts_include_subdomains: true,
                ..Self::default()
            }
        } else {
            Self::default()
        }
    }

    /// Header name/value pairs to set on every response
    pub fn header_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);

        if let Some(csp) = &self.content_security_policy {
            pairs.push(("content-security-policy", csp.clone()));
        }

        if let Some(max_age) = self.hsts_max_age {
            let mut hsts_value = format!("max-age={}", max_age);
            if self.hsts_include_subdomains {
                hsts_value.push_str("; includeSubDomains");
            }
            pairs.push(("strict-transport-security", hsts_value));
        }

        if let Some(xfo) = &self.x_frame_options {
            pairs.push(("x-frame-options", xfo.clone()));
        }

        if let Some(xcto) = &self.x_content_type_options {
            pairs.push(("x-content-type-options", xcto.clone()));
        }

        if let Some(rp) = &self.referrer_policy {
            pairs.push(("referrer-policy", rp.clone()));
        }

        pairs
    }

    /// Validate the security headers configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(csp) = &self.content_security_policy {
            if csp.trim().is_empty() {
                return Err("Content Security Policy cannot be empty".to_string());
            }
            if csp.contains("unsafe-inline") || csp.contains("unsafe-eval") {
                return Err(
                    "Content Security Policy must not allow inline or eval'd script".to_string(),
                );
            }
        }

        if let Some(max_age) = self.hsts_max_age {
            if max_age == 0 {
                return Err("HSTS max-age must be greater than 0".to_string());
            }
            if max_age > 2147483647 {
                return Err("HSTS max-age is too large (maximum 2147483647)".to_string());
            }
        }

        if let Some(xfo) = &self.x_frame_options {
            let valid_values = ["DENY", "SAMEORIGIN"];
            let xfo_upper = xfo.to_uppercase();
            if !valid_values.contains(&xfo_upper.as_str()) {
                return Err(format!(
                    "Invalid X-Frame-Options value: {}. Valid values are: {}",
                    xfo,
                    valid_values.join(", ")
                ));
            }
        }

        if let Some(rp) = &self.referrer_policy {
            let valid_policies = [
                "no-referrer",
                "no-referrer-when-downgrade",
                "origin",
                "origin-when-cross-origin",
                "same-origin",
                "strict-origin",
                "strict-origin-when-cross-origin",
                "unsafe-url",
            ];
            if !valid_policies.contains(&rp.as_str()) {
                return Err(format!("Invalid Referrer-Policy value: {}", rp));
            }
        }

        for (name, value) in self.header_pairs() {
            HeaderValue::from_str(&value)
                .map_err(|_| format!("Header {} has a value that cannot be sent", name))?;
        }

        Ok(())
    }
}

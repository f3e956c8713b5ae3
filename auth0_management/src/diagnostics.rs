//! The `Auth0-Client` header identifying this SDK.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Serialize;

pub const HEADER_NAME: &str = "auth0-client";

/// What to send in the `Auth0-Client` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Diagnostics {
    /// This crate's name and version, base64url-encoded JSON.
    #[default]
    Default,
    /// A caller-provided, already encoded value.
    Custom(String),
    /// Send no header at all.
    Suppressed,
}

#[derive(Serialize)]
struct ClientInfo<'a> {
    name: &'a str,
    version: &'a str,
    env: ClientEnv<'a>,
}

#[derive(Serialize)]
struct ClientEnv<'a> {
    os: &'a str,
}

impl Diagnostics {
    /// Header value to send, or `None` when suppressed.
    pub fn header_value(&self) -> Option<String> {
        match self {
            Diagnostics::Default => Some(default_value()),
            Diagnostics::Custom(value) => Some(value.clone()),
            Diagnostics::Suppressed => None,
        }
    }
}

fn default_value() -> String {
    let info = ClientInfo {
        name: "auth0-management-rs",
        version: env!("CARGO_PKG_VERSION"),
        env: ClientEnv {
            os: std::env::consts::OS,
        },
    };
    // Serializing a struct of string slices cannot fail.
    let json = serde_json::to_vec(&info).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_value_is_encoded_client_info() {
        let value = Diagnostics::Default.header_value().unwrap();
        let decoded = URL_SAFE_NO_PAD.decode(value).unwrap();
        let info: serde_json::Value = serde_json::from_slice(&decoded).unwrap();
        assert_eq!(info["name"], "auth0-management-rs");
        assert_eq!(info["version"], env!("CARGO_PKG_VERSION"));
        assert!(info["env"]["os"].is_string());
    }

    #[test]
    fn custom_value_is_sent_verbatim() {
        let custom = Diagnostics::Custom("eyJuYW1lIjoibXktYXBwIn0".to_string());
        assert_eq!(
            custom.header_value().as_deref(),
            Some("eyJuYW1lIjoibXktYXBwIn0")
        );
    }

    #[test]
    fn suppressed_sends_nothing() {
        assert_eq!(Diagnostics::Suppressed.header_value(), None);
    }
}

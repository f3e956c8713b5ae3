//! Authenticated HTTP connection to the management API.

use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::classify::classify;
use crate::diagnostics::{self, Diagnostics};
use crate::envelope::ResponseDecoder;
use crate::error::{Error, Result, TransportError};
use crate::request::ApiRequest;
use crate::uri::{build_uri, PathParams, QueryParams};

/// Request timeout used when the caller does not configure one.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection to one tenant's management API.
///
/// Holds the bearer token, base URL and diagnostics mode, all fixed at
/// construction. There is no mutable state, so one connection can serve
/// any number of concurrent calls; share it behind an `Arc`.
pub struct Connection {
    http: reqwest::Client,
    base_url: Url,
    bearer: HeaderValue,
    diagnostics: Diagnostics,
    diagnostics_header: Option<HeaderValue>,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("base_url", &self.base_url.as_str())
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Connection`].
pub struct ConnectionBuilder {
    base: String,
    token: String,
    diagnostics: Diagnostics,
    timeout: Duration,
    connect_timeout: Option<Duration>,
    http: Option<reqwest::Client>,
}

impl ConnectionBuilder {
    pub fn diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Overall timeout per request. Ignored when a custom client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// TCP + TLS handshake timeout. Ignored when a custom client is supplied.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Uses a preconfigured `reqwest::Client` (proxies, custom TLS, ...).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    pub fn build(self) -> Result<Connection> {
        let base_url = parse_base_url(&self.base)?;

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| Error::InvalidRequest("token is not a valid header value".to_string()))?;
        bearer.set_sensitive(true);

        let diagnostics_header = match &self.diagnostics {
            Diagnostics::Suppressed => None,
            mode => {
                let value = mode.header_value().unwrap_or_default();
                Some(HeaderValue::from_str(&value).map_err(|_| {
                    Error::InvalidRequest("diagnostics value is not a valid header value".to_string())
                })?)
            }
        };

        let http = match self.http {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder().timeout(self.timeout);
                if let Some(connect_timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(connect_timeout);
                }
                builder.build().map_err(|e| {
                    tracing::error!("Failed to build HTTP client: {}", e);
                    TransportError::with_source("failed to build HTTP client", e)
                })?
            }
        };

        Ok(Connection {
            http,
            base_url,
            bearer,
            diagnostics: self.diagnostics,
            diagnostics_header,
        })
    }
}

/// Accepts a bare tenant domain (`tenant.auth0.com`) or a full base URL.
fn parse_base_url(base: &str) -> Result<Url> {
    let base = base.trim();
    let candidate = if base.contains("://") {
        base.to_string()
    } else {
        format!("https://{}/api/v2/", base.trim_end_matches('/'))
    };
    let url = Url::parse(&candidate).map_err(|e| {
        Error::InvalidRequest(format!("invalid base URL `{}`: {}", candidate, e))
    })?;
    if url.cannot_be_a_base() {
        return Err(Error::InvalidRequest(format!(
            "base URL `{}` cannot carry a path",
            candidate
        )));
    }
    Ok(url)
}

impl Connection {
    /// Connects to `domain` (or a full base URL) with default settings.
    pub fn new(domain: &str, token: impl Into<String>) -> Result<Self> {
        Self::builder(domain, token).build()
    }

    pub fn builder(domain: &str, token: impl Into<String>) -> ConnectionBuilder {
        ConnectionBuilder {
            base: domain.to_string(),
            token: token.into(),
            diagnostics: Diagnostics::Default,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: None,
            http: None,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Resolves `template` against this connection's base URL.
    pub fn uri(&self, template: &str, path: &PathParams, query: &QueryParams) -> Result<Url> {
        build_uri(&self.base_url, template, path, query)
    }

    /// Sends `request` and decodes a success body with `decoder`.
    ///
    /// Non-success responses are always returned as errors. Dropping the
    /// returned future aborts the in-flight request.
    pub async fn send<D: ResponseDecoder>(
        &self,
        request: ApiRequest,
        decoder: &D,
    ) -> Result<D::Output> {
        let method = request.method.clone();
        let path = request.url.path().to_string();
        let builder = self.prepare(request)?;

        tracing::debug!(%method, %path, "Sending management API request");
        let resp = match builder.send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(%method, %path, "Request failed: {}", e);
                return Err(classify(None, &HeaderMap::new(), &[], Some(Box::new(e))));
            }
        };

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = match resp.bytes().await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(%method, %path, %status, "Failed to read response body: {}", e);
                return Err(classify(Some(status), &headers, &[], Some(Box::new(e))));
            }
        };
        tracing::debug!(%method, %path, %status, "Received management API response");

        if !status.is_success() {
            let err = classify(Some(status), &headers, &body, None);
            if !err.is_rate_limited() {
                tracing::error!(%method, %path, "{}", err);
            }
            return Err(err);
        }

        decoder.decode(&body).map_err(|e| {
            tracing::error!(
                %method,
                %path,
                "Failed to decode response: {} | body: {}",
                e,
                truncate_body(&String::from_utf8_lossy(&body))
            );
            Error::Decode(e)
        })
    }

    /// Like [`send`](Self::send), but gives up with [`Error::Cancelled`] as soon
    /// as `cancel` fires. The in-flight request is dropped, which aborts it.
    pub async fn send_cancellable<D: ResponseDecoder>(
        &self,
        request: ApiRequest,
        decoder: &D,
        cancel: &CancellationToken,
    ) -> Result<D::Output> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Management API request cancelled");
                Err(Error::Cancelled)
            }
            result = self.send(request, decoder) => result,
        }
    }

    fn prepare(&self, request: ApiRequest) -> Result<reqwest::RequestBuilder> {
        let mut headers = HeaderMap::new();
        if !request.has_header(AUTHORIZATION.as_str()) {
            headers.insert(AUTHORIZATION, self.bearer.clone());
        }
        if let Some(value) = &self.diagnostics_header {
            headers.insert(HeaderName::from_static(diagnostics::HEADER_NAME), value.clone());
        }

        // Caller headers replace defaults of the same name; repeats are kept.
        let mut supplied = HashSet::new();
        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::InvalidRequest(format!("invalid header name `{}`", name)))?;
            let value = HeaderValue::from_str(value).map_err(|_| {
                Error::InvalidRequest(format!("invalid value for header `{}`", name))
            })?;
            if supplied.insert(name.clone()) {
                headers.remove(&name);
            }
            headers.append(name, value);
        }

        let form = if request.is_multipart() {
            Some(build_form(&request)?)
        } else {
            None
        };

        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(headers);
        if let Some(form) = form {
            builder = builder.multipart(form);
        } else if let Some(params) = &request.params {
            builder = builder.json(params);
        }
        Ok(builder)
    }
}

fn build_form(request: &ApiRequest) -> Result<Form> {
    let mut form = Form::new();
    for (name, value) in request.form_fields()? {
        form = form.text(name, value);
    }
    for file in request.attachments() {
        let mut part = Part::bytes(file.bytes().to_vec()).file_name(file.file_name().to_string());
        if let Some(content_type) = file.content_type() {
            part = part.mime_str(content_type).map_err(|_| {
                Error::InvalidRequest(format!("invalid content type `{}`", content_type))
            })?;
        }
        form = form.part(file.field_name().to_string(), part);
    }
    Ok(form)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_domain_expands_to_api_v2() {
        let conn = Connection::new("tenant.eu.auth0.com", "t").unwrap();
        assert_eq!(conn.base_url().as_str(), "https://tenant.eu.auth0.com/api/v2/");
    }

    #[test]
    fn full_url_is_kept() {
        let conn = Connection::new("http://127.0.0.1:9999/mgmt", "t").unwrap();
        assert_eq!(conn.base_url().as_str(), "http://127.0.0.1:9999/mgmt");
        let url = conn
            .uri("users", &PathParams::new(), &QueryParams::new())
            .unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9999/mgmt/users");
    }

    #[test]
    fn invalid_base_is_rejected() {
        assert!(matches!(
            Connection::new("http://", "t"),
            Err(Error::InvalidRequest(_))
        ));
        assert!(matches!(
            Connection::new("https://bad host", "t"),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn token_with_newline_is_rejected() {
        assert!(matches!(
            Connection::new("tenant.auth0.com", "abc\ndef"),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn debug_output_hides_token() {
        let conn = Connection::new("tenant.auth0.com", "super-secret").unwrap();
        let debug = format!("{:?}", conn);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("tenant.auth0.com"));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
    }
}

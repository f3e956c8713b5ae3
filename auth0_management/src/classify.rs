//! Turns failed responses and transport failures into an [`Error`].

use std::collections::BTreeMap;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{
    ApiError, ApiErrorPayload, BoxError, Error, RateLimitError, RateLimitInfo, TransportError,
};

const RATE_LIMIT_LIMIT: &str = "x-ratelimit-limit";
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Classifies a failed call. Always yields an error.
///
/// `transport` wins over everything else: when it is set the body is not
/// inspected, even if a status line had already been received.
pub fn classify(
    status: Option<StatusCode>,
    headers: &HeaderMap,
    body: &[u8],
    transport: Option<BoxError>,
) -> Error {
    if let Some(cause) = transport {
        let message = match status {
            Some(status) => format!("response with status {} was not received intact", status),
            None => "request failed before a response was received".to_string(),
        };
        return Error::Transport(TransportError::with_source(message, cause));
    }

    let Some(status) = status else {
        return Error::Transport(TransportError::new("no response status received"));
    };

    let api = ApiError {
        status,
        payload: parse_payload(status, body),
    };

    if status == StatusCode::TOO_MANY_REQUESTS {
        let rate_limit = RateLimitInfo::from_headers(headers);
        tracing::warn!(
            remaining = rate_limit.and_then(|r| r.remaining),
            reset = rate_limit.and_then(|r| r.reset_at_epoch_seconds),
            "Rate limited by management API"
        );
        return Error::RateLimit(RateLimitError { api, rate_limit });
    }

    Error::Api(api)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawErrorPayload {
    status_code: Option<u16>,
    error: Option<String>,
    error_code: Option<String>,
    message: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

/// Best-effort parse of an error body. A body that is not an error object is
/// logged and dropped so it cannot mask the status that caused it.
fn parse_payload(status: StatusCode, body: &[u8]) -> Option<ApiErrorPayload> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice::<RawErrorPayload>(body) {
        Ok(raw) => Some(ApiErrorPayload {
            status_code: raw.status_code.unwrap_or_else(|| status.as_u16()),
            error: raw.error,
            error_code: raw.error_code,
            message: raw.message,
            extra: raw.extra,
        }),
        Err(e) => {
            tracing::debug!(%status, "Ignoring unparseable error body: {}", e);
            None
        }
    }
}

impl RateLimitInfo {
    /// Reads the `X-RateLimit-*` headers. `None` when none of them is usable.
    pub(crate) fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let info = RateLimitInfo {
            limit: header_number(headers, RATE_LIMIT_LIMIT),
            remaining: header_number(headers, RATE_LIMIT_REMAINING),
            reset_at_epoch_seconds: header_number(headers, RATE_LIMIT_RESET),
        };
        if info == RateLimitInfo::default() {
            None
        } else {
            Some(info)
        }
    }
}

fn header_number<N: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<N> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn empty_body_has_no_payload() {
        let err = classify(
            Some(StatusCode::INTERNAL_SERVER_ERROR),
            &HeaderMap::new(),
            b"",
            None,
        );
        match err {
            Error::Api(api) => {
                assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
                assert!(api.payload.is_none());
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn whitespace_body_counts_as_empty() {
        let err = classify(Some(StatusCode::BAD_GATEWAY), &HeaderMap::new(), b" \n\t", None);
        assert!(err.api_error().unwrap().payload.is_none());
    }

    #[test]
    fn full_error_body_is_parsed() {
        let body = br#"{"statusCode":400,"error":"Bad Request","message":"Payload validation error: 'Invalid email'","errorCode":"invalid_body"}"#;
        let err = classify(Some(StatusCode::BAD_REQUEST), &HeaderMap::new(), body, None);
        let api = err.api_error().unwrap();
        let payload = api.payload.as_ref().unwrap();
        assert_eq!(payload.status_code, 400);
        assert_eq!(payload.error.as_deref(), Some("Bad Request"));
        assert_eq!(api.error_code(), Some("invalid_body"));
        assert_eq!(api.message(), Some("Payload validation error: 'Invalid email'"));
        assert!(payload.extra.is_empty());
    }

    #[test]
    fn missing_status_code_falls_back_to_http_status() {
        let err = classify(
            Some(StatusCode::NOT_FOUND),
            &HeaderMap::new(),
            br#"{"message":"The user does not exist.","traceId":"abc"}"#,
            None,
        );
        let payload = err.api_error().unwrap().payload.clone().unwrap();
        assert_eq!(payload.status_code, 404);
        assert_eq!(payload.extra.get("traceId"), Some(&serde_json::json!("abc")));
    }

    #[test]
    fn malformed_body_is_swallowed() {
        for body in [
            &b"<html>Bad Gateway</html>"[..],
            &b"{\"message\": "[..],
            &b"[1,2,3]"[..],
            &b"{\"statusCode\":\"oops\"}"[..],
        ] {
            let err = classify(Some(StatusCode::BAD_GATEWAY), &HeaderMap::new(), body, None);
            match err {
                Error::Api(api) => assert!(api.payload.is_none()),
                other => panic!("expected Api error, got {:?}", other),
            }
        }
    }

    #[test]
    fn too_many_requests_becomes_rate_limit_error() {
        let err = classify(
            Some(StatusCode::TOO_MANY_REQUESTS),
            &headers(&[
                ("x-ratelimit-limit", "50"),
                ("x-ratelimit-remaining", "0"),
                ("x-ratelimit-reset", "1700000000"),
            ]),
            br#"{"message":"too many requests"}"#,
            None,
        );
        match err {
            Error::RateLimit(limited) => {
                let info = limited.rate_limit.unwrap();
                assert_eq!(info.limit, Some(50));
                assert_eq!(info.remaining, Some(0));
                assert_eq!(info.reset_at_epoch_seconds, Some(1_700_000_000));
                assert_eq!(limited.api.message(), Some("too many requests"));
            }
            other => panic!("expected RateLimit error, got {:?}", other),
        }
    }

    #[test]
    fn rate_limit_without_headers_has_no_info() {
        let err = classify(
            Some(StatusCode::TOO_MANY_REQUESTS),
            &headers(&[("x-ratelimit-limit", "lots")]),
            b"",
            None,
        );
        match err {
            Error::RateLimit(limited) => assert!(limited.rate_limit.is_none()),
            other => panic!("expected RateLimit error, got {:?}", other),
        }
    }

    #[test]
    fn transport_failure_wins_over_status() {
        let cause: BoxError = "connection reset by peer".into();
        let err = classify(
            Some(StatusCode::TOO_MANY_REQUESTS),
            &HeaderMap::new(),
            br#"{"message":"too many requests"}"#,
            Some(cause),
        );
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn missing_status_is_transport_error() {
        let err = classify(None, &HeaderMap::new(), b"", None);
        match err {
            Error::Transport(t) => assert_eq!(t.message(), "no response status received"),
            other => panic!("expected Transport error, got {:?}", other),
        }
    }
}

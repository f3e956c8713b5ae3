//! Immutable description of a single API call.
//!
//! An [`ApiRequest`] is assembled with consuming builder methods and handed to
//! [`Connection::send`](crate::Connection::send). Nothing here touches the
//! network, so request construction can be tested in isolation.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};

/// A file sent as one part of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    field_name: String,
    file_name: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

impl FileAttachment {
    pub fn new(field_name: &str, file_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            field_name: field_name.to_string(),
            file_name: file_name.to_string(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// One API call: method, URL, extra headers, parameters and attachments.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) params: Option<Value>,
    pub(crate) attachments: Vec<FileAttachment>,
}

impl ApiRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            params: None,
            attachments: Vec::new(),
        }
    }

    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: Url) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn patch(url: Url) -> Self {
        Self::new(Method::PATCH, url)
    }

    pub fn put(url: Url) -> Self {
        Self::new(Method::PUT, url)
    }

    pub fn delete(url: Url) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Adds a header. A caller-supplied `Authorization` replaces the
    /// connection's bearer token for this request.
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Sets the body parameters. Top-level members that serialize to `null`
    /// are dropped so unset fields are absent. Nested values are sent as
    /// given; an explicit `null` inside metadata deletes that key.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(|e| {
            Error::InvalidRequest(format!("request body could not be serialized: {}", e))
        })?;
        self.params = Some(prune_top_level_nulls(value));
        Ok(self)
    }

    /// Attaches a file. Any attachment switches the body to multipart.
    pub fn attach(mut self, attachment: FileAttachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    /// Body parameters after null pruning.
    pub fn params(&self) -> Option<&Value> {
        self.params.as_ref()
    }

    pub fn attachments(&self) -> &[FileAttachment] {
        &self.attachments
    }

    pub fn is_multipart(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Text fields of the multipart form: one per non-null top-level parameter.
    /// Strings are sent raw, everything else as compact JSON.
    pub fn form_fields(&self) -> Result<Vec<(String, String)>> {
        match &self.params {
            None => Ok(Vec::new()),
            Some(Value::Object(map)) => Ok(map
                .iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| {
                    let text = match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    (k.clone(), text)
                })
                .collect()),
            Some(_) => Err(Error::InvalidRequest(
                "multipart parameters must serialize to a JSON object".to_string(),
            )),
        }
    }
}

fn prune_top_level_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(map.into_iter().filter(|(_, v)| !v.is_null()).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn url() -> Url {
        Url::parse("https://tenant.auth0.com/api/v2/users/abc").unwrap()
    }

    #[derive(Serialize)]
    struct Patch {
        name: Option<String>,
        age: Option<u32>,
    }

    #[test]
    fn null_fields_are_omitted() {
        let request = ApiRequest::patch(url())
            .json(&Patch {
                name: Some("x".to_string()),
                age: None,
            })
            .unwrap();
        insta::assert_snapshot!(request.params().unwrap().to_string(), @r#"{"name":"x"}"#);
    }

    #[test]
    fn nested_nulls_are_sent_as_given() {
        let request = ApiRequest::post(url())
            .json(&json!({
                "user_metadata": {"theme": null, "lang": "en"},
                "tags": [null, {"a": null}],
                "nickname": null,
                "blocked": false
            }))
            .unwrap();
        assert_eq!(
            request.params().unwrap(),
            &json!({
                "user_metadata": {"theme": null, "lang": "en"},
                "tags": [null, {"a": null}],
                "blocked": false
            })
        );
    }

    #[test]
    fn form_fields_render_scalars_and_skip_nulls() {
        let request = ApiRequest::post(url())
            .json(&json!({
                "connection_id": "con_1",
                "upsert": true,
                "external_id": null,
                "limits": {"max": 5}
            }))
            .unwrap()
            .attach(FileAttachment::new("users", "users.json", b"[]".to_vec()));
        assert!(request.is_multipart());
        let mut fields = request.form_fields().unwrap();
        fields.sort();
        assert_eq!(
            fields,
            vec![
                ("connection_id".to_string(), "con_1".to_string()),
                ("limits".to_string(), r#"{"max":5}"#.to_string()),
                ("upsert".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn form_fields_reject_non_object_params() {
        let request = ApiRequest::post(url()).json(&vec![1, 2]).unwrap();
        assert!(matches!(
            request.form_fields(),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let request = ApiRequest::get(url()).header("authorization", "Bearer other");
        assert!(request.has_header("Authorization"));
        assert!(!request.has_header("Auth0-Client"));
        assert_eq!(request.method(), &Method::GET);
    }
}

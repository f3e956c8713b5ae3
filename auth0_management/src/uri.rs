//! Resolution of path templates and query parameters into absolute URLs.

use std::collections::BTreeMap;

use url::{form_urlencoded, Url};

use crate::error::{Error, Result};

/// Values for the `{placeholder}` tokens of a path template.
///
/// Keys the template does not mention are ignored, which lets one set of
/// parameters serve optional path variants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(BTreeMap<String, Option<String>>);

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.0.insert(key.to_string(), Some(value.into()));
        self
    }

    /// Declares `key` with a possibly missing value. Using a missing value in
    /// the template fails the build.
    pub fn with_opt(mut self, key: &str, value: Option<impl Into<String>>) -> Self {
        self.0.insert(key.to_string(), value.map(Into::into));
        self
    }

    fn lookup(&self, key: &str) -> Option<Option<&str>> {
        self.0.get(key).map(Option::as_deref)
    }
}

/// Ordered query parameters. Keys may repeat; `None` values are never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, Option<String>)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.0.push((key.to_string(), Some(value.to_string())));
        self
    }

    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        self.0.push((key.to_string(), value.map(|v| v.to_string())));
        self
    }

    /// Pushes one `key=value` pair per item, for multi-valued filters.
    pub fn push_all<I>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        for value in values {
            self.push(key, value);
        }
        self
    }

    /// Pairs that will actually be serialized, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }

    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

/// Builds the absolute URL for `template` below `base`.
///
/// Every `{key}` in the template must resolve to a non-empty value in `path`;
/// otherwise this fails with [`Error::InvalidRequest`] before anything is sent.
pub fn build_uri(
    base: &Url,
    template: &str,
    path: &PathParams,
    query: &QueryParams,
) -> Result<Url> {
    if base.cannot_be_a_base() {
        return Err(Error::InvalidRequest(format!(
            "base URL {} cannot carry a path",
            base
        )));
    }

    let segments = template
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| resolve_segment(segment, path))
        .collect::<Result<Vec<_>>>()?;

    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);

    let base_path = url.path().trim_end_matches('/').to_string();
    if segments.is_empty() {
        url.set_path(if base_path.is_empty() { "/" } else { base_path.as_str() });
    } else {
        url.set_path(&format!("{}/{}", base_path, segments.join("/")));
    }

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query.present() {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

fn resolve_segment(segment: &str, path: &PathParams) -> Result<String> {
    let mut resolved = String::with_capacity(segment.len());
    let mut rest = segment;
    while let Some(open) = rest.find('{') {
        resolved.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            Error::InvalidRequest(format!("unterminated placeholder in `{}`", segment))
        })?;
        let key = &after[..close];
        match path.lookup(key) {
            Some(Some(value)) if !value.is_empty() => resolved.push_str(&encode_segment(value)),
            Some(_) => {
                return Err(Error::InvalidRequest(format!(
                    "path parameter `{}` has no value",
                    key
                )))
            }
            None => {
                return Err(Error::InvalidRequest(format!(
                    "unresolved path placeholder `{{{}}}`",
                    key
                )))
            }
        }
        rest = &after[close + 1..];
    }
    resolved.push_str(rest);
    if is_dot_segment(&resolved) {
        return Err(Error::InvalidRequest(format!(
            "path segment `{}` resolves to a relative segment",
            segment
        )));
    }
    Ok(resolved)
}

/// `.` and `..` in any `%2e` spelling. URL parsing collapses these, so the
/// request would go to a different resource.
fn is_dot_segment(segment: &str) -> bool {
    let normalized = segment.to_ascii_lowercase().replace("%2e", ".");
    normalized == "." || normalized == ".."
}

/// Percent-encodes a value for use as a single path segment. Spaces become
/// `%20` and reserved characters such as `/` and `|` are escaped.
fn encode_segment(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

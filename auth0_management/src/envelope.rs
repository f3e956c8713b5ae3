//! Response decoders, including the two pagination envelope readers.
//!
//! Paginated endpoints answer with either a bare JSON array or an envelope
//! object, depending on what the request asked for. The readers here first
//! look at the root kind and only then decide how to decode, so a response
//! shape they do not recognise is reported as a [`DecodeError`] instead of
//! turning into an empty page.
//!
//! The decoder is picked by the call site; the connection never guesses.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::pagination::{CheckpointPage, Page, PagingMetadata};

/// Turns a success body into the call's output type.
pub trait ResponseDecoder {
    type Output;

    fn decode(&self, body: &[u8]) -> Result<Self::Output, DecodeError>;
}

/// Top-level shape of a listing response.
enum Shape {
    List(Vec<Value>),
    Envelope(Map<String, Value>),
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn parse_root(body: &[u8]) -> Result<Value, DecodeError> {
    serde_json::from_slice(body).map_err(DecodeError::Json)
}

fn peek_shape(body: &[u8]) -> Result<Shape, DecodeError> {
    match parse_root(body)? {
        Value::Array(items) => Ok(Shape::List(items)),
        Value::Object(map) => Ok(Shape::Envelope(map)),
        other => Err(DecodeError::UnexpectedRoot {
            expected: "an array or an envelope object",
            found: kind_name(&other),
        }),
    }
}

fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> Result<Vec<T>, DecodeError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| DecodeError::Item { index, source })
        })
        .collect()
}

fn take_list(map: &mut Map<String, Value>, property: &str) -> Result<Vec<Value>, DecodeError> {
    match map.remove(property) {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(DecodeError::NotAnArray {
            property: property.to_string(),
            found: kind_name(&other),
        }),
        None => Err(DecodeError::MissingListProperty(property.to_string())),
    }
}

/// First of `names` that is present and non-null, as a non-negative integer.
fn read_count(map: &Map<String, Value>, names: &[&str]) -> Result<Option<u64>, DecodeError> {
    for name in names {
        match map.get(*name) {
            None | Some(Value::Null) => continue,
            Some(value) => {
                return value
                    .as_u64()
                    .map(Some)
                    .ok_or_else(|| DecodeError::InvalidField {
                        field: name.to_string(),
                        expected: "a non-negative integer",
                    })
            }
        }
    }
    Ok(None)
}

/// Decodes any JSON body into `T`.
pub struct Json<T>(PhantomData<fn() -> T>);

impl<T> Json<T> {
    pub fn new() -> Self {
        Json(PhantomData)
    }
}

impl<T> Default for Json<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> ResponseDecoder for Json<T> {
    type Output = T;

    fn decode(&self, body: &[u8]) -> Result<T, DecodeError> {
        let root = parse_root(body)?;
        serde_json::from_value(root).map_err(DecodeError::Body)
    }
}

/// Decodes a bare JSON array into `Vec<T>`.
pub struct JsonList<T>(PhantomData<fn() -> T>);

impl<T> JsonList<T> {
    pub fn new() -> Self {
        JsonList(PhantomData)
    }
}

impl<T> Default for JsonList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> ResponseDecoder for JsonList<T> {
    type Output = Vec<T>;

    fn decode(&self, body: &[u8]) -> Result<Vec<T>, DecodeError> {
        match parse_root(body)? {
            Value::Array(items) => decode_items(items),
            other => Err(DecodeError::UnexpectedRoot {
                expected: "an array",
                found: kind_name(&other),
            }),
        }
    }
}

/// Ignores the body. For endpoints that answer `204 No Content`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContent;

impl ResponseDecoder for NoContent {
    type Output = ();

    fn decode(&self, _body: &[u8]) -> Result<(), DecodeError> {
        Ok(())
    }
}

/// Reader for offset-paginated listings.
///
/// A bare array becomes a [`Page`] without metadata. An envelope object must
/// carry the configured list property; `start`/`page`, `limit`/`per_page`,
/// `total` and `length` populate [`PagingMetadata`].
pub struct OffsetEnvelope<T> {
    list_property: String,
    _item: PhantomData<fn() -> T>,
}

impl<T> OffsetEnvelope<T> {
    pub fn new(list_property: &str) -> Self {
        Self {
            list_property: list_property.to_string(),
            _item: PhantomData,
        }
    }

    pub fn list_property(&self) -> &str {
        &self.list_property
    }
}

impl<T: DeserializeOwned> ResponseDecoder for OffsetEnvelope<T> {
    type Output = Page<T>;

    fn decode(&self, body: &[u8]) -> Result<Page<T>, DecodeError> {
        match peek_shape(body)? {
            Shape::List(items) => Ok(Page::new(decode_items(items)?, None)),
            Shape::Envelope(mut map) => {
                let raw_items = take_list(&mut map, &self.list_property)?;
                let paging = PagingMetadata {
                    total: read_count(&map, &["total"])?,
                    page: read_count(&map, &["start", "page"])?,
                    per_page: read_count(&map, &["limit", "per_page"])?,
                    length: read_count(&map, &["length"])?,
                };
                if let Some(total) = paging.total {
                    if total < raw_items.len() as u64 {
                        return Err(DecodeError::InconsistentTotal {
                            total,
                            len: raw_items.len(),
                        });
                    }
                }
                Ok(Page::new(decode_items(raw_items)?, Some(paging)))
            }
        }
    }
}

/// Reader for checkpoint (cursor) paginated listings.
///
/// The `next` property (configurable) holds the cursor. Absent, `null` and
/// empty cursors all mean "last page"; anything else is passed through as is.
pub struct CheckpointEnvelope<T> {
    list_property: String,
    next_property: String,
    _item: PhantomData<fn() -> T>,
}

impl<T> CheckpointEnvelope<T> {
    pub fn new(list_property: &str) -> Self {
        Self {
            list_property: list_property.to_string(),
            next_property: "next".to_string(),
            _item: PhantomData,
        }
    }

    pub fn with_next_property(mut self, next_property: &str) -> Self {
        self.next_property = next_property.to_string();
        self
    }

    fn read_cursor(&self, map: &Map<String, Value>) -> Result<Option<String>, DecodeError> {
        match map.get(&self.next_property) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(cursor)) if cursor.is_empty() => Ok(None),
            Some(Value::String(cursor)) => Ok(Some(cursor.clone())),
            Some(_) => Err(DecodeError::InvalidField {
                field: self.next_property.clone(),
                expected: "a string cursor",
            }),
        }
    }
}

impl<T: DeserializeOwned> ResponseDecoder for CheckpointEnvelope<T> {
    type Output = CheckpointPage<T>;

    fn decode(&self, body: &[u8]) -> Result<CheckpointPage<T>, DecodeError> {
        match peek_shape(body)? {
            Shape::List(items) => Ok(CheckpointPage::new(decode_items(items)?, None)),
            Shape::Envelope(mut map) => {
                let raw_items = take_list(&mut map, &self.list_property)?;
                let next_cursor = self.read_cursor(&map)?;
                Ok(CheckpointPage::new(decode_items(raw_items)?, next_cursor))
            }
        }
    }
}

//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};

use crate::cache::MAX_VALUE_SIZE;
use crate::error::{CacheError, Result};

/// Request body for a write (POST /cache)
///
/// Field names match case-insensitively, missing or `null` fields decode as
/// empty strings and unknown fields are ignored. A bare `null` body is an
/// item writing `""` under the empty key.
#[derive(Debug, Clone, Default)]
pub struct CacheItem {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
}

impl CacheItem {
    /// Decodes the first JSON value of a request body.
    ///
    /// Anything after that value is left unread.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let mut stream = serde_json::Deserializer::from_slice(body).into_iter::<Self>();
        match stream.next() {
            Some(item) => Ok(item?),
            None => Err(CacheError::MalformedBody(de::Error::custom("empty request body"))),
        }
    }

    /// Checks the value against `MAX_VALUE_SIZE` (in bytes).
    ///
    /// The key is not validated; any string, including the empty one, is accepted.
    pub fn validate(&self) -> Result<()> {
        if self.value.len() > MAX_VALUE_SIZE {
            return Err(CacheError::ValueTooLong(self.value.len()));
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for CacheItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(CacheItemVisitor)
    }
}

struct CacheItemVisitor;

impl<'de> Visitor<'de> for CacheItemVisitor {
    type Value = CacheItem;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object with string fields `key` and `value`")
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<CacheItem, E> {
        Ok(CacheItem::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<CacheItem, A::Error> {
        let mut item = CacheItem::default();
        // Later duplicates overwrite earlier ones; null leaves the field alone
        while let Some(name) = map.next_key::<String>()? {
            if name.eq_ignore_ascii_case("key") {
                if let Some(key) = map.next_value::<Option<String>>()? {
                    item.key = key;
                }
            } else if name.eq_ignore_ascii_case("value") {
                if let Some(value) = map.next_value::<Option<String>>()? {
                    item.value = value;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(item)
    }
}

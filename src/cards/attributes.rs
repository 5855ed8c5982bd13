//! Typed tunables for effect descriptors.
//!
//! Effects carry extra parameters beyond their base value: crit chance,
//! multipliers, durations, keyword lists. These live in an `Attributes`
//! map so each card can carry what it needs without widening the
//! descriptor type.
//!
//! ## AttributeValue Types
//!
//! - `Int`: Counts (duration in turns)
//! - `Float`: Chances and multipliers
//! - `Bool`: Flags
//! - `Text`: Strings (status names)
//! - `TextList`: String lists (keywords)

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Key for accessing attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeKey(pub String);

impl AttributeKey {
    /// Create a new attribute key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl From<&str> for AttributeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Value for an attribute.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    TextList(Vec<String>),
}

impl AttributeValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as float. Int values are widened.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(v) => Some(*v),
            AttributeValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as text list reference if this is a TextList value.
    #[must_use]
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            AttributeValue::TextList(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(v as i64)
    }
}

impl From<u32> for AttributeValue {
    fn from(v: u32) -> Self {
        AttributeValue::Int(v as i64)
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Float(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(v: Vec<String>) -> Self {
        AttributeValue::TextList(v)
    }
}

/// Collection of attributes.
pub type Attributes = FxHashMap<AttributeKey, AttributeValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_key() {
        let key1 = AttributeKey::new("crit_chance");
        let key2: AttributeKey = "crit_chance".into();
        assert_eq!(key1, key2);
    }

    #[test]
    fn test_float_widens_int() {
        assert_eq!(AttributeValue::Int(3).as_float(), Some(3.0));
        assert_eq!(AttributeValue::Float(0.15).as_float(), Some(0.15));
        assert_eq!(AttributeValue::Float(0.15).as_int(), None);
        assert_eq!(AttributeValue::Bool(true).as_float(), None);
    }

    #[test]
    fn test_attribute_value_from() {
        let int: AttributeValue = 3u32.into();
        assert_eq!(int.as_int(), Some(3));

        let float: AttributeValue = 1.5.into();
        assert_eq!(float.as_float(), Some(1.5));

        let text: AttributeValue = "barkskin".into();
        assert_eq!(text.as_text(), Some("barkskin"));

        let list: AttributeValue = vec!["lich".to_string()].into();
        assert_eq!(list.as_text_list().map(|l| l.len()), Some(1));
    }

    #[test]
    fn test_attributes_map() {
        let mut attrs = Attributes::default();
        attrs.insert("duration".into(), 3i32.into());
        attrs.insert("stackable".into(), false.into());

        assert_eq!(
            attrs.get(&"duration".into()).and_then(|v| v.as_int()),
            Some(3)
        );
        assert_eq!(
            attrs.get(&"stackable".into()).and_then(|v| v.as_bool()),
            Some(false)
        );
    }
}

//! Insertion-ordered option storage.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Value carried by a named option.
///
/// `Flag` renders the name alone (`-q`, `--bare`). `Value` renders the name
/// followed by the value as a separate token. `Multi` repeats the name once
/// per value (`-c a=1 -c b=2`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Flag,
    Value(String),
    Multi(Vec<String>),
}

impl OptionValue {
    pub fn is_flag(&self) -> bool { matches!(self, OptionValue::Flag) }

    /// Values in render order. A `Flag` yields a single `None`.
    pub fn values(&self) -> Vec<Option<&str>> {
        match self {
            OptionValue::Flag => vec![None],
            OptionValue::Value(v) => vec![Some(v.as_str())],
            OptionValue::Multi(vs) => vs.iter().map(|v| Some(v.as_str())).collect(),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self { OptionValue::Value(v.to_string()) }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self { OptionValue::Value(v) }
}

impl From<&String> for OptionValue {
    fn from(v: &String) -> Self { OptionValue::Value(v.clone()) }
}

impl From<Vec<String>> for OptionValue {
    fn from(vs: Vec<String>) -> Self { OptionValue::Multi(vs) }
}

impl From<Vec<&str>> for OptionValue {
    fn from(vs: Vec<&str>) -> Self { OptionValue::Multi(vs.into_iter().map(str::to_string).collect()) }
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptionValue::Flag => serializer.serialize_bool(true),
            OptionValue::Value(v) => serializer.serialize_str(v),
            OptionValue::Multi(vs) => {
                let mut seq = serializer.serialize_seq(Some(vs.len()))?;
                for v in vs { seq.serialize_element(v)?; }
                seq.end()
            }
        }
    }
}

struct OptionValueVisitor;

impl<'de> Visitor<'de> for OptionValueVisitor {
    type Value = OptionValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("`true`, a string, or a list of strings")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<OptionValue, E> {
        if v {
            Ok(OptionValue::Flag)
        } else {
            Err(E::invalid_value(de::Unexpected::Bool(false), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<OptionValue, E> {
        Ok(OptionValue::Value(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<OptionValue, E> {
        Ok(OptionValue::Value(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<OptionValue, A::Error> {
        let mut vs = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(v) = seq.next_element::<String>()? { vs.push(v); }
        Ok(OptionValue::Multi(vs))
    }
}

impl<'de> Deserialize<'de> for OptionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OptionValueVisitor)
    }
}

/// Option map that keeps keys in first-insertion order.
///
/// Re-inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options(Vec<(String, OptionValue)>);

impl Options {
    pub fn new() -> Self { Options(Vec::new()) }

    /// Insert or replace, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: OptionValue) -> Option<OptionValue> {
        let name = name.into();
        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.0.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.0.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn remove(&mut self, name: &str) -> Option<OptionValue> {
        let idx = self.0.iter().position(|(k, _)| k == name)?;
        Some(self.0.remove(idx).1)
    }

    pub fn contains(&self, name: &str) -> bool { self.get(name).is_some() }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut opts = Options::new();
        opts.extend(iter);
        opts
    }
}

impl<K: Into<String>, V: Into<OptionValue>> Extend<(K, V)> for Options {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter { self.insert(k, v.into()); }
    }
}

impl IntoIterator for Options {
    type Item = (String, OptionValue);
    type IntoIter = std::vec::IntoIter<(String, OptionValue)>;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl Serialize for Options {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 { map.serialize_entry(k, v)?; }
        map.end()
    }
}

struct OptionsVisitor;

impl<'de> Visitor<'de> for OptionsVisitor {
    type Value = Options;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of option names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Options, A::Error> {
        let mut opts = Options::new();
        while let Some((k, v)) = map.next_entry::<String, OptionValue>()? {
            opts.insert(k, v);
        }
        Ok(opts)
    }
}

impl<'de> Deserialize<'de> for Options {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OptionsVisitor)
    }
}

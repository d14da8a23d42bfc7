//! YAML to JSON value conversion for context layers.
//!
//! `serde_yaml::Value` rejects repeated mapping keys and has no room for
//! 128-bit integers or non-finite floats in JSON. This visitor reads YAML
//! straight into `serde_json::Value` instead: a repeated key keeps its last
//! value, integers beyond 64 bits and `.nan`/`.inf` become their decimal or
//! textual form, and a tagged node (`!tag value`) becomes its inner value.

use log::warn;
use serde::de::{
    self, Deserialize, Deserializer, EnumAccess, IgnoredAny, MapAccess, SeqAccess, VariantAccess,
    Visitor,
};
use std::fmt;

/// A YAML node converted to JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlValue(pub serde_json::Value);

impl YamlValue {
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

/// Parses a single YAML document. A document holding only `~` is `Null`;
/// an empty stream is an error, as with `serde_yaml::from_str`.
pub fn from_str(yaml: &str) -> serde_yaml::Result<serde_json::Value> {
    serde_yaml::from_str::<YamlValue>(yaml).map(YamlValue::into_inner)
}

/// Textual form of a float JSON cannot carry.
fn float_value(v: f64) -> serde_json::Value {
    match serde_json::Number::from_f64(v) {
        Some(number) => serde_json::Value::Number(number),
        None if v.is_nan() => serde_json::Value::String("nan".to_string()),
        None if v.is_sign_negative() => serde_json::Value::String("-inf".to_string()),
        None => serde_json::Value::String("inf".to_string()),
    }
}

struct YamlValueVisitor;

impl<'de> Visitor<'de> for YamlValueVisitor {
    type Value = YamlValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any YAML value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<YamlValue, E> {
        Ok(YamlValue(serde_json::Value::Bool(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<YamlValue, E> {
        Ok(YamlValue(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<YamlValue, E> {
        Ok(YamlValue(v.into()))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<YamlValue, E> {
        Ok(YamlValue(serde_json::Value::String(v.to_string())))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<YamlValue, E> {
        Ok(YamlValue(serde_json::Value::String(v.to_string())))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<YamlValue, E> {
        Ok(YamlValue(float_value(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<YamlValue, E> {
        Ok(YamlValue(serde_json::Value::String(v.to_string())))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<YamlValue, E> {
        Ok(YamlValue(serde_json::Value::String(v)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<YamlValue, E> {
        Ok(YamlValue(serde_json::Value::Null))
    }

    fn visit_none<E: de::Error>(self) -> Result<YamlValue, E> {
        Ok(YamlValue(serde_json::Value::Null))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<YamlValue, D::Error> {
        YamlValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<YamlValue, A::Error> {
        let mut items = Vec::new();
        while let Some(YamlValue(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(YamlValue(serde_json::Value::Array(items)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<YamlValue, A::Error> {
        let mut entries = serde_json::Map::new();
        while let Some(YamlValue(key)) = map.next_key()? {
            let serde_json::Value::String(key) = key else {
                warn!("Skipping non-string key {key}");
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            let YamlValue(value) = map.next_value()?;
            // Repeated keys: last one wins.
            entries.insert(key, value);
        }
        Ok(YamlValue(serde_json::Value::Object(entries)))
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<YamlValue, A::Error> {
        let (_tag, variant): (IgnoredAny, _) = data.variant()?;
        variant.newtype_variant()
    }
}

impl<'de> Deserialize<'de> for YamlValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(YamlValueVisitor)
    }
}

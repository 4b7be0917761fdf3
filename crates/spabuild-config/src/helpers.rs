use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde_json::Value;

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_base() -> String {
    "/static/vite/".to_string()
}

pub(crate) fn default_manifest() -> String {
    "manifest.json".to_string()
}

pub(crate) fn default_out_dir() -> PathBuf {
    PathBuf::from("build")
}

pub(crate) fn default_alias() -> IndexMap<String, PathBuf> {
    IndexMap::from([("@".to_string(), PathBuf::from("src"))])
}

pub(crate) fn default_entries() -> IndexMap<String, PathBuf> {
    IndexMap::from([("main".to_string(), PathBuf::from("src/main.js"))])
}

pub(crate) fn is_null(value: &Value) -> bool {
    value.is_null()
}

/// A string that may arrive as another scalar.
///
/// Environment overrides are parsed into typed values, so `out_dir = 2024`
/// reaches serde as an integer.
struct ScalarString(String);

impl<'de> Deserialize<'de> for ScalarString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScalarVisitor;

        impl Visitor<'_> for ScalarVisitor {
            type Value = ScalarString;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, number, or boolean")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ScalarString(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(ScalarString(v))
            }

            fn visit_char<E: de::Error>(self, v: char) -> Result<Self::Value, E> {
                Ok(ScalarString(v.to_string()))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(ScalarString(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ScalarString(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ScalarString(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(ScalarString(v.to_string()))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

pub(crate) fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    ScalarString::deserialize(deserializer).map(|s| s.0)
}

pub(crate) fn scalar_path<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
where
    D: Deserializer<'de>,
{
    ScalarString::deserialize(deserializer).map(|s| PathBuf::from(s.0))
}

pub(crate) fn scalar_path_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<IndexMap<String, PathBuf>, D::Error> {
    let raw = IndexMap::<String, ScalarString>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(key, value)| (key, PathBuf::from(value.0)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, serde::Deserialize)]
    struct Fields {
        #[serde(deserialize_with = "scalar_string")]
        name: String,
        #[serde(deserialize_with = "scalar_path")]
        dir: PathBuf,
        #[serde(deserialize_with = "scalar_path_map")]
        map: IndexMap<String, PathBuf>,
    }

    #[test]
    fn scalars_become_strings() {
        let fields: Fields = serde_json::from_value(json!({
            "name": true,
            "dir": 2024,
            "map": { "a": -1, "b": 1.5, "c": "src" }
        }))
        .unwrap();

        assert_eq!(fields.name, "true");
        assert_eq!(fields.dir, PathBuf::from("2024"));
        assert_eq!(fields.map["a"], PathBuf::from("-1"));
        assert_eq!(fields.map["b"], PathBuf::from("1.5"));
        assert_eq!(fields.map["c"], PathBuf::from("src"));
    }

    #[test]
    fn non_scalars_are_rejected() {
        let result: Result<Fields, _> = serde_json::from_value(json!({
            "name": ["x"],
            "dir": "d",
            "map": {}
        }));
        assert!(result.is_err());
    }
}

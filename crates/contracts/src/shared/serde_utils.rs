use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Десериализация "любого скаляра" в String.
///
/// `null` и отсутствующее поле дают пустую строку, числа и bool
/// превращаются в текст. Нужна для внешних JSON, где тип поля
/// не гарантирован (например, `numero` в ответе реестра).
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    })
}

/// Как `lenient_string`, но `null` и отсутствующее поле дают `None`.
///
/// Используется там, где важно отличить "поле не пришло" от пустой строки.
pub fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_string")]
        value: String,
    }

    fn probe(json: &str) -> String {
        serde_json::from_str::<Probe>(json).unwrap().value
    }

    #[derive(Deserialize)]
    struct OptProbe {
        #[serde(default, deserialize_with = "lenient_opt_string")]
        value: Option<String>,
    }

    fn opt_probe(json: &str) -> Option<String> {
        serde_json::from_str::<OptProbe>(json).unwrap().value
    }

    #[test]
    fn test_lenient_opt_string() {
        assert_eq!(opt_probe(r#"{"value": "abc"}"#), Some("abc".into()));
        assert_eq!(opt_probe(r#"{"value": ""}"#), Some(String::new()));
        assert_eq!(opt_probe(r#"{"value": null}"#), None);
        assert_eq!(opt_probe(r#"{}"#), None);
        assert_eq!(opt_probe(r#"{"value": 42}"#), Some("42".into()));
    }

    #[test]
    fn test_lenient_string() {
        assert_eq!(probe(r#"{"value": "abc"}"#), "abc");
        assert_eq!(probe(r#"{"value": null}"#), "");
        assert_eq!(probe(r#"{}"#), "");
        assert_eq!(probe(r#"{"value": 1500}"#), "1500");
        assert_eq!(probe(r#"{"value": true}"#), "true");
    }
}

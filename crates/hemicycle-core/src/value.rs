//! Canonicalization of polymorphic source fields
//!
//! The open-data JSON is a mechanical XML conversion: a field can be a bare
//! string or an object carrying `#text`/`libelle`, a list can collapse to a
//! single object, and numbers arrive as strings. These helpers are applied at
//! the ingestion boundary so records only ever hold plain strings and integers.

use serde_json::Value;

/// Key holding the raw text of an element converted from XML
pub const TEXT_KEY: &str = "#text";

/// Label keys, tried in order after [`TEXT_KEY`]
pub const LABEL_KEYS: &[&str] = &["libelle", "nomCanonique", "libelleCourt"];

/// Walk nested objects by key; `None` as soon as a step is missing or not an object
pub fn path<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in keys {
        current = current.as_object()?.get(*key)?;
    }
    Some(current)
}

/// String view of a string-or-object field
pub fn text_of(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Array(_)) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Object(map)) => {
            let raw = text_of(map.get(TEXT_KEY));
            if !raw.is_empty() {
                return raw;
            }
            LABEL_KEYS
                .iter()
                .map(|key| text_of(map.get(*key)))
                .find(|s| !s.is_empty())
                .unwrap_or_default()
        }
    }
}

/// Shorthand for `text_of(path(value, keys))`
pub fn text_at(value: &Value, keys: &[&str]) -> String {
    text_of(path(value, keys))
}

/// Singleton-or-list field as a sequence; null and missing are empty
pub fn as_seq(value: Option<&Value>) -> Vec<&Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter(|v| !v.is_null()).collect(),
        Some(other) => vec![other],
    }
}

/// Integer view of a field; anything non-numeric is 0
pub fn as_i64(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => parse_i64(s),
        Some(Value::Object(map)) => as_i64(map.get(TEXT_KEY)),
        _ => 0,
    }
}

fn parse_i64(s: &str) -> i64 {
    let trimmed = s.trim();
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| {
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(|f| f as i64)
        })
        .unwrap_or(0)
}

/// Date part of an ISO timestamp (`2024-07-18T15:00:00+02:00` -> `2024-07-18`)
pub fn date_part(raw: &str) -> String {
    raw.split('T').next().unwrap_or_default().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_of_precedence() {
        assert_eq!(text_of(Some(&json!("plain"))), "plain");
        assert_eq!(text_of(Some(&json!({"#text": "raw", "libelle": "label"}))), "raw");
        assert_eq!(text_of(Some(&json!({"libelle": "label", "code": "X"}))), "label");
        assert_eq!(text_of(Some(&json!({"nomCanonique": "Dépôt"}))), "Dépôt");
        assert_eq!(text_of(Some(&json!({"@xsi:nil": "true"}))), "");
        assert_eq!(text_of(Some(&json!(null))), "");
        assert_eq!(text_of(None), "");
        assert_eq!(text_of(Some(&json!(42))), "42");
    }

    #[test]
    fn test_as_seq_uniform() {
        let single = json!({"a": 1});
        assert_eq!(as_seq(Some(&single)).len(), 1);

        let list = json!([{"a": 1}, null, {"a": 2}]);
        assert_eq!(as_seq(Some(&list)).len(), 2);

        assert!(as_seq(Some(&json!(null))).is_empty());
        assert!(as_seq(None).is_empty());
    }

    #[test]
    fn test_as_i64_coercion() {
        assert_eq!(as_i64(Some(&json!("577"))), 577);
        assert_eq!(as_i64(Some(&json!(" 12 "))), 12);
        assert_eq!(as_i64(Some(&json!(3))), 3);
        assert_eq!(as_i64(Some(&json!(3.9))), 3);
        assert_eq!(as_i64(Some(&json!("n/a"))), 0);
        assert_eq!(as_i64(Some(&json!(null))), 0);
        assert_eq!(as_i64(Some(&json!({"#text": "8"}))), 8);
        assert_eq!(as_i64(None), 0);
    }

    #[test]
    fn test_path_stops_on_shape_mismatch() {
        let value = json!({"a": {"b": "leaf"}, "s": "str"});
        assert_eq!(text_at(&value, &["a", "b"]), "leaf");
        assert!(path(&value, &["s", "b"]).is_none());
        assert!(path(&value, &["missing"]).is_none());
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2024-07-18T15:00:00.000+02:00"), "2024-07-18");
        assert_eq!(date_part("2024-07-18"), "2024-07-18");
        assert_eq!(date_part(""), "");
    }
}

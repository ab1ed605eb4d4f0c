use serde::Serialize;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// Flattens a serializable struct into query pairs. `null` fields are left
/// out; anything that is not a scalar is rejected.
pub fn query_pairs<T: Serialize + ?Sized>(value: &T) -> ClientResult<Vec<(String, String)>> {
    let map = match serde_json::to_value(value)? {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => {
            return Err(ClientError::InvalidQuery(format!(
                "expected an object of parameters, got {other}"
            )))
        }
    };
    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let value = match value {
            Value::Null => continue,
            Value::String(value) => value,
            Value::Bool(value) => value.to_string(),
            Value::Number(value) => value.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(ClientError::InvalidQuery(format!(
                    "parameter '{key}' is not a scalar"
                )))
            }
        };
        pairs.push((key, value));
    }
    Ok(pairs)
}

pub fn build_params<const N: usize>(
    pairs: [Option<(String, String)>; N],
) -> Vec<(String, String)> {
    pairs.into_iter().flatten().collect()
}

pub fn opt_param<V: ToString>(key: &str, value: Option<V>) -> Option<(String, String)> {
    value.map(|value| (key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gymcheck_core::{ClassStatus, GetClassesRequest};
    use serde_json::json;

    #[test]
    fn unset_filters_are_omitted() {
        let filters = GetClassesRequest {
            coach_id: Some("coach-1".to_string()),
            status: Some(ClassStatus::Scheduled),
            ..Default::default()
        };
        let mut pairs = query_pairs(&filters).expect("pairs");
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("coachId".to_string(), "coach-1".to_string()),
                ("status".to_string(), "SCHEDULED".to_string()),
            ]
        );
    }

    #[test]
    fn scalars_are_stringified() {
        let mut pairs = query_pairs(&json!({"limit": 10, "page": 1, "unread": true, "q": null}))
            .expect("pairs");
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("limit".to_string(), "10".to_string()),
                ("page".to_string(), "1".to_string()),
                ("unread".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn nested_values_are_rejected() {
        let err = query_pairs(&json!({"ids": [1, 2]})).expect_err("array");
        assert!(matches!(err, ClientError::InvalidQuery(_)));
        let err = query_pairs(&json!("bare")).expect_err("string");
        assert!(matches!(err, ClientError::InvalidQuery(_)));
        assert!(query_pairs(&Option::<GetClassesRequest>::None)
            .expect("none")
            .is_empty());
    }

    #[test]
    fn optional_params() {
        let params = build_params([
            opt_param("limit", Some(50)),
            opt_param::<String>("cursor", None),
        ]);
        assert_eq!(params, vec![("limit".to_string(), "50".to_string())]);
    }
}

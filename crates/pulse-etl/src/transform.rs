//! Transform stage: flatten the raw payload into an ordered record set.

use crate::error::{EtlError, Result};
use pulse_common::types::{Record, RecordSet};
use serde_json::Value;
use tracing::info;

/// Flatten the array under `results_key` into records, source order
/// preserved.
///
/// Pure function: the same payload always yields the same record set or
/// the same failure. A missing key, a non-array value, an item missing
/// one of `id`/`value`/`timestamp`, or a non-scalar field all fail the
/// whole transform; a partial record set is never returned. An empty
/// array yields an empty record set — whether that is acceptable is the
/// caller's call.
pub fn transform(payload: &Value, results_key: &str) -> Result<RecordSet> {
    info!("Transforming fetched payload");

    let items = payload
        .get(results_key)
        .ok_or_else(|| EtlError::transform(format!("payload has no '{}' key", results_key)))?
        .as_array()
        .ok_or_else(|| EtlError::transform(format!("'{}' is not an array", results_key)))?;

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        records.push(record_from_item(item, index)?);
    }

    info!("Transformed {} records", records.len());
    Ok(records)
}

fn record_from_item(item: &Value, index: usize) -> Result<Record> {
    if !item.is_object() {
        return Err(EtlError::transform(format!(
            "item {} is not an object",
            index
        )));
    }

    Ok(Record {
        id: scalar_field(item, "id", index)?,
        value: scalar_field(item, "value", index)?,
        timestamp: scalar_field(item, "timestamp", index)?,
    })
}

/// Render a required scalar field to its textual form.
///
/// Strings are taken verbatim; numbers and booleans use their JSON
/// rendering. `null`, objects, and arrays are structural mismatches.
fn scalar_field(item: &Value, field: &str, index: usize) -> Result<String> {
    let value = item
        .get(field)
        .ok_or_else(|| EtlError::transform(format!("item {} is missing '{}'", index, field)))?;

    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(EtlError::transform(format!(
            "item {} field '{}' is not a scalar",
            index, field
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transform_preserves_count_and_order() {
        let payload = json!({
            "results": [
                {"id": 3, "value": 1.0, "timestamp": "2024-01-03T00:00:00"},
                {"id": 1, "value": 2.0, "timestamp": "2024-01-01T00:00:00"},
                {"id": 2, "value": 3.0, "timestamp": "2024-01-02T00:00:00"}
            ]
        });

        let records = transform(&payload, "results").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(
            records.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec!["3", "1", "2"]
        );
    }

    #[test]
    fn test_transform_single_item_scalars() {
        let payload = json!({
            "results": [{"id": 1, "value": 10.5, "timestamp": "2024-01-01T00:00:00"}]
        });

        let records = transform(&payload, "results").unwrap();
        assert_eq!(
            records,
            vec![Record::new("1", "10.5", "2024-01-01T00:00:00")]
        );
    }

    #[test]
    fn test_transform_empty_results_yields_empty_set() {
        let payload = json!({"results": []});
        let records = transform(&payload, "results").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_transform_missing_results_key() {
        let payload = json!({"items": []});
        let err = transform(&payload, "results").unwrap_err();
        assert!(matches!(err, EtlError::Transform(_)));
        assert!(err.to_string().contains("results"));
    }

    #[test]
    fn test_transform_results_not_an_array() {
        let payload = json!({"results": {"id": 1}});
        let err = transform(&payload, "results").unwrap_err();
        assert!(matches!(err, EtlError::Transform(_)));
    }

    #[test]
    fn test_transform_item_missing_field_fails_whole_set() {
        // First item is fine; the second is missing its timestamp. The
        // transform must fail rather than return a partial set.
        let payload = json!({
            "results": [
                {"id": 1, "value": 2, "timestamp": "2024-01-01T00:00:00"},
                {"id": 2, "value": 3}
            ]
        });

        let err = transform(&payload, "results").unwrap_err();
        assert!(matches!(err, EtlError::Transform(_)));
        assert!(err.to_string().contains("timestamp"));
    }

    #[test]
    fn test_transform_non_object_item() {
        let payload = json!({"results": [42]});
        let err = transform(&payload, "results").unwrap_err();
        assert!(err.to_string().contains("not an object"));
    }

    #[test]
    fn test_transform_rejects_non_scalar_field() {
        let payload = json!({
            "results": [{"id": 1, "value": {"nested": true}, "timestamp": "t"}]
        });
        let err = transform(&payload, "results").unwrap_err();
        assert!(err.to_string().contains("not a scalar"));
    }

    #[test]
    fn test_transform_honors_configured_key() {
        let payload = json!({
            "rows": [{"id": "a", "value": true, "timestamp": "t0"}]
        });

        let records = transform(&payload, "rows").unwrap();
        assert_eq!(records, vec![Record::new("a", "true", "t0")]);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let payload = json!({
            "results": [{"id": 1, "value": 10.5, "timestamp": "t"}]
        });

        let first = transform(&payload, "results").unwrap();
        let second = transform(&payload, "results").unwrap();
        assert_eq!(first, second);
    }
}

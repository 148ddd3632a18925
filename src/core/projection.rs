use crate::domain::model::{json_number, DinosaurRecord, Field};
use serde_json::Value;

/// Projects `key` out of `record`, falling back to the record's id.
///
/// The fallback applies when `key` is absent, does not name a known field, or
/// names a field holding an empty value: an empty string, or a length of zero
/// (or NaN). `mya` always projects.
pub fn project(record: &DinosaurRecord, key: Option<&str>) -> Value {
    key.and_then(|k| k.parse::<Field>().ok())
        .and_then(|field| field_value(record, field))
        .unwrap_or_else(|| Value::String(record.id.clone()))
}

fn field_value(record: &DinosaurRecord, field: Field) -> Option<Value> {
    match field {
        Field::Id => non_empty(&record.id),
        Field::Name => non_empty(&record.name),
        Field::Pronunciation => non_empty(&record.pronunciation),
        Field::MeaningOfName => non_empty(&record.meaning_of_name),
        Field::Diet => non_empty(&record.diet),
        Field::Period => non_empty(&record.period),
        Field::Info => non_empty(&record.info),
        Field::LengthInMeters => {
            let length = record.length_in_meters;
            if length == 0.0 || length.is_nan() {
                None
            } else {
                Some(json_number(length))
            }
        }
        Field::Mya => Some(record.mya.to_json()),
    }
}

fn non_empty(value: &str) -> Option<Value> {
    if value.is_empty() {
        None
    } else {
        Some(Value::String(value.to_string()))
    }
}

//! Deep merge of object trees.

use crate::{
    error::Error,
    paths::Location,
    value::{JsonType, JsonValue, Map},
};

/// Merges `overlay` into `base`, producing a new object tree.
///
/// Keys present in both inputs merge recursively when both values are
/// objects; in every other case the overlay value wins wholesale, including
/// an explicit `Null` (which overwrites, never deletes) and kind conflicts
/// such as object vs. array. Neither input is mutated. The result keeps
/// base keys in base order and appends overlay-only keys in overlay order.
///
/// # Errors
///
/// [`Error::TypeMismatch`] when either input is not an object.
pub fn deep_merge(base: &JsonValue, overlay: &JsonValue) -> Result<JsonValue, Error> {
    match (base, overlay) {
        (JsonValue::Object(base), JsonValue::Object(overlay)) => {
            Ok(JsonValue::Object(merge_objects(base, overlay)))
        }
        (JsonValue::Object(_), other) | (other, _) => Err(Error::type_mismatch(
            Location::new(),
            JsonType::Object,
            other.json_type(),
        )),
    }
}

fn merge_objects(base: &Map, overlay: &Map) -> Map {
    let mut merged = base.clone();
    for (key, overlay_value) in overlay {
        let merged_value = match (merged.get(key), overlay_value) {
            (Some(JsonValue::Object(b)), JsonValue::Object(o)) => {
                JsonValue::Object(merge_objects(b, o))
            }
            _ => overlay_value.clone(),
        };
        merged.insert(key.clone(), merged_value);
    }
    merged
}

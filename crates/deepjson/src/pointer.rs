//! Path-addressed access to JSON trees.

use crate::{
    error::{Error, PathErrorKind},
    paths::{Location, Segment},
    value::{JsonValue, Map},
};

/// Resolves `path` against `root`.
///
/// Returns `None` when any segment is missing or addresses the wrong kind.
/// Absence is an ordinary result, distinct from a present `Null`; resolution
/// never fails. An empty path returns the root itself.
#[must_use]
pub fn get_path<'v>(root: &'v JsonValue, path: &[Segment<'_>]) -> Option<&'v JsonValue> {
    path.iter()
        .try_fold(root, |target, segment| match (target, segment) {
            (JsonValue::Object(map), Segment::Key(key)) => map.get(key.as_ref()),
            (JsonValue::Array(items), Segment::Index(index)) => items.get(*index),
            _ => None,
        })
}

/// Returns a new tree identical to `root` except that the location addressed
/// by `path` holds `value`.
///
/// Missing intermediate members addressed by a string key are created as
/// empty objects. The input is never mutated, and no partially-updated tree
/// exists on failure: the output is assembled root-down from clones only
/// once the whole path has resolved.
///
/// # Errors
///
/// [`Error::InvalidPath`] when the path is empty, a segment descends into a
/// scalar, a segment kind does not match the container it addresses, or an
/// array index is at or beyond the current length (there is no sparse-array
/// vivification policy).
pub fn set_path(
    root: &JsonValue,
    path: &[Segment<'_>],
    value: JsonValue,
) -> Result<JsonValue, Error> {
    let Some((first, rest)) = path.split_first() else {
        return Err(Error::invalid_path(Location::new(), PathErrorKind::Empty));
    };
    set_in(root, first, rest, value, &Location::new())
}

fn set_in(
    current: &JsonValue,
    segment: &Segment<'_>,
    rest: &[Segment<'_>],
    value: JsonValue,
    location: &Location,
) -> Result<JsonValue, Error> {
    let location = location.join(segment);
    match (current, segment) {
        (JsonValue::Object(map), Segment::Key(key)) => {
            let member = match rest.split_first() {
                None => value,
                Some((next, tail)) => match map.get(key.as_ref()) {
                    Some(existing) => set_in(existing, next, tail, value, &location)?,
                    // Auto-vivification: a missing member on a key path
                    // starts as an empty object.
                    None => set_in(&JsonValue::Object(Map::default()), next, tail, value, &location)?,
                },
            };
            let mut map = map.clone();
            map.insert(key.as_ref().to_owned(), member);
            Ok(JsonValue::Object(map))
        }
        (JsonValue::Array(items), Segment::Index(index)) => {
            if *index >= items.len() {
                return Err(Error::invalid_path(
                    location,
                    PathErrorKind::OutOfBounds {
                        index: *index,
                        len: items.len(),
                    },
                ));
            }
            let element = match rest.split_first() {
                None => value,
                Some((next, tail)) => set_in(&items[*index], next, tail, value, &location)?,
            };
            let mut items = items.clone();
            items[*index] = element;
            Ok(JsonValue::Array(items))
        }
        (JsonValue::Object(_), Segment::Index(index)) => Err(Error::invalid_path(
            location,
            PathErrorKind::IndexIntoObject(*index),
        )),
        (JsonValue::Array(_), Segment::Key(_)) => {
            Err(Error::invalid_path(location, PathErrorKind::KeyIntoArray))
        }
        (scalar, _) => Err(Error::invalid_path(
            location,
            PathErrorKind::ScalarDescent(scalar.json_type()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use test_case::test_case;

    use super::{get_path, set_path};
    use crate::{
        error::{Error, PathErrorKind},
        paths::Segment,
        value::{JsonType, JsonValue},
    };

    fn tree(value: serde_json::Value) -> JsonValue {
        JsonValue::from(value)
    }

    #[test]
    fn get_traverses_objects_and_arrays() {
        let root = tree(json!({"user": {"hobbies": ["reading", "music"]}}));
        let path: [Segment; 3] = ["user".into(), "hobbies".into(), 0.into()];
        assert_eq!(get_path(&root, &path), Some(&JsonValue::from("reading")));
    }

    #[test]
    fn get_empty_path_returns_root() {
        let root = tree(json!({"a": 1}));
        assert_eq!(get_path(&root, &[]), Some(&root));
    }

    #[test_case(&["b".into()]; "missing key")]
    #[test_case(&["a".into(), "b".into()]; "descent into scalar")]
    #[test_case(&["a".into(), 0.into()]; "index into number")]
    #[test_case(&["items".into(), 5.into()]; "index out of bounds")]
    #[test_case(&["items".into(), "x".into()]; "key into array")]
    fn get_absence_is_none(path: &[Segment<'_>]) {
        let root = tree(json!({"a": 1, "items": [1, 2]}));
        assert_eq!(get_path(&root, path), None);
    }

    #[test]
    fn get_distinguishes_null_from_absent() {
        let root = tree(json!({"a": null}));
        assert_eq!(get_path(&root, &["a".into()]), Some(&JsonValue::Null));
        assert_eq!(get_path(&root, &["b".into()]), None);
    }

    #[test]
    fn set_vivifies_missing_objects() {
        let root = tree(json!({}));
        let path: [Segment; 3] = ["a".into(), "b".into(), "c".into()];
        let updated = set_path(&root, &path, JsonValue::from(5u64)).expect("valid path");
        assert_eq!(updated, json!({"a": {"b": {"c": 5}}}));
        // The input is untouched.
        assert_eq!(root, json!({}));
    }

    #[test_case(json!({"a": {"b": 1}}), &["a".into(), "b".into()], json!(2), json!({"a": {"b": 2}}); "replace nested member")]
    #[test_case(json!({"a": [1, 2, 3]}), &["a".into(), 1.into()], json!(9), json!({"a": [1, 9, 3]}); "replace array element")]
    #[test_case(json!({"a": 1}), &["a".into()], json!(null), json!({"a": null}); "set null keeps key present")]
    #[test_case(json!({"a": [{"b": 1}]}), &["a".into(), 0.into(), "b".into()], json!(2), json!({"a": [{"b": 2}]}); "descend through array")]
    fn set_then_get(
        root: serde_json::Value,
        path: &[Segment<'_>],
        value: serde_json::Value,
        expected: serde_json::Value,
    ) {
        let value = tree(value);
        let updated = set_path(&tree(root), path, value.clone()).expect("valid path");
        assert_eq!(updated, expected);
        assert_eq!(get_path(&updated, path), Some(&value));
    }

    #[test]
    fn set_empty_path_fails() {
        let error = set_path(&tree(json!({})), &[], JsonValue::Null).expect_err("empty path");
        assert!(matches!(
            error,
            Error::InvalidPath {
                kind: PathErrorKind::Empty,
                ..
            }
        ));
    }

    #[test]
    fn set_rejects_sparse_array_index() {
        let root = tree(json!({"a": [1, 2, 3]}));
        let path: [Segment; 2] = ["a".into(), 5.into()];
        let error = set_path(&root, &path, JsonValue::from(9u64)).expect_err("sparse index");
        match error {
            Error::InvalidPath { location, kind } => {
                assert_eq!(location.as_str(), "a.5");
                assert_eq!(kind, PathErrorKind::OutOfBounds { index: 5, len: 3 });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn set_rejects_append_index() {
        let root = tree(json!([1, 2]));
        let error = set_path(&root, &[2.into()], JsonValue::Null).expect_err("append index");
        assert!(matches!(
            error,
            Error::InvalidPath {
                kind: PathErrorKind::OutOfBounds { index: 2, len: 2 },
                ..
            }
        ));
    }

    #[test]
    fn set_rejects_scalar_descent() {
        let root = tree(json!({"a": 1}));
        let path: [Segment; 2] = ["a".into(), "b".into()];
        let error = set_path(&root, &path, JsonValue::Null).expect_err("scalar descent");
        match error {
            Error::InvalidPath { location, kind } => {
                assert_eq!(location.as_str(), "a.b");
                assert_eq!(kind, PathErrorKind::ScalarDescent(JsonType::Number));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn set_never_vivifies_arrays() {
        // "a" vivifies as an object, so the index segment cannot apply.
        let root = tree(json!({}));
        let path: [Segment; 2] = ["a".into(), 0.into()];
        let error = set_path(&root, &path, JsonValue::Null).expect_err("index into vivified object");
        match error {
            Error::InvalidPath { location, kind } => {
                assert_eq!(location.as_str(), "a.0");
                assert_eq!(kind, PathErrorKind::IndexIntoObject(0));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn set_rejects_key_into_array() {
        let root = tree(json!({"a": [1]}));
        let path: [Segment; 2] = ["a".into(), "x".into()];
        let error = set_path(&root, &path, JsonValue::Null).expect_err("key into array");
        assert!(matches!(
            error,
            Error::InvalidPath {
                kind: PathErrorKind::KeyIntoArray,
                ..
            }
        ));
    }
}

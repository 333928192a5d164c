//! # deepjson
//!
//! Deep-structure utilities for JSON value trees: deep merge, path-addressed
//! get/set, required-field presence validation, and reversible tagging of
//! values outside the native JSON type set.
//!
//! All operations are pure functions over their inputs: trees are borrowed,
//! never mutated, and every result is a new, independently owned value.
//! Parsing and serialization of JSON text stay outside this crate; trees
//! cross the boundary via `serde_json::Value` conversions or the `serde`
//! impls on [`JsonValue`].
//!
//! ```
//! use deepjson::{deep_merge, get_path, JsonValue, Segment};
//! use serde_json::json;
//!
//! let base = JsonValue::from(json!({"a": 1, "b": {"x": 1}}));
//! let overlay = JsonValue::from(json!({"b": {"y": 2}, "c": 3}));
//! let merged = deep_merge(&base, &overlay)?;
//! assert_eq!(merged, json!({"a": 1, "b": {"x": 1, "y": 2}, "c": 3}));
//!
//! let path: [Segment; 2] = ["b".into(), "y".into()];
//! assert_eq!(get_path(&merged, &path), Some(&JsonValue::from(2u64)));
//! # Ok::<(), deepjson::Error>(())
//! ```
mod error;
mod merge;
mod paths;
mod pointer;
mod presence;
mod tags;
mod value;

pub use error::{Error, PathErrorKind};
pub use merge::deep_merge;
pub use paths::{Location, Segment};
pub use pointer::{get_path, set_path};
pub use presence::{
    is_valid, iter_violations, RequiredFieldSet, RequiredFields, Violation, ViolationKind,
    Violations,
};
pub use tags::{TagRegistry, Untagged};
pub use value::{JsonType, JsonValue, Map, Number};

//! Required-field presence validation.
//!
//! A general-purpose structural walk: for every object in the tree, the
//! caller-supplied rule source names the keys that must be present and
//! non-null. Schema-level rules (min/max, format) are out of scope and
//! belong to an external rule engine.

use std::collections::VecDeque;

use ahash::AHashMap;

use crate::{
    paths::{Location, Segment},
    value::JsonValue,
};

/// Source of required-key rules.
///
/// Rules are keyed by the dotted [`Location`] of the object being inspected;
/// the root object is addressed by the empty location.
pub trait RequiredFields {
    fn required(&self, location: &Location) -> &[String];
}

/// Map-backed [`RequiredFields`] implementation.
#[derive(Debug, Clone, Default)]
pub struct RequiredFieldSet {
    rules: AHashMap<Location, Vec<String>>,
}

impl RequiredFieldSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires `keys` on the object at `location`.
    pub fn require<I, S>(&mut self, location: impl Into<Location>, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules
            .entry(location.into())
            .or_default()
            .extend(keys.into_iter().map(Into::into));
        self
    }
}

impl RequiredFields for RequiredFieldSet {
    fn required(&self, location: &Location) -> &[String] {
        self.rules.get(location).map_or(&[], Vec::as_slice)
    }
}

/// Why a required key was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The key is structurally absent.
    Missing,
    /// The key is present with value `Null`.
    Null,
}

/// A single required-presence violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path to the offending key.
    pub location: Location,
    pub kind: ViolationKind,
}

/// Creates a lazy iterator over presence violations in `instance`.
///
/// Violations come out in document order: an object's own rule violations
/// first (in rule order), then its members' subtrees. An empty sequence
/// means the tree is valid. The walk restarts from the top every time a new
/// iterator is created over the same inputs.
pub fn iter_violations<'v, R: RequiredFields>(
    instance: &'v JsonValue,
    rules: &'v R,
) -> Violations<'v, R> {
    Violations {
        rules,
        stack: vec![(Location::new(), instance)],
        pending: VecDeque::new(),
    }
}

/// Returns `true` when `instance` has no presence violations under `rules`.
#[must_use]
pub fn is_valid<R: RequiredFields>(instance: &JsonValue, rules: &R) -> bool {
    iter_violations(instance, rules).next().is_none()
}

/// Lazy iterator created by [`iter_violations`].
#[derive(Debug)]
pub struct Violations<'v, R> {
    rules: &'v R,
    stack: Vec<(Location, &'v JsonValue)>,
    pending: VecDeque<Violation>,
}

impl<R: RequiredFields> Iterator for Violations<'_, R> {
    type Item = Violation;

    fn next(&mut self) -> Option<Violation> {
        loop {
            if let Some(violation) = self.pending.pop_front() {
                return Some(violation);
            }
            let (location, value) = self.stack.pop()?;
            match value {
                JsonValue::Object(map) => {
                    for key in self.rules.required(&location) {
                        let kind = match map.get(key) {
                            None => ViolationKind::Missing,
                            Some(JsonValue::Null) => ViolationKind::Null,
                            Some(_) => continue,
                        };
                        self.pending.push_back(Violation {
                            location: location.join(key.as_str()),
                            kind,
                        });
                    }
                    // Reverse push keeps the pop order first-member-first.
                    for (key, member) in map.iter().rev() {
                        self.stack.push((location.join(key.as_str()), member));
                    }
                }
                JsonValue::Array(items) => {
                    for (index, element) in items.iter().enumerate().rev() {
                        self.stack.push((location.join(Segment::index(index)), element));
                    }
                }
                _ => {}
            }
        }
    }
}

use std::fmt;

use crate::paths::Location;
use crate::value::JsonType;

/// Failure raised by tree operations.
///
/// Absence is never an error: missing paths are `None`, presence violations
/// are iterator items, and unrecognized tag shapes pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operation received a value of the wrong kind for a required
    /// position.
    TypeMismatch {
        location: Location,
        expected: JsonType,
        actual: JsonType,
    },
    /// A path traversal or assignment could not proceed.
    InvalidPath {
        location: Location,
        kind: PathErrorKind,
    },
    /// No codec is registered for the type being tagged.
    UnknownTag { name: String },
    /// A registered codec rejected the payload of a tag.
    TagDecode { name: String, actual: JsonType },
}

/// Why a path operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathErrorKind {
    /// `set_path` requires a non-empty path.
    Empty,
    /// A segment tried to descend into a scalar of the given kind.
    ScalarDescent(JsonType),
    /// A string key was applied to an array.
    KeyIntoArray,
    /// A numeric index was applied to an object.
    IndexIntoObject(usize),
    /// An array index at or beyond the current length. There is no
    /// sparse-array vivification policy.
    OutOfBounds { index: usize, len: usize },
}

impl Error {
    pub(crate) fn type_mismatch(location: Location, expected: JsonType, actual: JsonType) -> Self {
        Error::TypeMismatch {
            location,
            expected,
            actual,
        }
    }

    pub(crate) fn invalid_path(location: Location, kind: PathErrorKind) -> Self {
        Error::InvalidPath { location, kind }
    }

    pub(crate) fn unknown_tag(name: impl Into<String>) -> Self {
        Error::UnknownTag { name: name.into() }
    }

    pub(crate) fn tag_decode(name: impl Into<String>, actual: JsonType) -> Self {
        Error::TagDecode {
            name: name.into(),
            actual,
        }
    }

    /// The dotted location the error refers to, where one applies.
    #[must_use]
    pub fn location(&self) -> Option<&Location> {
        match self {
            Error::TypeMismatch { location, .. } | Error::InvalidPath { location, .. } => {
                Some(location)
            }
            Error::UnknownTag { .. } | Error::TagDecode { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TypeMismatch {
                location,
                expected,
                actual,
            } => {
                write!(f, "type mismatch")?;
                write_location(f, location)?;
                write!(f, ": expected {expected}, got {actual}")
            }
            Error::InvalidPath { location, kind } => {
                write!(f, "invalid path")?;
                write_location(f, location)?;
                match kind {
                    PathErrorKind::Empty => write!(f, ": path is empty"),
                    PathErrorKind::ScalarDescent(kind) => {
                        write!(f, ": cannot descend into {kind}")
                    }
                    PathErrorKind::KeyIntoArray => {
                        write!(f, ": string key applied to an array")
                    }
                    PathErrorKind::IndexIntoObject(index) => {
                        write!(f, ": numeric index {index} applied to an object")
                    }
                    PathErrorKind::OutOfBounds { index, len } => {
                        write!(f, ": index {index} out of bounds for array of length {len}")
                    }
                }
            }
            Error::UnknownTag { name } => write!(f, "no tag codec registered for '{name}'"),
            Error::TagDecode { name, actual } => {
                write!(f, "tag '{name}': codec rejected payload of kind {actual}")
            }
        }
    }
}

fn write_location(f: &mut fmt::Formatter<'_>, location: &Location) -> fmt::Result {
    if location.is_root() {
        Ok(())
    } else {
        write!(f, " at '{location}'")
    }
}

impl std::error::Error for Error {}

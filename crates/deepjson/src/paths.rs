use std::borrow::Cow;
use std::fmt;

/// A single step in a path through a JSON tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment<'a> {
    /// A string key for object members.
    Key(Cow<'a, str>),
    /// A numeric index for array elements.
    Index(usize),
}

impl<'a> Segment<'a> {
    #[must_use]
    pub fn key(key: impl Into<Cow<'a, str>>) -> Self {
        Segment::Key(key.into())
    }

    #[must_use]
    pub fn index(index: usize) -> Self {
        Segment::Index(index)
    }
}

impl<'a> From<&'a str> for Segment<'a> {
    fn from(value: &'a str) -> Self {
        Segment::Key(Cow::Borrowed(value))
    }
}

impl From<String> for Segment<'_> {
    fn from(value: String) -> Self {
        Segment::Key(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Segment<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Segment::Key(value)
    }
}

impl From<usize> for Segment<'_> {
    fn from(value: usize) -> Self {
        Segment::Index(value)
    }
}

impl<'a> From<&Segment<'a>> for Segment<'a> {
    fn from(value: &Segment<'a>) -> Self {
        value.clone()
    }
}

/// Dotted path to a location inside a tree, e.g. `user.hobbies.0`.
///
/// The root is the empty location. Used for violation reports and error
/// context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    #[must_use]
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Returns a new location extended by `segment`.
    #[must_use]
    pub fn join<'a>(&self, segment: impl Into<Segment<'a>>) -> Self {
        let mut path = String::with_capacity(self.0.len() + 8);
        path.push_str(&self.0);
        if !path.is_empty() {
            path.push('.');
        }
        match segment.into() {
            Segment::Key(key) => path.push_str(&key),
            Segment::Index(index) => {
                let mut buffer = itoa::Buffer::new();
                path.push_str(buffer.format(index));
            }
        }
        Self(path)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Location {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Location, Segment};

    #[test]
    fn join_renders_dotted_paths() {
        let location = Location::new().join("user").join("hobbies").join(0);
        assert_eq!(location.as_str(), "user.hobbies.0");
    }

    #[test]
    fn root_is_empty() {
        let root = Location::new();
        assert!(root.is_root());
        assert!(!root.join("a").is_root());
    }

    #[test]
    fn segment_conversions() {
        assert_eq!(Segment::from("a"), Segment::key("a"));
        assert_eq!(Segment::from(3), Segment::index(3));
        assert_eq!(Segment::from("a".to_owned()), Segment::key("a"));
    }
}

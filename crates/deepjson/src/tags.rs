//! Reversible tagging of values outside the native JSON type set.
//!
//! A tag is the transient wire shape `{"_type": <name>, "value": <payload>}`.
//! It exists only between [`TagRegistry::tag`] and [`TagRegistry::untag`];
//! nothing in this crate persists it independently.

use std::any::{Any, TypeId};
use std::fmt;

use ahash::AHashMap;

use crate::{
    error::Error,
    value::{JsonValue, Map},
};

const TYPE_KEY: &str = "_type";
const VALUE_KEY: &str = "value";

type EncodeFn = Box<dyn Fn(&dyn Any) -> Option<JsonValue> + Send + Sync>;
type DecodeFn = Box<dyn Fn(&JsonValue) -> Option<Box<dyn Any + Send + Sync>> + Send + Sync>;

struct Codec {
    name: String,
    encode: EncodeFn,
    decode: DecodeFn,
}

/// Open registry of tag codecs, extensible by the caller.
///
/// Codecs are indexed both by Rust type (for tagging) and by tag name (for
/// untagging). Registering an existing name or type replaces the earlier
/// codec. Codecs are `Send + Sync`, so a registry built once can be shared
/// across threads behind a shared reference.
#[derive(Default)]
pub struct TagRegistry {
    codecs: Vec<Codec>,
    by_name: AHashMap<String, usize>,
    by_type: AHashMap<TypeId, usize>,
}

impl TagRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a codec pair for `T` under `name`.
    ///
    /// `encode` produces the canonical JSON payload; `decode` reconstructs
    /// `T` from it, returning `None` for payloads it does not recognize.
    pub fn register<T, E, D>(&mut self, name: impl Into<String>, encode: E, decode: D)
    where
        T: Any + Send + Sync,
        E: Fn(&T) -> JsonValue + Send + Sync + 'static,
        D: Fn(&JsonValue) -> Option<T> + Send + Sync + 'static,
    {
        let name = name.into();
        let index = self.codecs.len();
        self.codecs.push(Codec {
            name: name.clone(),
            encode: Box::new(move |value| value.downcast_ref::<T>().map(&encode)),
            decode: Box::new(move |value| {
                decode(value).map(|decoded| Box::new(decoded) as Box<dyn Any + Send + Sync>)
            }),
        });
        self.by_name.insert(name, index);
        self.by_type.insert(TypeId::of::<T>(), index);
    }

    /// Wraps `value` as `{"_type": <name>, "value": <encoded payload>}`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownTag`] when no codec is registered for `T`.
    pub fn tag<T: Any>(&self, value: &T) -> Result<JsonValue, Error> {
        let Some(codec) = self
            .by_type
            .get(&TypeId::of::<T>())
            .and_then(|&index| self.codecs.get(index))
        else {
            return Err(Error::unknown_tag(std::any::type_name::<T>()));
        };
        match (codec.encode)(value) {
            Some(payload) => {
                let mut map = Map::default();
                map.insert(TYPE_KEY.to_owned(), JsonValue::String(codec.name.clone()));
                map.insert(VALUE_KEY.to_owned(), payload);
                Ok(JsonValue::Object(map))
            }
            // The codec was found through `T`'s own `TypeId`.
            None => Err(Error::unknown_tag(codec.name.clone())),
        }
    }

    /// Recognizes the exact two-key tag shape and reconstructs the original
    /// typed value.
    ///
    /// Anything that is not a tag passes through unchanged as
    /// [`Untagged::Plain`]. A tag whose name has no registered codec also
    /// passes through: it belongs to some other producer.
    ///
    /// # Errors
    ///
    /// [`Error::TagDecode`] when a registered codec rejects the payload.
    pub fn untag<'v>(&self, value: &'v JsonValue) -> Result<Untagged<'v>, Error> {
        let Some((name, payload)) = tag_shape(value) else {
            return Ok(Untagged::Plain(value));
        };
        let Some(codec) = self
            .by_name
            .get(name)
            .and_then(|&index| self.codecs.get(index))
        else {
            return Ok(Untagged::Plain(value));
        };
        match (codec.decode)(payload) {
            Some(revived) => Ok(Untagged::Revived(revived)),
            None => Err(Error::tag_decode(name, payload.json_type())),
        }
    }

    /// Typed convenience over [`untag`](Self::untag): `None` means the value
    /// passed through, or revived as a type other than `T`.
    ///
    /// # Errors
    ///
    /// [`Error::TagDecode`] when a registered codec rejects the payload.
    pub fn untag_as<T: Any>(&self, value: &JsonValue) -> Result<Option<T>, Error> {
        match self.untag(value)? {
            Untagged::Revived(revived) => Ok(revived.downcast::<T>().ok().map(|boxed| *boxed)),
            Untagged::Plain(_) => Ok(None),
        }
    }
}

impl fmt::Debug for TagRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("TagRegistry").field("names", &names).finish()
    }
}

/// Result of [`TagRegistry::untag`].
#[derive(Debug)]
pub enum Untagged<'v> {
    /// The value carried a registered tag and was reconstructed.
    Revived(Box<dyn Any + Send + Sync>),
    /// The value is not a recognized tag and passes through unchanged.
    Plain(&'v JsonValue),
}

/// Matches the exact `{"_type": <string>, "value": <payload>}` shape.
fn tag_shape(value: &JsonValue) -> Option<(&str, &JsonValue)> {
    let JsonValue::Object(map) = value else {
        return None;
    };
    if map.len() != 2 {
        return None;
    }
    let JsonValue::String(name) = map.get(TYPE_KEY)? else {
        return None;
    };
    Some((name, map.get(VALUE_KEY)?))
}

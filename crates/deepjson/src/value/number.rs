use std::hash::{Hash, Hasher};

/// Numeric JSON value.
///
/// The integer/float split is internal and keeps `u64`/`i64` round-trips
/// exact; the data model exposes a single numeric kind and consumers pick a
/// representation via the accessors.
#[derive(Debug, Copy, Clone)]
pub enum Number {
    PositiveInteger(u64),
    NegativeInteger(i64),
    Float(f64),
}

impl Number {
    #[must_use]
    pub fn as_u64(self) -> Option<u64> {
        match self {
            Number::PositiveInteger(u) => Some(u),
            Number::NegativeInteger(_) | Number::Float(_) => None,
        }
    }

    #[must_use]
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Number::PositiveInteger(u) => i64::try_from(u).ok(),
            Number::NegativeInteger(i) => Some(i),
            Number::Float(_) => None,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::PositiveInteger(u) => u as f64,
            Number::NegativeInteger(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::PositiveInteger(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        u64::try_from(value).map_or(Number::NegativeInteger(value), Number::PositiveInteger)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::PositiveInteger(a), Number::PositiveInteger(b)) => a == b,
            (Number::NegativeInteger(a), Number::NegativeInteger(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, h: &mut H) {
        match *self {
            Number::PositiveInteger(i) => i.hash(h),
            Number::NegativeInteger(i) => i.hash(h),
            Number::Float(f) => {
                if f == 0.0f64 {
                    0.0f64.to_bits().hash(h);
                } else {
                    f.to_bits().hash(h);
                }
            }
        }
    }
}

//! Deterministic string keys for cache and memoization lookups.
//!
//! A value is classified into a [`KeyShape`] and the shape decides the
//! encoding. The shapes are tried in a fixed order:
//!
//! 1. absence (`None`, `()`, JSON `null`) encodes as `"nil"`
//! 2. text is returned verbatim
//! 3. bytes are read as text, lossily
//! 4. a single integer is written in base 10
//! 5. an integer sequence is the concatenation of its elements, with no
//!    separator, so `[1, 2, 3]` and `"123"` share a key
//! 6. anything else is serialized as JSON, or becomes `"error:<message>"`
//!    when serialization fails
//!
//! ```
//! use helpers::create_cache_key;
//!
//! assert_eq!(create_cache_key(&None::<i32>), "nil");
//! assert_eq!(create_cache_key(&-42i64), "-42");
//! assert_eq!(create_cache_key(&vec![1u16, 2, 3, 4, 5]), "12345");
//! assert_eq!(create_cache_key(&3.14159), "3.14159");
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::Value;

/// A fixed-width integer widened to 128 bits, keeping its signedness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Integer {
    Signed(i128),
    Unsigned(u128),
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(n) => write!(f, "{n}"),
            Self::Unsigned(n) => write!(f, "{n}"),
        }
    }
}

/// How a value takes part in key encoding.
#[derive(Debug)]
pub enum KeyShape<'a> {
    /// No value; encodes as `"nil"`.
    Nil,
    /// Text returned verbatim.
    Text(Cow<'a, str>),
    /// Raw bytes, read as UTF-8 with replacement.
    Bytes(Cow<'a, [u8]>),
    /// A single integer in base 10.
    Integer(Integer),
    /// Integers concatenated without a separator.
    Integers(Vec<Integer>),
    /// JSON text of the value, or the serializer error.
    Structured(serde_json::Result<String>),
}

/// Values that can be turned into a cache key.
///
/// Implemented for strings, byte buffers, integers and integer sequences,
/// `Option`, common containers and JSON values. Wrap any other
/// `Serialize` type in [`Structured`].
pub trait CacheKey {
    fn key_shape(&self) -> KeyShape<'_>;
}

/// Build the cache key for `value`. Never fails.
pub fn create_cache_key<K: CacheKey + ?Sized>(value: &K) -> String {
    match value.key_shape() {
        KeyShape::Nil => "nil".to_owned(),
        KeyShape::Text(text) => text.into_owned(),
        KeyShape::Bytes(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        KeyShape::Integer(n) => n.to_string(),
        KeyShape::Integers(items) => items.iter().map(ToString::to_string).collect(),
        KeyShape::Structured(Ok(json)) => json,
        KeyShape::Structured(Err(e)) => {
            tracing::warn!("Cache key serialization failed: {e}");
            format!("error:{e}")
        }
    }
}

fn structured<T: Serialize + ?Sized>(value: &T) -> KeyShape<'static> {
    KeyShape::Structured(serde_json::to_string(value))
}

/// Encodes the wrapped value as JSON.
///
/// ```
/// use helpers::{create_cache_key, Structured};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Page {
///     number: u32,
///     tag: &'static str,
/// }
///
/// let key = create_cache_key(&Structured(Page { number: 2, tag: "rust" }));
/// assert_eq!(key, r#"{"number":2,"tag":"rust"}"#);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Structured<T>(pub T);

impl<T: Serialize> CacheKey for Structured<T> {
    fn key_shape(&self) -> KeyShape<'_> {
        structured(&self.0)
    }
}

// --- Absence and indirection ---

impl CacheKey for () {
    fn key_shape(&self) -> KeyShape<'_> {
        KeyShape::Nil
    }
}

impl<T: CacheKey> CacheKey for Option<T> {
    fn key_shape(&self) -> KeyShape<'_> {
        match self {
            Some(value) => value.key_shape(),
            None => KeyShape::Nil,
        }
    }
}

impl<T: CacheKey + ?Sized> CacheKey for &T {
    fn key_shape(&self) -> KeyShape<'_> {
        (**self).key_shape()
    }
}

impl<T: CacheKey + ?Sized> CacheKey for Box<T> {
    fn key_shape(&self) -> KeyShape<'_> {
        (**self).key_shape()
    }
}

// --- Text and bytes ---

impl CacheKey for str {
    fn key_shape(&self) -> KeyShape<'_> {
        KeyShape::Text(Cow::Borrowed(self))
    }
}

impl CacheKey for String {
    fn key_shape(&self) -> KeyShape<'_> {
        KeyShape::Text(Cow::Borrowed(self))
    }
}

impl CacheKey for char {
    fn key_shape(&self) -> KeyShape<'_> {
        KeyShape::Text(Cow::Owned(self.to_string()))
    }
}

impl CacheKey for [u8] {
    fn key_shape(&self) -> KeyShape<'_> {
        KeyShape::Bytes(Cow::Borrowed(self))
    }
}

impl CacheKey for Vec<u8> {
    fn key_shape(&self) -> KeyShape<'_> {
        KeyShape::Bytes(Cow::Borrowed(self))
    }
}

impl<const N: usize> CacheKey for [u8; N] {
    fn key_shape(&self) -> KeyShape<'_> {
        KeyShape::Bytes(Cow::Borrowed(self))
    }
}

// --- Integers ---

macro_rules! integer_keys {
    ($variant:ident as $wide:ty: $($ty:ty),*) => {$(
        impl From<$ty> for Integer {
            fn from(value: $ty) -> Self {
                Self::$variant(value as $wide)
            }
        }

        impl CacheKey for $ty {
            fn key_shape(&self) -> KeyShape<'_> {
                KeyShape::Integer(Integer::from(*self))
            }
        }
    )*};
}

integer_keys!(Signed as i128: i8, i16, i32, i64, i128, isize);
integer_keys!(Unsigned as u128: u8, u16, u32, u64, u128, usize);

// u8 sequences are bytes and handled above.
macro_rules! integer_sequence_keys {
    ($($ty:ty),*) => {$(
        impl CacheKey for [$ty] {
            fn key_shape(&self) -> KeyShape<'_> {
                KeyShape::Integers(self.iter().map(|&n| Integer::from(n)).collect())
            }
        }

        impl CacheKey for Vec<$ty> {
            fn key_shape(&self) -> KeyShape<'_> {
                self.as_slice().key_shape()
            }
        }

        impl<const N: usize> CacheKey for [$ty; N] {
            fn key_shape(&self) -> KeyShape<'_> {
                self.as_slice().key_shape()
            }
        }
    )*};
}

integer_sequence_keys!(i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize);

// --- Structured fallbacks ---

macro_rules! structured_keys {
    ($($ty:ty),*) => {$(
        impl CacheKey for $ty {
            fn key_shape(&self) -> KeyShape<'_> {
                structured(self)
            }
        }
    )*};
}

structured_keys!(bool, Vec<String>, Vec<&str>, Vec<bool>, Vec<Value>);

// JSON has no NaN or infinity; serde_json would write them as `null`.
fn finite_or_error<T: Serialize + ?Sized>(
    value: &T,
    non_finite: Option<String>,
) -> KeyShape<'static> {
    match non_finite {
        Some(bad) => KeyShape::Structured(Err(serde_json::Error::custom(format!(
            "unsupported value: {bad}"
        )))),
        None => structured(value),
    }
}

macro_rules! float_keys {
    ($($ty:ty),*) => {$(
        impl CacheKey for $ty {
            fn key_shape(&self) -> KeyShape<'_> {
                finite_or_error(self, (!self.is_finite()).then(|| self.to_string()))
            }
        }

        impl CacheKey for Vec<$ty> {
            fn key_shape(&self) -> KeyShape<'_> {
                let bad = self.iter().find(|n| !n.is_finite()).map(ToString::to_string);
                finite_or_error(self, bad)
            }
        }
    )*};
}

float_keys!(f32, f64);

impl<K, V, S> CacheKey for HashMap<K, V, S>
where
    K: Serialize + Eq + Hash,
    V: Serialize,
    S: BuildHasher,
{
    fn key_shape(&self) -> KeyShape<'_> {
        structured(self)
    }
}

impl<K: Serialize + Ord, V: Serialize> CacheKey for BTreeMap<K, V> {
    fn key_shape(&self) -> KeyShape<'_> {
        structured(self)
    }
}

impl CacheKey for Value {
    fn key_shape(&self) -> KeyShape<'_> {
        match self {
            Value::Null => KeyShape::Nil,
            Value::String(text) => KeyShape::Text(Cow::Borrowed(text)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    KeyShape::Integer(Integer::Signed(i.into()))
                } else if let Some(u) = n.as_u64() {
                    KeyShape::Integer(Integer::Unsigned(u.into()))
                } else {
                    structured(self)
                }
            }
            _ => structured(self),
        }
    }
}

//!
//! Serde-related.
//!

use serde::{de, Serialize, Serializer};

use crate::{Secret, Strategy};

/// Marker trait for secret types which can be [`Serialize`]-d by [`serde`].
///
/// Types marked with this trait receive a [`Serialize`] impl for
/// `Secret<T>`, while all types which impl `DeserializeOwned` receive a
/// [`serde::Deserialize`] impl. The asymmetry is deliberate: serialization
/// is where a secret leaves the process, so it has to be opted into.
pub trait SerializableSecret: Serialize {}

impl SerializableSecret for String {}

impl<'de, T, I> de::Deserialize<'de> for Secret<T, I>
where
    T: de::DeserializeOwned + Sized,
    I: Strategy<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

impl<T, I> Serialize for Secret<T, I>
where
    T: SerializableSecret + Sized,
    I: Strategy<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.inner_secret.serialize(serializer)
    }
}

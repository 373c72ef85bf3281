//! serde helpers for the data document.

use serde::{Deserialize, Deserializer};

/// An explicit `null` reads like a missing field: the type's default.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

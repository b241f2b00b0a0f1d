//! Lenient decoding for provider payloads.

use serde::{Deserialize, Deserializer};

/// Decode a field whose value may be JSON `null`, using the type's default
/// in that case.
///
/// Pair with `#[serde(default)]` so that absent fields also fall back.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

use serde::{Deserialize, Deserializer};

/// Deserialize a value that may come as JSON `null`, falling back to `T::default()`.
///
/// The RPC functions build their payload with `json_build_object`, so absent
/// relations, empty aggregates and unset money columns arrive as `null`
/// rather than being omitted.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

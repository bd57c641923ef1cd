// Helper functions for request deserialization

use serde::{Deserialize, Deserializer};

/// Deserializes a field that must be present in the payload but may be `null`
///
/// Plain `Option<T>` fields treat a missing key as `None`; routing through
/// `deserialize_with` makes serde report the key as missing instead.
pub fn required_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

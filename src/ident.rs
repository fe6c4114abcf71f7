use uuid::Uuid;

use crate::error::ApiError;

/// Turn a client-supplied id string into the store-native identifier.
/// Malformed input is a client error, never a server fault.
pub fn decode(text: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(text.trim()).map_err(|_| ApiError::InvalidIdentifier)
}

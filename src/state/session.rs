//! Persisted session record
//!
//! The session is stored as the JSON form of the signed-in [`User`]. Reading
//! it back goes through [`decode_session`], which checks both the shape and
//! the content of the record.

use crate::models::User;
use crate::utils::errors::{LmsError, Result};
use crate::utils::helpers::is_valid_email;

/// Serialize a user for storage
pub fn encode_session(user: &User) -> Result<String> {
    Ok(serde_json::to_string(user)?)
}

/// Parse and validate a stored session record
pub fn decode_session(raw: &str) -> Result<User> {
    let user: User = serde_json::from_str(raw)
        .map_err(|e| LmsError::InvalidSession(format!("record does not match the user schema: {}", e)))?;

    validate_user(&user)?;
    Ok(user)
}

fn validate_user(user: &User) -> Result<()> {
    if user.id.trim().is_empty() {
        return Err(LmsError::InvalidSession("empty user id".to_string()));
    }
    if user.name.trim().is_empty() {
        return Err(LmsError::InvalidSession("empty user name".to_string()));
    }
    if !is_valid_email(&user.email) {
        return Err(LmsError::InvalidSession(format!("malformed email '{}'", user.email)));
    }
    Ok(())
}

//! Error mapping shared by the domain services.

use crate::domain::Error;
use crate::domain::ports::PasswordHasherError;

pub(crate) fn map_hasher_error(error: PasswordHasherError) -> Error {
    match error {
        PasswordHasherError::Backend { message } => {
            Error::internal(format!("password hashing failed: {message}"))
        }
    }
}

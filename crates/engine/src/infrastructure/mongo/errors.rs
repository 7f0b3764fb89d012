//! Translation of MongoDB driver errors into [`RepoError`].
//!
//! This is the only place that inspects driver error shapes. Everything above
//! the adapter sees `RepoError::Duplicate` or a generic database error.

use mongodb::error::{Error, ErrorKind, InsertManyError, WriteFailure};

use crate::infrastructure::ports::RepoError;

/// Server error code for a unique index violation.
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// Map a driver error raised by `operation`.
pub fn map_mongo_error(operation: &'static str, err: Error) -> RepoError {
    match duplicate_key_message(&err) {
        Some(message) => {
            let key_value = duplicate_key_value(&message).unwrap_or(message.as_str());
            RepoError::duplicate(key_value)
        }
        None => RepoError::database(operation, err),
    }
}

fn duplicate_key_message(err: &Error) -> Option<String> {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            Some(write_error.message.clone())
        }
        ErrorKind::InsertMany(InsertManyError {
            write_errors: Some(write_errors),
            ..
        }) => write_errors
            .iter()
            .find(|e| e.code == DUPLICATE_KEY_CODE)
            .map(|e| e.message.clone()),
        _ => None,
    }
}

/// Extract the `{ field: value }` part of an E11000 message.
///
/// `E11000 duplicate key error collection: db.pokemons index: no_1 dup key: { no: 25 }`
/// yields `{ no: 25 }`.
pub fn duplicate_key_value(message: &str) -> Option<&str> {
    let (_, key_value) = message.split_once("dup key:")?;
    let key_value = key_value.trim();
    (!key_value.is_empty()).then_some(key_value)
}

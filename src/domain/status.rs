use crate::error::{PayloadError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The well-known status tokens a domain operation can report.
///
/// A `Payload` stores its status as plain text, so callers are free to use
/// tokens outside this set. `Status` exists so that the common ones can be
/// matched exhaustively and compared without typos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Accepted,
    Authenticated,
    Authorized,
    Created,
    Deleted,
    Error,
    Failure,
    Found,
    NotAccepted,
    NotAuthenticated,
    NotAuthorized,
    NotCreated,
    NotDeleted,
    NotFound,
    NotUpdated,
    NotValid,
    Processing,
    Success,
    Updated,
    Valid,
}

impl Status {
    /// Every well-known token, in alphabetical order of its text.
    pub const ALL: [Status; 20] = [
        Status::Accepted,
        Status::Authenticated,
        Status::Authorized,
        Status::Created,
        Status::Deleted,
        Status::Error,
        Status::Failure,
        Status::Found,
        Status::NotAccepted,
        Status::NotAuthenticated,
        Status::NotAuthorized,
        Status::NotCreated,
        Status::NotDeleted,
        Status::NotFound,
        Status::NotUpdated,
        Status::NotValid,
        Status::Processing,
        Status::Success,
        Status::Updated,
        Status::Valid,
    ];

    /// The exact token text, e.g. `"NOT_FOUND"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Accepted => "ACCEPTED",
            Status::Authenticated => "AUTHENTICATED",
            Status::Authorized => "AUTHORIZED",
            Status::Created => "CREATED",
            Status::Deleted => "DELETED",
            Status::Error => "ERROR",
            Status::Failure => "FAILURE",
            Status::Found => "FOUND",
            Status::NotAccepted => "NOT_ACCEPTED",
            Status::NotAuthenticated => "NOT_AUTHENTICATED",
            Status::NotAuthorized => "NOT_AUTHORIZED",
            Status::NotCreated => "NOT_CREATED",
            Status::NotDeleted => "NOT_DELETED",
            Status::NotFound => "NOT_FOUND",
            Status::NotUpdated => "NOT_UPDATED",
            Status::NotValid => "NOT_VALID",
            Status::Processing => "PROCESSING",
            Status::Success => "SUCCESS",
            Status::Updated => "UPDATED",
            Status::Valid => "VALID",
        }
    }

    /// True for the tokens that describe an unsuccessful outcome.
    pub fn is_negative(&self) -> bool {
        matches!(
            self,
            Status::Error
                | Status::Failure
                | Status::NotAccepted
                | Status::NotAuthenticated
                | Status::NotAuthorized
                | Status::NotCreated
                | Status::NotDeleted
                | Status::NotFound
                | Status::NotUpdated
                | Status::NotValid
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self> {
        Status::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| PayloadError::UnknownStatus(s.to_string()))
    }
}

impl TryFrom<&str> for Status {
    type Error = PayloadError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

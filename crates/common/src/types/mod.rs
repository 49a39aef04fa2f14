use serde::{Deserialize, Serialize};

/// Body returned by `GET /` so callers can tell which service answered.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RootMessage {
    pub msg: String,
}

impl RootMessage {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Error body shared by every non-2xx response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub detail: String,
}

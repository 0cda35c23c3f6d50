use serde::{Deserialize, Serialize};

use crate::types::True;

/// Body shape of non-2xx API responses.
#[derive(Clone, PartialEq, Eq, Deserialize, Debug)]
pub struct ErrorResponse {
    pub message: String,
}

// The API returns {success: true} as a result of state changes
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct SuccessResponse {
    pub success: True,
}

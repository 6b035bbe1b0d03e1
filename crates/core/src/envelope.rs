//! The wire-format response wrapper.

use serde::{Deserialize, Serialize};

use crate::field_errors::FieldErrors;

/// Fixed-shape body returned for every request.
///
/// ```json
/// {"isSuccess": false, "message": "...", "data": null, "validationErrors": {"field": ["..."]}}
/// ```
///
/// `data` is always serialized (as `null` when absent); `validationErrors`
/// is omitted entirely unless the request failed validation. Fields are
/// private so a failure envelope can never carry data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    is_success: bool,
    message: String,
    data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    validation_errors: Option<FieldErrors>,
}

impl<T> Envelope<T> {
    pub(crate) fn success(message: String, data: Option<T>) -> Self {
        Self {
            is_success: true,
            message,
            data,
            validation_errors: None,
        }
    }

    pub(crate) fn failure(message: String) -> Self {
        Self {
            is_success: false,
            message,
            data: None,
            validation_errors: None,
        }
    }

    pub(crate) fn validation_failure(message: String, errors: FieldErrors) -> Self {
        Self {
            is_success: false,
            message,
            data: None,
            validation_errors: Some(errors),
        }
    }

    pub fn is_success(&self) -> bool {
        self.is_success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn validation_errors(&self) -> Option<&FieldErrors> {
        self.validation_errors.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

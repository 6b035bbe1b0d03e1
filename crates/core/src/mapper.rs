//! Outcome to `(status, envelope)` mapping.

use crate::envelope::Envelope;
use crate::outcome::Outcome;
use crate::status::Status;

/// Translate an outcome into the status code and body sent to the caller.
///
/// Pure and total: every variant has exactly one row in the decision table
/// and nothing here can fail.
///
/// | Outcome            | Status | isSuccess | data    | validationErrors |
/// |--------------------|--------|-----------|---------|------------------|
/// | `Success`          | 200    | true      | payload | absent           |
/// | `SuccessEmpty`     | 201    | true      | null    | absent           |
/// | `NotFound`         | 404    | false     | null    | absent           |
/// | `ValidationFailed` | 422    | false     | null    | present          |
/// | `Unauthorized`     | 401    | false     | null    | absent           |
/// | `Forbidden`        | 403    | false     | null    | absent           |
/// | `RateLimited`      | 429    | false     | null    | absent           |
/// | `InternalFault`    | 500    | false     | null    | absent           |
pub fn map<T>(outcome: Outcome<T>) -> (Status, Envelope<T>) {
    let status = outcome.kind().status();

    let envelope = match outcome {
        Outcome::Success { payload, message } => Envelope::success(message, Some(payload)),
        Outcome::SuccessEmpty { message } => Envelope::success(message, None),
        Outcome::ValidationFailed { errors, message } => {
            Envelope::validation_failure(message, errors)
        }
        Outcome::NotFound { message }
        | Outcome::Unauthorized { message }
        | Outcome::Forbidden { message }
        | Outcome::RateLimited { message }
        | Outcome::InternalFault { message } => Envelope::failure(message),
    };

    (status, envelope)
}

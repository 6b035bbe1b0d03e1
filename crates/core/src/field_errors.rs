//! Per-field validation messages.
//!
//! [`FieldErrors`] is the payload of a validation failure. It preserves the
//! order fields were added in and guarantees that every field carries at
//! least one message, so a present key always explains itself on the wire.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::outcome::Outcome;

/// Ordered mapping from field name to the messages reported for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<String, Vec<String>>",
    into = "IndexMap<String, Vec<String>>"
)]
pub struct FieldErrors(IndexMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one message to `field`, creating the field if needed.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Set all messages for `field`, replacing any already recorded.
    ///
    /// Fails with [`CoreError::InvalidArgument`] when `messages` is empty.
    pub fn insert<I, M>(&mut self, field: impl Into<String>, messages: I) -> Result<(), CoreError>
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        let field = field.into();
        let messages: Vec<String> = messages.into_iter().map(Into::into).collect();
        if messages.is_empty() {
            return Err(CoreError::InvalidArgument(format!(
                "field '{field}' has no validation messages"
            )));
        }
        self.0.insert(field, messages);
        Ok(())
    }

    /// Build from `(field, messages)` pairs, rejecting any field with no messages.
    pub fn from_pairs<I, K, V, M>(pairs: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = M>,
        M: Into<String>,
    {
        let mut errors = Self::new();
        for (field, messages) in pairs {
            errors.insert(field, messages)?;
        }
        Ok(errors)
    }

    /// Convert the result of a `validator::Validate` run.
    ///
    /// Fields are sorted by name since `validator` reports them in hash order.
    /// Each error contributes its custom message, falling back to its code.
    /// Nested struct and list errors are not flattened, so the result is
    /// empty when only those failed.
    pub fn from_validator(errors: &validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| (field.to_string(), errs))
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let mut out = Self::new();
        for (field, errs) in fields {
            for err in errs {
                let message = match &err.message {
                    Some(message) => message.to_string(),
                    None => err.code.to_string(),
                };
                out.push(field.clone(), message);
            }
        }
        out
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl TryFrom<IndexMap<String, Vec<String>>> for FieldErrors {
    type Error = CoreError;

    fn try_from(map: IndexMap<String, Vec<String>>) -> Result<Self, Self::Error> {
        Self::from_pairs(map)
    }
}

impl From<FieldErrors> for IndexMap<String, Vec<String>> {
    fn from(errors: FieldErrors) -> Self {
        errors.0
    }
}

/// Build a validation-failure outcome from raw per-field messages.
///
/// Fails construction, not the request: an empty map or a field with no
/// messages is rejected with [`CoreError::InvalidArgument`].
pub fn build_validation_failure<T, I, K, V, M>(errors: I) -> Result<Outcome<T>, CoreError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: IntoIterator<Item = M>,
    M: Into<String>,
{
    Outcome::validation_failed(FieldErrors::from_pairs(errors)?)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[test]
    fn push_groups_messages_under_one_field() {
        let mut errors = FieldErrors::new();
        errors.push("username", "Username is required");
        errors.push("email", "Email is required");
        errors.push("username", "Username must be 8 character long");

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get("username").unwrap(),
            ["Username is required", "Username must be 8 character long"]
        );
        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, ["username", "email"]);
    }

    #[test]
    fn insert_rejects_empty_message_list() {
        let mut errors = FieldErrors::new();
        let result = errors.insert("field", Vec::<String>::new());

        assert_matches!(result, Err(CoreError::InvalidArgument(_)));
        assert!(errors.is_empty());
    }

    #[test]
    fn build_validation_failure_rejects_field_without_messages() {
        let result: Result<Outcome<()>, _> =
            build_validation_failure([("field", Vec::<&str>::new())]);

        assert_matches!(result, Err(CoreError::InvalidArgument(msg)) if msg.contains("field"));
    }

    #[test]
    fn build_validation_failure_rejects_empty_map() {
        let result: Result<Outcome<()>, _> =
            build_validation_failure(Vec::<(&str, Vec<&str>)>::new());

        assert_matches!(result, Err(CoreError::InvalidArgument(_)));
    }

    #[test]
    fn build_validation_failure_keeps_messages_in_order() {
        let outcome: Outcome<()> = build_validation_failure([
            ("username", vec!["Username is required", "Username must be 8 character long"]),
            ("email", vec!["Email is required"]),
        ])
        .unwrap();

        assert_matches!(outcome, Outcome::ValidationFailed { errors, .. } => {
            assert_eq!(errors.get("username").unwrap().len(), 2);
            assert_eq!(errors.get("email").unwrap(), ["Email is required"]);
        });
    }

    #[test]
    fn deserialize_rejects_empty_message_list() {
        let result: Result<FieldErrors, _> = serde_json::from_str(r#"{"name": []}"#);
        assert!(result.is_err());

        let ok: FieldErrors = serde_json::from_str(r#"{"name": ["Name is required"]}"#).unwrap();
        assert_eq!(ok.get("name").unwrap(), ["Name is required"]);
    }

    #[derive(Validate)]
    struct SignUp {
        #[validate(length(min = 8, message = "Username must be 8 character long"))]
        username: String,
        #[validate(email)]
        email: String,
    }

    #[test]
    fn from_validator_uses_message_or_code() {
        let input = SignUp {
            username: "ann".into(),
            email: "not-an-email".into(),
        };
        let report = input.validate().unwrap_err();

        let errors = FieldErrors::from_validator(&report);

        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, ["email", "username"]);
        assert_eq!(
            errors.get("username").unwrap(),
            ["Username must be 8 character long"]
        );
        assert_eq!(errors.get("email").unwrap(), ["email"]);
    }
}

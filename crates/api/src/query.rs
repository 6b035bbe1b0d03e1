//! Shared query parameter types for API handlers.

use courier_core::{CoreError, FieldErrors};
use serde::Deserialize;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Generic pagination parameters (`?page=&limit=`).
///
/// Pages are 1-indexed. Values are not clamped; an out-of-range page simply
/// returns no items.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PageParams {
    /// Resolve to `(page, limit)`, applying defaults.
    ///
    /// Zero values are reported as a validation failure on the offending
    /// parameter.
    pub fn resolve(&self) -> Result<(u32, u32), CoreError> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);

        let mut errors = FieldErrors::new();
        if page == 0 {
            errors.push("page", "page must be at least 1");
        }
        if limit == 0 {
            errors.push("limit", "limit must be at least 1");
        }
        if !errors.is_empty() {
            return Err(CoreError::Validation(errors));
        }

        Ok((page, limit))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn defaults_to_first_page_of_ten() {
        assert_eq!(PageParams::default().resolve().unwrap(), (1, 10));
    }

    #[test]
    fn zero_values_fail_validation() {
        let params = PageParams {
            page: Some(0),
            limit: Some(0),
        };

        assert_matches!(params.resolve(), Err(CoreError::Validation(errors)) => {
            assert_eq!(errors.get("page").unwrap(), ["page must be at least 1"]);
            assert_eq!(errors.get("limit").unwrap(), ["limit must be at least 1"]);
        });
    }
}

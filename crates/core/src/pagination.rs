//! Paginated list payloads.
//!
//! Pages are 1-indexed. Nothing here clamps `page` or `limit`: a page past
//! the end is a valid request that yields no items while still reporting the
//! true total.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::outcome::Outcome;

/// `data` shape for list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedPayload<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// Wrap one page of items in a success outcome.
///
/// Rejects `page == 0`, `limit == 0`, and pages holding more than `limit`
/// items with [`CoreError::InvalidArgument`].
pub fn build_paginated<T>(
    items: Vec<T>,
    total: u64,
    page: u32,
    limit: u32,
) -> Result<Outcome<PaginatedPayload<T>>, CoreError> {
    check_bounds(page, limit)?;
    if items.len() as u64 > u64::from(limit) {
        return Err(CoreError::InvalidArgument(format!(
            "page holds {} items but limit is {limit}",
            items.len()
        )));
    }

    Ok(Outcome::success(PaginatedPayload {
        items,
        total,
        page,
        limit,
    }))
}

/// Cut page `page` out of a full ordered collection.
///
/// `total` is the number of items in `all`. Pass the parts on to
/// [`build_paginated`] to produce the outcome.
pub fn paginate<I>(all: I, page: u32, limit: u32) -> Result<PaginatedPayload<I::Item>, CoreError>
where
    I: IntoIterator,
{
    check_bounds(page, limit)?;

    let offset = u64::from(page - 1) * u64::from(limit);
    let mut total: u64 = 0;
    let mut items = Vec::new();
    for item in all {
        if total >= offset && items.len() < limit as usize {
            items.push(item);
        }
        total += 1;
    }

    Ok(PaginatedPayload {
        items,
        total,
        page,
        limit,
    })
}

fn check_bounds(page: u32, limit: u32) -> Result<(), CoreError> {
    if page == 0 {
        return Err(CoreError::InvalidArgument("page must be at least 1".into()));
    }
    if limit == 0 {
        return Err(CoreError::InvalidArgument("limit must be at least 1".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn payload<T>(outcome: Outcome<PaginatedPayload<T>>) -> PaginatedPayload<T> {
        match outcome {
            Outcome::Success { payload, .. } => payload,
            other => panic!("expected success, got {:?}", other.kind()),
        }
    }

    #[test]
    fn second_page_of_120() {
        let items: Vec<u32> = (11..=20).collect();

        let page = payload(build_paginated(items.clone(), 120, 2, 10).unwrap());

        assert_eq!(
            page,
            PaginatedPayload {
                items,
                total: 120,
                page: 2,
                limit: 10
            }
        );
    }

    #[test]
    fn rejects_zero_page_and_limit() {
        assert_matches!(
            build_paginated(Vec::<u8>::new(), 0, 0, 10),
            Err(CoreError::InvalidArgument(_))
        );
        assert_matches!(
            build_paginated(Vec::<u8>::new(), 0, 1, 0),
            Err(CoreError::InvalidArgument(_))
        );
    }

    #[test]
    fn rejects_oversized_page() {
        assert_matches!(
            build_paginated(vec![1, 2, 3], 3, 1, 2),
            Err(CoreError::InvalidArgument(msg)) if msg.contains("limit is 2")
        );
    }

    #[test]
    fn paginate_slices_requested_page() {
        let page = paginate(1..=25, 3, 10).unwrap();

        assert_eq!(page.items, (21..=25).collect::<Vec<_>>());
        assert_eq!(page.total, 25);
        assert_eq!(page.page, 3);
    }

    #[test]
    fn page_past_the_end_is_empty_but_keeps_total() {
        let page = paginate(1..=25, 9, 10).unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 25);
        assert_eq!(page.page, 9);
    }
}

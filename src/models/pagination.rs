//! Shared pagination types for list endpoints

use serde::{Deserialize, Serialize};

const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 100;

/// Query-string parameters accepted by paginated list endpoints
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PageParams {
    /// Effective limit, clamped to 1..=100
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Effective offset, never negative
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

/// One page of results plus the total row count
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, params: PageParams) -> Self {
        Self {
            items,
            total,
            limit: params.limit(),
            offset: params.offset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_clamping() {
        let params = PageParams { limit: Some(500), offset: None };
        assert_eq!(params.limit(), 100);

        let params = PageParams { limit: Some(0), offset: None };
        assert_eq!(params.limit(), 1);

        let params = PageParams { limit: None, offset: None };
        assert_eq!(params.limit(), 20);
    }

    #[test]
    fn test_offset_never_negative() {
        let params = PageParams { limit: None, offset: Some(-5) };
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_page_carries_effective_params() {
        let params = PageParams { limit: Some(10), offset: Some(30) };
        let page = Page::new(vec![1, 2, 3], 57, params);
        assert_eq!(page.limit, 10);
        assert_eq!(page.offset, 30);
        assert_eq!(page.total, 57);
        assert_eq!(page.items.len(), 3);
    }
}

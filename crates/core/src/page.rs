//! Pagination envelope for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size used by list views.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// One page of a listed resource, as returned by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(alias = "totalCount", alias = "total")]
    pub total_count: u64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

/// Page number and size sent with every list request.
///
/// Pages are 1-based, matching the backend contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Query-string parameters for this request.
    pub fn to_query(self) -> Vec<(String, String)> {
        vec![
            ("page".into(), self.page.to_string()),
            ("page_size".into(), self.page_size.to_string()),
        ]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_clamps_to_one_based() {
        let req = PageRequest::new(0, 0);
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, 1);
    }

    #[test]
    fn query_parameters_are_explicit() {
        let q = PageRequest::new(3, 50).to_query();
        assert_eq!(
            q,
            vec![
                ("page".to_string(), "3".to_string()),
                ("page_size".to_string(), "50".to_string()),
            ]
        );
    }

    #[test]
    fn page_accepts_camel_case_total() {
        let page: Page<u32> = serde_json::from_str(r#"{"items":[1,2],"totalCount":7}"#).unwrap();
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.total_count, 7);
    }
}

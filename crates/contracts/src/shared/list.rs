use serde::{Deserialize, Serialize};

/// Query parameters for a paginated list endpoint.
///
/// `page` is 0-based on the client; the backend expects 1-based, so
/// `query_pairs` shifts it. Filter pairs are appended verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub page: usize,
    pub limit: usize,
    pub filters: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page,
            limit,
            filters: Vec::new(),
        }
    }

    pub fn with_filters(mut self, filters: Vec<(String, String)>) -> Self {
        self.filters = filters;
        self
    }

    /// All query pairs in wire form (`page` converted to 1-based).
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), (self.page + 1).to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        pairs.extend(self.filters.iter().cloned());
        pairs
    }
}

/// Pagination block of a list response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginationMeta {
    pub total: i64,
}

/// Wire shape of a list response: `{items, pagination: {total}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Normalized list result handed to view state.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T> From<ListEnvelope<T>> for ListPage<T> {
    fn from(env: ListEnvelope<T>) -> Self {
        Self {
            items: env.items,
            total_count: env.pagination.total.max(0) as usize,
        }
    }
}

/// Failure body returned by the API: `{success: false, message}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_shift_page_to_one_based() {
        let q = ListQuery::new(0, 25)
            .with_filters(vec![("role".to_string(), "agent".to_string())]);
        assert_eq!(
            q.query_pairs(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "25".to_string()),
                ("role".to_string(), "agent".to_string()),
            ]
        );
    }

    #[test]
    fn envelope_normalizes_negative_total() {
        let env = ListEnvelope::<i32> {
            items: vec![1, 2],
            pagination: PaginationMeta { total: -1 },
        };
        let page: ListPage<i32> = env.into();
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn error_body_parses() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"success":false,"message":"Email already exists"}"#)
                .expect("parse");
        assert!(!body.success);
        assert_eq!(body.message, "Email already exists");
    }
}

//! Pagination parameters for listing endpoints.
//!
//! Listing stored functions receive `limit` and `offset` inside their filter
//! document; this type normalizes what the client sent.

use serde::{Deserialize, Deserializer, Serialize};

const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 100;

fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PaginationParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub offset: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
}

impl PaginationParams {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// `page` wins over `offset` when both are present. Huge pages saturate
    /// at `i64::MAX` instead of overflowing.
    pub fn offset(&self) -> i64 {
        if let Some(page) = self.page {
            (page.max(1) - 1).saturating_mul(self.limit())
        } else {
            self.offset.unwrap_or(0).max(0)
        }
    }

    pub fn page(&self) -> Option<i64> {
        self.page.map(|p| p.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.limit(), DEFAULT_LIMIT);
        assert_eq!(params.offset(), 0);
        assert_eq!(params.page(), None);
    }

    #[test]
    fn test_limit_boundaries() {
        let cases = [(Some(0), 1), (Some(-5), 1), (Some(50), 50), (Some(101), MAX_LIMIT)];

        for (input, expected) in cases {
            let params = PaginationParams {
                limit: input,
                ..Default::default()
            };
            assert_eq!(params.limit(), expected);
        }
    }

    #[test]
    fn test_page_overrides_offset() {
        let params = PaginationParams {
            limit: Some(10),
            offset: Some(999),
            page: Some(3),
        };
        assert_eq!(params.offset(), 20);
    }

    #[test]
    fn test_huge_page_saturates() {
        let params: PaginationParams =
            serde_json::from_str(r#"{"limit":"100","page":"9223372036854775807"}"#).unwrap();
        assert_eq!(params.offset(), i64::MAX);

        let params = PaginationParams {
            page: Some(i64::MIN),
            ..Default::default()
        };
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_negative_offset_is_zero() {
        let params = PaginationParams {
            offset: Some(-3),
            ..Default::default()
        };
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_deserialize_query_strings() {
        let params: PaginationParams =
            serde_json::from_str(r#"{"limit":"25","page":"2"}"#).unwrap();
        assert_eq!(params.limit(), 25);
        assert_eq!(params.offset(), 25);
    }

    #[test]
    fn test_deserialize_empty_strings() {
        let params: PaginationParams =
            serde_json::from_str(r#"{"limit":"","offset":""}"#).unwrap();
        assert_eq!(params.limit(), DEFAULT_LIMIT);
        assert_eq!(params.offset(), 0);
    }
}

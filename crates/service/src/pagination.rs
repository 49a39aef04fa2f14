//! Offset pagination shared by every list operation.

use serde::Deserialize;

pub const DEFAULT_LIMIT: u64 = 100;

/// Largest value the SQL drivers bind for OFFSET/LIMIT (signed 64-bit).
pub const MAX_BOUND: u64 = i64::MAX as u64;

/// `?skip=&limit=` query parameters. `limit` has no upper bound; both values
/// are clamped to [`MAX_BOUND`], which already exceeds any table size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawPagination")]
pub struct Pagination {
    /// rows to skip from the start
    pub skip: u64,
    /// max rows returned
    pub limit: u64,
}

#[derive(Deserialize)]
struct RawPagination {
    #[serde(default)]
    skip: u64,
    #[serde(default = "default_limit")]
    limit: u64,
}

fn default_limit() -> u64 { DEFAULT_LIMIT }

impl From<RawPagination> for Pagination {
    fn from(raw: RawPagination) -> Self {
        Pagination::new(raw.skip, raw.limit)
    }
}

impl Pagination {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip: skip.min(MAX_BOUND), limit: limit.min(MAX_BOUND) }
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { skip: 0, limit: DEFAULT_LIMIT } }
}

#[cfg(test)]
mod tests {
    use super::{Pagination, MAX_BOUND};

    #[test]
    fn missing_params_use_defaults() {
        let p: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(p, Pagination::default());
        assert_eq!(p.skip, 0);
        assert_eq!(p.limit, 100);
    }

    #[test]
    fn large_limit_is_kept() {
        let p: Pagination = serde_json::from_str(r#"{"skip": 5, "limit": 100000}"#).unwrap();
        assert_eq!(p, Pagination::new(5, 100_000));
    }

    #[test]
    fn values_past_i64_are_clamped() {
        let p: Pagination = serde_json::from_str(r#"{"skip": 18446744073709551615, "limit": 9223372036854775808}"#).unwrap();
        assert_eq!(p.skip, MAX_BOUND);
        assert_eq!(p.limit, MAX_BOUND);
        assert_eq!(MAX_BOUND, 9_223_372_036_854_775_807);
    }

    #[test]
    fn negative_skip_rejected() {
        assert!(serde_json::from_str::<Pagination>(r#"{"skip": -1}"#).is_err());
    }
}

//! Limit/offset pagination for list endpoints

/// Hard cap on `limit`; larger values are clamped, not rejected
pub const MAX_LIMIT: i64 = 50;

/// `limit` when the query omits it
pub const DEFAULT_LIMIT: i64 = 10;

/// Rejected pagination input
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("invalid limit value")]
    InvalidLimit,

    #[error("invalid offset value")]
    InvalidOffset,
}

/// Validated pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    limit: i64,
    offset: i64,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// - `limit` must be positive and is clamped to 50
    /// - `offset` must not be negative
    pub fn new(limit: i64, offset: i64) -> Result<Self, PaginationError> {
        if limit <= 0 {
            return Err(PaginationError::InvalidLimit);
        }
        if offset < 0 {
            return Err(PaginationError::InvalidOffset);
        }

        Ok(Self {
            limit: limit.min(MAX_LIMIT),
            offset,
        })
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Raw query parameters.
///
/// Kept as strings so malformed numbers are reported with our own message
/// instead of the extractor's rejection.
#[derive(Debug, Clone, Default)]
pub struct PaginationParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Collect from decoded query pairs. A repeated key keeps its first value;
/// unknown keys are ignored.
impl FromIterator<(String, String)> for PaginationParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut params.limit,
                "offset" => &mut params.offset,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

impl TryFrom<PaginationParams> for Pagination {
    type Error = PaginationError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        let limit = match present(params.limit) {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| PaginationError::InvalidLimit)?,
            None => DEFAULT_LIMIT,
        };
        let offset = match present(params.offset) {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| PaginationError::InvalidOffset)?,
            None => 0,
        };

        Self::new(limit, offset)
    }
}

// An empty `?limit=` counts as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

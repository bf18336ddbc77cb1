use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Default page when the query string omits `page`.
pub const DEFAULT_PAGE: u64 = 1;

/// Default page size when the query string omits `limit`.
pub const DEFAULT_LIMIT: u64 = 10;

/// Comparison operator named in a filter key (`<field>.<criteria>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criteria {
    Equal,
    NotEqual,
    GreaterThanOrEqual,
    LessThanOrEqual,
    GreaterThan,
    LessThan,
    In,
}

impl Criteria {
    pub const ALL: [Criteria; 7] = [
        Criteria::Equal,
        Criteria::NotEqual,
        Criteria::GreaterThanOrEqual,
        Criteria::LessThanOrEqual,
        Criteria::GreaterThan,
        Criteria::LessThan,
        Criteria::In,
    ];

    /// Name as it appears in the query string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Criteria::Equal => "equal",
            Criteria::NotEqual => "notEqual",
            Criteria::GreaterThanOrEqual => "greaterThanOrEqual",
            Criteria::LessThanOrEqual => "lessThanOrEqual",
            Criteria::GreaterThan => "greaterThan",
            Criteria::LessThan => "lessThan",
            Criteria::In => "in",
        }
    }

    /// Exact, case-sensitive lookup. `None` means no criterion was recognized.
    pub fn lookup(name: &str) -> Option<Criteria> {
        match name {
            "equal" => Some(Criteria::Equal),
            "notEqual" => Some(Criteria::NotEqual),
            "greaterThanOrEqual" => Some(Criteria::GreaterThanOrEqual),
            "lessThanOrEqual" => Some(Criteria::LessThanOrEqual),
            "greaterThan" => Some(Criteria::GreaterThan),
            "lessThan" => Some(Criteria::LessThan),
            "in" => Some(Criteria::In),
            _ => None,
        }
    }

    /// Whether the operator takes a list rather than a single value.
    pub const fn is_list(self) -> bool {
        matches!(self, Criteria::In)
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown criteria `{0}`")]
pub struct UnknownCriteria(pub String);

impl FromStr for Criteria {
    type Err = UnknownCriteria;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Criteria::lookup(s).ok_or_else(|| UnknownCriteria(s.to_string()))
    }
}

/// One `<field>.<criteria>=<v1>[,<v2>...]` pair from the query string.
///
/// `values` keeps query-string order; list operators coerce by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterClause {
    pub field: String,
    pub criteria: Criteria,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Store-side direction: `1` ascending, `-1` descending.
    pub const fn direction(self) -> i8 {
        match self {
            SortOrder::Asc => 1,
            SortOrder::Desc => -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sort order `{0}`, expected `asc` or `desc`")]
pub struct InvalidSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = InvalidSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(InvalidSortOrder(other.to_string())),
        }
    }
}

/// Normalized filter/sort/pagination request, built fresh per HTTP request.
///
/// `page` and `limit` are always `>= 1`; `order_by` is kept verbatim and
/// only normalized at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub page: u64,
    pub limit: u64,
    pub order_by: Option<String>,
    pub sort_order: SortOrder,
    pub filters: Vec<FilterClause>,
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            order_by: None,
            sort_order: SortOrder::Asc,
            filters: Vec::new(),
        }
    }
}

/// Pagination metadata derived after the store has counted the matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub total_count: u64,
    pub max_page: u64,
    pub next_cursor: u64,
}

impl PageInfo {
    /// The next page, only when it lies within `[1, max_page]`.
    pub fn cursor(&self) -> Option<u64> {
        (self.next_cursor > 0 && self.next_cursor <= self.max_page).then_some(self.next_cursor)
    }
}

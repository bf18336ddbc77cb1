// crates/adapt/src/mql/parser.rs

use super::error::QueryError;
use domain::query::{
    Criteria, FilterClause, QueryRequest, SortOrder, DEFAULT_LIMIT, DEFAULT_PAGE,
};

pub const PAGE_KEY: &str = "page";
pub const LIMIT_KEY: &str = "limit";
pub const ORDER_BY_KEY: &str = "orderBy";
pub const SORT_ORDER_KEY: &str = "sortOrder";

/// Parse a raw (still percent-encoded) query string.
pub fn parse_query_string(query: &str) -> Result<QueryRequest, QueryError> {
    parse_query(form_urlencoded::parse(query.as_bytes()).into_owned())
}

/// Parse decoded query-string pairs into a `QueryRequest`.
///
/// Reserved keys (`page`, `limit`, `orderBy`, `sortOrder`) are captured
/// separately; an empty reserved value counts as absent. Every other key
/// must be `<field>.<criteria>`. Filter clauses keep the input order.
pub fn parse_query<I, K, V>(pairs: I) -> Result<QueryRequest, QueryError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut page: Option<String> = None;
    let mut limit: Option<String> = None;
    let mut order_by: Option<String> = None;
    let mut sort_order: Option<String> = None;
    let mut filters = Vec::new();

    for (k, v) in pairs {
        let (key, value) = (k.as_ref(), v.as_ref());
        let slot = match key {
            PAGE_KEY => &mut page,
            LIMIT_KEY => &mut limit,
            ORDER_BY_KEY => &mut order_by,
            SORT_ORDER_KEY => &mut sort_order,
            _ => {
                filters.push(parse_filter(key, value)?);
                continue;
            }
        };
        *slot = Some(value).filter(|v| !v.is_empty()).map(str::to_string);
    }

    Ok(QueryRequest {
        page: parse_positive(PAGE_KEY, page.as_deref(), DEFAULT_PAGE)?,
        limit: parse_positive(LIMIT_KEY, limit.as_deref(), DEFAULT_LIMIT)?,
        order_by,
        sort_order: match sort_order {
            Some(s) => s
                .parse::<SortOrder>()
                .map_err(|_| QueryError::InvalidSortOrder(s))?,
            None => SortOrder::Asc,
        },
        filters,
    })
}

/// Parse one `<field>.<criteria>=<v1>[,<v2>...]` pair.
pub fn parse_filter(key: &str, value: &str) -> Result<FilterClause, QueryError> {
    let mut parts = key.split('.');
    let (field, criteria_name) = match (parts.next(), parts.next(), parts.next()) {
        (Some(field), Some(criteria), None) if !field.is_empty() => (field, criteria),
        _ => return Err(QueryError::InvalidKey(key.to_string())),
    };

    let criteria =
        Criteria::lookup(criteria_name).ok_or_else(|| QueryError::UnknownCriteria {
            key: key.to_string(),
            criteria: criteria_name.to_string(),
        })?;

    let values: Vec<String> = value.split(',').map(str::to_string).collect();
    if values.iter().any(String::is_empty) {
        return Err(QueryError::EmptyValue(key.to_string()));
    }

    Ok(FilterClause {
        field: field.to_string(),
        criteria,
        values,
    })
}

fn parse_positive(key: &'static str, raw: Option<&str>, default: u64) -> Result<u64, QueryError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.parse::<i64>() {
        Ok(n) if n >= 1 => Ok(n as u64),
        _ => Err(QueryError::InvalidPagination {
            key,
            value: raw.to_string(),
        }),
    }
}

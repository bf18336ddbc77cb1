// crates/adapt/src/mql/compiler.rs

use super::ast::{CmpOp, Predicate, Sort, Value, ValueList};
use super::case::to_snake_case;
use super::error::QueryError;
use super::fields::{FieldKind, FieldTable};
use bson::oid::ObjectId;
use domain::query::{Criteria, FilterClause, QueryRequest};

/// Output of compiling a `QueryRequest`: everything the store needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    pub predicate: Predicate,
    pub sort: Option<Sort>,
    pub page: u64,
    pub offset: u64,
    pub limit: u64,
}

/// Compile a parsed request against a field table.
///
/// Pure: the same request and table always yield the same output.
/// Filters are applied in order; two filters with the same key and
/// operator resolve last-write-wins.
pub fn compile(request: &QueryRequest, fields: &FieldTable) -> Result<CompiledQuery, QueryError> {
    let mut predicate = Predicate::new();

    for clause in &request.filters {
        let normalized = to_snake_case(&clause.field);
        let rule = fields.resolve(&normalized);
        let op = match rule.kind {
            FieldKind::Identifier => compile_identifier(clause)?,
            FieldKind::Scalar => compile_scalar(clause)?,
        };
        predicate.insert(rule.key, op);
    }

    let sort = request.order_by.as_deref().map(|order_by| {
        let normalized = to_snake_case(order_by);
        Sort {
            field: fields.resolve(&normalized).key.to_string(),
            direction: request.sort_order.direction(),
        }
    });

    Ok(CompiledQuery {
        predicate,
        sort,
        page: request.page,
        offset: offset(request.page, request.limit)?,
        limit: request.limit,
    })
}

/// `(page - 1) * limit`; `page` and `limit` are `>= 1`.
pub fn offset(page: u64, limit: u64) -> Result<u64, QueryError> {
    page.saturating_sub(1)
        .checked_mul(limit)
        .ok_or_else(|| QueryError::InvalidPagination {
            key: "page",
            value: page.to_string(),
        })
}

fn compile_scalar(clause: &FilterClause) -> Result<CmpOp, QueryError> {
    let c = clause.criteria;

    if c.is_list() {
        let ints: Result<Vec<i64>, _> = clause.values.iter().map(|v| v.parse::<i64>()).collect();
        let list = match ints {
            Ok(ints) => ValueList::Int(ints),
            Err(_) => ValueList::Str(clause.values.clone()),
        };
        return Ok(CmpOp::In(list));
    }

    let raw = single_value(clause)?;
    let value = match c {
        Criteria::Equal | Criteria::NotEqual => match raw.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Str(raw.to_string()),
        },
        _ => Value::Int(raw.parse::<i64>().map_err(|_| QueryError::InvalidNumericValue {
            criteria: c,
            value: raw.to_string(),
        })?),
    };

    Ok(with_operator(c, value))
}

fn compile_identifier(clause: &FilterClause) -> Result<CmpOp, QueryError> {
    if clause.criteria.is_list() {
        // One bad entry invalidates the whole list.
        let ids = clause
            .values
            .iter()
            .map(|v| parse_object_id(v.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(CmpOp::In(ValueList::Id(ids)));
    }

    let id = parse_object_id(single_value(clause)?)?;
    Ok(with_operator(clause.criteria, Value::Id(id)))
}

pub fn parse_object_id(raw: &str) -> Result<ObjectId, QueryError> {
    ObjectId::parse_str(raw).map_err(|_| QueryError::InvalidIdentifier(raw.to_string()))
}

fn single_value(clause: &FilterClause) -> Result<&str, QueryError> {
    match clause.values.as_slice() {
        [only] => Ok(only.as_str()),
        other => Err(QueryError::UnexpectedValueCount {
            criteria: clause.criteria,
            count: other.len(),
        }),
    }
}

fn with_operator(criteria: Criteria, value: Value) -> CmpOp {
    match criteria {
        Criteria::Equal => CmpOp::Eq(value),
        Criteria::NotEqual => CmpOp::Ne(value),
        Criteria::GreaterThanOrEqual => CmpOp::Gte(value),
        Criteria::LessThanOrEqual => CmpOp::Lte(value),
        Criteria::GreaterThan => CmpOp::Gt(value),
        Criteria::LessThan => CmpOp::Lt(value),
        Criteria::In => CmpOp::In(match value {
            Value::Int(n) => ValueList::Int(vec![n]),
            Value::Str(s) => ValueList::Str(vec![s]),
            Value::Id(id) => ValueList::Id(vec![id]),
        }),
    }
}

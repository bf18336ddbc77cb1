/// Logical field name that addresses the store's primary key.
pub const ID_FIELD: &str = "id";

/// Store attribute holding the primary key.
pub const ID_KEY: &str = "_id";

/// How values for a field are coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 24-char hex object id; every value must parse.
    Identifier,
    /// Integer when it parses, string otherwise (per operator rules).
    Scalar,
}

/// Resolved target of a logical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule<'a> {
    pub key: &'a str,
    pub kind: FieldKind,
}

/// Static table from normalized logical names to predicate keys and
/// coercion rules. Names not in the table pass through as scalar keys.
#[derive(Debug, Clone, Copy)]
pub struct FieldTable {
    entries: &'static [(&'static str, &'static str, FieldKind)],
}

impl FieldTable {
    pub const fn new(entries: &'static [(&'static str, &'static str, FieldKind)]) -> Self {
        Self { entries }
    }

    /// `field` must already be snake_case.
    pub fn resolve<'a>(&self, field: &'a str) -> FieldRule<'a> {
        self.entries
            .iter()
            .find(|(name, _, _)| *name == field)
            .map(|&(_, key, kind)| FieldRule { key, kind })
            .unwrap_or(FieldRule {
                key: field,
                kind: FieldKind::Scalar,
            })
    }
}

/// Only the identifier is special-cased.
pub static DEFAULT_FIELDS: FieldTable =
    FieldTable::new(&[(ID_FIELD, ID_KEY, FieldKind::Identifier)]);

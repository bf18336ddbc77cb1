pub mod ast;
pub mod case;
pub mod compiler;
pub mod error;
pub mod eval;
pub mod fields;
pub mod native;
pub mod page;
pub mod parser;
pub mod store;

pub use ast::{CmpOp, FieldPredicate, FindOptions, Predicate, Sort, Value, ValueList};
pub use case::to_snake_case;
pub use compiler::{compile, CompiledQuery};
pub use error::{QueryError, StoreError};
pub use eval::eval_predicate;
pub use fields::{FieldKind, FieldRule, FieldTable, DEFAULT_FIELDS, ID_FIELD, ID_KEY};
pub use parser::{parse_query, parse_query_string};
pub use store::{DocumentStore, InMemoryDocumentStore};

//! Schema-qualified table references.

use std::fmt;

/// Schema that unqualified names resolve to.
pub const DEFAULT_SCHEMA: &str = "main";

/// A table identified by its schema and name.
///
/// The parts are kept separate so names containing `.` survive a trip
/// through the catalog unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableRef {
    pub schema: String,
    pub name: String,
}

impl TableRef {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
        }
    }

    /// Table in [`DEFAULT_SCHEMA`].
    pub fn in_default_schema(name: impl Into<String>) -> Self {
        Self::new(DEFAULT_SCHEMA, name)
    }
}

/// Display name, omitting the default schema.
///
/// # Examples
/// ```
/// use mig_core::sql_utils::TableRef;
/// assert_eq!(TableRef::new("main", "users").to_string(), "users");
/// assert_eq!(TableRef::new("staging", "orders").to_string(), "staging.orders");
/// ```
impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.schema == DEFAULT_SCHEMA {
            f.write_str(&self.name)
        } else {
            write!(f, "{}.{}", self.schema, self.name)
        }
    }
}

//! # sqlb
//!
//! A fluent, dialect-aware SQL statement builder.
//!
//! ## Features
//!
//! - **Statement assembly**: chained clause calls build one SQL string plus
//!   the positionally aligned argument list, in fixed clause order
//! - **Dialect-aware quoting**: double quotes for Postgres/ANSI, backticks
//!   for MySQL
//! - **Safe parameterization**: Where-family values become `$N` placeholders
//!   with their sanitised text captured as arguments
//! - **Record mapping**: `#[derive(Record)]` turns a flat struct into the
//!   column and value lists of an INSERT or UPDATE
//! - **No execution**: the produced [`Statement`] is handed to whatever
//!   driver performs placeholder substitution; sqlb never touches a
//!   connection
//!
//! ## Example
//!
//! ```ignore
//! use sqlb::StatementBuilder;
//!
//! let mut builder = StatementBuilder::new();
//! let stmt = builder
//!     .from("myschema.mytable")
//!     .select(&["id", "name"])
//!     .and_where("status", "=", "active")
//!     .order_by("created_at", "DESC")
//!     .limit(10)
//!     .build();
//!
//! assert_eq!(
//!     stmt.sql(),
//!     r#"SELECT "id", "name" FROM "myschema"."mytable" WHERE "status" = $1 ORDER BY "created_at" DESC LIMIT 10"#
//! );
//! assert_eq!(stmt.args(), ["active"]);
//! ```
//!
//! ## Record mapping
//!
//! ```ignore
//! use sqlb::{Record, StatementBuilder};
//!
//! #[derive(Record)]
//! struct NewUser {
//!     username: String,
//!     #[sqlb(column = "email_address")]
//!     email: String,
//!     active: bool,
//! }
//!
//! let user = NewUser {
//!     username: "alice".into(),
//!     email: "alice@example.com".into(),
//!     active: true,
//! };
//!
//! let stmt = StatementBuilder::new()
//!     .build_insert("users", &user, "ON CONFLICT DO NOTHING")?;
//! # Ok::<(), sqlb::BuildError>(())
//! ```

pub mod builder;
pub mod clause;
pub mod dialect;
pub mod error;
pub mod record;
pub mod sanitise;

mod ident;

pub use builder::{Statement, StatementBuilder};
pub use clause::InList;
pub use dialect::Dialect;
pub use error::{BuildError, BuildResult};
pub use record::{Record, ToValue, Value};
pub use sanitise::sanitise;

#[cfg(feature = "derive")]
pub use sqlb_derive::Record;

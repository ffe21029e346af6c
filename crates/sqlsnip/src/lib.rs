//! # sqlsnip
//!
//! Snippet-driven dynamic SQL templating.
//!
//! ## Features
//!
//! - **Conditional clauses**: conditions vanish from the generated statement
//!   when their parameters are absent — one template serves every filter
//!   combination (AND-joined required clauses, OR-grouped alternatives)
//! - **Snippet expansion**: `/** name **/` references pull in registered
//!   fragments or clause composers
//! - **Typed parameter markers**: `@s:name@` / `@i:name@` markers are
//!   rewritten into dialect placeholders (`$1`, `?`, `?1`) with an ordered
//!   bound-value list matching the placeholder sequence exactly
//! - **Pure resolution**: templates and composers are built once and resolved
//!   any number of times; resolution never mutates them
//!
//! ## Example
//!
//! ```ignore
//! use sqlsnip::{ClauseMode, Postgres, SqlBuilder, params};
//!
//! let mut builder = SqlBuilder::new(Postgres);
//! builder
//!     .clauses("WHERE", " AND ", "WHERE ", "")
//!     .add_clause("status = @s:status@", params!(), ClauseMode::Required)
//!     .add_clause("age >= @i:min_age@", params!(), ClauseMode::Required);
//!
//! // `min_age` not supplied: its condition disappears.
//! let stmt = builder.resolve(
//!     "SELECT id, username FROM users /** WHERE **/ ORDER BY id",
//!     params! { "status" => "active" },
//! )?;
//!
//! assert_eq!(stmt.sql, "SELECT id, username FROM users WHERE status = $1 ORDER BY id");
//! assert_eq!(stmt.types, "s");
//! # Ok::<(), sqlsnip::BuildError>(())
//! ```

pub mod builder;
pub mod clauses;
pub mod dialect;
pub mod error;
pub mod template;
pub mod token;
pub mod value;

pub use builder::{Builder, SqlBuilder};
pub use clauses::{ClauseMode, Clauses};
pub use dialect::{Dialect, MySql, Postgres, Sqlite};
pub use error::{BuildError, BuildResult};
pub use template::{ResolvedStatement, Template, template};
pub use value::{ParamMap, Value};

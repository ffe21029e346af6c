//! Database-specific SQL rendering policies.
//!
//! A [`Dialect`] decides how a parameter marker becomes a driver placeholder
//! and how a LIMIT clause is written. Statement resolution itself is
//! dialect-agnostic: the [`Builder`](crate::Builder) forwards each marker
//! occurrence here, so the same template renders `$1, $2, ...` against
//! Postgres and `?` against MySQL.

/// A database-specific SQL syntax policy.
pub trait Dialect {
    /// Render the placeholder token for one parameter marker occurrence.
    ///
    /// `ordinal` is the 1-based position of the marker among all markers in
    /// the statement. A repeated name gets a fresh ordinal (and hence a fresh
    /// token) per occurrence, even though each occurrence binds the same
    /// value. `ty` and `name` let named-placeholder dialects ignore the
    /// ordinal entirely.
    fn parameter(&self, ordinal: usize, ty: char, name: &str) -> String;

    /// Render a result-limiting snippet.
    fn limit_string(&self, limit: i64, offset: i64) -> String {
        if offset > 0 {
            format!("LIMIT {limit} OFFSET {offset}")
        } else {
            format!("LIMIT {limit}")
        }
    }
}

/// PostgreSQL: numbered `$1, $2, ...` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn parameter(&self, ordinal: usize, _ty: char, _name: &str) -> String {
        format!("${ordinal}")
    }
}

/// MySQL: anonymous `?` placeholders, `LIMIT offset, count` syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySql;

impl Dialect for MySql {
    fn parameter(&self, _ordinal: usize, _ty: char, _name: &str) -> String {
        "?".to_string()
    }

    fn limit_string(&self, limit: i64, offset: i64) -> String {
        if offset > 0 {
            format!("LIMIT {offset}, {limit}")
        } else {
            format!("LIMIT {limit}")
        }
    }
}

/// SQLite: numbered `?1, ?2, ...` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn parameter(&self, ordinal: usize, _ty: char, _name: &str) -> String {
        format!("?{ordinal}")
    }
}

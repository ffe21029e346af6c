//! Snippet registry and statement builder.
//!
//! [`SqlBuilder`] is the collaborator a [`Template`] resolves against: it
//! stores named snippets (raw SQL fragments or [`Clauses`] composers) and a
//! [`Dialect`] that renders placeholder tokens. The [`Builder`] trait is the
//! seam between template resolution and the registry, so tests and embedders
//! can supply their own snippet source.

use crate::clauses::Clauses;
use crate::dialect::Dialect;
use crate::error::{BuildError, BuildResult};
use crate::template::{ResolvedStatement, Template};
use crate::value::ParamMap;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Collaborator interface consumed during template resolution.
pub trait Builder {
    /// Resolve a registered snippet to its SQL text.
    ///
    /// Returns the text plus the (possibly enlarged) parameter mapping —
    /// snippet resolution may contribute clause-literal values that later
    /// marker substitution needs. Callers thread the returned mapping forward.
    fn resolve_snippet(&self, name: &str, parameters: &ParamMap) -> BuildResult<(String, ParamMap)>;

    /// Render the dialect placeholder for one parameter marker occurrence.
    ///
    /// `ordinal` is 1-based and counts marker occurrences, not distinct names.
    fn resolve_parameter(&self, ordinal: usize, ty: char, name: &str) -> String;
}

/// A registered snippet: a fixed fragment or a clause composer.
#[derive(Debug, Clone)]
enum Snippet {
    Sql(String),
    Clauses(Clauses),
}

/// Registry of named snippets plus the target dialect.
///
/// # Example
/// ```ignore
/// use sqlsnip::{ClauseMode, Postgres, SqlBuilder, params};
///
/// let mut builder = SqlBuilder::new(Postgres);
/// builder
///     .clauses("WHERE", " AND ", "WHERE ", "")
///     .add_clause("status = @s:status@", params!(), ClauseMode::Required)
///     .add_clause("age >= @i:min_age@", params!(), ClauseMode::Required);
///
/// let stmt = builder.resolve(
///     "SELECT * FROM users /** WHERE **/ ORDER BY id",
///     params! { "status" => "active" },
/// )?;
/// assert_eq!(stmt.sql, "SELECT * FROM users WHERE status = $1 ORDER BY id");
/// # Ok::<(), sqlsnip::BuildError>(())
/// ```
pub struct SqlBuilder {
    snippets: HashMap<String, Snippet>,
    dialect: Box<dyn Dialect + Send + Sync>,
}

impl SqlBuilder {
    /// Create a builder targeting the given dialect.
    pub fn new(dialect: impl Dialect + Send + Sync + 'static) -> Self {
        Self {
            snippets: HashMap::new(),
            dialect: Box::new(dialect),
        }
    }

    /// Register a fixed SQL fragment under `name`, replacing any previous
    /// snippet with that name.
    pub fn add_snippet(&mut self, name: impl Into<String>, sql: impl Into<String>) -> &mut Self {
        self.snippets.insert(name.into(), Snippet::Sql(sql.into()));
        self
    }

    /// Get or create the clause composer registered under `name`.
    ///
    /// `joiner`/`prefix`/`postfix` configure the composer on first use; an
    /// existing composer keeps its configuration and the arguments are
    /// ignored. A fixed fragment previously registered under `name` is
    /// replaced.
    pub fn clauses(
        &mut self,
        name: impl Into<String>,
        joiner: impl Into<String>,
        prefix: impl Into<String>,
        postfix: impl Into<String>,
    ) -> &mut Clauses {
        let slot = match self.snippets.entry(name.into()) {
            Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                if matches!(slot, Snippet::Sql(_)) {
                    *slot = Snippet::Clauses(Clauses::new(joiner, prefix, postfix));
                }
                slot
            }
            Entry::Vacant(entry) => {
                entry.insert(Snippet::Clauses(Clauses::new(joiner, prefix, postfix)))
            }
        };
        match slot {
            Snippet::Clauses(clauses) => clauses,
            Snippet::Sql(_) => unreachable!("fixed fragment replaced above"),
        }
    }

    /// Create a [`Template`] from raw SQL text.
    pub fn template(&self, sql: impl Into<String>) -> Template {
        Template::new(sql)
    }

    /// Resolve `sql` against this builder in one step.
    pub fn resolve(
        &self,
        sql: impl Into<String>,
        parameters: ParamMap,
    ) -> BuildResult<ResolvedStatement> {
        Template::new(sql).resolve(self, parameters)
    }

    /// Render the dialect's result-limiting snippet.
    pub fn limit(&self, limit: i64, offset: i64) -> String {
        self.dialect.limit_string(limit, offset)
    }
}

impl Builder for SqlBuilder {
    fn resolve_snippet(&self, name: &str, parameters: &ParamMap) -> BuildResult<(String, ParamMap)> {
        match self.snippets.get(name) {
            Some(Snippet::Sql(sql)) => Ok((sql.clone(), parameters.clone())),
            Some(Snippet::Clauses(clauses)) => Ok(clauses.resolve(parameters)),
            None => Err(BuildError::UnknownSnippet(name.to_string())),
        }
    }

    fn resolve_parameter(&self, ordinal: usize, ty: char, name: &str) -> String {
        self.dialect.parameter(ordinal, ty, name)
    }
}

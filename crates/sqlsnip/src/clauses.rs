//! Conditional clause composition.
//!
//! A [`Clauses`] composer collects optional SQL fragments and resolves only
//! the eligible subset — a clause qualifies when every parameter marker it
//! references has a value in the merged parameter mapping. This lets a single
//! template serve many filter combinations: conditions whose parameters were
//! not supplied simply vanish from the generated statement.
//!
//! # Example
//!
//! ```ignore
//! use sqlsnip::{ClauseMode, Clauses, params};
//!
//! let mut w = Clauses::new(" AND ", "WHERE ", "");
//! w.add_clause("status = @s:status@", params!(), ClauseMode::Required);
//! w.add_clause("age >= @i:min_age@", params!(), ClauseMode::Required);
//!
//! // Only `status` supplied: the age condition is dropped.
//! let (snippet, merged) = w.resolve(&params! { "status" => "active" });
//! assert_eq!(snippet, "WHERE status = @s:status@");
//! # let _ = merged;
//! ```

use crate::token;
use crate::value::ParamMap;
use std::collections::HashSet;

/// How a clause composes with its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseMode {
    /// Joined with the other eligible required clauses using the composer's
    /// joiner (conjunctive composition).
    Required,
    /// OR-joined with the other eligible alternative clauses, then folded in
    /// as one parenthesized unit after the required clauses.
    Alternative,
}

/// One optional SQL fragment plus the parameter names it depends on.
///
/// The required-parameter set is derived from the fragment's markers once at
/// add time; a fragment without well-formed markers depends on nothing and is
/// always eligible.
#[derive(Debug, Clone)]
struct Clause {
    sql: String,
    required: HashSet<String>,
}

impl Clause {
    fn new(sql: String) -> Self {
        Self {
            required: token::parameter_names(&sql),
            sql,
        }
    }

    fn eligible(&self, parameters: &ParamMap) -> bool {
        self.required.iter().all(|name| parameters.contains_key(name))
    }
}

/// A set of conditional clauses with joining/wrapping configuration.
#[derive(Debug, Clone)]
pub struct Clauses {
    joiner: String,
    prefix: String,
    postfix: String,
    required: Vec<Clause>,
    alternative: Vec<Clause>,
    /// Literal bind values supplied alongside clauses; merged over runtime
    /// parameters at resolve time (literals win on collision).
    parameters: ParamMap,
}

impl Clauses {
    /// Create a composer.
    ///
    /// `joiner` separates the eligible clauses, `prefix`/`postfix` wrap the
    /// joined result. Neither is emitted when no clause qualifies.
    pub fn new(
        joiner: impl Into<String>,
        prefix: impl Into<String>,
        postfix: impl Into<String>,
    ) -> Self {
        Self {
            joiner: joiner.into(),
            prefix: prefix.into(),
            postfix: postfix.into(),
            required: Vec::new(),
            alternative: Vec::new(),
            parameters: ParamMap::new(),
        }
    }

    /// Add a clause.
    ///
    /// `parameters` carries literal bind values owned by this clause; they are
    /// merged into the composer's literal mapping (last write wins) and take
    /// precedence over runtime values with the same name during [`resolve`].
    ///
    /// [`resolve`]: Clauses::resolve
    pub fn add_clause(
        &mut self,
        sql: impl Into<String>,
        parameters: ParamMap,
        mode: ClauseMode,
    ) -> &mut Self {
        let clause = Clause::new(sql.into());
        match mode {
            ClauseMode::Required => self.required.push(clause),
            ClauseMode::Alternative => self.alternative.push(clause),
        }
        self.parameters.extend(parameters);
        self
    }

    /// Resolve the eligible clauses into one SQL snippet.
    ///
    /// Returns the snippet and the merged parameter mapping (runtime values
    /// plus clause literals, literals winning collisions) so the caller can
    /// thread the enlarged mapping into marker substitution.
    ///
    /// Resolution never fails: a clause missing a parameter is dropped, and
    /// with no eligible clause at all the snippet is the empty string with no
    /// prefix or postfix, letting callers omit an entire `WHERE` scaffold.
    pub fn resolve(&self, parameters: &ParamMap) -> (String, ParamMap) {
        let mut merged = parameters.clone();
        merged.extend(
            self.parameters
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );

        let required = self.select(&self.required, &merged);
        let alternative = self.select(&self.alternative, &merged);

        let snippet = if !alternative.is_empty() {
            let mut parts: Vec<String> = required.iter().map(|sql| (*sql).to_owned()).collect();
            parts.push(format!(" ( {} ) ", alternative.join(" OR ")));
            format!("{}{}{}", self.prefix, parts.join(&self.joiner), self.postfix)
        } else if !required.is_empty() {
            format!(
                "{}{}{}",
                self.prefix,
                required.join(&self.joiner),
                self.postfix
            )
        } else {
            String::new()
        };

        (snippet, merged)
    }

    /// Filter one bucket down to the eligible clause SQL, preserving insertion
    /// order.
    fn select<'a>(&self, clauses: &'a [Clause], parameters: &ParamMap) -> Vec<&'a str> {
        clauses
            .iter()
            .filter(|clause| {
                let eligible = clause.eligible(parameters);
                #[cfg(feature = "tracing")]
                if !eligible {
                    tracing::trace!(sql = %clause.sql, "clause dropped: required parameter absent");
                }
                eligible
            })
            .map(|clause| clause.sql.as_str())
            .collect()
    }
}

//! SQL template resolution.
//!
//! A [`Template`] is a raw SQL string carrying snippet references and typed
//! parameter markers. Resolution is a two-pass pipeline:
//!
//! 1. **Expansion** — every `/** name **/` reference is replaced by the text
//!    the [`Builder`] returns for that name. Expansion is single-level:
//!    snippet bodies are inserted verbatim and not re-scanned for further
//!    references.
//! 2. **Substitution** — every `@<type>:<name>@` marker is replaced, in
//!    left-to-right order, by the dialect placeholder the builder renders for
//!    its 1-based ordinal, while the type character and bound value are
//!    collected into the statement's positional sequences.
//!
//! Both passes are pure: resolving the same template with equal parameter
//! mappings yields identical statements.

use crate::builder::Builder;
use crate::error::{BuildError, BuildResult};
use crate::token::{self, ParamToken, SnippetToken};
use crate::value::{ParamMap, Value};
use serde::Serialize;

/// An immutable SQL template.
#[derive(Debug, Clone)]
pub struct Template {
    raw: String,
}

/// A fully resolved SQL statement with its positional bind data.
///
/// `types` and `values` have equal length and are both ordered by the
/// left-to-right occurrence of parameter markers in the expanded SQL —
/// the contract callers rely on to bind values positionally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStatement {
    /// Statement text with dialect placeholders substituted in.
    pub sql: String,
    /// Type characters of the markers, in marker order.
    pub types: String,
    /// Bound values, in marker order.
    pub values: Vec<Value>,
}

impl Template {
    /// Create a template from raw SQL text.
    pub fn new(sql: impl Into<String>) -> Self {
        Self { raw: sql.into() }
    }

    /// The raw, unresolved template text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Resolve this template into an executable statement.
    ///
    /// Snippet lookup and placeholder rendering are delegated to `builder`;
    /// snippet resolution may enlarge the parameter mapping with clause
    /// literals, and the enlarged mapping feeds the substitution pass.
    ///
    /// # Errors
    ///
    /// - [`BuildError::UnknownSnippet`] if a reference names an unregistered
    ///   snippet.
    /// - [`BuildError::MissingParameter`] if a marker survives into the
    ///   substitution pass with no bound value. Clause filtering drops
    ///   conditions whose parameters are absent, so markers written directly
    ///   into the template body must always have a value.
    pub fn resolve<B>(&self, builder: &B, parameters: ParamMap) -> BuildResult<ResolvedStatement>
    where
        B: Builder + ?Sized,
    {
        let mut parameters = parameters;

        let mut expanded = String::with_capacity(self.raw.len());
        for token in token::snippet_tokens(&self.raw) {
            match token {
                SnippetToken::Text(text) => expanded.push_str(text),
                SnippetToken::Snippet { name } => {
                    let (snippet, enlarged) = builder.resolve_snippet(name, &parameters)?;
                    expanded.push_str(&snippet);
                    parameters = enlarged;
                }
            }
        }

        let mut sql = String::with_capacity(expanded.len());
        let mut types = String::new();
        let mut values: Vec<Value> = Vec::new();
        for token in token::parameter_tokens(&expanded) {
            match token {
                ParamToken::Text(text) => sql.push_str(text),
                ParamToken::Param { ty, name } => {
                    let ordinal = values.len() + 1;
                    let value = parameters
                        .get(name)
                        .ok_or_else(|| BuildError::missing_parameter(name, ordinal))?;
                    types.push(ty);
                    values.push(value.clone());
                    sql.push_str(&builder.resolve_parameter(ordinal, ty, name));
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(%sql, params = values.len(), "resolved statement");

        Ok(ResolvedStatement { sql, types, values })
    }
}

/// Create a [`Template`] from raw SQL text.
pub fn template(sql: impl Into<String>) -> Template {
    Template::new(sql)
}

//! Marker lexing for SQL templates.
//!
//! Templates carry two marker grammars:
//!
//! - Snippet reference: `/** name **/` — replaced by a registered snippet
//!   during expansion. Whitespace around the name is trimmed; the reference
//!   ends at the first `**/`.
//! - Parameter marker: `@<type>:<name>@` — `<type>` is exactly one character,
//!   `<name>` runs up to the next `@`.
//!
//! Each pass scans for exactly one grammar: expansion must not recognize
//! parameter markers (a marker may legitimately contain `/**`), and
//! substitution must not re-expand snippet references left in the text.
//! Anything that fails to form a marker stays literal — a template with a
//! stray `@` or an unclosed `/**` still resolves, the broken text passes
//! through untouched.

/// A token produced by the snippet-reference scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetToken<'a> {
    /// Literal text, emitted verbatim.
    Text(&'a str),
    /// A snippet reference, `name` already trimmed.
    Snippet { name: &'a str },
}

/// A token produced by the parameter-marker scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamToken<'a> {
    /// Literal text, emitted verbatim.
    Text(&'a str),
    /// A typed parameter marker.
    Param { ty: char, name: &'a str },
}

/// Scan `input` for snippet references, leaving everything else as text.
///
/// The reference body must be non-empty and single-line; the closing `**/` is
/// the first one after the opener (shortest match).
pub fn snippet_tokens(input: &str) -> Vec<SnippetToken<'_>> {
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(rel) = input[pos..].find("/**") {
        let open = pos + rel;
        let body_start = open + 3;
        let Some(rel_close) = input[body_start..].find("**/") else {
            break;
        };
        let body = &input[body_start..body_start + rel_close];
        if body.is_empty() || body.contains('\n') {
            // Not a reference; keep looking past this opener.
            pos = open + 1;
            continue;
        }
        if text_start < open {
            tokens.push(SnippetToken::Text(&input[text_start..open]));
        }
        tokens.push(SnippetToken::Snippet { name: body.trim() });
        pos = body_start + rel_close + 3;
        text_start = pos;
    }

    if text_start < input.len() {
        tokens.push(SnippetToken::Text(&input[text_start..]));
    }
    tokens
}

/// Scan `input` for parameter markers, leaving everything else as text.
pub fn parameter_tokens(input: &str) -> Vec<ParamToken<'_>> {
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(rel) = input[pos..].find('@') {
        let at = pos + rel;
        match parameter_at(input, at) {
            Some((ty, name, end)) => {
                if text_start < at {
                    tokens.push(ParamToken::Text(&input[text_start..at]));
                }
                tokens.push(ParamToken::Param { ty, name });
                pos = end;
                text_start = end;
            }
            None => {
                #[cfg(feature = "tracing")]
                if looks_like_marker(input, at) {
                    tracing::trace!(
                        offset = at,
                        "unterminated parameter marker left in statement text"
                    );
                }
                pos = at + 1;
            }
        }
    }

    if text_start < input.len() {
        tokens.push(ParamToken::Text(&input[text_start..]));
    }
    tokens
}

/// Names of every parameter marker occurring in `sql`.
///
/// Used by clause registration to derive the required-parameter set once at
/// add time. Malformed markers contribute nothing.
pub fn parameter_names(sql: &str) -> std::collections::HashSet<String> {
    parameter_tokens(sql)
        .into_iter()
        .filter_map(|token| match token {
            ParamToken::Param { name, .. } => Some(name.to_string()),
            ParamToken::Text(_) => None,
        })
        .collect()
}

/// Try to match `@<ty>:<name>@` at byte offset `at` (which must hold `@`).
///
/// Returns the type char, the name slice, and the byte offset just past the
/// closing `@`. Both the type char and the name are single-line.
fn parameter_at(input: &str, at: usize) -> Option<(char, &str, usize)> {
    let mut chars = input[at + 1..].char_indices();
    let (_, ty) = chars.next()?;
    if ty == '\n' {
        return None;
    }
    let (colon_at, colon) = chars.next()?;
    if colon != ':' {
        return None;
    }
    let name_start = at + 1 + colon_at + 1;
    let close = input[name_start..].find('@')?;
    if close == 0 {
        return None;
    }
    let name = &input[name_start..name_start + close];
    if name.contains('\n') {
        return None;
    }
    Some((ty, name, name_start + close + 1))
}

/// A failed match that still had the `@<ty>:` lead-in was probably meant to
/// be a marker; plain stray `@`s (emails, literals) are not worth flagging.
#[cfg(feature = "tracing")]
fn looks_like_marker(input: &str, at: usize) -> bool {
    let mut chars = input[at + 1..].chars();
    !matches!(chars.next(), None | Some('\n')) && chars.next() == Some(':')
}

//! Identifier formatting.
//!
//! [`format_schema`] turns a dotted schema/table/column reference into its
//! dialect-quoted form, e.g. `myschema.mytable` into `"myschema"."mytable"`.
//! The `*` wildcard and segments already wrapped in the dialect's quote
//! character pass through unchanged.

use crate::dialect::Dialect;

/// Quote a dotted identifier reference for a dialect.
pub(crate) fn format_schema(raw: &str, dialect: Dialect) -> String {
    let quote = dialect.quote();
    let mut out = String::with_capacity(raw.len() + 4);

    for (i, segment) in raw.split('.').enumerate() {
        if i > 0 {
            out.push('.');
        }
        if segment == "*" {
            out.push('*');
            continue;
        }
        let part = segment.trim();
        if part.starts_with(quote) && part.ends_with(quote) && !part.is_empty() {
            out.push_str(part);
        } else {
            out.push(quote);
            out.push_str(part);
            out.push(quote);
        }
    }

    out
}

/// Format a single-equality join expression: each side of the `=` is
/// formatted independently. Multi-condition ON clauses go through the
/// extended raw-suffix join path instead.
pub(crate) fn format_join_on(raw: &str, dialect: Dialect) -> String {
    raw.split('=')
        .map(|side| format_schema(side, dialect))
        .collect::<Vec<_>>()
        .join(" = ")
}

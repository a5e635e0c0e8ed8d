//! Literal value sanitisation.
//!
//! The sole defense against literal injection for values that end up in
//! inline SQL text. Columns and operators are structurally formatted, not
//! sanitised; callers must not pass untrusted input there.

/// Escape embedded single quotes by doubling them.
///
/// Outer single-quoting, when present, is stripped before escaping and
/// restored afterwards, so an already-quoted literal stays quoted exactly
/// once. Idempotent on values without embedded quotes.
pub fn sanitise(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let quoted = value.starts_with('\'') && value.ends_with('\'');

    let inner = value.strip_prefix('\'').unwrap_or(value);
    let inner = inner.strip_suffix('\'').unwrap_or(inner);
    let escaped = inner.replace('\'', "''");

    if quoted {
        format!("'{escaped}'")
    } else {
        escaped
    }
}

/// Strip one layer of surrounding quote characters (`'`, `"`, `` ` ``)
/// from a raw value.
pub(crate) fn strip_quotes(value: &str) -> &str {
    let mut v = value;
    for quote in ['\'', '"', '`'] {
        v = v.strip_suffix(quote).unwrap_or(v);
    }
    for quote in ['\'', '"', '`'] {
        v = v.strip_prefix(quote).unwrap_or(v);
    }
    v
}

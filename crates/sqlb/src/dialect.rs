//! SQL dialect selection.
//!
//! A [`Dialect`] picks the identifier quote character used by the
//! formatting layer. Placeholders are `$1, $2, ...` in every dialect; only
//! identifier quoting varies.

/// Identifier-quoting convention for generated SQL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    /// Double-quoted identifiers. The default, and the fallback for any
    /// unrecognized dialect name.
    #[default]
    Ansi,
    /// Double-quoted identifiers.
    Postgres,
    /// Backtick-quoted identifiers.
    Mysql,
}

impl Dialect {
    /// Look up a dialect by name, case-insensitively.
    ///
    /// Unrecognized names fall back to [`Dialect::Ansi`].
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "postgres" => Self::Postgres,
            "mysql" => Self::Mysql,
            _ => Self::Ansi,
        }
    }

    /// The identifier quote character for this dialect.
    pub fn quote(self) -> char {
        match self {
            Self::Ansi | Self::Postgres => '"',
            Self::Mysql => '`',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Dialect::from_name("Postgres"), Dialect::Postgres);
        assert_eq!(Dialect::from_name("POSTGRES"), Dialect::Postgres);
        assert_eq!(Dialect::from_name("MySql"), Dialect::Mysql);
    }

    #[test]
    fn from_name_falls_back_to_ansi() {
        assert_eq!(Dialect::from_name("sqlite"), Dialect::Ansi);
        assert_eq!(Dialect::from_name(""), Dialect::Ansi);
    }

    #[test]
    fn quote_characters() {
        assert_eq!(Dialect::Ansi.quote(), '"');
        assert_eq!(Dialect::Postgres.quote(), '"');
        assert_eq!(Dialect::Mysql.quote(), '`');
    }
}

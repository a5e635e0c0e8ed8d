//! Typed clause nodes accumulated by the builder.
//!
//! Clause state stays structured until a terminal build call serializes it,
//! so final ordering and separators never depend on string surgery.

/// One item of the SELECT list, already rendered.
#[derive(Debug, Clone)]
pub(crate) enum SelectItem {
    /// An identifier-formatted column reference.
    Column(String),
    /// A verbatim expression the formatter cannot safely quote.
    Raw(String),
}

impl SelectItem {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            Self::Column(s) | Self::Raw(s) => s,
        }
    }
}

/// How a predicate attaches to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Conjunction {
    And,
    Or,
}

/// A rendered WHERE predicate and its joining conjunction.
#[derive(Debug, Clone)]
pub(crate) struct Predicate {
    pub(crate) sql: String,
    pub(crate) conjunction: Conjunction,
}

impl Predicate {
    pub(crate) fn and(sql: String) -> Self {
        Self {
            sql,
            conjunction: Conjunction::And,
        }
    }
}

/// The closed set of value containers accepted by `where_in`.
///
/// Sequence variants bind one positional argument per element. [`Raw`] is a
/// preformatted comma-joined list included inline after sanitisation, with
/// no argument capture.
///
/// [`Raw`]: InList::Raw
#[derive(Debug, Clone)]
pub enum InList {
    /// Integer sequence, bound as decimal text.
    Ints(Vec<i64>),
    /// Float sequence, bound as fixed 6-decimal text.
    Floats(Vec<f64>),
    /// String sequence, bound sanitised.
    Strings(Vec<String>),
    /// Preformatted comma-joined list, e.g. `"1, 2, 3"`.
    Raw(String),
}

impl From<Vec<i64>> for InList {
    fn from(values: Vec<i64>) -> Self {
        Self::Ints(values)
    }
}

impl From<&[i64]> for InList {
    fn from(values: &[i64]) -> Self {
        Self::Ints(values.to_vec())
    }
}

impl From<Vec<i32>> for InList {
    fn from(values: Vec<i32>) -> Self {
        Self::Ints(values.into_iter().map(i64::from).collect())
    }
}

impl From<&[i32]> for InList {
    fn from(values: &[i32]) -> Self {
        Self::Ints(values.iter().copied().map(i64::from).collect())
    }
}

impl From<Vec<f64>> for InList {
    fn from(values: Vec<f64>) -> Self {
        Self::Floats(values)
    }
}

impl From<&[f64]> for InList {
    fn from(values: &[f64]) -> Self {
        Self::Floats(values.to_vec())
    }
}

impl From<Vec<f32>> for InList {
    fn from(values: Vec<f32>) -> Self {
        Self::Floats(values.into_iter().map(f64::from).collect())
    }
}

impl From<&[f32]> for InList {
    fn from(values: &[f32]) -> Self {
        Self::Floats(values.iter().copied().map(f64::from).collect())
    }
}

impl From<Vec<String>> for InList {
    fn from(values: Vec<String>) -> Self {
        Self::Strings(values)
    }
}

impl From<Vec<&str>> for InList {
    fn from(values: Vec<&str>) -> Self {
        Self::Strings(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for InList {
    fn from(values: &[&str]) -> Self {
        Self::Strings(values.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&str> for InList {
    fn from(list: &str) -> Self {
        Self::Raw(list.to_string())
    }
}

impl From<String> for InList {
    fn from(list: String) -> Self {
        Self::Raw(list)
    }
}

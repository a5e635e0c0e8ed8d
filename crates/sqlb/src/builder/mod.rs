//! Structured SQL statement builder.
//!
//! Clause state accumulates as typed nodes and is serialized once, in
//! fixed clause order, by the terminal build calls. Placeholders are
//! managed automatically (`$1, $2, ...`) and argument values are captured
//! in call order alongside them.

use std::sync::OnceLock;

use regex::Regex;

use crate::clause::{Conjunction, InList, Predicate, SelectItem};
use crate::dialect::Dialect;
use crate::error::{BuildError, BuildResult};
use crate::ident::{format_join_on, format_schema};
use crate::record::Record;
use crate::sanitise::{sanitise, strip_quotes};


/// A built statement: SQL text plus positionally ordered argument values.
///
/// The Nth argument corresponds to the `$N` placeholder; consumers bind
/// them positionally before execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statement {
    sql: String,
    args: Vec<String>,
}

impl Statement {
    /// The assembled SQL text. Empty when the builder had no source table.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Argument values, aligned with the `$N` placeholders in [`sql`].
    ///
    /// [`sql`]: Statement::sql
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// True when assembly produced no statement (missing source table).
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Split into SQL text and argument list.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.sql, self.args)
    }
}

/// Fluent SQL statement builder.
///
/// One instance assembles one statement at a time; [`reset`] clears clause
/// state so the allocation can be reused for the next statement. Column
/// and operator arguments are identifier-formatted but never sanitised -
/// do not pass untrusted input as a column or operator.
///
/// [`reset`]: StatementBuilder::reset
#[derive(Debug, Default)]
pub struct StatementBuilder {
    dialect: Dialect,
    distinct: bool,
    select_items: Vec<SelectItem>,
    from: Option<String>,
    delete_from: Option<String>,
    joins: Vec<String>,
    predicates: Vec<Predicate>,
    order_by: Option<String>,
    limit: Option<i64>,
    offset: Option<i64>,
    args: Vec<String>,
}

impl StatementBuilder {
    /// Create a builder using the default (double-quote) dialect.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for a specific dialect.
    pub fn with_dialect(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    /// The active dialect.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Toggle `SELECT DISTINCT`.
    pub fn distinct(&mut self, distinct: bool) -> &mut Self {
        self.distinct = distinct;
        self
    }

    /// Set the source table. Last call wins.
    pub fn from(&mut self, schema_table: &str) -> &mut Self {
        self.from = Some(format_schema(schema_table, self.dialect));
        self
    }

    /// Set the source table for a DELETE statement.
    ///
    /// Takes precedence over [`from`] at build time.
    ///
    /// [`from`]: StatementBuilder::from
    pub fn delete_from(&mut self, schema_table: &str) -> &mut Self {
        self.delete_from = Some(format_schema(schema_table, self.dialect));
        self
    }

    /// Append identifier-formatted columns to the SELECT list. Cumulative.
    pub fn select(&mut self, columns: &[&str]) -> &mut Self {
        for column in columns {
            self.select_items
                .push(SelectItem::Column(format_schema(column, self.dialect)));
        }
        self
    }

    /// Append a verbatim SELECT expression (CASE, function calls, ...).
    ///
    /// Newlines are normalized to single spaces; no identifier formatting
    /// is applied.
    pub fn select_raw(&mut self, expr: &str) -> &mut Self {
        self.select_items
            .push(SelectItem::Raw(normalize_newlines(expr)));
        self
    }

    /// Add an AND condition: `<column> <OPERATOR> $N`.
    ///
    /// The operator is uppercased and taken otherwise verbatim. One layer
    /// of surrounding quote characters is stripped from the value before
    /// it is sanitised and bound as a positional argument. `BETWEEN`
    /// splits the value on the word "and" (case-insensitive) and binds the
    /// two operands separately.
    pub fn and_where(&mut self, column: &str, operator: &str, value: &str) -> &mut Self {
        let predicate = self.comparison(column, operator, value, Conjunction::And);
        self.predicates.push(predicate);
        self
    }

    /// Add an OR condition.
    ///
    /// Identical value handling to [`and_where`]. Only meaningful after at
    /// least one prior condition; there is no parenthesized grouping, so
    /// `A AND (B OR C)` cannot be expressed.
    ///
    /// [`and_where`]: StatementBuilder::and_where
    pub fn or_where(&mut self, column: &str, operator: &str, value: &str) -> &mut Self {
        let predicate = self.comparison(column, operator, value, Conjunction::Or);
        self.predicates.push(predicate);
        self
    }

    /// Add a verbatim AND condition.
    ///
    /// # Safety
    ///
    /// No sanitisation and no argument capture; the caller is responsible
    /// for the fragment's safety.
    pub fn where_raw(&mut self, fragment: &str) -> &mut Self {
        self.predicates.push(Predicate::and(fragment.to_string()));
        self
    }

    /// Add `<column> IN (...)` over the closed [`InList`] variant set.
    ///
    /// Sequence variants bind one positional argument per element; an
    /// empty sequence renders the always-false `1=0`. [`InList::Raw`] is
    /// included inline after sanitisation, with no argument capture.
    pub fn where_in(&mut self, column: &str, values: impl Into<InList>) -> &mut Self {
        let column = format_schema(column, self.dialect);

        let placeholders: Vec<String> = match values.into() {
            InList::Ints(values) => values.iter().map(|v| self.bind(v.to_string())).collect(),
            InList::Floats(values) => values.iter().map(|v| self.bind(format!("{v:.6}"))).collect(),
            InList::Strings(values) => values.iter().map(|v| self.bind(sanitise(v))).collect(),
            InList::Raw(list) => {
                self.predicates
                    .push(Predicate::and(format!("{} IN ({})", column, sanitise(&list))));
                return self;
            }
        };

        if placeholders.is_empty() {
            self.predicates.push(Predicate::and("1=0".to_string()));
        } else {
            self.predicates.push(Predicate::and(format!(
                "{} IN ({})",
                column,
                placeholders.join(", ")
            )));
        }
        self
    }

    /// Pseudo full-text search: rows containing at least one of the
    /// values, case-insensitively.
    ///
    /// Renders `<column> ILIKE ANY (array[$N, ...])` with one `%value%`
    /// argument per element.
    pub fn where_string_match_any(&mut self, column: &str, values: &[&str]) -> &mut Self {
        let column = format_schema(column, self.dialect);
        let placeholders: Vec<String> = values
            .iter()
            .map(|v| self.bind(format!("%{}%", sanitise(v.trim()))))
            .collect();
        self.predicates.push(Predicate::and(format!(
            "{} ILIKE ANY (array[{}])",
            column,
            placeholders.join(", ")
        )));
        self
    }

    /// Pseudo full-text search: rows containing all of the values.
    ///
    /// Binds a single space-joined `%value%` pattern - `<column> ILIKE $N`
    /// - rather than one argument per element. The asymmetry with
    /// [`where_string_match_any`] is deliberate.
    ///
    /// [`where_string_match_any`]: StatementBuilder::where_string_match_any
    pub fn where_string_match_all(&mut self, column: &str, values: &[&str]) -> &mut Self {
        let column = format_schema(column, self.dialect);
        let pattern = values
            .iter()
            .map(|v| format!("%{}%", sanitise(v.trim())))
            .collect::<Vec<_>>()
            .join(" ");
        let placeholder = self.bind(pattern);
        self.predicates
            .push(Predicate::and(format!("{} ILIKE {}", column, placeholder)));
        self
    }

    /// Add a LEFT JOIN with a single-equality ON clause.
    ///
    /// Table, alias, and both sides of the ON expression are
    /// identifier-formatted.
    pub fn left_join(&mut self, table: &str, alias: &str, on: &str) -> &mut Self {
        self.joins.push(format!(
            "LEFT JOIN {} AS {} ON {}",
            format_schema(table, self.dialect),
            format_schema(alias, self.dialect),
            format_join_on(on, self.dialect),
        ));
        self
    }

    /// LEFT JOIN with a verbatim fragment appended after the ON clause,
    /// for joins needing extra boolean conditions.
    pub fn left_join_extended(
        &mut self,
        table: &str,
        alias: &str,
        on: &str,
        extra: &str,
    ) -> &mut Self {
        self.joins.push(format!(
            "LEFT JOIN {} AS {} ON {} {}",
            format_schema(table, self.dialect),
            format_schema(alias, self.dialect),
            format_join_on(on, self.dialect),
            extra,
        ));
        self
    }

    /// `LIMIT n`. Last call wins.
    pub fn limit(&mut self, limit: i64) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    /// `OFFSET n`. Last call wins.
    pub fn offset(&mut self, offset: i64) -> &mut Self {
        self.offset = Some(offset);
        self
    }

    /// `ORDER BY <column> <direction>`.
    ///
    /// The column is identifier-formatted; the direction is taken
    /// verbatim. Last call wins.
    pub fn order_by(&mut self, column: &str, direction: &str) -> &mut Self {
        self.order_by = Some(format!(
            "{} {}",
            format_schema(column, self.dialect),
            direction
        ));
        self
    }

    /// Clear all clause state and captured arguments for reuse.
    ///
    /// `dialect` and `distinct` are caller-owned configuration and survive
    /// a reset.
    pub fn reset(&mut self) -> &mut Self {
        self.select_items.clear();
        self.from = None;
        self.delete_from = None;
        self.joins.clear();
        self.predicates.clear();
        self.order_by = None;
        self.limit = None;
        self.offset = None;
        self.args.clear();
        self
    }

    /// Assemble the accumulated clauses into a [`Statement`].
    ///
    /// Clause order is fixed: SELECT, FROM / DELETE FROM, JOIN, WHERE,
    /// ORDER BY, LIMIT, OFFSET. Without a source table the result is
    /// empty - a defined no-op, not an error. Building does not consume
    /// clause state; building twice yields byte-identical output.
    pub fn build(&self) -> Statement {
        let source = if let Some(table) = &self.delete_from {
            format!("DELETE FROM {table}")
        } else if let Some(table) = &self.from {
            format!("FROM {table}")
        } else {
            return Statement::default();
        };

        let mut sql = String::new();

        if self.delete_from.is_none() {
            sql.push_str("SELECT");
            if self.distinct {
                sql.push_str(" DISTINCT");
            }
            if self.select_items.is_empty() {
                sql.push_str(" *");
            } else {
                for (i, item) in self.select_items.iter().enumerate() {
                    sql.push_str(if i == 0 { " " } else { ", " });
                    sql.push_str(item.as_str());
                }
            }
            sql.push(' ');
        }

        sql.push_str(&source);

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }

        self.push_where(&mut sql);

        if let Some(order_by) = &self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order_by);
        }
        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        let statement = Statement {
            sql: collapse_whitespace(&sql),
            args: self.args.clone(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %statement.sql, args = statement.args.len(), "statement built");

        statement
    }

    /// Wrap the built statement in a row-count query:
    /// `SELECT COUNT(*) AS rowcount FROM (<built>) AS rowdata`.
    pub fn count(&self) -> Statement {
        let inner = self.build();
        Statement {
            sql: format!(
                "SELECT COUNT(*) AS rowcount FROM ({}) AS rowdata",
                inner.sql
            ),
            args: inner.args,
        }
    }

    /// Wrap the built statement in `SELECT EXISTS (<built>)`.
    pub fn exists(&self) -> Statement {
        let inner = self.build();
        Statement {
            sql: format!("SELECT EXISTS ({})", inner.sql),
            args: inner.args,
        }
    }

    /// Map a record into `INSERT INTO <table> (<cols>) VALUES (<vals>)`.
    ///
    /// Values are rendered inline per field type; column names and the
    /// table are identifier-formatted. `trailing_sql` is appended verbatim
    /// (e.g. `ON CONFLICT DO NOTHING`); pass `""` for none.
    pub fn build_insert(
        &self,
        table: &str,
        record: &impl Record,
        trailing_sql: &str,
    ) -> BuildResult<Statement> {
        let fields = record.fields()?;

        let columns: Vec<String> = fields
            .iter()
            .map(|(name, _)| format_schema(name, self.dialect))
            .collect();
        let values: Vec<String> = fields.iter().map(|(_, value)| value.render()).collect();

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) {}",
            format_schema(table, self.dialect),
            columns.join(", "),
            values.join(", "),
            trailing_sql,
        );

        let statement = Statement {
            sql: collapse_whitespace(&sql),
            args: Vec::new(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %statement.sql, "insert statement built");

        Ok(statement)
    }

    /// Map a record into `UPDATE <table> SET <col = val, ...>`, reusing
    /// any accumulated WHERE conditions and their captured arguments.
    ///
    /// Fails when the record maps to zero SET assignments. `trailing_sql`
    /// is appended verbatim; pass `""` for none.
    pub fn build_update(
        &self,
        table: &str,
        record: &impl Record,
        trailing_sql: &str,
    ) -> BuildResult<Statement> {
        let fields = record.fields()?;
        if fields.is_empty() {
            return Err(BuildError::build("UPDATE requires a non-empty SET list"));
        }

        let assignments: Vec<String> = fields
            .iter()
            .map(|(name, value)| {
                format!("{} = {}", format_schema(name, self.dialect), value.render())
            })
            .collect();

        let mut sql = format!(
            "UPDATE {} SET {}",
            format_schema(table, self.dialect),
            assignments.join(", "),
        );

        self.push_where(&mut sql);

        if !trailing_sql.is_empty() {
            sql.push(' ');
            sql.push_str(trailing_sql);
        }

        let statement = Statement {
            sql: collapse_whitespace(&sql),
            args: self.args.clone(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %statement.sql, args = statement.args.len(), "update statement built");

        Ok(statement)
    }

    fn comparison(
        &mut self,
        column: &str,
        operator: &str,
        value: &str,
        conjunction: Conjunction,
    ) -> Predicate {
        let operator = operator.to_uppercase();
        let value = strip_quotes(value);

        let rendered = if operator == "BETWEEN" {
            let operands: Vec<String> = between_re()
                .splitn(value, 2)
                .map(|part| sanitise(part.trim()))
                .collect();
            operands
                .into_iter()
                .map(|operand| self.bind(operand))
                .collect::<Vec<_>>()
                .join(" AND ")
        } else {
            self.bind(sanitise(value))
        };

        Predicate {
            sql: format!(
                "{} {} {}",
                format_schema(column, self.dialect),
                operator,
                rendered
            ),
            conjunction,
        }
    }

    /// Append one argument and return its placeholder.
    fn bind(&mut self, arg: String) -> String {
        self.args.push(arg);
        format!("${}", self.args.len())
    }

    fn push_where(&self, sql: &mut String) {
        if self.predicates.is_empty() {
            return;
        }
        sql.push_str(" WHERE ");
        for (i, predicate) in self.predicates.iter().enumerate() {
            if i > 0 {
                sql.push_str(match predicate.conjunction {
                    Conjunction::And => " AND ",
                    Conjunction::Or => " OR ",
                });
            } else if predicate.conjunction == Conjunction::Or {
                // An OR with no preceding predicate renders as written.
                sql.push_str("OR ");
            }
            sql.push_str(&predicate.sql);
        }
    }
}

fn collapse_whitespace(sql: &str) -> String {
    static SPACE_RE: OnceLock<Regex> = OnceLock::new();
    let re = SPACE_RE
        .get_or_init(|| Regex::new(r"\s+").expect("invalid built-in whitespace regex"));
    re.replace_all(sql, " ").trim().to_string()
}

fn normalize_newlines(expr: &str) -> String {
    static NEWLINE_RE: OnceLock<Regex> = OnceLock::new();
    let re = NEWLINE_RE
        .get_or_init(|| Regex::new(r"\r?\n").expect("invalid built-in newline regex"));
    re.replace_all(expr, " ").into_owned()
}

fn between_re() -> &'static Regex {
    static BETWEEN_RE: OnceLock<Regex> = OnceLock::new();
    BETWEEN_RE.get_or_init(|| Regex::new(r"(?i)and").expect("invalid built-in operand regex"))
}

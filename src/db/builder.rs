//! Parameterized SQL assembly
//!
//! Filters are appended as `WHERE`/`AND` predicates whose values are always
//! bound as positional parameters. Column names and SQL fragments are
//! `&'static str`, so request data can never become part of the SQL text.

use std::fmt;
use tokio_postgres::types::ToSql;

type BoxedParam = Box<dyn ToSql + Sync + Send>;

/// A SQL statement under construction plus its bound parameters
pub struct QueryBuilder {
    sql: String,
    params: Vec<BoxedParam>,
    has_where: bool,
}

impl QueryBuilder {
    /// Start from a static template that has no `WHERE` clause yet
    pub fn new(template: &'static str) -> Self {
        Self {
            sql: template.trim_end().to_string(),
            params: Vec::new(),
            has_where: false,
        }
    }

    /// Case-insensitive equality on a text column
    pub fn eq_ignore_case(mut self, column: &'static str, value: impl Into<String>) -> Self {
        let value: String = value.into();
        let placeholder = self.bind(Box::new(value));
        let connective = self.connective();
        self.sql
            .push_str(&format!("{connective} LOWER({column}) = LOWER(${placeholder}::text)"));
        self
    }

    /// Exact equality on an integer column
    pub fn eq_int(mut self, column: &'static str, value: i32) -> Self {
        let placeholder = self.bind(Box::new(value));
        let connective = self.connective();
        self.sql
            .push_str(&format!("{connective} {column} = ${placeholder}::int"));
        self
    }

    pub fn eq_ignore_case_opt(self, column: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.eq_ignore_case(column, value),
            None => self,
        }
    }

    pub fn eq_int_opt(self, column: &'static str, value: Option<i32>) -> Self {
        match value {
            Some(value) => self.eq_int(column, value),
            None => self,
        }
    }

    /// Append a static fragment (ORDER BY, GROUP BY, closing a subquery...)
    pub fn push(mut self, fragment: &'static str) -> Self {
        self.sql.push(' ');
        self.sql.push_str(fragment.trim());
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Parameters in placeholder order, ready for `Client::query`
    pub fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|p| p.as_ref() as &(dyn ToSql + Sync))
            .collect()
    }

    fn bind(&mut self, value: BoxedParam) -> usize {
        self.params.push(value);
        self.params.len()
    }

    fn connective(&mut self) -> &'static str {
        if self.has_where {
            " AND"
        } else {
            self.has_where = true;
            " WHERE"
        }
    }
}

impl fmt::Debug for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("sql", &self.sql)
            .field("params", &self.params)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = "SELECT * FROM leases l JOIN companies co ON co.id = l.company_id";

    #[test]
    fn test_no_filters_leaves_template_untouched() {
        let query = QueryBuilder::new(BASE);
        assert_eq!(query.sql(), BASE);
        assert_eq!(query.param_count(), 0);
    }

    #[test]
    fn test_first_filter_opens_where_then_and() {
        let query = QueryBuilder::new(BASE)
            .eq_int("l.year", 2024)
            .eq_ignore_case("co.nome", "Grupo WE");

        assert_eq!(
            query.sql(),
            format!(
                "{BASE} WHERE l.year = $1::int AND LOWER(co.nome) = LOWER($2::text)"
            )
        );
        assert_eq!(query.param_count(), 2);
        assert_eq!(query.params().len(), 2);
    }

    #[test]
    fn test_absent_optional_filters_are_skipped() {
        let query = QueryBuilder::new(BASE)
            .eq_int_opt("l.year", None)
            .eq_ignore_case_opt("co.nome", Some("acme"))
            .push("ORDER BY l.month");

        assert_eq!(
            query.sql(),
            format!("{BASE} WHERE LOWER(co.nome) = LOWER($1::text) ORDER BY l.month")
        );
        assert_eq!(query.param_count(), 1);
    }

    #[test]
    fn test_values_never_reach_sql_text() {
        let hostile = "x'; DROP TABLE companies; --";
        let query = QueryBuilder::new(BASE).eq_ignore_case("co.nome", hostile);

        assert!(!query.sql().contains("DROP TABLE"));
        assert!(!query.sql().contains(hostile));
        assert_eq!(query.param_count(), 1);
        assert!(format!("{query:?}").contains("DROP TABLE"));
    }

    #[test]
    fn test_push_trims_fragment() {
        let query = QueryBuilder::new("SELECT 1\n").push("\n  LIMIT 1\n");
        assert_eq!(query.sql(), "SELECT 1 LIMIT 1");
    }
}

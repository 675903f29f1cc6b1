//! Fragment synthesis: keyed values and entities in, SQL text out.
//!
//! Every operation validates its identifiers, renders one statement through the
//! [`builder`](crate::builder) types, logs it at DEBUG on the `genq.sql` target,
//! and returns the text. Nothing is kept between calls, so identical inputs
//! always render identical output.

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::{HashMap, HashSet};

use crate::builder::{DeleteBuilder, InsertBuilder, SelectBuilder, SqlBuilder};
use crate::config::SynthConfig;
use crate::entity::Entity;
use crate::error::{GenqError, GenqResult};
use crate::ident::{check, check_not_blank};
use crate::jdbc::{JdbcType, placeholder, typed_placeholder};
use crate::value::{NULL_LITERAL, Value, ValueKind, ValueMap};

const LOG_TARGET: &str = "genq.sql";

/// Projection selecting every column.
pub const ALL_COLUMNS: &str = "*";

/// `attribute = 'value'`, with the value inlined unescaped.
pub fn equal_condition(attribute: &str, value: &str) -> String {
    format!("{attribute} = '{value}'")
}

/// A column derived for one synthesis call.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    /// Original identifier, used as the placeholder name.
    pub property: String,
    /// Rendered column name.
    pub column: String,
    pub value: Value,
    pub jdbc_type: JdbcType,
}

impl ColumnSpec {
    /// `#{property,jdbcType=TAG}`
    pub fn placeholder(&self) -> String {
        typed_placeholder(&self.property, &self.jdbc_type)
    }
}

/// Per-call options for [`Synthesizer::insert_from_typed_map`].
#[derive(Debug, Clone, Default)]
pub struct TypedInsertOptions {
    /// JDBC tag by key; wins over inference.
    pub overrides: HashMap<String, JdbcType>,
    /// Keys never emitted.
    pub ignored: HashSet<String>,
    /// Date format for this call; `None` uses the synthesizer's configured format.
    pub date_format: Option<String>,
}

impl TypedInsertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn override_type(mut self, key: impl Into<String>, tag: impl Into<JdbcType>) -> Self {
        self.overrides.insert(key.into(), tag.into());
        self
    }

    pub fn ignore(mut self, key: impl Into<String>) -> Self {
        self.ignored.insert(key.into());
        self
    }

    pub fn ignore_all<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }
}

/// Result of [`Synthesizer::insert_from_typed_map`].
#[derive(Debug)]
pub struct TypedInsert {
    /// The INSERT statement.
    pub sql: String,
    /// The input values with DATE-tagged entries coerced to dates. Entries that
    /// failed coercion keep their original value.
    pub values: ValueMap,
    /// Non-fatal coercion failures, in key order.
    pub failures: Vec<GenqError>,
}

impl TypedInsert {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Renders SELECT / INSERT / DELETE fragments with named placeholders.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    config: SynthConfig,
}

impl Synthesizer {
    /// A synthesizer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A synthesizer with a custom configuration, validated up front.
    pub fn with_config(config: SynthConfig) -> GenqResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// JDBC tag for a value kind, per the configured type table.
    pub fn infer(&self, kind: ValueKind) -> JdbcType {
        self.config.type_mapping.lookup(kind)
    }

    /// `SELECT <projection> FROM <table> WHERE c1 = 'v1' AND c2 = 'v2' ...`
    ///
    /// Conditions are joined with AND in iteration order; none means no WHERE.
    ///
    /// **Values are inlined verbatim between single quotes.** Nothing is
    /// escaped, so a value containing `'` changes the statement. Only pass
    /// trusted values; prefer [`Synthesizer::equality_select_bound`].
    pub fn equality_select<I, K, V>(
        &self,
        projection: &str,
        table: &str,
        conditions: I,
    ) -> GenqResult<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut qb = SelectBuilder::new(table);
        qb.select(projection);
        for (column, value) in conditions {
            let column = column.as_ref();
            check(column, "condition column")?;
            qb.and_where(equal_condition(column, value.as_ref()));
        }
        self.finish("equality_select", &qb)
    }

    /// `SELECT <projection> FROM <table> WHERE COL_A = #{colA} AND ...`
    ///
    /// The parameterized counterpart of [`Synthesizer::equality_select`]: each
    /// property is bound by name and its column follows the naming convention.
    pub fn equality_select_bound<I, S>(
        &self,
        projection: &str,
        table: &str,
        properties: I,
    ) -> GenqResult<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut qb = SelectBuilder::new(table);
        qb.select(projection);
        for property in properties {
            let property = property.as_ref();
            check(property, "condition property")?;
            let column = self.config.naming.column_name(property);
            qb.and_where(format!("{column} = {}", placeholder(property)));
        }
        self.finish("equality_select_bound", &qb)
    }

    /// `SELECT <projection> FROM <table> WHERE <column> LIKE #{attribute} || '%'`
    pub fn like_select(&self, projection: &str, table: &str, column: &str) -> GenqResult<String> {
        check(column, "LIKE column")?;
        let mut qb = SelectBuilder::new(table);
        qb.select(projection).and_where(format!(
            "{column} LIKE {} || '%'",
            placeholder(&self.config.like_placeholder)
        ));
        self.finish("like_select", &qb)
    }

    /// `DELETE FROM <table> WHERE ID_FIELD=#{idField}`
    pub fn delete_by_id(&self, table: &str, id_field: &str) -> GenqResult<String> {
        check(id_field, "id field")?;
        let column = self.config.naming.column_name(id_field);
        let mut db = DeleteBuilder::new(table);
        db.and_where(format!("{column}={}", placeholder(id_field)));
        self.finish("delete_by_id", &db)
    }

    /// `SELECT fn(p1 , p2 ) FROM DUAL`, or `SELECT fn( ) FROM DUAL` without parameters.
    ///
    /// Parameters are free-form SQL and are emitted verbatim, empty ones included.
    pub fn function_call(&self, function: &str, parameters: &[&str]) -> GenqResult<String> {
        check(function, "function")?;
        let mut call = format!("{function}(");
        for (i, param) in parameters.iter().enumerate() {
            if i > 0 {
                call.push_str(" , ");
            }
            call.push_str(param);
        }
        call.push_str(" )");

        let mut qb = SelectBuilder::new(&self.config.dual_table);
        qb.select(&call);
        self.finish("function_call", &qb)
    }

    /// INSERT with caller-formatted values.
    ///
    /// Keys are used as column names and values are emitted verbatim (SQL
    /// literals, placeholders, expressions). `None` or `"null"` becomes `NULL`.
    pub fn insert_from_map<I, K, V>(&self, table: &str, values: I) -> GenqResult<String>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut ib = InsertBuilder::new(table);
        for (column, value) in values {
            match value {
                Some(v) if v.as_ref() != NULL_LITERAL => ib.value(column.as_ref(), v.as_ref()),
                _ => ib.value_null(column.as_ref()),
            };
        }
        self.finish("insert_from_map", &ib)
    }

    /// Columns for an entity: declared order, transient and absent fields skipped.
    pub fn entity_columns<E: Entity>(&self, entity: &E) -> Vec<ColumnSpec> {
        E::FIELDS
            .iter()
            .filter(|field| !field.transient)
            .filter_map(|field| {
                let value = entity.field_value(field.name);
                if value == Value::Null {
                    return None;
                }
                let column = match field.column {
                    Some(column) => column.to_string(),
                    None => self.config.naming.column_name(field.name),
                };
                Some(ColumnSpec {
                    property: field.name.to_string(),
                    column,
                    value,
                    jdbc_type: self.infer(field.kind),
                })
            })
            .collect()
    }

    /// `INSERT INTO <table> (COL, ...) VALUES (#{field,jdbcType=TAG}, ...)`
    pub fn insert_entity<E: Entity>(&self, table: &str, entity: &E) -> GenqResult<String> {
        let mut ib = InsertBuilder::new(table);
        for spec in self.entity_columns(entity) {
            ib.value(&spec.column, &spec.placeholder());
        }
        self.finish("insert_entity", &ib)
    }

    /// INSERT from keyed values with inferred or overridden JDBC tags.
    ///
    /// Absent values, `"null"` text and ignored keys are skipped. Values tagged
    /// `DATE` are coerced to dates with the date format; a failure is logged,
    /// recorded in [`TypedInsert::failures`], and the original value is kept.
    /// `values` itself is never modified.
    pub fn insert_from_typed_map(
        &self,
        table: &str,
        values: &ValueMap,
        options: &TypedInsertOptions,
    ) -> GenqResult<TypedInsert> {
        let format = options
            .date_format
            .as_deref()
            .unwrap_or(&self.config.date_format);
        check_not_blank(format, "date format")?;

        let mut coerced = values.clone();
        let mut failures = Vec::new();
        let mut ib = InsertBuilder::new(table);

        for (key, value) in values {
            if value.is_absent() || options.ignored.contains(key) {
                continue;
            }
            check(key, "value key")?;

            let jdbc_type = options
                .overrides
                .get(key)
                .cloned()
                .unwrap_or_else(|| self.infer(value.kind()));

            if jdbc_type.is_date() {
                match coerce_date(key, value, format) {
                    Ok(date) => {
                        coerced.insert(key.clone(), date);
                    }
                    Err(err) => {
                        tracing::warn!(
                            target: LOG_TARGET,
                            key = %key,
                            error = %err,
                            "date coercion failed; keeping original value"
                        );
                        failures.push(err);
                    }
                }
            }

            let column = self.config.naming.column_name(key);
            ib.value(&column, &typed_placeholder(key, &jdbc_type));
        }

        let sql = self.finish("insert_from_typed_map", &ib)?;
        Ok(TypedInsert {
            sql,
            values: coerced,
            failures,
        })
    }

    fn finish(&self, op: &'static str, builder: &impl SqlBuilder) -> GenqResult<String> {
        let sql = builder.build()?;
        tracing::debug!(target: LOG_TARGET, op, sql = %sql, "synthesized statement");
        Ok(sql)
    }
}

/// Parse `text` with a chrono format into a date, or a date-time when the
/// format carries a time. Trailing text after the formatted prefix is ignored.
/// Out-of-range fields (`2021-02-30`) are an error; they are not rolled over.
pub fn parse_date(text: &str, format: &str) -> Result<Value, chrono::ParseError> {
    match NaiveDateTime::parse_and_remainder(text, format) {
        Ok((dt, _)) => Ok(Value::DateTime(dt)),
        Err(_) => NaiveDate::parse_and_remainder(text, format).map(|(d, _)| Value::Date(d)),
    }
}

fn coerce_date(key: &str, value: &Value, format: &str) -> GenqResult<Value> {
    match value {
        Value::Date(_) | Value::DateTime(_) => Ok(value.clone()),
        Value::Text(text) => parse_date(text, format).map_err(|source| GenqError::DateParse {
            key: key.to_string(),
            input: text.clone(),
            format: format.to_string(),
            source,
        }),
        other => Err(GenqError::Coercion {
            key: key.to_string(),
            kind: other.kind(),
        }),
    }
}

#[cfg(test)]
mod tests;

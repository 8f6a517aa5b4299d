//! SQL statement builders for the JSONB document table.
//!
//! Field names and values are always bound as parameters; only
//! placeholders are interpolated into the SQL text.

use serde_json::Value;

use docrepo_core::types::{Document, FilterField, FilterOp, StoreQuery};

/// A positional bind parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlBind {
    /// A `TEXT` parameter.
    Text(String),
    /// A `JSONB` parameter.
    Json(Value),
    /// A `BIGINT` parameter.
    BigInt(i64),
}

/// SQL text plus its bind parameters in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlStatement {
    /// The statement text with `$n` placeholders.
    pub sql: String,
    /// Parameters for `$1..$n`.
    pub binds: Vec<SqlBind>,
}

impl SqlStatement {
    fn push(&mut self, bind: SqlBind) -> String {
        self.binds.push(bind);
        format!("${}", self.binds.len())
    }

    fn push_text(&mut self, text: impl Into<String>) -> String {
        let placeholder = self.push(SqlBind::Text(text.into()));
        format!("{placeholder}::text")
    }

    fn push_json(&mut self, value: Value) -> String {
        let placeholder = self.push(SqlBind::Json(value));
        format!("{placeholder}::jsonb")
    }

    fn push_bigint(&mut self, value: u64) -> String {
        self.push(SqlBind::BigInt(i64::try_from(value).unwrap_or(i64::MAX)))
    }
}

/// `SELECT COUNT(*)` over matching documents.
pub fn count(collection: &str, query: &StoreQuery) -> SqlStatement {
    let mut stmt = empty();
    let predicate = where_clause(&mut stmt, collection, query);
    stmt.sql = format!("SELECT COUNT(*) FROM documents WHERE {predicate}");
    stmt
}

/// `SELECT EXISTS(...)` over matching documents.
pub fn exists(collection: &str, query: &StoreQuery) -> SqlStatement {
    let mut stmt = empty();
    let predicate = where_clause(&mut stmt, collection, query);
    stmt.sql = format!("SELECT EXISTS (SELECT 1 FROM documents WHERE {predicate})");
    stmt
}

/// Select matching documents in insertion order.
pub fn find(collection: &str, query: &StoreQuery, skip: u64, limit: u64) -> SqlStatement {
    let mut stmt = empty();
    let predicate = where_clause(&mut stmt, collection, query);
    let offset = stmt.push_bigint(skip);
    let limit = stmt.push_bigint(limit);
    stmt.sql = format!(
        "SELECT doc FROM documents WHERE {predicate} ORDER BY seq OFFSET {offset} LIMIT {limit}"
    );
    stmt
}

/// Select the first matching document.
pub fn find_one(collection: &str, query: &StoreQuery) -> SqlStatement {
    let mut stmt = empty();
    let predicate = where_clause(&mut stmt, collection, query);
    stmt.sql = format!("SELECT doc FROM documents WHERE {predicate} ORDER BY seq LIMIT 1");
    stmt
}

/// Insert a document.
pub fn insert(collection: &str, document: Document) -> SqlStatement {
    let mut stmt = empty();
    let collection = stmt.push_text(collection);
    let doc = stmt.push_json(Value::Object(document));
    stmt.sql = format!("INSERT INTO documents (collection, doc) VALUES ({collection}, {doc})");
    stmt
}

/// Replace the first matching document.
pub fn update_one(collection: &str, query: &StoreQuery, document: Document) -> SqlStatement {
    let mut stmt = empty();
    let predicate = where_clause(&mut stmt, collection, query);
    let doc = stmt.push_json(Value::Object(document));
    stmt.sql = format!(
        "UPDATE documents SET doc = {doc} WHERE seq = \
         (SELECT seq FROM documents WHERE {predicate} ORDER BY seq LIMIT 1)"
    );
    stmt
}

fn empty() -> SqlStatement {
    SqlStatement {
        sql: String::new(),
        binds: Vec::new(),
    }
}

fn where_clause(stmt: &mut SqlStatement, collection: &str, query: &StoreQuery) -> String {
    let mut parts = vec![format!("collection = {}", stmt.push_text(collection))];

    // Scalar equalities merge into one containment test, which is exact for
    // scalar field values and can use the GIN index.
    let mut containment = serde_json::Map::new();
    for condition in &query.all_of {
        let mergeable = condition.op == FilterOp::Eq
            && is_scalar(&condition.value)
            && containment
                .get(&condition.field)
                .is_none_or(|existing| *existing == condition.value);
        if mergeable {
            containment.insert(condition.field.clone(), condition.value.clone());
        } else {
            parts.push(condition_sql(stmt, condition));
        }
    }
    if !containment.is_empty() {
        parts.insert(1, format!("doc @> {}", stmt.push_json(Value::Object(containment))));
    }

    if !query.any_of.is_empty() {
        let alternatives: Vec<String> = query
            .any_of
            .iter()
            .map(|condition| condition_sql(stmt, condition))
            .collect();
        parts.push(format!("({})", alternatives.join(" OR ")));
    }

    parts.join(" AND ")
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

fn condition_sql(stmt: &mut SqlStatement, condition: &FilterField) -> String {
    let field = stmt.push_text(condition.field.clone());
    match condition.op {
        FilterOp::Eq => {
            let value = stmt.push_json(condition.value.clone());
            format!("doc -> {field} = {value}")
        }
        FilterOp::ILike => {
            let needle = match &condition.value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let pattern = stmt.push_text(format!("%{}%", escape_like(&needle)));
            format!(
                "(jsonb_typeof(doc -> {field}) IN ('string', 'number', 'boolean') \
                 AND doc ->> {field} ILIKE {pattern})"
            )
        }
    }
}

/// Escape `LIKE` metacharacters so the needle matches literally.
pub fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

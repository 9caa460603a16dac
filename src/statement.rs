//! Statement context consumed by the coordinator and the prepared output it returns

use page_object::PaginationParam;
use serde_json::Value;

/// A statement as the host framework is about to execute it
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// Identity key the statement's pagination descriptor is cached under
    pub id: String,
    pub sql: String,
    /// Bind parameters of `sql`, in placeholder order
    pub params: Vec<Value>,
}

impl Statement {
    pub fn new(id: &str, sql: &str) -> Self {
        Self {
            id: id.to_string(),
            sql: sql.to_string(),
            params: Vec::new(),
        }
    }

    pub fn with_params(mut self, params: Vec<Value>) -> Self {
        self.params = params;
        self
    }

    /// Append one bind parameter
    pub fn bind<V: Into<Value>>(mut self, value: V) -> Self {
        self.params.push(value.into());
        self
    }
}

/// Count query run before the data query of a pageable statement
#[derive(Debug, Clone, PartialEq)]
pub struct CountQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Rewritten SQL and parameters ready for the caller to execute
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedPage {
    pub statement_id: String,
    /// Paginated SQL, or the original SQL when the statement is not pageable
    pub sql: String,
    pub params: Vec<Value>,
    /// Present only for pageable statements
    pub count: Option<CountQuery>,
    pub pagination: PaginationParam,
}

impl PreparedPage {
    /// The statement unchanged, run without pagination
    pub fn passthrough(statement: &Statement, pagination: PaginationParam) -> Self {
        Self {
            statement_id: statement.id.clone(),
            sql: statement.sql.clone(),
            params: statement.params.clone(),
            count: None,
            pagination,
        }
    }

    pub fn is_pageable(&self) -> bool {
        self.pagination.pageable && self.count.is_some()
    }
}

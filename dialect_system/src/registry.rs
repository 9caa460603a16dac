//! Engine id to dialect registry
//!
//! The registry is populated once through its builder and is read-only
//! afterwards, so it can be shared across threads without locking.

use crate::dialect::Dialect;
use crate::dialects::{Db2, Informix, LimitOffset, MySql, OffsetFetch, Oracle, SqlServer};
use crate::errors::DialectError;
use std::collections::HashMap;
use std::sync::Arc;

/// Maps normalized engine ids to their dialect
pub struct DialectRegistry {
    dialects: HashMap<String, Arc<dyn Dialect>>,
    fallback: Option<(String, Arc<dyn Dialect>)>,
}

impl std::fmt::Debug for DialectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialectRegistry")
            .field("engine_ids", &self.engine_ids())
            .field("fallback", &self.fallback.as_ref().map(|(id, _)| id))
            .finish()
    }
}

impl DialectRegistry {
    pub fn builder() -> DialectRegistryBuilder {
        DialectRegistryBuilder {
            dialects: HashMap::new(),
            fallback: None,
        }
    }

    /// Registry holding every built-in dialect and no fallback
    pub fn with_defaults() -> Self {
        Self {
            dialects: Self::builder().with_defaults().dialects,
            fallback: None,
        }
    }

    /// Resolve the dialect registered for `engine_id`, or the fallback
    pub fn resolve(&self, engine_id: &str) -> Result<Arc<dyn Dialect>, DialectError> {
        let key = normalize(engine_id);
        if let Some(dialect) = self.dialects.get(&key) {
            return Ok(Arc::clone(dialect));
        }

        match &self.fallback {
            Some((fallback_id, dialect)) => {
                tracing::debug!(
                    engine = %key,
                    fallback = %fallback_id,
                    "No dialect registered for engine, using fallback"
                );
                Ok(Arc::clone(dialect))
            }
            None => Err(DialectError::UnsupportedDialect(engine_id.to_string())),
        }
    }

    /// Resolve the dialect for a connection URL such as `jdbc:mysql://host/db`
    pub fn resolve_url(&self, url: &str) -> Result<Arc<dyn Dialect>, DialectError> {
        let engine_id = engine_id_from_url(url)?;
        self.resolve(&engine_id)
    }

    pub fn contains(&self, engine_id: &str) -> bool {
        self.dialects.contains_key(&normalize(engine_id))
    }

    /// List all registered engine ids, sorted
    pub fn engine_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.dialects.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn fallback_id(&self) -> Option<&str> {
        self.fallback.as_ref().map(|(id, _)| id.as_str())
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Collects dialects before the registry is shared
pub struct DialectRegistryBuilder {
    dialects: HashMap<String, Arc<dyn Dialect>>,
    fallback: Option<String>,
}

impl DialectRegistryBuilder {
    /// Register every built-in dialect under its engine ids
    pub fn with_defaults(self) -> Self {
        self.register("informix", Informix)
            .register_all(&["mysql", "mariadb"], MySql)
            .register_all(&["postgresql", "postgres", "sqlite", "h2", "hsqldb"], LimitOffset)
            .register("oracle", Oracle)
            .register_all(&["oracle12c", "sqlserver2012", "derby"], OffsetFetch)
            .register("db2", Db2)
            .register("sqlserver", SqlServer)
    }

    /// Register a dialect; a later registration for the same id replaces it
    pub fn register<D>(mut self, engine_id: &str, dialect: D) -> Self
    where
        D: Dialect + 'static,
    {
        self.dialects.insert(normalize(engine_id), Arc::new(dialect));
        self
    }

    /// Register one dialect instance under several engine ids
    pub fn register_all<D>(mut self, engine_ids: &[&str], dialect: D) -> Self
    where
        D: Dialect + 'static,
    {
        let shared: Arc<dyn Dialect> = Arc::new(dialect);
        for id in engine_ids {
            self.dialects.insert(normalize(id), Arc::clone(&shared));
        }
        self
    }

    /// Engine id whose dialect is used when a requested id is unknown
    pub fn fallback(mut self, engine_id: &str) -> Self {
        self.fallback = Some(normalize(engine_id));
        self
    }

    pub fn build(self) -> Result<DialectRegistry, DialectError> {
        let fallback = match self.fallback {
            Some(id) => {
                let dialect = self
                    .dialects
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| DialectError::UnsupportedDialect(id.clone()))?;
                Some((id, dialect))
            }
            None => None,
        };

        tracing::debug!(
            dialects = self.dialects.len(),
            fallback = ?fallback.as_ref().map(|(id, _)| id),
            "Built dialect registry"
        );

        Ok(DialectRegistry {
            dialects: self.dialects,
            fallback,
        })
    }
}

fn normalize(engine_id: &str) -> String {
    engine_id.trim().to_ascii_lowercase()
}

/// Derive an engine id from a connection URL.
///
/// Accepts `jdbc:<engine>:...`, `<engine>://...` and `<engine>:...` forms; the
/// `-sqli` suffix of Informix URLs and `microsoft:` prefixes are stripped.
pub fn engine_id_from_url(url: &str) -> Result<String, DialectError> {
    let trimmed = url.trim();
    let lowered = trimmed.to_ascii_lowercase();
    let rest = lowered.strip_prefix("jdbc:").unwrap_or(&lowered);
    let rest = rest.strip_prefix("microsoft:").unwrap_or(rest);

    let scheme = rest
        .split(|c: char| c == ':' || c == '/')
        .next()
        .unwrap_or_default();

    let engine = match scheme {
        "" => return Err(DialectError::UnrecognizedUrl(trimmed.to_string())),
        "informix-sqli" | "informix-direct" => "informix",
        "postgres" | "postgresql" => "postgresql",
        "mssql" | "sqlserver" => "sqlserver",
        other => other,
    };

    if rest.len() == scheme.len() {
        return Err(DialectError::UnrecognizedUrl(trimmed.to_string()));
    }

    Ok(engine.to_string())
}

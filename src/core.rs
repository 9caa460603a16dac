//! Core PageHaus functionality
//!
//! This module contains the main PageHaus struct and its builder, providing
//! centralized coordination between the dialect registry and the descriptor
//! resolver.

use std::sync::Arc;

use config::AppConfig;
use dialect_system::{engine_id_from_url, Dialect, DialectRegistry, DialectRegistryBuilder};
use page_object::{
    extract_from, DescriptorResolver, DescriptorResolverBuilder, Pageable, PaginationParam,
    PaginationShape,
};
use serde::Serialize;

use crate::errors::PageHausError;
use crate::statement::{CountQuery, PreparedPage, Statement};

/// Main PageHaus coordinator that rewrites statements into paginated queries
#[derive(Debug)]
pub struct PageHaus {
    dialects: DialectRegistry,
    descriptors: DescriptorResolver,
    default_engine: Option<String>,
}

impl PageHaus {
    /// Create new PageHaus with the built-in dialects and no registered statements
    pub fn new(config: AppConfig) -> Result<Self, PageHausError> {
        Self::builder(config).build()
    }

    pub fn builder(config: AppConfig) -> PageHausBuilder {
        PageHausBuilder {
            dialects: DialectRegistry::builder().with_defaults(),
            descriptors: DescriptorResolver::builder(config.pagination.clone()),
            config,
        }
    }

    /// Load configuration from `.env` / `pagehaus.toml` and build
    pub fn from_env() -> Result<Self, PageHausError> {
        Self::new(AppConfig::load()?)
    }

    pub fn dialects(&self) -> &DialectRegistry {
        &self.dialects
    }

    pub fn descriptors(&self) -> &DescriptorResolver {
        &self.descriptors
    }

    /// Engine id used by [`PageHaus::prepare_default`]
    pub fn default_engine(&self) -> Option<&str> {
        self.default_engine.as_deref()
    }

    pub fn resolve_dialect(&self, engine_id: &str) -> Result<Arc<dyn Dialect>, PageHausError> {
        Ok(self.dialects.resolve(engine_id)?)
    }

    /// Rewrite `statement` for the page described by `param`.
    ///
    /// Statements without a registered descriptor, and invocations whose
    /// parameter object carries no page values and no usable defaults, pass
    /// through unchanged.
    pub fn prepare<P>(
        &self,
        statement: &Statement,
        engine_id: &str,
        param: &P,
    ) -> Result<PreparedPage, PageHausError>
    where
        P: Serialize + ?Sized,
    {
        let Some(descriptor) = self.descriptors.resolve(&statement.id)? else {
            debug_log!(statement = %statement.id, "Statement not registered, running unpaged");
            return Ok(PreparedPage::passthrough(statement, PaginationParam::unpaged()));
        };

        let pagination = extract_from(&descriptor, param)?;
        if !pagination.is_pageable() {
            debug_log!(statement = %statement.id, "No page values supplied, running unpaged");
            return Ok(PreparedPage::passthrough(statement, pagination));
        }

        let dialect = self.dialects.resolve(engine_id)?;
        let paginated = dialect.paginate(&statement.sql, &statement.params, &pagination);
        let count = CountQuery {
            sql: dialect.count_sql(&statement.sql, pagination.count_target()),
            params: statement.params.clone(),
        };

        tracing::debug!(
            statement = %statement.id,
            dialect = dialect.name(),
            page = ?pagination.page,
            size = ?pagination.size,
            "Prepared paginated statement"
        );
        trace_log!(sql = %paginated.sql, params = ?paginated.params, "Paginated SQL");

        Ok(PreparedPage {
            statement_id: statement.id.clone(),
            sql: paginated.sql,
            params: paginated.params,
            count: Some(count),
            pagination,
        })
    }

    /// [`PageHaus::prepare`] against the configured default engine
    pub fn prepare_default<P>(
        &self,
        statement: &Statement,
        param: &P,
    ) -> Result<PreparedPage, PageHausError>
    where
        P: Serialize + ?Sized,
    {
        let engine_id = self.default_engine.as_deref().ok_or_else(|| {
            PageHausError::ConfigurationError(
                "no default engine: set dialect.engine or dialect.url".to_string(),
            )
        })?;
        self.prepare(statement, engine_id, param)
    }
}

/// Collects dialects and statement registrations before PageHaus is shared
pub struct PageHausBuilder {
    dialects: DialectRegistryBuilder,
    descriptors: DescriptorResolverBuilder,
    config: AppConfig,
}

impl PageHausBuilder {
    /// Register an extra dialect, replacing any built-in one with the same id
    pub fn dialect<D>(mut self, engine_id: &str, dialect: D) -> Self
    where
        D: Dialect + 'static,
    {
        self.dialects = self.dialects.register(engine_id, dialect);
        self
    }

    /// Register a statement with an explicit shape
    pub fn statement(mut self, statement_id: &str, shape: PaginationShape) -> Self {
        self.descriptors = self.descriptors.register(statement_id, shape);
        self
    }

    /// Register a statement whose parameter type derives `Pageable`
    pub fn pageable<P: Pageable>(mut self, statement_id: &str) -> Self {
        self.descriptors = self.descriptors.register_type::<P>(statement_id);
        self
    }

    pub fn build(self) -> Result<PageHaus, PageHausError> {
        self.config.validate()?;

        let mut dialects = self.dialects;
        if let Some(fallback) = &self.config.dialect.fallback {
            dialects = dialects.fallback(fallback);
        }
        let dialects = dialects.build()?;

        let default_engine = match (&self.config.dialect.engine, &self.config.dialect.url) {
            (Some(engine), _) => Some(engine.trim().to_ascii_lowercase()),
            (None, Some(url)) => Some(engine_id_from_url(url)?),
            (None, None) => None,
        };

        if let Some(engine) = &default_engine {
            dialects.resolve(engine)?;
        }

        let descriptors = self.descriptors.build();
        tracing::info!(
            statements = descriptors.statement_ids().len(),
            engines = dialects.engine_ids().len(),
            default_engine = ?default_engine,
            "PageHaus initialized"
        );

        Ok(PageHaus {
            dialects,
            descriptors,
            default_engine,
        })
    }
}

//! Descriptor resolution and caching
//!
//! The resolver holds a registration table `{statement id -> PaginationShape}`
//! built once at startup, and caches the descriptor built for each statement
//! the first time it is resolved. Cached entries are never replaced.

use crate::descriptor::PaginationDescriptor;
use crate::errors::PaginationError;
use crate::shape::PaginationShape;
use crate::traits::Pageable;
use config::PaginationConfig;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Resolves and caches pagination descriptors per statement
pub struct DescriptorResolver {
    shapes: HashMap<String, PaginationShape>,
    config: PaginationConfig,
    cache: RwLock<HashMap<String, Arc<PaginationDescriptor>>>,
}

impl std::fmt::Debug for DescriptorResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescriptorResolver")
            .field("registered", &self.shapes.len())
            .field("cached", &self.cached_count())
            .field("config", &self.config)
            .finish()
    }
}

impl DescriptorResolver {
    pub fn builder(config: PaginationConfig) -> DescriptorResolverBuilder {
        DescriptorResolverBuilder {
            shapes: HashMap::new(),
            config,
        }
    }

    /// Resolve the descriptor for a statement.
    ///
    /// Returns `Ok(None)` for statements that were never registered; they run
    /// without pagination.
    pub fn resolve(
        &self,
        statement_id: &str,
    ) -> Result<Option<Arc<PaginationDescriptor>>, PaginationError> {
        if let Ok(cache) = self.cache.read() {
            if let Some(descriptor) = cache.get(statement_id) {
                return Ok(Some(Arc::clone(descriptor)));
            }
        }

        let Some(shape) = self.shapes.get(statement_id) else {
            return Ok(None);
        };

        let descriptor = Arc::new(PaginationDescriptor::build(
            statement_id,
            shape,
            &self.config,
        )?);
        tracing::debug!(statement = statement_id, "Built pagination descriptor");

        match self.cache.write() {
            Ok(mut cache) => Ok(Some(Arc::clone(
                cache
                    .entry(statement_id.to_string())
                    .or_insert(descriptor),
            ))),
            Err(_) => {
                tracing::warn!(
                    statement = statement_id,
                    "Descriptor cache lock poisoned, serving uncached descriptor"
                );
                Ok(Some(descriptor))
            }
        }
    }

    pub fn is_registered(&self, statement_id: &str) -> bool {
        self.shapes.contains_key(statement_id)
    }

    /// List all registered statement ids
    pub fn statement_ids(&self) -> Vec<&String> {
        self.shapes.keys().collect()
    }

    /// Number of descriptors built so far
    pub fn cached_count(&self) -> usize {
        self.cache.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }
}

/// Collects the registration table before the resolver is shared
#[derive(Debug)]
pub struct DescriptorResolverBuilder {
    shapes: HashMap<String, PaginationShape>,
    config: PaginationConfig,
}

impl DescriptorResolverBuilder {
    /// Register a statement with an explicit shape; a later registration for the same id replaces it
    pub fn register(mut self, statement_id: &str, shape: PaginationShape) -> Self {
        self.shapes.insert(statement_id.to_string(), shape);
        self
    }

    /// Register a statement whose parameter type derives `Pageable`
    pub fn register_type<P: Pageable>(self, statement_id: &str) -> Self {
        self.register(statement_id, P::pagination_shape())
    }

    pub fn build(self) -> DescriptorResolver {
        DescriptorResolver {
            shapes: self.shapes,
            config: self.config,
            cache: RwLock::new(HashMap::new()),
        }
    }
}

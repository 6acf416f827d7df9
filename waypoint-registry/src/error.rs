//! Error types for the registry layer.
//!
//! Nothing here is retried internally: lookup errors go back to the caller
//! to adjust the query, and backend/hook failures are carried through
//! without translation.

use thiserror::Error;

/// Result type for operations invocations.
pub type OpsResult<T> = Result<T, OperationsError>;

/// Errors surfaced by wrapped operations.
#[derive(Debug, Error)]
pub enum OperationsError {
    /// A validator rejected the mutation; the backend was never invoked.
    #[error("{op} rejected by validator for [{coordinate}]")]
    Validation {
        op: &'static str,
        coordinate: String,
    },

    /// The requested finder is not present in the definition.
    #[error("finder '{name}' is not defined for [{coordinate}]")]
    FinderNotFound { name: String, coordinate: String },

    /// The requested action is not present in the definition.
    #[error("action '{name}' is not defined for [{coordinate}]")]
    ActionNotFound { name: String, coordinate: String },

    /// The requested facet is not present in the definition.
    #[error("facet '{name}' is not defined for [{coordinate}]")]
    FacetNotFound { name: String, coordinate: String },

    /// A failure raised by a backend, hook, validator, finder, action, or
    /// facet, carried through unchanged.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Result type for registry and hub lookups.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors surfaced by registry and hub lookups and registration.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No registered coordinate matches the requested hierarchy and scopes.
    #[error("no instance for [{kta}] with scopes [{scopes}] in registry '{registry}'")]
    InstanceNotFound {
        registry: String,
        kta: String,
        scopes: String,
    },

    /// More than one registered scope set covers the request; the caller
    /// must disambiguate with more specific scopes.
    #[error(
        "{count} instances match [{kta}] with scopes [{scopes}] in registry '{registry}'; \
         request more specific scopes"
    )]
    AmbiguousMatch {
        registry: String,
        kta: String,
        scopes: String,
        count: usize,
    },

    /// The hub has no registry under the requested type name.
    #[error("no registry for type '{0}'")]
    RegistryNotFound(String),

    /// The stored instance holds a different item type than requested.
    #[error("instance for [{kta}] in registry '{registry}' holds a different item type")]
    InstanceTypeMismatch { registry: String, kta: String },

    /// The instance is already attached to a registry.
    #[error("instance for [{coordinate}] is already attached to a registry")]
    AlreadyAttached { coordinate: String },
}

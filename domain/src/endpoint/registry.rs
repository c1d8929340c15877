//! Endpoint registry - the ordered, static list of upstream targets.

use super::entities::{Endpoint, ProtocolVariant};
use crate::core::error::RegistryError;

/// Raw description of one registry entry before credentials are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSpec {
    pub url: String,
    /// Per-endpoint credential; falls back to the registry default
    pub credential: Option<String>,
    /// Explicit variant; inferred from the URL path when absent
    pub variant: Option<ProtocolVariant>,
}

impl EndpointSpec {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            credential: None,
            variant: None,
        }
    }

    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    pub fn with_variant(mut self, variant: ProtocolVariant) -> Self {
        self.variant = Some(variant);
        self
    }
}

/// Ordered, read-only collection of [`Endpoint`]s.
///
/// Order is priority: the first entry is tried first. The same URL may
/// appear more than once; that is how endpoint-level retry is configured.
/// The registry is never empty.
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    endpoints: Vec<Endpoint>,
    default_credential: String,
}

impl EndpointRegistry {
    /// Build a registry, resolving credentials and variants.
    ///
    /// Fails with [`RegistryError::NoEndpoints`] when `specs` is empty.
    pub fn new(
        specs: Vec<EndpointSpec>,
        default_credential: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        if specs.is_empty() {
            return Err(RegistryError::NoEndpoints);
        }
        let default_credential = default_credential.into();

        let endpoints = specs
            .into_iter()
            .map(|spec| {
                let variant = spec
                    .variant
                    .unwrap_or_else(|| ProtocolVariant::infer_from_url(&spec.url));
                let credential = spec
                    .credential
                    .unwrap_or_else(|| default_credential.clone());
                Endpoint::new(spec.url, credential, variant)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            endpoints,
            default_credential,
        })
    }

    /// Endpoints in priority order
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn iter(&self) -> impl Iterator<Item = &Endpoint> {
        self.endpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn default_credential(&self) -> &str {
        &self.default_credential
    }

    /// Credential of the first entry with this URL.
    pub fn credential_for(&self, url: &str) -> Option<&str> {
        self.endpoints
            .iter()
            .find(|e| e.url() == url)
            .map(|e| e.credential())
    }

    pub fn urls(&self) -> Vec<String> {
        self.endpoints.iter().map(|e| e.url().to_string()).collect()
    }
}

//! Endpoint value objects

use crate::core::error::RegistryError;
use crate::core::string::mask_secret;
use serde::Serialize;
use url::Url;

/// Which upstream path family an endpoint belongs to.
///
/// The request payload is identical for both; only the URL path differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolVariant {
    /// `.../kickoff` paths
    #[default]
    Kickoff,
    /// `.../run` paths
    Run,
}

impl ProtocolVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolVariant::Kickoff => "kickoff",
            ProtocolVariant::Run => "run",
        }
    }

    /// Infer the variant from the last path segment of a URL.
    pub fn infer_from_url(url: &str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        if path.trim_end_matches('/').ends_with("/run") {
            ProtocolVariant::Run
        } else {
            ProtocolVariant::Kickoff
        }
    }
}

impl std::fmt::Display for ProtocolVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProtocolVariant {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kickoff" => Ok(ProtocolVariant::Kickoff),
            "run" => Ok(ProtocolVariant::Run),
            other => Err(RegistryError::UnknownVariant(other.to_string())),
        }
    }
}

/// One candidate upstream target (Value Object)
///
/// The credential is never serialized and is masked in `Debug` output.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Endpoint {
    url: String,
    #[serde(skip_serializing)]
    credential: String,
    variant: ProtocolVariant,
}

impl Endpoint {
    /// Create an endpoint, checking that the URL is an absolute http(s) URL
    /// with a host.
    ///
    /// The URL is kept exactly as written; parsing only validates it.
    pub fn new(
        url: impl Into<String>,
        credential: impl Into<String>,
        variant: ProtocolVariant,
    ) -> Result<Self, RegistryError> {
        let url = url.into();
        let valid = Url::parse(&url).is_ok_and(|parsed| {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|host| !host.is_empty())
        });
        if !valid {
            return Err(RegistryError::InvalidUrl(url));
        }

        Ok(Self {
            url,
            credential: credential.into(),
            variant,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    pub fn variant(&self) -> ProtocolVariant {
        self.variant
    }
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("url", &self.url)
            .field("credential", &mask_secret(&self.credential))
            .field("variant", &self.variant)
            .finish()
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}

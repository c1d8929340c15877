//! Upstream configuration from TOML (`[upstream]` section)

use hwhelper_domain::{
    ConfigIssue, ConfigIssueCode, Endpoint, EndpointRegistry, EndpointSpec, ProtocolVariant,
    RegistryError,
};
use serde::{Deserialize, Serialize};

/// Placeholder replaced by `project_id` in endpoint URLs
pub const PROJECT_ID_PLACEHOLDER: &str = "{project_id}";

pub const DEFAULT_PROJECT_ID: &str = "85c60404-7f80-4834-8683-f57e72137d2f";
pub const DEFAULT_CREDENTIAL: &str = "796c01f5d0bb";
pub const DEFAULT_CREDENTIAL_ENV: &str = "CREWAI_TOKEN";

/// Built-in endpoint list, in priority order.
pub const DEFAULT_ENDPOINT_TEMPLATES: [&str; 5] = [
    "https://api.crewai.com/v1/crews/{project_id}/kickoff",
    "https://api.crewai.com/crews/{project_id}/kickoff",
    "https://app.crewai.com/api/v1/projects/{project_id}/kickoff",
    "https://app.crewai.com/api/crews/{project_id}/run",
    "https://api.crewai.com/v1/projects/{project_id}/run",
];

/// One `[[upstream.endpoints]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEndpointConfig {
    /// URL, may contain `{project_id}`
    pub url: String,
    /// Overrides `upstream.default_credential` for this entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
    /// `"kickoff"` or `"run"`; inferred from the URL when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl FileEndpointConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            credential: None,
            variant: None,
        }
    }
}

/// Upstream agent platform settings.
///
/// Declaring `[[upstream.endpoints]]` replaces the built-in list entirely.
/// Repeating a URL makes the dispatcher try it again.
///
/// # Example
///
/// ```toml
/// [upstream]
/// project_id = "my-crew"
///
/// [[upstream.endpoints]]
/// url = "https://api.crewai.com/v1/crews/{project_id}/kickoff"
///
/// [[upstream.endpoints]]
/// url = "https://backup.example.com/crews/{project_id}/run"
/// credential = "backup-token"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUpstreamConfig {
    pub project_id: String,
    /// Bearer token for entries without their own credential
    pub default_credential: String,
    /// Environment variable that overrides `default_credential` when set
    pub credential_env: String,
    pub endpoints: Vec<FileEndpointConfig>,
}

impl Default for FileUpstreamConfig {
    fn default() -> Self {
        Self {
            project_id: DEFAULT_PROJECT_ID.to_string(),
            default_credential: DEFAULT_CREDENTIAL.to_string(),
            credential_env: DEFAULT_CREDENTIAL_ENV.to_string(),
            endpoints: DEFAULT_ENDPOINT_TEMPLATES
                .iter()
                .map(|url| FileEndpointConfig::new(*url))
                .collect(),
        }
    }
}

impl FileUpstreamConfig {
    /// Replace the default credential with the value of `credential_env`.
    ///
    /// `lookup` is usually `std::env::var(..).ok()`; blank values are ignored.
    pub fn apply_credential_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> bool {
        match lookup(&self.credential_env) {
            Some(token) if !token.trim().is_empty() => {
                self.default_credential = token;
                true
            }
            _ => false,
        }
    }

    /// Expand `{project_id}` in a URL template
    pub fn expand_url(&self, template: &str) -> String {
        template.replace(PROJECT_ID_PLACEHOLDER, &self.project_id)
    }

    /// Convert entries to [`EndpointSpec`]s, returning validation issues.
    ///
    /// Entries with an invalid URL or an unknown variant are dropped and
    /// reported as errors. The returned list keeps configuration order.
    pub fn parse_endpoints(&self) -> (Vec<EndpointSpec>, Vec<ConfigIssue>) {
        let mut specs = Vec::with_capacity(self.endpoints.len());
        let mut issues = Vec::new();

        if self.endpoints.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::NoEndpoints,
                "upstream.endpoints: at least one endpoint is required",
            ));
            return (specs, issues);
        }

        for entry in &self.endpoints {
            let url = self.expand_url(&entry.url);

            let variant = match entry.variant.as_deref().map(str::parse::<ProtocolVariant>) {
                None => ProtocolVariant::infer_from_url(&url),
                Some(Ok(variant)) => variant,
                Some(Err(_)) => {
                    let value = entry.variant.clone().unwrap_or_default();
                    issues.push(ConfigIssue::error(
                        ConfigIssueCode::UnknownVariant {
                            url: url.clone(),
                            value: value.clone(),
                        },
                        format!(
                            "upstream.endpoints: unknown variant '{}' for {} (expected 'kickoff' or 'run')",
                            value, url
                        ),
                    ));
                    continue;
                }
            };

            if let Err(e) = Endpoint::new(url.as_str(), "", variant) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidEndpointUrl { url: url.clone() },
                    format!("upstream.endpoints: {}", e),
                ));
                continue;
            }

            let mut spec = EndpointSpec::new(url).with_variant(variant);
            if let Some(credential) = &entry.credential {
                spec = spec.with_credential(credential.clone());
            }
            specs.push(spec);
        }

        let blank_default = self.default_credential.trim().is_empty();
        let uses_default = self.endpoints.iter().any(|e| e.credential.is_none());
        if blank_default && uses_default {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingCredential,
                format!(
                    "upstream.default_credential is empty and {} is not set; requests will likely be rejected",
                    self.credential_env
                ),
            ));
        }

        (specs, issues)
    }

    /// Build the endpoint registry from [`parse_endpoints`](Self::parse_endpoints).
    ///
    /// Fails with the first error-severity issue; warnings are ignored here.
    pub fn to_registry(&self) -> Result<EndpointRegistry, RegistryError> {
        let (specs, issues) = self.parse_endpoints();
        if let Some(err) = issues.iter().find_map(registry_error) {
            return Err(err);
        }
        EndpointRegistry::new(specs, self.default_credential.clone())
    }
}

/// Registry error equivalent of an error-severity endpoint issue
fn registry_error(issue: &ConfigIssue) -> Option<RegistryError> {
    if !issue.is_error() {
        return None;
    }
    match &issue.code {
        ConfigIssueCode::NoEndpoints => Some(RegistryError::NoEndpoints),
        ConfigIssueCode::InvalidEndpointUrl { url } => Some(RegistryError::InvalidUrl(url.clone())),
        ConfigIssueCode::UnknownVariant { value, .. } => {
            Some(RegistryError::UnknownVariant(value.clone()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_five_expanded_urls() {
        let config = FileUpstreamConfig::default();
        let registry = config.to_registry().unwrap();

        assert_eq!(registry.len(), 5);
        assert_eq!(
            registry.urls()[0],
            "https://api.crewai.com/v1/crews/85c60404-7f80-4834-8683-f57e72137d2f/kickoff"
        );
        assert_eq!(registry.endpoints()[3].variant(), ProtocolVariant::Run);
        assert!(registry.urls().iter().all(|u| !u.contains('{')));
        assert_eq!(registry.default_credential(), DEFAULT_CREDENTIAL);
    }

    #[test]
    fn test_project_id_is_substituted() {
        let config = FileUpstreamConfig {
            project_id: "crew-42".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.expand_url("https://x.test/crews/{project_id}/kickoff"),
            "https://x.test/crews/crew-42/kickoff"
        );
    }

    #[test]
    fn test_credential_env_overrides_default() {
        let mut config = FileUpstreamConfig::default();
        let applied = config.apply_credential_env(|name| {
            (name == "CREWAI_TOKEN").then(|| "from-env".to_string())
        });
        assert!(applied);
        assert_eq!(config.default_credential, "from-env");
    }

    #[test]
    fn test_blank_env_value_is_ignored() {
        let mut config = FileUpstreamConfig::default();
        assert!(!config.apply_credential_env(|_| Some("  ".to_string())));
        assert!(!config.apply_credential_env(|_| None));
        assert_eq!(config.default_credential, DEFAULT_CREDENTIAL);
    }

    #[test]
    fn test_per_endpoint_credential_and_variant() {
        let config: FileUpstreamConfig = toml::from_str(
            r#"
project_id = "p1"
default_credential = "shared"

[[endpoints]]
url = "https://a.test/{project_id}/go"
variant = "run"

[[endpoints]]
url = "https://b.test/{project_id}/kickoff"
credential = "own"
"#,
        )
        .unwrap();

        let registry = config.to_registry().unwrap();
        assert_eq!(registry.urls(), vec!["https://a.test/p1/go", "https://b.test/p1/kickoff"]);
        assert_eq!(registry.endpoints()[0].variant(), ProtocolVariant::Run);
        assert_eq!(registry.endpoints()[0].credential(), "shared");
        assert_eq!(registry.endpoints()[1].credential(), "own");
    }

    #[test]
    fn test_parse_endpoints_reports_every_defect() {
        let config = FileUpstreamConfig {
            endpoints: vec![
                FileEndpointConfig::new("ftp://a.test/kickoff"),
                FileEndpointConfig {
                    variant: Some("stream".to_string()),
                    ..FileEndpointConfig::new("https://b.test/kickoff")
                },
                FileEndpointConfig::new("https://c.test/run"),
            ],
            ..Default::default()
        };

        let (specs, issues) = config.parse_endpoints();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].url, "https://c.test/run");
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.is_error()));
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::InvalidEndpointUrl { .. }
        ));
        assert!(matches!(issues[1].code, ConfigIssueCode::UnknownVariant { .. }));
    }

    #[test]
    fn test_empty_endpoint_list() {
        let config = FileUpstreamConfig {
            endpoints: vec![],
            ..Default::default()
        };
        let (_, issues) = config.parse_endpoints();
        assert_eq!(issues[0].code, ConfigIssueCode::NoEndpoints);
        assert_eq!(config.to_registry().unwrap_err(), RegistryError::NoEndpoints);
    }

    #[test]
    fn test_to_registry_fails_on_first_defect_from_parse_endpoints() {
        let config = FileUpstreamConfig {
            endpoints: vec![
                FileEndpointConfig::new("https://ok.test/kickoff"),
                FileEndpointConfig::new("https://bad host/{project_id}/kickoff"),
                FileEndpointConfig {
                    variant: Some("stream".to_string()),
                    ..FileEndpointConfig::new("https://c.test/run")
                },
            ],
            ..Default::default()
        };

        let (specs, issues) = config.parse_endpoints();
        assert_eq!(specs.len(), 1);
        assert_eq!(issues.len(), 2);
        assert_eq!(
            config.to_registry().unwrap_err(),
            RegistryError::InvalidUrl(format!("https://bad host/{}/kickoff", DEFAULT_PROJECT_ID))
        );
    }

    #[test]
    fn test_unknown_variant_fails_registry() {
        let config = FileUpstreamConfig {
            endpoints: vec![FileEndpointConfig {
                variant: Some("Stream".to_string()),
                ..FileEndpointConfig::new("https://a.test/kickoff")
            }],
            ..Default::default()
        };
        assert_eq!(
            config.to_registry().unwrap_err(),
            RegistryError::UnknownVariant("Stream".to_string())
        );
    }

    #[test]
    fn test_blank_credential_warning_does_not_block_registry() {
        let config = FileUpstreamConfig {
            default_credential: String::new(),
            ..Default::default()
        };
        assert_eq!(config.to_registry().unwrap().len(), 5);
    }

    #[test]
    fn test_blank_credential_is_a_warning() {
        let config = FileUpstreamConfig {
            default_credential: String::new(),
            ..Default::default()
        };
        let (specs, issues) = config.parse_endpoints();
        assert_eq!(specs.len(), 5);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert_eq!(issues[0].code, ConfigIssueCode::MissingCredential);
    }
}

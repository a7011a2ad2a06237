//! DGT artifact service client
//!
//! Looks up where a compiled artifact was built from. Two sequential GETs:
//! the latest build version, then the artifact's details for that version.
//! The returned source path is rewritten into a path relative to a root.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::interfaces::{ArtifactIndex, Notice, Notifier};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

const LATEST_VERSION_PATH: &str = "/api/graph/latest-version";
const ASSEMBLY_DETAILS_PATH: &str = "/api/graph/assembly/details";

/// Replaces the concrete build version inside returned source paths.
pub const VERSION_PLACEHOLDER: &str = "version";

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    status: i64,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssemblyDetails {
    source_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DgtClient {
    http: reqwest::Client,
    base_url: String,
    source_prefix: String,
}

impl DgtClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            source_prefix: crate::config::DEFAULT_SOURCE_PREFIX.to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.service_address()).with_source_prefix(settings.source_prefix())
    }

    pub fn with_source_prefix(mut self, prefix: &str) -> Self {
        self.source_prefix = prefix.to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Latest published build version, or `None`.
    pub async fn latest_version(&self, notifier: &dyn Notifier) -> Option<String> {
        let url = format!("{}{}", self.base_url, LATEST_VERSION_PATH);

        match self.get_json::<String>(&url).await {
            Ok(Envelope { status: 200, data }) => data.filter(|v| !v.is_empty()),
            Ok(envelope) => {
                tracing::debug!("{} answered status {}", url, envelope.status);
                None
            }
            Err(e) => {
                tracing::warn!("Failed to fetch latest version: {}", e);
                notifier.notify(Notice::RequestFailed { url });
                None
            }
        }
    }

    /// Raw `sourcePath` of `assembly` at `version`, or `None`.
    pub async fn artifact_details(
        &self,
        assembly: &str,
        version: &str,
        notifier: &dyn Notifier,
    ) -> Option<String> {
        let url = format!(
            "{}{}?{}",
            self.base_url,
            ASSEMBLY_DETAILS_PATH,
            query_string(&[("assembly", assembly), ("version", version), ("process", "")])
        );

        match self.get_json::<AssemblyDetails>(&url).await {
            Ok(envelope) => {
                let source_path = (envelope.status == 200)
                    .then_some(envelope.data)
                    .flatten()
                    .and_then(|details| details.source_path)
                    .filter(|p| !p.is_empty());
                if source_path.is_none() {
                    tracing::debug!("{} unknown to {} (status {})", assembly, url, envelope.status);
                    notifier.notify(Notice::ArtifactNotFound {
                        name: assembly.to_string(),
                    });
                }
                source_path
            }
            Err(e) => {
                tracing::warn!("Failed to fetch details for {}: {}", assembly, e);
                notifier.notify(Notice::RequestFailed { url });
                None
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<Envelope<T>> {
        tracing::debug!("GET {}", url);
        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        serde_json::from_str(&body).map_err(|e| Error::InvalidResponse {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl ArtifactIndex for DgtClient {
    async fn locate(&self, artifact: &str, notifier: &dyn Notifier) -> Option<String> {
        let version = self.latest_version(notifier).await?;
        let source_path = self.artifact_details(artifact, &version, notifier).await?;
        let relative = normalize_source_path(&source_path, &version, &self.source_prefix);
        tracing::debug!("{} located at {} (version {})", artifact, relative, version);
        Some(relative)
    }
}

/// Rewrite a service source path into a root-relative one: the build version
/// becomes [`VERSION_PLACEHOLDER`], backslashes become `/`, and the first
/// occurrence of `prefix` is removed wherever it appears.
pub fn normalize_source_path(source_path: &str, version: &str, prefix: &str) -> String {
    let versioned = if version.is_empty() {
        source_path.to_string()
    } else {
        source_path.replacen(version, VERSION_PLACEHOLDER, 1)
    };
    let slashed = versioned.replace('\\', "/");

    if prefix.is_empty() {
        slashed
    } else {
        slashed.replacen(prefix, "", 1)
    }
}

fn query_string(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use crate::contract::istatusfetcher::IStatusFetcher;
use crate::contract::lib::{Error, Result};
use crate::metadata::base_metadata::{load_base_metadata, BaseMetadata};
use crate::metadata::options::MetadataOption;

/// Pod identity metadata, plus an optional handle for querying the k8s api.
///
/// The base metadata is populated once, at construction, and is read-only afterwards.
#[derive(Clone, Default)]
pub struct Metadata {
    base_k8s_metadata: HashMap<BaseMetadata, String>,
    status_fetcher: Option<Arc<dyn IStatusFetcher>>,
}

impl Metadata {
    /// Loads the base metadata from the environment, then applies `options` in order.
    pub async fn new(options: Vec<Box<dyn MetadataOption>>) -> Result<Self> {
        let mut metadata = Metadata::from_env()?;

        for option in options {
            option.apply(&mut metadata).await?;
        }

        Ok(metadata)
    }

    /// Loads the base metadata only, without any configuration steps.
    pub fn from_env() -> Result<Self> {
        let base_k8s_metadata = load_base_metadata()?;
        debug!("Base k8s metadata loaded from environment");

        Ok(Metadata {
            base_k8s_metadata,
            status_fetcher: None,
        })
    }

    /// Returns the value for `key`, or an empty string when it was never set.
    pub fn get_base_metadata(&self, key: BaseMetadata) -> &str {
        self.try_get_base_metadata(key).unwrap_or("")
    }

    pub fn try_get_base_metadata(&self, key: BaseMetadata) -> Option<&str> {
        self.base_k8s_metadata.get(&key).map(String::as_str)
    }

    pub fn status_fetcher(&self) -> Option<Arc<dyn IStatusFetcher>> {
        self.status_fetcher.clone()
    }

    pub fn set_status_fetcher(&mut self, fetcher: Arc<dyn IStatusFetcher>) {
        self.status_fetcher = Some(fetcher);
    }

    /// Symbolic key name to value, sorted by key.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.base_k8s_metadata
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    /// Status of the pod this process runs in, as reported by the attached fetcher.
    pub async fn pod_status(&self) -> Result<String> {
        let fetcher = self
            .status_fetcher
            .as_ref()
            .ok_or(Error::StatusFetcherNotConfigured)?;

        fetcher
            .get_pod_status(
                self.get_base_metadata(BaseMetadata::Namespace),
                self.get_base_metadata(BaseMetadata::PodName),
            )
            .await
    }
}

impl fmt::Debug for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metadata")
            .field("base_k8s_metadata", &self.base_k8s_metadata)
            .field("status_fetcher", &self.status_fetcher.is_some())
            .finish()
    }
}

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::str::FromStr;
use serde::Serialize;
use tracing::debug;
use crate::contract::lib::{Error, Result};

/// Identity attributes injected into the pod environment (usually via the downward api).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum BaseMetadata {
    #[serde(rename = "baseplateK8sNodeName")]
    NodeName,
    #[serde(rename = "baseplateK8sNodeIP")]
    NodeIp,
    #[serde(rename = "baseplateK8sPodName")]
    PodName,
    #[serde(rename = "baseplateK8sPodIP")]
    PodIp,
    #[serde(rename = "baseplateK8sNamespace")]
    Namespace,
}

impl BaseMetadata {
    /// Every key, in the order variables are validated.
    pub const ALL: [BaseMetadata; 5] = [
        BaseMetadata::NodeName,
        BaseMetadata::NodeIp,
        BaseMetadata::PodName,
        BaseMetadata::PodIp,
        BaseMetadata::Namespace,
    ];

    /// Environment variable the value is read from.
    pub fn env_var(&self) -> &'static str {
        match self {
            BaseMetadata::NodeName => "BASEPLATE_K8S_METADATA_NODE_NAME",
            BaseMetadata::NodeIp => "BASEPLATE_K8S_METADATA_NODE_IP",
            BaseMetadata::PodName => "BASEPLATE_K8S_METADATA_POD_NAME",
            BaseMetadata::PodIp => "BASEPLATE_K8S_METADATA_POD_IP",
            BaseMetadata::Namespace => "BASEPLATE_K8S_METADATA_NAMESPACE",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BaseMetadata::NodeName => "baseplateK8sNodeName",
            BaseMetadata::NodeIp => "baseplateK8sNodeIP",
            BaseMetadata::PodName => "baseplateK8sPodName",
            BaseMetadata::PodIp => "baseplateK8sPodIP",
            BaseMetadata::Namespace => "baseplateK8sNamespace",
        }
    }
}

impl fmt::Display for BaseMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseMetadata {
    type Err = String;

    /// Accepts either the symbolic name or the environment variable name.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        BaseMetadata::ALL
            .into_iter()
            .find(|key| key.as_str() == s || key.env_var() == s)
            .ok_or_else(|| format!("unknown base metadata key: {}", s))
    }
}

/// Reads the base k8s metadata from the process environment.
///
/// This metadata is the minimum needed before anything further can be fetched from the k8s api.
pub fn load_base_metadata() -> Result<HashMap<BaseMetadata, String>> {
    load_base_metadata_with(|name| env::var(name).ok())
}

/// Same policy as [`load_base_metadata`], over an arbitrary variable lookup.
///
/// Variables are checked in [`BaseMetadata::ALL`] order and the first one that is unset
/// or blank after trimming fails the whole load. Values are kept as read.
pub fn load_base_metadata_with<F>(lookup: F) -> Result<HashMap<BaseMetadata, String>>
where
    F: Fn(&str) -> Option<String>,
{
    let mut base_metadata = HashMap::with_capacity(BaseMetadata::ALL.len());
    for key in BaseMetadata::ALL {
        let var = key.env_var();
        match lookup(var) {
            Some(value) if !value.trim().is_empty() => {
                base_metadata.insert(key, value);
            }
            _ => return Err(Error::MissingBaseMetadata(var.to_string())),
        }
    }

    debug!("Loaded {} base k8s metadata values", base_metadata.len());
    Ok(base_metadata)
}

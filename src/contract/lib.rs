use thiserror::Error;

pub type Result<T, E = Error > = std::result::Result<T, E >;
#[derive(Error, Debug)]
pub enum Error {
    #[error("metadata: {0} base k8s metadata value not present")]
    MissingBaseMetadata(String),

    #[error("Kube Error: {0}")]
    KubeError(#[source] kube::Error),

    #[error("Pod {namespace}/{name} has no reported phase")]
    PodStatusUnavailable { namespace: String, name: String },

    #[error("No status fetcher configured")]
    StatusFetcherNotConfigured,

    #[error("Configuration step failed: {0}")]
    ConfigurationStepFailed(String),

    #[error("SerializationError: {0}")]
    JsonSerializationError(#[source] serde_json::Error),

    #[error("SerializationError: {0}")]
    YamlSerializationError(#[source] serde_yaml::Error),

    #[error("Unsupported output format: {0}")]
    UnsupportedOutputFormat(String),
}

pub mod contract;
pub mod metadata;
pub mod observability;
pub mod utils;

pub use contract::istatusfetcher::IStatusFetcher;
pub use contract::lib::{Error, Result};
pub use metadata::base_metadata::BaseMetadata;
pub use metadata::config::Metadata;
pub use metadata::options::{from_fn, with_k8s_client, with_kube_client, with_status_fetcher, MetadataOption};

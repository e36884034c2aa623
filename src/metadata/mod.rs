pub mod base_metadata;
pub mod config;
pub mod fixtures;
pub mod k8s_status_fetcher;
pub mod options;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use crate::contract::lib::Error;

/// Fetches status data from the k8s api.
///
/// Kept behind a trait so the kube backed implementation can be swapped for a mock in tests.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IStatusFetcher: Send + Sync {
    async fn get_pod_status(&self, namespace: &str, pod_name: &str) -> Result<String, Error>;
}

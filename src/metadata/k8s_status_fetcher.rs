use std::sync::Arc;
use async_trait::async_trait;
use kube::Client;
use tracing::debug;
use crate::contract::clients::{K8sClient, K8sClientAware};
use crate::contract::istatusfetcher::IStatusFetcher;
use crate::contract::lib::Error;

/// Reads pod phases through the k8s api.
pub struct K8sStatusFetcher {
    client: Arc<Client>,
}

impl K8sStatusFetcher {
    pub fn new(client: Arc<Client>) -> Self {
        K8sStatusFetcher { client }
    }
}

impl K8sClientAware for K8sStatusFetcher {
    fn client(&self) -> Arc<Client> {
        self.client.clone()
    }
}
impl K8sClient for K8sStatusFetcher {}

#[async_trait]
impl IStatusFetcher for K8sStatusFetcher {
    async fn get_pod_status(&self, namespace: &str, pod_name: &str) -> Result<String, Error> {
        let pod = self.get_pod(pod_name, namespace).await?;

        let phase = pod.status.and_then(|status| status.phase);
        debug!("Pod {}/{} phase: {:?}", namespace, pod_name, phase);

        phase.ok_or_else(|| Error::PodStatusUnavailable {
            namespace: namespace.to_string(),
            name: pod_name.to_string(),
        })
    }
}

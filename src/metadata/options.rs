use std::sync::Arc;
use async_trait::async_trait;
use kube::Client;
use tracing::info;
use crate::contract::istatusfetcher::IStatusFetcher;
use crate::contract::lib::{Error, Result};
use crate::metadata::config::Metadata;
use crate::metadata::k8s_status_fetcher::K8sStatusFetcher;

/// A configuration step applied by [`Metadata::new`] after the base metadata is loaded.
///
/// Steps run in the order they are passed; an error aborts the remaining steps.
#[async_trait]
pub trait MetadataOption: Send {
    async fn apply(self: Box<Self>, metadata: &mut Metadata) -> Result<()>;
}

/// Wraps a synchronous closure as a [`MetadataOption`].
pub fn from_fn<F>(f: F) -> Box<dyn MetadataOption>
where
    F: FnOnce(&mut Metadata) -> Result<()> + Send + 'static,
{
    Box::new(FnOption(f))
}

struct FnOption<F>(F);

#[async_trait]
impl<F> MetadataOption for FnOption<F>
where
    F: FnOnce(&mut Metadata) -> Result<()> + Send,
{
    async fn apply(self: Box<Self>, metadata: &mut Metadata) -> Result<()> {
        let FnOption(f) = *self;
        f(metadata)
    }
}

/// Attaches a status fetcher backed by the default kube client
/// (in-cluster config, falling back to the local kubeconfig).
pub fn with_k8s_client() -> Box<dyn MetadataOption> {
    Box::new(WithK8sClient)
}

struct WithK8sClient;

#[async_trait]
impl MetadataOption for WithK8sClient {
    async fn apply(self: Box<Self>, metadata: &mut Metadata) -> Result<()> {
        let client = Client::try_default().await.map_err(Error::KubeError)?;
        info!("Created k8s client for status fetching");
        metadata.set_status_fetcher(Arc::new(K8sStatusFetcher::new(Arc::new(client))));
        Ok(())
    }
}

/// Attaches a status fetcher backed by an already constructed kube client.
pub fn with_kube_client(client: Arc<Client>) -> Box<dyn MetadataOption> {
    from_fn(move |metadata| {
        metadata.set_status_fetcher(Arc::new(K8sStatusFetcher::new(client)));
        Ok(())
    })
}

pub fn with_status_fetcher(fetcher: Arc<dyn IStatusFetcher>) -> Box<dyn MetadataOption> {
    from_fn(move |metadata| {
        metadata.set_status_fetcher(fetcher);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use serial_test::serial;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use super::*;
    use crate::metadata::base_metadata::BaseMetadata;
    use crate::metadata::fixtures::tests::{clear_base_env, set_base_env};

    #[tokio::test]
    async fn from_fn_applies_closure() {
        let mut metadata = Metadata::default();
        let option = from_fn(|_| Err(Error::ConfigurationStepFailed("boom".to_string())));

        let err = option.apply(&mut metadata).await.unwrap_err();
        assert_eq!(err.to_string(), "Configuration step failed: boom");
    }

    #[tokio::test]
    #[serial]
    async fn kube_client_option_queries_own_pod() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/namespaces/default/pods/pod-abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "apiVersion": "v1",
                "kind": "Pod",
                "metadata": { "name": "pod-abc", "namespace": "default" },
                "status": { "phase": "Succeeded" }
            })))
            .expect(1)
            .mount(&server)
            .await;
        let config = kube::Config::new(server.uri().parse().unwrap());
        let client = Arc::new(Client::try_from(config).unwrap());

        set_base_env();
        let metadata = Metadata::new(vec![with_kube_client(client)]).await.unwrap();
        clear_base_env();

        assert_eq!(metadata.get_base_metadata(BaseMetadata::PodName), "pod-abc");
        assert_eq!(metadata.pod_status().await.unwrap(), "Succeeded");
    }
}

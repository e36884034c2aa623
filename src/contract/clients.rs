use crate::contract::lib::Error;
use k8s_openapi::api::core::v1::Pod;
use kube::{Api, Client};
use std::future::Future;
use std::sync::Arc;

pub trait K8sClientAware {
    fn client(&self) -> Arc<Client>;
}

pub trait K8sClient: K8sClientAware + Send + Sync {
    fn get_pod(&self, name: &str, namespace: &str) -> impl Future<Output = Result<Pod, Error>> + Send {
        let client = self.client().as_ref().clone();
        let name = name.to_string();
        let namespace = namespace.to_string();

        async move {
            let pod = Api::<Pod>::namespaced(client, &namespace)
                .get(&name)
                .await
                .map_err(Error::KubeError)?;

            Ok(pod)
        }
    }
}

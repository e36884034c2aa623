#[cfg(test)]
pub mod tests {
    use std::collections::HashMap;
    use std::env;
    use crate::metadata::base_metadata::BaseMetadata;

    pub const NODE_NAME: &str = "node-1";
    pub const NODE_IP: &str = "10.0.0.5";
    pub const POD_NAME: &str = "pod-abc";
    pub const POD_IP: &str = "10.0.0.6";
    pub const NAMESPACE: &str = "default";

    /// Variable name to value, for a fully populated environment.
    pub fn valid_values() -> HashMap<String, String> {
        [
            (BaseMetadata::NodeName, NODE_NAME),
            (BaseMetadata::NodeIp, NODE_IP),
            (BaseMetadata::PodName, POD_NAME),
            (BaseMetadata::PodIp, POD_IP),
            (BaseMetadata::Namespace, NAMESPACE),
        ]
        .into_iter()
        .map(|(key, value)| (key.env_var().to_string(), value.to_string()))
        .collect()
    }

    pub fn lookup_from(values: &HashMap<String, String>) -> impl Fn(&str) -> Option<String> + '_ {
        move |name| values.get(name).cloned()
    }

    /// Callers must be `#[serial]`, the process environment is shared between tests.
    pub fn set_base_env() {
        for (name, value) in valid_values() {
            env::set_var(name, value);
        }
    }

    pub fn clear_base_env() {
        for key in BaseMetadata::ALL {
            env::remove_var(key.env_var());
        }
    }
}

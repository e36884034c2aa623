use std::env;
use crate::contract::lib::Result;
use crate::utils::output::OutputFormat;

/// Switches for the `metadata` binary, read from the environment.
pub struct Config {}

impl Config {
    pub fn fetch_pod_status() -> bool {
        env::var("METADATA_FETCH_POD_STATUS")
            .map(|x| matches!(x.to_ascii_lowercase().as_str(), "1" | "true"))
            .unwrap_or(false)
    }
    pub fn output_format() -> Result<OutputFormat> {
        env::var("METADATA_OUTPUT_FORMAT")
            .map(|v| v.parse())
            .unwrap_or(Ok(OutputFormat::Json))
    }
}

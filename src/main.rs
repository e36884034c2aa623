use std::process::ExitCode;
use tracing::{error, info};

use pod_metadata::metadata::config::Metadata;
use pod_metadata::metadata::options::{with_k8s_client, MetadataOption};
use pod_metadata::observability::telemetry;
use pod_metadata::utils::config::Config;
use pod_metadata::utils::output::render;
use pod_metadata::Result;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    telemetry::init();

    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded environment from {}", path.display());
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to load pod metadata: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let format = Config::output_format()?;

    let mut options: Vec<Box<dyn MetadataOption>> = vec![];
    if Config::fetch_pod_status() {
        options.push(with_k8s_client());
    }

    let metadata = Metadata::new(options).await?;
    println!("{}", render(&metadata.snapshot(), format)?);

    if metadata.status_fetcher().is_some() {
        let status = metadata.pod_status().await?;
        info!("Pod status: {}", status);
        println!("{}", status);
    }

    Ok(())
}

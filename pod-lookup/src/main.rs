//! Fetch one pod with a raw REST request, the typed Api and the dynamic Api,
//! printing one line per attempt.
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pod_lookup::{
    build_client, load_config, run, ConfigSource, LookupTarget, DEFAULT_NAMESPACE, DEFAULT_POD_NAME,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the kubeconfig file (inferred from the environment when unset)
    #[arg(long, env = "POD_LOOKUP_KUBECONFIG")]
    kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use
    #[arg(long)]
    context: Option<String>,

    /// Api server url, overriding the one from the kubeconfig
    #[arg(long)]
    server: Option<String>,

    /// Namespace of the pod
    #[arg(short, long, default_value = DEFAULT_NAMESPACE)]
    namespace: String,

    /// Name of the pod
    #[arg(long, default_value = DEFAULT_POD_NAME)]
    name: String,
}

impl Cli {
    fn source(&self) -> ConfigSource {
        ConfigSource {
            kubeconfig: self.kubeconfig.clone(),
            context: self.context.clone(),
            server: self.server.clone(),
        }
    }

    fn target(&self) -> LookupTarget {
        LookupTarget::new(&self.namespace, &self.name)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let cli = Cli::parse();

    // Config and client errors end the process here, before `run` writes anything to stdout.
    let config = load_config(&cli.source())
        .await
        .context("cannot load cluster configuration")?;
    let client = build_client(config).context("cannot create client")?;

    run(client, &cli.target(), &mut std::io::stdout().lock()).await?;
    Ok(())
}

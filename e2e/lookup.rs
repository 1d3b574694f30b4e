//! Run every lookup path against a live cluster and check they agree.
//!
//! Expects a pod `$POD_NAME` (default `dnsutils`) in `$NAMESPACE` (default `default`).
use anyhow::{bail, ensure};
use pod_lookup::{build_client, load_config, ConfigSource, LookupPath, LookupTarget};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let mut target = LookupTarget::default();
    if let Ok(ns) = std::env::var("NAMESPACE") {
        target.namespace = ns;
    }
    if let Ok(name) = std::env::var("POD_NAME") {
        target.name = name;
    }

    let client = build_client(load_config(&ConfigSource::default()).await?)?;

    // Second round checks that repeated lookups give the same answer
    for round in 1..=2 {
        for path in LookupPath::ALL {
            match path.fetch_name(client.clone(), &target).await {
                Ok(name) => {
                    info!("round {round}: {path} lookup found {name}");
                    ensure!(name == target.name, "{path} lookup returned {name}, expected {}", target.name);
                }
                Err(err) => bail!("round {round}: {path} lookup of {target} failed: {err}"),
            }
        }
    }

    let missing = LookupTarget::new(&target.namespace, format!("{}-missing", target.name));
    for path in LookupPath::ALL {
        match path.fetch_name(client.clone(), &missing).await {
            Err(kube::Error::Api(ae)) if ae.code == 404 => info!("{path} lookup of {missing}: not found"),
            other => bail!("{path} lookup of {missing}: expected 404, got {other:?}"),
        }
    }
    Ok(())
}

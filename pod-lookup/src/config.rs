//! Building a [`Config`] and [`Client`] from command line inputs.
//!
//! An explicit kubeconfig path wins. Without one the config is inferred the
//! usual way (`$KUBECONFIG`, `~/.kube/config`, then the in-cluster service
//! account). A server override replaces whatever cluster url was loaded.
use std::path::PathBuf;

use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Client, Config,
};

use crate::{Error, Result};

/// Where to load cluster connection settings from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSource {
    /// Path to a kubeconfig file
    pub kubeconfig: Option<PathBuf>,
    /// Kubeconfig context to use instead of `current-context`
    pub context: Option<String>,
    /// Cluster url that overrides the one from the loaded config
    pub server: Option<String>,
}

impl ConfigSource {
    /// Load from the kubeconfig at `path`.
    pub fn from_kubeconfig(path: impl Into<PathBuf>) -> Self {
        Self {
            kubeconfig: Some(path.into()),
            ..Self::default()
        }
    }

    /// Select a kubeconfig context.
    #[must_use]
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Override the cluster url.
    #[must_use]
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }
}

/// Load a [`Config`] from `source`.
pub async fn load_config(source: &ConfigSource) -> Result<Config> {
    let options = KubeConfigOptions {
        context: source.context.clone(),
        ..KubeConfigOptions::default()
    };

    let mut config = match &source.kubeconfig {
        Some(path) => {
            tracing::debug!("loading kubeconfig from {}", path.display());
            let kubeconfig = Kubeconfig::read_from(path).map_err(|source| Error::ReadKubeconfig {
                path: path.clone(),
                source,
            })?;
            Config::from_custom_kubeconfig(kubeconfig, &options)
                .await
                .map_err(Error::LoadKubeconfig)?
        }
        None if source.context.is_some() => {
            Config::from_kubeconfig(&options).await.map_err(Error::LoadKubeconfig)?
        }
        None => {
            tracing::warn!("no kubeconfig given, inferring config from the environment");
            Config::infer().await.map_err(Error::InferConfig)?
        }
    };

    if let Some(server) = &source.server {
        config.cluster_url = server.parse::<http::Uri>().map_err(|source| Error::InvalidServer {
            server: server.clone(),
            source,
        })?;
    }
    tracing::debug!("using cluster {}", config.cluster_url);
    Ok(config)
}

/// Build a [`Client`] for `config`.
pub fn build_client(config: Config) -> Result<Client> {
    Client::try_from(config).map_err(Error::BuildClient)
}

//! Error handling in [`pod_lookup`][crate]
use std::path::PathBuf;

use kube::config::{InferConfigError, KubeconfigError};
use thiserror::Error;

/// Errors raised while preparing a client.
///
/// Every variant is fatal: none of the lookup paths can run without a
/// working [`Client`](kube::Client). Errors from the lookups themselves stay
/// [`kube::Error`] and are only reported.
#[derive(Error, Debug)]
pub enum Error {
    /// The kubeconfig file could not be read or parsed
    #[error("failed to read kubeconfig {}: {source}", path.display())]
    ReadKubeconfig {
        /// Path that was read
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: KubeconfigError,
    },

    /// The kubeconfig was read but does not describe a usable context
    #[error("failed to load kubeconfig: {0}")]
    LoadKubeconfig(#[source] KubeconfigError),

    /// Neither a kubeconfig nor an in-cluster environment was found
    #[error("failed to infer config: {0}")]
    InferConfig(#[source] InferConfigError),

    /// The `--server` override is not a valid URL
    #[error("invalid server url {server:?}: {source}")]
    InvalidServer {
        /// Value that failed to parse
        server: String,
        /// Underlying failure
        #[source]
        source: http::uri::InvalidUri,
    },

    /// The client could not be constructed from the config
    #[error("failed to build client: {0}")]
    BuildClient(#[source] kube::Error),
}

/// Convenient alias for `Result<T, Error>`
pub type Result<T, E = Error> = std::result::Result<T, E>;

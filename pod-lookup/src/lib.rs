//! Fetch a single pod from a Kubernetes cluster in three different styles.
//!
//! All three paths use the same [`LookupTarget`] and the same [`Client`](kube::Client):
//!
//! - [`LookupPath::Rest`]: a GET assembled by hand from `/api`, `v1`, `pods`
//!   and decoded into [`Pod`](k8s_openapi::api::core::v1::Pod)
//! - [`LookupPath::Typed`]: [`Api<Pod>`](kube::Api) from `k8s-openapi` types
//! - [`LookupPath::Dynamic`]: [`Api<DynamicObject>`](kube::api::DynamicObject)
//!   addressed by a [`GroupVersionResource`](kube::core::GroupVersionResource)
//!
//! # Example
//!
//! ```rust,no_run
//! use pod_lookup::{build_client, load_config, ConfigSource, LookupPath, LookupTarget};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config(&ConfigSource::from_kubeconfig("/tmp/kubeconfig")).await?;
//!     let client = build_client(config)?;
//!     let target = LookupTarget::default();
//!     for path in LookupPath::ALL {
//!         match path.fetch_name(client.clone(), &target).await {
//!             Ok(name) => println!("{name}"),
//!             Err(err) => println!("{err}"),
//!         }
//!     }
//!     // or, the same loop writing to any `io::Write`:
//!     pod_lookup::run(client, &target, &mut std::io::stdout()).await?;
//!     Ok(())
//! }
//! ```
pub mod config;
pub mod error;
pub mod lookup;
pub mod report;
pub mod target;

#[cfg(test)] mod test_utils;

#[doc(inline)] pub use config::{build_client, load_config, ConfigSource};
#[doc(inline)] pub use error::{Error, Result};
#[doc(inline)] pub use lookup::{dynamic_lookup, rest_lookup, typed_lookup, LookupPath, RestClient};
#[doc(inline)] pub use report::{report, run};
#[doc(inline)] pub use target::{LookupTarget, DEFAULT_NAMESPACE, DEFAULT_POD_NAME};

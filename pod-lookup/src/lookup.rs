//! The three ways of fetching the target pod.
//!
//! - [`rest_lookup`] builds the request by hand from an explicit api path,
//!   group version and resource, like a bare REST client would.
//! - [`typed_lookup`] goes through [`Api<Pod>`], which already knows where pods live.
//! - [`dynamic_lookup`] goes through [`Api<DynamicObject>`], addressed only by a
//!   [`GroupVersionResource`].
//!
//! Each function issues exactly one GET and hands back whatever the client
//! returned. Nothing is retried.
use std::fmt;

use http::{header::ACCEPT, HeaderValue};
use k8s_openapi::api::core::v1::Pod;
use kube::{
    api::{Api, ApiResource, DynamicObject, GetParams},
    core::{GroupVersionKind, GroupVersionResource, Request},
    Client,
};
use serde::de::DeserializeOwned;

use crate::LookupTarget;

/// Api path of the legacy core group.
pub const CORE_API_PATH: &str = "/api";
/// Group version of the core group.
pub const CORE_GROUP_VERSION: &str = "v1";
/// Plural resource name of pods.
pub const PODS_RESOURCE: &str = "pods";

/// A minimal client that only knows an api path and a group version.
///
/// Urls are put together from their parts for every call and responses are
/// requested and decoded as JSON.
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    api_path: String,
    group_version: String,
}

impl RestClient {
    /// Create a client rooted at `{api_path}/{group_version}`.
    pub fn new(client: Client, api_path: impl Into<String>, group_version: impl Into<String>) -> Self {
        Self {
            client,
            api_path: api_path.into(),
            group_version: group_version.into(),
        }
    }

    /// Create a client for the core `v1` group under `/api`.
    pub fn core_v1(client: Client) -> Self {
        Self::new(client, CORE_API_PATH, CORE_GROUP_VERSION)
    }

    /// Url path of a namespaced `resource` collection.
    pub fn collection_path(&self, namespace: &str, resource: &str) -> String {
        format!(
            "{}/{}/namespaces/{}/{}",
            self.api_path.trim_end_matches('/'),
            self.group_version,
            namespace,
            resource
        )
    }

    /// GET `name` from `resource` in `namespace` and decode it as `K`.
    pub async fn get<K>(&self, namespace: &str, resource: &str, name: &str) -> kube::Result<K>
    where
        K: DeserializeOwned,
    {
        let request = Request::new(self.collection_path(namespace, resource));
        let mut req = request
            .get(name, &GetParams::default())
            .map_err(kube::Error::BuildRequest)?;
        req.headers_mut()
            .insert(ACCEPT, HeaderValue::from_static("application/json"));
        tracing::debug!("GET {}", req.uri());
        self.client.request::<K>(req).await
    }
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("client", &"...")
            .field("api_path", &self.api_path)
            .field("group_version", &self.group_version)
            .finish()
    }
}

/// Fetch the target pod with a hand-built REST request.
pub async fn rest_lookup(client: Client, target: &LookupTarget) -> kube::Result<Pod> {
    RestClient::core_v1(client)
        .get(&target.namespace, PODS_RESOURCE, &target.name)
        .await
}

/// Fetch the target pod through the typed [`Api<Pod>`].
pub async fn typed_lookup(client: Client, target: &LookupTarget) -> kube::Result<Pod> {
    let pods: Api<Pod> = Api::namespaced(client, &target.namespace);
    pods.get(&target.name).await
}

/// Group, version and resource of core pods.
pub fn pods_gvr() -> GroupVersionResource {
    GroupVersionResource::gvr("", CORE_GROUP_VERSION, PODS_RESOURCE)
}

/// Describe a resource known only by its [`GroupVersionResource`].
///
/// The kind stays empty since nothing but the url parts is needed for a GET.
pub fn api_resource_for(gvr: &GroupVersionResource) -> ApiResource {
    let gvk = GroupVersionKind::gvk(&gvr.group, &gvr.version, "");
    ApiResource::from_gvk_with_plural(&gvk, &gvr.resource)
}

/// Fetch the target pod as an untyped [`DynamicObject`].
pub async fn dynamic_lookup(client: Client, target: &LookupTarget) -> kube::Result<DynamicObject> {
    let ar = api_resource_for(&pods_gvr());
    let api: Api<DynamicObject> = Api::namespaced_with(client, &target.namespace, &ar);
    api.get(&target.name).await
}

/// One of the three access styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupPath {
    /// [`rest_lookup`]
    Rest,
    /// [`typed_lookup`]
    Typed,
    /// [`dynamic_lookup`]
    Dynamic,
}

impl LookupPath {
    /// All paths, in the order they are run.
    pub const ALL: [LookupPath; 3] = [LookupPath::Rest, LookupPath::Typed, LookupPath::Dynamic];

    /// Short name used in logs.
    pub fn label(self) -> &'static str {
        match self {
            LookupPath::Rest => "rest",
            LookupPath::Typed => "typed",
            LookupPath::Dynamic => "dynamic",
        }
    }

    /// Fetch `target` this way and return its name.
    ///
    /// An object without a name yields an empty string.
    pub async fn fetch_name(self, client: Client, target: &LookupTarget) -> kube::Result<String> {
        let name = match self {
            LookupPath::Rest => rest_lookup(client, target).await?.metadata.name,
            LookupPath::Typed => typed_lookup(client, target).await?.metadata.name,
            LookupPath::Dynamic => dynamic_lookup(client, target).await?.metadata.name,
        };
        Ok(name.unwrap_or_default())
    }
}

impl fmt::Display for LookupPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

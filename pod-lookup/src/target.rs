//! The pod every lookup path is pointed at.

/// Namespace used when none is given on the command line.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Pod name used when none is given on the command line.
pub const DEFAULT_POD_NAME: &str = "dnsutils";

/// A namespaced object name shared by all lookup paths.
///
/// The three paths take the same `LookupTarget` value rather than reading the
/// defaults themselves, so they cannot disagree on what they fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupTarget {
    /// Namespace the pod lives in
    pub namespace: String,
    /// Name of the pod
    pub name: String,
}

impl LookupTarget {
    /// Point at `name` inside `namespace`.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl Default for LookupTarget {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE, DEFAULT_POD_NAME)
    }
}

impl std::fmt::Display for LookupTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

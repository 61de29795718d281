use serde::Serialize;

/// Reserved prefix marking a shared-library dependency (`so:libc.musl-x86_64.so.1`)
pub const SONAME_PREFIX: &str = "so:";

/// NewType wrapper for a resolved package name
///
/// Holds a dependency identity with its version constraint stripped.
/// Construction never fails: an empty or soname-style name is a valid
/// resolution result that callers filter with [`PackageName::is_graph_node`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True for shared-library references (`so:` prefix)
    pub fn is_soname(&self) -> bool {
        self.0.starts_with(SONAME_PREFIX)
    }

    /// True when this name may become a node in the dependency graph
    pub fn is_graph_node(&self) -> bool {
        !self.is_empty() && !self.is_soname()
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One package entry of an APKINDEX
///
/// Immutable once built. Optional text fields default to empty strings and
/// sizes default to 0, mirroring what the index leaves out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRecord {
    name: String,
    version: String,
    architecture: String,
    size: u64,
    installed_size: u64,
    dependencies: Vec<String>,
    provides: Vec<String>,
    origin: String,
    maintainer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    commit: Option<String>,
    description: String,
    url: String,
    license: String,
}

impl PackageRecord {
    /// Creates a record with the two identity fields.
    ///
    /// Returns `None` when either is empty; such entries never make it
    /// into a package collection.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Option<Self> {
        let name = name.into();
        let version = version.into();
        if name.is_empty() || version.is_empty() {
            return None;
        }

        Some(Self {
            name,
            version,
            architecture: String::new(),
            size: 0,
            installed_size: 0,
            dependencies: Vec::new(),
            provides: Vec::new(),
            origin: String::new(),
            maintainer: String::new(),
            timestamp: None,
            commit: None,
            description: String::new(),
            url: String::new(),
            license: String::new(),
        })
    }

    pub fn with_architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = architecture.into();
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    pub fn with_installed_size(mut self, installed_size: u64) -> Self {
        self.installed_size = installed_size;
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_provides<I, S>(mut self, provides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.provides = provides.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_maintainer(mut self, maintainer: impl Into<String>) -> Self {
        self.maintainer = maintainer.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = Some(commit.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    /// Download size in bytes
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Installed size in bytes
    pub fn installed_size(&self) -> u64 {
        self.installed_size
    }

    /// Raw dependency specifiers, soname references included
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn provides(&self) -> &[String] {
        &self.provides
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn maintainer(&self) -> &str {
        &self.maintainer
    }

    /// Build time in unix seconds
    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    pub fn commit(&self) -> Option<&str> {
        self.commit.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn license(&self) -> &str {
        &self.license
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_record_new_valid() {
        let record = PackageRecord::new("busybox", "1.36.1-r15").unwrap();
        assert_eq!(record.name(), "busybox");
        assert_eq!(record.version(), "1.36.1-r15");
        assert_eq!(record.installed_size(), 0);
        assert!(record.dependencies().is_empty());
        assert!(record.timestamp().is_none());
    }

    #[test]
    fn test_package_record_requires_identity() {
        assert!(PackageRecord::new("", "1.0").is_none());
        assert!(PackageRecord::new("busybox", "").is_none());
    }

    #[test]
    fn test_package_record_builders() {
        let record = PackageRecord::new("curl", "8.5.0-r0")
            .unwrap()
            .with_installed_size(1024)
            .with_dependencies(["ca-certificates", "so:libc.musl-x86_64.so.1"])
            .with_commit("abc123")
            .with_timestamp(1_700_000_000);

        assert_eq!(record.installed_size(), 1024);
        assert_eq!(record.dependencies().len(), 2);
        assert_eq!(record.commit(), Some("abc123"));
        assert_eq!(record.timestamp(), Some(1_700_000_000));
    }

    #[test]
    fn test_package_record_serializes_camel_case() {
        let record = PackageRecord::new("curl", "8.5.0-r0")
            .unwrap()
            .with_installed_size(42);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["installedSize"], 42);
        assert!(json.get("timestamp").is_none());
    }

    #[test]
    fn test_package_name_soname() {
        assert!(PackageName::new("so:libc.musl-x86_64.so.1").is_soname());
        assert!(!PackageName::new("musl").is_soname());
    }

    #[test]
    fn test_package_name_is_graph_node() {
        assert!(PackageName::new("musl").is_graph_node());
        assert!(!PackageName::new("").is_graph_node());
        assert!(!PackageName::new("so:libz.so.1").is_graph_node());
    }

    #[test]
    fn test_package_name_display() {
        let name = PackageName::new("openssl");
        assert_eq!(format!("{}", name), "openssl");
    }
}

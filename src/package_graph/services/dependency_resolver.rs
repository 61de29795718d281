use crate::package_graph::domain::PackageName;

/// Characters that start a version constraint in an APK dependency specifier
const CONSTRAINT_CHARS: [char; 5] = ['<', '>', '=', '~', '!'];

/// DependencyResolver service turning raw specifiers into graph identities
///
/// Every place that maps a `D:`/`p:` token to a node goes through
/// [`DependencyResolver::resolve_name`], so the graph builder and the
/// subgraph extractor always agree on names.
pub struct DependencyResolver;

impl DependencyResolver {
    /// Strips the version constraint from a dependency specifier.
    ///
    /// Returns the leading run of characters before the first constraint
    /// operator (`<`, `>`, `=`, `~`, `!`) or whitespace. A specifier that
    /// starts with an operator, such as the conflict marker `!foo`,
    /// resolves to an empty name.
    ///
    /// # Examples
    /// ```
    /// use apk_graph::package_graph::services::DependencyResolver;
    ///
    /// assert_eq!(DependencyResolver::resolve_name("openssl>=3.0.1").as_str(), "openssl");
    /// assert_eq!(DependencyResolver::resolve_name("musl").as_str(), "musl");
    /// ```
    pub fn resolve_name(specifier: &str) -> PackageName {
        let end = specifier
            .find(|c: char| CONSTRAINT_CHARS.contains(&c) || c.is_whitespace())
            .unwrap_or(specifier.len());
        PackageName::new(&specifier[..end])
    }

    /// Resolves a specifier and keeps it only if it names a package.
    ///
    /// Empty names and shared-library references yield `None`.
    pub fn resolve_graph_node(specifier: &str) -> Option<PackageName> {
        let name = Self::resolve_name(specifier);
        name.is_graph_node().then_some(name)
    }
}

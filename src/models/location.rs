//! Hash-based location for the router.

/// Normalized URL fragment, always starting with `/`.
///
/// URL format: `#/calc-vacation` (query strings and a trailing slash are
/// ignored when matching).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    path: String,
}

impl Location {
    /// Root location (`#/` or empty hash).
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
        }
    }

    /// Parse a URL hash or bare path into a location.
    ///
    /// A fragment made only of launch parameters (`#tgWebAppData=...`)
    /// carries no path and parses as root.
    pub fn from_hash(hash: &str) -> Self {
        let raw = hash.trim_start_matches('#');
        let raw = raw.split(['?', '&']).next().unwrap_or_default();
        let raw = raw.trim_start_matches('/');
        if raw.split('/').next().is_some_and(|segment| segment.contains('=')) {
            return Self::root();
        }
        let raw = raw.strip_suffix('/').unwrap_or(raw);

        Self {
            path: format!("/{}", raw),
        }
    }

    /// Get current location from browser URL.
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path == "/"
    }

    /// Convert location to URL hash.
    pub fn to_hash(&self) -> String {
        format!("#{}", self.path)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_parsing() {
        assert_eq!(Location::from_hash(""), Location::root());
        assert_eq!(Location::from_hash("#"), Location::root());
        assert_eq!(Location::from_hash("#/"), Location::root());
        assert_eq!(Location::from_hash("#/calc-vacation").path(), "/calc-vacation");
        assert_eq!(Location::from_hash("/calc-vacation").path(), "/calc-vacation");
        assert_eq!(Location::from_hash("calc-vacation").path(), "/calc-vacation");
    }

    #[test]
    fn test_location_ignores_query_and_trailing_slash() {
        assert_eq!(
            Location::from_hash("#/calc-sick-leave?tab=1").path(),
            "/calc-sick-leave"
        );
        assert_eq!(Location::from_hash("#/calc-sick-leave/").path(), "/calc-sick-leave");
        assert_eq!(Location::from_hash("#/?x=1"), Location::root());
    }

    #[test]
    fn test_launch_parameters_parse_as_root() {
        let launch = "#tgWebAppData=query_id%3DAAH%26user%3D1&tgWebAppVersion=7.0&tgWebAppPlatform=ios";
        assert!(Location::from_hash(launch).is_root());
        assert!(Location::from_hash("#tgWebAppVersion=7.0").is_root());
        assert_eq!(
            Location::from_hash("#/calc-vacation&tgWebAppVersion=7.0").path(),
            "/calc-vacation"
        );
        assert_eq!(
            Location::from_hash("#/calc-vacation?tgWebAppData=a%3Db").path(),
            "/calc-vacation"
        );
    }

    #[test]
    fn test_location_to_hash() {
        assert_eq!(Location::root().to_hash(), "#/");
        assert_eq!(Location::from_hash("/calc-vacation").to_hash(), "#/calc-vacation");
        assert!(Location::from_hash("#/").is_root());
    }
}

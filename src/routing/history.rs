//! Deployment base handling.
//!
//! The console can be served under a prefix (e.g. `/console/`). Incoming URL
//! paths are stripped of that prefix before lookup, and redirect targets get
//! it prepended again on the way out.

/// HTML5-history style location mapping under a fixed base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebHistory {
    /// Normalized base: empty for root, otherwise `/prefix` with no trailing slash.
    base: String,
}

impl WebHistory {
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim_end_matches('/');
        let base = if trimmed.is_empty() || trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        };
        Self { base }
    }

    pub fn base(&self) -> &str {
        if self.base.is_empty() {
            "/"
        } else {
            &self.base
        }
    }

    /// In-app path for `url_path`, or `None` if it lies outside the base.
    pub fn location<'a>(&self, url_path: &'a str) -> Option<&'a str> {
        if self.base.is_empty() {
            return Some(url_path);
        }
        match url_path.strip_prefix(self.base.as_str())? {
            "" => Some("/"),
            rest if rest.starts_with('/') => Some(rest),
            // `/consoleX` shares the prefix but not the segment.
            _ => None,
        }
    }

    /// Public URL path for the in-app `path`.
    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

impl Default for WebHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_base_is_identity() {
        let history = WebHistory::new("/");
        assert_eq!(history.base(), "/");
        assert_eq!(history.location("/space/add"), Some("/space/add"));
        assert_eq!(history.href("/space/list"), "/space/list");
    }

    #[test]
    fn test_prefixed_base() {
        let history = WebHistory::new("/console/");
        assert_eq!(history.base(), "/console");
        assert_eq!(history.location("/console"), Some("/"));
        assert_eq!(history.location("/console/"), Some("/"));
        assert_eq!(history.location("/console/space/list"), Some("/space/list"));
        assert_eq!(history.location("/consoles/space/list"), None);
        assert_eq!(history.location("/space/list"), None);
        assert_eq!(history.href("/space/list"), "/console/space/list");
    }

    #[test]
    fn test_base_without_leading_slash() {
        let history = WebHistory::new("console");
        assert_eq!(history.base(), "/console");
        assert_eq!(WebHistory::new(""), WebHistory::default());
    }
}

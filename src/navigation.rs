// Decides when a location change means a different page view.

/// Remembers the path the current session was mounted for.
#[derive(Debug, Default)]
pub struct PathTracker {
    mounted: Option<String>,
}

impl PathTracker {
    /// Record `path` as mounted.
    pub fn mounted(&mut self, path: &str) {
        self.mounted = Some(path.to_string());
    }

    /// True when `path` differs from the mounted one. Query strings and
    /// fragments are not part of the path and never trigger a rebuild.
    pub fn changed(&self, path: &str) -> bool {
        self.mounted.as_deref() != Some(path)
    }

    pub fn current(&self) -> Option<&str> {
        self.mounted.as_deref()
    }
}

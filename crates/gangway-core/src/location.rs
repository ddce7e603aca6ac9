//! The page location as captured from the host surface.
//!
//! The only thing the startup path reads from the location is the raw query
//! string. The performance-trace flag is detected with a substring check;
//! the query string is never fully parsed on the startup path, so a
//! differently-valued `_ui_performance_trace` parameter can false-positive.
//! Enable tracing by loading the page as `https://host/?_ui_performance_trace=1`
//! or `https://host/?key=value&_ui_performance_trace=1`.

/// Query-string fragment that switches the orchestrator into trace mode.
const TRACE_FLAG: &str = "_ui_performance_trace=1";

/// Raw location data for the page being booted.
#[derive(Debug, Clone, Default)]
pub struct Location {
    search: String,
}

impl Location {
    /// Capture a location from a raw query string (with or without the
    /// leading `?`).
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Quick check, re-evaluated on every call; no state is kept.
    pub fn performance_trace_enabled(&self) -> bool {
        self.search.contains(TRACE_FLAG)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

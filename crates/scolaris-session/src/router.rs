//! Client-side navigation over the History API.
//!
//! On `wasm32` this drives `history.pushState`/`replaceState`; elsewhere
//! an in-memory history stack stands in so guard and redirect logic can
//! be exercised in tests.

use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Mutex;

/// History-backed router.
#[derive(Debug)]
pub struct Router {
    #[cfg(not(target_arch = "wasm32"))]
    state: Mutex<RouterState>,
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
struct RouterState {
    history: Vec<String>,
    index: usize,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a router positioned at `/`.
    #[must_use]
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self {}
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                state: Mutex::new(RouterState {
                    history: vec!["/".to_string()],
                    index: 0,
                }),
            }
        }
    }

    /// Current pathname.
    #[must_use]
    pub fn pathname(&self) -> String {
        #[cfg(target_arch = "wasm32")]
        {
            self.pathname_wasm()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.state
                .lock()
                .map(|s| s.history[s.index].clone())
                .unwrap_or_else(|_| "/".to_string())
        }
    }

    /// Navigate forward to a path, pushing a history entry.
    pub fn push(&self, path: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            self.push_wasm(path);
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(mut state) = self.state.lock() {
                let keep = state.index + 1;
                state.history.truncate(keep);
                state.history.push(path.to_string());
                state.index = keep;
            }
        }
    }

    /// Replace the current entry without growing history. Used for
    /// guard redirects so Back does not land on the guarded page again.
    pub fn replace(&self, path: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            self.replace_wasm(path);
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(mut state) = self.state.lock() {
                let index = state.index;
                state.history[index] = path.to_string();
            }
        }
    }

    /// Step back in history, if possible.
    pub fn back(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            self.back_wasm();
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(mut state) = self.state.lock() {
                state.index = state.index.saturating_sub(1);
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn pathname_wasm(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    #[cfg(target_arch = "wasm32")]
    fn push_wasm(&self, path: &str) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn replace_wasm(&self, path: &str) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn back_wasm(&self) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }
}

/// One segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Literal segment, matched exactly.
    Static(String),
    /// `:name` segment, captures the path segment under `name`.
    Param(String),
    /// `*` trailing segment, matches the rest of the path.
    Wildcard,
}

/// Matches concrete paths against a `/admin/students/:id` style pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatcher {
    segments: Vec<Segment>,
}

impl RouteMatcher {
    /// Compile a pattern.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if s == "*" {
                    Segment::Wildcard
                } else if let Some(name) = s.strip_prefix(':') {
                    Segment::Param(name.to_string())
                } else {
                    Segment::Static(s.to_string())
                }
            })
            .collect();
        Self { segments }
    }

    /// Match a concrete path, returning captured params on success.
    #[must_use]
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut params = HashMap::new();
        let mut index = 0;
        for segment in &self.segments {
            match segment {
                Segment::Wildcard => return Some(params),
                Segment::Static(expected) => {
                    if parts.get(index) != Some(&expected.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = parts.get(index)?;
                    params.insert(name.clone(), (*value).to_string());
                }
            }
            index += 1;
        }
        (index == parts.len()).then_some(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_root() {
        assert_eq!(Router::new().pathname(), "/");
    }

    #[test]
    fn test_push_navigates() {
        let router = Router::new();
        router.push("/login");
        router.push("/admin");
        assert_eq!(router.pathname(), "/admin");
    }

    #[test]
    fn test_back_returns_to_previous() {
        let router = Router::new();
        router.push("/login");
        router.push("/admin");
        router.back();
        assert_eq!(router.pathname(), "/login");
        router.back();
        assert_eq!(router.pathname(), "/");
        router.back();
        assert_eq!(router.pathname(), "/");
    }

    #[test]
    fn test_replace_does_not_grow_history() {
        let router = Router::new();
        router.push("/teacher");
        router.replace("/login");
        assert_eq!(router.pathname(), "/login");
        router.back();
        assert_eq!(router.pathname(), "/");
    }

    #[test]
    fn test_push_truncates_forward_history() {
        let router = Router::new();
        router.push("/a");
        router.push("/b");
        router.back();
        router.push("/c");
        assert_eq!(router.pathname(), "/c");
        router.back();
        assert_eq!(router.pathname(), "/a");
    }

    // ===== RouteMatcher Tests =====

    #[test]
    fn test_static_pattern() {
        let matcher = RouteMatcher::new("/admin/students");
        assert!(matcher.matches("/admin/students").is_some());
        assert!(matcher.matches("/admin/teachers").is_none());
        assert!(matcher.matches("/admin").is_none());
        assert!(matcher.matches("/admin/students/s-1").is_none());
    }

    #[test]
    fn test_param_capture() {
        let matcher = RouteMatcher::new("/admin/students/:id");
        let params = matcher.matches("/admin/students/s-42").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("s-42"));
        assert!(matcher.matches("/admin/students").is_none());
    }

    #[test]
    fn test_wildcard_tail() {
        let matcher = RouteMatcher::new("/super-admin/*");
        assert!(matcher.matches("/super-admin/schools/sch-1").is_some());
        assert!(matcher.matches("/parent").is_none());
    }

    #[test]
    fn test_trailing_slash_insensitive() {
        let matcher = RouteMatcher::new("/login");
        assert!(matcher.matches("/login/").is_some());
    }
}

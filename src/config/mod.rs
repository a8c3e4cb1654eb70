use crate::storage::DEFAULT_NAMESPACE;

/// Runtime settings, overridable from a `window.ENV` object set by the host page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalConfig {
    /// Prefix for every localStorage key.
    pub storage_namespace: String,
    pub toast_visible_ms: u32,
    pub toast_fade_ms: u32,
    /// Rows per dashboard section.
    pub summary_limit: usize,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            storage_namespace: DEFAULT_NAMESPACE.to_string(),
            toast_visible_ms: 2500,
            toast_fade_ms: 300,
            summary_limit: 5,
        }
    }
}

impl PortalConfig {
    pub fn from_window() -> Self {
        let Some(env) = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object())
        else {
            return Self::default();
        };

        Self::default().with_overrides(|name| {
            js_sys::Reflect::get(&env, &name.into())
                .ok()
                .and_then(|v| v.as_string().or_else(|| v.as_f64().map(|n| n.to_string())))
        })
    }

    /// Applies `lookup` results over the current values.
    ///
    /// We accept BOTH `TOAST_MS` and `toast_ms` style names; upper-case wins.
    /// Unparseable numbers are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |upper: &str| lookup(upper).or_else(|| lookup(&upper.to_lowercase()));

        if let Some(ns) = get("STORAGE_NAMESPACE") {
            self.storage_namespace = ns;
        }
        if let Some(ms) = get("TOAST_MS").and_then(|v| v.trim().parse().ok()) {
            self.toast_visible_ms = ms;
        }
        if let Some(ms) = get("TOAST_FADE_MS").and_then(|v| v.trim().parse().ok()) {
            self.toast_fade_ms = ms;
        }
        if let Some(limit) = get("SUMMARY_LIMIT").and_then(|v| v.trim().parse().ok()) {
            self.summary_limit = limit;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn test_defaults() {
        let c = PortalConfig::default();
        assert_eq!(c.storage_namespace, "scms_");
        assert_eq!(c.toast_visible_ms, 2500);
        assert_eq!(c.toast_fade_ms, 300);
        assert_eq!(c.summary_limit, 5);
    }

    #[test]
    fn test_overrides_accept_both_cases_upper_wins() {
        let c = PortalConfig::default().with_overrides(lookup(&[
            ("STORAGE_NAMESPACE", "campus_"),
            ("storage_namespace", "ignored_"),
            ("toast_ms", "4000"),
            ("SUMMARY_LIMIT", "3"),
        ]));
        assert_eq!(c.storage_namespace, "campus_");
        assert_eq!(c.toast_visible_ms, 4000);
        assert_eq!(c.toast_fade_ms, 300);
        assert_eq!(c.summary_limit, 3);
    }

    #[test]
    fn test_invalid_numbers_are_ignored() {
        let c = PortalConfig::default().with_overrides(lookup(&[
            ("TOAST_MS", "soon"),
            ("TOAST_FADE_MS", "-5"),
        ]));
        assert_eq!(c, PortalConfig::default());
    }
}

use std::sync::RwLock;

use crate::constants::env as env_keys;

/// Immutable view of the connection settings at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSnapshot {
    pub base_url: String,
    pub token: String,
}

impl ConfigSnapshot {
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.token.is_empty()
    }
}

/// Runtime store for the GitLab base URL and private token.
///
/// Seeded from the environment at startup, then updated over the tool
/// surface. Updates are partial: a field is only overwritten when the
/// caller supplies a non-empty value for it.
#[derive(Debug, Default)]
pub struct ConfigStore {
    inner: RwLock<ConfigSnapshot>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var(env_keys::GITLAB_API).unwrap_or_default();
        let token = std::env::var(env_keys::GITLAB_TOKEN).unwrap_or_default();
        Self {
            inner: RwLock::new(ConfigSnapshot { base_url, token }),
        }
    }

    pub fn snapshot(&self) -> ConfigSnapshot {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Applies a partial update. Empty or absent values leave the stored
    /// field untouched, so a token can be rotated without restating the URL.
    pub fn set(&self, base_url: Option<&str>, token: Option<&str>) -> ConfigSnapshot {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(url) = base_url {
            if !url.is_empty() {
                guard.base_url = url.to_string();
            }
        }
        if let Some(token) = token {
            if !token.is_empty() {
                guard.token = token.to_string();
            }
        }
        guard.clone()
    }

    pub fn base_url(&self) -> String {
        self.snapshot().base_url
    }

    pub fn token(&self) -> String {
        self.snapshot().token
    }

    pub fn is_configured(&self) -> bool {
        self.snapshot().is_configured()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_set_keeps_existing_fields() {
        let store = ConfigStore::new();
        store.set(Some("https://gitlab.example.com/api/v4"), Some("glpat-abc"));
        store.set(None, Some("glpat-def"));

        let snap = store.snapshot();
        assert_eq!(snap.base_url, "https://gitlab.example.com/api/v4");
        assert_eq!(snap.token, "glpat-def");
    }

    #[test]
    fn empty_values_do_not_clear() {
        let store = ConfigStore::new();
        store.set(Some("https://gitlab.example.com/api/v4"), Some("glpat-abc"));
        store.set(Some(""), Some(""));

        let snap = store.snapshot();
        assert_eq!(snap.base_url, "https://gitlab.example.com/api/v4");
        assert_eq!(snap.token, "glpat-abc");
        assert!(store.is_configured());
    }

    #[test]
    fn unconfigured_until_both_fields_present() {
        let store = ConfigStore::new();
        assert!(!store.is_configured());

        store.set(Some("https://gitlab.example.com/api/v4"), None);
        assert!(!store.is_configured());

        store.set(None, Some("glpat-abc"));
        assert!(store.is_configured());
    }
}

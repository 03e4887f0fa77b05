//! Environment helpers shared by tests that read `WECOM_*` variables

use std::sync::Mutex;

/// Serializes tests that read or write `WECOM_*` environment variables
pub(crate) static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Restores environment variables when dropped
pub(crate) struct EnvGuard {
    vars_to_restore: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub(crate) fn new() -> Self {
        Self {
            vars_to_restore: Vec::new(),
        }
    }

    pub(crate) fn set(&mut self, key: &str, value: &str) {
        let original = std::env::var(key).ok();
        self.vars_to_restore.push((key.to_string(), original));
        unsafe {
            std::env::set_var(key, value);
        }
    }

    pub(crate) fn remove(&mut self, key: &str) {
        let original = std::env::var(key).ok();
        self.vars_to_restore.push((key.to_string(), original));
        unsafe {
            std::env::remove_var(key);
        }
    }

    /// Unsets every variable the loader reads
    pub(crate) fn clear_wecom(&mut self) {
        for key in [
            "WECOM_CONFIG_DIR",
            "WECOM_CONFIG_FILE",
            "WECOM_WEBHOOK__URL",
            "WECOM_WEBHOOK__RATE_LIMIT",
            "WECOM_LOGGER__LEVEL",
            "WECOM_LOGGER__FORMAT",
            "WECOM_LOGGER__COLORED",
        ] {
            self.remove(key);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, original_value) in self.vars_to_restore.iter().rev() {
            unsafe {
                match original_value {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

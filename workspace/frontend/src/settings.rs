use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

const STORAGE_PREFIX: &str = "airdemand_";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Origin of the demand API (e.g. "http://localhost:5000"); `None` means same origin as the page
    pub api_origin: Option<String>,

    /// API path prefix (e.g., "/api")
    pub api_path: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Request timeout in milliseconds
    pub request_timeout_ms: u32,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_origin: None,
            api_path: "/api".to_string(),
            log_level: Level::Info,
            request_timeout_ms: 30000,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

/// Durations must be positive; `0` would expire every request immediately.
fn parse_duration_ms(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|ms| *ms > 0)
}

impl AppSettings {
    /// Create settings from the window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            let read = |key: &str| storage.get_item(&format!("{}{}", STORAGE_PREFIX, key)).ok().flatten();

            if let Some(origin) = read("api_origin").filter(|o| !o.is_empty()) {
                settings.api_origin = Some(origin.trim_end_matches('/').to_string());
            }
            if let Some(api_path) = read("api_path") {
                settings.api_path = api_path;
            }
            if let Some(level) = read("log_level").as_deref().and_then(parse_level) {
                settings.log_level = level;
            }
            if let Some(timeout) = read("request_timeout_ms").as_deref().and_then(parse_duration_ms) {
                settings.request_timeout_ms = timeout;
            }
            if let Some(duration) = read("toast_duration_ms").as_deref().and_then(parse_duration_ms) {
                settings.toast_duration_ms = duration;
            }
        }

        settings
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                let write = |key: &str, value: &str| storage.set_item(&format!("{}{}", STORAGE_PREFIX, key), value);
                write("api_origin", self.api_origin.as_deref().unwrap_or(""))?;
                write("api_path", &self.api_path)?;
                write("log_level", &self.log_level.as_str().to_lowercase())?;
                write("request_timeout_ms", &self.request_timeout_ms.to_string())?;
                write("toast_duration_ms", &self.toast_duration_ms.to_string())?;
            }
        }
        Ok(())
    }

    /// Get the base API URL (origin + path prefix)
    pub fn api_base_url(&self) -> String {
        format!("{}{}", self.api_origin.as_deref().unwrap_or(""), self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_urls_are_same_origin() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_base_url(), "/api");
        assert_eq!(settings.api_url("/data"), "/api/data");
    }

    #[test]
    fn test_api_origin_override() {
        let settings = AppSettings {
            api_origin: Some("http://localhost:5000".to_string()),
            ..Default::default()
        };
        assert_eq!(settings.api_url("/insights"), "http://localhost:5000/api/insights");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("TRACE"), Some(Level::Trace));
        assert_eq!(parse_level("warn"), Some(Level::Warn));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_parse_duration_rejects_zero() {
        assert_eq!(parse_duration_ms("15000"), Some(15000));
        assert_eq!(parse_duration_ms("0"), None);
        assert_eq!(parse_duration_ms("-5"), None);
        assert_eq!(parse_duration_ms("soon"), None);
    }
}

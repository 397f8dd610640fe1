use log::Level;
use std::cell::RefCell;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend origin (e.g., "http://localhost:3000"); empty means the
    /// origin the page was served from
    pub api_origin: String,

    /// API path prefix (e.g., "/api/v1")
    pub api_path: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_origin: String::new(),
            api_path: "/api/v1".to_string(),
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from the window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(api_origin)) = storage.get_item("stockcast_api_origin") {
                    settings.api_origin = api_origin.trim_end_matches('/').to_string();
                }

                if let Ok(Some(api_path)) = storage.get_item("stockcast_api_path") {
                    settings.api_path = api_path;
                }

                if let Ok(Some(log_level)) = storage.get_item("stockcast_log_level") {
                    settings.log_level = log_level.parse().unwrap_or(settings.log_level);
                }
            }
        }

        settings
    }

    /// Get the base API URL (origin + path prefix)
    pub fn api_base_url(&self) -> String {
        format!("{}{}", self.api_origin, self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

use speakadora::PageLocation;
use web_sys::{Location, UrlSearchParams};

/// The location of the page the app is running on.
pub struct BrowserLocation {
    location: Option<Location>,
}

impl BrowserLocation {
    /// Reads the current `window.location`.
    pub fn current() -> Self {
        Self {
            location: web_sys::window().map(|window| window.location()),
        }
    }

    /// Path component of the page URL, or an empty string if it can't be read.
    pub fn pathname(&self) -> String {
        self.location
            .as_ref()
            .and_then(|location| location.pathname().ok())
            .unwrap_or_default()
    }
}

impl PageLocation for BrowserLocation {
    fn query_param(&self, name: &str) -> Option<String> {
        let search = self.location.as_ref()?.search().ok()?;
        UrlSearchParams::new_with_str(&search).ok()?.get(name)
    }

    fn hostname(&self) -> String {
        self.location
            .as_ref()
            .and_then(|location| location.hostname().ok())
            .unwrap_or_default()
    }
}

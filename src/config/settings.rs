/// Origins allowed to call the API: the local Vite dev server and the
/// deployed dashboard frontend.
#[derive(Clone)]
pub struct ServerSettings {
    pub allowed_origins: &'static [&'static str],
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            allowed_origins: &[
                "http://localhost:5173",
                "https://flex-reviews-dashboard.vercel.app",
            ],
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server: ServerSettings::default(),
        }
    }
}

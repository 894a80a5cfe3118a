//! Application-level constants: API defaults, storage keys, environments.

use serde::Serialize;

/// API client defaults.
pub mod api {
    use std::time::Duration;

    /// Page size when the caller does not ask for one.
    pub const DEFAULT_PAGE_SIZE: u32 = 20;
    /// Largest page size a client may request.
    pub const MAX_PAGE_SIZE: u32 = 100;
    /// Request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);
    /// Attempts before giving up.
    pub const RETRY_ATTEMPTS: u32 = 3;
    /// Pause between attempts.
    pub const RETRY_DELAY: Duration = Duration::from_millis(1000);
}

/// Client-side storage keys.
pub mod storage_keys {
    /// Auth token
    pub const USER_TOKEN: &str = "user_token";
    /// User preferences blob
    pub const USER_PREFERENCES: &str = "user_preferences";
    /// Selected theme
    pub const THEME: &str = "theme";
    /// Selected language
    pub const LANGUAGE: &str = "language";
    /// Shopping cart
    pub const CART: &str = "cart";
    /// Recent search terms
    pub const RECENT_SEARCHES: &str = "recent_searches";

    /// Every key with its table name.
    pub const ALL: [(&str, &str); 6] = [
        ("USER_TOKEN", USER_TOKEN),
        ("USER_PREFERENCES", USER_PREFERENCES),
        ("THEME", THEME),
        ("LANGUAGE", LANGUAGE),
        ("CART", CART),
        ("RECENT_SEARCHES", RECENT_SEARCHES),
    ];
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    Development,
    /// Pre-production
    Staging,
    /// Production
    Production,
    /// Test runs
    Test,
}

impl Environment {
    /// Every environment.
    pub const ALL: [Environment; 4] = [
        Environment::Development,
        Environment::Staging,
        Environment::Production,
        Environment::Test,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
            Environment::Test => "test",
        }
    }

    /// Parse a canonical name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|env| env.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

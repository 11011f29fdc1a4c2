pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Fixed values shared by the API client, the dashboard operations and the UI,
    //! organized by functional area.

    // =============================================================================
    // API CONFIGURATION
    // =============================================================================

    /// API base URL used when nothing else is configured.
    pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

    /// Environment variable that overrides the configured API base URL.
    pub const API_URL_ENV_VAR: &str = "POINTS_API_URL";

    /// Directory (under the home directory) holding the config file.
    pub const CONFIG_DIR: &str = ".points-dashboard";

    /// Network timeouts for every API call
    pub mod http {
        use std::time::Duration;

        /// Time allowed to establish a connection.
        pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
        /// Time allowed for a whole request, body included.
        pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
    }

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    /// Number of users shown in the Top Users row.
    pub const TOP_USERS_COUNT: usize = 3;

    /// Number of id characters shown before the ellipsis.
    pub const SHORT_ID_LEN: usize = 8;

    /// The maximum number of notices kept for the activity panel.
    pub const MAX_NOTICES: usize = 100;

    /// How long the splash screen stays up before the first page loads (milliseconds).
    pub const SPLASH_DURATION_MS: u64 = 1_500;

    /// Key polling interval of the UI loop (milliseconds).
    pub const UI_POLL_INTERVAL_MS: u64 = 100;
}

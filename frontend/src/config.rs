/// Base URL of the plant API. json-server listens here by default.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// How long a toast notice stays on screen, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 3000;

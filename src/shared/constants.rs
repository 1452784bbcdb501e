/// Image shown for reports submitted without a photo
pub const PLACEHOLDER_IMAGE: &str = "/assets/images/pollution_placeholder.svg";

/// Description length on citizen feed cards
pub const FEED_DESCRIPTION_CHARS: usize = 120;

/// Description length in the portal reports table
pub const TABLE_DESCRIPTION_CHARS: usize = 50;

/// Number of id characters shown in the portal reports table
pub const TABLE_ID_PREFIX_CHARS: usize = 8;

/// Cookie holding the bearer token issued at login
pub const SESSION_TOKEN_COOKIE: &str = "token";

/// Cookie holding the url-encoded JSON user profile
pub const SESSION_USER_COOKIE: &str = "user";

/// Directory served under `/assets`
pub const ASSETS_DIR: &str = "assets";

/// Smallest width or height an overlay can be resized to, in surface units.
pub const MIN_OVERLAY_SIZE: f32 = 20.0;

/// Default x offset of a freshly imported overlay from the surface origin.
pub const DEFAULT_OVERLAY_X: f32 = 100.0;

/// Default y offset of a freshly imported overlay from the surface origin.
pub const DEFAULT_OVERLAY_Y: f32 = 100.0;

/// Default width of a freshly imported overlay.
pub const DEFAULT_OVERLAY_WIDTH: f32 = 150.0;

/// Default height of a freshly imported overlay.
pub const DEFAULT_OVERLAY_HEIGHT: f32 = 150.0;

/// Default endpoint of the background-removal service.
pub const DEFAULT_REMOVAL_ENDPOINT: &str = "https://api.remove.bg/v1.0/removebg";

/// Default request timeout for the background-removal service, in seconds.
pub const DEFAULT_REMOVAL_TIMEOUT_SECS: u64 = 60;

/// Environment variable holding the background-removal API key.
pub const ENV_REMOVAL_API_KEY: &str = "TAILOR_REMOVEBG_API_KEY";

/// Environment variable overriding the background-removal endpoint.
pub const ENV_REMOVAL_API_URL: &str = "TAILOR_REMOVEBG_API_URL";

/// Header carrying the pre-shared key.
pub const REMOVAL_API_KEY_HEADER: &str = "X-Api-Key";

/// Default Log10 service base URL
pub const DEFAULT_BASE_URL: &str = "https://log10.io";
/// Path of the feedback collection endpoint
pub const FEEDBACK_PATH: &str = "/api/v1/feedback";
/// Header carrying the API token
pub const TOKEN_HEADER: &str = "x-log10-token";
/// Header carrying the organization id
pub const ORGANIZATION_HEADER: &str = "x-log10-organization-id";
/// Default page offset for listing feedback
pub const DEFAULT_OFFSET: u64 = 0;
/// Default page size for listing feedback
pub const DEFAULT_LIMIT: u64 = 25;
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("log10-feedback/", env!("CARGO_PKG_VERSION"));

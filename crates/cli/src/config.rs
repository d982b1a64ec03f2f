/// CLI configuration loaded from environment variables.
///
/// All fields have defaults suitable for stitching a local page tree.
/// Override via environment variables (or a `.env` file).
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Base URL for fragment fetches (default: none, fragments are read
    /// from the input file's directory).
    pub base_url: Option<String>,
    /// Per-fragment request timeout in seconds (default: `10`). Only used
    /// when `base_url` is set.
    pub request_timeout_secs: u64,
}

impl CliConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default |
    /// |---------------------------|---------|
    /// | `FRAGSTITCH_BASE_URL`     | unset   |
    /// | `FRAGSTITCH_TIMEOUT_SECS` | `10`    |
    pub fn from_env() -> Self {
        let base_url = std::env::var("FRAGSTITCH_BASE_URL").ok();

        let request_timeout_secs: u64 = std::env::var("FRAGSTITCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("FRAGSTITCH_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url,
            request_timeout_secs,
        }
    }
}

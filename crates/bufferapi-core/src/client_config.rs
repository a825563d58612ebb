/// Production root of the Buffer v1 REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.bufferapp.com/1/";

/// Everything needed to build a `BufferClient`.
///
/// The access token is obtained out of band (OAuth2 flow, token cache, ...)
/// and handed in as-is; nothing here refreshes or exchanges it.
#[derive(Clone)]
pub struct ClientConfig {
    pub access_token: String,
    pub base_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

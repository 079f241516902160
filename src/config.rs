use clap::Parser;

pub const DEFAULT_GOOGLE_PLACES_BASE_URL: &str = "https://places.googleapis.com";

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    #[clap(env, long, default_value = "0.0.0.0:8000")]
    pub bind_address: String,

    /// Comma separated CORS allow-list. CORS is disabled when unset.
    #[clap(env, long)]
    pub origin_urls: Option<String>,

    #[clap(env, long, default_value = DEFAULT_GOOGLE_PLACES_BASE_URL)]
    pub google_places_base_url: String,

    /// Name of the environment variable holding the Places API key.
    /// The key itself is read on every outbound call.
    #[clap(env = "GOOGLE_PLACES_API_KEY_ENV", long, default_value = "GOOGLE_PLACES_API_KEY")]
    pub api_key_env: String,

    #[clap(env = "GOOGLE_PLACES_TIMEOUT_SECS", long, default_value_t = 10)]
    pub request_timeout_secs: u64,

    /// Retries for transport failures and 5xx responses. Zero disables retrying.
    #[clap(env = "GOOGLE_PLACES_MAX_RETRIES", long, default_value_t = 0)]
    pub max_retries: u32,

    #[clap(env = "GOOGLE_PLACES_RETRY_BACKOFF_MS", long, default_value_t = 250)]
    pub retry_backoff_ms: u64,
}

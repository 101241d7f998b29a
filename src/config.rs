use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,

    pub request_timeout_secs: u64,
    pub rollover_check_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_base_url: env::var("VITALARC_API_URL").expect("VITALARC_API_URL must be set"),
            request_timeout_secs: env::var("VITALARC_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".into())
                .parse()
                .expect("VITALARC_REQUEST_TIMEOUT_SECS must be a number"),
            rollover_check_secs: env::var("VITALARC_ROLLOVER_CHECK_SECS")
                .unwrap_or_else(|_| "60".into())
                .parse()
                .expect("VITALARC_ROLLOVER_CHECK_SECS must be a number"),
        }
    }
}

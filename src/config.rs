use crate::store::DismissPolicy;
use std::time::Duration;
use url::Url;

pub static DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub static DEFAULT_PAGE_SIZE: u32 = 50;
pub static DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
	#[error("invalid api endpoint {0:?}: {1}")]
	Endpoint(String, #[source] url::ParseError),
	#[error("invalid value {value:?} for {key}")]
	Value { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	pub endpoint: Url,
	pub page_size: u32,
	pub request_timeout: Duration,
	/// When set, create and update are also written to the remote api.
	pub persist_mutations: bool,
	pub dismiss: DismissPolicy,
}

impl Config {
	pub fn new(endpoint: Url) -> Self {
		Self {
			endpoint,
			page_size: DEFAULT_PAGE_SIZE,
			request_timeout: DEFAULT_REQUEST_TIMEOUT,
			persist_mutations: false,
			dismiss: DismissPolicy::Never,
		}
	}

	/// Builds the config from the `DASHBOARD_*` variables captured at compile time.
	pub fn load() -> Result<Self, ConfigError> {
		Self::from_overrides(Overrides::compiled())
	}

	fn from_overrides(overrides: Overrides<'_>) -> Result<Self, ConfigError> {
		let endpoint = overrides.endpoint.unwrap_or(DEFAULT_ENDPOINT);
		let endpoint = Url::parse(endpoint).map_err(|err| ConfigError::Endpoint(endpoint.to_owned(), err))?;
		let mut config = Self::new(endpoint);
		if let Some(value) = overrides.page_size {
			config.page_size = parse("DASHBOARD_PAGE_SIZE", value)?;
			if config.page_size == 0 {
				return Err(ConfigError::Value {
					key: "DASHBOARD_PAGE_SIZE",
					value: value.to_owned(),
				});
			}
		}
		if let Some(value) = overrides.request_timeout_ms {
			config.request_timeout = Duration::from_millis(parse("DASHBOARD_REQUEST_TIMEOUT_MS", value)?);
		}
		if let Some(value) = overrides.persist_mutations {
			config.persist_mutations = parse("DASHBOARD_PERSIST_MUTATIONS", value)?;
		}
		if let Some(value) = overrides.notification_ms {
			let millis = parse("DASHBOARD_NOTIFICATION_MS", value)?;
			config.dismiss = DismissPolicy::After(Duration::from_millis(millis));
		}
		Ok(config)
	}
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
	value.trim().parse::<T>().map_err(|_| ConfigError::Value {
		key,
		value: value.to_owned(),
	})
}

#[derive(Debug, Default, Clone, Copy)]
struct Overrides<'a> {
	endpoint: Option<&'a str>,
	page_size: Option<&'a str>,
	request_timeout_ms: Option<&'a str>,
	persist_mutations: Option<&'a str>,
	notification_ms: Option<&'a str>,
}

impl Overrides<'static> {
	fn compiled() -> Self {
		Self {
			endpoint: option_env!("DASHBOARD_API_ENDPOINT"),
			page_size: option_env!("DASHBOARD_PAGE_SIZE"),
			request_timeout_ms: option_env!("DASHBOARD_REQUEST_TIMEOUT_MS"),
			persist_mutations: option_env!("DASHBOARD_PERSIST_MUTATIONS"),
			notification_ms: option_env!("DASHBOARD_NOTIFICATION_MS"),
		}
	}
}

use crate::{
	data::{UserId, UserRecord},
	request::{Request, RequestError},
};
use futures_util::future::LocalBoxFuture;
use reqwest::Method;
use url::Url;

/// The remote boundary of the dashboard. Implementations are stateless and
/// never retry; retry policy belongs to the caller.
pub trait UserApi {
	fn fetch_page(&self, page: u32, page_size: u32) -> LocalBoxFuture<'_, Result<Vec<UserRecord>, RequestError>>;

	fn delete(&self, id: UserId) -> LocalBoxFuture<'_, Result<(), RequestError>>;

	fn create(&self, record: UserRecord) -> LocalBoxFuture<'_, Result<(), RequestError>>;

	fn update(&self, record: UserRecord) -> LocalBoxFuture<'_, Result<(), RequestError>>;
}

#[derive(Debug, Clone)]
pub struct RestUserApi {
	client: reqwest::Client,
	endpoint: Url,
}

impl RestUserApi {
	pub fn new(endpoint: Url) -> Result<Self, RequestError> {
		let builder = reqwest::Client::builder();
		#[cfg(not(target_family = "wasm"))]
		let builder = builder.user_agent(crate::config::APP_USER_AGENT);
		Ok(Self {
			client: builder.build()?,
			endpoint,
		})
	}

	fn user_url(&self, id: UserId) -> String {
		format!("{}/{id}", self.endpoint.as_str().trim_end_matches('/'))
	}

	fn request<T>(&self, method: Method, url: &str) -> Request<T> {
		let builder = self.client.request(method, url);
		Request::<T>::from(builder.header("Accept", "application/json"))
	}

	fn page_request(&self, page: u32, page_size: u32) -> Request<Vec<UserRecord>> {
		self.request(Method::GET, self.endpoint.as_str())
			.with_query(&[("_page", page), ("_limit", page_size)])
	}
}

impl UserApi for RestUserApi {
	fn fetch_page(&self, page: u32, page_size: u32) -> LocalBoxFuture<'_, Result<Vec<UserRecord>, RequestError>> {
		let request = self.page_request(page, page_size);
		Box::pin(async move {
			let users = request.send().await?;
			log::debug!(target: "users", "Requested page {page}, found {} users.", users.len());
			Ok(users)
		})
	}

	fn delete(&self, id: UserId) -> LocalBoxFuture<'_, Result<(), RequestError>> {
		let request = self.request::<()>(Method::DELETE, &self.user_url(id));
		Box::pin(request.send_status())
	}

	fn create(&self, record: UserRecord) -> LocalBoxFuture<'_, Result<(), RequestError>> {
		let request = self.request::<()>(Method::POST, self.endpoint.as_str()).with_json(&record);
		Box::pin(request.send_status())
	}

	fn update(&self, record: UserRecord) -> LocalBoxFuture<'_, Result<(), RequestError>> {
		let request = self.request::<()>(Method::PUT, &self.user_url(record.id)).with_json(&record);
		Box::pin(request.send_status())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn user_urls() {
		let api = RestUserApi::new(Url::parse("https://example.com/users/").unwrap()).unwrap();
		assert_eq!(api.user_url(UserId(12)), "https://example.com/users/12");
		let api = RestUserApi::new(Url::parse("https://example.com/users").unwrap()).unwrap();
		assert_eq!(api.user_url(UserId(3)), "https://example.com/users/3");
	}

	#[test]
	fn page_request_carries_query() {
		let api = RestUserApi::new(Url::parse("https://example.com/users").unwrap()).unwrap();
		let request = api.page_request(2, 50).into_builder().build().unwrap();
		assert_eq!(*request.method(), Method::GET);
		assert_eq!(request.url().as_str(), "https://example.com/users?_page=2&_limit=50");
	}
}

use reqwest::{RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum RequestError {
	#[error(transparent)]
	Transport(#[from] reqwest::Error),
	#[error("server responded with {0}")]
	Status(StatusCode),
	#[error(transparent)]
	InvalidJson(#[from] InvalidJson),
	#[error("no response after {0:?}")]
	TimedOut(Duration),
}

#[derive(thiserror::Error, Debug)]
pub struct InvalidJson(pub String, pub serde_json::Error);
impl std::fmt::Display for InvalidJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invalid json: {:?}\nError: {:?}", self.0, self.1)
	}
}

/// A request whose body, if it succeeds, decodes into `T`.
pub struct Request<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Request<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}
impl<T> Request<T> {
	pub fn from(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub fn with_query<Q>(mut self, query: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.query(query);
		self
	}

	pub fn with_json<Q>(mut self, json: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.json(json);
		self
	}

	#[cfg(test)]
	pub fn into_builder(self) -> RequestBuilder {
		self.builder
	}

	async fn dispatch(self) -> Result<reqwest::Response, RequestError> {
		let response = self.builder.send().await?;
		check_status(response)
	}

	/// Sends the request, only checking the status. The body is ignored.
	pub async fn send_status(self) -> Result<(), RequestError> {
		self.dispatch().await?;
		Ok(())
	}
}
impl<T> Request<T>
where
	T: DeserializeOwned,
{
	pub async fn send(self) -> Result<T, RequestError> {
		let response = self.dispatch().await?;
		decode(response).await
	}
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, RequestError> {
	let status = response.status();
	if !status.is_success() {
		return Err(RequestError::Status(status));
	}
	Ok(response)
}

async fn decode<T>(response: reqwest::Response) -> Result<T, RequestError>
where
	T: DeserializeOwned,
{
	let text = response.text().await?;
	match serde_json::from_str(&text) {
		Ok(data) => Ok(data),
		Err(err) => Err(InvalidJson(text, err).into()),
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use futures::executor::block_on;

	fn response(status: u16, body: &'static str) -> reqwest::Response {
		reqwest::Response::from(http::Response::builder().status(status).body(body).unwrap())
	}

	#[test]
	fn error_status_is_reported() {
		let err = check_status(response(503, "")).unwrap_err();
		assert!(matches!(err, RequestError::Status(status) if status == StatusCode::SERVICE_UNAVAILABLE));
		let err = check_status(response(404, r#"{"id": 1}"#)).unwrap_err();
		assert!(matches!(err, RequestError::Status(status) if status == StatusCode::NOT_FOUND));
		assert!(check_status(response(204, "")).is_ok());
	}

	#[test]
	fn undecodable_body_is_reported() {
		let err = block_on(decode::<Vec<u32>>(response(200, "not json"))).unwrap_err();
		let RequestError::InvalidJson(InvalidJson(body, _)) = err else {
			panic!("expected invalid json, got {err:?}");
		};
		assert_eq!(body, "not json");
	}

	#[test]
	fn body_decodes() {
		let ids = block_on(decode::<Vec<u32>>(response(200, "[1, 2, 3]"))).unwrap();
		assert_eq!(ids, vec![1, 2, 3]);
	}
}

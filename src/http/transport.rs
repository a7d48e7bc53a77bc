use std::time::Duration;

use async_trait::async_trait;
use http::Version;
use http::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Request, Response};

use crate::args::{DEFAULT_FORM_CONTENT_TYPE, DEFAULT_USER_AGENT};
use crate::error::HttpError;

use super::RequestSpec;

/// A response whose head has arrived; the body is read separately.
#[derive(Debug)]
pub struct Exchange<B> {
    pub status: u16,
    pub version: Version,
    pub body: B,
}

/// The HTTP capability an execution unit needs.
///
/// Building a request and sending it are separate steps so that only the
/// exchange itself is timed.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    type Request: Send;
    type Body: Send;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds a sendable request from a [`RequestSpec`].
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be constructed.
    fn prepare(&self, spec: &RequestSpec) -> Result<Self::Request, Self::Error>;

    /// Performs one exchange and returns once the response head is available.
    ///
    /// # Errors
    ///
    /// Returns an error when no response was obtained.
    async fn send(&self, request: Self::Request) -> Result<Exchange<Self::Body>, Self::Error>;

    /// Reads the full response body.
    ///
    /// # Errors
    ///
    /// Returns an error when the body cannot be read.
    async fn read_body(&self, body: Self::Body) -> Result<String, Self::Error>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds the shared client. Requests never time out unless
    /// `request_timeout` is set.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(request_timeout: Option<Duration>) -> Result<Self, HttpError> {
        let mut client_builder = Client::builder().user_agent(DEFAULT_USER_AGENT);
        if let Some(timeout) = request_timeout {
            client_builder = client_builder.timeout(timeout);
        }
        let client = client_builder
            .build()
            .map_err(|err| HttpError::BuildClientFailed { source: err })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    type Request = Request;
    type Body = Response;
    type Error = HttpError;

    fn prepare(&self, spec: &RequestSpec) -> Result<Request, HttpError> {
        let mut request_builder = self
            .client
            .request(spec.method().clone(), spec.url().clone());

        if spec.needs_default_content_type() {
            request_builder = request_builder.header(
                CONTENT_TYPE,
                HeaderValue::from_static(DEFAULT_FORM_CONTENT_TYPE),
            );
        }

        // Appends, so repeated keys are all sent.
        for (name, value) in spec.headers() {
            request_builder = request_builder.header(name.clone(), value.clone());
        }

        if !spec.body().is_empty() {
            request_builder = request_builder.body(spec.body().to_owned());
        }

        request_builder
            .build()
            .map_err(|err| HttpError::BuildRequestFailed { source: err })
    }

    async fn send(&self, request: Request) -> Result<Exchange<Response>, HttpError> {
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|err| HttpError::ExchangeFailed { source: err })?;
        Ok(Exchange {
            status: response.status().as_u16(),
            version: response.version(),
            body: response,
        })
    }

    async fn read_body(&self, body: Response) -> Result<String, HttpError> {
        body.text()
            .await
            .map_err(|err| HttpError::ReadBodyFailed { source: err })
    }
}

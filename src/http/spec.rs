use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use http::Method;
use url::Url;

use crate::args::{TesterArgs, normalize_url};
use crate::error::ValidationError;

/// Fully resolved description of the request every execution unit repeats.
///
/// Built once before dispatch and only read afterwards, so it is shared
/// between tasks behind an `Arc` without further synchronization.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    url: Url,
    method: Method,
    body: String,
    headers: Vec<(HeaderName, HeaderValue)>,
    effective_path: String,
}

impl RequestSpec {
    /// Resolves raw user input into a request description.
    ///
    /// The URL gets `http://` when it has no scheme, the method is trimmed and
    /// upper-cased (empty means GET), and header pairs keep their order.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty or unparsable URL, an invalid
    /// method, or a header name/value that cannot be sent.
    pub fn resolve(
        raw_url: &str,
        method: &str,
        body: &str,
        headers: &[(String, String)],
    ) -> Result<Self, ValidationError> {
        let normalized = normalize_url(raw_url)?;
        let url = Url::parse(&normalized).map_err(|err| ValidationError::InvalidUrl {
            url: normalized.clone(),
            source: err,
        })?;
        let Some(host) = url.host_str().filter(|host| !host.is_empty()) else {
            return Err(ValidationError::UrlMissingHost);
        };

        let method = resolve_method(method)?;

        let mut resolved_headers = Vec::with_capacity(headers.len());
        for (key, value) in headers {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|err| {
                ValidationError::InvalidHeaderName {
                    header: key.clone(),
                    source: err,
                }
            })?;
            let value = HeaderValue::from_str(value).map_err(|err| {
                ValidationError::InvalidHeaderValue {
                    header: key.clone(),
                    source: err,
                }
            })?;
            resolved_headers.push((name, value));
        }

        let authority = url
            .port()
            .map_or_else(|| host.to_owned(), |port| format!("{}:{}", host, port));
        let effective_path = url.query().map_or_else(
            || format!("{}{}", authority, url.path()),
            |query| format!("{}{}?{}", authority, url.path(), query),
        );

        Ok(Self {
            url,
            method,
            body: body.to_owned(),
            headers: resolved_headers,
            effective_path,
        })
    }

    /// Resolves the request described by the CLI/config arguments.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the URL is missing or any part of the
    /// request is invalid.
    pub fn from_args(args: &TesterArgs) -> Result<Self, ValidationError> {
        let url = args.url.as_deref().ok_or(ValidationError::MissingUrl)?;
        Self::resolve(url, &args.method, &args.data, &args.header_pairs())
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn headers(&self) -> &[(HeaderName, HeaderValue)] {
        &self.headers
    }

    /// Host, port, path and query of the target, as shown in request logs.
    #[must_use]
    pub fn effective_path(&self) -> &str {
        &self.effective_path
    }

    /// Non-GET requests get a form content type unless a header sets one.
    #[must_use]
    pub fn needs_default_content_type(&self) -> bool {
        self.method != Method::GET
            && !self
                .headers
                .iter()
                .any(|(name, _)| *name == CONTENT_TYPE)
    }
}

fn resolve_method(raw: &str) -> Result<Method, ValidationError> {
    let normalized = raw.trim().to_ascii_uppercase();
    if normalized.is_empty() {
        return Ok(Method::GET);
    }
    Method::from_bytes(normalized.as_bytes()).map_err(|err| ValidationError::InvalidMethod {
        value: raw.to_owned(),
        source: err,
    })
}

//! HTTP [`Api`] implementation.

mod impls;

use std::time::Duration;

use derive_more::{Display, Error as StdError, From};
use reqwest::{Method, RequestBuilder, StatusCode};
use secrecy::ExposeSecret as _;
use serde::de::DeserializeOwned;
use tracerr::Traced;
use tracing as log;
use url::Url;

use crate::{domain::session::Bearer, infra::api};
#[cfg(doc)]
use crate::infra::Api;

/// [`Http`] client configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the backend.
    pub url: Url,

    /// Timeout of a single request.
    pub timeout: Duration,
}

/// HTTP client of the backend [`Api`].
#[derive(Clone, Debug)]
pub struct Http {
    /// Base URL of the backend, without a trailing slash.
    base: String,

    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl Http {
    /// Creates a new [`Http`] client with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If failed to initialize the underlying HTTP client.
    pub fn new(conf: &Config) -> Result<Self, Traced<api::Error>> {
        let client = reqwest::Client::builder()
            .timeout(conf.timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        Ok(Self {
            base: conf.url.as_str().trim_end_matches('/').to_owned(),
            client,
        })
    }

    /// Returns the full URL of the provided backend `path`.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// Starts a request to the provided backend `path`, authorized with the
    /// provided [`Bearer`].
    fn authorized(
        &self,
        method: Method,
        path: &str,
        bearer: &Bearer,
    ) -> RequestBuilder {
        self.client
            .request(method, self.endpoint(path))
            .bearer_auth(bearer.expose_secret())
    }

    /// Sends the provided request and decodes its JSON response.
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, Traced<api::Error>> {
        use api::Error as E;

        let response = request
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        let status = response.status();
        log::debug!("`{}` responded with `{status}`", response.url().path());

        let body = response
            .bytes()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(tracerr::new!(E::Unauthorized));
        }
        if !status.is_success() {
            return Err(tracerr::new!(E::Status {
                status: status.as_u16(),
                detail: String::from_utf8_lossy(&body).into_owned(),
            }));
        }

        // Empty bodies are read as `null`.
        let body: &[u8] = if body.is_empty() { b"null" } else { &body };
        serde_json::from_slice(body).map_err(tracerr::from_and_wrap!(=> E))
    }
}

/// [`Http`] transport error.
#[derive(Debug, Display, StdError, From)]
pub enum Error {
    /// Request failed to be sent, or its response failed to be read.
    #[display("`reqwest` failed: {_0}")]
    Request(reqwest::Error),
}

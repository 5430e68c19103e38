/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::{ORGANIZATION_HEADER, TOKEN_HEADER, USER_AGENT};
use crate::error::{AppError, server_error_message};
use crate::utils::logger::FeedbackLogger;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as HttpInternalClient, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::Level;

/// Transport boundary of the feedback client
///
/// Holds a `reqwest` client whose default headers carry the token, the
/// organization id and the JSON content type, so every request sent through it
/// is scoped the same way. Failures are logged through the injected logger and
/// returned as typed [`AppError`] values; nothing is retried.
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    logger: Arc<dyn FeedbackLogger>,
}

impl HttpClient {
    /// Builds the transport for `config`
    ///
    /// # Errors
    /// * `AppError::InvalidInput` - token or organization id is not a valid header value
    /// * `AppError::Network` - the underlying client could not be built
    pub fn new(config: Arc<Config>, logger: Arc<dyn FeedbackLogger>) -> Result<Self, AppError> {
        let headers = default_headers(&config)?;

        let mut builder = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers);
        if let Some(timeout) = config.timeout_duration() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            config,
            logger,
        })
    }

    /// Sends a GET request with `query` appended to the URL
    pub async fn get<Q: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, AppError> {
        let request = self.request(Method::GET, path).query(query);
        self.send(request).await
    }

    /// Sends a POST request with `body` serialized as JSON
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let request = self.request(Method::POST, path).json(body);
        self.send(request).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.url_for(path);
        self.logger.log(Level::DEBUG, &format!("{method} {url}"));
        self.http_client.request(method, url)
    }

    /// Sends the request and decodes a successful JSON body
    ///
    /// Every failure is logged before being returned; for error statuses the
    /// `error` entry of a JSON body is logged on its own line as well.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                self.logger.log(Level::ERROR, &e.to_string());
                return Err(AppError::Network(e));
            }
        };

        let status = response.status();
        self.logger
            .log(Level::DEBUG, &format!("Response status: {status}"));

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                self.logger.log(Level::ERROR, &e.to_string());
                return Err(AppError::Network(e));
            }
        };

        if !status.is_success() {
            let payload = serde_json::from_str::<serde_json::Value>(&body).ok();
            self.logger.log(
                Level::ERROR,
                &format!("Request failed with status {status}: {body}"),
            );
            if let Some(message) = payload.as_ref().and_then(server_error_message) {
                self.logger.log(Level::ERROR, &message);
            }
            return Err(AppError::Status { status, payload });
        }

        serde_json::from_str(&body).map_err(|e| {
            self.logger
                .log(Level::ERROR, &format!("Failed to decode response: {e}"));
            AppError::Json(e)
        })
    }
}

fn default_headers(config: &Config) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(TOKEN_HEADER),
        header_value(TOKEN_HEADER, &config.api_token)?,
    );
    headers.insert(
        HeaderName::from_static(ORGANIZATION_HEADER),
        header_value(ORGANIZATION_HEADER, &config.organization_id)?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, AppError> {
    let mut value = HeaderValue::from_str(value)
        .map_err(|e| AppError::InvalidInput(format!("{name}: {e}")))?;
    if name == TOKEN_HEADER {
        value.set_sensitive(true);
    }
    Ok(value)
}

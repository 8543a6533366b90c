//! Thin REST wrapper over the CRM backend.

use reqwest::{Response, header};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::error::{ApiError, error_message, map_reqwest_error};
use crate::resource::{CreateAck, CreateShape, Created, ListEnvelope, ListShape, Resource};

/// HTTP client for the CRM backend.
///
/// The bearer token is injected into every call rather than held here; the
/// calling layer owns the token lifecycle (acquire at sign-in, drop at
/// sign-out or on 401).
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("crm-mobile-core/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/api/{path}",
            self.base_url.as_str().trim_end_matches('/')
        )
    }

    /// GET the full collection for `R`, unwrapping its list shape.
    pub async fn list<R: Resource>(&self, token: &SecretString) -> Result<Vec<R>, ApiError> {
        let url = self.url(R::PATH);
        debug!(%url, "listing collection");
        let res = self
            .http
            .get(&url)
            .bearer_auth(token.expose_secret())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let res = check(res).await?;

        match R::LIST_SHAPE {
            ListShape::Bare => decode(res).await,
            ListShape::Enveloped => {
                let envelope: ListEnvelope<R> = decode(res).await?;
                Ok(envelope.data)
            }
        }
    }

    /// GET a single entity with its nested relations inlined.
    pub async fn get<R: Resource>(&self, token: &SecretString, id: i64) -> Result<R, ApiError> {
        let url = self.url(&format!("{}/{id}", R::PATH));
        debug!(%url, "fetching entity");
        let res = self
            .http
            .get(&url)
            .bearer_auth(token.expose_secret())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode(check(res).await?).await
    }

    /// POST a new entity, decoding whichever create shape `R` speaks.
    pub async fn create<R: Resource>(
        &self,
        token: &SecretString,
        body: &(impl Serialize + ?Sized),
    ) -> Result<Created<R>, ApiError> {
        let url = self.url(R::PATH);
        debug!(%url, "creating entity");
        let res = self
            .http
            .post(&url)
            .bearer_auth(token.expose_secret())
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let res = check(res).await?;

        match R::CREATE_SHAPE {
            CreateShape::Entity => Ok(Created::Entity(decode(res).await?)),
            CreateShape::Ack => {
                let ack: CreateAck = decode(res).await?;
                Ok(Created::Ack(ack))
            }
        }
    }

    /// PUT a partial update and decode the updated entity.
    pub async fn update<R: Resource>(
        &self,
        token: &SecretString,
        id: i64,
        body: &(impl Serialize + ?Sized),
    ) -> Result<R, ApiError> {
        let url = self.url(&format!("{}/{id}", R::PATH));
        debug!(%url, "updating entity");
        let res = self
            .http
            .put(&url)
            .bearer_auth(token.expose_secret())
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode(check(res).await?).await
    }

    /// DELETE an entity. A 204 / empty body resolves without touching JSON.
    pub async fn delete<R: Resource>(
        &self,
        token: &SecretString,
        id: i64,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("{}/{id}", R::PATH));
        debug!(%url, "deleting entity");
        let res = self
            .http
            .delete(&url)
            .bearer_auth(token.expose_secret())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check(res).await?;
        Ok(())
    }
}

/// Map a non-2xx response into the error taxonomy.
async fn check(res: Response) -> Result<Response, ApiError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    let message = error_message(status.as_u16(), &body);
    warn!(status = status.as_u16(), %message, "request failed");
    Err(ApiError::Http {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    res.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

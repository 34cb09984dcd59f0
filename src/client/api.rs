/**
 * API Client
 *
 * Typed HTTP client for the StayBook API. One method per endpoint, with the
 * session cookie captured from login responses and replayed on every
 * subsequent request, the way a browser would.
 */
use std::time::Duration;

use reqwest::header;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response};

use crate::shared::bookings::{Booking, BookingWithPlace, NewBooking};
use crate::shared::places::{Place, PlaceData, UpdatePlaceRequest};
use crate::shared::uploads::{UploadByLinkRequest, UploadResponse};
use crate::shared::users::{
    LoginRequest, ProfileUpdate, RegisterRequest, UpdateProfileRequest, User,
};

/// Name of the cookie the server stores the session token in
const SESSION_COOKIE: &str = "token";

/// Errors surfaced by [`ApiClient`]
///
/// Transport failures (refused connections, timeouts, malformed bodies) come
/// back as `Transport`; anything the server answered with an error status
/// becomes `Api`, carrying the message from the response body.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Could not reach the server or read its response
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with an error status
    #[error("{message} (status {status})")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// Status code when the server answered, `None` for transport failures
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(_) => None,
        }
    }
}

/// HTTP client bound to one StayBook server
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client for the server at `base_url` (scheme, host and port;
    /// no trailing path)
    pub fn connect(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            token: None,
        })
    }

    /// Session token captured from the last successful login, if any
    pub fn session_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Liveness probe
    pub async fn health(&self) -> Result<(), ClientError> {
        let response = self.request(Method::GET, "/api/health").send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(api_error(response).await)
        }
    }

    /// Create an account. Does not sign in; call [`login`](Self::login) next.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ClientError> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .request(Method::POST, "/api/register")
            .json(&request)
            .send()
            .await?;
        decode(response).await
    }

    /// Sign in and keep the session cookie for later requests
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, ClientError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .request(Method::POST, "/api/login")
            .json(&request)
            .send()
            .await?;
        self.capture_session(&response);
        decode(response).await
    }

    /// Sign out and drop the cached session cookie
    pub async fn logout(&mut self) -> Result<(), ClientError> {
        let response = self.request(Method::POST, "/api/logout").send().await?;
        if response.status().is_success() {
            self.token = None;
            Ok(())
        } else {
            Err(api_error(response).await)
        }
    }

    /// Current user, or `None` when no session is active
    pub async fn profile(&self) -> Result<Option<User>, ClientError> {
        let response = self.request(Method::GET, "/api/profile").send().await?;
        decode(response).await
    }

    /// Update name, email or password for the signed-in user
    pub async fn update_profile(
        &self,
        request: UpdateProfileRequest,
    ) -> Result<ProfileUpdate, ClientError> {
        let response = self
            .request(Method::PUT, "/api/profile")
            .json(&request)
            .send()
            .await?;
        decode(response).await
    }

    /// Create a place listing owned by the signed-in user
    pub async fn add_place(&self, data: PlaceData) -> Result<Place, ClientError> {
        let response = self
            .request(Method::POST, "/api/places")
            .json(&data)
            .send()
            .await?;
        decode(response).await
    }

    /// Update an owned place listing
    pub async fn update_place(&self, request: UpdatePlaceRequest) -> Result<Place, ClientError> {
        let response = self
            .request(Method::PUT, "/api/places")
            .json(&request)
            .send()
            .await?;
        decode(response).await
    }

    /// Browse every listing
    pub async fn places(&self) -> Result<Vec<Place>, ClientError> {
        let response = self.request(Method::GET, "/api/places").send().await?;
        decode(response).await
    }

    /// Single listing by id
    pub async fn place(&self, id: &str) -> Result<Place, ClientError> {
        let path = format!("/api/places/{}", id);
        let response = self.request(Method::GET, &path).send().await?;
        decode(response).await
    }

    /// Listings owned by the signed-in user
    pub async fn my_places(&self) -> Result<Vec<Place>, ClientError> {
        let response = self.request(Method::GET, "/api/user-places").send().await?;
        decode(response).await
    }

    /// Book a place for the signed-in user
    pub async fn book(&self, booking: NewBooking) -> Result<Booking, ClientError> {
        let response = self
            .request(Method::POST, "/api/bookings")
            .json(&booking)
            .send()
            .await?;
        decode(response).await
    }

    /// Bookings made by the signed-in user, places expanded
    pub async fn bookings(&self) -> Result<Vec<BookingWithPlace>, ClientError> {
        let response = self.request(Method::GET, "/api/bookings").send().await?;
        decode(response).await
    }

    /// Single booking by id, place expanded
    pub async fn booking(&self, id: &str) -> Result<BookingWithPlace, ClientError> {
        let path = format!("/api/bookings/{}", id);
        let response = self.request(Method::GET, &path).send().await?;
        decode(response).await
    }

    /// Upload photos as multipart form data; each entry is (file name, bytes)
    pub async fn upload_photos(
        &self,
        photos: Vec<(String, Vec<u8>)>,
    ) -> Result<UploadResponse, ClientError> {
        let mut form = Form::new();
        for (file_name, bytes) in photos {
            form = form.part("photos", Part::bytes(bytes).file_name(file_name));
        }
        let response = self
            .request(Method::POST, "/api/upload")
            .multipart(form)
            .send()
            .await?;
        decode(response).await
    }

    /// Ask the server to fetch a photo from a URL; answers the stored file name
    pub async fn upload_by_link(&self, link: &str) -> Result<String, ClientError> {
        let request = UploadByLinkRequest {
            link: link.to_string(),
        };
        let response = self
            .request(Method::POST, "/api/upload-by-link")
            .json(&request)
            .send()
            .await?;
        decode(response).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            builder = builder.header(header::COOKIE, format!("{}={}", SESSION_COOKIE, token));
        }
        builder
    }

    /// Pick the session cookie out of a response, if the server set one.
    /// An empty value (the clearing form) drops the cached token.
    fn capture_session(&mut self, response: &Response) {
        for value in response.headers().get_all(header::SET_COOKIE) {
            if let Some(token) = value.to_str().ok().and_then(cookie_value) {
                self.token = if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                };
            }
        }
    }
}

/// Value of the session cookie in a raw Set-Cookie line, if that is the
/// cookie being set
fn cookie_value(raw: &str) -> Option<&str> {
    let (name, rest) = raw.split_once('=')?;
    if name.trim() != SESSION_COOKIE {
        return None;
    }
    Some(rest.split(';').next().unwrap_or("").trim())
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    if response.status().is_success() {
        Ok(response.json().await?)
    } else {
        Err(api_error(response).await)
    }
}

async fn api_error(response: Response) -> ClientError {
    let status = response.status();
    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| body["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| status.to_string());
    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}

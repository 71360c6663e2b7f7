//! REST resource clients for the blog backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, sending credentials so
//! the backend's `sessionid` cookie rides along.
//! Other builds (tests, docs): every call returns `ApiError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! Each call is exactly one round trip. Nothing here retries, caches, or
//! classifies errors; non-2xx responses become `ApiError::Status` carrying the
//! decoded error body so the caller can map it onto form fields.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    Comment, ContentRequest, LoginRequest, Page, Post, Profile, ProfileUpdate, RegisterRequest, User,
};
use crate::config::ClientConfig;

const REGISTER_PATH: &str = "/api/auth/register/";
const LOGIN_PATH: &str = "/api/auth/login/";
const LOGOUT_PATH: &str = "/api/auth/logout/";
const ME_PATH: &str = "/api/auth/me/";
const POSTS_PATH: &str = "/api/posts/";
const OWN_PROFILE_PATH: &str = "/api/profile/";

fn posts_page_endpoint(page: u32, page_size: u32) -> String {
    format!("{POSTS_PATH}?page={page}&page_size={page_size}")
}

fn post_endpoint(id: i64) -> String {
    format!("/api/posts/{id}/")
}

fn post_comments_endpoint(post_id: i64) -> String {
    format!("/api/posts/{post_id}/comments/")
}

fn comment_endpoint(id: i64) -> String {
    format!("/api/comments/{id}/")
}

fn profile_endpoint(user_id: i64) -> String {
    format!("/api/profile/{user_id}/")
}

fn profile_posts_endpoint(user_id: i64, page: u32, page_size: u32) -> String {
    format!("/api/profile/{user_id}/posts/?page={page}&page_size={page_size}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// Handle for the blog REST API rooted at the configured base URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlogApi {
    config: ClientConfig,
}

impl BlogApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self { config: config.clone() }
    }

    fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    // =============================================================
    // Auth
    // =============================================================

    /// Create an account; the backend also opens a session.
    pub async fn register(&self, data: &RegisterRequest) -> Result<User, ApiError> {
        self.fetch(Method::Post, REGISTER_PATH, Some(data)).await
    }

    /// Open a session. Bad credentials come back as 401.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<User, ApiError> {
        self.fetch(Method::Post, LOGIN_PATH, Some(credentials)).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send(Method::Post, LOGOUT_PATH, None::<&()>).await
    }

    /// Current session owner; 401 when there is no session.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.fetch(Method::Get, ME_PATH, None::<&()>).await
    }

    // =============================================================
    // Posts
    // =============================================================

    pub async fn list_posts(&self, page: u32, page_size: u32) -> Result<Page<Post>, ApiError> {
        self.fetch(Method::Get, &posts_page_endpoint(page, page_size), None::<&()>)
            .await
    }

    pub async fn create_post(&self, content: &str) -> Result<Post, ApiError> {
        let body = ContentRequest { content: content.to_owned() };
        self.fetch(Method::Post, POSTS_PATH, Some(&body)).await
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        self.fetch(Method::Get, &post_endpoint(id), None::<&()>).await
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        self.send(Method::Delete, &post_endpoint(id), None::<&()>).await
    }

    // =============================================================
    // Comments
    // =============================================================

    /// Comments for a post, oldest first.
    pub async fn list_comments(&self, post_id: i64) -> Result<Vec<Comment>, ApiError> {
        self.fetch(Method::Get, &post_comments_endpoint(post_id), None::<&()>)
            .await
    }

    pub async fn create_comment(&self, post_id: i64, content: &str) -> Result<Comment, ApiError> {
        let body = ContentRequest { content: content.to_owned() };
        self.fetch(Method::Post, &post_comments_endpoint(post_id), Some(&body))
            .await
    }

    pub async fn delete_comment(&self, id: i64) -> Result<(), ApiError> {
        self.send(Method::Delete, &comment_endpoint(id), None::<&()>).await
    }

    // =============================================================
    // Profiles
    // =============================================================

    pub async fn get_profile(&self, user_id: i64) -> Result<Profile, ApiError> {
        self.fetch(Method::Get, &profile_endpoint(user_id), None::<&()>).await
    }

    /// Partial update of the caller's own profile.
    pub async fn update_profile(&self, bio: &str) -> Result<Profile, ApiError> {
        let body = ProfileUpdate { bio: bio.to_owned() };
        self.fetch(Method::Patch, OWN_PROFILE_PATH, Some(&body)).await
    }

    pub async fn list_profile_posts(&self, user_id: i64, page: u32, page_size: u32) -> Result<Page<Post>, ApiError> {
        self.fetch(Method::Get, &profile_posts_endpoint(user_id, page, page_size), None::<&()>)
            .await
    }

    // =============================================================
    // Transport
    // =============================================================

    /// Send a request and decode the JSON response body.
    async fn fetch<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        #[cfg(feature = "csr")]
        {
            let resp = transport::execute(method, &self.url(path), body).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, self.url(path), body);
            Err(ApiError::Unavailable)
        }
    }

    /// Send a request whose response body is irrelevant.
    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        #[cfg(feature = "csr")]
        {
            transport::execute(method, &self.url(path), body).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, self.url(path), body);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use web_sys::RequestCredentials;

    use super::{ApiError, Method};

    fn builder(method: Method, url: &str) -> RequestBuilder {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        };
        builder
            .credentials(RequestCredentials::Include)
            .header("Accept", "application/json")
    }

    /// Run one request; non-2xx responses become `ApiError::Status`.
    pub(super) async fn execute<B>(method: Method, url: &str, body: Option<&B>) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let builder = builder(method, url);
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let raw = resp.text().await.unwrap_or_default();
        leptos::logging::warn!("{method:?} {url} failed: {status}");
        Err(ApiError::from_status(status, &raw))
    }
}

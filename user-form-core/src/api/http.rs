//! `reqwest` implementation of [`UserApi`]

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::UserApi;
use crate::error::{ApiError, ApiResult};
use crate::types::{UserId, UserPatch, UserRecord};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Longest response body echoed into the debug log
const MAX_LOG_BODY: usize = 512;

/// JSON client for the users collection
#[derive(Debug, Clone)]
pub struct HttpUserApi {
    client: Client,
    base_url: String,
}

impl HttpUserApi {
    /// Client with no request timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base(base_url.into()),
        }
    }

    /// Client whose requests give up after `timeout`
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: normalize_base(base_url.into()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `/users/{id}` with the id percent-encoded as one path segment
    fn user_url(&self, id: &str) -> String {
        self.url(&format!("/users/{}", urlencoding::encode(id)))
    }

    /// Send, log, and reject non-2xx answers. Returns the body text.
    async fn execute(&self, request: RequestBuilder, method: &str, url: &str) -> ApiResult<String> {
        log::debug!("{method} {url}");

        let response = request.send().await?;
        let status = response.status();
        log::debug!("Response Status: {status}");

        let body = response.text().await.map_err(|e| ApiError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;
        log::debug!("Response Body: {}", truncate_for_log(&body));

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn list_users(&self) -> ApiResult<Vec<UserRecord>> {
        let url = self.url("/users");
        let body = self.execute(self.client.get(&url), "GET", &url).await?;
        parse_json(&body)
    }

    async fn get_user(&self, id: &str) -> ApiResult<UserPatch> {
        let url = self.user_url(id);
        let body = self.execute(self.client.get(&url), "GET", &url).await?;
        parse_json(&body)
    }

    async fn create_user(&self, user: &UserRecord) -> ApiResult<UserRecord> {
        let url = self.url("/users");
        let body = self
            .execute(self.client.post(&url).json(user), "POST", &url)
            .await?;
        parse_json(&body)
    }

    async fn update_user(&self, id: &UserId, user: &UserRecord) -> ApiResult<()> {
        let url = self.user_url(&id.to_string());
        self.execute(self.client.patch(&url).json(user), "PATCH", &url)
            .await
            .map(drop)
    }

    async fn delete_user(&self, id: &UserId) -> ApiResult<()> {
        let url = self.user_url(&id.to_string());
        self.execute(self.client.delete(&url), "DELETE", &url)
            .await
            .map(drop)
    }
}

fn normalize_base(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}

fn parse_json<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {}", truncate_for_log(body));
        ApiError::Parse {
            detail: e.to_string(),
        }
    })
}

fn truncate_for_log(text: &str) -> &str {
    match text.char_indices().nth(MAX_LOG_BODY) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserId;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serve exactly one request with a canned response and hand back what was received.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            tx.send(request).ok();
        });

        (format!("http://{addr}"), rx)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(head_end) = text.find("\r\n\r\n") {
                let content_length = text[..head_end]
                    .lines()
                    .find_map(|l| {
                        let (name, value) = l.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= head_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[tokio::test]
    async fn get_user_decodes_record() {
        let (base, rx) = serve_once(
            "200 OK",
            r#"{"id":42,"name":"Ann","phone":"5551234567","email":"a@b.com","marks1":80,"marks2":90,"marks3":70}"#,
        )
        .await;
        let api = HttpUserApi::new(base);

        let user = api.get_user("42").await.unwrap();

        assert_eq!(user.id, Some(UserId::Number(42)));
        assert_eq!(user.name.as_deref(), Some("Ann"));
        assert_eq!(user.marks3.as_deref(), Some("70"));
        let request = rx.await.unwrap();
        assert!(request.starts_with("GET /users/42 HTTP/1.1"), "{request}");
    }

    #[tokio::test]
    async fn create_user_posts_fields_without_id() {
        let (base, rx) = serve_once("201 Created", r#"{"id":99,"name":"Bo"}"#).await;
        let api = HttpUserApi::new(format!("{base}/"));
        let user = UserRecord {
            name: "Bo".into(),
            ..UserRecord::default()
        };

        let created = api.create_user(&user).await.unwrap();

        assert_eq!(created.id, Some(UserId::Number(99)));
        let request = rx.await.unwrap();
        assert!(request.starts_with("POST /users HTTP/1.1"), "{request}");
        assert!(request.contains(r#""name":"Bo""#));
        assert!(!request.contains(r#""id""#));
    }

    #[tokio::test]
    async fn update_user_patches_by_id() {
        let (base, rx) = serve_once("200 OK", "{}").await;
        let api = HttpUserApi::new(base);
        let user = UserRecord {
            id: Some(UserId::Number(7)),
            name: "Cy".into(),
            ..UserRecord::default()
        };

        api.update_user(&UserId::Number(7), &user).await.unwrap();

        let request = rx.await.unwrap();
        assert!(request.starts_with("PATCH /users/7 HTTP/1.1"), "{request}");
        assert!(request.contains(r#""id":7"#));
    }

    #[tokio::test]
    async fn textual_id_is_one_path_segment() {
        let (base, rx) = serve_once("200 OK", "").await;
        let api = HttpUserApi::new(base);

        api.delete_user(&UserId::from("a/b?c#d")).await.unwrap();

        let request = rx.await.unwrap();
        assert!(request.starts_with("DELETE /users/a%2Fb%3Fc%23d HTTP/1.1"), "{request}");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (base, _rx) = serve_once("404 Not Found", r#"{"error":"missing"}"#).await;
        let api = HttpUserApi::new(base);

        let err = api.get_user("1").await.unwrap_err();

        assert!(
            matches!(&err, ApiError::Status { status: 404, .. }),
            "unexpected error: {err:?}"
        );
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let (base, _rx) = serve_once("200 OK", "not json").await;
        let api = HttpUserApi::new(base);

        let err = api.list_users().await.unwrap_err();

        assert!(matches!(err, ApiError::Parse { .. }), "unexpected error: {err:?}");
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        // Bind then drop so the port is very likely closed.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let api = HttpUserApi::new(format!("http://{addr}"));

        let err = api.delete_user(&UserId::Number(1)).await.unwrap_err();

        assert!(err.is_transport(), "unexpected error: {err:?}");
    }

    #[test]
    fn base_url_trailing_slashes_are_trimmed() {
        let api = HttpUserApi::new("http://localhost:5000//");
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(api.url("/users"), "http://localhost:5000/users");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let long = "é".repeat(MAX_LOG_BODY + 10);
        assert_eq!(truncate_for_log(&long).chars().count(), MAX_LOG_BODY);
        assert_eq!(truncate_for_log("short"), "short");
    }
}

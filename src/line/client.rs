//! LINE Messaging API client: replies to webhook events and pushes reminders
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::debug;
use serde::Serialize;

use crate::core::response::batch_messages;
use crate::core::Message;

/// Sends one user's batched reminders. Called once per user per delivery run.
#[async_trait]
pub trait PushDispatcher: Send + Sync {
    async fn push(&self, user_id: &str, messages: &[Message]) -> Result<()>;
}

/// Answers an inbound webhook event
#[async_trait]
pub trait ReplySender: Send + Sync {
    async fn reply(&self, reply_token: &str, messages: &[Message]) -> Result<()>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRequest<'a> {
    reply_token: &'a str,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct PushRequest<'a> {
    to: &'a str,
    messages: Vec<Message>,
}

#[derive(Clone)]
pub struct LineClient {
    http: reqwest::Client,
    api_base: String,
    access_token: String,
}

impl LineClient {
    pub fn new(api_base: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<()> {
        let url = format!("{}{}", self.api_base, path);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(body)
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await
            .with_context(|| format!("LINE request to {path} failed"))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("LINE API error {status} on {path}: {text}"));
        }
        Ok(())
    }
}

#[async_trait]
impl ReplySender for LineClient {
    async fn reply(&self, reply_token: &str, messages: &[Message]) -> Result<()> {
        // A reply token is single use, so only the first batch can be sent
        let messages = batch_messages(messages).into_iter().next().unwrap_or_default();
        if messages.is_empty() {
            return Ok(());
        }

        self.post(
            "/v2/bot/message/reply",
            &ReplyRequest {
                reply_token,
                messages,
            },
        )
        .await
    }
}

#[async_trait]
impl PushDispatcher for LineClient {
    async fn push(&self, user_id: &str, messages: &[Message]) -> Result<()> {
        let batches = batch_messages(messages);
        let batch_count = batches.len();

        for (index, messages) in batches.into_iter().enumerate() {
            self.post(
                "/v2/bot/message/push",
                &PushRequest {
                    to: user_id,
                    messages,
                },
            )
            .await?;
            debug!("Pushed batch {}/{} to {user_id}", index + 1, batch_count);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct FakeLine {
        requests: Arc<Mutex<Vec<serde_json::Value>>>,
        status: Option<StatusCode>,
    }

    impl FakeLine {
        fn requests(&self) -> Vec<serde_json::Value> {
            self.requests.lock().unwrap().clone()
        }
    }

    async fn record_push(
        State(fake): State<FakeLine>,
        Json(body): Json<serde_json::Value>,
    ) -> StatusCode {
        fake.requests.lock().unwrap().push(body);
        fake.status.unwrap_or(StatusCode::OK)
    }

    /// Serve `fake` on an ephemeral port and return a client pointed at it
    async fn client_for(fake: FakeLine) -> LineClient {
        let app = Router::new()
            .route("/v2/bot/message/push", post(record_push))
            .with_state(fake);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        LineClient::new(format!("http://{addr}"), "token")
    }

    fn texts(request: &serde_json::Value) -> Vec<String> {
        request["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["text"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_push_splits_into_ordered_batches() {
        let fake = FakeLine::default();
        let client = client_for(fake.clone()).await;
        let messages: Vec<Message> = (1..=7).map(|i| Message::text(format!("m{i}"))).collect();

        client.push("U1", &messages).await.unwrap();

        let requests = fake.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r["to"] == "U1"));
        assert_eq!(texts(&requests[0]), ["m1", "m2", "m3", "m4", "m5"]);
        assert_eq!(texts(&requests[1]), ["m6", "m7"]);
    }

    #[tokio::test]
    async fn test_push_stops_at_first_rejected_batch() {
        let fake = FakeLine {
            status: Some(StatusCode::TOO_MANY_REQUESTS),
            ..Default::default()
        };
        let client = client_for(fake.clone()).await;
        let messages: Vec<Message> = (1..=7).map(|i| Message::text(format!("m{i}"))).collect();

        let err = client.push("U1", &messages).await.unwrap_err();

        assert!(err.to_string().contains("429"));
        assert_eq!(fake.requests().len(), 1);
    }

    #[test]
    fn test_reply_request_shape() {
        let body = ReplyRequest {
            reply_token: "rt",
            messages: vec![Message::text("登録しました")],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "replyToken": "rt",
                "messages": [{"type": "text", "text": "登録しました"}],
            })
        );
    }

    #[test]
    fn test_push_request_shape() {
        let body = PushRequest {
            to: "U1",
            messages: vec![Message::text("a"), Message::text("b")],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "to": "U1",
                "messages": [{"type": "text", "text": "a"}, {"type": "text", "text": "b"}],
            })
        );
    }

    #[test]
    fn test_api_base_trailing_slash_trimmed() {
        let client = LineClient::new("http://localhost:9000/", "token");
        assert_eq!(client.api_base, "http://localhost:9000");
    }
}

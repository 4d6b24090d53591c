use reqwest::{Client, StatusCode, header::HeaderMap};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{Dispatch, debug, error, instrument::WithSubscriber};

use crate::error::SendError;
use crate::message::Message;

/// Public HipChat API host.
pub const DEFAULT_SERVER: &str = "https://api.hipchat.com";

/// Where and how to post.
#[derive(Debug, Clone)]
pub struct SenderConfig {
    /// Scheme and host, e.g. `https://api.hipchat.com`.
    pub server: String,
    pub token: String,
    pub room: u64,
    /// Skip TLS validation. Not implemented; sending always fails when set.
    pub insecure: bool,
}

/// Result of a notification the service accepted.
#[derive(Debug)]
pub struct Delivery {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

/// Posts notifications to a single room.
pub struct Sender {
    client: Client,
    config: SenderConfig,
    dispatch: Dispatch,
}

impl Sender {
    /// Creates a sender that logs through `dispatch`.
    pub fn new(config: SenderConfig, dispatch: Dispatch) -> Result<Self, SendError> {
        let client = Client::builder().build().map_err(SendError::Request)?;

        Ok(Self {
            client,
            config,
            dispatch,
        })
    }

    pub fn notification_url(&self) -> String {
        format!(
            "{}/v2/room/{}/notification",
            self.config.server.trim_end_matches('/'),
            self.config.room
        )
    }

    /// Posts `message` to the room. Only 200 and 204 count as success.
    pub async fn send(&self, message: &Message) -> Result<Delivery, SendError> {
        self.post(message)
            .with_subscriber(self.dispatch.clone())
            .await
    }

    async fn post(&self, message: &Message) -> Result<Delivery, SendError> {
        let body = serde_json::to_vec(message).map_err(SendError::Encode)?;

        if self.config.insecure {
            // Needs a client built with a custom TLS verifier.
            return Err(SendError::InsecureNotImplemented);
        }

        let url = self.notification_url();
        let request = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .bearer_auth(&self.config.token)
            .body(body)
            .build()
            .map_err(SendError::Request)?;

        debug!(%url, room = self.config.room, "posting notification");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(SendError::Transport)?;

        let status = response.status();
        let headers = response.headers().clone();
        let entity = response.text().await.map_err(SendError::Transport)?;

        match status {
            StatusCode::OK | StatusCode::NO_CONTENT => {
                debug!("Success {status}; response headers:");
                for (name, value) in &headers {
                    debug!("{name} := {value:?}");
                }
                Ok(Delivery { status, headers })
            }
            _ => {
                error!("POST failed: {status}\n{entity}");
                Err(SendError::PostFailed {
                    status,
                    body: entity,
                })
            }
        }
    }
}

/// Reads the whole message from `input`.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub async fn read_message<R>(mut input: R) -> Result<String, SendError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    input
        .read_to_end(&mut buf)
        .await
        .map_err(SendError::ReadInput)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

use reqwest::StatusCode;
use thiserror::Error;

/// Ways a notification can fail to reach a room.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("could not read message: {0}")]
    ReadInput(#[source] std::io::Error),

    #[error("could not build request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("could not encode message: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with something other than 200 or 204.
    #[error("posting message failed: {status}: {body}")]
    PostFailed { status: StatusCode, body: String },

    #[error("--insecure is not yet implemented")]
    InsecureNotImplemented,
}

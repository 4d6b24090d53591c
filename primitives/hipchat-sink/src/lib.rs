//! HipChat Sink - Room Notification Poster
//!
//! Posts a single notification to a HipChat room through the v2 REST API.
//! Plain-text input is escaped and its URLs are linked before sending;
//! input marked as HTML is sent unchanged.
//!
//! # Usage
//!
//! ```bash
//! # Message from an argument
//! hipchat send --token "$TOKEN" --room 1234 --message "deployed http://ci.example.com/42"
//!
//! # Message from stdin, token and room from the environment
//! export HIPCHAT_TOKEN=... HIPCHAT_ROOM_ID=1234
//! make test 2>&1 | tail -n 20 | hipchat send --color red --notify
//!
//! # Pre-formatted HTML
//! hipchat send --html -m "<b>release</b> is out"
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod message;
pub mod sender;

pub use config::{Cli, Command, SendArgs};
pub use error::SendError;
pub use message::{Message, MessageFormat};
pub use sender::{Delivery, Sender, SenderConfig, read_message};

use tokio::io::AsyncRead;
use tracing::Dispatch;

/// Runs `hipchat send`: reads the message, renders it and posts it.
///
/// `input` is only read when no message was given on the command line.
pub async fn run<R>(args: &SendArgs, dispatch: Dispatch, input: R) -> Result<Delivery, SendError>
where
    R: AsyncRead + Unpin,
{
    let text = match &args.message {
        Some(text) => text.clone(),
        None => read_message(input).await?,
    };

    let body = args.input_format().render(&text);
    let message = args.build_message(body);

    let sender = Sender::new(args.sender_config(), dispatch)?;
    sender.send(&message).await
}

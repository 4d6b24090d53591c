use clap::{Args, Parser, Subcommand};
use html_format::InputFormat;

use crate::message::{DEFAULT_COLOR, Message};
use crate::sender::{DEFAULT_SERVER, SenderConfig};

/// Command-line client for the HipChat v2 API.
#[derive(Parser, Debug)]
#[command(name = "hipchat", version = "1.0.0")]
#[command(about = "Talk to the hipchat v2 API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send a message to a room.
    Send(SendArgs),
}

/// Options for `hipchat send`.
#[derive(Args, Debug, Clone)]
pub struct SendArgs {
    /// Enable debug messages.
    #[arg(short, long)]
    pub debug: bool,

    /// API token.
    #[arg(short, long, env = "HIPCHAT_TOKEN")]
    pub token: String,

    /// Room ID.
    #[arg(short, long, env = "HIPCHAT_ROOM_ID")]
    pub room: u64,

    /// From name.
    #[arg(short, long, env = "HIPCHAT_FROM")]
    pub from: Option<String>,

    /// Message color (yellow, red, green, purple, gray or random).
    #[arg(short, long, env = "HIPCHAT_COLOR", default_value = DEFAULT_COLOR)]
    pub color: String,

    /// The message to send (default: from stdin).
    #[arg(short, long)]
    pub message: Option<String>,

    /// Trigger notification for people in the room.
    #[arg(short, long)]
    pub notify: bool,

    /// Don't validate SSL credentials.
    #[arg(short = 'k', long)]
    pub insecure: bool,

    /// Input is already in HTML format; don't transform.
    #[arg(long)]
    pub html: bool,

    /// API server base URL.
    #[arg(long, env = "HIPCHAT_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,
}

impl SendArgs {
    pub fn input_format(&self) -> InputFormat {
        if self.html {
            InputFormat::Html
        } else {
            InputFormat::Plain
        }
    }

    pub fn sender_config(&self) -> SenderConfig {
        SenderConfig {
            server: self.server.clone(),
            token: self.token.clone(),
            room: self.room,
            insecure: self.insecure,
        }
    }

    /// Wraps an already rendered HTML body with the options from the command line.
    pub fn build_message(&self, body: impl Into<String>) -> Message {
        Message::html(body)
            .with_from(self.from.clone())
            .with_color(self.color.as_str())
            .with_notify(self.notify)
    }
}

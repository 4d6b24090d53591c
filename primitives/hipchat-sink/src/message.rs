use serde::Serialize;

/// Color used when none is given.
pub const DEFAULT_COLOR: &str = "yellow";

/// Wire marker telling the service how to interpret `message`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    #[default]
    Html,
}

/// Body of a room notification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Sender display name. Left off the wire when missing or empty.
    #[serde(skip_serializing_if = "no_sender")]
    pub from: Option<String>,
    pub message: String,
    /// Display hint such as "yellow" or "red". Not validated here.
    pub color: String,
    pub message_format: MessageFormat,
    pub notify: bool,
}

fn no_sender(from: &Option<String>) -> bool {
    from.as_deref().is_none_or(str::is_empty)
}

impl Message {
    /// Creates a message with an HTML body and default settings.
    pub fn html(body: impl Into<String>) -> Self {
        Self {
            from: None,
            message: body.into(),
            color: DEFAULT_COLOR.to_string(),
            message_format: MessageFormat::Html,
            notify: false,
        }
    }

    pub fn with_from(mut self, from: Option<String>) -> Self {
        self.from = from;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_notify(mut self, notify: bool) -> Self {
        self.notify = notify;
        self
    }
}

//! Outbound message payloads for the group robot webhook.
//!
//! Each variant fixes one JSON shape accepted by the endpoint. The enum is
//! internally tagged on `msgtype`, so a `Text` message encodes as
//! `{"msgtype":"text","text":{...}}` and a `Markdown` message as
//! `{"msgtype":"markdown","markdown":{...}}`.

use serde::Serialize;
use serde_json::Value;

/// Body of a `text` message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBody {
    /// Plain text content
    pub content: String,
    /// User ids to mention (`@all` mentions everyone)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mentioned_list: Vec<String>,
    /// Phone numbers to mention
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mentioned_mobile_list: Vec<String>,
}

/// Body of a `markdown` message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownBody {
    pub content: String,
}

/// A message ready to be posted to the webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "msgtype", rename_all = "lowercase")]
pub enum OutboundMessage {
    Text { text: TextBody },
    Markdown { markdown: MarkdownBody },
}

impl OutboundMessage {
    /// Creates a text message without mentions
    pub fn text(content: impl Into<String>) -> Self {
        OutboundMessage::Text {
            text: TextBody {
                content: content.into(),
                mentioned_list: Vec::new(),
                mentioned_mobile_list: Vec::new(),
            },
        }
    }

    /// Creates a markdown message
    pub fn markdown(content: impl Into<String>) -> Self {
        OutboundMessage::Markdown {
            markdown: MarkdownBody {
                content: content.into(),
            },
        }
    }

    /// Sets the user ids mentioned by a text message.
    ///
    /// Has no effect on markdown messages, which cannot carry mentions.
    pub fn with_mentioned_users<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let OutboundMessage::Text { text } = &mut self {
            text.mentioned_list = users.into_iter().map(Into::into).collect();
        }
        self
    }

    /// Sets the phone numbers mentioned by a text message.
    ///
    /// Has no effect on markdown messages.
    pub fn with_mentioned_phones<I, S>(mut self, phones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let OutboundMessage::Text { text } = &mut self {
            text.mentioned_mobile_list = phones.into_iter().map(Into::into).collect();
        }
        self
    }

    /// Wire name of the message type
    pub fn msgtype(&self) -> &'static str {
        match self {
            OutboundMessage::Text { .. } => "text",
            OutboundMessage::Markdown { .. } => "markdown",
        }
    }

    /// Message content regardless of type
    pub fn content(&self) -> &str {
        match self {
            OutboundMessage::Text { text } => &text.content,
            OutboundMessage::Markdown { markdown } => &markdown.content,
        }
    }

    /// Encodes the message into the JSON request body
    pub fn encode(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

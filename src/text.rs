//! # Rich Text
//!
//! Recursive rich-text model for announcement messages with a stable JSON
//! encoding: a value is either a plain string, an array (concatenation), or
//! a styled span object with optional `clickEvent` and `extra` children.
//!
//! The encoding round-trips: absent style fields are omitted, not nulled.

use serde::{Deserialize, Serialize};

/// One rich-text node. `#[serde(untagged)]` gives the wire format its open
/// three-shape encoding (string / array / object).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RichText {
    /// Bare string, no styling.
    Plain(String),
    /// Concatenation of children, rendered in order.
    Sequence(Vec<RichText>),
    /// Styled span, optionally carrying a click action and trailing children.
    Span(Box<Span>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlined: Option<bool>,
    #[serde(
        rename = "clickEvent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub click_event: Option<ClickEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub action: ClickAction,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickAction {
    OpenUrl,
    RunCommand,
    SuggestCommand,
    CopyToClipboard,
}

impl RichText {
    pub fn plain(text: impl Into<String>) -> Self {
        RichText::Plain(text.into())
    }

    pub fn span(span: Span) -> Self {
        RichText::Span(Box::new(span))
    }

    /// Flatten to unstyled text for shells that cannot render styling.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_plain(&mut out);
        out
    }

    fn collect_plain(&self, out: &mut String) {
        match self {
            RichText::Plain(s) => out.push_str(s),
            RichText::Sequence(children) => {
                for child in children {
                    child.collect_plain(out);
                }
            }
            RichText::Span(span) => {
                out.push_str(&span.text);
                for child in &span.extra {
                    child.collect_plain(out);
                }
            }
        }
    }
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            ..Span::default()
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn underlined(mut self, underlined: bool) -> Self {
        self.underlined = Some(underlined);
        self
    }

    pub fn on_click(mut self, action: ClickAction, value: impl Into<String>) -> Self {
        self.click_event = Some(ClickEvent {
            action,
            value: value.into(),
        });
        self
    }

    pub fn append(mut self, child: RichText) -> Self {
        self.extra.push(child);
        self
    }
}

impl From<&str> for RichText {
    fn from(s: &str) -> Self {
        RichText::Plain(s.to_string())
    }
}

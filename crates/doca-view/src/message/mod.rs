//! User intents.
//!
//! The closed set of actions an input layer can send to the
//! [`InteractionController`](crate::InteractionController). Any input
//! technology adapts its raw events into these four variants.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Open the blueprint for a document key.
    SelectDocument(String),

    /// Expand or collapse one sidebar category.
    ToggleCategory(String),

    /// Show or hide the sidebar (narrow layout only).
    ToggleSidebar,

    /// The viewport changed to the given width.
    ViewportResize(u32),
}

impl Intent {
    pub fn select_document(key: impl Into<String>) -> Self {
        Self::SelectDocument(key.into())
    }

    pub fn toggle_category(label: impl Into<String>) -> Self {
        Self::ToggleCategory(label.into())
    }

    pub fn toggle_sidebar() -> Self {
        Self::ToggleSidebar
    }

    pub fn viewport_resize(width: u32) -> Self {
        Self::ViewportResize(width)
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectDocument(_) => "select_document",
            Self::ToggleCategory(_) => "toggle_category",
            Self::ToggleSidebar => "toggle_sidebar",
            Self::ViewportResize(_) => "viewport_resize",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectDocument(key) => write!(f, "select:{key}"),
            Self::ToggleCategory(label) => write!(f, "toggle:{label}"),
            Self::ToggleSidebar => write!(f, "sidebar"),
            Self::ViewportResize(width) => write!(f, "resize:{width}"),
        }
    }
}

/// Errors parsing the textual intent form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IntentParseError {
    #[error("empty intent")]
    Empty,

    #[error("unknown intent '{0}' (expected select, toggle, sidebar or resize)")]
    UnknownKind(String),

    #[error("intent '{0}' requires an argument")]
    MissingArgument(&'static str),

    #[error("invalid viewport width '{value}': {source}")]
    InvalidWidth {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parses `select:<key>`, `toggle:<label>`, `sidebar` and `resize:<width>`.
///
/// Everything after the first `:` is the argument, so keys may contain
/// colons. The kind and the argument are both trimmed: `select: White Paper`
/// selects `White Paper`. An empty argument is a valid key or label; only a
/// missing `:` counts as a missing argument.
impl FromStr for Intent {
    type Err = IntentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(IntentParseError::Empty);
        }
        let (kind, argument) = match s.split_once(':') {
            Some((kind, argument)) => (kind.trim(), Some(argument.trim())),
            None => (s.trim(), None),
        };
        match kind.to_ascii_lowercase().as_str() {
            "select" => argument
                .map(Intent::select_document)
                .ok_or(IntentParseError::MissingArgument("select")),
            "toggle" => argument
                .map(Intent::toggle_category)
                .ok_or(IntentParseError::MissingArgument("toggle")),
            "sidebar" => Ok(Intent::ToggleSidebar),
            "resize" => {
                let value = argument.ok_or(IntentParseError::MissingArgument("resize"))?;
                value
                    .parse()
                    .map(Intent::ViewportResize)
                    .map_err(|source| IntentParseError::InvalidWidth {
                        value: value.to_string(),
                        source,
                    })
            }
            _ => Err(IntentParseError::UnknownKind(kind.to_string())),
        }
    }
}

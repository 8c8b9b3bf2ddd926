use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical action token for the gallery intent.
pub const SHOW_GALLERY: &str = "show_gallery";

/// The intent family a message was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandType {
    /// Open the style gallery.
    Gallery,
    /// Not a command; the message belongs to the conversational pipeline.
    None,
}

impl CommandType {
    /// Every intent that can be triggered. `None` is the absence of one.
    pub const ROUTABLE: &'static [CommandType] = &[CommandType::Gallery];

    /// Canonical action token consumed downstream, if this intent has one.
    pub fn action(self) -> Option<&'static str> {
        match self {
            CommandType::Gallery => Some(SHOW_GALLERY),
            CommandType::None => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CommandType::Gallery => "GALLERY",
            CommandType::None => "NONE",
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GALLERY" => Ok(CommandType::Gallery),
            "NONE" => Ok(CommandType::None),
            other => Err(format!("unknown command type: {other}")),
        }
    }
}

/// Outcome of running one inbound message through the gate.
///
/// `normalized_command` carries the canonical action token and is present
/// exactly when `is_command` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub is_command: bool,
    pub command_type: CommandType,
    pub original_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_command: Option<String>,
}

impl DetectionResult {
    /// A conversational (non-command) result.
    pub fn no_match(original: impl Into<String>) -> Self {
        Self {
            is_command: false,
            command_type: CommandType::None,
            original_message: original.into(),
            normalized_command: None,
        }
    }

    /// A command result for `command_type`. Falls back to `no_match` for
    /// intents without an action token.
    pub fn matched(original: impl Into<String>, command_type: CommandType) -> Self {
        match command_type.action() {
            Some(action) => Self {
                is_command: true,
                command_type,
                original_message: original.into(),
                normalized_command: Some(action.to_string()),
            },
            None => Self::no_match(original),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn gallery_maps_to_show_gallery() {
        assert_eq!(CommandType::Gallery.action(), Some("show_gallery"));
        assert_eq!(CommandType::None.action(), None);
    }

    #[test]
    fn parses_command_type_case_insensitively() {
        assert_eq!("gallery".parse::<CommandType>(), Ok(CommandType::Gallery));
        assert_eq!(" NONE ".parse::<CommandType>(), Ok(CommandType::None));
        assert!("styles".parse::<CommandType>().is_err());
    }

    #[test]
    fn matched_result_serializes_with_action() {
        let result = DetectionResult::matched("/gallery", CommandType::Gallery);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "isCommand": true,
                "commandType": "GALLERY",
                "originalMessage": "/gallery",
                "normalizedCommand": "show_gallery"
            })
        );
    }

    #[test]
    fn no_match_omits_normalized_command() {
        let value = serde_json::to_value(DetectionResult::no_match("ciao")).unwrap();
        assert_eq!(value["isCommand"], false);
        assert_eq!(value["commandType"], "NONE");
        assert!(value.get("normalizedCommand").is_none());
    }

    #[test]
    fn matching_none_degrades_to_no_match() {
        let result = DetectionResult::matched("x", CommandType::None);
        assert!(!result.is_command);
        assert_eq!(result.normalized_command, None);
    }
}

//! Viewer commands embedded in assistant replies.
//!
//! The text-generation collaborator appends a block such as
//! `COMMANDS: [{"name": "isolate_elements", "params": {"query": "toit"}}]`
//! to its answer. Only that block is read here.

use crate::error::CommandError;
use crate::model::NodeId;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

const MARKER: &str = "commands:";
const DEFAULT_COLOR: &str = "#ff0000";

/// A command as found in the reply, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCommand {
    pub name: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueryParams {
    #[serde(default, alias = "criteria")]
    pub query: Option<String>,
}

impl QueryParams {
    /// The criterion, unless missing or blank.
    #[must_use]
    pub fn criterion(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColorParams {
    #[serde(default, alias = "criteria")]
    pub query: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
}

impl ColorParams {
    /// The criterion, unless missing or blank.
    #[must_use]
    pub fn criterion(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PropertiesParams {
    #[serde(default, rename = "elementId", alias = "dbId")]
    pub element_id: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Measure,
    Section,
}

/// Every command the assistant may issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Isolate(QueryParams),
    Hide(QueryParams),
    ZoomTo(QueryParams),
    Search(QueryParams),
    Count(QueryParams),
    ChangeColor(ColorParams),
    ShowAll,
    ModelInfo,
    Properties(PropertiesParams),
    Activate(Tool),
}

impl Command {
    /// Wire name of the command.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Isolate(_) => "isolate_elements",
            Self::Hide(_) => "hide_elements",
            Self::ZoomTo(_) => "zoom_to_elements",
            Self::Search(_) => "search_elements",
            Self::Count(_) => "count_elements",
            Self::ChangeColor(_) => "change_color",
            Self::ShowAll => "show_all_elements",
            Self::ModelInfo => "get_model_info",
            Self::Properties(_) => "get_properties",
            Self::Activate(Tool::Measure) => "measure_distance",
            Self::Activate(Tool::Section) => "create_section",
        }
    }
}

fn params<T: DeserializeOwned>(raw: RawCommand) -> Result<T, CommandError> {
    let value = match raw.params {
        serde_json::Value::Null => serde_json::Value::Object(serde_json::Map::new()),
        other => other,
    };
    serde_json::from_value(value).map_err(|source| CommandError::InvalidParams {
        name: raw.name,
        source,
    })
}

impl TryFrom<RawCommand> for Command {
    type Error = CommandError;

    fn try_from(raw: RawCommand) -> Result<Self, Self::Error> {
        let command = match raw.name.as_str() {
            "isolate_elements" => Self::Isolate(params(raw)?),
            "hide_elements" => Self::Hide(params(raw)?),
            "zoom_to_elements" => Self::ZoomTo(params(raw)?),
            "search_elements" => Self::Search(params(raw)?),
            "count_elements" => Self::Count(params(raw)?),
            "change_color" => Self::ChangeColor(params(raw)?),
            "show_all_elements" => Self::ShowAll,
            "get_model_info" => Self::ModelInfo,
            "get_properties" => Self::Properties(params(raw)?),
            "measure_distance" => Self::Activate(Tool::Measure),
            "create_section" => Self::Activate(Tool::Section),
            _ => return Err(CommandError::Unknown { name: raw.name }),
        };
        Ok(command)
    }
}

/// Extracts every command listed after a `COMMANDS:` marker.
///
/// The marker is matched case-insensitively and must be followed by a JSON
/// array. Blocks that do not parse are skipped.
#[must_use]
pub fn parse_commands(text: &str) -> Vec<RawCommand> {
    let lower = text.to_ascii_lowercase();
    let mut commands = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = lower[cursor..].find(MARKER) {
        let after_marker = cursor + offset + MARKER.len();
        cursor = after_marker;

        let rest = &text[after_marker..];
        let trimmed = rest.trim_start();
        if !trimmed.starts_with('[') {
            continue;
        }
        let start = after_marker + (rest.len() - trimmed.len());

        match parse_array(&text[start..]) {
            Some((items, consumed)) => {
                commands.extend(items);
                cursor = start + consumed;
            }
            None => warn!(block = &text[start..], "failed to parse command block"),
        }
    }

    commands
}

// Tries every `]` in turn as the end of the array, shortest first.
fn parse_array(text: &str) -> Option<(Vec<RawCommand>, usize)> {
    text.match_indices(']').find_map(|(pos, _)| {
        let candidate = &text[..=pos];
        serde_json::from_str::<Vec<RawCommand>>(candidate)
            .ok()
            .map(|items| (items, candidate.len()))
    })
}

/// Viewer theming colour with channels in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const HIGHLIGHT: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 0.0,
        a: 0.5,
    };

    const FALLBACK: Self = Self {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 0.8,
    };

    /// Parses `#rrggbb` (the `#` is optional). Anything else yields red.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Self::FALLBACK;
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_or(0.0, |v| f32::from(v) / 255.0)
        };

        Self {
            r: channel(0),
            g: channel(2),
            b: channel(4),
            a: 0.8,
        }
    }
}

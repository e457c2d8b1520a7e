//! Core type definitions shared by every node variant
//!
//! Key design principles:
//! 1. Identity is a UUID, not a pointer: nodes are owned values
//! 2. Modes and list types are closed enums, never strings
//! 3. Everything here is `Copy` and cheap to pass around

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The closing-type value that makes an element emit its end tag.
/// Any other value suppresses it.
pub const CLOSING: &str = "closing";

/// Node identity
///
/// Assigned once at construction. Clones share it, so a container can hold
/// two entries with the same identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rendering mode of a node
///
/// `View` selects the outer serialization, `Edit` the inner one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    View,
    Edit,
}

impl Mode {
    pub fn is_view(&self) -> bool {
        *self == Mode::View
    }

    pub fn is_edit(&self) -> bool {
        *self == Mode::Edit
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::View => f.write_str("ViewMode"),
            Mode::Edit => f.write_str("EditMode"),
        }
    }
}

/// List marker for `ListElementNode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListType {
    /// `<ul>`
    Unordered,
    /// `<ol>`
    Ordered,
}

impl ListType {
    /// Tag name emitted for this list type
    pub fn tag(&self) -> &'static str {
        match self {
            ListType::Unordered => "ul",
            ListType::Ordered => "ol",
        }
    }

    /// Parse a list marker. Only `"ul"` and `"ol"` are recognised.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ul" => Some(ListType::Unordered),
            "ol" => Some(ListType::Ordered),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_ids_are_unique() {
        assert_ne!(NodeId::new(), NodeId::new());
    }

    #[test]
    fn test_mode_defaults_to_view() {
        assert_eq!(Mode::default(), Mode::View);
        assert!(Mode::default().is_view());
        assert!(!Mode::default().is_edit());
    }

    #[test]
    fn test_list_type_tags() {
        assert_eq!(ListType::from_tag("ul"), Some(ListType::Unordered));
        assert_eq!(ListType::from_tag("ol"), Some(ListType::Ordered));
        assert_eq!(ListType::from_tag("dl"), None);
        assert_eq!(ListType::Ordered.tag(), "ol");
    }

    #[test]
    fn test_mode_serde_is_lowercase() {
        let json = serde_json::to_string(&Mode::Edit).unwrap();
        assert_eq!(json, "\"edit\"");
        let mode: Mode = serde_json::from_str("\"view\"").unwrap();
        assert_eq!(mode, Mode::View);
    }
}

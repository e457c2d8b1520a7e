//! Rendering context - the View / Edit state object
//!
//! The context carries its own mode, independent of any node's. It decides
//! which serialization to produce and whether attribute edits made through
//! it are allowed:
//!
//! ```text
//!            transition_to(Edit)
//!   ┌──────┐ ──────────────────> ┌──────┐
//!   │ View │                     │ Edit │
//!   └──────┘ <────────────────── └──────┘
//!            transition_to(View)
//!
//!   View: render = outer, attribute edits refused
//!   Edit: render = inner, attribute edits applied
//! ```

use crate::error::Result;
use crate::node::{ElementNode, Node};
use crate::types::Mode;
use serde::{Deserialize, Serialize};

/// Context configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    pub initial_mode: Mode,
    pub log_transitions: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            initial_mode: Mode::View,
            log_transitions: true,
        }
    }
}

impl ContextConfig {
    /// Load from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone)]
pub struct HtmlContext {
    config: ContextConfig,
    state: Mode,
}

impl HtmlContext {
    /// Create a context with default config (starts in view mode)
    pub fn new() -> Self {
        Self::with_config(ContextConfig::default())
    }

    pub fn with_config(config: ContextConfig) -> Self {
        let mut context = Self {
            state: config.initial_mode,
            config,
        };
        context.transition_to(context.state);
        context
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    pub fn state(&self) -> Mode {
        self.state
    }

    pub fn transition_to(&mut self, state: Mode) {
        if self.config.log_transitions {
            tracing::info!("Context: transition to {}", state);
        }
        self.state = state;
    }

    /// Outer HTML in view state, inner HTML in edit state
    pub fn render(&self, node: &Node) -> String {
        match self.state {
            Mode::View => node.render_outer(),
            Mode::Edit => node.render_inner(),
        }
    }

    /// Put a node and its whole subtree into view mode. The node's own mode
    /// is not consulted: descendants may differ from it.
    pub fn switch_node_to_view_mode(&self, node: &mut Node) {
        node.set_view_mode();
    }

    /// Put a node and its whole subtree into edit mode
    pub fn switch_node_to_edit_mode(&self, node: &mut Node) {
        node.set_edit_mode();
    }

    /// Add an attribute, only in edit state. Returns whether it was applied.
    pub fn add_attribute(
        &self,
        node: &mut ElementNode,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        if self.state.is_edit() {
            node.add_attribute(key, value);
            true
        } else {
            tracing::warn!("Attributes can only be added in edit mode");
            false
        }
    }

    /// Remove an attribute, only in edit state. Returns whether the edit was
    /// allowed; removing a missing key in edit state still counts.
    pub fn remove_attribute(&self, node: &mut ElementNode, key: &str) -> bool {
        if self.state.is_edit() {
            node.remove_attribute(key);
            true
        } else {
            tracing::warn!("Attributes can only be removed in edit mode");
            false
        }
    }
}

impl Default for HtmlContext {
    fn default() -> Self {
        Self::new()
    }
}

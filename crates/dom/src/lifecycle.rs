//! Node lifecycle hooks
//!
//! A fixed sequence of steps, each overridable. Implementors fill in the
//! steps, `run_lifecycle_hooks` owns the order. The stock implementations
//! only emit diagnostics; nothing they do changes rendered output.

use crate::node::Node;

pub trait LifecycleHooks {
    fn on_created(&self);
    fn on_inserted(&self);
    fn on_removed(&self);
    fn on_styles_applied(&self);
    fn on_class_list_applied(&self);
    fn on_text_rendered(&self);

    /// Run every step, in order
    fn run_lifecycle_hooks(&self) {
        self.on_created();
        self.on_inserted();
        self.on_removed();
        self.on_styles_applied();
        self.on_class_list_applied();
        self.on_text_rendered();
    }
}

/// Hooks for elements and form controls
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementLifecycleHooks;

impl LifecycleHooks for ElementLifecycleHooks {
    fn on_created(&self) {
        tracing::debug!("Element created");
    }

    fn on_inserted(&self) {
        tracing::debug!("Element inserted");
    }

    fn on_removed(&self) {
        tracing::debug!("Element removed");
    }

    fn on_styles_applied(&self) {
        tracing::debug!("Styles applied to element");
    }

    fn on_class_list_applied(&self) {
        tracing::debug!("Class list applied to element");
    }

    fn on_text_rendered(&self) {
        tracing::debug!("Text rendered inside element");
    }
}

/// Hooks for text nodes
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNodeLifecycleHooks;

impl LifecycleHooks for TextNodeLifecycleHooks {
    fn on_created(&self) {
        tracing::debug!("Text node created");
    }

    fn on_inserted(&self) {
        tracing::debug!("Text node inserted");
    }

    fn on_removed(&self) {
        tracing::debug!("Text node removed");
    }

    fn on_styles_applied(&self) {
        tracing::debug!("Styles applied to text node");
    }

    fn on_class_list_applied(&self) {
        tracing::debug!("Class list applied to text node");
    }

    fn on_text_rendered(&self) {
        tracing::debug!("Text node rendered");
    }
}

impl Node {
    /// Hook set matching this node's variant
    pub fn lifecycle_hooks(&self) -> &'static dyn LifecycleHooks {
        match self {
            Node::Text(_) => &TextNodeLifecycleHooks,
            Node::Element(_)
            | Node::List(_)
            | Node::ListItem(_)
            | Node::TextInput(_)
            | Node::Button(_)
            | Node::Select(_) => &ElementLifecycleHooks,
        }
    }

    pub fn run_lifecycle_hooks(&self) {
        self.lifecycle_hooks().run_lifecycle_hooks();
    }
}

//! Light DOM
//!
//! A small in-memory HTML node tree: build it, switch it between view and
//! edit mode, walk it depth- or breadth-first, hand it visitors.
//!
//! ## Core Design
//!
//! ```text
//! TextNode / ElementNode / ... ──into()──> Node (owned tree)
//!                                            │
//!              ┌─────────────────┬───────────┼──────────────┐
//!              ↓                 ↓           ↓              ↓
//!        render_outer/inner   set_mode   depth_first /   accept(visitor)
//!        (HtmlContext)        (cascade)  breadth_first
//! ```
//!
//! - **Closed variant set**: one enum, exhaustive matches, no downcasts
//! - **Single ownership**: containers own their children, no Rc
//! - **Total operations**: absent targets are no-ops, exhausted iterators
//!   return `None`

pub mod context;
pub mod error;
pub mod iter;
pub mod lifecycle;
pub mod node;
pub mod serializer;
pub mod types;
pub mod visitor;

pub use context::{ContextConfig, HtmlContext};
pub use error::{DomError, Result};
pub use iter::{BreadthFirstIterator, DepthFirstIterator, NodeIterator};
pub use lifecycle::{ElementLifecycleHooks, LifecycleHooks, TextNodeLifecycleHooks};
pub use node::*;
pub use types::*;
pub use visitor::{NodeVisitor, RenderVisitor};

//! # valeside_core
//!
//! Editor-independent engine for the Vale prose linter.
//!
//! This crate provides:
//! - Scope selection (whole buffer or the caret's paragraph)
//! - Vale invocation and JSON decoding
//! - Mapping of line/column alerts to buffer regions
//! - The alert registry backing hover lookups
//! - The event trigger table
//!
//! Editors plug in through the [`View`] and [`Host`] traits.
//!
//! ## Example
//!
//! ```rust,ignore
//! use valeside_core::{BufferView, EditorEvent, RecordingHost, ValeContext, ValeSettings, ViewId};
//!
//! let context = ValeContext::new(ValeSettings::resolve(None)?)?;
//! let view = BufferView::new(ViewId(1), text).with_path("README.md").with_syntax("Markdown");
//! let host = RecordingHost::new();
//!
//! context.handle_event(&view, &host, EditorEvent::PreSave);
//! for alert in context.registry().alerts_for(view.id()) {
//!     println!("{}", alert.status_line());
//! }
//! ```

pub mod alert;
pub mod buffer;
pub mod context;
mod error;
pub mod host;
pub mod mapper;
pub mod process;
pub mod region;
pub mod registry;
pub mod scope;
pub mod settings;
pub mod styles;
pub mod template;
pub mod trigger;
pub mod view;

pub use alert::{Alert, AlertMap, MappedAlert, Severity, decode_alerts};
pub use buffer::TextBuffer;
pub use context::{CycleOutcome, EventOutcome, HoverReply, ValeContext};
pub use error::ValeError;
pub use host::{Host, HostCommand, Popup, REGION_LAYER, RecordingHost, RegionStyle};
pub use mapper::{map_alerts, map_region};
pub use process::{Invocation, Invoker, ProcessOutput, SystemInvoker};
pub use region::{Region, ViewId};
pub use registry::{AlertRegistry, Generation};
pub use scope::{ScopeDecision, select_scope, should_restrict};
pub use settings::{AlertLocation, AlertStyle, NO_VALE_ERR, ValeSettings};
pub use styles::{EXTENSION_POINTS, ValeConfig};
pub use template::Templates;
pub use trigger::{EditorEvent, LintMode, LintRequest, Reaction, dispatch};
pub use view::{BufferView, View};

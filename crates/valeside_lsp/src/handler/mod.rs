//! LSP request/notification handlers.

mod commands;
mod documents;
mod files;
mod hover;
mod initialize;
mod render;

pub use commands::{COMMANDS, ValeCommand, parse_command};
pub use documents::{
    handle_did_change, handle_did_close, handle_did_open, handle_did_save, handle_will_save,
};
pub use files::handle_did_change_watched_files;
pub use hover::handle_hover;
pub use initialize::{handle_initialize, handle_initialized, handle_shutdown};
pub use render::replay;

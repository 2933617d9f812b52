//! Subcommand implementations

mod init;
mod lint;
mod lsp;
mod new_rule;
mod styles;

pub use init::run_init;
pub use lint::run_lint;
pub use lsp::run_lsp;
pub use new_rule::run_new_rule;
pub use styles::run_styles;

//! Markdown checkbox task format.
//!
//! - **Symbols**: status table, priority classes, configurable markers
//! - **Codec**: one line ↔ one [`Task`](crate::model::Task)
//! - **Document**: scan a whole document, rewrite a single line
//! - **Recurrence**: parse `every 2 weeks on monday` style phrases
//!
//! Everything here is pure: no file or network access.

mod codec;
mod document;
mod recurrence;
mod symbols;

pub use codec::{LineCodec, default_codec, format_task_line, parse_task_line};
pub use document::{extract_tasks, update_task_line};
pub use recurrence::parse_recurrence;
pub use symbols::{MarkerSet, STATUS_SYMBOLS, is_done_symbol, status_name, status_symbol};

//! Bilingual element search and the viewer commands built on it.

pub mod command;
pub mod dispatch;
pub mod resolver;
pub mod terms;

pub use command::{parse_commands, Command, RawCommand, Rgba, Tool};
pub use dispatch::{execute, CommandOutcome, OutcomeStatus, RecordingViewer, ViewerAction, ViewerActions};
pub use resolver::{bag_matches, record_matches, resolve_query, search_live};
pub use terms::{expand_terms, translations};

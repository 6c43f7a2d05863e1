//! Status bar state for the editor.
//!
//! The [`InfoBar`] shows one thing at a time along the bottom of the screen:
//! an informational message, an error, or a modal single-line prompt. A new
//! prompt displaces an active one as a cancellation, and messages never
//! overwrite a prompt that is waiting for input.
//!
//! Rendering and key dispatch live elsewhere. The event loop routes typed text
//! into [`InfoBar::line_mut`], calls [`InfoBar::notify_edit`] after each edit,
//! and ends the prompt with [`InfoBar::finish_prompt`].

/// Status bar configuration.
pub mod config;
/// The status controller.
pub mod controller;
/// Prompt response history.
pub mod history;
/// Display mode.
pub mod mode;
/// Prompt requests, replies, and hooks.
pub mod prompt;

pub use config::{ConfigError, HistoryConfig, InfobarConfig};
pub use controller::InfoBar;
pub use history::PromptHistory;
pub use mode::InfoMode;
pub use prompt::{DoneHook, EditHook, PromptReply, PromptRequest};
pub use xeno_primitives::{LineBuffer, PromptLine};

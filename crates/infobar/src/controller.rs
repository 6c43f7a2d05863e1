//! The status controller.
//!
//! [`InfoBar`] owns what the status line displays, the hooks of the open
//! prompt, the prompt input line, and the response history.

use std::fmt;

use tracing::{debug, trace, warn};
use xeno_primitives::{EditError, LineBuffer, PromptLine};

use crate::config::InfobarConfig;
use crate::history::PromptHistory;
use crate::mode::InfoMode;
use crate::prompt::{DoneHook, EditHook, PromptHooks, PromptReply, PromptRequest};

/// Status line state: messages, errors, and the single active prompt.
pub struct InfoBar<L = PromptLine> {
	mode: InfoMode,
	line: L,
	hooks: PromptHooks<L>,
	history: PromptHistory,
	gutter_message: bool,
	config: InfobarConfig,
}

impl Default for InfoBar {
	fn default() -> Self {
		Self::new()
	}
}

impl InfoBar {
	/// Creates an idle status bar with default settings.
	pub fn new() -> Self {
		Self::with_config(InfobarConfig::default())
	}

	pub fn with_config(config: InfobarConfig) -> Self {
		Self::with_line(PromptLine::new(), config)
	}
}

impl<L: LineBuffer> InfoBar<L> {
	/// Creates an idle status bar around an existing input line.
	pub fn with_line(line: L, config: InfobarConfig) -> Self {
		Self {
			mode: InfoMode::Idle,
			line,
			hooks: PromptHooks::default(),
			history: PromptHistory::new(),
			gutter_message: false,
			config,
		}
	}

	/// Shows an informational message unless a prompt is open.
	///
	/// Format several values at the call site:
	/// `bar.message(format_args!("{n} lines yanked"))`.
	pub fn message(&mut self, msg: impl fmt::Display) {
		self.show(InfoMode::Message(msg.to_string()), false);
	}

	/// Shows an error message unless a prompt is open.
	pub fn error(&mut self, msg: impl fmt::Display) {
		self.show(InfoMode::Error(msg.to_string()), false);
	}

	/// Shows a message that belongs to a gutter annotation.
	pub fn gutter_message(&mut self, msg: impl fmt::Display) {
		self.show(InfoMode::Message(msg.to_string()), true);
	}

	/// Hides the current message if it came from the gutter.
	pub fn clear_gutter(&mut self) {
		if !self.gutter_message {
			return;
		}
		self.gutter_message = false;
		if self.mode.has_message() {
			trace!(from = self.mode.name(), "infobar: gutter message cleared");
			self.mode = InfoMode::Idle;
		}
	}

	fn show(&mut self, mode: InfoMode, from_gutter: bool) {
		if self.mode.is_prompting() {
			trace!(dropped = mode.name(), "infobar: prompt open, message dropped");
			return;
		}
		trace!(from = self.mode.name(), to = mode.name(), "infobar: show");
		self.mode = mode;
		self.gutter_message = from_gutter;
	}

	/// Opens a prompt.
	///
	/// An open prompt is first finished as canceled, so its completion hook
	/// gets a canceled reply and a torn-down bar before the new prompt is
	/// installed.
	pub fn prompt(
		&mut self,
		label: impl Into<String>,
		prefill: impl Into<String>,
		on_edit: Option<EditHook>,
		on_done: Option<DoneHook<L>>,
	) {
		let request = PromptRequest::new(label)
			.prefill(prefill)
			.with_hooks(on_edit, on_done);
		self.begin_prompt(request);
	}

	/// Opens a prompt described by `request`.
	pub fn begin_prompt(&mut self, request: PromptRequest<L>) {
		// A displaced prompt's hook may itself open a prompt; cancel until none is left.
		while self.mode.is_prompting() {
			debug!(label = self.mode.text(), "infobar: prompt displaced by a new one");
			self.finish_prompt(true);
		}

		let PromptRequest {
			label,
			prefill,
			history,
			on_edit,
			on_done,
		} = request;

		trace!(from = self.mode.name(), %label, "infobar: prompt opened");
		if let Some(category) = &history {
			self.history.set_cursor(self.history.len(category));
		}
		self.mode = InfoMode::Prompt(label);
		self.hooks = PromptHooks {
			on_edit,
			on_done,
			history,
		};

		let start = self.line.start();
		if let Err(err) = self.line.insert(start, &prefill) {
			warn!(error = %err, "infobar: prompt prefill rejected");
		}
	}

	/// Ends the open prompt, accepted or canceled, and returns the reply.
	///
	/// The reply carries the trimmed input line when accepted, or is an empty
	/// canceled reply. Mode, hooks and the input line are cleared whether or
	/// not a hook was installed, then the completion hook runs with the bar.
	/// Safe to call with no prompt open.
	pub fn finish_prompt(&mut self, canceled: bool) -> PromptReply {
		if self.mode.is_prompting() {
			trace!(canceled, "infobar: prompt finished");
			self.mode = InfoMode::Idle;
		}

		let hooks = std::mem::take(&mut self.hooks);
		let reply = if canceled {
			PromptReply::canceled()
		} else {
			PromptReply::accepted(self.response())
		};

		if let Err(err) = self.clear_line() {
			warn!(error = %err, "infobar: failed to clear prompt line");
		}

		if let Some(category) = &hooks.history
			&& !reply.canceled
		{
			self.remember(category, &reply.response);
		}

		if let Some(on_done) = hooks.on_done {
			on_done(self, reply.clone());
		}
		reply
	}

	/// Returns to idle without touching prompt hooks or the input line.
	///
	/// Unlike [`Self::finish_prompt`], no completion hook runs and the line
	/// keeps its text; a later `finish_prompt` still reaches the old hooks.
	pub fn reset(&mut self) {
		trace!(
			from = self.mode.name(),
			stale_hooks = !self.hooks.is_empty(),
			"infobar: reset"
		);
		self.mode = InfoMode::Idle;
		self.gutter_message = false;
	}

	/// Runs the edit hook with the current input line.
	///
	/// The event loop calls this after each change it makes to the line.
	pub fn notify_edit(&mut self) {
		if !self.mode.is_prompting() {
			return;
		}
		let input = self.input();
		if let Some(on_edit) = self.hooks.on_edit.as_mut() {
			on_edit(&input);
		}
	}

	/// The stored edit hook, for callers that drive it themselves.
	pub fn on_edit_mut(&mut self) -> Option<&mut EditHook> {
		self.hooks.on_edit.as_mut()
	}

	pub fn has_done_hook(&self) -> bool {
		self.hooks.on_done.is_some()
	}

	pub fn mode(&self) -> &InfoMode {
		&self.mode
	}

	/// Displayed text: message, error, or prompt label. Empty when idle.
	pub fn text(&self) -> &str {
		self.mode.text()
	}

	pub fn is_prompting(&self) -> bool {
		self.mode.is_prompting()
	}

	pub fn has_message(&self) -> bool {
		self.mode.has_message()
	}

	pub fn has_error(&self) -> bool {
		self.mode.has_error()
	}

	/// Whether the current message came from a gutter annotation.
	pub fn is_gutter_message(&self) -> bool {
		self.gutter_message
	}

	/// Current text of the prompt input line.
	pub fn input(&self) -> String {
		self.line.line_text(0).unwrap_or_default()
	}

	pub fn line(&self) -> &L {
		&self.line
	}

	/// The prompt input line. Keystrokes are routed here by the event loop.
	pub fn line_mut(&mut self) -> &mut L {
		&mut self.line
	}

	pub fn history(&self) -> &PromptHistory {
		&self.history
	}

	pub fn history_mut(&mut self) -> &mut PromptHistory {
		&mut self.history
	}

	pub fn config(&self) -> &InfobarConfig {
		&self.config
	}

	fn response(&self) -> String {
		let input = self.input();
		if self.config.trim_response {
			input.trim().to_string()
		} else {
			input
		}
	}

	fn clear_line(&mut self) -> Result<(), EditError> {
		let (start, end) = (self.line.start(), self.line.end());
		self.line.replace(start, end, "")
	}

	fn remember(&mut self, category: &str, response: &str) {
		let history = &self.config.history;
		if !history.enabled || response.is_empty() {
			return;
		}
		if history.skip_consecutive_duplicates && self.history.latest(category) == Some(response) {
			return;
		}
		self.history.record(category, response);
		self.history.set_cursor(self.history.len(category));
	}
}

impl<L> fmt::Debug for InfoBar<L> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("InfoBar")
			.field("mode", &self.mode)
			.field("gutter_message", &self.gutter_message)
			.field("has_edit_hook", &self.hooks.on_edit.is_some())
			.field("has_done_hook", &self.hooks.on_done.is_some())
			.field("history", &self.history)
			.finish_non_exhaustive()
	}
}

//! Prompt requests and the hooks a prompt carries while it is open.

use std::fmt;

use xeno_primitives::PromptLine;

use crate::controller::InfoBar;

/// Completion hook. Runs at most once, when the prompt ends.
///
/// The hook gets the status bar after the prompt has been torn down, so it can
/// show a result message or open a follow-up prompt.
pub type DoneHook<L = PromptLine> = Box<dyn FnOnce(&mut InfoBar<L>, PromptReply)>;

/// Edit hook. The event loop runs it after each change to the prompt line.
pub type EditHook = Box<dyn FnMut(&str)>;

/// How a prompt ended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptReply {
	/// Submitted text. Always empty when canceled.
	pub response: String,
	/// Whether the prompt was dismissed without accepting input.
	pub canceled: bool,
}

impl PromptReply {
	pub fn canceled() -> Self {
		Self {
			response: String::new(),
			canceled: true,
		}
	}

	pub fn accepted(response: impl Into<String>) -> Self {
		Self {
			response: response.into(),
			canceled: false,
		}
	}
}

/// A request to open a prompt.
///
/// # Examples
///
/// ```
/// use xeno_infobar::{InfoBar, PromptRequest};
///
/// let mut bar = InfoBar::new();
/// bar.begin_prompt(
/// 	PromptRequest::new("Find:")
/// 		.prefill("needle")
/// 		.history("find")
/// 		.on_done(|bar, reply| bar.message(format_args!("searching for {}", reply.response))),
/// );
/// bar.finish_prompt(false);
/// assert_eq!(bar.text(), "searching for needle");
/// ```
pub struct PromptRequest<L = PromptLine> {
	pub(crate) label: String,
	pub(crate) prefill: String,
	pub(crate) history: Option<String>,
	pub(crate) on_edit: Option<EditHook>,
	pub(crate) on_done: Option<DoneHook<L>>,
}

impl<L> PromptRequest<L> {
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			prefill: String::new(),
			history: None,
			on_edit: None,
			on_done: None,
		}
	}

	/// Text the input line starts with.
	pub fn prefill(mut self, text: impl Into<String>) -> Self {
		self.prefill = text.into();
		self
	}

	/// History category accepted responses are recorded under.
	pub fn history(mut self, category: impl Into<String>) -> Self {
		self.history = Some(category.into());
		self
	}

	pub fn on_edit(mut self, hook: impl FnMut(&str) + 'static) -> Self {
		self.on_edit = Some(Box::new(hook));
		self
	}

	pub fn on_done(mut self, hook: impl FnOnce(&mut InfoBar<L>, PromptReply) + 'static) -> Self {
		self.on_done = Some(Box::new(hook));
		self
	}

	pub(crate) fn with_hooks(
		mut self,
		on_edit: Option<EditHook>,
		on_done: Option<DoneHook<L>>,
	) -> Self {
		self.on_edit = on_edit;
		self.on_done = on_done;
		self
	}
}

impl<L> fmt::Debug for PromptRequest<L> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PromptRequest")
			.field("label", &self.label)
			.field("prefill", &self.prefill)
			.field("history", &self.history)
			.field("on_edit", &self.on_edit.is_some())
			.field("on_done", &self.on_done.is_some())
			.finish()
	}
}

/// Hooks and history category of the prompt most recently opened.
///
/// Kept apart from [`crate::InfoMode`] because [`crate::InfoBar::reset`]
/// leaves them installed.
pub(crate) struct PromptHooks<L> {
	pub(crate) on_edit: Option<EditHook>,
	pub(crate) on_done: Option<DoneHook<L>>,
	pub(crate) history: Option<String>,
}

impl<L> Default for PromptHooks<L> {
	fn default() -> Self {
		Self {
			on_edit: None,
			on_done: None,
			history: None,
		}
	}
}

impl<L> PromptHooks<L> {
	pub(crate) fn is_empty(&self) -> bool {
		self.on_edit.is_none() && self.on_done.is_none() && self.history.is_none()
	}
}

/// What the status bar is currently showing.
///
/// A prompt always wins over a message or error: entering [`InfoMode::Prompt`]
/// replaces whatever was displayed, and messages are dropped while it holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InfoMode {
	/// Nothing displayed.
	#[default]
	Idle,
	/// Informational message.
	Message(String),
	/// Error message.
	Error(String),
	/// Modal prompt with its label.
	Prompt(String),
}

impl InfoMode {
	/// Returns the displayed text: message, error, or prompt label.
	pub fn text(&self) -> &str {
		match self {
			Self::Idle => "",
			Self::Message(text) | Self::Error(text) | Self::Prompt(text) => text,
		}
	}

	/// Nothing is displayed.
	pub fn is_idle(&self) -> bool {
		matches!(self, Self::Idle)
	}

	/// A prompt is waiting for input.
	pub fn is_prompting(&self) -> bool {
		matches!(self, Self::Prompt(_))
	}

	/// An informational message is displayed.
	pub fn has_message(&self) -> bool {
		matches!(self, Self::Message(_))
	}

	/// An error message is displayed.
	pub fn has_error(&self) -> bool {
		matches!(self, Self::Error(_))
	}

	/// Short name used in trace output.
	pub(crate) fn name(&self) -> &'static str {
		match self {
			Self::Idle => "idle",
			Self::Message(_) => "message",
			Self::Error(_) => "error",
			Self::Prompt(_) => "prompt",
		}
	}
}

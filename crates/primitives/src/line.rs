//! Single-line text storage for prompt input.
//!
//! [`LineBuffer`] is the narrow contract the status bar needs from a text
//! store. [`PromptLine`] is the default store: one rope line and a caret.

use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;

use crate::edit::EditError;
use crate::range::{CharIdx, char_len};
use crate::rope::{first_line, has_line_break};

/// Minimal editable-line contract consumed by prompt owners.
pub trait LineBuffer {
	/// First valid position of the line.
	fn start(&self) -> CharIdx;

	/// Position just past the last character of the line.
	fn end(&self) -> CharIdx;

	/// Inserts `text` at `at`.
	fn insert(&mut self, at: CharIdx, text: &str) -> Result<(), EditError>;

	/// Replaces the chars in `start..end` with `text`.
	fn replace(&mut self, start: CharIdx, end: CharIdx, text: &str) -> Result<(), EditError>;

	/// Returns the text of line `index`, or `None` if no such line exists.
	fn line_text(&self, index: usize) -> Option<String>;
}

/// A single editable line with a caret.
#[derive(Debug, Clone, Default)]
pub struct PromptLine {
	text: Rope,
	caret: CharIdx,
}

impl PromptLine {
	/// Creates an empty line.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the full line content.
	pub fn content(&self) -> String {
		first_line(self.text.slice(..))
	}

	/// Returns the line length in chars.
	pub fn len_chars(&self) -> usize {
		self.text.len_chars()
	}

	pub fn is_empty(&self) -> bool {
		self.text.len_chars() == 0
	}

	/// Returns the caret position.
	pub fn caret(&self) -> CharIdx {
		self.caret
	}

	/// Places the caret, clamped to the line.
	pub fn set_caret(&mut self, pos: CharIdx) {
		self.caret = pos.min(self.text.len_chars());
	}

	/// Replaces the whole line and moves the caret to its end.
	pub fn set_content(&mut self, text: &str) -> Result<(), EditError> {
		let end = self.end();
		self.replace(0, end, text)?;
		self.caret = self.text.len_chars();
		Ok(())
	}

	/// Inserts typed text at the caret.
	pub fn insert_at_caret(&mut self, text: &str) -> Result<(), EditError> {
		self.insert(self.caret, text)
	}

	/// Deletes the grapheme before the caret. Returns false at line start.
	pub fn delete_backward(&mut self) -> bool {
		let prev = self.prev_boundary();
		if prev == self.caret {
			return false;
		}
		self.text.remove(prev..self.caret);
		self.caret = prev;
		true
	}

	/// Deletes the grapheme after the caret. Returns false at line end.
	pub fn delete_forward(&mut self) -> bool {
		let next = self.next_boundary();
		if next == self.caret {
			return false;
		}
		self.text.remove(self.caret..next);
		true
	}

	pub fn move_left(&mut self) {
		self.caret = self.prev_boundary();
	}

	pub fn move_right(&mut self) {
		self.caret = self.next_boundary();
	}

	pub fn move_home(&mut self) {
		self.caret = 0;
	}

	pub fn move_end(&mut self) {
		self.caret = self.text.len_chars();
	}

	/// Char offsets at which each grapheme cluster ends.
	fn grapheme_ends(&self) -> Vec<CharIdx> {
		let content = self.content();
		let mut pos = 0;
		content
			.graphemes(true)
			.map(|g| {
				pos += char_len(g);
				pos
			})
			.collect()
	}

	fn prev_boundary(&self) -> CharIdx {
		self.grapheme_ends()
			.into_iter()
			.take_while(|&end| end < self.caret)
			.last()
			.unwrap_or(0)
	}

	fn next_boundary(&self) -> CharIdx {
		self.grapheme_ends()
			.into_iter()
			.find(|&end| end > self.caret)
			.unwrap_or(self.caret)
	}
}

impl TryFrom<&str> for PromptLine {
	type Error = EditError;

	/// Builds a line with the caret at its end.
	fn try_from(text: &str) -> Result<Self, Self::Error> {
		let mut line = Self::new();
		line.insert(0, text)?;
		Ok(line)
	}
}

impl LineBuffer for PromptLine {
	fn start(&self) -> CharIdx {
		0
	}

	fn end(&self) -> CharIdx {
		self.text.len_chars()
	}

	fn insert(&mut self, at: CharIdx, text: &str) -> Result<(), EditError> {
		let len = self.text.len_chars();
		if at > len {
			return Err(EditError::OutOfBounds { pos: at, len });
		}
		if has_line_break(text) {
			return Err(EditError::LineBreak);
		}
		if text.is_empty() {
			return Ok(());
		}

		self.text.insert(at, text);
		if self.caret >= at {
			self.caret += char_len(text);
		}
		Ok(())
	}

	fn replace(&mut self, start: CharIdx, end: CharIdx, text: &str) -> Result<(), EditError> {
		let len = self.text.len_chars();
		if start > end {
			return Err(EditError::InvertedRange { start, end });
		}
		if end > len {
			return Err(EditError::OutOfBounds { pos: end, len });
		}
		if has_line_break(text) {
			return Err(EditError::LineBreak);
		}

		self.text.remove(start..end);
		self.text.insert(start, text);

		let inserted = char_len(text);
		if self.caret >= end {
			self.caret = self.caret - (end - start) + inserted;
		} else if self.caret > start {
			self.caret = start + inserted;
		}
		Ok(())
	}

	fn line_text(&self, index: usize) -> Option<String> {
		(index == 0).then(|| self.content())
	}
}

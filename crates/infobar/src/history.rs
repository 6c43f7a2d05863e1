//! Prompt response history, keyed by category.
//!
//! Each prompt kind (search, save-as, command) keeps its own list. Lists only
//! grow; nothing in the status bar removes entries. Walking through entries
//! is up to the caller, which reads and moves [`PromptHistory::cursor`].

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct PromptHistory {
	entries: HashMap<String, Vec<String>>,
	cursor: usize,
}

impl PromptHistory {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `response` to `category`, creating the category if needed.
	pub fn record(&mut self, category: &str, response: impl Into<String>) {
		self.entries
			.entry(category.to_string())
			.or_default()
			.push(response.into());
	}

	/// Entries of `category`, oldest first.
	pub fn entries(&self, category: &str) -> &[String] {
		self.entries.get(category).map(Vec::as_slice).unwrap_or_default()
	}

	pub fn get(&self, category: &str, index: usize) -> Option<&str> {
		self.entries(category).get(index).map(String::as_str)
	}

	/// Most recent entry of `category`.
	pub fn latest(&self, category: &str) -> Option<&str> {
		self.entries(category).last().map(String::as_str)
	}

	pub fn len(&self, category: &str) -> usize {
		self.entries(category).len()
	}

	/// Returns true when no category holds any entry.
	pub fn is_empty(&self) -> bool {
		self.entries.values().all(Vec::is_empty)
	}

	/// Known categories, in no particular order.
	pub fn categories(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Caller-owned position within the active category.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn set_cursor(&mut self, cursor: usize) {
		self.cursor = cursor;
	}
}

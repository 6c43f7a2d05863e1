use crate::range::CharIdx;

/// Errors raised when an edit cannot be applied to a line buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
	/// The position lies past the end of the line.
	#[error("position {pos} is out of bounds for line of length {len}")]
	OutOfBounds {
		/// Offending position.
		pos: CharIdx,
		/// Line length at the time of the edit.
		len: CharIdx,
	},
	/// The range start lies after its end.
	#[error("range start {start} is after end {end}")]
	InvertedRange {
		/// Range start.
		start: CharIdx,
		/// Range end.
		end: CharIdx,
	},
	/// The inserted text would split the line.
	#[error("line buffers hold a single line; text contains a line break")]
	LineBreak,
}

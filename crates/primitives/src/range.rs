/// A position in the text, measured in characters (not bytes).
///
/// This is the canonical coordinate space for Xeno.
pub type CharIdx = usize;

/// A length or count in the text, measured in characters (not bytes).
///
/// This is distinct from CharIdx to avoid accidentally passing an index
/// where a length is expected or vice versa.
pub type CharLen = usize;

/// Returns the char length of a string slice.
#[inline]
pub fn char_len(text: &str) -> CharLen {
	text.chars().count()
}

/*!
# HTMAttr: Token Lists
*/

use std::fmt;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # List Separator.
///
/// Most multi-value attributes are space-separated; a few (`accept`,
/// `sizes`, `srcset`, etc.) use commas.
pub enum Separator {
	/// # Comma (`, `).
	Comma,

	/// # Space (` `).
	Space,
}

impl fmt::Display for Separator {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Separator {
	#[must_use]
	/// # As Str.
	///
	/// This is the string inserted between tokens when joining.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Comma => ", ",
			Self::Space => " ",
		}
	}

	#[must_use]
	/// # Is Boundary?
	///
	/// Returns `true` if the character splits tokens. For comma lists, only
	/// the comma counts; the whitespace around it is trimmed separately.
	const fn is_boundary(self, c: char) -> bool {
		match self {
			Self::Comma => c == ',',
			Self::Space => c.is_ascii_whitespace(),
		}
	}

	#[must_use]
	/// # Join.
	///
	/// Join the tokens in order. This is a plain join: tokens are not
	/// trimmed, deduplicated, or filtered.
	pub fn join<I, S>(self, tokens: I) -> String
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		let mut out = String::new();
		let mut first = true;
		for t in tokens {
			if first { first = false; }
			else { out.push_str(self.as_str()); }
			out.push_str(t.as_ref());
		}
		out
	}

	#[must_use]
	/// # Normalize.
	///
	/// Like [`Separator::join`], but each token is trimmed and empty tokens
	/// are skipped.
	pub fn normalize<I, S>(self, tokens: I) -> String
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		let mut out = String::new();
		for t in tokens {
			let t = t.as_ref().trim_ascii();
			if t.is_empty() { continue; }
			if ! out.is_empty() { out.push_str(self.as_str()); }
			out.push_str(t);
		}
		out
	}

	/// # Split.
	///
	/// Iterate over the non-empty, trimmed tokens in a joined string.
	pub fn split(self, src: &str) -> impl Iterator<Item=&str> {
		src.split(move |c| self.is_boundary(c))
			.map(str::trim_ascii)
			.filter(|t| ! t.is_empty())
	}
}

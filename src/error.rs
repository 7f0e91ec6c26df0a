/*!
# HTMAttr: Errors
*/

use std::{
	error::Error,
	fmt,
};



#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
/// # Attribute Error.
///
/// Construction is the only place anything in this crate can fail. The
/// numeric and enumeration variants carry the (markup) name of the attribute
/// that rejected its input.
pub enum AttrError {
	/// # Numeric Value Outside the Attribute's Domain.
	OutOfRange(&'static str),

	/// # Random Number Generation Failed.
	Random,

	/// # Token Not in the Attribute's Closed Set.
	UnknownToken(&'static str),
}

impl AsRef<str> for AttrError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for AttrError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.attribute() {
			Some(name) => write!(f, "{} ({name})", self.as_str()),
			None => f.write_str(self.as_str()),
		}
	}
}

impl Error for AttrError {}

impl AttrError {
	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::OutOfRange(_) => "The value is out of range.",
			Self::Random => "Unable to generate random bytes.",
			Self::UnknownToken(_) => "The value is not a recognized token.",
		}
	}

	#[must_use]
	/// # Attribute Name.
	///
	/// Return the name of the attribute responsible for the error, if any.
	pub const fn attribute(self) -> Option<&'static str> {
		match self {
			Self::OutOfRange(name) | Self::UnknownToken(name) => Some(name),
			Self::Random => None,
		}
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_display() {
		assert_eq!(
			AttrError::OutOfRange("span").to_string(),
			"The value is out of range. (span)",
		);
		assert_eq!(
			AttrError::UnknownToken("fetchpriority").to_string(),
			"The value is not a recognized token. (fetchpriority)",
		);
		assert_eq!(
			AttrError::Random.to_string(),
			"Unable to generate random bytes.",
		);
	}

	#[test]
	fn t_attribute() {
		assert_eq!(AttrError::OutOfRange("cols").attribute(), Some("cols"));
		assert_eq!(AttrError::Random.attribute(), None);
	}
}

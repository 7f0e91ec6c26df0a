/*!
# HTMAttr: Tables
*/

use crate::{
	Attribute,
	AttrError,
};
use std::{
	fmt,
	num::NonZeroU32,
};



string_attr! {
	/// # `abbr`
	///
	/// A short label for a header cell.
	Abbr "abbr",
}

list_attr! {
	/// # `headers`
	///
	/// The IDs of the header cells that apply to this cell.
	///
	/// ## Examples
	///
	/// ```
	/// use htmattr::Headers;
	///
	/// assert_eq!(Headers::from(["a", "b"]), "a b");
	/// ```
	Headers "headers" Space,
}

enum_attr! {
	/// # `scope`
	Scope "scope" {
		Row "row",
		Col "col",
		RowGroup "rowgroup",
		ColGroup "colgroup",
	},
}

ranged_attr! {
	/// # `colspan`
	///
	/// ## Examples
	///
	/// ```
	/// use htmattr::{Attribute, ColSpan};
	///
	/// let span = ColSpan::new(2).unwrap();
	/// assert_eq!(span.to_string(), "2");
	/// assert_eq!(span.render().unwrap(), r#"colspan="2""#);
	///
	/// assert!(ColSpan::new(0).is_err());
	/// assert!(ColSpan::new(1001).is_err());
	/// ```
	ColSpan "colspan" u16 { 1 ..= 1000 } = 1,

	/// # `rowspan`
	///
	/// Zero is allowed; it means "to the end of the row group".
	RowSpan "rowspan" u16 { 0 ..= 65534 } = 1,
}



#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # `span`
///
/// The number of columns spanned by a `<col>` or `<colgroup>`. It must be
/// positive.
///
/// ## Examples
///
/// ```
/// use htmattr::{AttrError, Span};
///
/// assert_eq!(Span::new(3).map(Span::get), Ok(3));
/// assert_eq!(Span::new(0), Err(AttrError::OutOfRange("span")));
/// ```
pub struct Span(NonZeroU32);

impl Default for Span {
	#[inline]
	fn default() -> Self { Self(NonZeroU32::MIN) }
}

impl Attribute for Span {
	const NAME: &'static str = "span";
}

impl fmt::Display for Span {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

impl From<NonZeroU32> for Span {
	#[inline]
	fn from(src: NonZeroU32) -> Self { Self(src) }
}

impl From<Span> for u32 {
	#[inline]
	fn from(src: Span) -> Self { src.0.get() }
}

impl TryFrom<i64> for Span {
	type Error = AttrError;

	#[inline]
	fn try_from(src: i64) -> Result<Self, Self::Error> { Self::new(src) }
}

impl Span {
	/// # New.
	///
	/// ## Errors
	///
	/// Returns an error if the value is zero, negative, or too big for a
	/// `u32`.
	pub fn new(value: i64) -> Result<Self, AttrError> {
		u32::try_from(value).ok()
			.and_then(NonZeroU32::new)
			.map(Self)
			.ok_or(AttrError::OutOfRange(Self::NAME))
	}

	#[must_use]
	/// # From Non-Zero.
	///
	/// An infallible alternative to [`Span::new`].
	pub const fn from_nonzero(value: NonZeroU32) -> Self { Self(value) }

	#[must_use]
	/// # Value.
	pub const fn get(self) -> u32 { self.0.get() }
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::Attributes;
	use proptest::prelude::*;

	#[test]
	fn t_headers() {
		let headers = Headers::from(["a", "b"]);
		assert_eq!(headers.to_string(), "a b");
		assert_eq!(headers.render().as_deref(), Some(r#"headers="a b""#));
		assert_eq!(Headers::from("a b"), headers);
	}

	#[test]
	fn t_colspan() {
		let span = ColSpan::new(2).expect("Colspan failed.");
		assert_eq!(span.to_string(), "2");
		assert_eq!(span.render().as_deref(), Some(r#"colspan="2""#));
		assert_eq!(ColSpan::default().get(), 1);
		assert_eq!(ColSpan::new(1000).map(ColSpan::get), Ok(1000));
		for bad in [-1, 0, 1001, i64::MAX] {
			assert_eq!(ColSpan::new(bad), Err(AttrError::OutOfRange("colspan")), "{bad}");
		}
	}

	#[test]
	fn t_rowspan() {
		assert_eq!(RowSpan::new(0).map(RowSpan::get), Ok(0));
		assert_eq!(RowSpan::new(65534).map(u16::from), Ok(65534));
		assert_eq!(RowSpan::new(65535), Err(AttrError::OutOfRange("rowspan")));
		assert_eq!(RowSpan::try_from(-1_i64), Err(AttrError::OutOfRange("rowspan")));
	}

	#[test]
	fn t_span() {
		assert_eq!(Span::default().get(), 1);
		assert_eq!(Span::from_nonzero(NonZeroU32::MAX).to_string(), u32::MAX.to_string());
		assert_eq!(Span::new(i64::from(u32::MAX) + 1), Err(AttrError::OutOfRange("span")));
		assert_eq!(Span::try_from(4_i64).map(u32::from), Ok(4));
	}

	#[test]
	fn t_scope() {
		assert_eq!(Scope::try_from("colgroup"), Ok(Scope::ColGroup));
		assert_eq!(Scope::ColGroup.as_str(), "colgroup");
		assert_eq!(Scope::try_from("table"), Err(AttrError::UnknownToken("scope")));
	}

	#[test]
	fn t_cell() {
		let attrs = Attributes::new()
			.with(&Abbr::from("Qty"))
			.with(&Scope::Col)
			.with(&ColSpan::new(2).expect("Colspan failed."));
		assert_eq!(attrs.render(), r#" abbr="Qty" scope="col" colspan="2""#);
	}

	proptest! {
		#[test]
		fn t_span_non_positive(n in i64::MIN..=0) {
			prop_assert_eq!(Span::new(n), Err(AttrError::OutOfRange("span")));
		}

		#[test]
		fn t_span_positive(n in 1..=i64::from(u32::MAX)) {
			let span = Span::new(n);
			prop_assert!(span.is_ok());
			prop_assert_eq!(span.map(|s| i64::from(s.get())), Ok(n));
		}
	}
}

/*!
# HTMAttr: Text, Lists, and Document Metadata
*/

use crate::AttrError;
use std::borrow::Cow;



string_attr! {
	/// # `charset`
	Charset "charset" {
		UTF_8 "utf-8",
	},

	/// # `cite`
	///
	/// The URL of a quotation's source, or of the explanation for an edit.
	Cite "cite",

	/// # `content`
	///
	/// The value of a `<meta>` element.
	Content "content",

	/// # `datetime`
	///
	/// A machine-readable date and/or time, passed through as-is.
	DateTime "datetime",

	/// # `property`
	///
	/// The RDFa property of a `<meta>`, e.g. Open Graph's `og:title`.
	Property "property" {
		OG_DESCRIPTION "og:description",
		OG_IMAGE "og:image",
		OG_TITLE "og:title",
		OG_URL "og:url",
	},

	/// # `http-equiv`
	HttpEquiv "http-equiv" {
		CONTENT_SECURITY_POLICY "content-security-policy",
		CONTENT_TYPE "content-type",
		DEFAULT_STYLE "default-style",
		REFRESH "refresh",
		X_UA_COMPATIBLE "x-ua-compatible",
	},
}

bool_attr! {
	/// # `noresize`
	///
	/// Deprecated, but still out there. Unlike most booleans, this defaults
	/// to `true`.
	NoResize "noresize" = true,

	/// # `open`
	///
	/// Whether a `<details>` or `<dialog>` is showing.
	Open "open",

	/// # `reversed`
	///
	/// Whether an `<ol>` counts down. Unlike most booleans, this defaults to
	/// `true`.
	Reversed "reversed" = true,

	/// # `shadowrootclonable`
	ShadowRootClonable "shadowrootclonable",

	/// # `shadowrootdelegatesfocus`
	ShadowRootDelegatesFocus "shadowrootdelegatesfocus",

	/// # `shadowrootserializable`
	ShadowRootSerializable "shadowrootserializable",
}

enum_attr! {
	/// # `type` (Ordered List)
	///
	/// The numbering style of an `<ol>`. The lower- and uppercase variants are
	/// distinct, so exact matches win when parsing.
	///
	/// ## Examples
	///
	/// ```
	/// use htmattr::ListType;
	///
	/// assert_eq!("a".parse::<ListType>(), Ok(ListType::LowerAlpha));
	/// assert_eq!("A".parse::<ListType>(), Ok(ListType::UpperAlpha));
	/// assert_eq!(ListType::UpperRoman.as_str(), "I");
	/// ```
	ListType "type" {
		Decimal "1",
		LowerAlpha "a",
		UpperAlpha "A",
		LowerRoman "i",
		UpperRoman "I",
	},

	/// # `shadowrootmode`
	///
	/// Turns a `<template>` into a declarative shadow root.
	///
	/// ## Examples
	///
	/// ```
	/// use htmattr::{Attribute, ShadowRootMode};
	///
	/// assert_eq!(
	///     ShadowRootMode::Open.render().unwrap(),
	///     r#"shadowrootmode="open""#,
	/// );
	/// ```
	ShadowRootMode "shadowrootmode" {
		Open "open",
		Closed "closed",
	},
}

impl Default for ListType {
	#[inline]
	fn default() -> Self { Self::Decimal }
}

number_attr! {
	/// # `start`
	///
	/// The first number of an `<ol>`. Any integer goes, negatives included.
	Start "start" i64,
}

float_attr! {
	/// # `high`
	///
	/// The lower bound of a `<meter>`'s high range. Nothing checks that it
	/// actually exceeds [`Low`].
	///
	/// Any `f64` is accepted as-is, including NaN and the infinities, which
	/// print as `NaN` and `inf`. Those aren't valid HTML numbers; filtering
	/// them is up to the caller.
	High "high",

	/// # `low`
	///
	/// Like [`High`], non-finite values pass straight through.
	Low "low",

	/// # `optimum`
	///
	/// Like [`High`], non-finite values pass straight through.
	Optimum "optimum",
}



string_attr! {
	/// # `size` (Font)
	///
	/// The legacy `<font size>`: an absolute size from one to seven, or a
	/// relative adjustment like `+1` or `-2`.
	///
	/// ## Examples
	///
	/// ```
	/// use htmattr::FontSize;
	///
	/// assert_eq!(FontSize::absolute(3).unwrap(), "3");
	/// assert!(FontSize::absolute(8).is_err());
	/// assert_eq!(FontSize::relative(2), "+2");
	/// assert_eq!(FontSize::relative(-1), "-1");
	/// ```
	FontSize "size",
}

impl FontSize {
	/// # Absolute Size.
	///
	/// ## Errors
	///
	/// Returns an error unless the size is between 1 and 7 (inclusive).
	pub fn absolute(size: i64) -> Result<Self, AttrError> {
		if (1..=7).contains(&size) { Ok(Self(Cow::Owned(size.to_string()))) }
		else { Err(AttrError::OutOfRange("size")) }
	}

	#[must_use]
	/// # Relative Size.
	///
	/// Positive (and zero) adjustments get an explicit `+`.
	pub fn relative(delta: i8) -> Self {
		Self(Cow::Owned(format!("{delta:+}")))
	}
}

/*!
# HTMAttr: Contracts

Every attribute type in this crate implements [`Attribute`]; most also
implement exactly one of the two "shape" traits, [`StringAttribute`] or
[`BooleanAttribute`].
*/

use crate::ser;
use html5ever::Attribute as HtmlAttribute;
use std::{
	borrow::Cow,
	fmt,
};



#[derive(Debug, Clone, Eq, Hash, PartialEq)]
/// # Markup Value.
///
/// How an attribute should appear (or not) inside an opening tag.
pub enum AttrValue<'a> {
	/// # Omitted Entirely.
	///
	/// This is what a `false` boolean attribute looks like.
	Absent,

	/// # Bare Name.
	///
	/// This is what a `true` boolean attribute looks like, e.g. `disabled`.
	Bare,

	/// # Name and Value.
	///
	/// The value here is raw; escaping is the writer's job.
	Text(Cow<'a, str>),
}

impl AttrValue<'_> {
	#[must_use]
	/// # Is Absent?
	pub const fn is_absent(&self) -> bool { matches!(self, Self::Absent) }

	#[must_use]
	/// # Is Bare?
	pub const fn is_bare(&self) -> bool { matches!(self, Self::Bare) }

	#[must_use]
	/// # Value Text.
	///
	/// Returns `None` unless this is a [`AttrValue::Text`].
	pub fn as_str(&self) -> Option<&str> {
		if let Self::Text(v) = self { Some(v) }
		else { None }
	}

	#[must_use]
	/// # Into Owned.
	pub fn into_owned(self) -> AttrValue<'static> {
		match self {
			Self::Absent => AttrValue::Absent,
			Self::Bare => AttrValue::Bare,
			Self::Text(v) => AttrValue::Text(Cow::Owned(v.into_owned())),
		}
	}
}



/// # Attribute.
///
/// The base contract: a fixed markup name, and a canonical string form
/// (`Display`).
///
/// Implementers should override [`Attribute::markup`] when the default (the
/// `Display` output, as text) is not right, e.g. for booleans or to avoid
/// the allocation.
pub trait Attribute: fmt::Display {
	/// # Attribute Name.
	///
	/// This is the name as it appears in markup, which is not always the
	/// same as the type name (`ListType` is `type`, for example).
	const NAME: &'static str;

	#[must_use]
	/// # Markup Value.
	fn markup(&self) -> AttrValue<'_> { AttrValue::Text(Cow::Owned(self.to_string())) }

	#[must_use]
	/// # Attribute Name.
	///
	/// Same as [`Attribute::NAME`], but reachable from an instance.
	fn name(&self) -> &'static str { Self::NAME }

	#[must_use]
	/// # Render.
	///
	/// Write the attribute as it would appear inside an opening tag, e.g.
	/// `colspan="2"` or `disabled`, or `None` if it should be omitted.
	fn render(&self) -> Option<String> { ser::render(Self::NAME, &self.markup()) }

	#[must_use]
	/// # To `html5ever` Attribute.
	///
	/// Bare booleans convert with an empty value; omitted attributes return
	/// `None`.
	fn to_html5ever(&self) -> Option<HtmlAttribute> {
		ser::html5ever_attr(Self::NAME, &self.markup())
	}
}

/// # String Attribute.
///
/// Attributes whose value is simply a string. Construction never fails, and
/// the value is serialized exactly as given.
pub trait StringAttribute: Attribute + From<String> + for<'a> From<&'a str> {
	/// # As Str.
	fn as_str(&self) -> &str;

	/// # Into String.
	fn into_string(self) -> String;
}

/// # Boolean Attribute.
///
/// Attributes whose presence means `true` and whose absence means `false`.
/// When `true`, [`Attribute::markup`] is [`AttrValue::Bare`]; when `false`,
/// [`AttrValue::Absent`]. The `Display` output is simply `true` or `false`.
pub trait BooleanAttribute: Attribute + From<bool> + Copy {
	/// # Value.
	fn get(self) -> bool;
}

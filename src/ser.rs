/*!
# HTMAttr: Serialization

Attribute types know their names and canonical values, but writing them into
actual markup (quoting, escaping, omitting falsey booleans) happens here.
*/

use crate::{
	Attribute,
	AttrValue,
};
use html5ever::{
	Attribute as HtmlAttribute,
	LocalName,
	ns,
	QualName,
};
use indexmap::IndexMap;
use std::fmt;
use tendril::StrTendril;



#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
/// # Quote Type
///
/// If an attribute value contains the same character used for quoting, it has
/// to be encoded, jumping from one to five bytes per occurrence.
///
/// Space can often be saved in such cases by wrapping the value with single
/// quotes instead of the usual double.
enum QuoteKind {
	#[default]
	/// # Double (") Quotes.
	Double,

	/// # Single (') Quotes.
	Single,
}

impl QuoteKind {
	#[must_use]
	/// # For Attribute Value.
	const fn for_value(mut src: &[u8]) -> Self {
		let mut double = 0;
		let mut single = 0;

		while let [n, rest @ ..] = src {
			match *n {
				b'"' => { double += 1; },
				b'\'' => { single += 1; },
				_ => {},
			}
			src = rest;
		}

		// Prefer single if there are fewer of them.
		if single < double { Self::Single }
		// Otherwise stick with the default.
		else { Self::Double }
	}

	#[must_use]
	/// # As Char.
	const fn as_char(self) -> char {
		match self {
			Self::Double => '"',
			Self::Single => '\'',
		}
	}
}



#[derive(Debug, Clone, Default)]
/// # Attribute Set.
///
/// An insertion-ordered collection of rendered attributes, keyed by name,
/// suitable for handing off to whatever is writing the element tag.
///
/// Inserting an attribute that already exists replaces its value in place;
/// inserting one that would be omitted from the markup entirely (a `false`
/// boolean) removes it.
///
/// ## Examples
///
/// ```
/// use htmattr::{Attributes, ColSpan, Disabled, Headers};
///
/// let attrs = Attributes::new()
///     .with(&ColSpan::new(2).unwrap())
///     .with(&Headers::from(["a", "b"]))
///     .with(&Disabled::new(true));
///
/// assert_eq!(attrs.render(), r#" colspan="2" headers="a b" disabled"#);
/// ```
pub struct Attributes(IndexMap<&'static str, AttrValue<'static>>);

impl Eq for Attributes {}

impl PartialEq for Attributes {
	/// # Equality.
	///
	/// Order matters: two sets holding the same pairs in a different order
	/// render differently, so they are not equal.
	fn eq(&self, other: &Self) -> bool {
		self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
	}
}

impl fmt::Display for Attributes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

impl Attributes {
	#[must_use]
	/// # New (Empty).
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # With Attribute.
	///
	/// Builder-style equivalent of [`Attributes::insert`].
	pub fn with<A: Attribute>(mut self, attr: &A) -> Self {
		self.insert(attr);
		self
	}

	/// # Insert Attribute.
	pub fn insert<A: Attribute>(&mut self, attr: &A) {
		match attr.markup().into_owned() {
			AttrValue::Absent => { self.0.shift_remove(A::NAME); },
			value => { self.0.insert(A::NAME, value); },
		}
	}

	/// # Remove Attribute.
	pub fn remove(&mut self, name: &str) -> Option<AttrValue<'static>> {
		self.0.shift_remove(name)
	}
}

impl Attributes {
	#[must_use]
	/// # Contains Attribute?
	pub fn contains(&self, name: &str) -> bool { self.0.contains_key(name) }

	#[must_use]
	/// # Get Value.
	pub fn get(&self, name: &str) -> Option<&AttrValue<'static>> { self.0.get(name) }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// # Iterate.
	pub fn iter(&self) -> impl Iterator<Item=(&'static str, &AttrValue<'static>)> {
		self.0.iter().map(|(k, v)| (*k, v))
	}

	#[must_use]
	/// # Length.
	pub fn len(&self) -> usize { self.0.len() }

	#[must_use]
	/// # Render.
	///
	/// Write each attribute as it would appear inside an opening tag, each
	/// prefixed with a single space.
	pub fn render(&self) -> String {
		let mut out = String::with_capacity(self.0.len() * 16);
		for (k, v) in &self.0 {
			out.push(' ');
			write_attr(&mut out, k, v);
		}
		out
	}

	#[must_use]
	/// # To `html5ever` Attributes.
	pub fn to_html5ever(&self) -> Vec<HtmlAttribute> {
		self.0.iter()
			.filter_map(|(k, v)| html5ever_attr(k, v))
			.collect()
	}
}



#[must_use]
/// # Render One Attribute.
///
/// Returns `None` if the attribute should be left out of the markup.
pub(crate) fn render(name: &str, value: &AttrValue<'_>) -> Option<String> {
	if value.is_absent() { return None; }

	let len = value.as_str().map_or(0, str::len);
	let mut out = String::with_capacity(name.len() + len + 3);
	write_attr(&mut out, name, value);
	Some(out)
}

#[must_use]
/// # To `html5ever` Attribute.
///
/// Bare booleans are given empty values, same as the parser would produce
/// for `<input disabled>`.
pub(crate) fn html5ever_attr(name: &str, value: &AttrValue<'_>) -> Option<HtmlAttribute> {
	let value = match value {
		AttrValue::Absent => return None,
		AttrValue::Bare => StrTendril::new(),
		AttrValue::Text(v) => StrTendril::from_slice(v),
	};

	Some(HtmlAttribute {
		name: QualName::new(None, ns!(), LocalName::from(name)),
		value,
	})
}

/// # Write Attribute.
fn write_attr(out: &mut String, name: &str, value: &AttrValue<'_>) {
	match value {
		AttrValue::Absent => {},
		AttrValue::Bare => { out.push_str(name); },
		AttrValue::Text(v) => {
			out.push_str(name);
			write_esc_attr(out, v);
		},
	}
}

/// # Write Escaped Attr.
///
/// HTML attributes require escaping of `&` and the wrapping character. This
/// will pick the most compact quoting style, and escape accordingly.
///
/// Literal non-breaking spaces are written as `&nbsp;` for clarity.
fn write_esc_attr(out: &mut String, txt: &str) {
	// Easy abort: empty values.
	if txt.is_empty() {
		out.push_str("=\"\"");
		return;
	}

	let quote = QuoteKind::for_value(txt.as_bytes());
	out.push('=');
	out.push(quote.as_char());

	for c in txt.chars() {
		match c {
			'\u{a0}' => { out.push_str("&nbsp;"); },
			'&' => { out.push_str("&amp;"); },
			'\'' if matches!(quote, QuoteKind::Single) => { out.push_str("&#39;"); },
			'"' if matches!(quote, QuoteKind::Double) => { out.push_str("&#34;"); },
			c => { out.push(c); },
		}
	}

	out.push(quote.as_char());
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		Checked,
		ColSpan,
		Disabled,
		Id,
		Title,
	};
	use std::borrow::Cow;

	#[test]
	fn t_quote_kind() {
		for (raw, expected) in [
			("", QuoteKind::Double),
			("hello", QuoteKind::Double),
			("it's", QuoteKind::Double),
			(r#"say "hi""#, QuoteKind::Single),
			(r#"'a' "b""#, QuoteKind::Double),
			(r#"'a' "b" "c""#, QuoteKind::Single),
		] {
			assert_eq!(QuoteKind::for_value(raw.as_bytes()), expected, "{raw}");
		}
	}

	#[test]
	fn t_render() {
		for (value, expected) in [
			("2", r#"title="2""#),
			("", r#"title="""#),
			("Tom & Jerry", r#"title="Tom &amp; Jerry""#),
			(r#"say "hi""#, r#"title='say "hi"'"#),
			("it's", r#"title="it's""#),
			(r#"'a' "b""#, r#"title="'a' &#34;b&#34;""#),
			(r#"'a' "b" "c""#, r#"title='&#39;a&#39; "b" "c"'"#),
			("no\u{a0}break", r#"title="no&nbsp;break""#),
			("¡olé!", r#"title="¡olé!""#),
		] {
			assert_eq!(
				Title::from(value).render().as_deref(),
				Some(expected),
				"{value:?}",
			);
		}
	}

	#[test]
	fn t_render_bool() {
		assert_eq!(Disabled::new(true).render().as_deref(), Some("disabled"));
		assert_eq!(Disabled::new(false).render(), None);
	}

	#[test]
	fn t_set_eq() {
		let a = Attributes::new()
			.with(&Id::from("main"))
			.with(&Title::from("First"));
		let b = Attributes::new()
			.with(&Title::from("First"))
			.with(&Id::from("main"));
		assert_ne!(a, b);
		assert_ne!(a.render(), b.render());

		let c = Attributes::new()
			.with(&Id::from("main"))
			.with(&Title::from("First"));
		assert_eq!(a, c);

		// A replacement keeps the slot, so this still matches.
		let d = Attributes::new()
			.with(&Id::from("other"))
			.with(&Title::from("First"))
			.with(&Id::from("main"));
		assert_eq!(a, d);
		assert_ne!(a, Attributes::new().with(&Id::from("main")));
	}

	#[test]
	fn t_set_order() {
		let mut attrs = Attributes::new();
		assert!(attrs.is_empty());

		attrs.insert(&Id::from("main"));
		attrs.insert(&Checked::new(true));
		attrs.insert(&Title::from("First"));
		assert_eq!(attrs.len(), 3);
		assert_eq!(attrs.render(), r#" id="main" checked title="First""#);

		// Replacement keeps the original position.
		attrs.insert(&Id::from("other"));
		assert_eq!(attrs.render(), r#" id="other" checked title="First""#);
		assert_eq!(
			attrs.get("id"),
			Some(&AttrValue::Text(Cow::Borrowed("other"))),
		);

		// A falsey boolean drops out.
		attrs.insert(&Checked::new(false));
		assert!(! attrs.contains("checked"));
		assert_eq!(attrs.render(), r#" id="other" title="First""#);

		// Removal.
		assert!(attrs.remove("id").is_some());
		assert!(attrs.remove("id").is_none());
		assert_eq!(attrs.to_string(), r#" title="First""#);

		let names: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
		assert_eq!(names, ["title"]);
	}

	#[test]
	fn t_html5ever() {
		let attr = ColSpan::new(3).expect("Colspan failed.")
			.to_html5ever()
			.expect("Missing attribute.");
		assert_eq!(&*attr.name.local, "colspan");
		assert_eq!(attr.name.ns, ns!());
		assert_eq!(&*attr.value, "3");

		let attr = Disabled::new(true).to_html5ever().expect("Missing attribute.");
		assert_eq!(&*attr.name.local, "disabled");
		assert!(attr.value.is_empty());

		assert!(Disabled::new(false).to_html5ever().is_none());

		let all = Attributes::new()
			.with(&Id::from("x"))
			.with(&Disabled::new(true))
			.to_html5ever();
		assert_eq!(all.len(), 2);
		assert_eq!(&*all[0].name.local, "id");
		assert_eq!(&*all[1].name.local, "disabled");
	}
}

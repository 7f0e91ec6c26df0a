/*!
# HTMAttr: `href` Builders

Convenience constructors for the URL schemes that most often get built by
hand, and most often get their percent-encoding wrong.
*/

use super::link::Href;
use percent_encoding::{
	AsciiSet,
	CONTROLS,
	NON_ALPHANUMERIC,
	utf8_percent_encode,
};



/// # Email Addresses.
const ADDRESS: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'@')
	.remove(b'.')
	.remove(b'-')
	.remove(b'_')
	.remove(b'+')
	.remove(b'~');

/// # Query Components.
///
/// The same set `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

/// # Fragments.
const FRAGMENT: &AsciiSet = &CONTROLS
	.add(b' ')
	.add(b'"')
	.add(b'<')
	.add(b'>')
	.add(b'`');



impl Href {
	#[must_use]
	/// # `mailto:` Link.
	///
	/// Multiple recipients are comma-separated. The subject and body, if
	/// present and non-empty, are added as query parameters.
	///
	/// ## Examples
	///
	/// ```
	/// use htmattr::Href;
	///
	/// let href = Href::mailto(["hello@example.com"], Some("Hi there"), None);
	/// assert_eq!(href, "mailto:hello@example.com?subject=Hi%20there");
	/// ```
	pub fn mailto<I, S>(recipients: I, subject: Option<&str>, body: Option<&str>) -> Self
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		let mut out = String::from("mailto:");
		let mut first = true;
		for r in recipients {
			if first { first = false; }
			else { out.push(','); }
			out.extend(utf8_percent_encode(r.as_ref(), ADDRESS));
		}

		let mut sep = '?';
		for (k, v) in [("subject", subject), ("body", body)] {
			if let Some(v) = v && ! v.is_empty() {
				out.push(sep);
				sep = '&';
				out.push_str(k);
				out.push('=');
				out.extend(utf8_percent_encode(v, COMPONENT));
			}
		}

		Self::new(out)
	}

	#[must_use]
	/// # `tel:` Link.
	///
	/// Visual separators are stripped; only digits, `+`, `*` and `#` are
	/// kept.
	pub fn tel(number: &str) -> Self {
		let mut out = String::with_capacity(4 + number.len());
		out.push_str("tel:");
		push_phone(&mut out, number);
		Self::new(out)
	}

	#[must_use]
	/// # `sms:` Link.
	///
	/// The number is cleaned the same way as [`Href::tel`]; the optional
	/// message body is percent-encoded.
	pub fn sms(number: &str, body: Option<&str>) -> Self {
		let mut out = String::with_capacity(4 + number.len());
		out.push_str("sms:");
		push_phone(&mut out, number);

		if let Some(body) = body && ! body.is_empty() {
			out.push_str("?body=");
			out.extend(utf8_percent_encode(body, COMPONENT));
		}

		Self::new(out)
	}

	#[must_use]
	/// # Fragment Link.
	///
	/// Link to an element ID on the same page.
	pub fn fragment(id: &str) -> Self {
		let mut out = String::with_capacity(1 + id.len());
		out.push('#');
		out.extend(utf8_percent_encode(id, FRAGMENT));
		Self::new(out)
	}
}



/// # Push Phone Number.
fn push_phone(out: &mut String, number: &str) {
	out.extend(number.chars().filter(|c| c.is_ascii_digit() || matches!(c, '+' | '*' | '#')));
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::Attribute;

	#[test]
	fn t_mailto() {
		assert_eq!(
			Href::mailto(["a@b.com"], None, None),
			"mailto:a@b.com",
		);
		assert_eq!(
			Href::mailto(["a+tag@b.com", "c@d.org"], Some("Hello World"), Some("Line 1\nLine 2")),
			"mailto:a+tag@b.com,c@d.org?subject=Hello%20World&body=Line%201%0ALine%202",
		);
		assert_eq!(
			Href::mailto(["odd,one?@b.com"], Some(""), Some("Q&A")),
			"mailto:odd%2Cone%3F@b.com?body=Q%26A",
		);
		assert_eq!(
			Href::mailto(Vec::<String>::new(), Some("Don't (panic)!"), None),
			"mailto:?subject=Don't%20(panic)!",
		);

		// Ampersands get escaped again on the way into markup.
		assert_eq!(
			Href::mailto(["a@b.com"], Some("x"), Some("y")).render().as_deref(),
			Some(r#"href="mailto:a@b.com?subject=x&amp;body=y""#),
		);
	}

	#[test]
	fn t_tel() {
		assert_eq!(Href::tel("+1 (555) 123-4567"), "tel:+15551234567");
		assert_eq!(Href::tel("555.1234 #9"), "tel:5551234#9");
		assert_eq!(Href::tel(""), "tel:");
	}

	#[test]
	fn t_sms() {
		assert_eq!(Href::sms("555-1234", None), "sms:5551234");
		assert_eq!(Href::sms("555-1234", Some("")), "sms:5551234");
		assert_eq!(Href::sms("+1 555 1234", Some("On my way!")), "sms:+15551234?body=On%20my%20way!");
	}

	#[test]
	fn t_fragment() {
		assert_eq!(Href::fragment("top"), "#top");
		assert_eq!(Href::fragment("my section"), "#my%20section");
		assert_eq!(Href::fragment("über"), "#%C3%BCber");
	}
}

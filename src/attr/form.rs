/*!
# HTMAttr: Forms

Attributes for `<form>`, `<input>`, `<button>`, `<select>`, `<textarea>` and
the rest of the form-associated elements.
*/

use crate::{
	Attribute,
	AttrError,
	AttrValue,
};
use dactyl::traits::SaturatingFrom;
use std::{
	borrow::Cow,
	fmt,
};



string_attr! {
	/// # `action`
	Action "action",

	/// # `autocomplete`
	///
	/// Autofill hints are open-ended (and combinable, e.g.
	/// `shipping street-address`), so the presets are just the common ones.
	Autocomplete "autocomplete" {
		ON "on",
		OFF "off",
		FULL_NAME "name",
		EMAIL "email",
		USERNAME "username",
		CURRENT_PASSWORD "current-password",
		NEW_PASSWORD "new-password",
		ONE_TIME_CODE "one-time-code",
		TEL "tel",
		STREET_ADDRESS "street-address",
		POSTAL_CODE "postal-code",
		COUNTRY "country",
		CC_NUMBER "cc-number",
	},

	/// # `dirname`
	Dirname "dirname",

	/// # `form`
	///
	/// The ID of the owning `<form>`.
	Form "form",

	/// # `formaction`
	FormAction "formaction",

	/// # `formtarget`
	FormTarget "formtarget" {
		BLANK "_blank",
		PARENT "_parent",
		SELF "_self",
		TOP "_top",
	},

	/// # `label`
	Label "label",

	/// # `list`
	///
	/// The ID of a `<datalist>`.
	List "list",

	/// # `max`
	///
	/// Depending on the input type, this could be a number, a date, a time,
	/// etc., so it is kept as a string. Integers convert directly; floats
	/// convert with `TryFrom`, which rejects `NaN` and infinity.
	Max "max",

	/// # `min`
	///
	/// See [`Max`].
	Min "min",

	/// # `name`
	Name "name",

	/// # `pattern`
	///
	/// A JavaScript regular expression, passed through as-is.
	Pattern "pattern",

	/// # `placeholder`
	Placeholder "placeholder",

	/// # `command`
	///
	/// The action a `<button>` performs on its [`CommandFor`] target. Custom
	/// commands start with `--`.
	///
	/// ## Examples
	///
	/// ```
	/// use htmattr::{Attribute, Command, CommandFor};
	///
	/// assert_eq!(Command::SHOW_MODAL.render().unwrap(), r#"command="show-modal""#);
	/// assert_eq!(CommandFor::from("dlg").render().unwrap(), r#"commandfor="dlg""#);
	/// ```
	Command "command" {
		CLOSE "close",
		HIDE_POPOVER "hide-popover",
		REQUEST_CLOSE "request-close",
		SHOW_MODAL "show-modal",
		SHOW_POPOVER "show-popover",
		TOGGLE_POPOVER "toggle-popover",
	},

	/// # `commandfor`
	///
	/// The ID of the element a [`Command`] is sent to.
	CommandFor "commandfor",

	/// # `popovertarget`
	///
	/// The ID of the popover a button controls.
	PopoverTarget "popovertarget",
}

/// # Numeric Sources for Min/Max.
///
/// Floats must be finite; `NaN` and infinity are not valid HTML numbers.
macro_rules! min_max_from {
	($($ty:ident),+) => ($(
		impl From<i64> for $ty {
			#[inline]
			fn from(src: i64) -> Self { Self(Cow::Owned(src.to_string())) }
		}

		impl TryFrom<f64> for $ty {
			type Error = AttrError;

			fn try_from(src: f64) -> Result<Self, Self::Error> {
				if src.is_finite() { Ok(Self(Cow::Owned(src.to_string()))) }
				else { Err(AttrError::OutOfRange(<Self as Attribute>::NAME)) }
			}
		}
	)+);
}

min_max_from!(Max, Min);

list_attr! {
	/// # `accept`
	///
	/// File types accepted by a file `<input>`: MIME types, wildcards, or
	/// extensions.
	///
	/// ## Examples
	///
	/// ```
	/// use htmattr::{Accept, Attribute};
	///
	/// let accept = Accept::from([".pdf", "image/*"]);
	/// assert_eq!(accept.render().unwrap(), r#"accept=".pdf, image/*""#);
	/// ```
	Accept "accept" Comma {
		AUDIO "audio/*",
		IMAGES "image/*",
		VIDEO "video/*",
	},

	/// # `accept-charset`
	AcceptCharset "accept-charset" Comma {
		UTF_8 "utf-8",
	},

	/// # `for`
	///
	/// The ID(s) of the element(s) a `<label>` or `<output>` refers to.
	For "for" Space,
}

bool_attr! {
	/// # `alpha`
	///
	/// Lets a color `<input>` carry transparency.
	Alpha "alpha",

	/// # `checked`
	Checked "checked",

	/// # `disabled`
	Disabled "disabled",

	/// # `formnovalidate`
	FormNoValidate "formnovalidate",

	/// # `multiple`
	Multiple "multiple",

	/// # `novalidate`
	NoValidate "novalidate",

	/// # `readonly`
	Readonly "readonly",

	/// # `required`
	Required "required",

	/// # `selected`
	Selected "selected",
}

enum_attr! {
	/// # `enctype`
	Enctype "enctype" {
		UrlEncoded "application/x-www-form-urlencoded",
		Multipart "multipart/form-data",
		Plain "text/plain",
	},

	/// # `formenctype`
	///
	/// Overrides the form's [`Enctype`] for a single submit button.
	FormEnctype "formenctype" {
		UrlEncoded "application/x-www-form-urlencoded",
		Multipart "multipart/form-data",
		Plain "text/plain",
	},

	/// # `method`
	Method "method" {
		Get "get",
		Post "post",
		Dialog "dialog",
	},

	/// # `formmethod`
	FormMethod "formmethod" {
		Get "get",
		Post "post",
		Dialog "dialog",
	},

	/// # `type` (Input)
	InputType "type" {
		Button "button",
		Checkbox "checkbox",
		Color "color",
		Date "date",
		DateTimeLocal "datetime-local",
		Email "email",
		File "file",
		Hidden "hidden",
		Image "image",
		Month "month",
		Number "number",
		Password "password",
		Radio "radio",
		Range "range",
		Reset "reset",
		Search "search",
		Submit "submit",
		Tel "tel",
		Text "text",
		Time "time",
		Url "url",
		Week "week",
	},

	/// # `type` (Button)
	ButtonType "type" {
		Submit "submit",
		Reset "reset",
		Button "button",
	},

	/// # `wrap`
	Wrap "wrap" {
		Soft "soft",
		Hard "hard",
		Off "off",
	},

	/// # `capture`
	///
	/// Which camera a file `<input>` should prefer.
	Capture "capture" {
		User "user",
		Environment "environment",
	},

	/// # `colorspace`
	ColorSpace "colorspace" {
		LimitedSrgb "limited-srgb",
		DisplayP3 "display-p3",
	},

	/// # `popovertargetaction`
	PopoverTargetAction "popovertargetaction" {
		Toggle "toggle",
		Show "show",
		Hide "hide",
	},
}

impl Default for ColorSpace {
	#[inline]
	fn default() -> Self { Self::LimitedSrgb }
}

impl Default for PopoverTargetAction {
	#[inline]
	fn default() -> Self { Self::Toggle }
}

impl Default for Enctype {
	#[inline]
	fn default() -> Self { Self::UrlEncoded }
}

impl Default for FormEnctype {
	#[inline]
	fn default() -> Self { Self::UrlEncoded }
}

impl Default for Method {
	#[inline]
	fn default() -> Self { Self::Get }
}

impl Default for FormMethod {
	#[inline]
	fn default() -> Self { Self::Get }
}

impl Default for InputType {
	#[inline]
	fn default() -> Self { Self::Text }
}

impl Default for ButtonType {
	#[inline]
	fn default() -> Self { Self::Submit }
}

impl Default for Wrap {
	#[inline]
	fn default() -> Self { Self::Soft }
}



ranged_attr! {
	/// # `cols`
	///
	/// The visible width of a `<textarea>`, in average character widths.
	Cols "cols" u32 { 1 ..= 4_294_967_295 } = 20,

	/// # `rows`
	///
	/// The visible height of a `<textarea>`, in lines.
	Rows "rows" u32 { 1 ..= 4_294_967_295 } = 2,
}

number_attr! {
	/// # `maxlength`
	MaxLength "maxlength" u32,

	/// # `minlength`
	MinLength "minlength" u32,
}

try_from_signed!(MaxLength u32, MinLength u32);



#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # `size`
///
/// The number of visible options in a `<select>`, or the width of an
/// `<input>` in characters.
///
/// This one is forgiving: anything less than one is bumped up to one.
///
/// ## Examples
///
/// ```
/// use htmattr::Size;
///
/// assert_eq!(Size::new(5).get(), 5);
/// assert_eq!(Size::new(0).get(), 1);
/// assert_eq!(Size::new(-20).get(), 1);
/// ```
pub struct Size(u64);

impl Default for Size {
	#[inline]
	fn default() -> Self { Self(1) }
}

impl Attribute for Size {
	const NAME: &'static str = "size";
}

impl fmt::Display for Size {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

impl From<i64> for Size {
	#[inline]
	fn from(src: i64) -> Self { Self::new(src) }
}

impl From<Size> for u64 {
	#[inline]
	fn from(src: Size) -> Self { src.0 }
}

impl Size {
	#[must_use]
	/// # New.
	pub fn new(value: i64) -> Self { Self(u64::saturating_from(value).max(1)) }

	#[must_use]
	/// # Value.
	pub const fn get(self) -> u64 { self.0 }
}



#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
/// # `step`
///
/// Either the keyword `any`, or a finite, positive number. Numbers only get
/// in through [`Step::new`] (or `TryFrom<f64>`), so a `Step` never holds
/// anything else.
///
/// ## Examples
///
/// ```
/// use htmattr::{AttrError, Step};
///
/// assert_eq!(Step::ANY.to_string(), "any");
/// assert_eq!(Step::new(0.5).unwrap().to_string(), "0.5");
/// assert_eq!(Step::new(0.0), Err(AttrError::OutOfRange("step")));
/// ```
pub struct Step(Option<f64>);

impl Default for Step {
	#[inline]
	fn default() -> Self { Self(Some(1.0)) }
}

impl Attribute for Step {
	const NAME: &'static str = "step";

	fn markup(&self) -> AttrValue<'_> {
		match self.0 {
			None => AttrValue::Text(Cow::Borrowed("any")),
			Some(v) => AttrValue::Text(Cow::Owned(v.to_string())),
		}
	}
}

impl fmt::Display for Step {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0 {
			None => f.write_str("any"),
			Some(v) => fmt::Display::fmt(&v, f),
		}
	}
}

impl TryFrom<f64> for Step {
	type Error = AttrError;

	#[inline]
	fn try_from(src: f64) -> Result<Self, Self::Error> { Self::new(src) }
}

impl Step {
	/// # `any`
	pub const ANY: Self = Self(None);

	/// # New.
	///
	/// ## Errors
	///
	/// Returns an error if the value is zero, negative, `NaN`, or infinite.
	pub fn new(value: f64) -> Result<Self, AttrError> {
		if value.is_finite() && 0.0 < value { Ok(Self(Some(value))) }
		else { Err(AttrError::OutOfRange(Self::NAME)) }
	}

	#[must_use]
	/// # Is Any?
	pub const fn is_any(self) -> bool { self.0.is_none() }

	#[must_use]
	/// # Number.
	///
	/// Returns `None` for `any`.
	pub const fn get(self) -> Option<f64> { self.0 }
}



#[derive(Debug, Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # `value`
///
/// What `value` holds depends on the element: text for an `<input>`, a
/// number for a `<meter>` or `<li>`, and so on. This wrapper accepts anything
/// with a `Display` implementation.
///
/// ## Examples
///
/// ```
/// use htmattr::{Attribute, Value};
///
/// assert_eq!(Value::new(0.75).render().unwrap(), r#"value="0.75""#);
/// assert_eq!(Value::new("Save").render().unwrap(), r#"value="Save""#);
/// ```
pub struct Value<T>(T);

impl<T: fmt::Display> Attribute for Value<T> {
	const NAME: &'static str = "value";
}

impl<T: fmt::Display> fmt::Display for Value<T> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

impl<T> From<T> for Value<T> {
	#[inline]
	fn from(src: T) -> Self { Self(src) }
}

impl<T> Value<T> {
	#[must_use]
	/// # New.
	pub const fn new(value: T) -> Self { Self(value) }

	#[must_use]
	/// # Value.
	pub const fn get(&self) -> &T { &self.0 }

	#[must_use]
	/// # Into Inner.
	pub fn into_inner(self) -> T { self.0 }
}



#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn t_names() {
		assert_eq!(AcceptCharset::NAME, "accept-charset");
		assert_eq!(ButtonType::NAME, "type");
		assert_eq!(Cols::NAME, "cols");
		assert_eq!(For::NAME, "for");
		assert_eq!(FormNoValidate::NAME, "formnovalidate");
		assert_eq!(InputType::NAME, "type");
		assert_eq!(MaxLength::NAME, "maxlength");
		assert_eq!(Readonly::NAME, "readonly");
		assert_eq!(Size::NAME, "size");
		assert_eq!(Step::NAME, "step");
		assert_eq!(Value::<u8>::NAME, "value");
	}

	#[test]
	fn t_lists() {
		assert_eq!(AcceptCharset::from(["utf-8", "iso-8859-1"]), "utf-8, iso-8859-1");
		assert_eq!(AcceptCharset::UTF_8.render().as_deref(), Some(r#"accept-charset="utf-8""#));
		assert_eq!(For::from(["email", "hint"]), "email hint");
		assert_eq!(Accept::IMAGES.with(".pdf"), "image/*, .pdf");

		// Joined and pre-joined input agree.
		assert_eq!(For::from(vec!["a", "b"]), For::from("a b"));
		assert_eq!(
			AcceptCharset::from("utf-8,iso-8859-1"),
			AcceptCharset::from(["utf-8", "iso-8859-1"]),
		);
		assert_eq!(AcceptCharset::from(" utf-8 ,, iso-8859-1 "), "utf-8, iso-8859-1");
		assert_eq!(For::from(String::from("\temail   hint\n")), "email hint");
	}

	#[test]
	fn t_min_max() {
		assert_eq!(Min::from(-3_i64), "-3");
		assert_eq!(Max::try_from(2.5_f64).map(String::from), Ok("2.5".to_owned()));
		assert_eq!(Min::try_from(-0.5_f64).map(String::from), Ok("-0.5".to_owned()));
		for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
			assert_eq!(Max::try_from(bad), Err(AttrError::OutOfRange("max")));
			assert_eq!(Min::try_from(bad), Err(AttrError::OutOfRange("min")));
		}
		assert_eq!(Max::from("2025-12-31").render().as_deref(), Some(r#"max="2025-12-31""#));
	}

	#[test]
	fn t_bool() {
		assert!(! Checked::default().get());
		assert!(Required::from(true).get());
		assert_eq!(Selected::TRUE.render().as_deref(), Some("selected"));
		assert_eq!(Multiple::FALSE.render(), None);
	}

	#[test]
	fn t_enums() {
		assert_eq!(InputType::ALL.len(), 22);
		assert_eq!(InputType::default(), InputType::Text);
		assert_eq!("datetime-local".parse::<InputType>(), Ok(InputType::DateTimeLocal));
		assert_eq!(InputType::Email.render().as_deref(), Some(r#"type="email""#));
		assert_eq!(ButtonType::try_from("text"), Err(AttrError::UnknownToken("type")));
		assert_eq!(Method::try_from("POST"), Ok(Method::Post));
		assert_eq!(FormMethod::Dialog.to_string(), "dialog");
		assert_eq!(Enctype::Multipart.as_str(), "multipart/form-data");
		assert_eq!(FormEnctype::try_from("put"), Err(AttrError::UnknownToken("formenctype")));
		assert_eq!(Wrap::default().to_string(), "soft");
	}

	#[test]
	fn t_invokers() {
		let attrs = crate::Attributes::new()
			.with(&PopoverTarget::from("menu"))
			.with(&PopoverTargetAction::Show);
		assert_eq!(attrs.render(), r#" popovertarget="menu" popovertargetaction="show""#);
		assert_eq!(PopoverTargetAction::default(), PopoverTargetAction::Toggle);

		assert_eq!(Command::REQUEST_CLOSE, "request-close");
		assert_eq!(Command::from("--rotate"), "--rotate");
		assert_eq!(CommandFor::NAME, "commandfor");
	}

	#[test]
	fn t_capture_color() {
		assert_eq!(Capture::try_from("environment"), Ok(Capture::Environment));
		assert_eq!(Capture::try_from("front"), Err(AttrError::UnknownToken("capture")));
		assert_eq!(ColorSpace::default().to_string(), "limited-srgb");
		assert_eq!(ColorSpace::DisplayP3.render().as_deref(), Some(r#"colorspace="display-p3""#));
		assert_eq!(Alpha::TRUE.render().as_deref(), Some("alpha"));
	}

	#[test]
	fn t_cols_rows() {
		assert_eq!(Cols::default().get(), 20);
		assert_eq!(Rows::default().get(), 2);
		assert_eq!(Cols::new(80).map(Cols::get), Ok(80));
		assert_eq!(Cols::new(0), Err(AttrError::OutOfRange("cols")));
		assert_eq!(Rows::new(-1), Err(AttrError::OutOfRange("rows")));
		assert_eq!(Rows::try_from(5_i64).map(|r| r.to_string()), Ok("5".to_owned()));
		assert_eq!(Cols::new(i64::from(u32::MAX)).map(Cols::get), Ok(u32::MAX));
		assert!(Cols::new(i64::from(u32::MAX) + 1).is_err());
	}

	#[test]
	fn t_lengths() {
		assert_eq!(MaxLength::new(280).render().as_deref(), Some(r#"maxlength="280""#));
		assert_eq!(MinLength::try_from(-5_i64), Err(AttrError::OutOfRange("minlength")));
		assert_eq!(MinLength::try_from(0_i64).map(MinLength::get), Ok(0));
	}

	#[test]
	fn t_size() {
		assert_eq!(Size::default().get(), 1);
		assert_eq!(Size::from(12_i64).render().as_deref(), Some(r#"size="12""#));
		assert_eq!(Size::new(i64::MIN).get(), 1);
		assert_eq!(Size::new(i64::MAX).get(), i64::MAX.unsigned_abs());
	}

	#[test]
	fn t_step() {
		assert!(Step::ANY.is_any());
		assert_eq!(Step::ANY.get(), None);
		assert_eq!(Step::default().to_string(), "1");
		assert_eq!(Step::default().get(), Some(1.0));
		assert_eq!(Step::try_from(0.01_f64).map(|s| s.to_string()), Ok("0.01".to_owned()));
		assert_eq!(Step::ANY.render().as_deref(), Some(r#"step="any""#));
		for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
			assert_eq!(Step::new(bad), Err(AttrError::OutOfRange("step")), "{bad}");
		}
	}

	#[test]
	fn t_value() {
		assert_eq!(Value::new(3_u8).to_string(), "3");
		assert_eq!(Value::from("Go").render().as_deref(), Some(r#"value="Go""#));
		assert_eq!(Value::new(String::new()).render().as_deref(), Some(r#"value="""#));
		assert_eq!(Value::new(7_i32).into_inner(), 7);
	}

	proptest! {
		#[test]
		fn t_step_numbers_checked(n in any::<f64>()) {
			// Every numeric step comes through the checked constructor, so
			// whatever it holds is finite and positive.
			if let Ok(step) = Step::try_from(n) {
				let v = step.get();
				prop_assert!(v.is_some_and(|v| v.is_finite() && 0.0 < v));
			}
			else { prop_assert!(! (n.is_finite() && 0.0 < n)); }
		}

		#[test]
		fn t_size_clamps(n in any::<i64>()) {
			let expected = if n < 1 { 1 } else { n.unsigned_abs() };
			prop_assert_eq!(Size::new(n).get(), expected);
		}

		#[test]
		fn t_step_positive(n in 1e-9_f64..1e9_f64) {
			let step = Step::new(n);
			prop_assert_eq!(step.map(Step::get), Ok(Some(n)));
			prop_assert!(! step.is_ok_and(Step::is_any));
			prop_assert!(Step::new(-n).is_err());
		}
	}
}

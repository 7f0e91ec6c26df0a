/*!
# HTMAttr: Global Attributes

These may appear on any HTML element.
*/



string_attr! {
	/// # `accesskey`
	AccessKey "accesskey",

	/// # `id`
	///
	/// No uniqueness or whitespace checks are performed; the document is the
	/// only thing that can know whether an ID is unique.
	Id "id",

	/// # `is`
	///
	/// The name of a customized built-in element.
	Is "is",

	/// # `itemid`
	ItemId "itemid",

	/// # `lang`
	Lang "lang" {
		EN "en",
		EN_US "en-US",
	},

	/// # `nonce`
	///
	/// A cryptographic nonce for Content Security Policy. See
	/// `Nonce::random` (feature `nonce`) for generating one.
	Nonce "nonce",

	/// # `popover`
	///
	/// An empty value is equivalent to `auto`.
	Popover "popover" {
		AUTO "auto",
		HINT "hint",
		MANUAL "manual",
	},

	/// # `slot`
	Slot "slot",

	/// # `style`
	///
	/// Inline CSS, passed through as-is.
	Style "style",

	/// # `title`
	Title "title",
}

list_attr! {
	/// # `class`
	///
	/// ## Examples
	///
	/// ```
	/// use htmattr::{Attribute, Class};
	///
	/// let class = Class::from(["btn", "btn-primary"]);
	/// assert_eq!(class.render().unwrap(), r#"class="btn btn-primary""#);
	/// assert!(class.contains("btn"));
	/// ```
	Class "class" Space,

	/// # `exportparts`
	ExportParts "exportparts" Comma,

	/// # `itemprop`
	ItemProp "itemprop" Space,

	/// # `itemref`
	ItemRef "itemref" Space,

	/// # `itemtype`
	ItemType "itemtype" Space,

	/// # `part`
	Part "part" Space,
}

bool_attr! {
	/// # `autofocus`
	Autofocus "autofocus",

	/// # `hidden`
	Hidden "hidden",

	/// # `inert`
	Inert "inert",

	/// # `itemscope`
	ItemScope "itemscope",
}

enum_attr! {
	/// # `autocorrect`
	Autocorrect "autocorrect" {
		On "on",
		Off "off",
	},

	/// # `autocapitalize`
	Autocapitalize "autocapitalize" {
		Off "off",
		None "none",
		On "on",
		Sentences "sentences",
		Words "words",
		Characters "characters",
	},

	/// # `contenteditable`
	ContentEditable "contenteditable" {
		True "true",
		False "false",
		PlaintextOnly "plaintext-only",
	},

	/// # `dir`
	Dir "dir" {
		Ltr "ltr",
		Rtl "rtl",
		Auto "auto",
	},

	/// # `draggable`
	///
	/// Despite appearances, this is an enumeration, not a boolean attribute;
	/// `draggable="false"` means something.
	Draggable "draggable" {
		True "true",
		False "false",
	},

	/// # `hidden` (Enumerated)
	///
	/// The valued form of `hidden`. Use [`Hidden`] for the plain boolean; this
	/// exists for `hidden="until-found"`.
	///
	/// ## Examples
	///
	/// ```
	/// use htmattr::{Attribute, HiddenState};
	///
	/// assert_eq!(
	///     HiddenState::UntilFound.render().unwrap(),
	///     r#"hidden="until-found""#,
	/// );
	/// ```
	HiddenState "hidden" {
		Hidden "hidden",
		UntilFound "until-found",
	},

	/// # `enterkeyhint`
	EnterKeyHint "enterkeyhint" {
		Enter "enter",
		Done "done",
		Go "go",
		Next "next",
		Previous "previous",
		Search "search",
		Send "send",
	},

	/// # `inputmode`
	InputMode "inputmode" {
		None "none",
		Text "text",
		Decimal "decimal",
		Numeric "numeric",
		Tel "tel",
		Search "search",
		Email "email",
		Url "url",
	},

	/// # `spellcheck`
	Spellcheck "spellcheck" {
		True "true",
		False "false",
	},

	/// # `translate`
	Translate "translate" {
		Yes "yes",
		No "no",
	},

	/// # `writingsuggestions`
	///
	/// An enumeration, like [`Spellcheck`]; `"false"` opts out.
	WritingSuggestions "writingsuggestions" {
		True "true",
		False "false",
	},
}

impl Default for HiddenState {
	#[inline]
	fn default() -> Self { Self::Hidden }
}

number_attr! {
	/// # `tabindex`
	///
	/// Negative values are meaningful (focusable, but not by sequential
	/// navigation), so the full `i32` range is allowed.
	TabIndex "tabindex" i32,
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		Attribute,
		AttrError,
		AttrValue,
		BooleanAttribute,
		StringAttribute,
	};

	#[test]
	fn t_names() {
		assert_eq!(AccessKey::NAME, "accesskey");
		assert_eq!(Class::NAME, "class");
		assert_eq!(ContentEditable::NAME, "contenteditable");
		assert_eq!(ExportParts::NAME, "exportparts");
		assert_eq!(Id::NAME, "id");
		assert_eq!(ItemScope::NAME, "itemscope");
		assert_eq!(TabIndex::NAME, "tabindex");
		assert_eq!(Title::from("whatever").name(), "title");
	}

	#[test]
	fn t_string() {
		let id = Id::from("main-content");
		assert_eq!(id.as_str(), "main-content");
		assert_eq!(id, "main-content");
		assert_eq!(id.to_string(), "main-content");
		assert_eq!(id.render().as_deref(), Some(r#"id="main-content""#));
		assert_eq!(String::from(id.clone()), "main-content");
		assert_eq!(StringAttribute::into_string(id), "main-content");

		assert!(Slot::default().is_empty());
		assert_eq!(Popover::AUTO, "auto");
		assert_eq!(Lang::EN_US.to_string(), "en-US");

		// Presets are conveniences, not limits.
		assert_eq!(Popover::from("whatever").as_str(), "whatever");
	}

	#[test]
	fn t_list() {
		let class = Class::from(["a", "b"]);
		assert_eq!(class, "a b");
		assert_eq!(class.clone().with("c"), "a b c");
		assert_eq!(Class::default().with("c"), "c");
		assert!(class.contains("b"));
		assert!(! class.contains("a b"));

		let joined: Class = vec!["x".to_owned(), "y".to_owned()].into_iter().collect();
		assert_eq!(joined, Class::from("x y"));

		let parts = ExportParts::from(["label", "icon: button-icon"]);
		assert_eq!(parts, "label, icon: button-icon");
		assert_eq!(parts.tokens().collect::<Vec<_>>(), ["label", "icon: button-icon"]);
	}

	#[test]
	fn t_bool() {
		assert!(! Hidden::default().get());
		assert!(Hidden::TRUE.get());
		assert_eq!(Hidden::from(true).markup(), AttrValue::Bare);
		assert_eq!(Hidden::from(false).markup(), AttrValue::Absent);
		assert_eq!(Inert::new(true).to_string(), "true");
		assert_eq!(Inert::new(false).to_string(), "false");
		assert!(bool::from(Autofocus::TRUE));
		assert!(BooleanAttribute::get(ItemScope::new(true)));
	}

	#[test]
	fn t_enum() {
		assert_eq!("ltr".parse::<Dir>(), Ok(Dir::Ltr));
		assert_eq!(" RTL ".parse::<Dir>(), Ok(Dir::Rtl));
		assert_eq!(Dir::try_from("sideways"), Err(AttrError::UnknownToken("dir")));
		assert_eq!(
			ContentEditable::try_from(String::from("plaintext-only")),
			Ok(ContentEditable::PlaintextOnly),
		);
		assert_eq!(Draggable::False.render().as_deref(), Some(r#"draggable="false""#));
		assert_eq!(InputMode::ALL.len(), 8);

		// Every member parses back from its own serialization.
		for &v in Autocapitalize::ALL {
			assert_eq!(v.as_str().parse::<Autocapitalize>(), Ok(v));
		}
	}

	#[test]
	fn t_hidden_state() {
		assert_eq!(HiddenState::NAME, Hidden::NAME);
		assert_eq!(HiddenState::default().render().as_deref(), Some(r#"hidden="hidden""#));
		assert_eq!("until-found".parse::<HiddenState>(), Ok(HiddenState::UntilFound));
		assert_eq!(HiddenState::try_from("until"), Err(AttrError::UnknownToken("hidden")));
	}

	#[test]
	fn t_writing_aids() {
		assert_eq!(Autocorrect::NAME, "autocorrect");
		assert_eq!(Autocorrect::try_from("off"), Ok(Autocorrect::Off));
		assert_eq!(
			WritingSuggestions::False.render().as_deref(),
			Some(r#"writingsuggestions="false""#),
		);
		assert_eq!(
			WritingSuggestions::try_from("no"),
			Err(AttrError::UnknownToken("writingsuggestions")),
		);
	}

	#[test]
	fn t_tabindex() {
		assert_eq!(TabIndex::new(-1).to_string(), "-1");
		assert_eq!(TabIndex::from(3_i32).render().as_deref(), Some(r#"tabindex="3""#));
		assert_eq!(i32::from(TabIndex::default()), 0);
	}
}

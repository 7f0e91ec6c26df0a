/*!
# HTMAttr: Embedded Content

Images, audio/video, tracks, frames, image maps.
*/

use std::borrow::Cow;



string_attr! {
	/// # `allow`
	///
	/// An `<iframe>` permissions policy.
	Allow "allow",

	/// # `alt`
	///
	/// An empty `alt` is meaningful (decorative image), so it is allowed and
	/// rendered as `alt=""`.
	Alt "alt",

	/// # `coords`
	Coords "coords",

	/// # `data`
	///
	/// The resource URL of an `<object>`.
	Data "data",

	/// # `poster`
	Poster "poster",

	/// # `preload`
	///
	/// ## Examples
	///
	/// ```
	/// use htmattr::{Attribute, Preload};
	///
	/// assert_eq!(Preload::METADATA.render().unwrap(), r#"preload="metadata""#);
	/// ```
	Preload "preload" {
		AUTO "auto",
		METADATA "metadata",
		NONE "none",
	},

	/// # `src`
	Src "src",

	/// # `srcdoc`
	Srcdoc "srcdoc",

	/// # `srclang`
	SrcLang "srclang",

	/// # `usemap`
	UseMap "usemap",
}

list_attr! {
	/// # `sandbox`
	///
	/// An empty sandbox applies every restriction.
	Sandbox "sandbox" Space {
		ALLOW_DOWNLOADS "allow-downloads",
		ALLOW_FORMS "allow-forms",
		ALLOW_MODALS "allow-modals",
		ALLOW_ORIENTATION_LOCK "allow-orientation-lock",
		ALLOW_POINTER_LOCK "allow-pointer-lock",
		ALLOW_POPUPS "allow-popups",
		ALLOW_POPUPS_TO_ESCAPE_SANDBOX "allow-popups-to-escape-sandbox",
		ALLOW_PRESENTATION "allow-presentation",
		ALLOW_SAME_ORIGIN "allow-same-origin",
		ALLOW_SCRIPTS "allow-scripts",
		ALLOW_TOP_NAVIGATION "allow-top-navigation",
		ALLOW_TOP_NAVIGATION_BY_USER_ACTIVATION "allow-top-navigation-by-user-activation",
		ALLOW_TOP_NAVIGATION_TO_CUSTOM_PROTOCOLS "allow-top-navigation-to-custom-protocols",
	},

	/// # `srcset`
	///
	/// Each token is an image candidate: a URL, optionally followed by a
	/// width (`480w`) or density (`2x`) descriptor.
	///
	/// ## Examples
	///
	/// ```
	/// use htmattr::Srcset;
	///
	/// let srcset = Srcset::from_candidates([
	///     ("small.jpg", "480w"),
	///     ("large.jpg", "1080w"),
	/// ]);
	/// assert_eq!(srcset, "small.jpg 480w, large.jpg 1080w");
	/// ```
	Srcset "srcset" Comma,
}

impl Srcset {
	#[must_use]
	/// # From Candidates.
	///
	/// Build from `(url, descriptor)` pairs. An empty descriptor leaves just
	/// the URL. URLs are not checked for stray commas.
	pub fn from_candidates<I, U, D>(candidates: I) -> Self
	where I: IntoIterator<Item=(U, D)>, U: AsRef<str>, D: AsRef<str> {
		Self::from_tokens(candidates.into_iter().map(|(u, d)| candidate(u.as_ref(), d.as_ref())))
	}

	#[must_use]
	/// # With Candidate.
	pub fn with_candidate(self, url: &str, descriptor: &str) -> Self {
		self.with(candidate(url, descriptor))
	}
}

#[must_use]
/// # Image Candidate.
fn candidate(url: &str, descriptor: &str) -> String {
	if descriptor.is_empty() { url.to_owned() }
	else { format!("{url} {descriptor}") }
}



string_attr! {
	/// # `elementtiming`
	///
	/// An identifier for the Element Timing API.
	Elementtiming "elementtiming",
}

impl Elementtiming {
	#[must_use]
	/// # From Category and Name.
	///
	/// Returns `{category}-{name}`, e.g. `hero-image`.
	pub fn from_parts(category: &str, name: &str) -> Self {
		Self(Cow::Owned(format!("{category}-{name}")))
	}
}



bool_attr! {
	/// # `allowfullscreen`
	AllowFullscreen "allowfullscreen",

	/// # `async`
	Async "async",

	/// # `autoplay`
	Autoplay "autoplay",

	/// # `controls`
	Controls "controls",

	/// # `default`
	///
	/// Marks the default `<track>`.
	DefaultTrack "default",

	/// # `defer`
	Defer "defer",

	/// # `ismap`
	IsMap "ismap",

	/// # `loop`
	Loop "loop",

	/// # `muted`
	Muted "muted",

	/// # `nomodule`
	NoModule "nomodule",

	/// # `playsinline`
	PlaysInline "playsinline",
}

enum_attr! {
	/// # `decoding`
	Decoding "decoding" {
		Sync "sync",
		Async "async",
		Auto "auto",
	},

	/// # `kind`
	///
	/// The kind of `<track>`.
	Kind "kind" {
		Subtitles "subtitles",
		Captions "captions",
		Descriptions "descriptions",
		Chapters "chapters",
		Metadata "metadata",
	},

	/// # `loading`
	Loading "loading" {
		Eager "eager",
		Lazy "lazy",
	},

	/// # `shape`
	///
	/// The shape of an image map `<area>`.
	Shape "shape" {
		Default "default",
		Rect "rect",
		Circle "circle",
		Poly "poly",
	},
}

impl Default for Decoding {
	#[inline]
	fn default() -> Self { Self::Auto }
}

impl Default for Kind {
	#[inline]
	fn default() -> Self { Self::Subtitles }
}

impl Default for Loading {
	#[inline]
	fn default() -> Self { Self::Eager }
}

impl Default for Shape {
	#[inline]
	fn default() -> Self { Self::Rect }
}

number_attr! {
	/// # `height`
	///
	/// In CSS pixels.
	Height "height" u32,

	/// # `width`
	///
	/// In CSS pixels.
	Width "width" u32,
}

try_from_signed!(Height u32, Width u32);

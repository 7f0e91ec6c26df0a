/*!
# HTMAttr: Links and Resources

Attributes for `<a>`, `<area>`, `<link>`, `<script>` and friends: anything
that points somewhere else.
*/

use crate::{
	Attribute,
	AttrValue,
};
use std::{
	borrow::Cow,
	fmt,
};



string_attr! {
	/// # `as`
	///
	/// The kind of content being preloaded by a `<link>`.
	As "as" {
		AUDIO "audio",
		DOCUMENT "document",
		EMBED "embed",
		FETCH "fetch",
		FONT "font",
		IMAGE "image",
		OBJECT "object",
		SCRIPT "script",
		STYLE "style",
		TRACK "track",
		VIDEO "video",
		WORKER "worker",
	},

	/// # `download`
	///
	/// An empty value means "download, keeping the server's filename".
	Download "download",

	/// # `href`
	///
	/// Any URL, as-is. For `mailto:`, `tel:` and `sms:` links, see
	/// [`Href::mailto`], [`Href::tel`] and [`Href::sms`].
	Href "href",

	/// # `hreflang`
	Hreflang "hreflang",

	/// # `media`
	Media "media" {
		ALL "all",
		PRINT "print",
		SCREEN "screen",
		PREFERS_DARK "(prefers-color-scheme: dark)",
		PREFERS_REDUCED_MOTION "(prefers-reduced-motion: reduce)",
	},

	/// # `target`
	Target "target" {
		BLANK "_blank",
		PARENT "_parent",
		SELF "_self",
		TOP "_top",
	},
}

list_attr! {
	/// # `blocking`
	Blocking "blocking" Space {
		RENDER "render",
	},

	/// # `imagesizes`
	///
	/// The [`Sizes`] of a `<link rel="preload" as="image">`.
	ImageSizes "imagesizes" Comma,

	/// # `imagesrcset`
	///
	/// The `srcset` of a `<link rel="preload" as="image">`, in the same
	/// `url descriptor, ...` form.
	///
	/// ## Examples
	///
	/// ```
	/// use htmattr::ImageSrcset;
	///
	/// let set = ImageSrcset::from(["a.jpg 1x", "b.jpg 2x"]);
	/// assert_eq!(set, "a.jpg 1x, b.jpg 2x");
	/// ```
	ImageSrcset "imagesrcset" Comma,

	/// # `ping`
	///
	/// A space-separated list of URLs to notify when the link is followed.
	Ping "ping" Space,

	/// # `rel`
	///
	/// ## Examples
	///
	/// ```
	/// use htmattr::Rel;
	///
	/// assert_eq!(
	///     Rel::from(["external", "noopener", "noreferrer"]),
	///     Rel::SECURE_EXTERNAL,
	/// );
	/// assert_eq!(Rel::STYLESHEET.to_string(), "stylesheet");
	/// ```
	Rel "rel" Space {
		ALTERNATE "alternate",
		AUTHOR "author",
		BOOKMARK "bookmark",
		CANONICAL "canonical",
		DNS_PREFETCH "dns-prefetch",
		EXTERNAL "external",
		HELP "help",
		ICON "icon",
		LICENSE "license",
		MANIFEST "manifest",
		ME "me",
		MODULEPRELOAD "modulepreload",
		NEXT "next",
		NOFOLLOW "nofollow",
		NOOPENER "noopener",
		NOREFERRER "noreferrer",
		OPENER "opener",
		PINGBACK "pingback",
		PRECONNECT "preconnect",
		PREFETCH "prefetch",
		PRELOAD "preload",
		PREV "prev",
		SEARCH "search",
		STYLESHEET "stylesheet",
		TAG "tag",

		/// An external link that can't reach back into the opener or see
		/// where it came from.
		SECURE_EXTERNAL "external noopener noreferrer",
	},

	/// # `sizes`
	///
	/// Source sizes for `<img>`/`<source>`, or icon sizes for `<link>`.
	Sizes "sizes" Comma {
		ANY "any",
	},
}

enum_attr! {
	/// # `fetchpriority`
	///
	/// This is a closed set; unrecognized values are rejected rather than
	/// quietly treated as `auto`.
	///
	/// Parsing is not byte-exact, though: surrounding whitespace is trimmed
	/// and, failing an exact match, tokens are compared ASCII
	/// case-insensitively, so `" HIGH "` parses as `High`.
	FetchPriority "fetchpriority" {
		High "high",
		Low "low",
		Auto "auto",
	},

	/// # Hash Algorithm.
	///
	/// The prefix of an [`Integrity`] entry.
	HashAlgorithm "integrity" {
		Sha256 "sha256",
		Sha384 "sha384",
		Sha512 "sha512",
	},

	/// # `referrerpolicy`
	ReferrerPolicy "referrerpolicy" {
		NoReferrer "no-referrer",
		NoReferrerWhenDowngrade "no-referrer-when-downgrade",
		Origin "origin",
		OriginWhenCrossOrigin "origin-when-cross-origin",
		SameOrigin "same-origin",
		StrictOrigin "strict-origin",
		StrictOriginWhenCrossOrigin "strict-origin-when-cross-origin",
		UnsafeUrl "unsafe-url",
	},
}

impl Default for FetchPriority {
	#[inline]
	fn default() -> Self { Self::Auto }
}

impl Default for ReferrerPolicy {
	#[inline]
	fn default() -> Self { Self::StrictOriginWhenCrossOrigin }
}



#[derive(Debug, Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # `crossorigin`
///
/// Unlike most enumerations in this crate, this one never rejects input:
/// anything other than exactly `use-credentials`, including the empty
/// string, means `anonymous`.
///
/// ## Examples
///
/// ```
/// use htmattr::Crossorigin;
///
/// assert_eq!(Crossorigin::from("use-credentials"), Crossorigin::UseCredentials);
/// assert_eq!(Crossorigin::from(""), Crossorigin::Anonymous);
/// assert_eq!(Crossorigin::from("bogus"), Crossorigin::Anonymous);
/// ```
pub enum Crossorigin {
	#[default]
	/// # `anonymous`
	Anonymous,

	/// # `use-credentials`
	UseCredentials,
}

impl Attribute for Crossorigin {
	const NAME: &'static str = "crossorigin";

	#[inline]
	fn markup(&self) -> AttrValue<'_> { AttrValue::Text(Cow::Borrowed(self.as_str())) }
}

impl AsRef<str> for Crossorigin {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for Crossorigin {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<&str> for Crossorigin {
	#[inline]
	fn from(src: &str) -> Self {
		if src == "use-credentials" { Self::UseCredentials }
		else { Self::Anonymous }
	}
}

impl From<String> for Crossorigin {
	#[inline]
	fn from(src: String) -> Self { Self::from(src.as_str()) }
}

impl Crossorigin {
	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Anonymous => "anonymous",
			Self::UseCredentials => "use-credentials",
		}
	}
}



string_attr! {
	/// # `integrity`
	///
	/// Subresource integrity metadata: one or more space-separated
	/// `{algorithm}-{base64 hash}` entries. The hash itself is not checked.
	///
	/// ## Examples
	///
	/// ```
	/// use htmattr::{HashAlgorithm, Integrity};
	///
	/// assert_eq!(Integrity::sha256("abc123"), "sha256-abc123");
	/// assert_eq!(
	///     Integrity::sha384("one").and(HashAlgorithm::Sha512, "two"),
	///     "sha384-one sha512-two",
	/// );
	/// ```
	Integrity "integrity",
}

impl Integrity {
	#[must_use]
	/// # From Algorithm and Hash.
	pub fn from_hash(algorithm: HashAlgorithm, hash: &str) -> Self {
		Self(Cow::Owned(format!("{}-{hash}", algorithm.as_str())))
	}

	#[must_use]
	/// # SHA-256.
	pub fn sha256(hash: &str) -> Self { Self::from_hash(HashAlgorithm::Sha256, hash) }

	#[must_use]
	/// # SHA-384.
	pub fn sha384(hash: &str) -> Self { Self::from_hash(HashAlgorithm::Sha384, hash) }

	#[must_use]
	/// # SHA-512.
	pub fn sha512(hash: &str) -> Self { Self::from_hash(HashAlgorithm::Sha512, hash) }

	#[must_use]
	/// # And Another.
	///
	/// Append another hash, space-separated. Browsers use the strongest
	/// algorithm present.
	pub fn and(self, algorithm: HashAlgorithm, hash: &str) -> Self {
		if self.0.is_empty() { return Self::from_hash(algorithm, hash); }

		let mut out = self.0.into_owned();
		out.push(' ');
		out.push_str(algorithm.as_str());
		out.push('-');
		out.push_str(hash);
		Self(Cow::Owned(out))
	}
}



string_attr! {
	/// # `type` (MIME)
	///
	/// The MIME type of a linked or embedded resource, as used by `<link>`,
	/// `<script>`, `<source>`, `<embed>`, `<object>` and `<style>`.
	///
	/// ## Examples
	///
	/// ```
	/// use htmattr::MediaType;
	///
	/// assert_eq!(MediaType::mime("image", "webp"), "image/webp");
	/// assert_eq!(
	///     MediaType::mime("video", "mp4").with_parameter("codecs", "avc1.4D401E, mp4a.40.2"),
	///     r#"video/mp4; codecs="avc1.4D401E, mp4a.40.2""#,
	/// );
	/// ```
	MediaType "type" {
		CSS "text/css",
		HTML "text/html",
		JAVASCRIPT "text/javascript",
		JSON "application/json",
		MODULE "module",
		IMPORTMAP "importmap",
		SPECULATIONRULES "speculationrules",
		LD_JSON "application/ld+json",
		PLAIN "text/plain",
		ICON "image/x-icon",
		PNG "image/png",
		JPEG "image/jpeg",
		GIF "image/gif",
		SVG "image/svg+xml",
		WEBP "image/webp",
		AVIF "image/avif",
		MP4 "video/mp4",
		WEBM "video/webm",
		OGG "audio/ogg",
		MPEG "audio/mpeg",
		PDF "application/pdf",
		WOFF2 "font/woff2",
	},
}

impl MediaType {
	#[must_use]
	/// # From Type and Subtype.
	pub fn mime(kind: &str, subtype: &str) -> Self {
		Self(Cow::Owned(format!("{kind}/{subtype}")))
	}

	#[must_use]
	/// # With Parameter.
	///
	/// Append a `; name=value` parameter. The value is quoted (and its
	/// quotes and backslashes escaped) unless it is a valid token.
	pub fn with_parameter(self, name: &str, value: &str) -> Self {
		let mut out = self.0.into_owned();
		out.push_str("; ");
		out.push_str(name);
		out.push('=');

		if is_mime_token(value) { out.push_str(value); }
		else {
			out.push('"');
			for c in value.chars() {
				if matches!(c, '"' | '\\') { out.push('\\'); }
				out.push(c);
			}
			out.push('"');
		}

		Self(Cow::Owned(out))
	}
}

#[must_use]
/// # Is MIME Token?
///
/// Parameter values made entirely of token characters can go unquoted.
const fn is_mime_token(src: &str) -> bool {
	let mut src = src.as_bytes();
	if src.is_empty() { return false; }

	while let [b, rest @ ..] = src {
		if
			! b.is_ascii_graphic() ||
			matches!(
				*b,
				b'(' | b')' | b'<' | b'>' | b'@' | b',' | b';' | b':' | b'\\' |
				b'"' | b'/' | b'[' | b']' | b'?' | b'='
			)
		{ return false; }
		src = rest;
	}

	true
}

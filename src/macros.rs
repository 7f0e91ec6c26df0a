/*!
# HTMAttr: Macros

The hundred-odd attribute types are mostly the same handful of shapes with
different names, so they're stamped out here.
*/



/// # String Attributes.
///
/// Each entry is a type name, the markup name, and an optional brace-wrapped
/// list of preset constants.
macro_rules! string_attr {
	(@impl $ty:ident $name:literal) => (
		string_attr!(@base $ty $name);

		impl From<&str> for $ty {
			#[inline]
			fn from(src: &str) -> Self { Self(::std::borrow::Cow::Owned(src.to_owned())) }
		}

		impl From<String> for $ty {
			#[inline]
			fn from(src: String) -> Self { Self(::std::borrow::Cow::Owned(src)) }
		}

		impl From<::std::borrow::Cow<'static, str>> for $ty {
			#[inline]
			fn from(src: ::std::borrow::Cow<'static, str>) -> Self { Self(src) }
		}

		impl $ty {
			#[must_use]
			/// # New.
			pub fn new<S>(value: S) -> Self
			where S: Into<::std::borrow::Cow<'static, str>> { Self(value.into()) }
		}
	);

	(@base $ty:ident $name:literal) => (
		impl $crate::Attribute for $ty {
			const NAME: &'static str = $name;

			#[inline]
			fn markup(&self) -> $crate::AttrValue<'_> {
				$crate::AttrValue::Text(::std::borrow::Cow::Borrowed(&self.0))
			}
		}

		impl $crate::StringAttribute for $ty {
			#[inline]
			fn as_str(&self) -> &str { &self.0 }

			#[inline]
			fn into_string(self) -> String { self.0.into_owned() }
		}

		impl AsRef<str> for $ty {
			#[inline]
			fn as_ref(&self) -> &str { &self.0 }
		}

		impl ::std::fmt::Display for $ty {
			#[inline]
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str(&self.0)
			}
		}

		impl From<$ty> for String {
			#[inline]
			fn from(src: $ty) -> Self { src.0.into_owned() }
		}

		impl PartialEq<str> for $ty {
			#[inline]
			fn eq(&self, other: &str) -> bool { self.0 == other }
		}

		impl PartialEq<&str> for $ty {
			#[inline]
			fn eq(&self, other: &&str) -> bool { self.0 == *other }
		}

		impl $ty {
			#[must_use]
			/// # As Str.
			pub fn as_str(&self) -> &str { &self.0 }

			#[must_use]
			/// # Is Empty?
			pub fn is_empty(&self) -> bool { self.0.is_empty() }
		}
	);

	(@struct $( #[$meta:meta] )* $ty:ident) => (
		#[derive(Debug, Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
		$( #[$meta] )*
		pub struct $ty(::std::borrow::Cow<'static, str>);
	);

	(
		$(
			$( #[$meta:meta] )*
			$ty:ident $name:literal
			$( {
				$( $( #[$pmeta:meta] )* $preset:ident $pval:literal ),+ $(,)?
			} )?
			,
		)+
	) => (
		$(
			string_attr!(@struct $( #[$meta] )* $ty);
			string_attr!(@impl $ty $name);

			$(
				impl $ty {
					$(
						#[doc = concat!("# `", $pval, "`")]
						$( #[$pmeta] )*
						pub const $preset: Self = Self(::std::borrow::Cow::Borrowed($pval));
					)+
				}
			)?
		)+
	);
}

/// # List Attributes.
///
/// These are string attributes with a known token separator, either `Space`
/// or `Comma`, and extra constructors for joining sequences.
///
/// Every constructor normalizes: tokens are trimmed, empties are dropped, and
/// the rest are joined with the canonical separator. A pre-joined string and
/// the token sequence it splits into therefore end up identical.
macro_rules! list_attr {
	(
		$(
			$( #[$meta:meta] )*
			$ty:ident $name:literal $sep:ident
			$( {
				$( $( #[$pmeta:meta] )* $preset:ident $pval:literal ),+ $(,)?
			} )?
			,
		)+
	) => (
		$(
			string_attr!(@struct $( #[$meta] )* $ty);
			string_attr!(@base $ty $name);

			$(
				impl $ty {
					$(
						#[doc = concat!("# `", $pval, "`")]
						$( #[$pmeta] )*
						pub const $preset: Self = Self(::std::borrow::Cow::Borrowed($pval));
					)+
				}
			)?

			impl From<&str> for $ty {
				#[inline]
				fn from(src: &str) -> Self { Self::from_tokens(Self::SEPARATOR.split(src)) }
			}

			impl From<String> for $ty {
				#[inline]
				fn from(src: String) -> Self { Self::from(src.as_str()) }
			}

			impl From<::std::borrow::Cow<'static, str>> for $ty {
				#[inline]
				fn from(src: ::std::borrow::Cow<'static, str>) -> Self { Self::from(&*src) }
			}

			impl $ty {
				/// # Token Separator.
				pub const SEPARATOR: $crate::list::Separator = $crate::list::Separator::$sep;

				#[must_use]
				/// # New.
				///
				/// Same as `From`: the value is split and re-joined.
				pub fn new<S>(value: S) -> Self
				where S: Into<::std::borrow::Cow<'static, str>> {
					let value: ::std::borrow::Cow<'static, str> = value.into();
					Self::from(value)
				}

				#[must_use]
				/// # From Tokens.
				///
				/// Trim the tokens, drop the empty ones, and join the rest, in
				/// order, with the separator.
				pub fn from_tokens<I, S>(tokens: I) -> Self
				where I: IntoIterator<Item=S>, S: AsRef<str> {
					Self(::std::borrow::Cow::Owned(Self::SEPARATOR.normalize(tokens)))
				}

				/// # Tokens.
				///
				/// Iterate over the individual (non-empty) tokens.
				pub fn tokens(&self) -> impl Iterator<Item=&str> {
					Self::SEPARATOR.split(&self.0)
				}

				#[must_use]
				/// # Contains Token?
				pub fn contains(&self, token: &str) -> bool {
					self.tokens().any(|t| t == token)
				}

				#[must_use]
				/// # With Token.
				///
				/// Return a new value with the token appended to the end.
				pub fn with<S: AsRef<str>>(self, token: S) -> Self {
					Self::from_tokens(self.tokens().chain(Self::SEPARATOR.split(token.as_ref())))
				}
			}

			impl<S: AsRef<str>> FromIterator<S> for $ty {
				#[inline]
				fn from_iter<I: IntoIterator<Item=S>>(iter: I) -> Self {
					Self::from_tokens(iter)
				}
			}

			impl<S: AsRef<str>, const N: usize> From<[S; N]> for $ty {
				#[inline]
				fn from(src: [S; N]) -> Self { Self::from_tokens(src) }
			}

			impl<S: AsRef<str>> From<Vec<S>> for $ty {
				#[inline]
				fn from(src: Vec<S>) -> Self { Self::from_tokens(src) }
			}
		)+
	);
}

/// # Boolean Attributes.
///
/// Entries default to `false` unless followed by `= true`.
macro_rules! bool_attr {
	(@default) => ( false );
	(@default $v:literal) => ( $v );

	(
		$(
			$( #[$meta:meta] )*
			$ty:ident $name:literal $( = $default:literal )?,
		)+
	) => (
		$(
			#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
			$( #[$meta] )*
			pub struct $ty(bool);

			impl ::std::default::Default for $ty {
				#[inline]
				fn default() -> Self { Self(bool_attr!(@default $( $default )?)) }
			}

			impl $crate::Attribute for $ty {
				const NAME: &'static str = $name;

				#[inline]
				fn markup(&self) -> $crate::AttrValue<'_> {
					if self.0 { $crate::AttrValue::Bare }
					else { $crate::AttrValue::Absent }
				}
			}

			impl $crate::BooleanAttribute for $ty {
				#[inline]
				fn get(self) -> bool { self.0 }
			}

			impl ::std::fmt::Display for $ty {
				#[inline]
				fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
					f.write_str(if self.0 { "true" } else { "false" })
				}
			}

			impl From<bool> for $ty {
				#[inline]
				fn from(src: bool) -> Self { Self(src) }
			}

			impl From<$ty> for bool {
				#[inline]
				fn from(src: $ty) -> Self { src.0 }
			}

			impl $ty {
				/// # True.
				pub const TRUE: Self = Self(true);

				/// # False.
				pub const FALSE: Self = Self(false);

				#[must_use]
				/// # New.
				pub const fn new(value: bool) -> Self { Self(value) }

				#[must_use]
				/// # Value.
				pub const fn get(self) -> bool { self.0 }
			}
		)+
	);
}

/// # Closed Enumerations.
///
/// Parsing accepts an exact match first, then an ASCII case-insensitive one,
/// after trimming; anything else is an [`AttrError::UnknownToken`](crate::AttrError::UnknownToken).
macro_rules! enum_attr {
	(
		$(
			$( #[$meta:meta] )*
			$ty:ident $name:literal {
				$( $( #[$vmeta:meta] )* $var:ident $val:literal, )+
			},
		)+
	) => (
		$(
			#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
			$( #[$meta] )*
			pub enum $ty {
				$(
					#[doc = concat!("# `", $val, "`")]
					$( #[$vmeta] )*
					$var,
				)+
			}

			impl $crate::Attribute for $ty {
				const NAME: &'static str = $name;

				#[inline]
				fn markup(&self) -> $crate::AttrValue<'_> {
					$crate::AttrValue::Text(::std::borrow::Cow::Borrowed(self.as_str()))
				}
			}

			impl AsRef<str> for $ty {
				#[inline]
				fn as_ref(&self) -> &str { self.as_str() }
			}

			impl ::std::fmt::Display for $ty {
				#[inline]
				fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
					f.write_str(self.as_str())
				}
			}

			impl ::std::str::FromStr for $ty {
				type Err = $crate::AttrError;

				fn from_str(src: &str) -> Result<Self, Self::Err> {
					let src = src.trim_ascii();
					$( if src == $val { return Ok(Self::$var); } )+
					$( if src.eq_ignore_ascii_case($val) { return Ok(Self::$var); } )+
					Err($crate::AttrError::UnknownToken($name))
				}
			}

			impl TryFrom<&str> for $ty {
				type Error = $crate::AttrError;

				#[inline]
				fn try_from(src: &str) -> Result<Self, Self::Error> { src.parse() }
			}

			impl TryFrom<String> for $ty {
				type Error = $crate::AttrError;

				#[inline]
				fn try_from(src: String) -> Result<Self, Self::Error> { src.parse() }
			}

			impl $ty {
				/// # All Members.
				pub const ALL: &'static [Self] = &[ $( Self::$var, )+ ];

				#[must_use]
				/// # As Str.
				pub const fn as_str(self) -> &'static str {
					match self {
						$( Self::$var => $val, )+
					}
				}
			}
		)+
	);
}

/// # Plain Numbers.
///
/// Integer attributes whose domain is exactly that of the storage type.
macro_rules! number_attr {
	(@impl $ty:ident $name:literal $num:ty) => (
		impl $crate::Attribute for $ty {
			const NAME: &'static str = $name;
		}

		impl ::std::fmt::Display for $ty {
			#[inline]
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				::std::fmt::Display::fmt(&self.0, f)
			}
		}

		impl From<$num> for $ty {
			#[inline]
			fn from(src: $num) -> Self { Self(src) }
		}

		impl From<$ty> for $num {
			#[inline]
			fn from(src: $ty) -> Self { src.0 }
		}

		impl $ty {
			#[must_use]
			/// # New.
			pub const fn new(value: $num) -> Self { Self(value) }

			#[must_use]
			/// # Value.
			pub const fn get(self) -> $num { self.0 }
		}
	);

	(
		$(
			$( #[$meta:meta] )*
			$ty:ident $name:literal $num:ty,
		)+
	) => (
		$(
			#[derive(Debug, Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
			$( #[$meta] )*
			pub struct $ty($num);

			number_attr!(@impl $ty $name $num);
		)+
	);
}

/// # Floats.
///
/// These hold any `f64`, NaN and the infinities included; no range or
/// ordering checks are performed.
macro_rules! float_attr {
	(
		$(
			$( #[$meta:meta] )*
			$ty:ident $name:literal,
		)+
	) => (
		$(
			#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
			$( #[$meta] )*
			pub struct $ty(f64);

			number_attr!(@impl $ty $name f64);
		)+
	);
}

/// # Signed Sources for Unsigned Numbers.
///
/// Negative (or too-big) inputs are rejected with
/// [`AttrError::OutOfRange`](crate::AttrError::OutOfRange).
macro_rules! try_from_signed {
	( $( $ty:ident $num:ty ),+ $(,)? ) => (
		$(
			impl TryFrom<i64> for $ty {
				type Error = $crate::AttrError;

				fn try_from(src: i64) -> Result<Self, Self::Error> {
					<$num>::try_from(src)
						.map(Self)
						.map_err(|_| $crate::AttrError::OutOfRange(<Self as $crate::Attribute>::NAME))
				}
			}
		)+
	);
}

/// # Bounded Integers.
///
/// Entries are a type name, the markup name, the storage type, the inclusive
/// range, and the default. Construction from anything outside the range is an
/// [`AttrError::OutOfRange`](crate::AttrError::OutOfRange).
macro_rules! ranged_attr {
	(
		$(
			$( #[$meta:meta] )*
			$ty:ident $name:literal $num:ty { $min:literal ..= $max:literal } = $default:literal,
		)+
	) => (
		$(
			#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
			$( #[$meta] )*
			pub struct $ty($num);

			impl ::std::default::Default for $ty {
				#[inline]
				fn default() -> Self { Self($default) }
			}

			impl $crate::Attribute for $ty {
				const NAME: &'static str = $name;
			}

			impl ::std::fmt::Display for $ty {
				#[inline]
				fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
					::std::fmt::Display::fmt(&self.0, f)
				}
			}

			impl From<$ty> for $num {
				#[inline]
				fn from(src: $ty) -> Self { src.0 }
			}

			impl TryFrom<i64> for $ty {
				type Error = $crate::AttrError;

				#[inline]
				fn try_from(src: i64) -> Result<Self, Self::Error> { Self::new(src) }
			}

			impl $ty {
				/// # Minimum Value.
				pub const MIN: $num = $min;

				/// # Maximum Value.
				pub const MAX: $num = $max;

				/// # New.
				///
				/// ## Errors
				///
				#[doc = concat!("Returns an error unless the value is between ", $min, " and ", $max, " (inclusive).")]
				pub fn new(value: i64) -> Result<Self, $crate::AttrError> {
					<$num>::try_from(value)
						.ok()
						.filter(|v| (Self::MIN..=Self::MAX).contains(v))
						.map(Self)
						.ok_or($crate::AttrError::OutOfRange($name))
				}

				#[must_use]
				/// # Value.
				pub const fn get(self) -> $num { self.0 }
			}
		)+
	);
}

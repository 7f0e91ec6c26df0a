/*!
# HTMAttr

[![Documentation](https://docs.rs/htmattr/badge.svg)](https://docs.rs/htmattr/)

`HTMAttr` is a library of strongly-typed HTML attribute values.

Each attribute (`href`, `colspan`, `crossorigin`, etc.) is its own small
type, with a fixed markup name, a value domain appropriate to the attribute,
and a single canonical string form.

Most are one of three basic shapes:

| Shape | Construction | Markup |
| ----- | ------------ | ------ |
| String | Anything goes. | `name="value"` |
| Boolean | `true` or `false`. | `name` or nothing. |
| Enumeration | One of a closed set of tokens. | `name="token"` |

Numbers, lists and composites layer their own rules on top. Some reject
out-of-range input ([`Span`] must be positive), some clamp it ([`Size`]), and
[`Crossorigin`] coerces anything it doesn't recognize into its default.



## Examples

```
use htmattr::{
    Attribute,
    Attributes,
    ColSpan,
    Crossorigin,
    FetchPriority,
    Rel,
};

// Typed values.
let span = ColSpan::new(2).unwrap();
assert_eq!(span.to_string(), "2");
assert!(ColSpan::new(0).is_err());

// Closed enumerations are strict.
assert_eq!(FetchPriority::try_from("high"), Ok(FetchPriority::High));
assert!(FetchPriority::try_from("bogus").is_err());

// Coercive ones aren't.
assert_eq!(Crossorigin::from("bogus"), Crossorigin::Anonymous);

// Markup.
let attrs = Attributes::new()
    .with(&span)
    .with(&Rel::SECURE_EXTERNAL);
assert_eq!(attrs.render(), r#" colspan="2" rel="external noopener noreferrer""#);
```



## Optional Features

| Feature | Description | Default |
| ------- | ----------- | ------- |
| `nonce` | Random [`Nonce`] generation. | Y |
*/

#![warn(clippy::filetype_is_file)]
#![warn(clippy::integer_division)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::unneeded_field_pattern)]
#![warn(macro_use_extern_crate)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]

#![allow(clippy::module_name_repetitions)]
#![allow(unused_crate_dependencies)]

#![cfg_attr(docsrs, feature(doc_cfg))]



#[macro_use]
mod macros;

mod attr;
mod attribute;
mod error;
pub mod list;
#[cfg(feature = "nonce")]
mod nonce;
mod ser;



pub use attr::*;
pub use attribute::{
	Attribute,
	AttrValue,
	BooleanAttribute,
	StringAttribute,
};
pub use error::AttrError;
pub use list::Separator;
pub use ser::Attributes;

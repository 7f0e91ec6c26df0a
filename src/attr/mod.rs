/*!
# HTMAttr: Attribute Types
*/

mod form;
mod global;
mod href;
mod link;
mod media;
mod table;
mod text;



pub use form::*;
pub use global::*;
pub use link::*;
pub use media::*;
pub use table::*;
pub use text::*;

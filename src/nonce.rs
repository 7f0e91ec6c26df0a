/*!
# HTMAttr: Nonce Generation
*/

use base64::{
	Engine,
	engine::general_purpose::STANDARD,
};
use crate::{
	AttrError,
	Nonce,
};



/// # Random Bytes.
///
/// Sixteen bytes (128 bits) is the minimum Content Security Policy asks for.
const NONCE_BYTES: usize = 16;



impl Nonce {
	/// # Random.
	///
	/// Generate a fresh nonce from the operating system's secure random
	/// number generator, base64-encoded.
	///
	/// ## Examples
	///
	/// ```
	/// use htmattr::Nonce;
	///
	/// let nonce = Nonce::random().unwrap();
	/// assert_eq!(nonce.as_str().len(), 24);
	/// ```
	///
	/// ## Errors
	///
	/// Returns an error if the system random number generator is unavailable.
	#[cfg_attr(docsrs, doc(cfg(feature = "nonce")))]
	pub fn random() -> Result<Self, AttrError> {
		let mut buf = [0_u8; NONCE_BYTES];
		getrandom::getrandom(&mut buf).map_err(|_| AttrError::Random)?;
		Ok(Self::from(STANDARD.encode(buf)))
	}
}

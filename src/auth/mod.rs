//! Bearer-token authentication.
//!
//! Log-in issues a signed JWT; protected route handlers receive the verified
//! claims by taking a [Claims] argument. Logged-out tokens are kept in a
//! blacklist table until they would have expired anyway.

mod blacklist;
mod token;

pub(crate) use blacklist::{BlacklistedToken, blacklist_token, is_token_blacklisted};
pub(crate) use token::{Claims, encode_jwt};

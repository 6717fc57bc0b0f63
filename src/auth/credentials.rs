//! Request credentials derived from a caller-supplied access token.
//!
//! This module provides the [`Credentials`] type attached to every upload
//! request.

use crate::config::AccessToken;

/// Credentials attached to a single upload request.
///
/// Built per call by [`Credentials::from_access_token`]; nothing is cached
/// or shared between requests.
///
/// # Example
///
/// ```rust
/// use media_relay::{AccessToken, Credentials};
///
/// let credentials = Credentials::from_access_token(&AccessToken::new("ya29.token"));
/// assert_eq!(credentials.authorization_header(), "Bearer ya29.token");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    /// The bearer token sent to the destination API.
    pub access_token: AccessToken,

    /// The token type, always `Bearer` for tokens supplied to the relay.
    pub token_type: &'static str,
}

impl Credentials {
    /// Token type for OAuth 2.0 bearer tokens.
    pub const BEARER: &'static str = "Bearer";

    /// Wraps a bearer token into request credentials.
    ///
    /// The token is neither validated nor refreshed.
    #[must_use]
    pub fn from_access_token(token: &AccessToken) -> Self {
        Self {
            access_token: token.clone(),
            token_type: Self::BEARER,
        }
    }

    /// Returns the value of the `Authorization` header for these credentials.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token.as_ref())
    }
}

// Verify Credentials is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credentials>();
};

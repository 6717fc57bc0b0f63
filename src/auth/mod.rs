//! Authentication types for upload requests.
//!
//! The relay does not acquire or refresh tokens. Callers hand in an
//! [`AccessToken`](crate::AccessToken) obtained elsewhere, and
//! [`Credentials::from_access_token`] turns it into the `Authorization`
//! header sent with each upload.

mod credentials;

pub use credentials::Credentials;

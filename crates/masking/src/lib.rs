#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Wrapper types and traits for secret management which help ensure secrets
//! aren't accidentally copied, logged, or otherwise exposed. Secret-keeping
//! library inspired by secrecy.
//!

mod abs;
pub use abs::{ExposeInterface, ExposeOptionInterface, PeekInterface};

mod strategy;
pub use strategy::{Strategy, WithType, WithoutType};

mod secret;
pub use secret::Secret;

mod serde;
pub use crate::serde::SerializableSecret;

/// This module should be included with asterisk.
///
/// `use masking::prelude::*;`
///
pub mod prelude {
    pub use super::{ExposeInterface, ExposeOptionInterface, PeekInterface};
}

#[cfg(feature = "server")]
pub(crate) mod gateway;

mod contact;
pub use contact::*;

mod organization;
pub use organization::*;

mod user;
pub use user::*;

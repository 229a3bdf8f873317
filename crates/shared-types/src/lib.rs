pub mod common;
pub mod config;
pub mod error;
pub mod file;
pub mod filter;
pub mod form;
pub mod lifecycle;
pub mod request;

// Panel records
pub mod contact;
pub mod user;

pub use common::*;
pub use config::*;
pub use contact::*;
pub use error::*;
pub use file::*;
pub use filter::*;
pub use form::*;
pub use lifecycle::*;
pub use request::*;
pub use user::*;

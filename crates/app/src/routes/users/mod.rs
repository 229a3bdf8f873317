mod create;
mod edit;
mod form;
mod list;

pub use create::UserCreate;
pub use edit::UserEdit;
pub use list::UserList;

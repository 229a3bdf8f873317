mod create;
mod edit;
mod form;
mod list;

pub use create::ContactCreate;
pub use edit::ContactEdit;
pub use list::ContactList;

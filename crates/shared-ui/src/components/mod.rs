// Standalone components
pub mod badge;
pub mod button;
pub mod data_table;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;

// Panel controls built on shared-types models
pub mod file_input;
pub mod search_filter;
pub mod trashed_message;

// Primitive wrappers
pub mod alert_dialog;
pub mod toast;

pub use alert_dialog::*;
pub use badge::*;
pub use button::*;
pub use data_table::*;
pub use file_input::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use search_filter::*;
pub use toast::*;
pub use trashed_message::*;

//! UI components for the admin console

pub mod alert;
pub mod form_view;
pub mod inputs;
pub mod list_view;

// Re-exports for convenience
pub use alert::{Alert, AlertLevel};
pub use form_view::{ResourceForm, init_inputs, parse_input, parse_inputs};
pub use inputs::{Checkbox, TextArea, TextInput};
pub use list_view::{ResourceTable, SECRET_MASK, cell_text};

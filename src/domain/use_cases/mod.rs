pub mod batch_form;
pub mod crud_form;
pub mod local_form;
pub mod submit_form;
pub mod sync;

pub use batch_form::BatchForm;
pub use crud_form::CrudForm;
pub use local_form::{LocalForm, LocalListForm};
pub use submit_form::SubmitForm;
pub use sync::LoadState;

/// Seam for the explicit confirmation step required before a destructive
/// action is dispatched. A UI wires this to its confirmation dialog.
pub trait ConfirmDelete: Send + Sync {
    fn confirm(&self, label: &str) -> bool;
}

/// Confirmation policy for headless use and tests.
pub struct AlwaysConfirm;

impl ConfirmDelete for AlwaysConfirm {
    fn confirm(&self, _label: &str) -> bool {
        true
    }
}

/// Capitalizes the first character of a notification label.
pub(crate) fn title_case(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

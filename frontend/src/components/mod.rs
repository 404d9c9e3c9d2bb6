pub mod confirm_dialog;
pub mod layout;
pub mod states;
pub mod toast;

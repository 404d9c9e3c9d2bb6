pub mod confirm;
pub mod form;
pub mod notifications;
pub mod page;

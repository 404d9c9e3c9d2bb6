pub mod breakdown;
pub mod summary;

pub use breakdown::{DepartmentBreakdown, PresentDaysList};
pub use summary::SummarySection;

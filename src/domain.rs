mod budget_range;
mod email_address;
mod project_location;
mod service_interest;
mod submission;

pub use budget_range::*;
pub use email_address::*;
pub use project_location::*;
pub use service_interest::*;
pub use submission::*;

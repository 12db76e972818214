pub mod id;
pub mod reference;
pub mod timesheet;
pub mod user;

pub use id::{EntityId, Identified};
pub use reference::{RoleOption, SelectOption};
pub use timesheet::Timesheet;
pub use user::{Role, User};

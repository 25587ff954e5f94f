//! Command implementations

mod check;
mod fmt;
mod list;

pub use check::run_check;
pub use fmt::run_fmt;
pub use list::run_list;

//! Command implementations

mod build;
mod check;
mod serve;
mod status;

pub use build::build;
pub use check::check;
pub use serve::serve;
pub use status::status;

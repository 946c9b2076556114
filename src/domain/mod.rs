pub mod profile;
pub mod submission;

pub use profile::*;
pub use submission::*;

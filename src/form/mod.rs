//! The form controller: explicit state, a pure reducer, and the actor that
//! wires input events and the submitter through it.

pub mod reducer;
pub mod service;
pub mod state;

pub use reducer::{reduce, FormEvent};
pub use service::FormService;
pub use state::{FormState, Phase};

pub mod api;
pub mod cli;
mod context;
pub mod session;
pub mod wizard;

pub use context::AppContext;
pub use session::{Commit, PendingCall, WizardSession};

//! Lifecycle controller: orchestrates create, read, update, delete, and
//! import against the remote client, and owns the resource identity.

mod controller;
mod create;
mod delete;
mod import;
mod read;
mod update;

pub use controller::{DetectorModelController, LifecyclePhase};
pub use create::CreateOutcome;
pub use read::ReadOutcome;

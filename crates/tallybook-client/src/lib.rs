pub mod audit;
pub mod commands;
pub mod contracts;
pub mod dedupe;
pub mod error;
mod import;
pub mod ledger;
pub mod registry;
pub mod reports;
pub mod setup;
pub mod state;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

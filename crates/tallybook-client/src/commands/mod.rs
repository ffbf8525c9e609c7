pub mod add;
pub(crate) mod common;
pub mod dedupe;
pub mod export;
pub mod files;
pub mod history;
pub mod import;
pub mod purge;
pub mod summary;
pub mod transactions;

pub use common::KindFilter;

pub mod error;
pub mod import;
pub mod run;

pub use error::{ImportError, WriteOp};
pub use import::{ImportSummary, RecordOutcome};
pub use run::{run, run_with, RunReport};

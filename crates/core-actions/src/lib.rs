//! Shift actions: classification, execution and the fallback ladder.
//!
//! Layering:
//! * `dispatcher`    - picks the first applicable type from a registry
//! * `executor`      - runs it and post-processes (case, CSS zero, choices)
//! * `orchestration` - block / selection / word / line ladder, shift more
//! * `host`          - the editor collaborator trait and an in-memory host
//!
//! Entry points are [`shift`] and [`shift_more`]. Neither ever fails because
//! of the text it is given: anything unshiftable comes back as an unapplied
//! [`ShiftReport`] with the document untouched. Their `Result` only carries
//! host-side faults.

pub mod dispatcher;
mod error;
pub mod executor;
pub mod host;
pub mod orchestration;

pub use dispatcher::Level;
pub use error::Unshifted;
pub use executor::{Chooser, DefaultChooser, Executed, shift_candidate};
pub use host::{BufferHost, ShiftHost};
pub use orchestration::{Rung, ShiftReport, shift, shift_more};

pub use core_model::Direction;
pub use core_shiftables::ShiftableType;

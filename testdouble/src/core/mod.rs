//! Core building blocks shared by every double.
//!
//! This module contains:
//! - [`Arg`]: opaque, shared argument and return values
//! - Comparators and the per-position [`ComparatorRegistry`]
//! - [`CallRecorder`]: the call log
//! - [`Expectations`]: expected arguments for a mock
//! - [`ValueSequence`]: scripted return values and inputs
//! - The [`TestDouble`] capability traits

mod arg;
mod comparator;
mod double;
mod expectations;
mod recorder;
mod sequence;

pub use arg::Arg;
pub use comparator::{
    eq_as, i32_eq, json_eq, ptr_eq, text_eq, Comparator, ComparatorRegistry,
};
pub use double::{DoubleKind, DoubleReport, RecordsCalls, SuppliesValues, TestDouble};
pub(crate) use double::DoubleCore;
pub use expectations::{Expectations, Mismatch};
pub use recorder::{CallRecorder, Retention};
pub use sequence::{SequencePolicy, ValueSequence};

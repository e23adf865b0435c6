//! Entry points shared by the binary and library callers

pub mod orchestration;

pub use orchestration::{compute_record, run_stamp, StampArgs, DEFAULT_BUILD_ID};

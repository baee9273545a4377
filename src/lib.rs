//! Generator for the student id database read by the TA marking exercises.
//!
//! The file is twenty 4 digit records, one per line: ids 0001 through 0019
//! followed by the 9999 end marker.

pub mod error;
pub mod gen;

pub use error::{FileWriteError, Stage};
pub use gen::{check_count, generate, generate_records, write_records};

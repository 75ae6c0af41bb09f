//! Terminal I/O for the `fitcrm` binary: output formatting and the
//! confirmation prompt. Nothing here is part of the library API.

pub mod print;
pub mod prompt;

//! Progress reporters for the `ask` command

pub mod reporter;

//! Upstream endpoints and the ordered registry that holds them.

pub mod entities;
pub mod registry;

//! Read models definitions.

pub mod goal;
pub mod user;

//! Output rendering and report structures

pub mod formatter;
pub mod report;

//! Chat transports
//!
//! The real chat platform is an external collaborator; the console
//! transport feeds the controller from a line-oriented stream instead.

mod console;

pub(crate) use console::run_console;

// Headless stand-in for the converter screens: input parsing, unit
// selection, result labels, the per-screen history table and batch runs

pub mod batch;
pub mod command;
pub mod context;
pub mod converter;


pub use batch::*;
pub use command::*;
pub use context::*;
pub use converter::*;

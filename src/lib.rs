// Crate root - export modules
pub mod board;
pub mod cli;

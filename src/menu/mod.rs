pub mod errors;
pub mod input;
pub mod handler;
pub mod exercises;
pub mod session;

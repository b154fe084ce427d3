//! Classroom exercises: a handful of small numeric, string and array
//! routines in `utils`, and the numbered console menu that drives them in
//! `menu`.

pub mod errors;
pub mod utils;
pub mod menu;

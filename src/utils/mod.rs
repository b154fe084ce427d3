pub mod text;
pub mod math;
pub mod cipher;
pub mod geometry;
pub mod sequence;
pub mod calendar;
pub mod money;
pub mod grading;

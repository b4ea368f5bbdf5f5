pub mod approach;
pub mod counter;
pub mod matrix;

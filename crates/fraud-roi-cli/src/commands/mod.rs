pub mod content;
pub mod positioning;
pub mod roi;

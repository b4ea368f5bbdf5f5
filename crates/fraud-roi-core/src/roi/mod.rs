pub mod assumptions;
pub mod impact;
pub mod inputs;
pub mod projection;

#[cfg(feature = "sensitivity")]
pub mod sensitivity;

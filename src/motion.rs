pub mod builder;
pub mod ease;
pub mod mover;

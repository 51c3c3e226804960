//! Concrete adjustment strategy implementations

pub mod fixed_step;

pub use fixed_step::FixedStepStrategy;

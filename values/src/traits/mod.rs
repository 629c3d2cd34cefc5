mod extract;
mod stepper;

pub use extract::Extract;
pub use stepper::Stepper;

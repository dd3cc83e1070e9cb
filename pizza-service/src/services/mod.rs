pub mod classifier;
pub mod metrics;
pub mod providers;

pub use classifier::PizzaClassifier;

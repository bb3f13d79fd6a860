pub mod settings;
pub mod validation;


pub use settings::*;
pub use validation::*;

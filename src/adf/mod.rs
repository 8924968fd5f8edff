//! This module contains the main material used to define Abstract Dialectical Frameworks.

mod acceptance_condition;
pub use acceptance_condition::AcceptanceCondition;

mod arguments;
pub use arguments::Argument;
pub use arguments::ArgumentSet;
pub use arguments::LabelType;

mod framework;
pub use framework::Adf;

mod interpretation;
pub use interpretation::Interpretation;

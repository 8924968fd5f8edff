//! Propositional vocabulary produced by the transformations.

mod cnf;
pub use cnf::Clause;
pub use cnf::CnfEncoding;

mod pl_formula;
pub use pl_formula::PlFormula;

mod proposition;
pub use proposition::Literal;
pub use proposition::Proposition;

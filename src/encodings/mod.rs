//! Objects used to encode acceptance conditions into CNF.

mod specs;
pub use specs::ConditionCnfEncoder;

mod tseitin_transformer;
pub use tseitin_transformer::TseitinTransformer;

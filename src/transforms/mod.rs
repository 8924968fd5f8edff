//! The generic acceptance condition transformation engines and their clients.
//!
//! The engines perform a single recursive pass over a condition tree, pushing a
//! top-down context into the children of each node and popping a bottom-up value
//! per node. Transformers only implement one hook per connective; the traversal
//! itself, including the polarity propagation rules, is shared.

mod fix_partial_transformer;
pub use fix_partial_transformer::FixPartialTransformer;

mod pl_transformer;
pub use pl_transformer::PlTransformer;

mod polarity;
pub use polarity::DownContext;
pub use polarity::Polarity;

mod specs;
pub use specs::ArtifactSink;
pub use specs::ConditionCollector;
pub use specs::ConditionTransformer;

mod traversal;
pub use traversal::collect;
pub use traversal::collect_into_vec;
pub use traversal::transform;

use crate::adf::{AcceptanceCondition, LabelType};
use crate::logic::{Clause, CnfEncoding, Literal};
use crate::transforms::ArtifactSink;

/// A trait for CNF encoders of acceptance conditions.
pub trait ConditionCnfEncoder<T>
where
    T: LabelType,
{
    /// Encodes an acceptance condition, buffering the emitted clauses.
    ///
    /// The result gives the literal naming the root of the condition and the
    /// emitted clauses.
    fn encode_condition(&mut self, condition: &AcceptanceCondition<T>) -> CnfEncoding;

    /// Encodes an acceptance condition, emitting the clauses to the provided sink.
    ///
    /// The returned literal names the root of the condition.
    /// This variant allows the clauses to be handed one by one to an external
    /// consumer (typically a SAT solver) instead of being buffered.
    fn encode_condition_into(
        &mut self,
        condition: &AcceptanceCondition<T>,
        sink: &mut dyn ArtifactSink<Clause>,
    ) -> Literal;
}

use super::DownContext;
use crate::adf::{Argument, LabelType};

/// A trait for transformations of acceptance condition trees.
///
/// A transformer provides one hook per connective.
/// Each hook receives the top-down context of the node ([`Down`](Self::Down)) and
/// the already-transformed values of its children ([`Up`](Self::Up)), and returns
/// the value of the node.
/// The traversal itself is performed by [`transform`](super::transform), which
/// seeds the context with [`initialize`](Self::initialize) and post-processes the
/// root value with [`finish`](Self::finish).
///
/// The hooks for order-insignificant connectives receive their children's values
/// as a vector; the order of this vector is the visitation order, which carries no
/// meaning.
pub trait ConditionTransformer<T>
where
    T: LabelType,
{
    /// The top-down context type.
    type Down: DownContext;
    /// The bottom-up value type.
    type Up;
    /// The final result type.
    type Output;

    /// Produces the context of the root node.
    fn initialize(&mut self) -> Self::Down;

    /// Transforms a tautology leaf.
    fn transform_tautology(&mut self, down: Self::Down) -> Self::Up;

    /// Transforms a contradiction leaf.
    fn transform_contradiction(&mut self, down: Self::Down) -> Self::Up;

    /// Transforms an argument leaf.
    fn transform_argument(&mut self, down: Self::Down, argument: &Argument<T>) -> Self::Up;

    /// Transforms a negation from the transformed value of its child.
    fn transform_negation(&mut self, down: Self::Down, child: Self::Up) -> Self::Up;

    /// Transforms an implication from the transformed values of its operands.
    fn transform_implication(&mut self, down: Self::Down, left: Self::Up, right: Self::Up)
        -> Self::Up;

    /// Transforms an exclusive disjunction from the transformed values of its operands.
    fn transform_exclusive_disjunction(
        &mut self,
        down: Self::Down,
        left: Self::Up,
        right: Self::Up,
    ) -> Self::Up;

    /// Transforms an equivalence from the transformed values of its children.
    fn transform_equivalence(&mut self, down: Self::Down, children: Vec<Self::Up>) -> Self::Up;

    /// Transforms a conjunction from the transformed values of its children.
    fn transform_conjunction(&mut self, down: Self::Down, children: Vec<Self::Up>) -> Self::Up;

    /// Transforms a disjunction from the transformed values of its children.
    fn transform_disjunction(&mut self, down: Self::Down, children: Vec<Self::Up>) -> Self::Up;

    /// Post-processes the value of the root node, given the root context.
    fn finish(&mut self, up: Self::Up, down: Self::Down) -> Self::Output;
}

/// A write-only sink accumulating the artifacts emitted during a collecting
/// traversal.
///
/// [`Vec<A>`] implements this trait; so may any adapter towards an external
/// consumer, such as a SAT solver fed clause by clause.
pub trait ArtifactSink<A> {
    /// Pushes an artifact to this sink.
    fn emit(&mut self, artifact: A);
}

impl<A> ArtifactSink<A> for Vec<A> {
    fn emit(&mut self, artifact: A) {
        self.push(artifact);
    }
}

/// A trait for transformations that also emit artifacts while visiting nodes.
///
/// This is the [`ConditionTransformer`] contract augmented with a write-only sink
/// handed to every hook: a hook may emit zero or more
/// [`Artifact`](Self::Artifact)s during its own invocation, in addition to
/// returning the bottom-up value of its node.
/// Artifacts accumulate in visitation order and are never consumed by ancestor
/// hooks.
/// The traversal is performed by [`collect`](super::collect).
pub trait ConditionCollector<T>
where
    T: LabelType,
{
    /// The top-down context type.
    type Down: DownContext;
    /// The bottom-up value type.
    type Up;
    /// The type of the emitted artifacts.
    type Artifact;
    /// The final result type.
    type Output;

    /// Produces the context of the root node.
    fn initialize(&mut self) -> Self::Down;

    /// Collects a tautology leaf.
    fn collect_tautology(
        &mut self,
        down: Self::Down,
        sink: &mut dyn ArtifactSink<Self::Artifact>,
    ) -> Self::Up;

    /// Collects a contradiction leaf.
    fn collect_contradiction(
        &mut self,
        down: Self::Down,
        sink: &mut dyn ArtifactSink<Self::Artifact>,
    ) -> Self::Up;

    /// Collects an argument leaf.
    fn collect_argument(
        &mut self,
        down: Self::Down,
        sink: &mut dyn ArtifactSink<Self::Artifact>,
        argument: &Argument<T>,
    ) -> Self::Up;

    /// Collects a negation from the transformed value of its child.
    fn collect_negation(
        &mut self,
        down: Self::Down,
        sink: &mut dyn ArtifactSink<Self::Artifact>,
        child: Self::Up,
    ) -> Self::Up;

    /// Collects an implication from the transformed values of its operands.
    fn collect_implication(
        &mut self,
        down: Self::Down,
        sink: &mut dyn ArtifactSink<Self::Artifact>,
        left: Self::Up,
        right: Self::Up,
    ) -> Self::Up;

    /// Collects an exclusive disjunction from the transformed values of its operands.
    fn collect_exclusive_disjunction(
        &mut self,
        down: Self::Down,
        sink: &mut dyn ArtifactSink<Self::Artifact>,
        left: Self::Up,
        right: Self::Up,
    ) -> Self::Up;

    /// Collects an equivalence from the transformed values of its children.
    fn collect_equivalence(
        &mut self,
        down: Self::Down,
        sink: &mut dyn ArtifactSink<Self::Artifact>,
        children: Vec<Self::Up>,
    ) -> Self::Up;

    /// Collects a conjunction from the transformed values of its children.
    fn collect_conjunction(
        &mut self,
        down: Self::Down,
        sink: &mut dyn ArtifactSink<Self::Artifact>,
        children: Vec<Self::Up>,
    ) -> Self::Up;

    /// Collects a disjunction from the transformed values of its children.
    fn collect_disjunction(
        &mut self,
        down: Self::Down,
        sink: &mut dyn ArtifactSink<Self::Artifact>,
        children: Vec<Self::Up>,
    ) -> Self::Up;

    /// Post-processes the value of the root node, given the root context.
    fn finish(&mut self, up: Self::Up, down: Self::Down) -> Self::Output;
}

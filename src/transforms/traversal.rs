use super::{ArtifactSink, ConditionCollector, ConditionTransformer, DownContext};
use crate::adf::{AcceptanceCondition, LabelType};

/// Transforms an acceptance condition tree.
///
/// The tree is traversed in a single recursive pass.
/// The context of the root is given by the transformer's `initialize` hook; the
/// context of each child is derived from the context of its parent:
///
/// * the child of a negation and the left operand of an implication get the
///   parent's context through [`under_negation`](DownContext::under_negation);
/// * the children of an equivalence get the parent's context through
///   [`neutralized`](DownContext::neutralized), as every direction of every
///   pairwise equality must be preserved whatever the position of the equivalence;
/// * all other children inherit the parent's context unchanged.
///
/// The recursion depth is the depth of the tree.
///
/// # Panics
///
/// Panics if the tree contains an n-ary connective with no child.
pub fn transform<T, X>(transformer: &mut X, condition: &AcceptanceCondition<T>) -> X::Output
where
    T: LabelType,
    X: ConditionTransformer<T>,
{
    let down = transformer.initialize();
    let up = transform_node(transformer, condition, down);
    transformer.finish(up, down)
}

fn transform_node<T, X>(
    transformer: &mut X,
    condition: &AcceptanceCondition<T>,
    down: X::Down,
) -> X::Up
where
    T: LabelType,
    X: ConditionTransformer<T>,
{
    match condition {
        AcceptanceCondition::Tautology => transformer.transform_tautology(down),
        AcceptanceCondition::Contradiction => transformer.transform_contradiction(down),
        AcceptanceCondition::Argument(a) => transformer.transform_argument(down, a),
        AcceptanceCondition::Negation(c) => {
            let child = transform_node(transformer, c, down.under_negation());
            transformer.transform_negation(down, child)
        }
        AcceptanceCondition::Implication(l, r) => {
            let left = transform_node(transformer, l, down.under_negation());
            let right = transform_node(transformer, r, down);
            transformer.transform_implication(down, left, right)
        }
        AcceptanceCondition::ExclusiveDisjunction(l, r) => {
            let left = transform_node(transformer, l, down);
            let right = transform_node(transformer, r, down);
            transformer.transform_exclusive_disjunction(down, left, right)
        }
        AcceptanceCondition::Equivalence(children) => {
            let children = transform_children(
                transformer,
                check_children(children, "an equivalence"),
                down.neutralized(),
            );
            transformer.transform_equivalence(down, children)
        }
        AcceptanceCondition::Conjunction(children) => {
            let children =
                transform_children(transformer, check_children(children, "a conjunction"), down);
            transformer.transform_conjunction(down, children)
        }
        AcceptanceCondition::Disjunction(children) => {
            let children =
                transform_children(transformer, check_children(children, "a disjunction"), down);
            transformer.transform_disjunction(down, children)
        }
    }
}

fn transform_children<T, X>(
    transformer: &mut X,
    children: &[AcceptanceCondition<T>],
    down: X::Down,
) -> Vec<X::Up>
where
    T: LabelType,
    X: ConditionTransformer<T>,
{
    children
        .iter()
        .map(|c| transform_node(transformer, c, down))
        .collect()
}

/// Transforms an acceptance condition tree while collecting the emitted artifacts.
///
/// The traversal and the context propagation rules are the ones of [`transform`];
/// in addition, each hook of the collector may emit artifacts to the provided
/// sink. Artifacts accumulate in visitation order: the artifacts of the children
/// of a node are emitted before the ones of the node itself.
///
/// # Panics
///
/// Panics if the tree contains an n-ary connective with no child.
pub fn collect<T, C>(
    collector: &mut C,
    condition: &AcceptanceCondition<T>,
    sink: &mut dyn ArtifactSink<C::Artifact>,
) -> C::Output
where
    T: LabelType,
    C: ConditionCollector<T>,
{
    let down = collector.initialize();
    let up = collect_node(collector, condition, down, sink);
    collector.finish(up, down)
}

/// Transforms an acceptance condition tree, returning the emitted artifacts along
/// with the result.
///
/// This is [`collect`] with a fresh vector as sink.
pub fn collect_into_vec<T, C>(
    collector: &mut C,
    condition: &AcceptanceCondition<T>,
) -> (C::Output, Vec<C::Artifact>)
where
    T: LabelType,
    C: ConditionCollector<T>,
{
    let mut artifacts = Vec::new();
    let output = collect(collector, condition, &mut artifacts);
    (output, artifacts)
}

fn collect_node<T, C>(
    collector: &mut C,
    condition: &AcceptanceCondition<T>,
    down: C::Down,
    sink: &mut dyn ArtifactSink<C::Artifact>,
) -> C::Up
where
    T: LabelType,
    C: ConditionCollector<T>,
{
    match condition {
        AcceptanceCondition::Tautology => collector.collect_tautology(down, sink),
        AcceptanceCondition::Contradiction => collector.collect_contradiction(down, sink),
        AcceptanceCondition::Argument(a) => collector.collect_argument(down, sink, a),
        AcceptanceCondition::Negation(c) => {
            let child = collect_node(collector, c, down.under_negation(), sink);
            collector.collect_negation(down, sink, child)
        }
        AcceptanceCondition::Implication(l, r) => {
            let left = collect_node(collector, l, down.under_negation(), sink);
            let right = collect_node(collector, r, down, sink);
            collector.collect_implication(down, sink, left, right)
        }
        AcceptanceCondition::ExclusiveDisjunction(l, r) => {
            let left = collect_node(collector, l, down, sink);
            let right = collect_node(collector, r, down, sink);
            collector.collect_exclusive_disjunction(down, sink, left, right)
        }
        AcceptanceCondition::Equivalence(children) => {
            let children = collect_children(
                collector,
                check_children(children, "an equivalence"),
                down.neutralized(),
                sink,
            );
            collector.collect_equivalence(down, sink, children)
        }
        AcceptanceCondition::Conjunction(children) => {
            let children = collect_children(
                collector,
                check_children(children, "a conjunction"),
                down,
                sink,
            );
            collector.collect_conjunction(down, sink, children)
        }
        AcceptanceCondition::Disjunction(children) => {
            let children = collect_children(
                collector,
                check_children(children, "a disjunction"),
                down,
                sink,
            );
            collector.collect_disjunction(down, sink, children)
        }
    }
}

fn collect_children<T, C>(
    collector: &mut C,
    children: &[AcceptanceCondition<T>],
    down: C::Down,
    sink: &mut dyn ArtifactSink<C::Artifact>,
) -> Vec<C::Up>
where
    T: LabelType,
    C: ConditionCollector<T>,
{
    children
        .iter()
        .map(|c| collect_node(collector, c, down, sink))
        .collect()
}

fn check_children<'a, T>(
    children: &'a [AcceptanceCondition<T>],
    connective: &str,
) -> &'a [AcceptanceCondition<T>]
where
    T: LabelType,
{
    if children.is_empty() {
        panic!("{} must have at least one child", connective);
    }
    children
}

use super::ConditionTransformer;
use crate::adf::{Argument, LabelType};
use crate::logic::PlFormula;

/// A transformer mapping an acceptance condition to a plain propositional formula.
///
/// The mapping is one-to-one for every connective but the equivalence, since
/// [`PlFormula`] has no n-ary equivalence.
/// An equivalence with exactly two children becomes a binary equivalence node;
/// with any other number of children it becomes the conjunction of the cyclic
/// implication chain `c1 => c2`, ..., `ck => c1`.
///
/// # Example
///
/// ```
/// # use aconite::adf::{AcceptanceCondition, ArgumentSet};
/// # use aconite::logic::PlFormula;
/// # use aconite::transforms::{transform, PlTransformer};
/// let arguments = ArgumentSet::new_with_labels(&["a"]);
/// let condition = AcceptanceCondition::negation(AcceptanceCondition::argument(
///     arguments.get_argument(&"a").unwrap(),
/// ));
/// let formula = transform(&mut PlTransformer::default(), &condition);
/// assert_eq!(PlFormula::Negation(Box::new(PlFormula::Atom("a"))), formula);
/// ```
#[derive(Default)]
pub struct PlTransformer;

impl<T> ConditionTransformer<T> for PlTransformer
where
    T: LabelType,
{
    type Down = ();
    type Up = PlFormula<T>;
    type Output = PlFormula<T>;

    fn initialize(&mut self) {}

    fn transform_tautology(&mut self, _down: ()) -> Self::Up {
        PlFormula::True
    }

    fn transform_contradiction(&mut self, _down: ()) -> Self::Up {
        PlFormula::False
    }

    fn transform_argument(&mut self, _down: (), argument: &Argument<T>) -> Self::Up {
        PlFormula::Atom(argument.label().clone())
    }

    fn transform_negation(&mut self, _down: (), child: Self::Up) -> Self::Up {
        PlFormula::Negation(Box::new(child))
    }

    fn transform_implication(&mut self, _down: (), left: Self::Up, right: Self::Up) -> Self::Up {
        PlFormula::Implication(Box::new(left), Box::new(right))
    }

    fn transform_exclusive_disjunction(
        &mut self,
        _down: (),
        left: Self::Up,
        right: Self::Up,
    ) -> Self::Up {
        PlFormula::ExclusiveDisjunction(Box::new(left), Box::new(right))
    }

    fn transform_equivalence(&mut self, _down: (), mut children: Vec<Self::Up>) -> Self::Up {
        if children.len() == 2 {
            let second = children.pop().unwrap();
            let first = children.pop().unwrap();
            return PlFormula::Equivalence(Box::new(first), Box::new(second));
        }
        let cycle = (0..children.len())
            .map(|i| {
                PlFormula::Implication(
                    Box::new(children[i].clone()),
                    Box::new(children[(i + 1) % children.len()].clone()),
                )
            })
            .collect();
        PlFormula::Conjunction(cycle)
    }

    fn transform_conjunction(&mut self, _down: (), children: Vec<Self::Up>) -> Self::Up {
        PlFormula::Conjunction(children)
    }

    fn transform_disjunction(&mut self, _down: (), children: Vec<Self::Up>) -> Self::Up {
        PlFormula::Disjunction(children)
    }

    fn finish(&mut self, up: Self::Up, _down: ()) -> Self::Output {
        up
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adf::{AcceptanceCondition, ArgumentSet};
    use crate::transforms::transform;

    fn leaf(
        arguments: &ArgumentSet<&'static str>,
        label: &'static str,
    ) -> AcceptanceCondition<&'static str> {
        AcceptanceCondition::argument(arguments.get_argument(&label).unwrap())
    }

    #[test]
    fn test_structural_mapping() {
        let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let condition = AcceptanceCondition::implication(
            AcceptanceCondition::disjunction(vec![
                leaf(&arguments, "a"),
                AcceptanceCondition::tautology(),
            ]),
            AcceptanceCondition::exclusive_disjunction(
                AcceptanceCondition::negation(leaf(&arguments, "b")),
                AcceptanceCondition::contradiction(),
            ),
        );
        let formula = transform(&mut PlTransformer, &condition);
        assert_eq!(
            "((a || true) => (!b ^ false))",
            formula.to_string()
        );
    }

    #[test]
    fn test_binary_equivalence_maps_to_one_node() {
        let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
        let condition =
            AcceptanceCondition::equivalence(vec![leaf(&arguments, "a"), leaf(&arguments, "b")]);
        let formula = transform(&mut PlTransformer, &condition);
        assert_eq!(
            PlFormula::Equivalence(
                Box::new(PlFormula::Atom("a")),
                Box::new(PlFormula::Atom("b"))
            ),
            formula
        );
    }

    #[test]
    fn test_ternary_equivalence_maps_to_implication_cycle() {
        let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let condition = AcceptanceCondition::equivalence(vec![
            leaf(&arguments, "a"),
            leaf(&arguments, "b"),
            leaf(&arguments, "c"),
        ]);
        let formula = transform(&mut PlTransformer, &condition);
        let atom = |l: &'static str| Box::new(PlFormula::Atom(l));
        assert_eq!(
            PlFormula::Conjunction(vec![
                PlFormula::Implication(atom("a"), atom("b")),
                PlFormula::Implication(atom("b"), atom("c")),
                PlFormula::Implication(atom("c"), atom("a")),
            ]),
            formula
        );
    }

    #[test]
    fn test_degenerate_equivalence_maps_to_self_loop() {
        let arguments = ArgumentSet::new_with_labels(&["a"]);
        let condition =
            AcceptanceCondition::equivalence(vec![leaf(&arguments, "a"), leaf(&arguments, "a")]);
        let formula = transform(&mut PlTransformer, &condition);
        assert_eq!(
            PlFormula::Conjunction(vec![PlFormula::Implication(
                Box::new(PlFormula::Atom("a")),
                Box::new(PlFormula::Atom("a"))
            )]),
            formula
        );
    }
}

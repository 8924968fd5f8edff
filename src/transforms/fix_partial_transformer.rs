use super::ConditionTransformer;
use crate::adf::{AcceptanceCondition, Argument, Interpretation, LabelType};

/// A transformer fixing the decided arguments of a partial interpretation.
///
/// Each argument leaf decided by the interpretation is replaced by
/// [`AcceptanceCondition::Tautology`] or [`AcceptanceCondition::Contradiction`];
/// undecided leaves are kept.
/// The resulting tree is then algebraically collapsed on the way up: constants
/// short-circuit conjunctions and disjunctions, degenerate singletons collapse to
/// their child, and so on.
///
/// For every total extension of the interpretation, evaluating the simplified
/// tree gives the same value as evaluating the original one.
///
/// # Example
///
/// ```
/// # use aconite::adf::{AcceptanceCondition, ArgumentSet, Interpretation};
/// # use aconite::transforms::{transform, FixPartialTransformer};
/// let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
/// let condition = AcceptanceCondition::conjunction(vec![
///     AcceptanceCondition::argument(arguments.get_argument(&"a").unwrap()),
///     AcceptanceCondition::argument(arguments.get_argument(&"b").unwrap()),
/// ]);
/// let mut interpretation = Interpretation::new();
/// interpretation.set_satisfied("a");
/// let mut transformer = FixPartialTransformer::new(&interpretation);
/// let simplified = transform(&mut transformer, &condition);
/// assert_eq!(
///     AcceptanceCondition::argument(arguments.get_argument(&"b").unwrap()),
///     simplified,
/// );
/// ```
pub struct FixPartialTransformer<'a, T>
where
    T: LabelType,
{
    interpretation: &'a Interpretation<T>,
}

impl<'a, T> FixPartialTransformer<'a, T>
where
    T: LabelType,
{
    /// Builds a new transformer given the partial interpretation to fix.
    pub fn new(interpretation: &'a Interpretation<T>) -> Self {
        FixPartialTransformer { interpretation }
    }
}

impl<T> ConditionTransformer<T> for FixPartialTransformer<'_, T>
where
    T: LabelType,
{
    type Down = ();
    type Up = AcceptanceCondition<T>;
    type Output = AcceptanceCondition<T>;

    fn initialize(&mut self) {}

    fn transform_tautology(&mut self, _down: ()) -> Self::Up {
        AcceptanceCondition::Tautology
    }

    fn transform_contradiction(&mut self, _down: ()) -> Self::Up {
        AcceptanceCondition::Contradiction
    }

    fn transform_argument(&mut self, _down: (), argument: &Argument<T>) -> Self::Up {
        match self.interpretation.value_of(argument.label()) {
            Some(true) => AcceptanceCondition::Tautology,
            Some(false) => AcceptanceCondition::Contradiction,
            None => AcceptanceCondition::Argument(argument.clone()),
        }
    }

    fn transform_negation(&mut self, _down: (), child: Self::Up) -> Self::Up {
        match child {
            AcceptanceCondition::Tautology => AcceptanceCondition::Contradiction,
            AcceptanceCondition::Contradiction => AcceptanceCondition::Tautology,
            c => AcceptanceCondition::negation(c),
        }
    }

    fn transform_implication(&mut self, _down: (), left: Self::Up, right: Self::Up) -> Self::Up {
        if left == AcceptanceCondition::Contradiction || right == AcceptanceCondition::Tautology {
            AcceptanceCondition::Tautology
        } else if left == AcceptanceCondition::Tautology {
            if right == AcceptanceCondition::Contradiction {
                AcceptanceCondition::Contradiction
            } else {
                right
            }
        } else if right == AcceptanceCondition::Contradiction {
            AcceptanceCondition::negation(left)
        } else {
            AcceptanceCondition::implication(left, right)
        }
    }

    fn transform_exclusive_disjunction(
        &mut self,
        _down: (),
        left: Self::Up,
        right: Self::Up,
    ) -> Self::Up {
        if left == right {
            AcceptanceCondition::Contradiction
        } else if left == AcceptanceCondition::Contradiction {
            right
        } else if right == AcceptanceCondition::Contradiction {
            left
        } else if left == AcceptanceCondition::Tautology {
            self.transform_negation((), right)
        } else if right == AcceptanceCondition::Tautology {
            self.transform_negation((), left)
        } else {
            AcceptanceCondition::exclusive_disjunction(left, right)
        }
    }

    fn transform_equivalence(&mut self, _down: (), children: Vec<Self::Up>) -> Self::Up {
        if children.iter().all(|c| c == &children[0]) {
            return AcceptanceCondition::Tautology;
        }
        let has_tautology = children.contains(&AcceptanceCondition::Tautology);
        let has_contradiction = children.contains(&AcceptanceCondition::Contradiction);
        match (has_tautology, has_contradiction) {
            (true, true) => AcceptanceCondition::Contradiction,
            (false, false) => AcceptanceCondition::equivalence(children),
            // one constant kind: all children must take its value
            (true, false) => AcceptanceCondition::conjunction(children),
            (false, true) => AcceptanceCondition::conjunction(
                children
                    .into_iter()
                    .map(|c| self.transform_negation((), c))
                    .collect(),
            ),
        }
    }

    fn transform_conjunction(&mut self, _down: (), children: Vec<Self::Up>) -> Self::Up {
        if children.contains(&AcceptanceCondition::Contradiction) {
            return AcceptanceCondition::Contradiction;
        }
        let mut remaining = children
            .into_iter()
            .filter(|c| c != &AcceptanceCondition::Tautology)
            .collect::<Vec<_>>();
        match remaining.len() {
            0 => AcceptanceCondition::Tautology,
            1 => remaining.swap_remove(0),
            _ => AcceptanceCondition::conjunction(remaining),
        }
    }

    fn transform_disjunction(&mut self, _down: (), children: Vec<Self::Up>) -> Self::Up {
        if children.contains(&AcceptanceCondition::Tautology) {
            return AcceptanceCondition::Tautology;
        }
        let mut remaining = children
            .into_iter()
            .filter(|c| c != &AcceptanceCondition::Contradiction)
            .collect::<Vec<_>>();
        match remaining.len() {
            0 => AcceptanceCondition::Contradiction,
            1 => remaining.swap_remove(0),
            _ => AcceptanceCondition::disjunction(remaining),
        }
    }

    fn finish(&mut self, up: Self::Up, _down: ()) -> Self::Output {
        up
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adf::ArgumentSet;
    use crate::transforms::transform;

    fn leaf(
        arguments: &ArgumentSet<&'static str>,
        label: &'static str,
    ) -> AcceptanceCondition<&'static str> {
        AcceptanceCondition::argument(arguments.get_argument(&label).unwrap())
    }

    fn simplify(
        condition: &AcceptanceCondition<&'static str>,
        interpretation: &Interpretation<&'static str>,
    ) -> AcceptanceCondition<&'static str> {
        let mut transformer = FixPartialTransformer::new(interpretation);
        transform(&mut transformer, condition)
    }

    #[test]
    fn test_conjunction_short_circuit() {
        let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let condition = AcceptanceCondition::conjunction(vec![
            leaf(&arguments, "a"),
            leaf(&arguments, "b"),
            leaf(&arguments, "c"),
        ]);
        let mut interpretation = Interpretation::new();
        interpretation.set_satisfied("a");
        interpretation.set_unsatisfied("b");
        assert_eq!(
            AcceptanceCondition::Contradiction,
            simplify(&condition, &interpretation)
        );
    }

    #[test]
    fn test_disjunction_short_circuit() {
        let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let condition = AcceptanceCondition::disjunction(vec![
            leaf(&arguments, "a"),
            leaf(&arguments, "b"),
            leaf(&arguments, "c"),
        ]);
        let mut interpretation = Interpretation::new();
        interpretation.set_satisfied("b");
        assert_eq!(
            AcceptanceCondition::Tautology,
            simplify(&condition, &interpretation)
        );
    }

    #[test]
    fn test_disjunction_drops_contradictions_and_collapses() {
        let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let condition = AcceptanceCondition::disjunction(vec![
            leaf(&arguments, "a"),
            leaf(&arguments, "b"),
            leaf(&arguments, "c"),
        ]);
        let mut interpretation = Interpretation::new();
        interpretation.set_unsatisfied("a");
        interpretation.set_unsatisfied("c");
        assert_eq!(leaf(&arguments, "b"), simplify(&condition, &interpretation));
    }

    #[test]
    fn test_implication_cases() {
        let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
        let implication = AcceptanceCondition::implication(leaf(&arguments, "a"), leaf(&arguments, "b"));
        let mut unsat_premise = Interpretation::new();
        unsat_premise.set_unsatisfied("a");
        assert_eq!(
            AcceptanceCondition::Tautology,
            simplify(&implication, &unsat_premise)
        );
        let mut sat_premise = Interpretation::new();
        sat_premise.set_satisfied("a");
        assert_eq!(leaf(&arguments, "b"), simplify(&implication, &sat_premise));
        let mut unsat_conclusion = Interpretation::new();
        unsat_conclusion.set_unsatisfied("b");
        assert_eq!(
            AcceptanceCondition::negation(leaf(&arguments, "a")),
            simplify(&implication, &unsat_conclusion)
        );
        let mut both = Interpretation::new();
        both.set_satisfied("a");
        both.set_unsatisfied("b");
        assert_eq!(
            AcceptanceCondition::Contradiction,
            simplify(&implication, &both)
        );
        assert_eq!(implication, simplify(&implication, &Interpretation::new()));
    }

    #[test]
    fn test_equivalence_cases() {
        let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let equivalence = AcceptanceCondition::equivalence(vec![
            leaf(&arguments, "a"),
            leaf(&arguments, "b"),
            leaf(&arguments, "c"),
        ]);
        // both constants present
        let mut opposite = Interpretation::new();
        opposite.set_satisfied("a");
        opposite.set_unsatisfied("b");
        assert_eq!(
            AcceptanceCondition::Contradiction,
            simplify(&equivalence, &opposite)
        );
        // a tautology forces the remaining children
        let mut one_true = Interpretation::new();
        one_true.set_satisfied("a");
        assert_eq!(
            AcceptanceCondition::conjunction(vec![
                AcceptanceCondition::Tautology,
                leaf(&arguments, "b"),
                leaf(&arguments, "c"),
            ]),
            simplify(&equivalence, &one_true)
        );
        // a contradiction forces the negation of the remaining children
        let mut one_false = Interpretation::new();
        one_false.set_unsatisfied("a");
        assert_eq!(
            AcceptanceCondition::conjunction(vec![
                AcceptanceCondition::Tautology,
                AcceptanceCondition::negation(leaf(&arguments, "b")),
                AcceptanceCondition::negation(leaf(&arguments, "c")),
            ]),
            simplify(&equivalence, &one_false)
        );
        // no constant: kept unchanged
        assert_eq!(equivalence, simplify(&equivalence, &Interpretation::new()));
    }

    #[test]
    fn test_equivalence_all_equal_children() {
        let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
        let equivalence = AcceptanceCondition::equivalence(vec![
            leaf(&arguments, "a"),
            leaf(&arguments, "b"),
        ]);
        let mut both_true = Interpretation::new();
        both_true.set_satisfied("a");
        both_true.set_satisfied("b");
        assert_eq!(
            AcceptanceCondition::Tautology,
            simplify(&equivalence, &both_true)
        );
    }

    #[test]
    fn test_exclusive_disjunction_cases() {
        let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
        let xor = AcceptanceCondition::exclusive_disjunction(
            leaf(&arguments, "a"),
            leaf(&arguments, "b"),
        );
        let mut one_false = Interpretation::new();
        one_false.set_unsatisfied("a");
        assert_eq!(leaf(&arguments, "b"), simplify(&xor, &one_false));
        let mut one_true = Interpretation::new();
        one_true.set_satisfied("a");
        assert_eq!(
            AcceptanceCondition::negation(leaf(&arguments, "b")),
            simplify(&xor, &one_true)
        );
        let mut opposite = Interpretation::new();
        opposite.set_satisfied("a");
        opposite.set_unsatisfied("b");
        assert_eq!(AcceptanceCondition::Tautology, simplify(&xor, &opposite));
        let mut both_true = Interpretation::new();
        both_true.set_satisfied("a");
        both_true.set_satisfied("b");
        assert_eq!(
            AcceptanceCondition::Contradiction,
            simplify(&xor, &both_true)
        );
        assert_eq!(xor, simplify(&xor, &Interpretation::new()));
    }

    #[test]
    fn test_xor_syntactic_equality() {
        let arguments = ArgumentSet::new_with_labels(&["a"]);
        let xor = AcceptanceCondition::ExclusiveDisjunction(
            Box::new(leaf(&arguments, "a")),
            Box::new(leaf(&arguments, "a")),
        );
        assert_eq!(
            AcceptanceCondition::Contradiction,
            simplify(&xor, &Interpretation::new())
        );
    }

    #[test]
    fn test_negation_of_constants() {
        let condition = AcceptanceCondition::<&str>::negation(AcceptanceCondition::tautology());
        assert_eq!(
            AcceptanceCondition::Contradiction,
            simplify(&condition, &Interpretation::new())
        );
        let condition = AcceptanceCondition::<&str>::negation(AcceptanceCondition::contradiction());
        assert_eq!(
            AcceptanceCondition::Tautology,
            simplify(&condition, &Interpretation::new())
        );
    }

    #[test]
    fn test_constant_only_trees_reach_a_constant() {
        let condition = AcceptanceCondition::<&str>::implication(
            AcceptanceCondition::conjunction(vec![
                AcceptanceCondition::tautology(),
                AcceptanceCondition::negation(AcceptanceCondition::contradiction()),
            ]),
            AcceptanceCondition::exclusive_disjunction(
                AcceptanceCondition::tautology(),
                AcceptanceCondition::contradiction(),
            ),
        );
        let interpretation = Interpretation::new();
        let simplified = simplify(&condition, &interpretation);
        assert_eq!(AcceptanceCondition::Tautology, simplified);
        // simplification is idempotent
        assert_eq!(simplified, simplify(&simplified, &interpretation));
    }

    #[test]
    fn test_total_extensions_preserve_evaluation() {
        let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let condition = AcceptanceCondition::implication(
            AcceptanceCondition::equivalence(vec![leaf(&arguments, "a"), leaf(&arguments, "b")]),
            AcceptanceCondition::exclusive_disjunction(
                leaf(&arguments, "b"),
                AcceptanceCondition::negation(leaf(&arguments, "c")),
            ),
        );
        let mut interpretation = Interpretation::new();
        interpretation.set_satisfied("a");
        let simplified = simplify(&condition, &interpretation);
        for extension in 0..4usize {
            let model = move |arg: &Argument<&'static str>| match *arg.label() {
                "a" => true,
                "b" => extension & 1 == 1,
                _ => extension & 2 == 2,
            };
            assert_eq!(condition.evaluate(&model), simplified.evaluate(&model));
        }
    }
}

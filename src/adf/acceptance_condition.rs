use super::{Argument, LabelType};

/// The acceptance condition of an ADF statement.
///
/// An acceptance condition is a propositional formula over the arguments of the
/// framework, given as an immutable tree.
/// The n-ary connectives hold their children as sets: the order of the children is
/// not meaningful and structurally equal duplicates collapse.
///
/// Although the variants are public (allowing exhaustive pattern matching), trees
/// should be built with the associated constructor functions, which enforce the
/// connective invariants.
///
/// # Example
///
/// ```
/// # use aconite::adf::{AcceptanceCondition, ArgumentSet};
/// let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
/// let condition = AcceptanceCondition::conjunction(vec![
///     AcceptanceCondition::argument(arguments.get_argument(&"a").unwrap()),
///     AcceptanceCondition::negation(AcceptanceCondition::argument(
///         arguments.get_argument(&"b").unwrap(),
///     )),
/// ]);
/// assert_eq!(1, condition.iter_arguments().filter(|a| a.label() == &"a").count());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AcceptanceCondition<T>
where
    T: LabelType,
{
    /// The condition that always holds.
    Tautology,
    /// The condition that never holds.
    Contradiction,
    /// A leaf referring to an argument of the framework.
    Argument(Argument<T>),
    /// The negation of a condition.
    Negation(Box<AcceptanceCondition<T>>),
    /// An implication; the order of the operands is meaningful.
    Implication(Box<AcceptanceCondition<T>>, Box<AcceptanceCondition<T>>),
    /// An exclusive disjunction; the order of the operands is meaningful.
    ExclusiveDisjunction(Box<AcceptanceCondition<T>>, Box<AcceptanceCondition<T>>),
    /// An n-ary equivalence; holds iff all children share the same truth value.
    Equivalence(Vec<AcceptanceCondition<T>>),
    /// An n-ary conjunction.
    Conjunction(Vec<AcceptanceCondition<T>>),
    /// An n-ary disjunction.
    Disjunction(Vec<AcceptanceCondition<T>>),
}

impl<T> AcceptanceCondition<T>
where
    T: LabelType,
{
    /// Builds the condition that always holds.
    pub fn tautology() -> Self {
        AcceptanceCondition::Tautology
    }

    /// Builds the condition that never holds.
    pub fn contradiction() -> Self {
        AcceptanceCondition::Contradiction
    }

    /// Builds a leaf condition referring to an argument.
    pub fn argument(argument: &Argument<T>) -> Self {
        AcceptanceCondition::Argument(argument.clone())
    }

    /// Builds the negation of a condition.
    pub fn negation(child: Self) -> Self {
        AcceptanceCondition::Negation(Box::new(child))
    }

    /// Builds an implication from its left (premise) and right (conclusion) operands.
    pub fn implication(left: Self, right: Self) -> Self {
        AcceptanceCondition::Implication(Box::new(left), Box::new(right))
    }

    /// Builds an exclusive disjunction from its two operands.
    pub fn exclusive_disjunction(left: Self, right: Self) -> Self {
        AcceptanceCondition::ExclusiveDisjunction(Box::new(left), Box::new(right))
    }

    /// Builds an n-ary equivalence.
    ///
    /// Structurally equal children collapse to their first occurrence.
    /// A single (distinct) child gives a degenerate but valid equivalence, which is
    /// trivially true.
    ///
    /// # Panics
    ///
    /// Panics if no child is provided.
    pub fn equivalence(children: Vec<Self>) -> Self {
        AcceptanceCondition::Equivalence(Self::dedup_children(children, "an equivalence"))
    }

    /// Builds an n-ary conjunction.
    ///
    /// Structurally equal children collapse to their first occurrence.
    /// A single (distinct) child gives a degenerate but valid conjunction, equivalent
    /// to this child.
    ///
    /// # Panics
    ///
    /// Panics if no child is provided.
    pub fn conjunction(children: Vec<Self>) -> Self {
        AcceptanceCondition::Conjunction(Self::dedup_children(children, "a conjunction"))
    }

    /// Builds an n-ary disjunction.
    ///
    /// Structurally equal children collapse to their first occurrence.
    /// A single (distinct) child gives a degenerate but valid disjunction, equivalent
    /// to this child.
    ///
    /// # Panics
    ///
    /// Panics if no child is provided.
    pub fn disjunction(children: Vec<Self>) -> Self {
        AcceptanceCondition::Disjunction(Self::dedup_children(children, "a disjunction"))
    }

    fn dedup_children(children: Vec<Self>, connective: &str) -> Vec<Self> {
        if children.is_empty() {
            panic!("cannot build {} with no child", connective);
        }
        let mut distinct: Vec<Self> = Vec::with_capacity(children.len());
        for child in children {
            if !distinct.contains(&child) {
                distinct.push(child);
            }
        }
        distinct
    }

    /// Evaluates this condition under a total model of the arguments.
    ///
    /// The model maps each argument leaf to its truth value.
    ///
    /// # Panics
    ///
    /// Panics if the tree contains an n-ary connective with no child.
    pub fn evaluate(&self, model: &dyn Fn(&Argument<T>) -> bool) -> bool {
        match self {
            AcceptanceCondition::Tautology => true,
            AcceptanceCondition::Contradiction => false,
            AcceptanceCondition::Argument(a) => model(a),
            AcceptanceCondition::Negation(c) => !c.evaluate(model),
            AcceptanceCondition::Implication(l, r) => !l.evaluate(model) || r.evaluate(model),
            AcceptanceCondition::ExclusiveDisjunction(l, r) => {
                l.evaluate(model) != r.evaluate(model)
            }
            AcceptanceCondition::Equivalence(children) => {
                let first = Self::nonempty(children, "an equivalence")[0].evaluate(model);
                children.iter().skip(1).all(|c| c.evaluate(model) == first)
            }
            AcceptanceCondition::Conjunction(children) => Self::nonempty(children, "a conjunction")
                .iter()
                .all(|c| c.evaluate(model)),
            AcceptanceCondition::Disjunction(children) => Self::nonempty(children, "a disjunction")
                .iter()
                .any(|c| c.evaluate(model)),
        }
    }

    /// Returns an iterator over the argument leaves of this condition.
    ///
    /// An argument appearing in multiple leaves is yielded once per occurrence.
    pub fn iter_arguments(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        let mut leaves = Vec::new();
        self.collect_arguments(&mut leaves);
        leaves.into_iter()
    }

    fn collect_arguments<'a>(&'a self, leaves: &mut Vec<&'a Argument<T>>) {
        match self {
            AcceptanceCondition::Tautology | AcceptanceCondition::Contradiction => {}
            AcceptanceCondition::Argument(a) => leaves.push(a),
            AcceptanceCondition::Negation(c) => c.collect_arguments(leaves),
            AcceptanceCondition::Implication(l, r)
            | AcceptanceCondition::ExclusiveDisjunction(l, r) => {
                l.collect_arguments(leaves);
                r.collect_arguments(leaves);
            }
            AcceptanceCondition::Equivalence(children)
            | AcceptanceCondition::Conjunction(children)
            | AcceptanceCondition::Disjunction(children) => {
                children.iter().for_each(|c| c.collect_arguments(leaves))
            }
        }
    }

    fn nonempty<'a>(children: &'a [Self], connective: &str) -> &'a [Self] {
        if children.is_empty() {
            panic!("{} must have at least one child", connective);
        }
        children
    }
}

use crate::adf::LabelType;
use std::fmt::Display;

/// A plain propositional logic formula.
///
/// This is the target type of the
/// [`PlTransformer`](crate::transforms::PlTransformer).
/// Unlike [`AcceptanceCondition`](crate::adf::AcceptanceCondition), the
/// equivalence connective is binary only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlFormula<T>
where
    T: LabelType,
{
    /// The formula that always holds.
    True,
    /// The formula that never holds.
    False,
    /// An atomic proposition.
    Atom(T),
    /// The negation of a formula.
    Negation(Box<PlFormula<T>>),
    /// An n-ary conjunction.
    Conjunction(Vec<PlFormula<T>>),
    /// An n-ary disjunction.
    Disjunction(Vec<PlFormula<T>>),
    /// A (binary) implication.
    Implication(Box<PlFormula<T>>, Box<PlFormula<T>>),
    /// A (binary) equivalence.
    Equivalence(Box<PlFormula<T>>, Box<PlFormula<T>>),
    /// A (binary) exclusive disjunction.
    ExclusiveDisjunction(Box<PlFormula<T>>, Box<PlFormula<T>>),
}

impl<T> PlFormula<T>
where
    T: LabelType,
{
    fn fmt_nary(
        f: &mut std::fmt::Formatter<'_>,
        operator: &str,
        children: &[PlFormula<T>],
    ) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, c) in children.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", operator)?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

impl<T> Display for PlFormula<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlFormula::True => write!(f, "true"),
            PlFormula::False => write!(f, "false"),
            PlFormula::Atom(label) => write!(f, "{}", label),
            PlFormula::Negation(c) => write!(f, "!{}", c),
            PlFormula::Conjunction(children) => Self::fmt_nary(f, "&&", children),
            PlFormula::Disjunction(children) => Self::fmt_nary(f, "||", children),
            PlFormula::Implication(l, r) => write!(f, "({} => {})", l, r),
            PlFormula::Equivalence(l, r) => write!(f, "({} <=> {})", l, r),
            PlFormula::ExclusiveDisjunction(l, r) => write!(f, "({} ^ {})", l, r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let formula = PlFormula::Implication(
            Box::new(PlFormula::Conjunction(vec![
                PlFormula::Atom("a"),
                PlFormula::Negation(Box::new(PlFormula::Atom("b"))),
            ])),
            Box::new(PlFormula::Equivalence(
                Box::new(PlFormula::True),
                Box::new(PlFormula::ExclusiveDisjunction(
                    Box::new(PlFormula::Atom("c")),
                    Box::new(PlFormula::False),
                )),
            )),
        );
        assert_eq!("((a && !b) => (true <=> (c ^ false)))", formula.to_string());
    }

    #[test]
    fn test_display_singleton_nary() {
        let formula = PlFormula::Disjunction(vec![PlFormula::Atom("a")]);
        assert_eq!("(a)", formula.to_string());
    }
}

use super::ConditionCnfEncoder;
use crate::adf::{AcceptanceCondition, Argument, ArgumentSet, LabelType};
use crate::logic::{Clause, CnfEncoding, Literal, Proposition};
use crate::transforms::{
    collect, collect_into_vec, ArtifactSink, ConditionCollector, Polarity,
};
use log::debug;

/// A definitional (Tseitin) CNF encoder for acceptance conditions.
///
/// Every subformula of the encoded condition is named by a proposition, and the
/// encoder emits the clauses defining each name from the names of its children.
/// Argument leaves are named by the injected argument mapping and produce no
/// clause; every other node gets a fresh proposition from a monotonic counter, so
/// names are distinct within a run and deterministic across runs.
/// Two occurrences of the same subformula get two distinct names.
///
/// By default, the full biconditional between a name and the subformula it names
/// is emitted. See [`with_optimization`](Self::with_optimization) for the
/// polarity-based clause reduction.
///
/// # Example
///
/// ```
/// # use aconite::adf::{AcceptanceCondition, ArgumentSet};
/// # use aconite::encodings::{ConditionCnfEncoder, TseitinTransformer};
/// let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
/// let condition = AcceptanceCondition::disjunction(vec![
///     AcceptanceCondition::argument(arguments.get_argument(&"a").unwrap()),
///     AcceptanceCondition::argument(arguments.get_argument(&"b").unwrap()),
/// ]);
/// let mut encoder = TseitinTransformer::new_for_argument_set(&arguments);
/// let encoding = encoder.encode_condition(&condition);
/// assert_eq!(3, encoding.n_clauses());
/// assert_eq!(3, usize::from(encoding.root_proposition()));
/// ```
pub struct TseitinTransformer<'a, T>
where
    T: LabelType,
{
    argument_mapping: Box<dyn Fn(&Argument<T>) -> Proposition + 'a>,
    next_fresh: usize,
    optimize: bool,
}

impl<T> TseitinTransformer<'_, T>
where
    T: LabelType,
{
    /// Builds a new encoder naming the arguments of a set by their id.
    ///
    /// The argument with id `i` is named by the proposition `i + 1`; the fresh
    /// propositions naming the inner nodes start right after the arguments.
    pub fn new_for_argument_set(arguments: &ArgumentSet<T>) -> Self {
        Self::new_with_mapping(
            Box::new(|a: &Argument<T>| Proposition::from(a.id() + 1)),
            arguments.len() + 1,
        )
    }
}

impl<'a, T> TseitinTransformer<'a, T>
where
    T: LabelType,
{
    /// Builds a new encoder given the proposition naming each argument leaf.
    ///
    /// The propositions returned by the mapping must all be lower than
    /// `first_fresh`, the index of the first proposition minted for an inner node.
    pub fn new_with_mapping(
        argument_mapping: Box<dyn Fn(&Argument<T>) -> Proposition + 'a>,
        first_fresh: usize,
    ) -> Self {
        if first_fresh == 0 {
            panic!("the first fresh proposition cannot be the null proposition");
        }
        TseitinTransformer {
            argument_mapping,
            next_fresh: first_fresh,
            optimize: false,
        }
    }

    /// Enables the polarity-based clause reduction.
    ///
    /// In this mode, only the direction(s) of each defining biconditional required
    /// for soundness given the polarity of the node are emitted.
    /// This produces fewer clauses, but the name of a subformula is then sound to
    /// reuse **only** within the polarity context it was encoded under: composing
    /// it into another formula, or constraining it in the other direction, breaks
    /// soundness. Callers needing freely reusable names must keep the default
    /// mode.
    pub fn with_optimization(mut self) -> Self {
        self.optimize = true;
        self
    }

    fn fresh(&mut self) -> Literal {
        let literal = Proposition::from(self.next_fresh).as_literal();
        self.next_fresh += 1;
        literal
    }

    fn emits_positive(&self, polarity: Polarity) -> bool {
        !self.optimize || polarity.covers_positive()
    }

    fn emits_negative(&self, polarity: Polarity) -> bool {
        !self.optimize || polarity.covers_negative()
    }
}

impl<T> ConditionCollector<T> for TseitinTransformer<'_, T>
where
    T: LabelType,
{
    type Down = Polarity;
    type Up = Literal;
    type Artifact = Clause;
    type Output = Literal;

    fn initialize(&mut self) -> Polarity {
        Polarity::Positive
    }

    fn collect_tautology(
        &mut self,
        _down: Polarity,
        sink: &mut dyn ArtifactSink<Clause>,
    ) -> Literal {
        let name = self.fresh();
        sink.emit(vec![name]);
        name
    }

    fn collect_contradiction(
        &mut self,
        _down: Polarity,
        sink: &mut dyn ArtifactSink<Clause>,
    ) -> Literal {
        let name = self.fresh();
        sink.emit(vec![name.negate()]);
        name
    }

    fn collect_argument(
        &mut self,
        _down: Polarity,
        _sink: &mut dyn ArtifactSink<Clause>,
        argument: &Argument<T>,
    ) -> Literal {
        (self.argument_mapping)(argument).as_literal()
    }

    fn collect_negation(
        &mut self,
        down: Polarity,
        sink: &mut dyn ArtifactSink<Clause>,
        child: Literal,
    ) -> Literal {
        let name = self.fresh();
        if self.emits_positive(down) {
            sink.emit(vec![name.negate(), child.negate()]);
        }
        if self.emits_negative(down) {
            sink.emit(vec![name, child]);
        }
        name
    }

    fn collect_implication(
        &mut self,
        down: Polarity,
        sink: &mut dyn ArtifactSink<Clause>,
        left: Literal,
        right: Literal,
    ) -> Literal {
        let name = self.fresh();
        if self.emits_positive(down) {
            sink.emit(vec![name.negate(), left.negate(), right]);
        }
        if self.emits_negative(down) {
            sink.emit(vec![name, left]);
            sink.emit(vec![name, right.negate()]);
        }
        name
    }

    fn collect_exclusive_disjunction(
        &mut self,
        down: Polarity,
        sink: &mut dyn ArtifactSink<Clause>,
        left: Literal,
        right: Literal,
    ) -> Literal {
        let name = self.fresh();
        if self.emits_positive(down) {
            sink.emit(vec![name.negate(), left, right]);
            sink.emit(vec![name.negate(), left.negate(), right.negate()]);
        }
        if self.emits_negative(down) {
            sink.emit(vec![name, left.negate(), right]);
            sink.emit(vec![name, left, right.negate()]);
        }
        name
    }

    fn collect_equivalence(
        &mut self,
        down: Polarity,
        sink: &mut dyn ArtifactSink<Clause>,
        children: Vec<Literal>,
    ) -> Literal {
        let name = self.fresh();
        if self.emits_positive(down) {
            // a cycle of implications, wrap-around included
            for i in 0..children.len() {
                let left = children[i];
                let right = children[(i + 1) % children.len()];
                sink.emit(vec![name.negate(), left.negate(), right]);
            }
        }
        if self.emits_negative(down) {
            let mut all_true = Vec::with_capacity(children.len() + 1);
            all_true.push(name);
            all_true.extend(children.iter().copied());
            sink.emit(all_true);
            let mut all_false = Vec::with_capacity(children.len() + 1);
            all_false.push(name);
            all_false.extend(children.iter().map(|c| c.negate()));
            sink.emit(all_false);
        }
        name
    }

    fn collect_conjunction(
        &mut self,
        down: Polarity,
        sink: &mut dyn ArtifactSink<Clause>,
        children: Vec<Literal>,
    ) -> Literal {
        let name = self.fresh();
        if self.emits_positive(down) {
            children
                .iter()
                .for_each(|c| sink.emit(vec![*c, name.negate()]));
        }
        if self.emits_negative(down) {
            let mut full_clause = Vec::with_capacity(children.len() + 1);
            full_clause.extend(children.iter().map(|c| c.negate()));
            full_clause.push(name);
            sink.emit(full_clause);
        }
        name
    }

    fn collect_disjunction(
        &mut self,
        down: Polarity,
        sink: &mut dyn ArtifactSink<Clause>,
        children: Vec<Literal>,
    ) -> Literal {
        let name = self.fresh();
        if self.emits_positive(down) {
            let mut full_clause = Vec::with_capacity(children.len() + 1);
            full_clause.push(name.negate());
            full_clause.extend(children.iter().copied());
            sink.emit(full_clause);
        }
        if self.emits_negative(down) {
            children.iter().for_each(|c| sink.emit(vec![c.negate(), name]));
        }
        name
    }

    fn finish(&mut self, up: Literal, _down: Polarity) -> Literal {
        up
    }
}

impl<T> ConditionCnfEncoder<T> for TseitinTransformer<'_, T>
where
    T: LabelType,
{
    fn encode_condition(&mut self, condition: &AcceptanceCondition<T>) -> CnfEncoding {
        let (root, clauses) = collect_into_vec(self, condition);
        let n_propositions = self.next_fresh - 1;
        debug!(
            "encoded an acceptance condition into {} clauses over {} propositions",
            clauses.len(),
            n_propositions
        );
        CnfEncoding::new(root, n_propositions, clauses)
    }

    fn encode_condition_into(
        &mut self,
        condition: &AcceptanceCondition<T>,
        sink: &mut dyn ArtifactSink<Clause>,
    ) -> Literal {
        collect(self, condition, sink)
    }
}

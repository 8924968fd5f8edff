use super::{Literal, Proposition};

/// A clause: the disjunction of a set of literals.
pub type Clause = Vec<Literal>;

/// The result of a definitional CNF encoding.
///
/// It is made of the literal naming the root of the encoded condition, the number
/// of propositions in use (argument propositions included) and the emitted clauses.
/// The clauses are given in emission order; this order carries no meaning.
#[derive(Debug, PartialEq, Eq)]
pub struct CnfEncoding {
    root: Literal,
    n_propositions: usize,
    clauses: Vec<Clause>,
}

impl CnfEncoding {
    pub(crate) fn new(root: Literal, n_propositions: usize, clauses: Vec<Clause>) -> Self {
        CnfEncoding {
            root,
            n_propositions,
            clauses,
        }
    }

    /// Returns the literal naming the root of the encoded condition.
    pub fn root(&self) -> Literal {
        self.root
    }

    /// Returns the proposition naming the root of the encoded condition.
    pub fn root_proposition(&self) -> Proposition {
        self.root.proposition()
    }

    /// Returns the number of propositions involved in the encoding.
    pub fn n_propositions(&self) -> usize {
        self.n_propositions
    }

    /// Returns the emitted clauses.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Returns the number of emitted clauses.
    pub fn n_clauses(&self) -> usize {
        self.clauses.len()
    }
}

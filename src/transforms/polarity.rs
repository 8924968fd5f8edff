use std::fmt::Display;

/// A top-down context threaded through a traversal.
///
/// The traversal derives the context of each child from the context of its parent:
/// descending into a negation (or the premise of an implication) goes through
/// [`under_negation`](Self::under_negation), while descending into an equivalence
/// goes through [`neutralized`](Self::neutralized).
/// Transformers that do not need a context use `()`, for which both operations are
/// the identity.
pub trait DownContext: Copy {
    /// Returns the context resulting from crossing a negative position.
    fn under_negation(self) -> Self;

    /// Returns the context resulting from crossing a position in which both
    /// directions matter.
    fn neutralized(self) -> Self;
}

impl DownContext for () {
    fn under_negation(self) -> Self {}

    fn neutralized(self) -> Self {}
}

/// The polarity of a position in a condition tree.
///
/// A node is positive if it only occurs in positions implying the whole condition,
/// negative if it only occurs in positions implied by the whole condition, and
/// neutral if both directions matter.
/// The root of a tree is positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    /// The position implies the whole condition.
    Positive,
    /// The position is implied by the whole condition.
    Negative,
    /// Both directions matter.
    Neutral,
}

impl Polarity {
    /// Returns `true` iff this polarity involves the positive direction.
    pub fn covers_positive(self) -> bool {
        matches!(self, Polarity::Positive | Polarity::Neutral)
    }

    /// Returns `true` iff this polarity involves the negative direction.
    pub fn covers_negative(self) -> bool {
        matches!(self, Polarity::Negative | Polarity::Neutral)
    }
}

impl DownContext for Polarity {
    fn under_negation(self) -> Self {
        match self {
            Polarity::Positive => Polarity::Negative,
            Polarity::Negative => Polarity::Positive,
            Polarity::Neutral => Polarity::Neutral,
        }
    }

    fn neutralized(self) -> Self {
        Polarity::Neutral
    }
}

impl Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Positive => write!(f, "+1"),
            Polarity::Negative => write!(f, "-1"),
            Polarity::Neutral => write!(f, "0"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_negation() {
        assert_eq!(Polarity::Negative, Polarity::Positive.under_negation());
        assert_eq!(Polarity::Positive, Polarity::Negative.under_negation());
        assert_eq!(Polarity::Neutral, Polarity::Neutral.under_negation());
    }

    #[test]
    fn test_neutralized() {
        assert_eq!(Polarity::Neutral, Polarity::Positive.neutralized());
        assert_eq!(Polarity::Neutral, Polarity::Negative.neutralized());
        assert_eq!(Polarity::Neutral, Polarity::Neutral.neutralized());
    }

    #[test]
    fn test_covered_directions() {
        assert!(Polarity::Positive.covers_positive());
        assert!(!Polarity::Positive.covers_negative());
        assert!(!Polarity::Negative.covers_positive());
        assert!(Polarity::Negative.covers_negative());
        assert!(Polarity::Neutral.covers_positive());
        assert!(Polarity::Neutral.covers_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!("+1", Polarity::Positive.to_string());
        assert_eq!("-1", Polarity::Negative.to_string());
        assert_eq!("0", Polarity::Neutral.to_string());
    }
}

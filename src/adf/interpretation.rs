use super::LabelType;
use std::collections::HashMap;

/// A three-valued interpretation of a set of arguments.
///
/// Each argument is either satisfied, unsatisfied or undecided.
/// Arguments for which no value has been set are undecided.
/// This is the reason why [`value_of`](Self::value_of) returns an [`Option<bool>`].
///
/// # Example
///
/// ```
/// # use aconite::adf::Interpretation;
/// let mut interpretation = Interpretation::new();
/// interpretation.set_satisfied("a");
/// interpretation.set_unsatisfied("b");
/// assert_eq!(Some(true), interpretation.value_of(&"a"));
/// assert_eq!(Some(false), interpretation.value_of(&"b"));
/// assert_eq!(None, interpretation.value_of(&"c"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Interpretation<T>
where
    T: LabelType,
{
    values: HashMap<T, bool>,
}

impl<T> Interpretation<T>
where
    T: LabelType,
{
    /// Builds a new interpretation in which every argument is undecided.
    pub fn new() -> Self {
        Interpretation {
            values: HashMap::new(),
        }
    }

    /// Sets an argument as satisfied, overriding its previous value if any.
    pub fn set_satisfied(&mut self, label: T) {
        self.values.insert(label, true);
    }

    /// Sets an argument as unsatisfied, overriding its previous value if any.
    pub fn set_unsatisfied(&mut self, label: T) {
        self.values.insert(label, false);
    }

    /// Sets an argument back to undecided.
    pub fn set_undecided(&mut self, label: &T) {
        self.values.remove(label);
    }

    /// Returns the value assigned to an argument, or [`Option::None`] if it is undecided.
    pub fn value_of(&self, label: &T) -> Option<bool> {
        self.values.get(label).copied()
    }

    /// Returns `true` iff the argument is satisfied.
    pub fn satisfied(&self, label: &T) -> bool {
        self.value_of(label) == Some(true)
    }

    /// Returns `true` iff the argument is unsatisfied.
    pub fn unsatisfied(&self, label: &T) -> bool {
        self.value_of(label) == Some(false)
    }

    /// Returns `true` iff the argument is undecided.
    pub fn undecided(&self, label: &T) -> bool {
        self.value_of(label).is_none()
    }

    /// Returns the number of decided arguments.
    pub fn n_decided(&self) -> usize {
        self.values.len()
    }
}

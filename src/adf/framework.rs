use super::{AcceptanceCondition, ArgumentSet, Interpretation, LabelType};
use crate::transforms::{transform, FixPartialTransformer};
use anyhow::{anyhow, Context, Result};
use log::debug;

/// An Abstract Dialectical Framework.
///
/// An ADF is given by a set of arguments (statements) and, for each of them, an
/// acceptance condition over the arguments of the framework.
/// Until it is set, the acceptance condition of an argument defaults to
/// [`AcceptanceCondition::Contradiction`] (the statement has no support).
///
/// # Example
///
/// ```
/// # use aconite::adf::{AcceptanceCondition, Adf, ArgumentSet};
/// let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
/// let condition = AcceptanceCondition::argument(arguments.get_argument(&"b").unwrap());
/// let mut adf = Adf::new_with_argument_set(arguments);
/// adf.set_acceptance_condition(&"a", condition).unwrap();
/// ```
pub struct Adf<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    conditions: Vec<AcceptanceCondition<T>>,
}

impl<T> Adf<T>
where
    T: LabelType,
{
    /// Builds an ADF from its set of arguments.
    ///
    /// All the acceptance conditions are initialized to
    /// [`AcceptanceCondition::Contradiction`].
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let conditions = (0..arguments.len())
            .map(|_| AcceptanceCondition::Contradiction)
            .collect();
        Adf {
            arguments,
            conditions,
        }
    }

    /// Returns the set of arguments of this framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Returns the number of arguments of this framework.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Sets the acceptance condition of an argument.
    ///
    /// An error is returned if the label is unknown or if the condition contains a
    /// leaf referring to an argument which does not belong to this framework.
    pub fn set_acceptance_condition(
        &mut self,
        label: &T,
        condition: AcceptanceCondition<T>,
    ) -> Result<()> {
        let context = || format!("cannot set the acceptance condition of {}", label);
        let id = self.arguments.get_argument_index(label).with_context(context)?;
        for leaf in condition.iter_arguments() {
            let known = self
                .arguments
                .get_argument(leaf.label())
                .map(|a| a.id() == leaf.id())
                .unwrap_or(false);
            if !known {
                return Err(anyhow!("no such argument: {}", leaf)).with_context(context);
            }
        }
        self.conditions[id] = condition;
        Ok(())
    }

    /// Returns the acceptance condition of an argument.
    ///
    /// An error is returned if the label is unknown.
    pub fn acceptance_condition_of(&self, label: &T) -> Result<&AcceptanceCondition<T>> {
        self.arguments
            .get_argument_index(label)
            .map(|id| &self.conditions[id])
    }

    /// Computes the reduct of this framework under a partial interpretation.
    ///
    /// The arguments are left unchanged while each acceptance condition is
    /// simplified by a [`FixPartialTransformer`]: decided arguments are replaced by
    /// the corresponding constant and the conditions are algebraically collapsed.
    pub fn reduct(&self, interpretation: &Interpretation<T>) -> Self {
        let conditions = self
            .conditions
            .iter()
            .map(|c| {
                let mut transformer = FixPartialTransformer::new(interpretation);
                transform(&mut transformer, c)
            })
            .collect::<Vec<_>>();
        debug!(
            "computed the reduct of an ADF with {} arguments under {} decided values",
            self.arguments.len(),
            interpretation.n_decided()
        );
        let arguments = ArgumentSet::new_with_labels(
            &self.arguments.iter().map(|a| a.label().clone()).collect::<Vec<_>>(),
        );
        Adf {
            arguments,
            conditions,
        }
    }
}

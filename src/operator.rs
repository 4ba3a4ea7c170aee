use crate::{error::LogicError, types::*};
#[cfg(feature = "use-serde")]
use serde::{Deserialize, Serialize};

/// A truth-functional connective of TFL
///
/// The set of operators is closed. Each variant carries its symbol, its arity and its evaluation
/// rule, and everything else (truth tables, truth makers) is derived from the evaluation rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "use-serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Negation,
    Conjunction,
    Disjunction,
    Conditional,
    Biconditional,
}

use Operator::*;

impl Operator {
    /// Every operator, in registry order
    pub const ALL: [Operator; 5] = [Negation, Conjunction, Disjunction, Conditional, Biconditional];

    /// Returns the display symbol of this operator
    pub fn symbol(self) -> &'static str {
        match self {
            Negation => "~",
            Conjunction => "&",
            Disjunction => "∨",
            Conditional => "→",
            Biconditional => "↔",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Negation => "Negation",
            Conjunction => "Conjunction",
            Disjunction => "Disjunction",
            Conditional => "Conditional",
            Biconditional => "Biconditional",
        }
    }

    /// Returns the number of places this operator combines, either 1 or 2
    pub fn arity(self) -> usize {
        match self {
            Negation => 1,
            Conjunction | Disjunction | Conditional | Biconditional => 2,
        }
    }

    /// Looks up the operator with the given display symbol
    ///
    /// # Example
    /// ```
    /// use tfl::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("→"), Some(Operator::Conditional));
    /// assert_eq!(Operator::from_symbol("->"), None);
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.symbol() == symbol)
    }

    fn apply(self, inputs: &[bool]) -> Option<bool> {
        match (self, inputs) {
            (Negation, &[a]) => Some(!a),
            (Conjunction, &[a, b]) => Some(a && b),
            (Disjunction, &[a, b]) => Some(a || b),
            (Conditional, &[a, b]) => Some(!a || b),
            (Biconditional, &[a, b]) => Some(a == b),
            _ => None,
        }
    }

    /// Returns the truth value of this operator applied to `inputs`, one value per place
    ///
    /// # Errors
    /// * InvalidArity - if `inputs.len()` is not this operator's arity
    ///
    /// # Example
    /// ```
    /// use tfl::{error::LogicError, Operator};
    ///
    /// assert_eq!(Operator::Conditional.evaluate(&[true, false]), Ok(false));
    /// assert_eq!(Operator::Negation.evaluate(&[false]), Ok(true));
    /// assert_eq!(
    ///     Operator::Conjunction.evaluate(&[true]),
    ///     Err(LogicError::InvalidArity {
    ///         operator: Operator::Conjunction,
    ///         expected: 2,
    ///         found: 1,
    ///     })
    /// );
    /// ```
    pub fn evaluate(self, inputs: &[bool]) -> Result<bool, LogicError> {
        self.apply(inputs).ok_or(LogicError::InvalidArity {
            operator: self,
            expected: self.arity(),
            found: inputs.len(),
        })
    }

    /// Returns this operator's truth table, with rows in the order of [`valuations`]
    pub fn truth_table(self) -> TruthTable {
        let rows = valuations(self.arity())
            .filter_map(|row| self.apply(&row).map(|value| (row, value)))
            .collect();
        TruthTable {
            operator: self,
            rows,
        }
    }

    /// Returns the rows of this operator's truth table which evaluate to true
    ///
    /// # Example
    /// ```
    /// use tfl::Operator;
    ///
    /// let makers = Operator::Conditional.truth_makers();
    /// assert_eq!(
    ///     makers,
    ///     vec![
    ///         vec![true, true].into_boxed_slice(),
    ///         vec![false, true].into_boxed_slice(),
    ///         vec![false, false].into_boxed_slice(),
    ///     ]
    /// );
    /// ```
    pub fn truth_makers(self) -> Vec<Valuation> {
        self.truth_table()
            .rows
            .into_iter()
            .filter_map(|(row, value)| if value { Some(row) } else { None })
            .collect()
    }

    /// Tests whether this operator is false when all of its places are false
    pub fn preserves_falsity(self) -> bool {
        !self.truth_makers().iter().any(|row| row.iter().all(|v| !v))
    }
}

/// Enumerates all `2^n` valuations of length `n`.
///
/// Position `j` of the `i`-th valuation is `false` exactly if bit `j` of `i` is set, so the first
/// position varies fastest and the enumeration starts with the all-true valuation.
///
/// # Example
/// ```
/// use tfl::operator::valuations;
///
/// let rows: Vec<Vec<bool>> = valuations(2).map(|v| v.into_vec()).collect();
/// assert_eq!(
///     rows,
///     vec![
///         vec![true, true],
///         vec![false, true],
///         vec![true, false],
///         vec![false, false],
///     ]
/// );
/// ```
pub fn valuations(n: usize) -> impl Iterator<Item = Valuation> {
    (0..1usize << n).map(move |i| (0..n).map(|j| (i >> j) & 1 == 0).collect())
}

/// The truth table of one [`Operator`], mapping each valuation of its places to a truth value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    operator: Operator,
    rows: Vec<(Valuation, bool)>,
}

impl TruthTable {
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Returns the rows of this table in canonical order
    pub fn rows(&self) -> &[(Valuation, bool)] {
        &self.rows
    }

    /// Returns the value of the row for `inputs`, or `None` if there is no such row
    pub fn get(&self, inputs: &[bool]) -> Option<bool> {
        self.rows
            .iter()
            .find(|(row, _)| &row[..] == inputs)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

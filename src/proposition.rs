use crate::{error::LogicError, operator::Operator, types::*};
use std::fmt::Display;

/// A proposition of TFL: either an atomic sentence letter or an operator applied to one or two
/// sub-propositions (its __places__)
///
/// Propositions are immutable trees. Every node owns its places, and two separately built
/// propositions are compared structurally (see [`same_as`](#method.same_as)). The display name is
/// assembled once at construction.
///
/// # Example
/// ```
/// use tfl::{Operator, Proposition};
///
/// let p = Proposition::atomic("p").unwrap();
/// let q = Proposition::atomic("q").unwrap();
/// let pq = Proposition::compound(p.clone(), Operator::Conjunction, Some(q)).unwrap();
/// assert_eq!(pq.name(), "p & q");
///
/// let pqp = Proposition::compound(pq, Operator::Conjunction, Some(p)).unwrap();
/// assert_eq!(pqp.name(), "(p & q) & p");
/// ```
#[derive(Clone, Debug)]
pub struct Proposition {
    kind: Kind,
    name: String,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "use-serde", derive(serde::Serialize, serde::Deserialize))]
enum Kind {
    Atomic(Symbol),
    Compound(Operator, Box<[Proposition]>),
}

impl Proposition {
    /// Creates an atomic proposition named by a single character
    ///
    /// # Errors
    /// * InvalidName - if `name` is not exactly one character long
    ///
    /// # Example
    /// ```
    /// use tfl::{error::LogicError, Proposition};
    ///
    /// assert_eq!(Proposition::atomic("p").unwrap().name(), "p");
    /// assert_eq!(
    ///     Proposition::atomic("pq").unwrap_err(),
    ///     LogicError::InvalidName("pq".to_owned())
    /// );
    /// ```
    pub fn atomic(name: &str) -> Result<Self, LogicError> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Ok(Self::from_symbol(symbol)),
            _ => Err(LogicError::InvalidName(name.to_owned())),
        }
    }

    fn from_symbol(symbol: Symbol) -> Self {
        Proposition {
            kind: Kind::Atomic(symbol),
            name: symbol.to_string(),
        }
    }

    /// Creates the compound proposition `operator place_1` or `place_1 operator place_2`
    ///
    /// # Errors
    /// * ArityMismatch - if `place_2` is given for a unary operator or missing for a binary one
    ///
    /// # Example
    /// ```
    /// use tfl::{error::LogicError, Operator, Proposition};
    ///
    /// let p = Proposition::atomic("p").unwrap();
    /// assert_eq!(
    ///     Proposition::compound(p.clone(), Operator::Conjunction, None).unwrap_err(),
    ///     LogicError::ArityMismatch {
    ///         operator: Operator::Conjunction,
    ///         expected: 2,
    ///         found: 1,
    ///     }
    /// );
    /// let not_p = Proposition::compound(p, Operator::Negation, None).unwrap();
    /// assert_eq!(not_p.name(), "~p");
    /// ```
    pub fn compound(
        place_1: Proposition,
        operator: Operator,
        place_2: Option<Proposition>,
    ) -> Result<Self, LogicError> {
        let places: Box<[Proposition]> = match place_2 {
            Some(place_2) => Box::new([place_1, place_2]),
            None => Box::new([place_1]),
        };
        Self::from_places(operator, places)
    }

    fn from_places(operator: Operator, places: Box<[Proposition]>) -> Result<Self, LogicError> {
        if places.len() != operator.arity() {
            return Err(LogicError::ArityMismatch {
                operator,
                expected: operator.arity(),
                found: places.len(),
            });
        }
        let name = match &places[..] {
            [place] => format!("{}{}", operator.symbol(), place.bracketed()),
            [left, right] => format!(
                "{} {} {}",
                left.bracketed(),
                operator.symbol(),
                right.bracketed()
            ),
            _ => unreachable!("operators take one or two places"),
        };
        Ok(Proposition {
            kind: Kind::Compound(operator, places),
            name,
        })
    }

    /// Shorthand for the negation of `place`, which can not fail
    pub fn negation(place: Proposition) -> Self {
        Proposition {
            name: format!("{}{}", Operator::Negation.symbol(), place.bracketed()),
            kind: Kind::Compound(Operator::Negation, Box::new([place])),
        }
    }

    /// Shorthand for [`compound`](#method.compound) with two places
    pub fn binary(
        place_1: Proposition,
        operator: Operator,
        place_2: Proposition,
    ) -> Result<Self, LogicError> {
        Self::compound(place_1, operator, Some(place_2))
    }

    /// Returns the display name, e.g. `p`, `~p` or `(p & q) → r`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self.kind, Kind::Atomic(_))
    }

    /// Returns the symbol of an atomic proposition, or `None` for compounds
    pub fn symbol(&self) -> Option<Symbol> {
        match self.kind {
            Kind::Atomic(symbol) => Some(symbol),
            Kind::Compound(..) => None,
        }
    }

    /// Returns the top level operator of a compound proposition, or `None` for atomics
    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            Kind::Atomic(_) => None,
            Kind::Compound(operator, _) => Some(operator),
        }
    }

    /// Returns the immediate sub-propositions in order. Atomic propositions have none.
    pub fn places(&self) -> &[Proposition] {
        match &self.kind {
            Kind::Atomic(_) => &[],
            Kind::Compound(_, places) => &places[..],
        }
    }

    /// Returns the number of operators on the longest path from this proposition to an atom
    pub fn depth(&self) -> usize {
        self.places()
            .iter()
            .map(|place| place.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Tests whether this proposition is parenthesised when it is a place of another proposition.
    /// This is the case exactly for compounds with two places.
    pub fn needs_brackets(&self) -> bool {
        self.places().len() == 2
    }

    fn bracketed(&self) -> String {
        if self.needs_brackets() {
            format!("({})", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Tests whether `other` is a deep replica of this proposition. Places are compared pairwise
    /// and in order, so `p & q` is not the same as `q & p`.
    ///
    /// # Example
    /// ```
    /// use tfl::{Operator, Proposition};
    ///
    /// let p = Proposition::atomic("p").unwrap();
    /// let q = Proposition::atomic("q").unwrap();
    /// let pq = Proposition::binary(p.clone(), Operator::Disjunction, q.clone()).unwrap();
    /// let qp = Proposition::binary(q.clone(), Operator::Disjunction, p.clone()).unwrap();
    /// assert!(pq.same_as(&pq.clone()));
    /// assert!(!pq.same_as(&qp));
    /// assert!(!p.same_as(&pq));
    /// ```
    pub fn same_as(&self, other: &Proposition) -> bool {
        match (&self.kind, &other.kind) {
            (Kind::Atomic(a), Kind::Atomic(b)) => a == b,
            (Kind::Compound(op_a, places_a), Kind::Compound(op_b, places_b)) => {
                op_a == op_b
                    && places_a.len() == places_b.len()
                    && places_a
                        .iter()
                        .zip(places_b.iter())
                        .all(|(a, b)| a.same_as(b))
            }
            _ => false,
        }
    }
}

impl PartialEq for Proposition {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Proposition {}

impl Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(feature = "use-serde")]
impl serde::Serialize for Proposition {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::Serialize;
        self.kind.serialize(serializer)
    }
}

// Deserialized trees are rebuilt through the checked constructors.
#[cfg(feature = "use-serde")]
impl<'de> serde::Deserialize<'de> for Proposition {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::{de::Error, Deserialize};
        match Kind::deserialize(deserializer)? {
            Kind::Atomic(symbol) => Ok(Self::from_symbol(symbol)),
            Kind::Compound(operator, places) => {
                Self::from_places(operator, places).map_err(D::Error::custom)
            }
        }
    }
}

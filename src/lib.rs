//! `tfl` is a small reasoning engine for truth-functional logic (TFL). It represents
//! propositions and the connectives combining them, and decides whether a conclusion follows
//! from one or two premises in a single elementary step.
//!
//! # Main data structures
//! There are three main data structures in `tfl`: [`Operator`]s, [`Proposition`]s and
//! [`Inference`]s.
//!
//! ## Operators
//! An [`Operator`] is one of the connectives negation, conjunction, disjunction, conditional and
//! biconditional. Each operator knows its symbol, its arity and how to evaluate it. Its
//! [truth table](Operator::truth_table) and its __truth makers__ (the rows of the truth table
//! which come out true) are derived from the evaluation. The rest of the crate reasons about
//! operators only through their truth makers.
//!
//! ## Propositions
//! A [`Proposition`] is either atomic, named by a single character like _p_, or a compound like
//! _p & q_ built from one or two sub-propositions (called __places__) and an operator.
//! Propositions are immutable and are compared structurally with [`Proposition::same_as`].
//!
//! ## Inferences
//! An [`Inference`] is an attempt to reach a conclusion from one or two ordered premises in one
//! step, either by __elimination__ (taking a compound premise apart, e.g. _p_ from _p & q_) or by
//! __introduction__ (building a compound from its places, e.g. _p & q_ from _p_ and _q_). Its
//! validity is decided when it is constructed, and a valid inference reports the [`Rule`]
//! it uses so that it can be cited in a proof as e.g. _&I 3, 5_.
//!
//! Rules which need assumption blocks (such as conditional introduction) are not elementary
//! inferences and are not covered.
//!
//! # Example
//! ```
//! use tfl::{Inference, Operator, Proposition, Rule};
//!
//! let p = Proposition::atomic("p").unwrap();
//! let q = Proposition::atomic("q").unwrap();
//! let p_q = Proposition::binary(p.clone(), Operator::Conditional, q.clone()).unwrap();
//!
//! let modus_ponens = Inference::new(q.clone(), p_q.clone(), Some(p.clone()));
//! assert_eq!(modus_ponens.rule(), Some(Rule::Elimination(Operator::Conditional)));
//!
//! let affirming_the_consequent = Inference::new(p, p_q, Some(q));
//! assert!(!affirming_the_consequent.valid());
//! ```

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod error;
pub mod formatter;
pub mod inference;
mod log;
pub mod operator;
pub mod proposition;
mod types;

pub use inference::{Inference, Rule};
pub use operator::{Operator, TruthTable};
pub use proposition::Proposition;
pub use types::*;

//! Aconite is an acceptance condition transformation and CNF encoding library
//! for Abstract Dialectical Frameworks.
//!
//! The crate revolves around a generic single-pass traversal of acceptance
//! condition trees that threads a top-down context (typically a
//! [polarity](transforms::Polarity)) while aggregating a bottom-up value per
//! node. Three clients of this engine are provided:
//! a definitional (Tseitin) CNF encoder, a partial-interpretation simplifier
//! and a mapper towards plain propositional logic.

#![warn(missing_docs)]

pub mod adf;

pub mod encodings;

pub mod logic;

pub mod transforms;

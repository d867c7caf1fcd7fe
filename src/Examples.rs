//! examples of usage of RustedPoly
/// parsing, arithmetic, composition, evaluation and calculator examples
pub mod poly_examples;

#![allow(non_snake_case)]
/// # Polynomial engine
/// a module with the recursive polynomial value and its canonical form
/// 1) `Poly`/`Mono` types, constructors and queries
/// 2) the canonicaliser `Poly::from_monos`
/// 3) the textual notation (`Display`)
///# Example
/// ```
/// use RustedPoly::symbolic::poly_engine::{Mono, Poly};
/// // 3*x_0^2 + 1 - 1 + 2*x_0^2 written in any order
/// let p = Poly::from_monos(vec![
///     Mono::new(Poly::coeff(3), 2),
///     Mono::new(Poly::coeff(1), 0),
///     Mono::new(Poly::coeff(-1), 0),
///     Mono::new(Poly::coeff(2), 2),
/// ]);
/// assert_eq!(p.to_string(), "(5,2)");
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod poly_engine;
///____________________________________________________________________________________________________________________________
/// # Polynomial arithmetic
/// addition, multiplication, negation, subtraction, exponentiation, composition,
/// evaluation at a point, degree queries
///# Example
/// ```
/// use RustedPoly::symbolic::poly_engine::Poly;
/// let p: Poly = "(1,0)+(1,1)".parse().unwrap(); // 1 + x_0
/// let square = p.pow(2);
/// assert_eq!(square.to_string(), "(1,0)+(2,1)+(1,2)");
/// assert_eq!(square.at(2), Poly::coeff(9));
/// let q: Poly = "(1,2)".parse().unwrap(); // x_0^2
/// // (1 + x_0) composed with x_0 := x_0^2
/// assert_eq!(p.compose(&[q]).to_string(), "(1,0)+(1,2)");
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod poly_arithmetic;
///______________________________________________________________________________________________________________________________________________
/// recursive-descent parser of the polynomial notation
/// _____________________________________________________________________________________________________________________________________________
pub mod parse_poly;
///______________________________________________________________________________________________________________________________________________
/// the collection of utility functions mainly for bracket parsing and proceeding
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;

mod poly_engine_tests;
mod poly_proptests;

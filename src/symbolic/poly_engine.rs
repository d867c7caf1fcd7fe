//! # Polynomial Engine Module
//!
//! Core data model of the crate: sparse multivariate polynomials with `i64` coefficients stored
//! as a recursive tree.
//!
//! ## Representation
//!
//! A polynomial is either a coefficient (`Poly::Coeff`) or a non-empty sum of monomials
//! (`Poly::Sum`). A monomial `Mono { p, exp }` reads as `p * x_i^exp`, where `x_i` is the variable
//! of the current nesting level: the outermost sum is over `x_0`, the coefficients of its
//! monomials are polynomials over `x_1`, and so on.
//!
//! ## Canonical form
//!
//! Every value produced by this crate satisfies:
//! 1. exponents inside a sum are strictly increasing;
//! 2. no monomial has a coefficient polynomial equal to zero;
//! 3. a sum consisting of a single `(c, 0)` monomial with `c` a coefficient is stored as `c`;
//! 4. zero is always `Coeff(0)`, never an empty sum;
//! 5. an exponent 0 monomial only survives next to other monomials (follows from 3).
//!
//! `Poly::from_monos` is the canonicaliser: it takes ownership of an arbitrary list of monomials
//! and returns the unique canonical polynomial. Arithmetic lives in `poly_arithmetic`, the text
//! grammar in `parse_poly`.
//!
//! ## Textual notation
//!
//! `Display` prints the grammar read by the parser: a coefficient as a plain decimal, a sum as
//! `(coeff,exp)+(coeff,exp)+...`, e.g. `(1,0)+((2,1),2)` is `1 + 2 * x_1 * x_0^2`.

use itertools::Itertools;
use std::fmt;

/// Type of the polynomial coefficients. Arithmetic on them wraps on overflow.
pub type PolyCoeff = i64;
/// Type of the exponents. The parser only admits `0..=i32::MAX`.
pub type PolyExp = u32;

/// Sparse multivariate polynomial.
///
/// Equality (`PartialEq`) is structural: it is sound for canonical values, i.e. for everything
/// returned by the parser, the canonicaliser and the arithmetic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Poly {
    /// polynomial independent of all remaining variables
    Coeff(PolyCoeff),
    /// sum of monomials over the variable of the current level, ordered by exponent
    Sum(Vec<Mono>),
}

/// Monomial `p * x_i^exp`; `p` is a polynomial over the next variable `x_{i+1}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mono {
    pub p: Poly,
    pub exp: PolyExp,
}

impl Mono {
    /// Creates the monomial `p * x_i^exp`, taking ownership of `p`.
    pub fn new(p: Poly, exp: PolyExp) -> Self {
        Mono { p, exp }
    }

    pub fn exp(&self) -> PolyExp {
        self.exp
    }
}

impl Default for Poly {
    fn default() -> Self {
        Poly::zero()
    }
}

impl From<PolyCoeff> for Poly {
    fn from(c: PolyCoeff) -> Self {
        Poly::Coeff(c)
    }
}

impl Poly {
    /// BASIC FEATURES

    /// Polynomial identically equal to zero.
    pub fn zero() -> Self {
        Poly::Coeff(0)
    }

    /// Constant polynomial `c`.
    pub fn coeff(c: PolyCoeff) -> Self {
        Poly::Coeff(c)
    }

    /// The variable `x_idx` as a canonical polynomial.
    pub fn var(idx: usize) -> Self {
        let mut p = Poly::Sum(vec![Mono::new(Poly::coeff(1), 1)]);
        for _ in 0..idx {
            p = Poly::Sum(vec![Mono::new(p, 0)]);
        }
        p
    }

    /// Is the polynomial a coefficient (a constant polynomial)?
    pub fn is_coeff(&self) -> bool {
        matches!(self, Poly::Coeff(_))
    }

    /// Is the polynomial identically zero?
    ///
    /// Canonical zero is always `Coeff(0)`; sums are inspected recursively so that values built
    /// by hand (e.g. `0 * x^5`) are recognised as well.
    pub fn is_zero(&self) -> bool {
        match self {
            Poly::Coeff(c) => *c == 0,
            Poly::Sum(monos) => monos.iter().all(|m| m.p.is_zero()),
        }
    }

    pub fn as_coeff(&self) -> Option<PolyCoeff> {
        match self {
            Poly::Coeff(c) => Some(*c),
            Poly::Sum(_) => None,
        }
    }

    /// Monomials of a sum; an empty slice for a coefficient.
    pub fn monos(&self) -> &[Mono] {
        match self {
            Poly::Coeff(_) => &[],
            Poly::Sum(monos) => monos,
        }
    }

    /// Moves the monomials out of the polynomial. A non-zero coefficient `c` becomes `[(c, 0)]`.
    pub fn into_monos(self) -> Vec<Mono> {
        match self {
            Poly::Coeff(0) => Vec::new(),
            Poly::Coeff(c) => vec![Mono::new(Poly::Coeff(c), 0)],
            Poly::Sum(monos) => monos,
        }
    }

    /// Number of variable levels the polynomial spans (0 for a coefficient).
    pub fn depth(&self) -> usize {
        match self {
            Poly::Coeff(_) => 0,
            Poly::Sum(monos) => 1 + monos.iter().map(|m| m.p.depth()).max().unwrap_or(0),
        }
    }

    /// CANONICALISATION

    /// Sums a list of monomials into a canonical polynomial. Takes ownership of the monomials;
    /// they may come in any order, repeat exponents, carry zero or non-canonical coefficients.
    ///
    /// Coefficients are canonicalised first (bottom-up), so collapsing a coefficient to a
    /// constant can in turn collapse its exponent 0 parent.
    pub fn from_monos(monos: Vec<Mono>) -> Self {
        let monos = monos
            .into_iter()
            .map(|m| Mono::new(m.p.normalized(), m.exp))
            .collect();
        Poly::from_canonical_monos(monos)
    }

    /// Canonical form of an arbitrary (possibly hand-built) polynomial.
    pub fn normalized(self) -> Self {
        match self {
            Poly::Coeff(_) => self,
            Poly::Sum(monos) => Poly::from_monos(monos),
        }
    }

    /// Same as `from_monos` for monomials whose coefficients are already canonical, which is
    /// what every arithmetic operation produces.
    pub(crate) fn from_canonical_monos(mut monos: Vec<Mono>) -> Self {
        // stable, so equal exponents keep their relative order
        monos.sort_by_key(|m| m.exp);
        let merged: Vec<Mono> = monos
            .into_iter()
            .coalesce(|a, b| {
                if a.exp == b.exp {
                    Ok(Mono::new(a.p.add(&b.p), a.exp))
                } else {
                    Err((a, b))
                }
            })
            .filter(|m| !m.p.is_zero())
            .collect();
        Poly::collapse(merged)
    }

    /// Builds a polynomial from sorted, merged, zero-free monomials with canonical coefficients.
    fn collapse(mut monos: Vec<Mono>) -> Self {
        match monos.len() {
            0 => Poly::zero(),
            1 if monos[0].exp == 0 && monos[0].p.is_coeff() => monos.swap_remove(0).p,
            _ => Poly::Sum(monos),
        }
    }

    /// Checks invariants 1-5 of the canonical form at every level.
    pub fn is_canonical(&self) -> bool {
        match self {
            Poly::Coeff(_) => true,
            Poly::Sum(monos) => {
                !monos.is_empty()
                    && monos.iter().tuple_windows().all(|(a, b)| a.exp < b.exp)
                    && monos.iter().all(|m| !m.p.is_zero() && m.p.is_canonical())
                    && !(monos.len() == 1 && monos[0].exp == 0 && monos[0].p.is_coeff())
            }
        }
    }
}

impl fmt::Display for Mono {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.p, self.exp)
    }
}

/// Prints the textual notation read back by `parse_poly`.
impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Poly::Coeff(c) => write!(f, "{}", c),
            Poly::Sum(monos) => write!(f, "{}", monos.iter().join("+")),
        }
    }
}

/// Textual notation of a polynomial, e.g. `(2,0)+(1,1)`.
pub fn format_polynomial(p: &Poly) -> String {
    p.to_string()
}

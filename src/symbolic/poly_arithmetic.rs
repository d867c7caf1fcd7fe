//! # Polynomial Arithmetic Module
//!
//! Algebra on canonical polynomials: addition, multiplication, negation, subtraction,
//! exponentiation, composition, evaluation at a point, degrees and equality.
//!
//! All operations borrow their operands and return a freshly owned canonical polynomial.
//! Coefficient arithmetic wraps at the `i64` range, the same way native signed overflow wraps;
//! this is part of the contract and is never reported as an error.
//!
//! The operations are available three ways:
//! - inherent methods (`p.add(&q)`, `p.pow(3)`, `p.compose(&qs)`, ...);
//! - `std::ops` operators on `Poly` and `&Poly` (`&p + &q`, `-p`, ...);
//! - free functions mirroring the calculator commands (`add`, `multiply`, `degree_by`, ...).

use crate::symbolic::poly_engine::{Mono, Poly, PolyCoeff, PolyExp};
use itertools::{EitherOrBoth, Itertools, iproduct};
use log::trace;

impl Poly {
    /// ADDITION AND MULTIPLICATION

    /// `self + other`.
    pub fn add(&self, other: &Poly) -> Poly {
        match (self, other) {
            (Poly::Coeff(a), Poly::Coeff(b)) => Poly::Coeff(a.wrapping_add(*b)),
            (Poly::Coeff(c), Poly::Sum(monos)) | (Poly::Sum(monos), Poly::Coeff(c)) => {
                Poly::add_coeff_to_sum(monos, *c)
            }
            (Poly::Sum(left), Poly::Sum(right)) => {
                // both sides are sorted, so a merge keeps the order
                let merged = left
                    .iter()
                    .merge_join_by(right.iter(), |a, b| a.exp.cmp(&b.exp))
                    .map(|pair| match pair {
                        EitherOrBoth::Both(a, b) => Mono::new(a.p.add(&b.p), a.exp),
                        EitherOrBoth::Left(m) | EitherOrBoth::Right(m) => m.clone(),
                    })
                    .collect();
                Poly::from_canonical_monos(merged)
            }
        }
    }

    /// Adds `c` to the exponent 0 coefficient of a sum, creating that monomial if absent.
    fn add_coeff_to_sum(monos: &[Mono], c: PolyCoeff) -> Poly {
        let mut result = monos.to_vec();
        match result.first_mut() {
            Some(first) if first.exp == 0 => first.p = first.p.add(&Poly::Coeff(c)),
            _ => result.insert(0, Mono::new(Poly::Coeff(c), 0)),
        }
        Poly::from_canonical_monos(result)
    }

    /// `self * other`.
    pub fn mul(&self, other: &Poly) -> Poly {
        match (self, other) {
            (Poly::Coeff(a), Poly::Coeff(b)) => Poly::Coeff(a.wrapping_mul(*b)),
            (Poly::Coeff(c), Poly::Sum(monos)) | (Poly::Sum(monos), Poly::Coeff(c)) => {
                Poly::scale_sum(monos, *c)
            }
            (Poly::Sum(left), Poly::Sum(right)) => {
                let products = iproduct!(left.iter(), right.iter())
                    .map(|(a, b)| Mono::new(a.p.mul(&b.p), a.exp.wrapping_add(b.exp)))
                    .collect();
                Poly::from_canonical_monos(products)
            }
        }
    }

    /// Multiplies every coefficient of a sum by `c`, at every depth.
    fn scale_sum(monos: &[Mono], c: PolyCoeff) -> Poly {
        if c == 0 {
            return Poly::zero();
        }
        let scalar = Poly::Coeff(c);
        // wrapping can turn a product into zero, the canonicaliser drops those
        let scaled = monos
            .iter()
            .map(|m| Mono::new(m.p.mul(&scalar), m.exp))
            .collect();
        Poly::from_canonical_monos(scaled)
    }

    /// `-self`. Negation keeps the structure, so no canonicalisation is needed.
    pub fn neg(&self) -> Poly {
        match self {
            Poly::Coeff(c) => Poly::Coeff(c.wrapping_neg()),
            Poly::Sum(monos) => {
                Poly::Sum(monos.iter().map(|m| Mono::new(m.p.neg(), m.exp)).collect())
            }
        }
    }

    /// `self - other`.
    pub fn sub(&self, other: &Poly) -> Poly {
        self.add(&other.neg())
    }

    /// `self^n` by binary exponentiation; `p^0 == 1` for every `p`, zero included.
    ///
    /// Coefficients live in the ring of integers modulo 2^64, so the result is the same as
    /// `n` repeated multiplications, overflow included.
    pub fn pow(&self, mut n: PolyExp) -> Poly {
        if let Poly::Coeff(c) = self {
            return Poly::Coeff(c.wrapping_pow(n));
        }
        let mut result = Poly::coeff(1);
        let mut base = self.clone();
        while n > 0 {
            if n & 1 == 1 {
                result = result.mul(&base);
            }
            n >>= 1;
            if n > 0 {
                base = base.mul(&base);
            }
        }
        result
    }

    /// SUBSTITUTION

    /// Substitutes `x_0 := qs[0]`, `x_1 := qs[1]`, ...
    ///
    /// Variables past the end of `qs` are evaluated at zero: a monomial with a positive power of
    /// such a variable vanishes, an exponent 0 monomial keeps its composed coefficient.
    /// In particular `compose(p, [])` is `p(0, 0, ...)`. Surplus replacements are ignored.
    pub fn compose(&self, qs: &[Poly]) -> Poly {
        match self {
            Poly::Coeff(_) => self.clone(),
            Poly::Sum(monos) => {
                trace!("compose: {} monomials, {} replacements", monos.len(), qs.len());
                monos.iter().fold(Poly::zero(), |acc, m| {
                    let part = match qs.split_first() {
                        Some((q, rest)) => q.pow(m.exp).mul(&m.p.compose(rest)),
                        None if m.exp == 0 => m.p.compose(&[]),
                        None => Poly::zero(),
                    };
                    acc.add(&part)
                })
            }
        }
    }

    /// Value at `x_0 := x`. Deeper variables move one level up: the result is
    /// `p(x, x_0, x_1, ...)`.
    pub fn at(&self, x: PolyCoeff) -> Poly {
        match self {
            Poly::Coeff(_) => self.clone(),
            Poly::Sum(monos) => {
                let mut shifted = Vec::new();
                for m in monos {
                    let scale = x.wrapping_pow(m.exp);
                    match &m.p {
                        Poly::Coeff(c) => {
                            shifted.push(Mono::new(Poly::Coeff(c.wrapping_mul(scale)), 0))
                        }
                        Poly::Sum(inner) => {
                            let factor = Poly::Coeff(scale);
                            shifted.extend(
                                inner.iter().map(|im| Mono::new(im.p.mul(&factor), im.exp)),
                            );
                        }
                    }
                }
                Poly::from_canonical_monos(shifted)
            }
        }
    }

    /// DEGREES AND EQUALITY

    /// Total degree; -1 for the zero polynomial.
    pub fn deg(&self) -> i32 {
        match self {
            Poly::Coeff(0) => -1,
            Poly::Coeff(_) => 0,
            Poly::Sum(monos) => monos
                .iter()
                .filter(|m| !m.p.is_zero())
                .map(|m| (m.exp as i32).wrapping_add(m.p.deg()))
                .max()
                .unwrap_or(-1),
        }
    }

    /// Degree with respect to the variable `x_idx` (0 is the outermost); -1 for zero.
    pub fn deg_by(&self, idx: usize) -> i32 {
        if self.is_zero() {
            return -1;
        }
        self.deg_at_level(idx)
    }

    fn deg_at_level(&self, idx: usize) -> i32 {
        match self {
            Poly::Coeff(_) => 0,
            Poly::Sum(monos) if idx == 0 => {
                monos.iter().map(|m| m.exp as i32).max().unwrap_or(0)
            }
            Poly::Sum(monos) => monos
                .iter()
                .map(|m| m.p.deg_at_level(idx - 1))
                .max()
                .unwrap_or(0),
        }
    }

    /// Structural equality of canonical forms.
    pub fn is_eq(&self, other: &Poly) -> bool {
        self == other
    }
}

impl std::ops::Add for &Poly {
    type Output = Poly;

    fn add(self, rhs: Self) -> Self::Output {
        Poly::add(self, rhs)
    }
}

impl std::ops::Add for Poly {
    type Output = Poly;

    fn add(self, rhs: Self) -> Self::Output {
        Poly::add(&self, &rhs)
    }
}

impl std::ops::Sub for &Poly {
    type Output = Poly;

    fn sub(self, rhs: Self) -> Self::Output {
        Poly::sub(self, rhs)
    }
}

impl std::ops::Sub for Poly {
    type Output = Poly;

    fn sub(self, rhs: Self) -> Self::Output {
        Poly::sub(&self, &rhs)
    }
}

impl std::ops::Mul for &Poly {
    type Output = Poly;

    fn mul(self, rhs: Self) -> Self::Output {
        Poly::mul(self, rhs)
    }
}

impl std::ops::Mul for Poly {
    type Output = Poly;

    fn mul(self, rhs: Self) -> Self::Output {
        Poly::mul(&self, &rhs)
    }
}

impl std::ops::Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Self::Output {
        Poly::neg(self)
    }
}

impl std::ops::Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Self::Output {
        Poly::neg(&self)
    }
}

impl std::ops::AddAssign<&Poly> for Poly {
    fn add_assign(&mut self, rhs: &Poly) {
        *self = Poly::add(self, rhs);
    }
}

impl std::ops::MulAssign<&Poly> for Poly {
    fn mul_assign(&mut self, rhs: &Poly) {
        *self = Poly::mul(self, rhs);
    }
}

pub fn add(p: &Poly, q: &Poly) -> Poly {
    p.add(q)
}

pub fn multiply(p: &Poly, q: &Poly) -> Poly {
    p.mul(q)
}

pub fn negate(p: &Poly) -> Poly {
    p.neg()
}

pub fn subtract(p: &Poly, q: &Poly) -> Poly {
    p.sub(q)
}

pub fn exponentiate(p: &Poly, n: PolyExp) -> Poly {
    p.pow(n)
}

pub fn compose(p: &Poly, replacements: &[Poly]) -> Poly {
    p.compose(replacements)
}

pub fn evaluate_at(p: &Poly, x: PolyCoeff) -> Poly {
    p.at(x)
}

pub fn degree(p: &Poly) -> i32 {
    p.deg()
}

pub fn degree_by(p: &Poly, var_idx: usize) -> i32 {
    p.deg_by(var_idx)
}

pub fn is_zero(p: &Poly) -> bool {
    p.is_zero()
}

pub fn is_constant(p: &Poly) -> bool {
    p.is_coeff()
}

pub fn structural_equals(p: &Poly, q: &Poly) -> bool {
    p.is_eq(q)
}

//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use crate::symbolic::poly_arithmetic::*;
    use crate::symbolic::poly_engine::{Mono, Poly, PolyCoeff};

    fn p(s: &str) -> Poly {
        s.parse().unwrap()
    }

    fn c(v: PolyCoeff) -> Poly {
        Poly::coeff(v)
    }

    // ADD
    #[test]
    fn test_add_coefficients() {
        assert_eq!(c(2).add(&c(3)), c(5));
        assert_eq!(c(2).add(&c(-2)), Poly::zero());
    }

    #[test]
    fn test_add_coefficients_wraps() {
        assert_eq!(c(i64::MAX).add(&c(1)), c(i64::MIN));
        assert_eq!(c(i64::MIN).add(&c(-1)), c(i64::MAX));
    }

    #[test]
    fn test_add_constant_to_sum() {
        // pushing 2 and x_0 then ADD
        let sum = c(2).add(&p("(1,1)"));
        assert_eq!(sum.to_string(), "(2,0)+(1,1)");
        assert_eq!(p("(1,1)").add(&c(2)), sum);
    }

    #[test]
    fn test_add_constant_cancels_constant_term() {
        assert_eq!(p("(1,0)+(1,1)").add(&c(-1)), p("(1,1)"));
        assert_eq!(p("(1,0)+(1,1)").add(&c(0)), p("(1,0)+(1,1)"));
    }

    #[test]
    fn test_add_constant_into_nested_coefficient() {
        // (x_1 + x_0) + 3
        let sum = p("((1,1),0)+(1,1)").add(&c(3));
        assert_eq!(sum.to_string(), "((3,0)+(1,1),0)+(1,1)");
        assert!(sum.is_canonical());
    }

    #[test]
    fn test_add_sums_merges_exponents() {
        let sum = p("(1,1)+(1,3)").add(&p("(2,0)+(4,3)+(1,5)"));
        assert_eq!(sum.to_string(), "(2,0)+(1,1)+(5,3)+(1,5)");
    }

    #[test]
    fn test_add_sums_cancellation() {
        assert_eq!(p("(1,1)+(1,2)").add(&p("(-1,1)")), p("(1,2)"));
        assert_eq!(p("(1,1)").add(&p("(-1,1)")), Poly::zero());
        // x_0 cancels, the sum collapses to a constant
        assert_eq!(p("(5,0)+(1,1)").add(&p("(-1,1)")), c(5));
    }

    #[test]
    fn test_add_nested_cancellation_collapses_parent() {
        // (x_1 + 2) + x_0   plus   -x_1 - x_0
        let sum = p("((2,0)+(1,1),0)+(1,1)").add(&p("((-1,1),0)+(-1,1)"));
        assert_eq!(sum, c(2));
    }

    // MUL
    #[test]
    fn test_mul_coefficients() {
        assert_eq!(c(6).mul(&c(-7)), c(-42));
        assert_eq!(c(i64::MAX).mul(&c(2)), c(-2));
    }

    #[test]
    fn test_mul_by_constant() {
        assert_eq!(c(3).mul(&p("(1,0)+((2,1),2)")).to_string(), "(3,0)+((6,1),2)");
        assert_eq!(c(0).mul(&p("(1,0)+(1,1)")), Poly::zero());
        assert_eq!(p("(1,0)+(1,1)").mul(&c(1)), p("(1,0)+(1,1)"));
    }

    #[test]
    fn test_mul_by_constant_wraps_to_zero() {
        // 2^32 * 2^32 == 2^64 wraps to zero
        assert_eq!(p("(4294967296,1)").mul(&c(4294967296)), Poly::zero());
    }

    #[test]
    fn test_mul_sums() {
        let x_plus_one = p("(1,0)+(1,1)");
        assert_eq!(x_plus_one.mul(&x_plus_one).to_string(), "(1,0)+(2,1)+(1,2)");
    }

    #[test]
    fn test_mul_difference_of_squares() {
        // (x_0 + x_1) * (x_0 - x_1) == x_0^2 - x_1^2
        let product = p("((1,1),0)+(1,1)").mul(&p("((-1,1),0)+(1,1)"));
        assert_eq!(product.to_string(), "((-1,2),0)+(1,2)");
        assert_eq!(product.deg(), 2);
    }

    #[test]
    fn test_operators() {
        let a = p("(1,0)+(1,1)");
        let b = p("(2,2)");
        assert_eq!(&a + &b, a.add(&b));
        assert_eq!(&a * &b, a.mul(&b));
        assert_eq!(&a - &b, a.sub(&b));
        assert_eq!(-&a, a.neg());
        assert_eq!(a.clone() + b.clone(), add(&a, &b));
        let mut acc = Poly::zero();
        acc += &a;
        acc *= &b;
        assert_eq!(acc, multiply(&a, &b));
    }

    // NEG AND SUB
    #[test]
    fn test_neg() {
        assert_eq!(p("(1,0)+((2,1),2)").neg().to_string(), "(-1,0)+((-2,1),2)");
        assert_eq!(c(0).neg(), c(0));
        // the one value without an opposite
        assert_eq!(c(i64::MIN).neg(), c(i64::MIN));
    }

    #[test]
    fn test_sub() {
        let a = p("(1,0)+((2,1),2)");
        assert_eq!(a.sub(&a), Poly::zero());
        assert_eq!(p("(2,1)").sub(&p("(1,1)")), p("(1,1)"));
        assert_eq!(c(3).sub(&p("(1,1)")).to_string(), "(3,0)+(-1,1)");
        assert_eq!(subtract(&c(i64::MIN), &c(1)), c(i64::MAX));
    }

    #[test]
    fn test_additive_inverse() {
        for s in ["0", "-5", "(1,0)+(1,2)", "((1,0)+(3,4),1)+((2,2),7)"] {
            let a = p(s);
            assert_eq!(a.add(&negate(&a)), Poly::zero(), "{}", s);
        }
    }

    // POW
    #[test]
    fn test_pow_zero_exponent() {
        assert_eq!(p("(1,0)+(1,1)").pow(0), c(1));
        assert_eq!(Poly::zero().pow(0), c(1));
        assert_eq!(Poly::zero().pow(3), Poly::zero());
    }

    #[test]
    fn test_pow_binomial() {
        assert_eq!(
            p("(1,0)+(1,1)").pow(3).to_string(),
            "(1,0)+(3,1)+(3,2)+(1,3)"
        );
        assert_eq!(c(2).pow(10), c(1024));
    }

    #[test]
    fn test_pow_matches_repeated_multiplication() {
        let base = p("((1,0)+(-2,1),0)+(3,1)");
        let mut naive = c(1);
        for n in 0..8 {
            assert_eq!(exponentiate(&base, n), naive, "n = {}", n);
            naive = naive.mul(&base);
        }
    }

    #[test]
    fn test_pow_wraps_like_repeated_multiplication() {
        assert_eq!(c(2).pow(64), Poly::zero());
        let mut naive: i64 = 1;
        for _ in 0..41 {
            naive = naive.wrapping_mul(3);
        }
        assert_eq!(c(3).pow(41), c(naive));
        assert_eq!(p("(3,1)").pow(41), Poly::Sum(vec![Mono::new(c(naive), 41)]));
    }

    // COMPOSE
    #[test]
    fn test_compose_constant() {
        assert_eq!(c(5).compose(&[p("(1,1)")]), c(5));
        assert_eq!(c(5).compose(&[]), c(5));
    }

    #[test]
    fn test_compose_single_variable() {
        // x^2 + 1 with x := x + 1
        let composed = compose(&p("(1,0)+(1,2)"), &[p("(1,0)+(1,1)")]);
        assert_eq!(composed.to_string(), "(2,0)+(2,1)+(1,2)");
    }

    #[test]
    fn test_compose_two_variables() {
        // x_0 * x_1 with x_0 := 3, x_1 := x_0^2
        let composed = p("((1,1),1)").compose(&[c(3), p("(1,2)")]);
        assert_eq!(composed.to_string(), "(3,2)");
    }

    #[test]
    fn test_compose_empty_replacements_evaluates_at_zero() {
        assert_eq!(p("(3,0)+(1,2)").compose(&[]), c(3));
        // (2 + x_1) + x_0
        assert_eq!(p("((2,0)+(1,1),0)+(1,1)").compose(&[]), c(2));
        assert_eq!(p("(1,1)").compose(&[]), Poly::zero());
    }

    #[test]
    fn test_compose_zeroes_variables_past_the_replacements() {
        // x_1 + x_0 with only x_0 := 7: x_1 is not kept as a symbol but vanishes
        assert_eq!(p("((1,1),0)+(1,1)").compose(&[c(7)]), c(7));
    }

    #[test]
    fn test_compose_ignores_surplus_replacements() {
        assert_eq!(p("(1,1)").compose(&[p("(1,1)"), c(5)]), p("(1,1)"));
    }

    #[test]
    fn test_compose_with_zero_polynomial() {
        assert_eq!(p("(4,0)+(1,3)").compose(&[Poly::zero()]), c(4));
    }

    // AT
    #[test]
    fn test_at_single_variable() {
        assert_eq!(p("(1,0)+(1,1)").at(2), c(3));
        assert_eq!(evaluate_at(&p("(1,0)+(-2,1)+(1,2)"), 1), Poly::zero());
        assert_eq!(p("(1,3)").at(0), Poly::zero());
        assert_eq!(c(9).at(100), c(9));
    }

    #[test]
    fn test_at_shifts_deeper_variables() {
        // x_0 * x_1 at x_0 = 5 is 5 * x_0
        assert_eq!(p("((1,1),1)").at(5).to_string(), "(5,1)");
        // x_1 + x_0 at x_0 = 2 is x_0 + 2
        assert_eq!(p("((1,1),0)+(1,1)").at(2).to_string(), "(2,0)+(1,1)");
        // x_1 * x_0^2 + x_1 at x_0 = -1 is 2 * x_0
        assert_eq!(p("((1,1),0)+((1,1),2)").at(-1).to_string(), "(2,1)");
    }

    #[test]
    fn test_at_wraps() {
        assert_eq!(p("(1,64)").at(2), Poly::zero());
        assert_eq!(p("(1,1)").at(i64::MIN), c(i64::MIN));
    }

    #[test]
    fn test_at_agrees_with_compose_for_one_variable() {
        let a = p("(3,0)+(-1,2)+(5,7)");
        for x in [-3, 0, 1, 2, 11] {
            assert_eq!(a.at(x), a.compose(&[c(x)]), "x = {}", x);
        }
    }

    // DEGREES
    #[test]
    fn test_deg() {
        assert_eq!(Poly::zero().deg(), -1);
        assert_eq!(c(-4).deg(), 0);
        assert_eq!(degree(&p("(1,0)+(1,2)")), 2);
        // x_1 + x_1^3 * x_0^2
        assert_eq!(p("((1,1),0)+((1,3),2)").deg(), 5);
    }

    #[test]
    fn test_deg_by() {
        let a = p("((1,1),0)+((1,3),2)");
        assert_eq!(a.deg_by(0), 2);
        assert_eq!(a.deg_by(1), 3);
        assert_eq!(degree_by(&a, 2), 0);
        assert_eq!(degree_by(&a, 100), 0);
        assert_eq!(c(7).deg_by(0), 0);
        assert_eq!(Poly::zero().deg_by(0), -1);
        assert_eq!(Poly::zero().deg_by(3), -1);
    }

    #[test]
    fn test_degree_law_on_samples() {
        let samples = ["3", "(1,0)+(1,2)", "((1,1),0)+((1,3),2)", "((2,0)+(1,4),1)"];
        for a in samples {
            for b in samples {
                let (a, b) = (p(a), p(b));
                assert_eq!(a.mul(&b).deg(), a.deg() + b.deg());
            }
        }
    }

    // PREDICATES
    #[test]
    fn test_predicates() {
        assert!(is_zero(&Poly::zero()));
        assert!(is_constant(&Poly::zero()));
        assert!(is_constant(&c(3)));
        assert!(!is_constant(&p("(1,1)")));
        assert!(!is_zero(&p("(1,1)")));
        assert!(structural_equals(&p("(1,0)+(1,1)"), &p("(1,1)+(1,0)")));
        assert!(!structural_equals(&p("(1,1)"), &p("(1,2)")));
        assert!(!p("(1,1)").is_eq(&c(1)));
    }

    #[test]
    fn test_results_are_canonical() {
        let a = p("((1,0)+(2,2),1)+((3,1),0)");
        let b = p("((-1,0)+(2,2),1)+(4,3)");
        for r in [
            a.add(&b),
            a.sub(&b),
            a.mul(&b),
            a.pow(3),
            a.at(-2),
            a.compose(&[b.clone(), a.clone()]),
        ] {
            assert!(r.is_canonical(), "{}", r);
        }
    }
}

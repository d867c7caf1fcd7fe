use crate::calculator::calc::Calculator;
use crate::symbolic::poly_engine::Poly;
use log::{info, warn};

fn parse_or_zero(text: &str) -> Poly {
    match text.parse::<Poly>() {
        Ok(p) => p,
        Err(e) => {
            warn!("{}", e);
            Poly::zero()
        }
    }
}

/// Walks through one example and returns what it printed, line by line.
pub fn poly_examples(example: usize) -> Vec<String> {
    let mut results = Vec::new();
    match example {
        0 => {
            // arithmetic on 1 + x_0 and x_0*x_1
            let p = parse_or_zero("(1,0)+(1,1)");
            let q = parse_or_zero("((1,1),1)");
            info!("p = {}, q = {}", p, q);
            results.push((&p + &q).to_string());
            results.push((&p * &q).to_string());
            results.push((-&p).to_string());
            results.push(p.pow(3).to_string());
        }
        1 => {
            // x_0^2 + x_1
            let p = Poly::var(0).pow(2) + Poly::var(1);
            info!("p = {}", p);
            // substitute x_0 -> x_0 + 1, x_1 -> 2
            let replacements = vec![Poly::var(0) + Poly::coeff(1), Poly::coeff(2)];
            let composed = p.compose(&replacements);
            info!("p(x_0 + 1, 2) = {}", composed);
            results.push(composed.to_string());
            // x_0 := 3, x_1 moves to x_0
            let evaluated = p.at(3);
            info!("p(3, x_0) = {}", evaluated);
            results.push(evaluated.to_string());
        }
        2 => {
            // the stack calculator on a small script
            let script = "(1,0)+(1,1)\nCLONE\nMUL\nPRINT\nDEG\nAT 2\nPRINT\nPOP\nPOP\n";
            let mut calc = Calculator::default();
            let mut out = Vec::new();
            let mut err = Vec::new();
            if let Err(e) = calc.run(script.as_bytes(), &mut out, &mut err) {
                warn!("calculator failed: {}", e);
            }
            let out = String::from_utf8_lossy(&out);
            let err = String::from_utf8_lossy(&err);
            info!("stdout:\n{}stderr:\n{}", out, err);
            results.extend(out.lines().map(String::from));
            results.extend(err.lines().map(String::from));
        }
        3 => {
            // degrees of (1 + x_1) x_0^2 - 3 x_1^4 x_0^5
            let p = parse_or_zero("((1,0)+(1,1),2)+((-3,4),5)");
            info!("p = {}, depth {}", p, p.depth());
            results.push(p.deg().to_string());
            for idx in 0..2 {
                info!("degree in x_{}: {}", idx, p.deg_by(idx));
                results.push(p.deg_by(idx).to_string());
            }
        }
        _ => warn!("no example number {}", example),
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_example() {
        assert_eq!(
            poly_examples(0),
            vec![
                "(1,0)+((1,0)+(1,1),1)",
                "((1,1),1)+((1,1),2)",
                "(-1,0)+(-1,1)",
                "(1,0)+(3,1)+(3,2)+(1,3)",
            ]
        );
    }

    #[test]
    fn test_compose_example() {
        assert_eq!(poly_examples(1), vec!["(3,0)+(2,1)+(1,2)", "(9,0)+(1,1)"]);
    }

    #[test]
    fn test_calculator_example() {
        assert_eq!(
            poly_examples(2),
            vec!["(1,0)+(2,1)+(1,2)", "2", "9", "ERROR 9 STACK UNDERFLOW"]
        );
    }

    #[test]
    fn test_degree_example() {
        assert_eq!(poly_examples(3), vec!["9", "5", "4"]);
        assert!(poly_examples(42).is_empty());
    }
}

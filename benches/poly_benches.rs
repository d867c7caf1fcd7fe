use RustedPoly::Examples::poly_examples::poly_examples;
use RustedPoly::calculator::calc::Calculator;
use RustedPoly::symbolic::parse_poly::parse_polynomial;
use RustedPoly::symbolic::poly_engine::{Poly, format_polynomial};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// 1 + x_0 + x_1 + x_2
fn linear_form() -> Poly {
    (0..3).fold(Poly::coeff(1), |acc, idx| acc + Poly::var(idx))
}

fn bench_mul(c: &mut Criterion) {
    let p = linear_form().pow(6);
    let q = linear_form().pow(5);
    c.bench_function("mul (1+x+y+z)^6 * (1+x+y+z)^5", |b| {
        b.iter(|| black_box(&p).mul(black_box(&q)))
    });
}

fn bench_pow(c: &mut Criterion) {
    let p = linear_form();
    c.bench_function("pow (1+x+y+z)^12", |b| b.iter(|| black_box(&p).pow(black_box(12))));
    let x = Poly::var(0) + Poly::coeff(1);
    c.bench_function("pow (1+x)^1000", |b| b.iter(|| black_box(&x).pow(black_box(1000))));
}

fn bench_compose(c: &mut Criterion) {
    let p = linear_form().pow(6);
    let qs = vec![linear_form(), Poly::var(0).pow(2), Poly::coeff(3)];
    c.bench_function("compose (1+x+y+z)^6", |b| {
        b.iter(|| black_box(&p).compose(black_box(&qs)))
    });
}

fn bench_parse(c: &mut Criterion) {
    let text = format_polynomial(&linear_form().pow(8));
    c.bench_function("parse (1+x+y+z)^8", |b| {
        b.iter(|| parse_polynomial(black_box(&text), 1))
    });
}

fn bench_calculator(c: &mut Criterion) {
    let script = "(1,0)+(1,1)\nCLONE\nMUL\nCLONE\nMUL\nCLONE\nMUL\nDEG\nAT 3\nPRINT\n".repeat(50);
    c.bench_function("calculator script", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            let mut err = Vec::new();
            Calculator::default()
                .run(black_box(script.as_bytes()), &mut out, &mut err)
                .unwrap();
            out
        })
    });
}

fn bench_examples(c: &mut Criterion) {
    c.bench_function("poly examples", |b| {
        b.iter(|| (0..4).map(|i| poly_examples(black_box(i)).len()).sum::<usize>())
    });
}

criterion_group!(
    benches,
    bench_mul,
    bench_pow,
    bench_compose,
    bench_parse,
    bench_calculator,
    bench_examples
);
criterion_main!(benches);

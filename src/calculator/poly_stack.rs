use crate::symbolic::poly_engine::Poly;

/// Operand stack of the calculator. It owns every polynomial pushed on it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PolyStack {
    polys: Vec<Poly>,
}

impl PolyStack {
    pub fn new() -> Self {
        PolyStack { polys: Vec::new() }
    }

    pub fn push(&mut self, p: Poly) {
        self.polys.push(p);
    }

    pub fn pop(&mut self) -> Option<Poly> {
        self.polys.pop()
    }

    pub fn top(&self) -> Option<&Poly> {
        self.polys.last()
    }

    /// The two topmost polynomials, topmost first.
    pub fn top_two(&self) -> Option<(&Poly, &Poly)> {
        match self.polys.as_slice() {
            [.., second, first] => Some((first, second)),
            _ => None,
        }
    }

    /// Pops the two topmost polynomials, topmost first. Leaves the stack untouched if there
    /// are fewer than two.
    pub fn pop_two(&mut self) -> Option<(Poly, Poly)> {
        if self.polys.len() < 2 {
            return None;
        }
        let first = self.polys.pop()?;
        let second = self.polys.pop()?;
        Some((first, second))
    }

    /// Pops the `k` topmost polynomials and returns them in push order (the topmost last).
    /// Leaves the stack untouched if there are fewer than `k`.
    pub fn pop_many(&mut self, k: usize) -> Option<Vec<Poly>> {
        let len = self.polys.len();
        if k > len {
            return None;
        }
        Some(self.polys.split_off(len - k))
    }

    pub fn len(&self) -> usize {
        self.polys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    pub fn clear(&mut self) {
        self.polys.clear();
    }
}

/// Scratch sequences for synthetic division.
///
/// Both sequences are sized to the degree of the polynomial a solve starts
/// with and reused as the polynomial shrinks; only indices up to the current
/// degree are meaningful.
#[derive(Debug)]
pub(super) struct Division {
    b: Vec<f64>,
    c: Vec<f64>,
}

impl Division {
    pub(super) fn with_degree(degree: usize) -> Self {
        Self {
            b: vec![0.0; degree + 1],
            c: vec![0.0; degree + 1],
        }
    }

    /// Divides `a` (degree ≥ 3) by `x² − u·x − v`.
    ///
    /// Afterwards `b[2..=n]` holds the quotient, `b[0]` and `b[1]` the
    /// remainder terms, and `c` the auxiliary sequence for the Newton update.
    pub(super) fn by_quadratic(&mut self, a: &[f64], u: f64, v: f64) {
        let n = a.len() - 1;
        let (b, c) = (&mut self.b, &mut self.c);

        b[n] = a[n];
        c[n] = a[n];
        b[n - 1] = a[n - 1] + u * b[n];
        c[n - 1] = b[n - 1] + u * c[n];

        for i in (1..n - 1).rev() {
            b[i] = a[i] + u * b[i + 1] + v * b[i + 2];
            c[i] = b[i] + u * c[i + 1] + v * c[i + 2];
        }

        b[0] = a[0] + u * b[1] + v * b[2];
    }

    /// Returns the Bairstow correction `(Δu, Δv)` for the last quadratic
    /// division, or `None` when the Jacobian determinant is exactly zero.
    pub(super) fn bairstow_update(&self) -> Option<(f64, f64)> {
        let (b, c) = (&self.b, &self.c);
        let det = c[2] * c[2] - c[1] * c[3];

        #[allow(clippy::float_cmp)]
        if det == 0.0 {
            return None;
        }

        let du = (b[0] * c[3] - b[1] * c[2]) / det;
        let dv = (c[1] * b[1] - c[2] * b[0]) / det;
        Some((du, dv))
    }

    /// Divides `a` by `x − r`.
    ///
    /// Afterwards `b[1..=n]` holds the quotient and `b[0]` equals `a(r)`.
    pub(super) fn by_linear(&mut self, a: &[f64], r: f64) {
        let n = a.len() - 1;
        let b = &mut self.b;

        b[n] = a[n];
        for i in (0..n).rev() {
            b[i] = a[i] + r * b[i + 1];
        }
    }

    /// Returns `b[0]`: the value at `r` after a linear division.
    pub(super) fn value(&self) -> f64 {
        self.b[0]
    }

    /// Replaces `a` with the quotient of the last division.
    ///
    /// `width` is the degree of the divisor, so the quotient is `b[width..=n]`.
    pub(super) fn deflate(&self, a: &mut Vec<f64>, width: usize) {
        let n = a.len() - 1;
        a.clear();
        a.extend_from_slice(&self.b[width..=n]);
    }
}

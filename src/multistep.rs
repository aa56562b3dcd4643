//! Explicit multi-step rules.

use ndarray::prelude::*;

use crate::step::{eval_rhs, ForwardEuler, StepStrategy};
use crate::Error;

/// Two-step Adams–Bashforth method, order 2.
///
/// Uses the derivatives at the current and the previous grid point. The grid
/// need not be uniform: with `h = t[i + 1] - t[i]` and
/// `h_prev = t[i] - t[i - 1]`,
///
/// ```text
/// u[i + 1] = u[i] + h * ((1 + r / 2) * f[i] - (r / 2) * f[i - 1]),  r = h / h_prev
/// ```
///
/// The first interval has no previous point and is taken with forward Euler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdamsBashforth2;

impl StepStrategy for AdamsBashforth2 {
    fn name(&self) -> &str {
        "Adams-Bashforth 2"
    }

    fn advance<F>(
        &self,
        i: usize,
        u: ArrayView2<'_, f64>,
        fun: &F,
        t: ArrayView1<'_, f64>,
    ) -> Result<Array1<f64>, Error>
    where
        F: Fn(ArrayView1<'_, f64>, f64) -> Array1<f64>,
    {
        if i == 0 {
            return ForwardEuler.advance(i, u, fun, t);
        }
        let h = t[i + 1] - t[i];
        let r = h / (t[i] - t[i - 1]);
        let y = u.row(i);
        let f = eval_rhs(fun, y, t[i])?;
        let f_prev = eval_rhs(fun, u.row(i - 1), t[i - 1])?;
        Ok((f * (1. + r / 2.) - f_prev * (r / 2.)) * h + &y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn uniform_grid_weights() {
        // f = t, so f[1] = 1 and f[0] = 0 on a unit grid.
        let fun = |_y: ArrayView1<'_, f64>, t: f64| array![t];
        let u = array![[0.], [0.]];
        let t = array![0., 1., 2.];
        let next = AdamsBashforth2.advance(1, u.view(), &fun, t.view()).unwrap();
        assert_eq!(next, array![1.5]);
    }

    #[test]
    fn first_step_is_euler() {
        let fun = |y: ArrayView1<'_, f64>, _t: f64| y.to_owned();
        let u = array![[2.]];
        let t = array![0., 0.5];
        let next = AdamsBashforth2.advance(0, u.view(), &fun, t.view()).unwrap();
        assert_eq!(next, array![3.]);
    }
}

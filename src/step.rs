//! The single-step contract and the forward Euler rule.

use ndarray::prelude::*;

use crate::Error;

/// A rule that advances the solution by one interval of the time grid.
///
/// `advance` receives the index `i` it advances *from*, the history `u` (rows
/// `0..=i` of the solution buffer, so later rows are never visible), the
/// right-hand side `fun(y, t)` and the full time grid. It returns the state at
/// `t[i + 1]`, which must have as many components as a row of `u`.
///
/// Implementations must be pure functions of these inputs. Multi-step rules
/// may read any row of `u`.
///
/// The provided `advance` fails with [`Error::NotImplemented`], so a type that
/// only implements `name` behaves as an abstract strategy.
pub trait StepStrategy {
    /// Human readable name, used in log records and errors.
    fn name(&self) -> &str;

    /// Computes the state at `t[i + 1]`.
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
        let _ = (i, u, fun, t);
        Err(Error::NotImplemented(self.name().to_string()))
    }
}

/// Evaluates `fun` and checks that the derivative matches the state length.
pub(crate) fn eval_rhs<F>(fun: &F, y: ArrayView1<'_, f64>, t: f64) -> Result<Array1<f64>, Error>
where
    F: Fn(ArrayView1<'_, f64>, f64) -> Array1<f64>,
{
    let expected = y.len();
    let dy = fun(y, t);
    if dy.len() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            found: dy.len(),
        });
    }
    Ok(dy)
}

/// Explicit (forward) Euler method.
///
/// ```text
/// u[i + 1] = u[i] + (t[i + 1] - t[i]) * f(u[i], t[i])
/// ```
///
/// First order accurate. NaN and infinite values produced by `f` propagate
/// into the solution unchanged; they are not treated as errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardEuler;

impl StepStrategy for ForwardEuler {
    fn name(&self) -> &str {
        "forward Euler"
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
        let dt = t[i + 1] - t[i];
        let y = u.row(i);
        Ok(eval_rhs(fun, y, t[i])? * dt + &y)
    }
}

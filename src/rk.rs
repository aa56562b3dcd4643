//! Fixed-step explicit Runge–Kutta rules.

use ndarray::prelude::*;
use ndarray::s;
use std::fmt;
use std::marker::PhantomData;

use crate::step::{eval_rhs, StepStrategy};
use crate::Error;

/// Explicit Runge–Kutta step taken over each interval of the time grid.
///
/// The stages are those of the Butcher tableau given by `O`. The step size is
/// the spacing of the grid, so no error estimate is made.
pub struct RungeKutta<O: RKMethod> {
    method: PhantomData<O>,
}

impl<O: RKMethod> RungeKutta<O> {
    pub fn new() -> RungeKutta<O> {
        RungeKutta {
            method: PhantomData,
        }
    }

    /// Order of accuracy of the method.
    pub fn order(&self) -> usize {
        O::ORDER
    }
}

impl<O: RKMethod> Default for RungeKutta<O> {
    fn default() -> RungeKutta<O> {
        RungeKutta::new()
    }
}

impl<O: RKMethod> Clone for RungeKutta<O> {
    fn clone(&self) -> RungeKutta<O> {
        RungeKutta::new()
    }
}

impl<O: RKMethod> Copy for RungeKutta<O> {}

impl<O: RKMethod> fmt::Debug for RungeKutta<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RungeKutta").field(&O::NAME).finish()
    }
}

impl<O: RKMethod> StepStrategy for RungeKutta<O> {
    fn name(&self) -> &str {
        O::NAME
    }

    /// Notation for the Butcher tableau is as in (ref 1).
    ///
    /// # References
    ///
    /// 1. E. Hairer, S. P. Norsett G. Wanner, "Solving Ordinary Differential
    ///    Equations I: Nonstiff Problems", Sec. II.1.
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
        let h = t[i + 1] - t[i];
        let y = u.row(i);

        // Stage derivatives, one per row.
        let mut k = Array2::<f64>::zeros((O::NUM_STAGES, y.len()));
        k.row_mut(0).assign(&eval_rhs(fun, y, t[i])?);
        for (s, (a, c)) in O::a().iter().zip(O::c()).enumerate() {
            let dy = k.slice(s![..s + 1, ..]).t().dot(a) * h;
            let stage = eval_rhs(fun, (dy + &y).view(), t[i] + c * h)?;
            k.row_mut(s + 1).assign(&stage);
        }

        Ok(k.t().dot(&O::b()) * h + &y)
    }
}

pub trait RKMethod {
    /// Name used in log records.
    const NAME: &'static str;

    /// Order of the method.
    const ORDER: usize;

    /// Number of stages in the method.
    const NUM_STAGES: usize;

    /// Coefficients for incrementing time for consecutive RK stages, length
    /// `NUM_STAGES - 1`.
    ///
    /// The value for the first stage is always zero, so it is not included.
    fn c() -> ArrayView1<'static, f64>;

    /// Coefficients for combining previous RK stages to compute the next
    /// stage, length `NUM_STAGES - 1`.
    ///
    /// For explicit methods the coefficients above the main diagonal are
    /// zeros, so `a` is stored as a list of arrays of increasing lengths. The
    /// first stage is always just `f`, thus no coefficients for it are
    /// required.
    fn a() -> &'static [ArrayView1<'static, f64>];

    /// Coefficients for combining RK stages for computing the final
    /// prediction, length `NUM_STAGES`.
    fn b() -> ArrayView1<'static, f64>;
}

/// Explicit midpoint method, order 2.
pub struct Midpoint;

impl RKMethod for Midpoint {
    const NAME: &'static str = "explicit midpoint";

    const ORDER: usize = 2;

    const NUM_STAGES: usize = 2;

    fn c() -> ArrayView1<'static, f64> {
        aview1(&[1. / 2.])
    }

    fn a() -> &'static [ArrayView1<'static, f64>] {
        lazy_static! {
            static ref A: [ArrayView1<'static, f64>; 2 - 1] = [aview1(&[1. / 2.])];
        }
        &*A
    }

    fn b() -> ArrayView1<'static, f64> {
        aview1(&[0., 1.])
    }
}

/// Heun's method (explicit trapezoidal rule), order 2.
pub struct Heun;

impl RKMethod for Heun {
    const NAME: &'static str = "Heun";

    const ORDER: usize = 2;

    const NUM_STAGES: usize = 2;

    fn c() -> ArrayView1<'static, f64> {
        aview1(&[1.])
    }

    fn a() -> &'static [ArrayView1<'static, f64>] {
        lazy_static! {
            static ref A: [ArrayView1<'static, f64>; 2 - 1] = [aview1(&[1.])];
        }
        &*A
    }

    fn b() -> ArrayView1<'static, f64> {
        aview1(&[1. / 2., 1. / 2.])
    }
}

/// The classical Runge–Kutta method of order 4.
pub struct RK4;

impl RKMethod for RK4 {
    const NAME: &'static str = "classical Runge-Kutta 4";

    const ORDER: usize = 4;

    const NUM_STAGES: usize = 4;

    fn c() -> ArrayView1<'static, f64> {
        aview1(&[1. / 2., 1. / 2., 1.])
    }

    fn a() -> &'static [ArrayView1<'static, f64>] {
        lazy_static! {
            static ref A: [ArrayView1<'static, f64>; 4 - 1] = [
                aview1(&[1. / 2.]),
                aview1(&[0., 1. / 2.]),
                aview1(&[0., 0., 1.]),
            ];
        }
        &*A
    }

    fn b() -> ArrayView1<'static, f64> {
        aview1(&[1. / 6., 1. / 3., 1. / 3., 1. / 6.])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn check_tableau<O: RKMethod>() {
        assert_eq!(O::c().len(), O::NUM_STAGES - 1);
        assert_eq!(O::a().len(), O::NUM_STAGES - 1);
        assert_eq!(O::b().len(), O::NUM_STAGES);
        for (s, (a, &c)) in O::a().iter().zip(O::c()).enumerate() {
            assert_eq!(a.len(), s + 1);
            // Row sums of `a` equal `c` for consistent methods.
            assert!((a.sum() - c).abs() < 1e-15);
        }
        assert!((O::b().sum() - 1.).abs() < 1e-15);
    }

    #[test]
    fn tableaux_are_consistent() {
        check_tableau::<Midpoint>();
        check_tableau::<Heun>();
        check_tableau::<RK4>();
    }

    #[test]
    fn rk4_is_exact_for_cubic_in_time() {
        // y' = 4 t^3, y(0) = 0 => y = t^4; Simpson's rule is exact for cubics.
        let fun = |_y: ArrayView1<'_, f64>, t: f64| array![4. * t * t * t];
        let u = array![[0.]];
        let t = array![0., 1.];
        let next = RungeKutta::<RK4>::new()
            .advance(0, u.view(), &fun, t.view())
            .unwrap();
        assert!((next[0] - 1.).abs() < 1e-15);
    }

    #[test]
    fn heun_step_on_linear_growth() {
        let fun = |y: ArrayView1<'_, f64>, _t: f64| y.to_owned();
        let u = array![[1.]];
        let t = array![0., 1.];
        let next = RungeKutta::<Heun>::new()
            .advance(0, u.view(), &fun, t.view())
            .unwrap();
        // 1 + h + h^2 / 2
        assert_eq!(next, array![2.5]);
    }
}

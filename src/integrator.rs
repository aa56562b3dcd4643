//! The fixed-grid integration loop.

use log::debug;
use ndarray::prelude::*;
use ndarray::s;

use crate::progress::Progress;
use crate::step::{ForwardEuler, StepStrategy};
use crate::{Error, InitialCondition};

/// Lifecycle of an [`Integrator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No initial condition has been set yet.
    Unconfigured,
    /// Ready to solve.
    Configured,
    /// The last call to `solve` completed.
    Solved,
}

/// Solution trajectory on a time grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Solution buffer, shape `(t.len(), num_eqns)`. Row `i` is the state at
    /// `t[i]`.
    pub u: Array2<f64>,
    /// Time grid.
    pub t: Array1<f64>,
}

impl Solution {
    /// Number of time points.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Number of equations in the system.
    pub fn num_eqns(&self) -> usize {
        self.u.ncols()
    }

    /// State at the last time point.
    pub fn final_state(&self) -> ArrayView1<'_, f64> {
        self.u.row(self.u.nrows() - 1)
    }

    /// Returns the solution buffer and the time grid.
    pub fn into_parts(self) -> (Array2<f64>, Array1<f64>) {
        (self.u, self.t)
    }
}

/// Integrates `du/dt = fun(u, t)` over a given time grid.
///
/// The integrator owns the right-hand side and the stepping strategy `S`,
/// both fixed at construction. Each call to [`solve`](Integrator::solve)
/// allocates a fresh solution buffer, seeds row 0 with the initial condition
/// and lets `S` fill in the following rows one interval at a time.
///
/// ```
/// use ndarray::array;
/// use ndarray::prelude::*;
/// use ndarray_odesolver::Integrator;
///
/// let mut solver = Integrator::forward_euler(|u: ArrayView1<'_, f64>, _t: f64| u.to_owned());
/// solver.set_initial_conditions(1.).unwrap();
/// let solution = solver.solve(vec![0., 1., 2.]).unwrap();
/// assert_eq!(solution.u, array![[1.], [2.], [4.]]);
/// ```
pub struct Integrator<F, S> {
    fun: F,
    strategy: S,
    /// Initial state, or `None` until `set_initial_conditions` succeeds.
    u0: Option<Array1<f64>>,
    status: Status,
}

impl<F> Integrator<F, ForwardEuler>
where
    F: Fn(ArrayView1<'_, f64>, f64) -> Array1<f64>,
{
    /// Creates an integrator using the forward Euler method.
    pub fn forward_euler(fun: F) -> Integrator<F, ForwardEuler> {
        Integrator::new(fun, ForwardEuler)
    }
}

impl<F, S> Integrator<F, S>
where
    F: Fn(ArrayView1<'_, f64>, f64) -> Array1<f64>,
    S: StepStrategy,
{
    /// Creates a new integrator.
    ///
    /// # Parameters
    ///
    /// * `fun`: Right-hand side of the system, where `fun(u, t)` returns the
    ///   derivative of `u` at time `t`. It must return as many components as
    ///   it is given.
    ///
    /// * `strategy`: Rule used to advance the solution over each interval.
    pub fn new(fun: F, strategy: S) -> Integrator<F, S> {
        Integrator {
            fun,
            strategy,
            u0: None,
            status: Status::Unconfigured,
        }
    }

    /// Sets the initial state used by subsequent solves.
    ///
    /// A scalar describes a system of one equation; a sequence describes a
    /// system with one equation per element. Fails with
    /// [`Error::InvalidInitialCondition`] for an empty sequence, leaving any
    /// previously set condition in place.
    pub fn set_initial_conditions<U>(&mut self, u0: U) -> Result<(), Error>
    where
        U: Into<InitialCondition>,
    {
        let u0 = u0.into().into_state()?;
        self.u0 = Some(u0);
        self.status = Status::Configured;
        Ok(())
    }

    /// Number of equations, once initial conditions are set.
    pub fn num_eqns(&self) -> Option<usize> {
        self.u0.as_ref().map(|u0| u0.len())
    }

    pub fn initial_condition(&self) -> Option<ArrayView1<'_, f64>> {
        self.u0.as_ref().map(|u0| u0.view())
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Solves over `time_points`, returning the solution at every point.
    ///
    /// The grid is used as given; ordering and spacing are not checked.
    ///
    /// # Errors
    ///
    /// * [`Error::UninitializedState`] if no initial condition was set.
    /// * [`Error::EmptyTimeGrid`] if `time_points` is empty.
    /// * Any error from the stepping strategy, and
    ///   [`Error::DimensionMismatch`] if it returns a state of the wrong
    ///   length.
    ///
    /// No partial solution is returned on failure.
    pub fn solve<T>(&mut self, time_points: T) -> Result<Solution, Error>
    where
        T: Into<Array1<f64>>,
    {
        self.solve_with_progress(time_points, ())
    }

    /// Like [`solve`](Integrator::solve), also notifying `progress` after
    /// every step.
    pub fn solve_with_progress<T, P>(
        &mut self,
        time_points: T,
        mut progress: P,
    ) -> Result<Solution, Error>
    where
        T: Into<Array1<f64>>,
        P: Progress,
    {
        let u0 = self.u0.as_ref().ok_or(Error::UninitializedState)?;
        let t: Array1<f64> = time_points.into();
        if t.is_empty() {
            return Err(Error::EmptyTimeGrid);
        }

        let num_eqns = u0.len();
        let steps = t.len() - 1;
        let mut u = Array2::<f64>::zeros((t.len(), num_eqns));
        u.row_mut(0).assign(u0);

        debug!(
            "solving {} equations over {} steps with {}",
            num_eqns,
            steps,
            self.strategy.name()
        );

        for i in 0..steps {
            let next = self
                .strategy
                .advance(i, u.slice(s![..=i, ..]), &self.fun, t.view())?;
            if next.len() != num_eqns {
                return Err(Error::DimensionMismatch {
                    expected: num_eqns,
                    found: next.len(),
                });
            }
            u.row_mut(i + 1).assign(&next);
            progress.report(i + 1, steps);
        }

        debug!("finished {} steps with {}", steps, self.strategy.name());
        self.status = Status::Solved;
        Ok(Solution { u, t })
    }
}

//! Fixed-grid integration of systems of ordinary differential equations
//! `du/dt = f(u, t)`.
//!
//! An [`Integrator`] owns the right-hand side and drives the step loop; the
//! arithmetic of each step is delegated to a [`StepStrategy`]. Strategies
//! provided here:
//!
//! * [`ForwardEuler`]
//! * [`rk::RungeKutta`] with the [`rk::Midpoint`], [`rk::Heun`] or
//!   [`rk::RK4`] tableau
//! * [`multistep::AdamsBashforth2`]

#[macro_use]
extern crate lazy_static;

mod error;
mod initial;
mod integrator;
pub mod multistep;
pub mod progress;
pub mod rk;
mod step;

pub use crate::error::Error;
pub use crate::initial::InitialCondition;
pub use crate::integrator::{Integrator, Solution, Status};
pub use crate::progress::{LogProgress, Progress};
pub use crate::step::{ForwardEuler, StepStrategy};

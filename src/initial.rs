//! Initial conditions for scalar and vector systems.

use ndarray::prelude::*;

use crate::Error;

/// Initial value of the dependent variable.
///
/// A scalar is a system of one equation. Downstream code only ever sees the
/// normalized vector form returned by [`InitialCondition::into_state`].
#[derive(Debug, Clone, PartialEq)]
pub enum InitialCondition {
    Scalar(f64),
    Vector(Vec<f64>),
}

impl InitialCondition {
    /// Number of equations in the system this condition describes.
    pub fn num_eqns(&self) -> usize {
        match self {
            InitialCondition::Scalar(_) => 1,
            InitialCondition::Vector(v) => v.len(),
        }
    }

    /// Converts into a state vector, rejecting empty systems.
    pub fn into_state(self) -> Result<Array1<f64>, Error> {
        match self {
            InitialCondition::Scalar(u0) => Ok(arr1(&[u0])),
            InitialCondition::Vector(v) if v.is_empty() => Err(Error::InvalidInitialCondition(
                "initial condition has no components".to_string(),
            )),
            InitialCondition::Vector(v) => Ok(Array1::from(v)),
        }
    }
}

impl From<f64> for InitialCondition {
    fn from(u0: f64) -> InitialCondition {
        InitialCondition::Scalar(u0)
    }
}

impl From<Vec<f64>> for InitialCondition {
    fn from(u0: Vec<f64>) -> InitialCondition {
        InitialCondition::Vector(u0)
    }
}

impl<'a> From<&'a [f64]> for InitialCondition {
    fn from(u0: &'a [f64]) -> InitialCondition {
        InitialCondition::Vector(u0.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for InitialCondition {
    fn from(u0: [f64; N]) -> InitialCondition {
        InitialCondition::Vector(u0.to_vec())
    }
}

impl From<Array1<f64>> for InitialCondition {
    fn from(u0: Array1<f64>) -> InitialCondition {
        InitialCondition::Vector(u0.to_vec())
    }
}

impl<'a> From<ArrayView1<'a, f64>> for InitialCondition {
    fn from(u0: ArrayView1<'a, f64>) -> InitialCondition {
        InitialCondition::Vector(u0.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_is_one_equation() {
        let ic = InitialCondition::from(3.5);
        assert_eq!(ic.num_eqns(), 1);
        assert_eq!(ic.into_state().unwrap(), arr1(&[3.5]));
    }

    #[test]
    fn vector_keeps_order() {
        let ic = InitialCondition::from([1., 2., 3.]);
        assert_eq!(ic.num_eqns(), 3);
        assert_eq!(ic.into_state().unwrap(), arr1(&[1., 2., 3.]));
    }

    #[test]
    fn empty_vector_is_rejected() {
        let ic = InitialCondition::from(Vec::<f64>::new());
        match ic.into_state() {
            Err(Error::InvalidInitialCondition(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

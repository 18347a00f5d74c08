use crate::{State, Time};
use serde::{Deserialize, Serialize};

/// Ordered states of one integration run, owned by the caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trajectory {
    pub times: Vec<Time>,
    pub states: Vec<State>,
}

impl Trajectory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            times: Vec::with_capacity(capacity),
            states: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, t: Time, state: State) {
        self.times.push(t);
        self.states.push(state);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn initial_state(&self) -> Option<&State> {
        self.states.first()
    }

    pub fn final_state(&self) -> Option<&State> {
        self.states.last()
    }

    /// Scalar observable: the `i`-th velocity component over time.
    pub fn component(&self, i: usize) -> Vec<f64> {
        self.states.iter().map(|s| s.0[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_extraction() {
        let mut traj = Trajectory::with_capacity(2);
        traj.push(0.0, State::new(vec![1.0, -1.0]));
        traj.push(0.1, State::new(vec![2.0, -2.0]));

        assert_eq!(traj.len(), 2);
        assert_eq!(traj.component(0), vec![1.0, 2.0]);
        assert_eq!(traj.component(1), vec![-1.0, -2.0]);
        assert_eq!(traj.initial_state().unwrap().0[0], 1.0);
        assert_eq!(traj.final_state().unwrap().0[0], 2.0);
    }
}

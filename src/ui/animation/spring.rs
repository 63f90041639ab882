//! Damped spring used to settle the slider after release
//!
//! Time-based analytical solution, sampled once per frame tick, so the
//! result does not depend on frame pacing.
//!
//! ## Parameters
//!
//! Response/damping-fraction (the form used for UI springs) maps to physical
//! parameters with unit mass:
//!
//! ```text
//! stiffness = (2π / response)^2
//! damping   = 4π * damping_fraction / response
//! ```
//!
//! ### Overdamped (damping_fraction >= 1)
//! ```text
//! angular_frequency = -sqrt(stiffness / mass)
//! leftover = -angular_frequency * delta - velocity
//! position(t) = to - (delta + t * leftover) * e^(t * angular_frequency)
//! ```
//!
//! ### Underdamped
//! ```text
//! damping_frequency = sqrt(4 * mass * stiffness - damping^2)
//! leftover = (damping * delta - 2 * mass * velocity) / damping_frequency
//! dfm = 0.5 * damping_frequency / mass
//! dm = -0.5 * damping / mass
//! position(t) = to - (cos(t * dfm) * delta + sin(t * dfm) * leftover) * e^(t * dm)
//! ```

use std::f64::consts::{E, PI};
use std::sync::Arc;

pub type Num = f64;

/// Numerical derivative step size
const H: Num = 0.001;

/// Distance and speed under which the spring snaps to its target
const REST_EPSILON: Num = 1e-4;

/// Physical spring parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub mass: Num,
    pub damping: Num,
    pub stiffness: Num,
}

impl SpringParams {
    /// Build from response (seconds) and damping fraction
    pub fn from_response(response: Num, damping_fraction: Num) -> Self {
        let mass = 1.0;
        Self {
            mass,
            stiffness: (2.0 * PI / response).powi(2) * mass,
            damping: 4.0 * PI * damping_fraction * mass / response,
        }
    }

    /// Check if overdamped: damping^2 >= 4 * stiffness * mass
    ///
    /// Critical damping counts as overdamped; the relative tolerance keeps the
    /// underdamped branch away from a zero (or rounded negative) frequency.
    pub fn is_overdamped(&self) -> bool {
        self.damping.powi(2) >= 4.0 * self.stiffness * self.mass * (1.0 - 1e-9)
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::from_response(0.3, 0.8)
    }
}

type SolverFn = Arc<dyn Fn(Num) -> Num + Send + Sync>;

fn solve_spring(from: Num, velocity: Num, to: Num, params: &SpringParams) -> SolverFn {
    let SpringParams {
        mass,
        damping,
        stiffness,
    } = *params;
    let delta = to - from;

    if params.is_overdamped() {
        let angular_frequency = -(stiffness / mass).sqrt();
        let leftover = -angular_frequency * delta - velocity;

        Arc::new(move |t: Num| to - (delta + t * leftover) * E.powf(t * angular_frequency))
    } else {
        let damping_frequency = (4.0 * mass * stiffness - damping.powi(2)).sqrt();
        let leftover = (damping * delta - 2.0 * mass * velocity) / damping_frequency;
        let dfm = 0.5 * damping_frequency / mass;
        let dm = -0.5 * damping / mass;

        Arc::new(move |t: Num| {
            to - ((t * dfm).cos() * delta + (t * dfm).sin() * leftover) * E.powf(t * dm)
        })
    }
}

fn get_velocity(f: SolverFn) -> SolverFn {
    Arc::new(move |t: Num| (f(t + H) - f(t - H)) / (2.0 * H))
}

/// Spring animation with an analytical solver
#[derive(Clone)]
pub struct Spring {
    current_position: Num,
    target_position: Num,
    current_time: Num,
    params: SpringParams,
    solver: SolverFn,
    velocity: SolverFn,
}

impl std::fmt::Debug for Spring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spring")
            .field("current_position", &self.current_position)
            .field("target_position", &self.target_position)
            .field("current_time", &self.current_time)
            .field("params", &self.params)
            .finish()
    }
}

impl Spring {
    /// Create a spring resting at `position`
    pub fn new(position: Num, params: SpringParams) -> Self {
        Self {
            current_position: position,
            target_position: position,
            current_time: 0.0,
            params,
            solver: Arc::new(move |_| position),
            velocity: Arc::new(|_| 0.0),
        }
    }

    fn reset_solver(&mut self) {
        let current_velocity = (self.velocity)(self.current_time);
        self.current_time = 0.0;
        self.solver = solve_spring(
            self.current_position,
            current_velocity,
            self.target_position,
            &self.params,
        );
        self.velocity = get_velocity(Arc::clone(&self.solver));
    }

    /// Jump to `position` and stop moving
    pub fn set_position(&mut self, position: Num) {
        self.current_position = position;
        self.target_position = position;
        self.current_time = 0.0;
        self.solver = Arc::new(move |_| position);
        self.velocity = Arc::new(|_| 0.0);
    }

    /// Retarget, keeping the current velocity
    pub fn set_target(&mut self, target: Num) {
        self.target_position = target;
        self.reset_solver();
    }

    /// Advance by `delta` seconds
    pub fn update(&mut self, delta: Num) {
        self.current_time += delta.max(0.0);
        self.current_position = (self.solver)(self.current_time);

        if self.arrived() {
            self.set_position(self.target_position);
        }
    }

    pub fn arrived(&self) -> bool {
        (self.target_position - self.current_position).abs() < REST_EPSILON
            && (self.velocity)(self.current_time).abs() < REST_EPSILON
    }

    pub fn position(&self) -> Num {
        self.current_position
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(0.0, SpringParams::default())
    }
}

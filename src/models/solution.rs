//! Solution and violation types.

use std::fmt;

use fxhash::FxHashSet;
use rand::seq::SliceRandom;
use rand::Rng;

use super::Vehicle;
use crate::distance::CostMatrix;

/// A type of constraint violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// Route breaks the depot-bookended structure.
    InvalidRoute {
        /// Vehicle index in the solution.
        route_index: usize,
    },
    /// Vehicle capacity exceeded.
    CapacityExceeded {
        /// Vehicle index in the solution.
        route_index: usize,
        /// Load that exceeded capacity.
        load: i32,
        /// Vehicle capacity.
        capacity: i32,
    },
    /// Customer served by more than one route.
    DuplicateCustomer {
        /// Customer ID.
        customer_id: usize,
    },
    /// Customer of the problem not served by any route.
    UnservedCustomer {
        /// Customer ID.
        customer_id: usize,
    },
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// An ordered, mutable collection of vehicles.
///
/// Vehicle order does not affect cost but decides move-discovery order in
/// the optimizers. `Clone` is a full deep copy, so a clone can be mutated
/// speculatively without touching the original.
///
/// # Examples
///
/// ```
/// use u_cvrp_ls::models::{Node, Route, Solution, Vehicle};
///
/// let d = Node::depot(0);
/// let mut sol = Solution::new();
/// sol.add_vehicle(Vehicle::new(10, Route::new([d, Node::customer(1, 4), d])));
/// sol.add_vehicle(Vehicle::void(10, d));
/// assert_eq!(sol.num_vehicles(), 2);
///
/// assert_eq!(sol.remove_void_vehicles(), 1);
/// assert!(sol.is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solution {
    vehicles: Vec<Vehicle>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solution from the given vehicles, keeping their order.
    pub fn from_vehicles(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    /// Appends a vehicle.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    /// Returns the vehicles in order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Mutable access to the vehicles.
    pub fn vehicles_mut(&mut self) -> &mut [Vehicle] {
        &mut self.vehicles
    }

    /// Number of vehicles.
    pub fn num_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    /// Removes every vehicle whose route carries zero demand.
    ///
    /// Returns the number of vehicles removed.
    pub fn remove_void_vehicles(&mut self) -> usize {
        let before = self.vehicles.len();
        self.vehicles.retain(|v| !v.is_void());
        before - self.vehicles.len()
    }

    /// Randomly permutes the vehicle order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.vehicles.shuffle(rng);
    }

    /// Total travel cost across all routes.
    pub fn cost<M: CostMatrix + ?Sized>(&self, costs: &M) -> f64 {
        self.vehicles.iter().map(|v| v.route().cost(costs)).sum()
    }

    /// Total demand served.
    pub fn demand(&self) -> i32 {
        self.vehicles.iter().map(Vehicle::load).sum()
    }

    /// Number of customer visits across all routes.
    pub fn num_customers(&self) -> usize {
        self.vehicles
            .iter()
            .map(|v| v.route().customers().len())
            .sum()
    }

    /// Returns `true` if every route is valid and no customer is served by
    /// two routes.
    ///
    /// Customers missing from every route go unnoticed; use
    /// [`SolutionEvaluator`](crate::evaluation::SolutionEvaluator) to check
    /// coverage against a problem.
    pub fn is_valid(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.vehicles.iter().all(|v| {
            v.route().is_valid() && v.route().customers().iter().all(|c| seen.insert(c.id()))
        })
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (k, v) in self.vehicles.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v.route())?;
        }
        write!(f, "}}")
    }
}

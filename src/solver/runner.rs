//! Cycle loop driving a strategy to convergence.

use tracing::{debug, info};

use super::SolverConfig;
use crate::error::Result;
use crate::models::{RoutingProblem, Solution};
use crate::strategy::{SimpleStrategy, Strategy, StrategyConfig};

/// Outcome of [`Solver::solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    /// Total cost before the first cycle.
    pub initial_cost: f64,
    /// Total cost after the last cycle.
    pub final_cost: f64,
    /// Number of cycles run.
    pub cycles: usize,
    /// Vehicles in use at the end.
    pub vehicles: usize,
}

/// Runs a strategy repeatedly until a cycle stops improving the cost or the
/// cycle limit is hit.
///
/// # Examples
///
/// ```
/// use u_cvrp_ls::constructive::one_route_per_customer;
/// use u_cvrp_ls::distance::DistanceMatrix;
/// use u_cvrp_ls::models::{CvrpProblem, Node};
/// use u_cvrp_ls::solver::{Solver, SolverConfig};
/// use u_cvrp_ls::strategy::StrategyConfig;
///
/// let costs = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
/// let customers = vec![Node::customer(1, 1), Node::customer(2, 1), Node::customer(3, 1)];
/// let problem = CvrpProblem::new(Node::depot(0), customers, 10, costs).unwrap();
///
/// let mut solution = one_route_per_customer(&problem);
/// let mut solver = Solver::simple(&problem, StrategyConfig::default(), SolverConfig::default()).unwrap();
/// let report = solver.solve(&mut solution).unwrap();
///
/// assert!((report.initial_cost - 12.0).abs() < 1e-10);
/// assert!((report.final_cost - 6.0).abs() < 1e-10);
/// assert_eq!(report.vehicles, 1);
/// ```
pub struct Solver<'a, P: RoutingProblem + ?Sized, S: Strategy> {
    problem: &'a P,
    strategy: S,
    config: SolverConfig,
}

impl<'a, P: RoutingProblem + ?Sized> Solver<'a, P, SimpleStrategy<'a, P>> {
    /// Creates a solver running a [`SimpleStrategy`].
    pub fn simple(
        problem: &'a P,
        strategy: StrategyConfig,
        config: SolverConfig,
    ) -> Result<Self> {
        let strategy = SimpleStrategy::new(problem, strategy)?;
        Self::new(problem, strategy, config)
    }
}

impl<'a, P: RoutingProblem + ?Sized, S: Strategy> Solver<'a, P, S> {
    /// Creates a solver around an existing strategy.
    pub fn new(problem: &'a P, strategy: S, config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            problem,
            strategy,
            config,
        })
    }

    /// Improves `solution` in place.
    pub fn solve(&mut self, solution: &mut Solution) -> Result<SolveReport> {
        let costs = self.problem.costs();
        let initial_cost = solution.cost(costs);
        let mut current = initial_cost;
        let mut cycles = 0;

        while cycles < self.config.max_cycles {
            self.strategy.minimize(solution)?;
            cycles += 1;

            let next = solution.cost(costs);
            debug!(cycle = cycles, cost = next, vehicles = solution.num_vehicles(), "cycle");
            let improved = current - next > self.config.min_improvement;
            current = next;
            if !improved {
                break;
            }
        }

        info!(
            initial_cost,
            final_cost = current,
            cycles,
            vehicles = solution.num_vehicles(),
            "solve finished"
        );
        Ok(SolveReport {
            initial_cost,
            final_cost: current,
            cycles,
            vehicles: solution.num_vehicles(),
        })
    }
}

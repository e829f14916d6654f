//! Two-pass minimization strategy: 2-opt then relocate.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use super::{Strategy, StrategyConfig};
use crate::error::{Result, RoutingError};
use crate::local_search::{InterRouteOptimizer, IntraRouteOptimizer};
use crate::models::{RoutingProblem, Solution, Vehicle};

/// Minimizes a solution with intra-route 2-opt followed by inter-route
/// relocation.
///
/// One cycle:
///
/// 1. shuffle the vehicles (if enabled)
/// 2. 2-opt every route
/// 3. check validity
/// 4. append a void vehicle `[depot, depot]` at full capacity
/// 5. relocate customers across the whole solution
/// 6. drop every vehicle carrying zero demand
/// 7. check validity and that no customer was dropped
///
/// Only customers already on a route are considered; checking that the
/// solution covers every customer of the problem is left to
/// [`SolutionEvaluator`](crate::evaluation::SolutionEvaluator).
///
/// # Examples
///
/// ```
/// use u_cvrp_ls::distance::DistanceMatrix;
/// use u_cvrp_ls::models::{CvrpProblem, Node, Route, Solution, Vehicle};
/// use u_cvrp_ls::strategy::{SimpleStrategy, Strategy, StrategyConfig};
///
/// let costs = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (10.0, 0.0), (11.0, 0.0)]);
/// let problem = CvrpProblem::new(
///     Node::depot(0),
///     vec![Node::customer(1, 5), Node::customer(2, 4)],
///     10,
///     costs,
/// )
/// .unwrap();
///
/// let d = Node::depot(0);
/// let mut sol = Solution::from_vehicles(vec![
///     Vehicle::new(10, Route::new([d, Node::customer(1, 5), d])),
///     Vehicle::new(10, Route::new([d, Node::customer(2, 4), d])),
/// ]);
///
/// let mut strategy = SimpleStrategy::new(&problem, StrategyConfig::default()).unwrap();
/// strategy.minimize(&mut sol).unwrap();
/// assert_eq!(sol.num_vehicles(), 1);
/// assert_eq!(sol.vehicles()[0].load(), 9);
/// ```
pub struct SimpleStrategy<'a, P: RoutingProblem + ?Sized> {
    problem: &'a P,
    intra: IntraRouteOptimizer<'a>,
    inter: InterRouteOptimizer<'a>,
    config: StrategyConfig,
    rng: StdRng,
}

impl<'a, P: RoutingProblem + ?Sized> SimpleStrategy<'a, P> {
    /// Creates a strategy for `problem`.
    ///
    /// Fails if the configuration does not validate.
    pub fn new(problem: &'a P, config: StrategyConfig) -> Result<Self> {
        config.validate()?;
        let costs = problem.costs();
        Ok(Self {
            problem,
            intra: IntraRouteOptimizer::new(costs, config.gain_delta),
            inter: InterRouteOptimizer::new(costs, config.gain_delta),
            config,
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    /// The configuration this strategy runs with.
    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    fn add_void_route(&self, solution: &mut Solution) {
        solution.add_vehicle(Vehicle::void(
            self.problem.vehicle_capacity(),
            self.problem.depot(),
        ));
    }
}

impl<P: RoutingProblem + ?Sized> Strategy for SimpleStrategy<'_, P> {
    fn minimize(&mut self, solution: &mut Solution) -> Result<()> {
        let costs = self.problem.costs();
        let initial_cost = solution.cost(costs);

        if self.config.shuffle {
            solution.shuffle(&mut self.rng);
        }

        let reversals = self.intra.two_opt(solution, self.config.two_opt)?;
        ensure_valid(solution, "2-opt")?;

        let served = solution.num_customers();
        self.add_void_route(solution);
        let relocations = self.inter.relocate(solution, self.config.relocate)?;
        let pruned = solution.remove_void_vehicles();
        ensure_valid(solution, "relocate")?;
        // pruning must only drop empty routes
        if solution.num_customers() != served {
            return Err(RoutingError::InvariantViolation {
                stage: "relocate",
                detail: format!(
                    "{} of {served} customers left in {solution}",
                    solution.num_customers()
                ),
            });
        }

        debug!(
            initial_cost,
            final_cost = solution.cost(costs),
            reversals,
            relocations,
            pruned,
            vehicles = solution.num_vehicles(),
            "minimize cycle done"
        );
        Ok(())
    }
}

fn ensure_valid(solution: &Solution, stage: &'static str) -> Result<()> {
    if solution.is_valid() {
        Ok(())
    } else {
        Err(RoutingError::InvariantViolation {
            stage,
            detail: solution.to_string(),
        })
    }
}

impl<P: RoutingProblem + ?Sized> fmt::Display for SimpleStrategy<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OPTIONS (twoOpt, relocate) = {},{}",
            self.config.two_opt, self.config.relocate
        )
    }
}

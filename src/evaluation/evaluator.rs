//! Solution evaluator that computes cost and collects constraint violations.

use fxhash::FxHashMap;

use crate::models::{RoutingProblem, Solution, Violation, ViolationType};

/// Evaluates solutions against a problem instance: total travel cost plus
/// structural, capacity, and coverage violations.
///
/// # Examples
///
/// ```
/// use u_cvrp_ls::distance::DistanceMatrix;
/// use u_cvrp_ls::evaluation::SolutionEvaluator;
/// use u_cvrp_ls::models::{CvrpProblem, Node, Route, Solution, Vehicle};
///
/// let costs = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (3.0, 4.0)]);
/// let problem = CvrpProblem::new(Node::depot(0), vec![Node::customer(1, 10)], 50, costs).unwrap();
///
/// let d = Node::depot(0);
/// let sol = Solution::from_vehicles(vec![Vehicle::new(50, Route::new([d, Node::customer(1, 10), d]))]);
///
/// let evaluator = SolutionEvaluator::new(&problem);
/// let (cost, violations) = evaluator.evaluate(&sol);
/// assert!((cost - 10.0).abs() < 1e-10);
/// assert!(violations.is_empty());
/// ```
pub struct SolutionEvaluator<'a, P: RoutingProblem + ?Sized> {
    problem: &'a P,
}

impl<'a, P: RoutingProblem + ?Sized> SolutionEvaluator<'a, P> {
    /// Creates a new evaluator for the given problem.
    pub fn new(problem: &'a P) -> Self {
        Self { problem }
    }

    /// Evaluates an entire solution, returning `(cost, violations)`.
    ///
    /// A feasible solution has an empty violations list.
    pub fn evaluate(&self, solution: &Solution) -> (f64, Vec<Violation>) {
        let costs = self.problem.costs();
        let mut total_cost = 0.0;
        let mut violations = Vec::new();
        let mut served: FxHashMap<usize, usize> = FxHashMap::default();

        for (idx, vehicle) in solution.vehicles().iter().enumerate() {
            let route = vehicle.route();
            total_cost += route.cost(costs);

            if !route.is_valid() {
                violations.push(Violation::new(ViolationType::InvalidRoute {
                    route_index: idx,
                }));
            }

            if vehicle.is_overloaded() {
                violations.push(Violation::new(ViolationType::CapacityExceeded {
                    route_index: idx,
                    load: vehicle.load(),
                    capacity: vehicle.capacity(),
                }));
            }

            for c in route.customers() {
                *served.entry(c.id()).or_insert(0) += 1;
            }
        }

        for c in self.problem.customers() {
            match served.get(&c.id()).copied().unwrap_or(0) {
                0 => violations.push(Violation::new(ViolationType::UnservedCustomer {
                    customer_id: c.id(),
                })),
                1 => {}
                _ => violations.push(Violation::new(ViolationType::DuplicateCustomer {
                    customer_id: c.id(),
                })),
            }
        }

        (total_cost, violations)
    }

    /// Returns `true` if the solution has no violations.
    pub fn is_feasible(&self, solution: &Solution) -> bool {
        self.evaluate(solution).1.is_empty()
    }
}

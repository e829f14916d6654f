use proptest::prelude::*;
use u_cvrp_ls::constructive::{nearest_neighbor, one_route_per_customer};
use u_cvrp_ls::distance::DistanceMatrix;
use u_cvrp_ls::evaluation::SolutionEvaluator;
use u_cvrp_ls::models::{CvrpProblem, Node, Route};
use u_cvrp_ls::solver::{Solver, SolverConfig};
use u_cvrp_ls::strategy::StrategyConfig;
use u_cvrp_ls::local_search::ImprovementPolicy;

fn build_route(customers: &[(usize, i32)]) -> Route {
    let d = Node::depot(0);
    let mut nodes = vec![d];
    nodes.extend(customers.iter().map(|&(id, q)| Node::customer(id, q)));
    nodes.push(d);
    Route::new(nodes)
}

prop_compose! {
    /// Distinct customers with ids 1..=n in shuffled order.
    fn customers(max: usize)
    (n in 1..=max)
    (order in Just((1..=n).collect::<Vec<usize>>()).prop_shuffle(),
     demands in prop::collection::vec(1..20i32, n))
    -> Vec<(usize, i32)> {
        order.into_iter().zip(demands).collect()
    }
}

prop_compose! {
    fn instance(max: usize)
    (n in 1..=max)
    (points in prop::collection::vec((0.0..100.0f64, 0.0..100.0f64), n + 1),
     demands in prop::collection::vec(1..10i32, n),
     capacity in 10..40i32)
    -> CvrpProblem {
        let customers = demands
            .iter()
            .enumerate()
            .map(|(k, &q)| Node::customer(k + 1, q))
            .collect();
        CvrpProblem::new(
            Node::depot(0),
            customers,
            capacity,
            DistanceMatrix::from_coordinates(&points),
        )
        .expect("generated instance is consistent")
    }
}

fn policy() -> impl Strategy<Value = ImprovementPolicy> {
    prop_oneof![
        Just(ImprovementPolicy::FirstImprovement),
        Just(ImprovementPolicy::BestImprovement)
    ]
}

proptest! {
    #[test]
    fn built_routes_are_valid(cs in customers(12)) {
        prop_assert!(build_route(&cs).is_valid());
    }

    #[test]
    fn remove_then_reinsert_stays_valid(cs in customers(12), from in any::<prop::sample::Index>(), to in any::<prop::sample::Index>()) {
        let mut route = build_route(&cs);
        let i = 1 + from.index(cs.len());
        let node = route.remove_at(i).expect("interior position");
        prop_assert!(!route.contains(&node));

        let j = 1 + to.index(route.len() - 1);
        route.insert_at(j, [node]).expect("in range");
        prop_assert!(route.is_valid());
        prop_assert_eq!(route.len(), cs.len() + 2);
    }

    #[test]
    fn depot_endpoints_never_removed(cs in prop::collection::vec((1..50usize, 0..20i32), 0..10), depots_only in any::<bool>()) {
        let mut route = if depots_only { Route::new([Node::depot(0)]) } else { build_route(&cs) };
        let last = route.len() - 1;
        prop_assert!(route.remove_at(0).is_err());
        prop_assert!(route.remove_at(last).is_err());
    }

    #[test]
    fn reverse_segment_is_self_inverse(cs in customers(12), x in any::<prop::sample::Index>(), y in any::<prop::sample::Index>()) {
        prop_assume!(cs.len() >= 2);
        let mut route = build_route(&cs);
        let original = route.node_ids();
        let (mut a, mut b) = (1 + x.index(cs.len()), 1 + y.index(cs.len()));
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        prop_assume!(a < b);

        route.reverse_segment(a, b).expect("valid bounds");
        route.reverse_segment(a, b).expect("valid bounds");
        prop_assert_eq!(route.node_ids(), original);
    }

    #[test]
    fn relocate_node_is_a_permutation(cs in customers(12), x in any::<prop::sample::Index>(), y in any::<prop::sample::Index>()) {
        let mut route = build_route(&cs);
        let demand = route.demand();
        let mut before = route.node_ids();
        before.sort_unstable();

        let i = 1 + x.index(cs.len());
        let j = y.index(cs.len() + 1);
        route.relocate_node(i, j).expect("valid positions");

        let mut after = route.node_ids();
        after.sort_unstable();
        prop_assert_eq!(route.demand(), demand);
        prop_assert_eq!(after, before);
        prop_assert!(route.is_valid());
    }

    #[test]
    fn demand_is_zero_only_without_customers(cs in customers(8)) {
        prop_assert!(build_route(&cs).demand() > 0);
        prop_assert_eq!(Route::void(Node::depot(0)).demand(), 0);
    }

    #[test]
    fn solve_keeps_solutions_feasible(problem in instance(15), two_opt in policy(), relocate in policy(), shuffle in any::<bool>()) {
        let evaluator = SolutionEvaluator::new(&problem);
        for mut solution in [one_route_per_customer(&problem), nearest_neighbor(&problem)] {
            let (initial_cost, violations) = evaluator.evaluate(&solution);
            prop_assert!(violations.is_empty());

            let config = StrategyConfig::default()
                .with_two_opt(two_opt)
                .with_relocate(relocate)
                .with_shuffle(shuffle);
            let mut solver = Solver::simple(&problem, config, SolverConfig::default())
                .expect("valid config");
            let report = solver.solve(&mut solution).expect("optimizers keep routes valid");

            let (final_cost, violations) = evaluator.evaluate(&solution);
            prop_assert!(violations.is_empty(), "{:?}", violations);
            prop_assert!(final_cost <= initial_cost + 1e-6);
            prop_assert!((report.final_cost - final_cost).abs() < 1e-6);
        }
    }
}

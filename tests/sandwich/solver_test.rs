#[cfg(test)]
mod tests {
    use pedigree_layout::algorithm::graph::UndirectedGraph;
    use pedigree_layout::algorithm::sandwich::Realization;
    use pedigree_layout::utils::test::{forbidden_overlaps, init_test_logging};
    use pedigree_layout::{SandwichInstance, SandwichSolver, SearchOutcome, SolverConfig};

    fn chain_instance() -> SandwichInstance<&'static str> {
        // every required edge is also forbidden
        SandwichInstance::from_sets(
            ["a", "b", "c"],
            [("a", "b"), ("b", "c")],
            [("a", "b"), ("b", "c")],
        )
        .unwrap()
    }

    #[test]
    fn test_single_vertex_solves_without_iterations() {
        let instance =
            SandwichInstance::from_sets(["only"], Vec::new(), Vec::new()).unwrap();
        let report = SandwichSolver::default().search(&instance);

        assert_eq!(report.statistics.iterations, 0);
        match report.outcome {
            SearchOutcome::Solved(intervals) => {
                assert_eq!(intervals.len(), 1);
                assert_eq!(intervals[0].vertex, "only");
            }
            other => panic!("expected a solution, got {other:?}"),
        }
    }

    #[test]
    fn test_one_unsatisfiable_edge_is_removed() {
        init_test_logging();
        let instance = SandwichInstance::from_sets(
            ["a", "b", "c"],
            [("a", "b"), ("b", "c")],
            [("a", "b"), ("a", "c")],
        )
        .unwrap();
        let solver = SandwichSolver::default();

        assert!(solver.try_solve(&instance).is_none());

        let report = solver.solve_with_report(&instance);
        assert_eq!(report.removed_edges, vec![("a", "b")]);
        let intervals = report.intervals.unwrap();
        assert_eq!(intervals.len(), 3);

        let remaining = SandwichInstance::from_sets(
            ["a", "b", "c"],
            [("a", "b"), ("b", "c")],
            [("a", "c")],
        )
        .unwrap();
        assert!(forbidden_overlaps(&remaining, &intervals).is_empty());
    }

    #[test]
    fn test_relaxation_cap() {
        let capped = SandwichSolver::new(SolverConfig::builder().max_relaxation(1).build());
        let report = capped.solve_with_report(&chain_instance());
        assert!(!report.is_solved());
        assert_eq!(report.attempts, 3);

        let uncapped = SandwichSolver::default();
        let report = uncapped.solve_with_report(&chain_instance());
        assert!(report.is_solved());
        assert_eq!(report.removed_edges.len(), 2);
        assert_eq!(report.attempts, 4);
    }

    #[test]
    fn test_solve_twice_gives_same_intervals() {
        let instance = chain_instance();
        let solver = SandwichSolver::default();
        assert_eq!(solver.solve(&instance), solver.solve(&instance));
    }

    #[test]
    fn test_can_extend_respects_max_width() {
        // a hub with four spokes keeps the hub and each spoke open
        let mut required = UndirectedGraph::with_vertices(9);
        for spoke in 1..=4 {
            required.add_edge(0, spoke);
            required.add_edge(spoke, spoke + 4);
        }
        let forbidden = UndirectedGraph::with_vertices(9);

        let mut realization = Realization::singleton(&required, &forbidden, 0, 3);
        assert!(realization.extend(1));
        assert_eq!(realization.active_vertices().len(), 2);

        // a third open vertex would reach the width bound
        assert!(!realization.can_extend(2));
        // closing spoke 1 is fine
        assert!(realization.can_extend(5));
        assert_eq!(realization.len(), 2);
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use pedigree_layout::algorithm::pedigree::{FamilyConnections, PedigreeVertex};
    use pedigree_layout::utils::test::{
        fixtures, forbidden_overlaps, init_test_logging, missing_required_overlaps,
    };
    use pedigree_layout::{LayoutConfig, LayoutKind, SandwichSolver, layout_family};

    #[test]
    fn test_nuclear_family_realization() -> Result<()> {
        init_test_logging();
        let mut connections = FamilyConnections::from_family(&fixtures::nuclear_family(), true)?;
        let instance = connections.create_sandwich_instance()?;

        assert_eq!(connections.mating_units().len(), 1);
        assert_eq!(connections.sibship_units().count(), 1);
        assert_eq!(connections.mating_units()[0].children.len(), 2);

        let intervals = SandwichSolver::default()
            .try_solve(&instance)
            .expect("nuclear family has a strict layout");
        assert_eq!(intervals.len(), instance.len());
        assert!(forbidden_overlaps(&instance, &intervals).is_empty());
        assert!(missing_required_overlaps(&instance, &intervals).is_empty());
        Ok(())
    }

    #[test]
    fn test_connected_fixtures_need_no_relaxation() -> Result<()> {
        init_test_logging();
        let families = [
            fixtures::nuclear_family(),
            fixtures::three_generation_family(),
            fixtures::single_parent_family(),
            fixtures::polygamous_family(),
        ];

        for family in &families {
            let mut connections = FamilyConnections::from_family(family, true)?;
            let instance = connections.create_sandwich_instance()?;
            let report = SandwichSolver::default().solve_with_report(&instance);

            assert!(report.removed_edges.is_empty(), "{} was relaxed", family.family_id);
            let intervals = report.intervals.expect("solved");
            assert!(forbidden_overlaps(&instance, &intervals).is_empty());

            let individuals = intervals
                .iter()
                .filter(|interval| matches!(interval.vertex, PedigreeVertex::Individual(_)))
                .count();
            assert_eq!(individuals, connections.individuals().len());
        }
        Ok(())
    }

    #[test]
    fn test_three_generation_layout() -> Result<()> {
        let layouts = layout_family(&fixtures::three_generation_family(), &LayoutConfig::default())?;
        assert_eq!(layouts.len(), 1);

        let layout = &layouts[0];
        assert_eq!(layout.kind, LayoutKind::Solved);
        assert_eq!(layout.generations.len(), 3);
        assert_eq!(layout.position_of("gm").map(|p| p.rank), Some(0));
        assert_eq!(layout.position_of("dad").map(|p| p.rank), Some(1));
        assert_eq!(layout.position_of("c1").map(|p| p.rank), Some(2));

        for generation in &layout.generations {
            assert!(generation.windows(2).all(|pair| pair[0].left <= pair[1].left));
        }
        Ok(())
    }

    #[test]
    fn test_placeholder_parent_is_marked() -> Result<()> {
        let layouts = layout_family(&fixtures::single_parent_family(), &LayoutConfig::default())?;
        let layout = &layouts[0];

        let placeholder = layout.position_of("mom.father").expect("placeholder placed");
        assert!(placeholder.generated);
        assert!(!layout.position_of("mom").expect("mom placed").generated);
        assert_eq!(layout.individual_count(), 4);
        Ok(())
    }

    #[test]
    fn test_layout_serializes_for_rendering() -> Result<()> {
        let layouts = layout_family(&fixtures::nuclear_family(), &LayoutConfig::default())?;
        let value: serde_json::Value = serde_json::from_str(&layouts[0].to_json()?)?;

        assert_eq!(value["family_id"], "nuclear");
        assert_eq!(value["kind"], "solved");
        assert_eq!(value["generations"].as_array().map(Vec::len), Some(2));
        assert!(value["relaxed_edges"].as_array().is_some_and(Vec::is_empty));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pedigree_layout::algorithm::pedigree::FamilyConnections;
    use pedigree_layout::PedigreeVertex;
    use pedigree_layout::utils::test::fixtures;
    use pedigree_layout::{Family, Person, Sex};

    fn all_fixtures() -> Vec<Family> {
        vec![
            fixtures::nuclear_family(),
            fixtures::three_generation_family(),
            fixtures::single_parent_family(),
            fixtures::polygamous_family(),
            fixtures::disconnected_family(),
        ]
    }

    #[test]
    fn test_missing_members_leave_zero_or_two_parents() {
        let mut family = Family::from_persons(
            "mixed",
            vec![
                Person::new("dad", Sex::Male),
                Person::new("c1", Sex::Male).with_dad("dad"),
                Person::new("c2", Sex::Female).with_dad("dad"),
                Person::new("c3", Sex::Female).with_mom("stranger"),
                Person::new("c4", Sex::Male).with_parents(Some("0"), Some("0")),
            ],
        );
        FamilyConnections::add_missing_members(&mut family);

        for person in family.full_members() {
            assert_ne!(person.parent_count(), 1, "{} has one parent", person.person_id);
        }

        let ids: Vec<&str> = family
            .full_members()
            .iter()
            .filter(|person| person.generated)
            .map(|person| person.person_id.as_str())
            .collect();
        assert_eq!(ids, vec!["dad.mother", "stranger", "stranger.father"]);
        assert_eq!(family.get_member("c4").map(Person::parent_count), Some(0));
    }

    #[test]
    fn test_ranks_follow_generations() {
        for family in all_fixtures() {
            let mut connections = FamilyConnections::from_family(&family, true).unwrap();
            connections.add_ranks();

            for unit in connections.mating_units() {
                let mother = connections.individual(unit.mother).and_then(|i| i.rank());
                let father = connections.individual(unit.father).and_then(|i| i.rank());
                assert_eq!(mother, father, "mates ranked apart in {}", family.family_id);

                for &child in &unit.children.individuals {
                    let rank = connections.individual(child).and_then(|i| i.rank());
                    assert_eq!(rank, mother.map(|r| r + 1), "in {}", family.family_id);
                }
            }
            assert!(connections.individuals_with_rank(0).len() >= 2);
        }
    }

    fn named_edges(
        connections: &FamilyConnections,
        edges: Vec<(PedigreeVertex, PedigreeVertex)>,
    ) -> Vec<(String, String)> {
        edges
            .into_iter()
            .map(|(u, v)| {
                (
                    connections.group_key(u).to_string(),
                    connections.group_key(v).to_string(),
                )
            })
            .collect()
    }

    fn contains_pair(edges: &[(String, String)], a: &str, b: &str) -> bool {
        edges
            .iter()
            .any(|(u, v)| (u == a && v == b) || (u == b && v == a))
    }

    #[test]
    fn test_crowded_mates_may_overlap() {
        let mut connections =
            FamilyConnections::from_family(&fixtures::polygamous_family(), true).unwrap();
        let instance = connections.create_sandwich_instance().unwrap();

        let forbidden = named_edges(&connections, instance.forbidden_edges());
        let is_forbidden = |a: &str, b: &str| contains_pair(&forbidden, a, b);

        assert!(is_forbidden("m1", "m2"));
        assert!(is_forbidden("c1", "c3"));
        assert!(!is_forbidden("dad", "m1"));
        assert!(!is_forbidden("dad", "m3"));
        assert!(is_forbidden("m{dad,m1}", "s{c2}"));
        assert!(!is_forbidden("m{dad,m1}", "s{c1}"));
    }

    #[test]
    fn test_unrelated_groups_of_same_generation_stay_apart() {
        let mut connections =
            FamilyConnections::from_family(&fixtures::polygamous_family(), true).unwrap();
        let instance = connections.create_sandwich_instance().unwrap();

        let required = named_edges(&connections, instance.required_edges());
        let forbidden = named_edges(&connections, instance.forbidden_edges());

        // a mate of another mating unit of the same generation
        assert!(contains_pair(&forbidden, "m2", "m{dad,m1}"));
        assert!(contains_pair(&forbidden, "m3", "m{dad,m1}"));
        assert!(contains_pair(&required, "dad", "m{dad,m1}"));
        assert!(!contains_pair(&forbidden, "dad", "m{dad,m1}"));

        // a child and a sibship it is not part of
        assert!(contains_pair(&forbidden, "c1", "s{c2}"));
        assert!(contains_pair(&required, "c1", "s{c1}"));
        assert!(!contains_pair(&forbidden, "c1", "s{c1}"));
    }

    #[test]
    fn test_components_of_disconnected_family() {
        let connections =
            FamilyConnections::from_family(&fixtures::disconnected_family(), true).unwrap();
        let components = connections.connected_components();

        assert_eq!(
            components,
            vec![
                vec!["mom1".to_string(), "dad1".to_string(), "c1".to_string()],
                vec!["mom2".to_string(), "dad2".to_string(), "c2".to_string()],
            ]
        );
    }
}

//! Property tests for the graph builder and analytics engine.
//!
//! Indexes are generated over a small name pool so that shared
//! dependencies, cycles, duplicate records and out-of-index targets all
//! show up often.

use apk_graph::prelude::*;
use proptest::prelude::*;

const POOL: usize = 8;

/// One generated package block: name index, dependency specifiers, size
type GeneratedRecord = (usize, Vec<String>, u64);

fn specifier() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => (0..POOL).prop_map(|i| format!("p{i}")),
        2 => (0..POOL).prop_map(|i| format!("p{i}>=1.0")),
        1 => (0..POOL).prop_map(|i| format!("p{i}~2")),
        1 => Just("so:libc.musl-x86_64.so.1".to_string()),
        1 => Just("external-pkg".to_string()),
    ]
}

fn generated_records() -> impl Strategy<Value = Vec<GeneratedRecord>> {
    prop::collection::vec(
        (
            0..POOL,
            prop::collection::vec(specifier(), 0..5),
            0u64..1_000_000,
        ),
        0..12,
    )
}

fn render(records: &[GeneratedRecord]) -> String {
    records
        .iter()
        .map(|(name, deps, size)| {
            format!("P:p{name}\nV:1.0-r0\nI:{size}\nD:{}\n", deps.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn build(records: &[GeneratedRecord]) -> DependencyGraph {
    GraphBuilder::build(IndexParser::parse(&render(records)))
}

proptest! {
    #[test]
    fn forward_and_reverse_are_transposes(records in generated_records()) {
        let graph = build(&records);
        let forward = graph.forward_map();
        let reverse = graph.reverse_map();

        for (source, targets) in &forward {
            for target in targets {
                prop_assert!(reverse[target].contains(source));
            }
        }
        for (target, sources) in &reverse {
            for source in sources {
                prop_assert!(forward[source].contains(target));
            }
        }
    }

    #[test]
    fn forward_keys_are_records_with_resolvable_dependencies(records in generated_records()) {
        let parsed = IndexParser::parse(&render(&records));
        let graph = GraphBuilder::build(parsed.clone());
        let forward = graph.forward_map();

        for record in &parsed {
            let has_edges = parsed
                .iter()
                .filter(|other| other.name() == record.name())
                .flat_map(|other| other.dependencies())
                .any(|dep| DependencyResolver::resolve_graph_node(dep).is_some());
            prop_assert_eq!(forward.contains_key(record.name()), has_edges);
        }
        for name in forward.keys() {
            prop_assert!(graph.contains_package(name));
        }
    }

    #[test]
    fn size_impact_totals_cover_the_closure(records in generated_records()) {
        let graph = build(&records);
        let analytics = GraphAnalytics::new(&graph);
        let names = (0..POOL)
            .map(|i| format!("p{i}"))
            .chain(["external-pkg".to_string(), "absent".to_string()]);

        for name in names {
            let impact = analytics.size_impact(&name);
            prop_assert!(impact.total_size >= impact.direct_size);
            prop_assert_eq!(impact.dependency_count, impact.packages.len() - 1);
            prop_assert_eq!(impact.packages.first(), Some(&name));
        }
    }

    #[test]
    fn no_soname_or_empty_nodes(records in generated_records()) {
        let graph = build(&records);
        for id in graph.node_ids() {
            let name = graph.name(id);
            prop_assert!(!name.is_empty());
            prop_assert!(!name.starts_with("so:"));
        }
    }

    #[test]
    fn building_twice_is_identical(records in generated_records()) {
        let text = render(&records);
        let first = GraphBuilder::build(IndexParser::parse(&text));
        let second = GraphBuilder::build(IndexParser::parse(&text));

        prop_assert_eq!(first.forward_map(), second.forward_map());
        prop_assert_eq!(first.reverse_map(), second.reverse_map());
        prop_assert_eq!(
            GraphAnalytics::new(&first).detect_cycles(),
            GraphAnalytics::new(&second).detect_cycles()
        );
    }

    #[test]
    fn leaves_are_exactly_records_without_dependents(records in generated_records()) {
        let graph = build(&records);
        let leaves = GraphAnalytics::new(&graph).leaf_packages();

        for record in graph.records() {
            let is_leaf = leaves.iter().any(|leaf| leaf == record.name());
            prop_assert_eq!(is_leaf, graph.dependent_count(record.name()) == 0);
        }
    }

    #[test]
    fn size_impact_is_monotone_along_edges(records in generated_records()) {
        let graph = build(&records);
        let analytics = GraphAnalytics::new(&graph);

        for (source, targets) in graph.forward_map() {
            let source_total = analytics.size_impact(&source).total_size;
            for target in targets {
                prop_assert!(source_total >= analytics.size_impact(&target).total_size);
            }
        }
    }

    #[test]
    fn shortest_path_follows_forward_edges(records in generated_records(), from in 0..POOL, to in 0..POOL) {
        let graph = build(&records);
        let from = format!("p{from}");
        let to = format!("p{to}");

        if let Some(path) = GraphAnalytics::new(&graph).shortest_path(&from, &to) {
            prop_assert_eq!(path.first(), Some(&from));
            prop_assert_eq!(path.last(), Some(&to));
            for pair in path.windows(2) {
                prop_assert!(graph.dependencies_of(&pair[0]).contains(&pair[1].as_str()));
            }
        }
    }

    #[test]
    fn every_cycle_closes_over_real_edges(records in generated_records()) {
        let graph = build(&records);

        for cycle in GraphAnalytics::new(&graph).detect_cycles() {
            prop_assert!(cycle.len() >= 2);
            prop_assert_eq!(cycle.first(), cycle.last());
            for pair in cycle.windows(2) {
                prop_assert!(graph.dependencies_of(&pair[0]).contains(&pair[1].as_str()));
            }
        }
    }

    #[test]
    fn subgraph_edges_reference_listed_nodes(
        records in generated_records(),
        root in 0..POOL,
        depth in 0usize..4,
        transitive in any::<bool>(),
    ) {
        let graph = build(&records);
        let mode = if transitive {
            ExtractionMode::Transitive
        } else {
            ExtractionMode::Bounded { max_depth: depth }
        };
        let subgraph = SubgraphExtractor::new(&graph).extract(&format!("p{root}"), mode);

        prop_assert!(!subgraph.nodes.is_empty());
        for edge in &subgraph.edges {
            prop_assert!(subgraph.contains_node(&edge.source));
            prop_assert!(subgraph.contains_node(&edge.target));
        }
    }

    #[test]
    fn parallel_bus_factors_match_sequential(records in generated_records()) {
        let graph = build(&records);
        let analytics = GraphAnalytics::new(&graph);
        let names: Vec<String> = graph.records().iter().map(|r| r.name().to_string()).collect();

        for (name, bus_factor) in analytics.bus_factors(&names) {
            prop_assert_eq!(bus_factor, analytics.bus_factor(&name));
        }
    }
}

use proptest::prelude::*;
use taskdot::build_graph;
use taskdot::graph::GraphBuilder;

fn task_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn description() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{0,20}"
}

fn noise_line() -> impl Strategy<Value = String> {
    "[a-z .:>-]{0,30}".prop_filter("must not be a tag line", |s| !s.trim().starts_with("DOT:"))
}

proptest! {
    #[test]
    fn chain_backbone_follows_declaration_order(
        tasks in proptest::collection::vec((task_name(), description()), 0..12),
        noise in proptest::collection::vec(noise_line(), 0..6),
    ) {
        let mut lines: Vec<String> = tasks
            .iter()
            .map(|(name, desc)| format!("DOT:CHAIN:task_{name} {desc}"))
            .collect();
        lines.extend(noise);

        let mut builder = GraphBuilder::new();
        builder.extend(&lines);
        let doc = builder.finish();

        let expected: Vec<String> = tasks.iter().map(|(name, _)| name.clone()).collect();
        prop_assert_eq!(&doc.chain, &expected);
        prop_assert_eq!(doc.chain_path(), expected.join(" -> "));
    }

    #[test]
    fn output_is_deterministic(
        lines in proptest::collection::vec(".{0,40}", 0..20),
    ) {
        prop_assert_eq!(build_graph(&lines), build_graph(&lines));
    }

    #[test]
    fn document_is_always_wrapped(
        lines in proptest::collection::vec(".{0,40}", 0..20),
    ) {
        let doc = build_graph(&lines);
        prop_assert!(doc.starts_with("digraph \"G\" {\n"), "document does not start with graph header");
        prop_assert!(doc.ends_with("\n}"), "document does not end with closing brace");
    }

    #[test]
    fn edge_endpoints_never_contain_dots(
        from in "[a-z.]{1,10}",
        to in "[a-z.]{1,10}",
    ) {
        let mut builder = GraphBuilder::new();
        builder.push_line(&format!("DOT:{from} -> {to}"));
        let doc = builder.finish();

        let graph = doc.to_digraph();
        for node in graph.nodes() {
            prop_assert!(!node.contains('.'));
        }
    }
}

use taskdot::graph::GraphBuilder;
use taskdot::{build_graph, emit_tags, task_file_graph};
use taskdot_test_utils::builders::{TaskConfigBuilder, TaskFileBuilder, chain, edge};
use taskdot_test_utils::init_tracing;

fn emitted_lines(enabled: bool) -> Vec<String> {
    let file = TaskFileBuilder::new()
        .with_task(
            TaskConfigBuilder::new("task_fetch")
                .doc("Fetch sources\n\nClones the upstream repo.")
                .action("git pull")
                .target("src.tar.gz")
                .build(),
        )
        .with_task(TaskConfigBuilder::new("lint").doc("Lint").inactive().build())
        .with_task(
            TaskConfigBuilder::new("compile")
                .doc("Compile")
                .file_dep("src.tar.gz")
                .task_dep("task_fetch")
                .build(),
        )
        .build();

    let mut out = Vec::new();
    emit_tags(&file, enabled, &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn emitter_writes_one_declaration_per_line_in_definition_order() {
    init_tracing();

    assert_eq!(
        emitted_lines(true),
        vec![
            chain("task_fetch", "Fetch sources"),
            edge("task_fetch", "src_tar_gz"),
            chain("compile", "Compile"),
            edge("src_tar_gz", "compile"),
            edge("task_fetch", "compile"),
        ]
    );
}

#[test]
fn disabled_emission_gives_empty_document() {
    init_tracing();

    let lines = emitted_lines(false);
    assert!(lines.is_empty());
    assert_eq!(build_graph(&lines), "digraph \"G\" {\n\n}");
}

#[test]
fn emitted_lines_build_expected_graph() {
    init_tracing();

    let doc = build_graph(emitted_lines(true));
    assert_eq!(
        doc,
        "digraph \"G\" {\n\
         fetch [tooltip=\"Fetch sources\"]\n\
         fetch -> src_tar_gz\n\
         compile [tooltip=\"Compile\"]\n\
         src_tar_gz -> compile\n\
         fetch -> compile\n\
         fetch -> compile\n\
         }"
    );
}

#[test]
fn in_process_graph_matches_piped_graph() {
    init_tracing();

    let file = TaskFileBuilder::new()
        .with_task(TaskConfigBuilder::new("a").doc("A").target("a.out").build())
        .with_task(TaskConfigBuilder::new("b").doc("B").file_dep("a.out").build())
        .build();

    let mut piped = Vec::new();
    emit_tags(&file, true, &mut piped).unwrap();
    let piped = GraphBuilder::from_reader(piped.as_slice()).unwrap();

    assert_eq!(task_file_graph(&file).unwrap(), piped);
}

#[test]
fn config_graph_switch_drives_emission() {
    init_tracing();

    let file = TaskFileBuilder::new()
        .with_graph(true)
        .with_task(TaskConfigBuilder::new("task_lint").doc("Lint").build())
        .build();
    assert!(file.config.graph);

    let mut out = Vec::new();
    emit_tags(&file, file.config.graph, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", chain("task_lint", "Lint")));
}

use crate::common::TestProject;
use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn test_nested_relative_embeds() {
    let project = TestProject::new().unwrap();
    project.write("docs/shared/footer.md", "-- footer --").unwrap();
    project.write("docs/chapters/one.md", "Chapter one\n{{ ../shared/footer.md }}").unwrap();
    project.write("docs/index.md", "# Book\n{{chapters/one.md}}").unwrap();

    project
        .command(&["docs/index.md"])
        .assert()
        .success()
        .stdout("# Book\nChapter one\n-- footer --");
}

#[test]
fn test_same_file_embedded_twice() {
    let project = TestProject::new().unwrap();
    project.write("sig.md", "-- sig").unwrap();
    project.write("doc.md", "A {{sig.md}}\nB {{sig.md}}").unwrap();

    project.command(&["doc.md"]).assert().success().stdout("A -- sig\nB -- sig");
}

#[test]
fn test_csv_becomes_table() {
    let project = TestProject::new().unwrap();
    project.write("data.csv", "name,value\nfoo,1\nbar,2").unwrap();
    project.write("doc.md", "# Data\n\n{{data.csv}}").unwrap();

    project.run_hydrate(&["doc.md", "-o", "out.md"]).unwrap().assert_success();

    let result = project.read("out.md").unwrap();
    assert!(result.contains("| name | value |"));
    assert!(result.contains("| --- | --- |"));
    assert!(result.contains("| foo | 1 |"));
    assert!(result.contains("| bar | 2 |"));
}

#[test]
fn test_csv_blank_line_becomes_empty_row() {
    let project = TestProject::new().unwrap();
    project.write("data.csv", "a,b\n\n1,2\n").unwrap();
    project.write("doc.md", "{{data.csv}}").unwrap();

    project
        .command(&["doc.md"])
        .assert()
        .success()
        .stdout("| a | b |\n| --- | --- |\n|  |  |\n| 1 | 2 |");
}

#[test]
fn test_tsv_and_jsonl_become_tables() {
    let project = TestProject::new().unwrap();
    project.write("a.TSV", "x\ty\n1\t2").unwrap();
    project.write("b.jsonl", "{\"k\": \"v\", \"n\": null}\n\n{\"k\": \"a|b\", \"n\": true}\n").unwrap();
    project.write("doc.md", "{{a.TSV}}\n\n{{b.jsonl}}").unwrap();

    project.command(&["doc.md"]).assert().success().stdout(
        "| x | y |\n| --- | --- |\n| 1 | 2 |\n\n| k | n |\n| --- | --- |\n| v |  |\n| a\\|b | true |",
    );
}

#[test]
fn test_circular_reference_fails() {
    let project = TestProject::new().unwrap();
    project.write("a.md", "A: {{b.md}}").unwrap();
    project.write("b.md", "B: {{a.md}}").unwrap();

    project
        .run_hydrate(&["a.md", "-o", "out.md"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Circular reference detected");

    assert!(!project.path("out.md").exists());
}

#[test]
fn test_missing_embed_names_reference() {
    let project = TestProject::new().unwrap();
    project.write("doc.md", "{{ notes/missing.md }}").unwrap();

    project
        .command(&["doc.md"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Missing embedded file 'notes/missing.md'"))
        .stderr(predicate::str::contains(
            project.project_path().join("notes").join("missing.md").display().to_string(),
        ));
}

#[test]
fn test_binary_embed_fails() {
    let project = TestProject::new().unwrap();
    project.write_bytes("image.png", b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR").unwrap();
    project.write("doc.md", "{{image.png}}").unwrap();

    project
        .command(&["doc.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot embed binary file"));
}

#[test]
fn test_malformed_jsonl_fails_with_line_number() {
    let project = TestProject::new().unwrap();
    project.write("rows.jsonl", "{\"a\": 1}\n{\"a\": 2}\n{broken\n").unwrap();
    project.write("doc.md", "{{rows.jsonl}}").unwrap();

    project
        .command(&["doc.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("at line 3"));
}

#[test]
fn test_no_markers_copies_content() {
    let project = TestProject::new().unwrap();
    let content = "No markers here.\n{ single } braces and }} stray {{ closers\n";
    project.write("doc.md", content).unwrap();

    project.command(&["doc.md"]).assert().success().stdout(content);
}

#[test]
fn test_hydrated_output_is_stable() {
    let project = TestProject::new().unwrap();
    project.write("part.md", "plain part").unwrap();
    project.write("doc.md", "x {{part.md}} y").unwrap();

    project.run_hydrate(&["doc.md", "-o", "once.md"]).unwrap().assert_success();
    project.run_hydrate(&["once.md", "-o", "twice.md"]).unwrap().assert_success();

    assert_eq!(project.read("once.md").unwrap(), project.read("twice.md").unwrap());
}

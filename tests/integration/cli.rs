use crate::common::TestProject;
use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn test_positional_input_to_stdout() {
    let project = TestProject::new().unwrap();
    project.write("part.md", "Embedded content").unwrap();
    project.write("doc.md", "# Title\n\n{{part.md}}\n").unwrap();

    project
        .command(&["doc.md"])
        .assert()
        .success()
        .stdout("# Title\n\nEmbedded content\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_input_flag_with_output_file() {
    let project = TestProject::new().unwrap();
    project.write("part.md", "Embedded content").unwrap();
    project.write("doc.md", "{{part.md}}").unwrap();

    let output = project.run_hydrate(&["-i", "doc.md", "-o", "out.md"]).unwrap();
    output.assert_success().assert_stdout_contains("Hydrated doc.md -> out.md");

    assert_eq!(project.read("out.md").unwrap(), "Embedded content");
    assert_eq!(project.read("doc.md").unwrap(), "{{part.md}}");
}

#[test]
fn test_output_into_new_directory() {
    let project = TestProject::new().unwrap();
    project.write("doc.md", "plain").unwrap();

    project.run_hydrate(&["doc.md", "--output", "build/out/doc.md"]).unwrap().assert_success();
    assert_eq!(project.read("build/out/doc.md").unwrap(), "plain");
}

#[test]
fn test_quiet_suppresses_summary() {
    let project = TestProject::new().unwrap();
    project.write("doc.md", "plain").unwrap();

    project.command(&["doc.md", "-o", "out.md", "--quiet"]).assert().success().stdout("");
    assert_eq!(project.read("out.md").unwrap(), "plain");
}

#[test]
fn test_in_place_update() {
    let project = TestProject::new().unwrap();
    project.write("part.md", "Embedded content").unwrap();
    project.write("doc.md", "Before\n{{part.md}}\nAfter").unwrap();

    project.run_hydrate(&["doc.md", "-o", "doc.md"]).unwrap().assert_success();
    assert_eq!(project.read("doc.md").unwrap(), "Before\nEmbedded content\nAfter");
}

#[test]
fn test_in_place_update_through_equivalent_path() {
    let project = TestProject::new().unwrap();
    project.write("docs/doc.md", "plain").unwrap();

    project.run_hydrate(&["docs/doc.md", "-o", "./docs/../docs/doc.md"]).unwrap().assert_success();
}

#[cfg(unix)]
#[test]
fn test_in_place_update_through_symlink() {
    let project = TestProject::new().unwrap();
    project.write("part.md", "Embedded content").unwrap();
    let input = project.write("doc.md", "{{part.md}}").unwrap();
    std::os::unix::fs::symlink(&input, project.path("link.md")).unwrap();

    project.run_hydrate(&["doc.md", "-o", "link.md"]).unwrap().assert_success();

    assert_eq!(project.read("doc.md").unwrap(), "Embedded content");
    let link = std::fs::symlink_metadata(project.path("link.md")).unwrap();
    assert!(link.file_type().is_symlink());
}

#[test]
fn test_existing_output_is_not_overwritten() {
    let project = TestProject::new().unwrap();
    project.write("doc.md", "new content").unwrap();
    project.write("out.md", "existing content").unwrap();

    project
        .run_hydrate(&["doc.md", "-o", "out.md"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Output file already exists: out.md");

    assert_eq!(project.read("out.md").unwrap(), "existing content");
}

#[test]
fn test_missing_input() {
    let project = TestProject::new().unwrap();

    project
        .command(&["nonexistent.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input file not found: nonexistent.md"));
}

#[test]
fn test_both_inputs_rejected() {
    let project = TestProject::new().unwrap();
    project.write("a.md", "a").unwrap();
    project.write("b.md", "b").unwrap();

    project
        .command(&["a.md", "-i", "b.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot specify both positional input and -i/--input"));
}

#[test]
fn test_no_input_rejected() {
    let project = TestProject::new().unwrap();

    project
        .command(&[])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input file is required (positional or -i/--input)"));
}

#[test]
fn test_max_depth_flag() {
    let project = TestProject::new().unwrap();
    project.chain(4, "bottom").unwrap();

    project
        .command(&["level0.md", "--max-depth", "3"])
        .assert()
        .success()
        .stdout("level0: level1: level2: bottom");

    project
        .command(&["level0.md", "--max-depth", "2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Maximum embedding depth (2) exceeded"));
}

#[test]
fn test_default_depth_is_five() {
    let project = TestProject::new().unwrap();
    for i in 0..6 {
        project.write(&format!("l{i}.md"), &format!("{{{{l{}.md}}}}", i + 1)).unwrap();
    }
    project.write("l6.md", "deep").unwrap();

    // six embeds below l0
    project
        .command(&["l0.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Maximum embedding depth (5) exceeded"));

    // five embeds below l1
    project.command(&["l1.md"]).assert().success().stdout("deep");
}

#[test]
fn test_config_file_sets_default_depth() {
    let project = TestProject::new().unwrap();
    project.write("c.md", "leaf").unwrap();
    project.write("b.md", "{{c.md}}").unwrap();
    project.write("a.md", "{{b.md}}").unwrap();
    project.write_config("max_depth = 1\n").unwrap();

    project
        .command(&["a.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Maximum embedding depth (1) exceeded"));

    project.command(&["a.md", "--max-depth", "2"]).assert().success().stdout("leaf");
}

#[test]
fn test_explicit_config_flag() {
    let project = TestProject::new().unwrap();
    project.write("b.md", "leaf").unwrap();
    project.write("a.md", "{{b.md}}").unwrap();
    project.write("custom.toml", "max_depth = 0\n").unwrap();

    project
        .command(&["a.md", "--config", "custom.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Maximum embedding depth (0) exceeded"));
}

#[test]
fn test_invalid_config_is_reported() {
    let project = TestProject::new().unwrap();
    project.write("a.md", "plain").unwrap();
    project.write_config("max_depth = \"deep\"").unwrap();

    project.command(&["a.md"]).assert().code(1).stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let project = TestProject::new().unwrap();
    project.write("part.md", "x").unwrap();
    project.write("doc.md", "{{part.md}}").unwrap();

    project
        .command(&["doc.md", "--verbose"])
        .assert()
        .success()
        .stdout("x")
        .stderr(predicate::str::contains("Embedding"));
}

use assert_cmd::Command;
use predicates::prelude::*;

fn shipmate() -> Command {
    Command::cargo_bin("shipmate").unwrap()
}

#[test]
fn prints_unchecked_items_exactly() {
    let temp_dir = tempfile::tempdir().unwrap();
    let doc = temp_dir.path().join("guide.md");
    std::fs::write(
        &doc,
        "## Production Checklist\n- [ ] A\n- [x] B\n- [ ] C\n## Next\n- [ ] D\n",
    )
    .unwrap();

    shipmate()
        .current_dir(temp_dir.path())
        .arg("checklist")
        .arg("--file")
        .arg(&doc)
        .assert()
        .success()
        .stdout("- [ ] A\n- [ ] C\n");
}

#[test]
fn boundary_items_never_leak() {
    let temp_dir = tempfile::tempdir().unwrap();
    let doc = temp_dir.path().join("guide.md");
    std::fs::write(
        &doc,
        "## Production Checklist\n- [ ] inside\n## Rollback Plan\n- [ ] outside\n",
    )
    .unwrap();

    shipmate()
        .current_dir(temp_dir.path())
        .arg("checklist")
        .arg("--file")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("- [ ] inside"))
        .stdout(predicate::str::contains("outside").not());
}

#[test]
fn reports_when_nothing_is_found() {
    let temp_dir = tempfile::tempdir().unwrap();
    let doc = temp_dir.path().join("guide.md");
    std::fs::write(&doc, "# Guide\nNo headings of interest here.\n").unwrap();

    shipmate()
        .current_dir(temp_dir.path())
        .arg("checklist")
        .arg("--file")
        .arg(&doc)
        .assert()
        .success()
        .stdout("No checklist items found.\n");
}

#[test]
fn unreadable_document_fails_with_diagnostic() {
    let temp_dir = tempfile::tempdir().unwrap();

    shipmate()
        .current_dir(temp_dir.path())
        .arg("checklist")
        .arg("--file")
        .arg("absent.md")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"))
        .stderr(predicate::str::contains("absent.md"));
}

#[test]
fn section_override_selects_a_different_heading() {
    let temp_dir = tempfile::tempdir().unwrap();
    let doc = temp_dir.path().join("guide.md");
    std::fs::write(
        &doc,
        "## Production Checklist\n- [ ] prod\n## Staging Checklist\n- [ ] staging\n",
    )
    .unwrap();

    shipmate()
        .current_dir(temp_dir.path())
        .arg("checklist")
        .arg("--file")
        .arg(&doc)
        .arg("--section")
        .arg("Staging Checklist")
        .assert()
        .success()
        .stdout("- [ ] staging\n");
}

#[test]
fn config_file_supplies_the_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(temp_dir.path().join(".shipmate")).unwrap();
    std::fs::write(
        temp_dir.path().join(".shipmate/config.json"),
        r#"{ "checklist_path": "RELEASE.md", "checklist_section": "Launch" }"#,
    )
    .unwrap();
    std::fs::write(
        temp_dir.path().join("RELEASE.md"),
        "## Launch\n- [ ] flip the switch\n",
    )
    .unwrap();

    shipmate()
        .current_dir(temp_dir.path())
        .arg("checklist")
        .assert()
        .success()
        .stdout("- [ ] flip the switch\n");
}

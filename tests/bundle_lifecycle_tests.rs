//! End-to-end bundle lifecycle: add, ls, restore, copy, rm, rmdir

mod common;

use predicates::prelude::*;
use std::fs;

use common::TestBundle;

#[test]
fn test_add_moves_file_and_leaves_link() {
    let test = TestBundle::initialized();
    let file = test.add(".bashrc", "alias ll='ls -l'\n");

    assert!(file.is_symlink());
    assert_eq!(fs::read_link(&file).unwrap(), test.member(".bashrc"));
    assert_eq!(TestBundle::read(&file), "alias ll='ls -l'\n");

    test.cmd()
        .arg("ls")
        .assert()
        .success()
        .stdout(".bashrc\n");
}

#[test]
fn test_add_with_name() {
    let test = TestBundle::initialized();
    let file = test.write_home_file(".config/git/config", "[user]\n");

    test.cmd()
        .arg("add")
        .arg(&file)
        .args(["--as", "git/config"])
        .assert()
        .success();

    assert_eq!(fs::read_link(&file).unwrap(), test.member("git/config"));
    test.cmd().arg("ls").assert().success().stdout("");
    test.cmd()
        .args(["ls", "git"])
        .assert()
        .success()
        .stdout("git/config\n");
}

#[test]
fn test_add_relative_path_from_current_dir() {
    let test = TestBundle::initialized();
    let file = test.write_home_file(".profile", "p");

    test.cmd().args(["add", ".profile"]).assert().success();

    assert!(file.is_symlink());
}

#[test]
fn test_add_tilde_path() {
    let test = TestBundle::initialized();
    let file = test.write_home_file(".inputrc", "i");

    test.cmd().args(["add", "~/.inputrc"]).assert().success();

    assert!(file.is_symlink());
}

#[test]
fn test_add_collision_fails() {
    let test = TestBundle::initialized();
    test.add(".bashrc", "first");
    let second = test.write_home_file("other/.bashrc", "second");

    test.cmd()
        .arg("add")
        .arg(&second)
        .assert()
        .code(7)
        .stderr(predicate::str::contains("already bundled"));

    assert!(!second.is_symlink());
    assert_eq!(TestBundle::read(&second), "second");
    assert_eq!(TestBundle::read(&test.member(".bashrc")), "first");
}

#[test]
fn test_add_missing_file_fails() {
    let test = TestBundle::initialized();
    test.cmd()
        .args(["add", "does-not-exist"])
        .assert()
        .code(3);
}

#[test]
fn test_add_directory_fails() {
    let test = TestBundle::initialized();
    fs::create_dir_all(test.home.join(".config")).unwrap();

    test.cmd().args(["add", ".config"]).assert().code(4);
}

#[test]
fn test_add_already_linked_file_fails() {
    let test = TestBundle::initialized();
    let file = test.add(".bashrc", "b");

    test.cmd()
        .arg("add")
        .arg(&file)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("already a link into the bundle"));
}

#[test]
fn test_add_file_inside_bundle_fails() {
    let test = TestBundle::initialized();
    fs::write(test.member("stray"), "s").unwrap();

    test.cmd()
        .arg("add")
        .arg(test.member("stray"))
        .assert()
        .code(2);
}

#[test]
fn test_ls_never_shows_backlinks() {
    let test = TestBundle::initialized();
    test.add(".bashrc", "b");
    test.add(".vimrc", "v");

    assert!(test.member(".bashrc.link").is_symlink());
    test.cmd()
        .arg("ls")
        .assert()
        .success()
        .stdout(".bashrc\n.vimrc\n")
        .stdout(predicate::str::contains(".link").not());
}

#[test]
fn test_ls_long_shows_status() {
    let test = TestBundle::initialized();
    test.add(".bashrc", "b");
    let vimrc = test.add(".vimrc", "v");
    fs::remove_file(&vimrc).unwrap();
    fs::write(test.member("orphan.conf"), "o").unwrap();

    test.cmd()
        .args(["ls", "--long"])
        .assert()
        .success()
        .stdout(predicate::str::contains("linked"))
        .stdout(predicate::str::contains("unlinked"))
        .stdout(predicate::str::contains("orphaned"))
        .stdout(predicate::str::contains("~/.bashrc"));
}

#[test]
fn test_ls_json() {
    let test = TestBundle::initialized();
    let file = test.add(".bashrc", "b");
    fs::write(test.member("orphan.conf"), "o").unwrap();

    let output = test.cmd().args(["ls", "--json"]).output().unwrap();
    assert!(output.status.success());

    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = listing.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], ".bashrc");
    assert_eq!(entries[0]["status"], "linked");
    assert_eq!(entries[0]["origin"], file.display().to_string());
    assert_eq!(entries[1]["name"], "orphan.conf");
    assert_eq!(entries[1]["status"], "orphaned");
    assert!(entries[1]["origin"].is_null());
}

#[test]
fn test_ls_long_tolerates_unreadable_backlink() {
    let test = TestBundle::initialized();
    test.add("a.conf", "a");
    fs::write(test.member("b.conf"), "b").unwrap();
    fs::write(test.member("b.conf.link"), "not a link").unwrap();

    test.cmd()
        .args(["ls", "--long"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.conf"))
        .stdout(predicate::str::contains("orphaned"));

    let output = test.cmd().args(["ls", "--json"]).output().unwrap();
    assert!(output.status.success());
    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listing[1]["name"], "b.conf");
    assert_eq!(listing[1]["status"], "orphaned");
}

#[test]
fn test_ls_missing_subdirectory_fails() {
    let test = TestBundle::initialized();
    test.cmd().args(["ls", "nope"]).assert().code(3);
}

#[test]
fn test_round_trip_add_rm() {
    let test = TestBundle::initialized();
    let file = test.add(".bashrc", "export EDITOR=vi\n");

    test.cmd()
        .args(["rm", ".bashrc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved"));

    assert!(!file.is_symlink());
    assert_eq!(TestBundle::read(&file), "export EDITOR=vi\n");
    assert_eq!(fs::read_dir(&test.bundle).unwrap().count(), 0);
}

#[test]
fn test_rm_after_link_deleted() {
    let test = TestBundle::initialized();
    let file = test.add(".bashrc", "b");
    fs::remove_file(&file).unwrap();

    test.cmd().args(["rm", ".bashrc", "-y"]).assert().success();

    assert!(!file.exists());
    assert!(!test.member(".bashrc").exists());
    assert!(!test.member(".bashrc.link").is_symlink());
}

#[test]
fn test_rm_unknown_member_fails() {
    let test = TestBundle::initialized();
    test.cmd().args(["rm", "nothing"]).assert().code(3);
}

#[test]
fn test_rm_rejects_escaping_path() {
    let test = TestBundle::initialized();
    test.cmd().args(["rm", "../etc/passwd"]).assert().code(2);
}

#[test]
fn test_restore_recreates_deleted_link() {
    let test = TestBundle::initialized();
    let file = test.add(".bashrc", "b");
    fs::remove_file(&file).unwrap();

    test.cmd()
        .args(["restore", ".bashrc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Linked"));

    assert_eq!(fs::read_link(&file).unwrap(), test.member(".bashrc"));
}

#[test]
fn test_restore_twice_is_harmless() {
    let test = TestBundle::initialized();
    let file = test.add(".bashrc", "b");

    test.cmd().args(["restore", ".bashrc"]).assert().success();
    test.cmd()
        .args(["restore", ".bashrc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already links"));

    assert_eq!(fs::read_link(&file).unwrap(), test.member(".bashrc"));
}

#[test]
fn test_restore_orphan_fails_without_changes() {
    let test = TestBundle::initialized();
    fs::write(test.member("missing.conf"), "m").unwrap();

    test.cmd()
        .args(["restore", "missing.conf"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("no backlink"));

    assert_eq!(fs::read_dir(&test.bundle).unwrap().count(), 1);
}

#[test]
fn test_restore_refuses_occupied_location() {
    let test = TestBundle::initialized();
    let file = test.add(".bashrc", "bundled");
    fs::remove_file(&file).unwrap();
    fs::write(&file, "local").unwrap();

    test.cmd().args(["restore", ".bashrc"]).assert().code(9);
    assert_eq!(TestBundle::read(&file), "local");

    test.cmd()
        .args(["restore", ".bashrc", "--force"])
        .assert()
        .success();
    assert!(file.is_symlink());
    assert_eq!(TestBundle::read(&file), "bundled");
}

#[test]
fn test_restore_copy() {
    let test = TestBundle::initialized();
    let file = test.add(".bashrc", "b");

    test.cmd()
        .args(["restore", ".bashrc", "--copy"])
        .assert()
        .success();

    assert!(!file.is_symlink());
    assert_eq!(TestBundle::read(&file), "b");
    assert!(test.member(".bashrc").is_file());
}

#[test]
fn test_copy_to_new_location() {
    let test = TestBundle::initialized();
    test.add(".bashrc", "content");
    let out = test.home.join("out");

    test.cmd()
        .args(["copy", ".bashrc"])
        .arg(&out)
        .assert()
        .success();

    assert!(!out.is_symlink());
    assert_eq!(TestBundle::read(&out), "content");
}

#[test]
fn test_copy_existing_target_fails_without_force() {
    let test = TestBundle::initialized();
    test.add(".bashrc", "content");
    let out = test.write_home_file("out", "untouched");

    test.cmd()
        .args(["copy", ".bashrc"])
        .arg(&out)
        .assert()
        .code(6);
    assert_eq!(TestBundle::read(&out), "untouched");

    test.cmd()
        .args(["copy", ".bashrc", "-f"])
        .arg(&out)
        .assert()
        .success();
    assert_eq!(TestBundle::read(&out), "content");
}

#[test]
fn test_copy_into_directory() {
    let test = TestBundle::initialized();
    test.add(".bashrc", "content");
    let dir = test.home.join("backup");
    fs::create_dir_all(&dir).unwrap();

    test.cmd()
        .args(["copy", ".bashrc"])
        .arg(&dir)
        .assert()
        .success();

    assert_eq!(TestBundle::read(&dir.join(".bashrc")), "content");
}

#[cfg(unix)]
#[test]
fn test_copy_into_linked_directory_keeps_link() {
    let test = TestBundle::initialized();
    test.add(".bashrc", "content");
    let real = test.home.join("realdir");
    let alias = test.home.join("backup");
    fs::create_dir_all(&real).unwrap();
    std::os::unix::fs::symlink(&real, &alias).unwrap();

    test.cmd()
        .args(["copy", ".bashrc"])
        .arg(&alias)
        .assert()
        .success();
    test.cmd()
        .args(["copy", ".bashrc", "--force"])
        .arg(&alias)
        .assert()
        .success();

    assert!(alias.is_symlink());
    assert_eq!(TestBundle::read(&real.join(".bashrc")), "content");
}

#[test]
fn test_content_survives_lost_link() {
    let test = TestBundle::initialized();
    let file = test.add(".bashrc", "precious");
    fs::remove_file(&file).unwrap();
    let out = test.home.join("rescued");

    test.cmd()
        .args(["copy", ".bashrc"])
        .arg(&out)
        .assert()
        .success();
    test.cmd().args(["restore", ".bashrc"]).assert().success();

    assert_eq!(TestBundle::read(&out), "precious");
    assert_eq!(TestBundle::read(&file), "precious");
}

#[test]
fn test_rmdir_leaves_links_dangling() {
    let test = TestBundle::initialized();
    let file = test.add(".bashrc", "b");

    test.cmd()
        .args(["rmdir", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    assert!(!test.bundle.exists());
    assert!(file.is_symlink());
    assert!(!file.exists());
}

#[test]
fn test_rmdir_without_yes_refuses_when_not_interactive() {
    let test = TestBundle::initialized();
    test.add(".bashrc", "b");

    test.cmd()
        .arg("rmdir")
        .assert()
        .code(130)
        .stderr(predicate::str::contains("--yes"));

    assert!(test.member(".bashrc").is_file());
}

#[test]
fn test_rmdir_subdirectory() {
    let test = TestBundle::initialized();
    let file = test.write_home_file(".config/git/config", "[user]\n");
    test.cmd()
        .arg("add")
        .arg(&file)
        .args(["--as", "git/config"])
        .assert()
        .success();

    test.cmd()
        .args(["rmdir", "git"])
        .assert()
        .code(11)
        .stderr(predicate::str::contains("--force"));
    assert!(test.member("git/config").is_file());

    test.cmd()
        .args(["rmdir", "git", "--force"])
        .assert()
        .success();

    assert!(!test.member("git").exists());
    assert!(test.bundle.is_dir());
    assert!(file.is_symlink());
}

#[test]
fn test_rmdir_empty_subdirectory() {
    let test = TestBundle::initialized();
    fs::create_dir_all(test.member("empty")).unwrap();

    test.cmd().args(["rmdir", "empty"]).assert().success();

    assert!(!test.member("empty").exists());
}

#[test]
fn test_rmdir_subdirectory_cannot_escape() {
    let test = TestBundle::initialized();
    test.cmd()
        .args(["rmdir", "..", "--force"])
        .assert()
        .code(2);
    assert!(test.bundle.is_dir());
}

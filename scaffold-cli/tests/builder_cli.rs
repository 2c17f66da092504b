use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;

use tempfile::TempDir;

fn scaffold_cmd(project: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("scaffold"));
    cmd.current_dir(project);
    cmd
}

/// Lay down a minimal target project: config plus the shared constant files
/// the side generators extend.
fn seed_project(dir: &TempDir) {
    fs::write(
        dir.path().join("scaffold.yaml"),
        "modules_root: modules\napp_root: app\n",
    )
    .expect("write config");

    let constant_dir = dir.path().join("common/constant");
    fs::create_dir_all(&constant_dir).expect("mkdir");
    fs::write(
        constant_dir.join("permission.go"),
        "package constant\n\n// System permissions\nconst (\n\tPermSystemManage = \"system:manage\"\n)\n",
    )
    .expect("seed permissions");

    let cache_dir = dir.path().join("common/cache");
    fs::create_dir_all(&cache_dir).expect("mkdir");
    fs::write(
        cache_dir.join("redis.go"),
        "package cache\n\nconst prefix = \"gin-starter\"\n\nconst (\n\tsessionKey = prefix + \":session:%v\"\n)\n",
    )
    .expect("seed cache keys");
}

#[test]
fn new_module_then_incremental_add() {
    let project = TempDir::new().expect("project dir");
    seed_project(&project);

    scaffold_cmd(project.path())
        .args(["builder", "--module", "shop", "--tables", "product", "--new-module"])
        .assert()
        .success()
        .stdout(contains("added: product"));

    let builder_path = project.path().join("modules/shop/builder.go");
    let routes_path = project.path().join("app/shop_routes.go");
    assert!(builder_path.exists());
    assert!(routes_path.exists());

    scaffold_cmd(project.path())
        .args(["builder", "--module", "shop", "--tables", "product,category"])
        .assert()
        .success()
        .stdout(contains("added: category"));

    let builder = fs::read_to_string(&builder_path).expect("builder");
    assert_eq!(builder.matches("// Product Repository").count(), 1);
    assert_eq!(builder.matches("// Category Repository").count(), 1);

    let routes = fs::read_to_string(&routes_path).expect("routes");
    assert!(routes.contains("categories := v1.Group(\"/categories\""));
}

#[test]
fn rerun_reports_nothing_to_do() {
    let project = TempDir::new().expect("project dir");
    seed_project(&project);

    scaffold_cmd(project.path())
        .args(["builder", "--module", "shop", "--tables", "product", "--new-module"])
        .assert()
        .success();

    scaffold_cmd(project.path())
        .args(["builder", "--module", "shop", "--tables", "product"])
        .assert()
        .success()
        .stdout(contains("already wired"));
}

#[test]
fn dry_run_prints_diff_and_writes_nothing() {
    let project = TempDir::new().expect("project dir");
    seed_project(&project);

    scaffold_cmd(project.path())
        .args(["builder", "--module", "shop", "--tables", "product", "--new-module"])
        .assert()
        .success();

    scaffold_cmd(project.path())
        .args(["builder", "--module", "shop", "--tables", "category", "--dry-run"])
        .assert()
        .success()
        .stdout(contains("+\tcategoryFinderRepo := repository.NewCategoryFinderRepository(db, cache)"));

    let builder = fs::read_to_string(project.path().join("modules/shop/builder.go")).expect("builder");
    assert!(!builder.contains("category"));
}

#[test]
fn missing_tables_flag_fails_with_guidance() {
    let project = TempDir::new().expect("project dir");
    seed_project(&project);

    scaffold_cmd(project.path())
        .args(["builder", "--module", "shop", "--tables", " , "])
        .assert()
        .failure()
        .stderr(contains("at least one table"));
}

#[test]
fn unknown_subcommand_is_a_clap_error() {
    let project = TempDir::new().expect("project dir");
    scaffold_cmd(project.path())
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(contains("unrecognized subcommand"));
}

#[test]
fn init_dumps_templates_and_overrides_apply() {
    let project = TempDir::new().expect("project dir");
    seed_project(&project);

    scaffold_cmd(project.path())
        .args(["init", "--dir", "templates"])
        .assert()
        .success()
        .stdout(contains("builder.go.tera"));

    let template_path = project.path().join("templates/builder.go.tera");
    assert!(template_path.exists());

    // Customize the template, then scaffold with the override in effect.
    let customized = fs::read_to_string(&template_path)
        .expect("template")
        .replace(
            "// Code generated by scaffold.",
            "// Code generated by scaffold (custom).",
        );
    fs::write(&template_path, customized).expect("write template");

    scaffold_cmd(project.path())
        .args([
            "builder",
            "--module",
            "shop",
            "--tables",
            "product",
            "--new-module",
            "--template-dir",
            "templates",
        ])
        .assert()
        .success();

    let builder = fs::read_to_string(project.path().join("modules/shop/builder.go")).expect("builder");
    assert!(builder.starts_with("// Code generated by scaffold (custom)."));
}

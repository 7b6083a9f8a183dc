use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn top_help_mentions_options() {
    let mut cmd = cargo_bin_cmd!("anidexctl");
    let output = cmd
        .arg("top")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("--page"), "top help missing --page");
    assert!(text.contains("--sort"), "top help missing --sort");
    assert!(text.contains("--order"), "top help missing --order");
    assert!(text.contains("--json"), "top help missing --json");
    assert!(text.contains("--api-base"), "top help missing global --api-base");
}

#[test]
fn search_takes_a_query() {
    let mut cmd = cargo_bin_cmd!("anidexctl");
    let out = cmd
        .arg("search")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("<QUERY>"), "search help missing QUERY");
}

#[test]
fn subcommands_present() {
    let mut cmd = cargo_bin_cmd!("anidexctl");
    let out = cmd.arg("--help").assert().success().get_output().stdout.clone();
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("top"), "help missing top");
    assert!(text.contains("search"), "help missing search");
}

#[test]
fn unknown_sort_field_is_rejected() {
    let mut cmd = cargo_bin_cmd!("anidexctl");
    cmd.args(["top", "--sort", "popularity"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sort field: popularity"));
}

#[test]
fn out_of_range_limit_fails_before_any_request() {
    let mut cmd = cargo_bin_cmd!("anidexctl");
    cmd.env_remove("ANIDEX_PAGE_LIMIT")
        .args(["--limit", "40", "top"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "page limit must be between 1 and 25",
        ));
}

#[test]
fn limit_flag_wins_over_environment() {
    // Nothing listens on port 1, so the listing falls back to an empty page
    let mut cmd = cargo_bin_cmd!("anidexctl");
    cmd.env("ANIDEX_PAGE_LIMIT", "40")
        .env("ANIDEX_API_BASE", "ftp://stale.example.com")
        .args([
            "--limit",
            "10",
            "--api-base",
            "http://127.0.0.1:1/v4",
            "--timeout-secs",
            "2",
            "top",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No anime found."));
}

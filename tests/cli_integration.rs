use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

// ─── helpers ───────────────────────────────────────────────────────

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create tempdir"),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("hardtimes").expect("binary");
        cmd.current_dir(self.dir.path());
        // Keep plan generation offline and the location unset unless a test
        // opts back in.
        cmd.env_remove("GEMINI_API_KEY");
        cmd.env_remove("HARDTIMES_LAT");
        cmd.env_remove("HARDTIMES_LON");
        cmd
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut a: Vec<&str> = args.to_vec();
        a.push("--json");
        let output = self.cmd().args(&a).output().expect("run");
        let stdout = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("parse JSON failed: {e}\nstdout: {stdout}"))
    }

    fn run_ok(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], true, "expected success=true: {v}");
        v
    }

    fn run_err(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], false, "expected success=false: {v}");
        v
    }

    /// Drive the interactive shell with a scripted stdin; one parsed
    /// envelope per command line.
    fn run_shell(&self, tab: &str, script: &str) -> Vec<Value> {
        let output = self
            .cmd()
            .args(["shell", "--tab", tab, "--json"])
            .write_stdin(script.to_string())
            .output()
            .expect("run shell");
        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("parse JSON line failed: {e}\nline: {l}"))
            })
            .collect()
    }
}

fn group<'a>(envelope: &'a Value, item: &str) -> &'a Value {
    envelope["data"]["groups"]
        .as_array()
        .expect("groups array")
        .iter()
        .find(|g| g["item"] == item)
        .unwrap_or_else(|| panic!("no group for {item}: {envelope}"))
}

fn visible_prices(group: &Value) -> Vec<f64> {
    group["visible"]
        .as_array()
        .expect("visible array")
        .iter()
        .map(|r| r["price"].as_f64().expect("price"))
        .collect()
}

fn report_form(item: &str, price: &str, store: &str, distance: &str) -> String {
    format!("report\n{item}\n{price}\n{store}\n{distance}\n\n")
}

// ─── one-shot board ────────────────────────────────────────────────

#[test]
fn board_ranks_each_item_ascending_by_price() {
    let env = TestEnv::new();
    let v = env.run_ok(&["board"]);
    let eggs = group(&v, "Dozen Eggs");
    assert_eq!(visible_prices(eggs), vec![2.79, 2.99, 3.15]);
    assert_eq!(eggs["total"], 3);
    assert_eq!(eggs["locked"], 0);
}

#[test]
fn board_groups_follow_seed_encounter_order() {
    let env = TestEnv::new();
    let v = env.run_ok(&["board"]);
    let first = &v["data"]["groups"][0];
    assert_eq!(first["item"], "1 Gallon Milk");
    assert_eq!(visible_prices(first), vec![3.89, 3.99]);
}

#[test]
fn board_reports_full_monthly_allowance() {
    let env = TestEnv::new();
    let v = env.run_ok(&["board"]);
    assert_eq!(v["data"]["reports_remaining"], 10);
}

#[test]
fn board_text_mode_marks_the_cheapest_store() {
    let env = TestEnv::new();
    env.cmd()
        .arg("board")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dozen Eggs"))
        .stdout(predicate::str::contains("* SuperMart - $2.79"));
}

// ─── one-shot generate ─────────────────────────────────────────────

#[test]
fn generate_requires_skills_and_time() {
    let env = TestEnv::new();
    let v = env.run_err(&["generate", "--skills", "", "--time", ""]);
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(
        v["error"]["message"],
        "Please fill in your skills and available time."
    );
}

#[test]
fn generate_without_api_key_is_a_config_error() {
    let env = TestEnv::new();
    let v = env.run_err(&["generate", "--skills", "coding", "--time", "evenings"]);
    assert_eq!(v["error"]["code"], "MISSING_API_KEY");
}

// ─── shell: tabs and dispatch ──────────────────────────────────────

#[test]
fn shell_switches_tabs() {
    let env = TestEnv::new();
    let envelopes = env.run_shell("earn", "save\nearn\n");
    assert_eq!(envelopes[0]["data"]["tab"], "save");
    assert_eq!(envelopes[1]["data"]["tab"], "earn");
}

#[test]
fn shell_blocks_module_commands_on_the_wrong_tab() {
    let env = TestEnv::new();
    let envelopes = env.run_shell("earn", "board\n");
    assert_eq!(envelopes[0]["error"]["code"], "TAB_MISMATCH");
    assert!(envelopes[0]["error"]["message"]
        .as_str()
        .unwrap()
        .contains("`save`"));
}

#[test]
fn shell_rejects_unknown_commands() {
    let env = TestEnv::new();
    let envelopes = env.run_shell("earn", "frobnicate\n");
    assert_eq!(envelopes[0]["error"]["code"], "UNKNOWN_COMMAND");
}

#[test]
fn shell_rejects_an_unknown_tab_flag() {
    let env = TestEnv::new();
    let v = env.run_err(&["shell", "--tab", "coupons"]);
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
}

#[test]
fn shell_text_mode_greets_and_says_goodbye() {
    let env = TestEnv::new();
    env.cmd()
        .arg("shell")
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hard Times Toolkit"))
        .stdout(predicate::str::contains("Stay resilient."));
}

// ─── shell: earn tab ───────────────────────────────────────────────

#[test]
fn shell_toggle_without_a_plan_is_an_error() {
    let env = TestEnv::new();
    let envelopes = env.run_shell("earn", "toggle 0\n");
    assert_eq!(envelopes[0]["error"]["code"], "NO_PLAN");
}

#[test]
fn shell_generate_reads_the_form_then_fails_without_a_key() {
    let env = TestEnv::new();
    let envelopes = env.run_shell("earn", "generate\ncoding\nfive hours a week\n\n");
    assert_eq!(envelopes[0]["error"]["code"], "MISSING_API_KEY");
}

#[test]
fn shell_generate_validates_blank_skills_before_any_call() {
    let env = TestEnv::new();
    let envelopes = env.run_shell("earn", "generate\n\nfive hours a week\n\n");
    assert_eq!(envelopes[0]["error"]["code"], "VALIDATION_ERROR");
}

// ─── shell: save tab ───────────────────────────────────────────────

#[test]
fn shell_report_appends_and_spends_the_allowance() {
    let env = TestEnv::new();
    let script = format!(
        "{}board\n",
        report_form("Dozen Eggs", "2.49", "Discount Depot", "1.0")
    );
    let envelopes = env.run_shell("save", &script);

    let submitted = &envelopes[0];
    assert_eq!(submitted["success"], true, "submit failed: {submitted}");
    assert_eq!(submitted["data"]["report"]["id"], 13);
    assert_eq!(submitted["data"]["report"]["distance_km"], 1.0);
    assert_eq!(submitted["data"]["reports_remaining"], 9);

    let eggs = group(&envelopes[1], "Dozen Eggs");
    assert_eq!(eggs["total"], 4);
    assert_eq!(eggs["locked"], 1);
    assert_eq!(visible_prices(eggs), vec![2.49, 2.79, 2.99]);
}

#[test]
fn shell_report_rejects_a_bad_price_without_spending_allowance() {
    let env = TestEnv::new();
    let script = format!(
        "{}{}",
        report_form("Eggs", "abc", "Store", ""),
        report_form("Butter", "3.49", "Grocer A", "")
    );
    let envelopes = env.run_shell("save", &script);
    assert_eq!(envelopes[0]["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(envelopes[1]["data"]["reports_remaining"], 9);
}

#[test]
fn shell_caps_reports_at_ten_per_month() {
    let env = TestEnv::new();
    let mut script = String::new();
    for n in 0..10 {
        script.push_str(&report_form(&format!("Item {n}"), "1.99", "Store", ""));
    }
    // The eleventh attempt is refused before the form is even offered.
    script.push_str("report\n");
    let envelopes = env.run_shell("save", &script);

    assert_eq!(envelopes.len(), 11);
    for envelope in &envelopes[..10] {
        assert_eq!(envelope["success"], true, "unexpected refusal: {envelope}");
    }
    assert_eq!(envelopes[9]["data"]["reports_remaining"], 0);
    assert_eq!(envelopes[10]["error"]["code"], "REPORT_LIMIT_REACHED");
}

#[test]
fn shell_where_reads_coordinates_from_the_environment() {
    let env = TestEnv::new();
    let output = env
        .cmd()
        .args(["shell", "--tab", "save", "--json"])
        .env("HARDTIMES_LAT", "40.7128")
        .env("HARDTIMES_LON", "-74.0060")
        .write_stdin("where\n")
        .output()
        .expect("run shell");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let envelope: Value = serde_json::from_str(stdout.lines().next().expect("one line"))
        .expect("parse envelope");
    assert_eq!(envelope["data"]["location"], "Near lat 40.71, lon -74.01");
}

#[test]
fn shell_where_falls_back_to_access_denied() {
    let env = TestEnv::new();
    let envelopes = env.run_shell("save", "where\n");
    assert_eq!(envelopes[0]["data"]["location"], "Location access denied.");
}

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG")
        .env_remove("EXPENSE_TRACKER_PASSWORD");
    cmd
}

fn login(data_dir: &TempDir, user: &str) {
    expense(data_dir)
        .args(["login", user, "--password", "pw"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Logged in as {}", user)));
}

fn read_store(data_dir: &TempDir) -> serde_json::Value {
    let raw = std::fs::read_to_string(data_dir.path().join("data").join("local_storage.json"))
        .unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_whoami_when_logged_out() {
    let data_dir = TempDir::new().unwrap();
    expense(&data_dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));
}

#[test]
fn test_login_requires_password() {
    let data_dir = TempDir::new().unwrap();
    expense(&data_dir)
        .args(["login", "alice", "--password", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter username and password"));
}

#[test]
fn test_alice_session() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir, "alice");

    expense(&data_dir)
        .args(["expense", "Coffee", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: Coffee (expense) -₹50.00"))
        .stdout(predicate::str::contains("Balance: -₹50.00"));

    expense(&data_dir)
        .args(["add", "Salary", "1000", "--type", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: ₹950.00"));

    let store = read_store(&data_dir);
    assert_eq!(store["loggedUser"], "alice");
    let ledger: serde_json::Value =
        serde_json::from_str(store["transactions_alice"].as_str().unwrap()).unwrap();
    assert_eq!(ledger[0]["name"], "Coffee");
    assert_eq!(ledger[0]["amount"], -50);
    assert_eq!(ledger[0]["type"], "expense");
    assert_eq!(ledger[1]["amount"], 1000);

    let coffee_id = ledger[0]["id"].as_i64().unwrap().to_string();
    expense(&data_dir)
        .args(["delete", &coffee_id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted transaction {}", coffee_id)))
        .stdout(predicate::str::contains("Balance: ₹1000.00"));

    expense(&data_dir)
        .args(["delete", &coffee_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transaction with ID"));

    expense(&data_dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:   +₹1000.00"))
        .stdout(predicate::str::contains("Balance: ₹1000.00"));
}

#[test]
fn test_validation_errors_do_not_change_ledger() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir, "alice");

    expense(&data_dir)
        .args(["add", "", "10", "--type", "income"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    expense(&data_dir)
        .args(["income", "Gift", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid amount"));

    expense(&data_dir)
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn test_logout_blocks_ledger_commands() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir, "alice");

    expense(&data_dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out alice"));

    expense(&data_dir)
        .args(["expense", "Coffee", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No user is logged in"));
}

#[test]
fn test_logout_twice() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir, "alice");

    expense(&data_dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out alice"));

    expense(&data_dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));

    assert!(read_store(&data_dir).get("loggedUser").is_none());
}

#[test]
fn test_users_see_their_own_history() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir, "alice");
    expense(&data_dir)
        .args(["expense", "Coffee", "50"])
        .assert()
        .success();

    login(&data_dir, "bob");
    expense(&data_dir)
        .args(["history", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee").not());

    login(&data_dir, "alice");
    expense(&data_dir)
        .args(["history", "--type", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("Showing 1 of 1 transactions"));
}

#[test]
fn test_export_csv() {
    let data_dir = TempDir::new().unwrap();
    login(&data_dir, "alice");
    expense(&data_dir)
        .args(["income", "Salary", "1000"])
        .assert()
        .success();

    let output = data_dir.path().join("alice.csv");
    expense(&data_dir)
        .args(["export", output.to_str().unwrap(), "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 transactions"));

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.starts_with("ID,Date,Name,Type,Amount\n"));
    assert!(contents.contains(",Salary,income,1000.00"));
}

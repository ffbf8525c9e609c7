use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tallybook_client::commands::{add, export, files, import, purge, transactions};
use tallybook_client::contracts::envelope::failure_from_error;
use tallybook_client::commands::KindFilter;
use tallybook_client::ledger::AmountKind;
use tempfile::tempdir;

const SIMPLE_CSV: &str = "\
date,month,account,payment type,description,reference,expense,revenue
2025-01-05,January,Sales,cash,walk-in,,0,1200
2025-01-09,January,Rent,transfer,office,INV-9,800,0
2025-02-02,February,Sales,cash,retail,,0,300
";

fn temp_home() -> std::io::Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempdir()?;
    let home = dir.path().join("ledger-home");
    fs::create_dir_all(&home)?;
    Ok((dir, home))
}

fn seed_ledger(home: &Path) {
    let csv_path = home.join("seed.csv");
    assert!(fs::write(&csv_path, SIMPLE_CSV).is_ok());
    let response = import::run_with_options(import::ImportOptions {
        paths: vec![csv_path.display().to_string()],
        home_override: Some(home),
    });
    assert!(response.is_ok());
}

fn add_manual_entry(home: &Path, account: &str, amount: f64) {
    let response = add::run(add::AddOptions {
        added_by: "sara".to_string(),
        date: "2025-03-10".to_string(),
        month: "March".to_string(),
        account: account.to_string(),
        payment_type: "cash".to_string(),
        description: "manual entry".to_string(),
        reference: String::new(),
        kind: AmountKind::Expense,
        amount,
        home_override: Some(home),
    });
    assert!(response.is_ok());
}

fn list_with(
    home: &Path,
    month: Option<&str>,
    account: Option<&str>,
    kind: KindFilter,
) -> tallybook_client::ClientResult<tallybook_client::SuccessEnvelope> {
    transactions::list(transactions::ListOptions {
        month: month.map(std::string::ToString::to_string),
        account: account.map(std::string::ToString::to_string),
        kind,
        home_override: Some(home),
    })
}

#[test]
fn add_stamps_the_record_and_appends_it() {
    let home = temp_home();
    assert!(home.is_ok());
    let Ok((_dir, home)) = home else {
        return;
    };

    let response = add::run(add::AddOptions {
        added_by: "  sara  ".to_string(),
        date: "2025-03-10".to_string(),
        month: "march".to_string(),
        account: "Supplies".to_string(),
        payment_type: "cash".to_string(),
        description: "stationery".to_string(),
        reference: String::new(),
        kind: AmountKind::Expense,
        amount: 45.5,
        home_override: Some(home.as_path()),
    });
    assert!(response.is_ok());
    if let Ok(success) = response {
        assert_eq!(success.command, "add");
        assert_eq!(success.data["ledger_total"], 1);
        let record = &success.data["record"];
        assert_eq!(record["month"], "March");
        assert_eq!(record["addedBy"], "sara");
        assert_eq!(record["addedManually"], true);
        assert_eq!(record["expenseAmount"], 45.5);
        assert_eq!(record["revenueAmount"], 0.0);
        let added_at = record["addedAt"].as_str().unwrap_or_default();
        assert!(!added_at.is_empty());
    }
}

#[test]
fn add_rejects_invalid_input_without_touching_the_ledger() {
    let home = temp_home();
    assert!(home.is_ok());
    let Ok((_dir, home)) = home else {
        return;
    };

    let bad_cases = [
        ("", "March", 10.0, "2025-03-10"),
        ("sara", "Marchember", 10.0, "2025-03-10"),
        ("sara", "March", 0.0, "2025-03-10"),
        ("sara", "March", -5.0, "2025-03-10"),
        ("sara", "March", 10.0, "10/03/2025"),
    ];

    for (added_by, month, amount, date) in bad_cases {
        let response = add::run(add::AddOptions {
            added_by: added_by.to_string(),
            date: date.to_string(),
            month: month.to_string(),
            account: "Supplies".to_string(),
            payment_type: "cash".to_string(),
            description: "stationery".to_string(),
            reference: String::new(),
            kind: AmountKind::Expense,
            amount,
            home_override: Some(home.as_path()),
        });
        assert!(response.is_err());
        if let Err(error) = response {
            assert_eq!(error.code, "validation_failed");
        }
    }

    assert!(!home.join("ledger.json").exists());
}

#[test]
fn list_filters_by_month_account_and_kind() {
    let home = temp_home();
    assert!(home.is_ok());
    let Ok((_dir, home)) = home else {
        return;
    };
    seed_ledger(&home);

    let all = list_with(&home, None, None, KindFilter::All);
    assert!(all.is_ok());
    if let Ok(success) = all {
        assert_eq!(success.data["count"], 3);
        assert_eq!(success.data["ledger_total"], 3);
    }

    // month labels match case-insensitively
    let january = list_with(&home, Some("JANUARY"), None, KindFilter::All);
    assert!(january.is_ok());
    if let Ok(success) = january {
        assert_eq!(success.data["count"], 2);
    }

    let sales_revenue = list_with(&home, None, Some("Sales"), KindFilter::Revenue);
    assert!(sales_revenue.is_ok());
    if let Ok(success) = sales_revenue {
        assert_eq!(success.data["count"], 2);
        assert_eq!(success.data["rows"][0]["revenue"], 1200.0);
    }

    let january_expense = list_with(&home, Some("January"), None, KindFilter::Expense);
    assert!(january_expense.is_ok());
    if let Ok(success) = january_expense {
        assert_eq!(success.data["count"], 1);
        assert_eq!(success.data["rows"][0]["account"], "Rent");
    }
}

#[test]
fn purge_manual_removes_only_hand_entered_rows() {
    let home = temp_home();
    assert!(home.is_ok());
    let Ok((_dir, home)) = home else {
        return;
    };
    seed_ledger(&home);
    add_manual_entry(&home, "Supplies", 20.0);
    add_manual_entry(&home, "Travel", 60.0);

    let response = purge::manual_with_home_override(Some(&home));
    assert!(response.is_ok());
    if let Ok(success) = response {
        assert_eq!(success.data["removed"], 2);
        assert_eq!(success.data["remaining"], 3);
    }

    let listed = list_with(&home, None, None, KindFilter::All);
    assert!(listed.is_ok());
    if let Ok(success) = listed {
        assert_eq!(success.data["count"], 3);
    }
}

#[test]
fn purge_all_deletes_ledger_and_history_but_not_the_registry() {
    let home = temp_home();
    assert!(home.is_ok());
    let Ok((_dir, home)) = home else {
        return;
    };
    seed_ledger(&home);

    let response = purge::all_with_home_override(Some(&home));
    assert!(response.is_ok());
    if let Ok(success) = response {
        assert_eq!(success.data["removed"], 3);
        assert_eq!(success.data["remaining"], 0);
    }

    assert!(!home.join("ledger.json").exists());
    assert!(!home.join("history.json").exists());
    assert!(home.join("files.json").exists());

    // the registry still blocks the same file name
    let csv_path = home.join("seed.csv");
    let reimported = import::run_with_options(import::ImportOptions {
        paths: vec![csv_path.display().to_string()],
        home_override: Some(&home),
    });
    assert!(reimported.is_ok());
    if let Ok(success) = reimported {
        assert_eq!(success.data["files_skipped"], 1);
    }
}

#[test]
fn files_list_remove_and_reset_manage_the_registry() {
    let home = temp_home();
    assert!(home.is_ok());
    let Ok((_dir, home)) = home else {
        return;
    };
    seed_ledger(&home);

    let listed = files::list_with_home_override(Some(&home));
    assert!(listed.is_ok());
    if let Ok(success) = listed {
        assert_eq!(success.data["total_files"], 1);
        assert_eq!(success.data["total_rows"], 3);
        assert_eq!(success.data["files"][0]["name"], "seed.csv");
    }

    let missing = files::remove_with_home_override("nope.csv", Some(&home));
    assert!(missing.is_err());
    if let Err(error) = missing {
        assert_eq!(error.code, "file_not_registered");
    }

    let removed = files::remove_with_home_override("seed.csv", Some(&home));
    assert!(removed.is_ok());

    // removing the registration does not touch ledger rows
    let still_there = list_with(&home, None, None, KindFilter::All);
    assert!(still_there.is_ok());
    if let Ok(success) = still_there {
        assert_eq!(success.data["count"], 3);
    }

    seed_ledger(&home);
    let reset = files::reset_with_home_override(Some(&home));
    assert!(reset.is_ok());
    if let Ok(success) = reset {
        assert_eq!(success.data["files_cleared"], 1);
    }

    // reset empties the ledger to an explicit empty document
    let raw = fs::read_to_string(home.join("ledger.json"));
    assert!(raw.is_ok());
    if let Ok(text) = raw {
        let parsed: Result<Vec<Value>, _> = serde_json::from_str(&text);
        assert!(parsed.is_ok());
        if let Ok(rows) = parsed {
            assert!(rows.is_empty());
        }
    }
}

#[test]
fn csv_export_omits_the_manual_flag_and_reimports_cleanly() {
    let home = temp_home();
    assert!(home.is_ok());
    let Ok((_dir, home)) = home else {
        return;
    };
    seed_ledger(&home);
    add_manual_entry(&home, "Supplies", 20.0);

    let out_path = home.join("export.csv");
    let response = export::csv(export::ExportOptions {
        out: out_path.display().to_string(),
        home_override: Some(&home),
    });
    assert!(response.is_ok());
    if let Ok(success) = response {
        assert_eq!(success.data["rows"], 4);
        assert_eq!(success.data["format"], "csv");
    }

    let body = fs::read_to_string(&out_path);
    assert!(body.is_ok());
    if let Ok(text) = body {
        let header = text.lines().next().unwrap_or_default();
        assert_eq!(
            header,
            "Date,Month,Account,Payment Type,Description,Reference,Expense,Revenue,Added By,Added At"
        );
        assert!(!text.contains("addedManually"));
        assert_eq!(text.lines().count(), 5);
    }
}

#[test]
fn json_export_round_trips_every_field() {
    let home = temp_home();
    assert!(home.is_ok());
    let Ok((_dir, home)) = home else {
        return;
    };
    seed_ledger(&home);
    add_manual_entry(&home, "Supplies", 20.0);

    let out_path = home.join("export.json");
    let response = export::json(export::ExportOptions {
        out: out_path.display().to_string(),
        home_override: Some(&home),
    });
    assert!(response.is_ok());

    let exported = fs::read_to_string(&out_path);
    let original = fs::read_to_string(home.join("ledger.json"));
    assert!(exported.is_ok());
    assert!(original.is_ok());
    if let (Ok(exported), Ok(original)) = (exported, original) {
        let exported_value: Result<Value, _> = serde_json::from_str(&exported);
        let original_value: Result<Value, _> = serde_json::from_str(&original);
        assert!(exported_value.is_ok());
        assert!(original_value.is_ok());
        if let (Ok(exported_value), Ok(original_value)) = (exported_value, original_value) {
            assert_eq!(exported_value, original_value);
            assert_eq!(exported_value[3]["addedManually"], true);
        }
    }
}

#[test]
fn corrupt_ledger_document_is_reported_not_replaced() {
    let home = temp_home();
    assert!(home.is_ok());
    let Ok((_dir, home)) = home else {
        return;
    };
    assert!(fs::write(home.join("ledger.json"), "{not json").is_ok());

    let response = list_with(&home, None, None, KindFilter::All);
    assert!(response.is_err());
    if let Err(error) = response {
        assert_eq!(error.code, "ledger_corrupt");
        let envelope = failure_from_error(&error);
        assert!(!envelope.ok);
        assert_eq!(envelope.error.code, "ledger_corrupt");
        assert!(!envelope.error.recovery_steps.is_empty());
    }

    // the broken document is left in place for manual recovery
    let raw = fs::read_to_string(home.join("ledger.json"));
    assert!(raw.is_ok());
    if let Ok(text) = raw {
        assert_eq!(text, "{not json");
    }
}

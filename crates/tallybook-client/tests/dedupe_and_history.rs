use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tallybook_client::audit::AuditLog;
use tallybook_client::commands::{dedupe, history};
use tallybook_client::setup;
use tempfile::tempdir;

const DUPLICATED_CSV: &str = "\
date,month,account,payment type,description,reference,expense,revenue
2025-01-01,January,Bank,cash,deposit a,,0,500
2025-01-01,January,Bank,transfer,deposit b,,0,500
2025-01-01,January,Bank,cash,deposit c,,0,500
2025-01-02,January,Sales,cash,unique,,0,75
";

fn temp_home() -> std::io::Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempdir()?;
    let home = dir.path().join("ledger-home");
    fs::create_dir_all(&home)?;
    Ok((dir, home))
}

fn seed_duplicates(home: &Path) {
    let csv_path = home.join("dupes.csv");
    assert!(fs::write(&csv_path, DUPLICATED_CSV).is_ok());
    let response = tallybook_client::commands::import::run_with_options(
        tallybook_client::commands::import::ImportOptions {
            paths: vec![csv_path.display().to_string()],
            home_override: Some(home),
        },
    );
    assert!(response.is_ok());
}

#[test]
fn find_reports_every_member_of_a_collision_group() {
    let home = temp_home();
    assert!(home.is_ok());
    let Ok((_dir, home)) = home else {
        return;
    };
    seed_duplicates(&home);

    let response = dedupe::find_with_home_override(Some(&home));
    assert!(response.is_ok());
    if let Ok(success) = response {
        // all three rows sharing (2025-01-01, Bank, 0, 500), not just the extras
        assert_eq!(success.data["total"], 3);
        let rows = success.data["rows"].as_array().cloned().unwrap_or_default();
        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(row["account"], "Bank");
            assert_eq!(row["revenue"], 500.0);
        }
        // payment type does not participate in the key
        assert_eq!(rows[1]["payment_type"], "transfer");
    }
}

#[test]
fn remove_keeps_the_first_row_of_each_group() {
    let home = temp_home();
    assert!(home.is_ok());
    let Ok((_dir, home)) = home else {
        return;
    };
    seed_duplicates(&home);

    let response = dedupe::remove_with_home_override(Some(&home));
    assert!(response.is_ok());
    if let Ok(success) = response {
        assert_eq!(success.data["removed"], 2);
        assert_eq!(success.data["remaining"], 2);
    }

    let raw = fs::read_to_string(home.join("ledger.json"));
    assert!(raw.is_ok());
    if let Ok(text) = raw {
        let parsed: Result<Vec<Value>, _> = serde_json::from_str(&text);
        assert!(parsed.is_ok());
        if let Ok(rows) = parsed {
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0]["description"], "deposit a");
            assert_eq!(rows[1]["description"], "unique");
        }
    }

    // after the first pass nothing more is removed
    let second = dedupe::remove_with_home_override(Some(&home));
    assert!(second.is_ok());
    if let Ok(success) = second {
        assert_eq!(success.data["removed"], 0);
        assert_eq!(success.data["remaining"], 2);
    }
}

#[test]
fn remove_on_a_clean_ledger_records_no_audit_entry() {
    let home = temp_home();
    assert!(home.is_ok());
    let Ok((_dir, home)) = home else {
        return;
    };

    let response = dedupe::remove_with_home_override(Some(&home));
    assert!(response.is_ok());

    let shown = history::show_with_home_override(Some(&home));
    assert!(shown.is_ok());
    if let Ok(success) = shown {
        assert_eq!(success.data["total"], 0);
    }
}

#[test]
fn history_is_newest_first_and_capped_at_one_hundred() {
    let home = temp_home();
    assert!(home.is_ok());
    let Ok((_dir, home)) = home else {
        return;
    };
    let context = setup::ensure_initialized_at(&home);
    assert!(context.is_ok());
    let Ok(context) = context else {
        return;
    };

    let audit = AuditLog::new(&context.history_path);
    for index in 0..101 {
        let result = audit.record("file loaded", &format!("Loaded file number {index}"));
        assert!(result.is_ok());
    }

    let shown = history::show_with_home_override(Some(&home));
    assert!(shown.is_ok());
    if let Ok(success) = shown {
        assert_eq!(success.data["total"], 100);
        let entries = success.data["entries"]
            .as_array()
            .cloned()
            .unwrap_or_default();
        assert_eq!(entries.len(), 100);
        // newest entry first, the very first entry evicted
        assert_eq!(entries[0]["details"], "Loaded file number 100");
        assert_eq!(entries[99]["details"], "Loaded file number 1");
    }
}

#[test]
fn history_clear_leaves_an_empty_document() {
    let home = temp_home();
    assert!(home.is_ok());
    let Ok((_dir, home)) = home else {
        return;
    };
    seed_duplicates(&home);

    let cleared = history::clear_with_home_override(Some(&home));
    assert!(cleared.is_ok());

    let shown = history::show_with_home_override(Some(&home));
    assert!(shown.is_ok());
    if let Ok(success) = shown {
        assert_eq!(success.data["total"], 0);
    }

    // cleared, not deleted: the document is an explicit empty array
    let raw = fs::read_to_string(home.join("history.json"));
    assert!(raw.is_ok());
    if let Ok(text) = raw {
        let parsed: Result<Vec<Value>, _> = serde_json::from_str(&text);
        assert!(parsed.is_ok());
        if let Ok(entries) = parsed {
            assert!(entries.is_empty());
        }
    }
}

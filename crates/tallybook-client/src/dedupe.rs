use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::ledger::TransactionRecord;

/// Composite natural key for duplicate detection. Amounts are keyed by bit
/// pattern with zero normalized, so 0.0 and -0.0 collide; a null date is a
/// key value like any other.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
struct DedupeKey {
    date: Option<NaiveDate>,
    account: String,
    expense_bits: u64,
    revenue_bits: u64,
}

fn dedupe_key(record: &TransactionRecord) -> DedupeKey {
    DedupeKey {
        date: record.date,
        account: record.account.clone(),
        expense_bits: amount_bits(record.expense_amount),
        revenue_bits: amount_bits(record.revenue_amount),
    }
}

fn amount_bits(amount: f64) -> u64 {
    if amount == 0.0 { 0.0f64 } else { amount }.to_bits()
}

/// Returns every record participating in a collision, in original ledger
/// order: the whole group, not just the extras beyond the first.
pub fn find_duplicates(records: &[TransactionRecord]) -> Vec<&TransactionRecord> {
    let mut counts: HashMap<DedupeKey, usize> = HashMap::new();
    for record in records {
        *counts.entry(dedupe_key(record)).or_insert(0) += 1;
    }

    records
        .iter()
        .filter(|record| counts.get(&dedupe_key(record)).copied().unwrap_or(0) > 1)
        .collect()
}

/// Keeps the first-encountered record per collision group and drops the rest.
/// Asymmetric with [`find_duplicates`] on purpose: display shows the whole
/// group, removal keeps one member.
pub fn remove_duplicates(
    records: Vec<TransactionRecord>,
) -> (Vec<TransactionRecord>, usize) {
    let before = records.len();
    let mut seen: HashSet<DedupeKey> = HashSet::new();
    let mut kept = Vec::with_capacity(before);

    for record in records {
        if seen.insert(dedupe_key(&record)) {
            kept.push(record);
        }
    }

    let removed = before - kept.len();
    (kept, removed)
}

use serde::Serialize;

use crate::ledger::{AmountKind, TransactionRecord};

/// Canonical display ordering for month labels, independent of data arrival
/// order.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn month_rank(label: &str) -> Option<usize> {
    MONTH_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(label.trim()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total_revenue: f64,
    pub total_expense: f64,
    pub net_profit: f64,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRollup {
    pub month: String,
    pub revenue: f64,
    pub expense: f64,
    pub net_profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

pub fn summarize(records: &[TransactionRecord]) -> SummaryStats {
    let total_revenue: f64 = records.iter().map(|record| record.revenue_amount).sum();
    let total_expense: f64 = records.iter().map(|record| record.expense_amount).sum();

    SummaryStats {
        total_revenue,
        total_expense,
        net_profit: total_revenue - total_expense,
        transaction_count: records.len(),
    }
}

/// Groups by the operator-supplied `month` label. Canonical months come first
/// in calendar order; unrecognized labels follow in first-appearance order.
/// Months with no records are omitted rather than zero-filled.
pub fn monthly_rollup(records: &[TransactionRecord]) -> Vec<MonthlyRollup> {
    let mut order: Vec<String> = Vec::new();
    let mut rollups: Vec<MonthlyRollup> = Vec::new();

    for record in records {
        let label = record.month.trim();
        if label.is_empty() {
            continue;
        }

        let position = order
            .iter()
            .position(|existing| existing.eq_ignore_ascii_case(label));
        let index = match position {
            Some(index) => index,
            None => {
                order.push(label.to_string());
                rollups.push(MonthlyRollup {
                    month: label.to_string(),
                    revenue: 0.0,
                    expense: 0.0,
                    net_profit: 0.0,
                });
                order.len() - 1
            }
        };

        rollups[index].revenue += record.revenue_amount;
        rollups[index].expense += record.expense_amount;
    }

    for rollup in &mut rollups {
        rollup.net_profit = rollup.revenue - rollup.expense;
    }

    let mut indexed: Vec<(usize, MonthlyRollup)> = rollups.into_iter().enumerate().collect();
    indexed.sort_by_key(|(appearance, rollup)| match month_rank(&rollup.month) {
        Some(rank) => (0, rank, *appearance),
        None => (1, 0, *appearance),
    });

    indexed.into_iter().map(|(_, rollup)| rollup).collect()
}

/// Per-account totals for one amount side, positive rows only, largest first.
pub fn top_categories(
    records: &[TransactionRecord],
    kind: AmountKind,
    limit: usize,
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for record in records {
        let amount = kind.amount_of(record);
        if amount <= 0.0 {
            continue;
        }

        let account = record.account.trim();
        if account.is_empty() {
            continue;
        }

        match totals
            .iter_mut()
            .find(|total| total.category == account)
        {
            Some(total) => total.amount += amount,
            None => totals.push(CategoryTotal {
                category: account.to_string(),
                amount,
            }),
        }
    }

    totals.sort_by(|left, right| {
        right
            .amount
            .total_cmp(&left.amount)
            .then_with(|| left.category.cmp(&right.category))
    });
    totals.truncate(limit);
    totals
}

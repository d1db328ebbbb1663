//! Per-person totals for settlement sheets.

use rust_decimal::Decimal;

use crate::error::{SettlementError, SettlementResult};
use crate::models::{DailyRecord, PersonSummary};

/// Sums each person's daily records into a [`PersonSummary`].
///
/// Summaries follow the order in which each person first appears in
/// `records`; pass sorted records to get summaries in person order. Only
/// figures already on the records are added up.
pub fn summarize_by_person(records: &[DailyRecord]) -> SettlementResult<Vec<PersonSummary>> {
    let mut summaries: Vec<PersonSummary> = Vec::new();

    for record in records {
        let position = summaries.iter().position(|s| s.person == record.person());
        let summary = match position {
            Some(i) => &mut summaries[i],
            None => {
                summaries.push(PersonSummary {
                    person: record.person().to_string(),
                    days: 0,
                    total_distance: Decimal::ZERO,
                    transportation_fee: 0,
                    allowance: 0,
                    total: 0,
                });
                let last = summaries.len() - 1;
                &mut summaries[last]
            }
        };

        add_record(summary, record).ok_or_else(|| SettlementError::CalculationError {
            message: format!("totals overflow for {}", record.person()),
        })?;
    }

    Ok(summaries)
}

fn add_record(summary: &mut PersonSummary, record: &DailyRecord) -> Option<()> {
    summary.days += 1;
    summary.total_distance = summary.total_distance.checked_add(record.total_distance())?;
    summary.transportation_fee = summary
        .transportation_fee
        .checked_add(record.transportation_fee())?;
    summary.allowance = summary.allowance.checked_add(record.allowance())?;
    summary.total = summary.total.checked_add(record.total())?;
    Some(())
}

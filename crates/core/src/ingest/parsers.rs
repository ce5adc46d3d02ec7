//! Positional parsers for the published workbook layout.
//!
//! Tab layouts (labels in column 0 are informational, values live in
//! column 1 unless noted):
//!
//! - Summary tab, one value per row: total assets, total debt, net
//!   worth, prior net worth, baseline net worth, monthly income,
//!   monthly expense, monthly savings (optional).
//! - Portfolio tab, one line item per row: owner, category, amount,
//!   liquidity flag, color (optional). A leading header row is skipped.
//! - Month tabs (`YY.MM` titles): net worth, then optionally fixed
//!   income, variable income, fixed expense, variable expense, savings.

use rust_decimal::Decimal;

use tandem_sheets::SheetTable;

use crate::cash_flow::MonthlyCashFlowRecord;
use crate::errors::{Error, Result, ValidationError};
use crate::period::Period;
use crate::portfolio::{NetWorthSample, PortfolioLineItem};
use crate::snapshot::FinancialSnapshot;

// Summary tab rows
const ROW_TOTAL_ASSETS: usize = 0;
const ROW_TOTAL_DEBT: usize = 1;
const ROW_NET_WORTH: usize = 2;
const ROW_PRIOR_NET_WORTH: usize = 3;
const ROW_BASELINE_NET_WORTH: usize = 4;
const ROW_MONTHLY_INCOME: usize = 5;
const ROW_MONTHLY_EXPENSE: usize = 6;
const ROW_MONTHLY_SAVINGS: usize = 7;

// Portfolio tab columns
const COL_OWNER: usize = 0;
const COL_CATEGORY: usize = 1;
const COL_AMOUNT: usize = 2;
const COL_LIQUID: usize = 3;
const COL_COLOR: usize = 4;

// Month tab rows
const ROW_MONTH_NET_WORTH: usize = 0;
const ROW_FIXED_INCOME: usize = 1;
const ROW_VARIABLE_INCOME: usize = 2;
const ROW_FIXED_EXPENSE: usize = 3;
const ROW_VARIABLE_EXPENSE: usize = 4;
const ROW_MONTH_SAVINGS: usize = 5;

/// Parses a currency cell, tolerating thousands separators and the
/// source's currency decorations.
fn parse_amount(raw: &str) -> std::result::Result<Decimal, ValidationError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ',' | '₩' | '원'))
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Err(ValidationError::InvalidAmount(raw.to_string()));
    }

    cleaned
        .parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidAmount(raw.to_string()))
}

/// Interprets the liquidity column. Anything other than an affirmative
/// marker is non-liquid.
fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "true" | "1"
    )
}

fn required_amount(table: &SheetTable, row: usize) -> Result<Decimal> {
    let cell = table
        .cell(row, 1)
        .ok_or_else(|| Error::unavailable(table.title.as_str(), format!("missing value in row {}", row)))?;
    parse_amount(cell).map_err(|e| Error::unavailable(table.title.as_str(), e))
}

fn optional_amount(table: &SheetTable, row: usize) -> Result<Option<Decimal>> {
    match table.cell(row, 1) {
        None => Ok(None),
        Some(cell) => parse_amount(cell)
            .map(Some)
            .map_err(|e| Error::unavailable(table.title.as_str(), e)),
    }
}

/// Converts the summary tab into a [`FinancialSnapshot`].
///
/// The snapshot's period is supplied by the caller (the latest month
/// tab); the summary tab itself carries no period label.
pub fn parse_snapshot(table: &SheetTable, period: Period) -> Result<FinancialSnapshot> {
    Ok(FinancialSnapshot {
        period,
        total_assets: required_amount(table, ROW_TOTAL_ASSETS)?,
        total_debt: required_amount(table, ROW_TOTAL_DEBT)?,
        net_worth: required_amount(table, ROW_NET_WORTH)?,
        prior_net_worth: required_amount(table, ROW_PRIOR_NET_WORTH)?,
        baseline_net_worth: required_amount(table, ROW_BASELINE_NET_WORTH)?,
        monthly_income: required_amount(table, ROW_MONTHLY_INCOME)?,
        monthly_expense: required_amount(table, ROW_MONTHLY_EXPENSE)?,
        monthly_savings: optional_amount(table, ROW_MONTHLY_SAVINGS)?,
    })
}

/// Converts the portfolio tab into line items.
///
/// Liquidity becomes an explicit flag here; nothing downstream matches
/// category labels. Category cells are trimmed, since the source data
/// carries stray trailing spaces.
pub fn parse_portfolio(table: &SheetTable) -> Result<Vec<PortfolioLineItem>> {
    let mut items = Vec::new();

    for (row_idx, _) in table.rows.iter().enumerate() {
        let amount_cell = match table.cell(row_idx, COL_AMOUNT) {
            Some(cell) => cell,
            None => continue, // blank row
        };

        // A leading header row has a non-numeric amount cell.
        if row_idx == 0 && parse_amount(amount_cell).is_err() {
            continue;
        }

        let owner = table.cell(row_idx, COL_OWNER).ok_or_else(|| {
            Error::unavailable(table.title.as_str(), format!("missing owner in row {}", row_idx))
        })?;
        let category = table.cell(row_idx, COL_CATEGORY).ok_or_else(|| {
            Error::unavailable(table.title.as_str(), format!("missing category in row {}", row_idx))
        })?;
        let amount = parse_amount(amount_cell).map_err(|e| Error::unavailable(table.title.as_str(), e))?;
        let is_liquid = table.cell(row_idx, COL_LIQUID).map_or(false, parse_flag);
        let color = table.cell(row_idx, COL_COLOR).map(|c| c.to_string());

        items.push(PortfolioLineItem {
            owner: owner.to_string(),
            category: category.to_string(),
            amount,
            is_liquid,
            color,
        });
    }

    Ok(items)
}

/// Converts a `YY.MM` month tab into a net-worth sample and, when the
/// tab carries the income/expense rows, a cash-flow record.
pub fn parse_month_tab(
    table: &SheetTable,
) -> Result<(NetWorthSample, Option<MonthlyCashFlowRecord>)> {
    let period: Period = table
        .title
        .parse()
        .map_err(|e: ValidationError| Error::unavailable(table.title.as_str(), e))?;

    let sample = NetWorthSample {
        period,
        net_worth: required_amount(table, ROW_MONTH_NET_WORTH)?,
    };

    let flows = [
        optional_amount(table, ROW_FIXED_INCOME)?,
        optional_amount(table, ROW_VARIABLE_INCOME)?,
        optional_amount(table, ROW_FIXED_EXPENSE)?,
        optional_amount(table, ROW_VARIABLE_EXPENSE)?,
    ];

    let cash_flow = match flows {
        [Some(fixed_income), Some(variable_income), Some(fixed_expense), Some(variable_expense)] => {
            Some(MonthlyCashFlowRecord {
                period,
                fixed_income,
                variable_income,
                fixed_expense,
                variable_expense,
                savings: optional_amount(table, ROW_MONTH_SAVINGS)?,
            })
        }
        [None, None, None, None] => None,
        _ => {
            return Err(Error::unavailable(
                table.title.as_str(),
                "partial cash-flow rows (expected all four income/expense values)",
            ))
        }
    };

    Ok((sample, cash_flow))
}

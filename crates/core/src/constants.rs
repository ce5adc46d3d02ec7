/// Owner id of the synthetic total row in ownership breakdowns
pub const OWNERSHIP_TOTAL_ID: &str = "TOTAL";

/// Decimal precision for percentage shares
pub const PERCENT_PRECISION: u32 = 2;

/// Default trend bucket size: ten-thousand currency units
pub const DEFAULT_TREND_BUCKET: i64 = 10_000;

/// Time-to-live for fetched workbook data, in seconds
pub const SHEET_CACHE_TTL_SECS: i64 = 300;

//! Monthly cash-flow module.

mod cash_flow_model;

pub use cash_flow_model::MonthlyCashFlowRecord;

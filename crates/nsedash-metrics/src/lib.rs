//! Derived price metrics for the nsedash stock dashboard.
//!
//! Every metric is a pure function of a [`TimeSeries`](nsedash_types::TimeSeries)
//! and is recomputed from the fetched history on each use:
//!
//! - [`daily_change`] - Change between the last two closes
//! - [`rolling_average`] - Trailing simple moving average of close
//! - [`period_return`] - First-to-last close return
//! - [`normalize`] - Closes rebased to 100
//! - [`DashboardReport`] - All sections for one stock and period

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/nsedash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod average;
mod change;
mod report;
mod returns;

pub use average::{DEFAULT_WINDOWS, MovingAverage, moving_averages, rolling_average};
pub use change::{DailyChange, daily_change, intraday_change};
pub use report::{
    Comparison, DashboardReport, IndexOverview, KeyMetrics, ReportRow, average_column, compare,
};
pub use returns::{NORMALIZED_BASE, normalize, period_return};

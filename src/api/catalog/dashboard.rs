//! Dashboard aggregates and reports.
//!
//! Filters travel as query-string parameters, not as a body.

use crate::api::client::{segment, ApiClient};
use crate::api::envelope::ApiResponse;
use crate::api::transport::Transport;
use crate::api::types::{DashboardPeriod, ReportQuery};

/// Totals (revenue, orders, vendors, customers) for a period.
pub async fn dashboard_summary<T: Transport>(
    client: &ApiClient<T>,
    period: DashboardPeriod,
) -> ApiResponse {
    client
        .authenticated_get_with_query(
            "/dashboard/summary",
            &[("period", Some(period.to_string()))],
        )
        .await
}

/// Sales series for the dashboard chart.
pub async fn sales_chart<T: Transport>(
    client: &ApiClient<T>,
    period: DashboardPeriod,
) -> ApiResponse {
    client
        .authenticated_get_with_query("/dashboard/sales", &[("period", Some(period.to_string()))])
        .await
}

/// Monthly sales and commission report, optionally for a single vendor.
pub async fn monthly_report<T: Transport>(
    client: &ApiClient<T>,
    query: &ReportQuery,
) -> ApiResponse {
    client
        .authenticated_get_with_query(
            "/dashboard/report",
            &[
                ("month", Some(query.month.clone())),
                ("vendorId", query.vendor_id.clone()),
            ],
        )
        .await
}

pub async fn vendor_dashboard<T: Transport>(
    client: &ApiClient<T>,
    vendor_id: &str,
    period: DashboardPeriod,
) -> ApiResponse {
    client
        .authenticated_get_with_query(
            &format!("/dashboard/vendor/{}", segment(vendor_id)),
            &[("period", Some(period.to_string()))],
        )
        .await
}

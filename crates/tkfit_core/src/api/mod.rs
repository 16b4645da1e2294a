pub mod dashboard_json;

pub use dashboard_json::{
    build_dashboard, build_dashboard_json, dashboard_from_request, DashboardRequest,
    DashboardResponse,
};

//! Dashboard JSON API
//!
//! One request in, one plot-ready document out: summary, key events, pitch
//! overlay and static markings for the selected period.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::{
    detect_key_events, EventDetectionConfig, KeyEvent, SessionSummary, SummaryConfig,
};
use crate::config::{GeneratorConfig, ProjectionConfig};
use crate::error::{Result, TelemetryError};
use crate::filter::{PlayerPosition, SessionFilter};
use crate::generator::SeriesGenerator;
use crate::models::SessionData;
use crate::pitch::{FieldGeometry, PitchMarking};
use crate::projection::{FieldProjector, PitchPoint, ProjectedHotSpot};
use crate::SCHEMA_VERSION;

fn default_schema_version() -> u8 {
    SCHEMA_VERSION
}

fn default_stride() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    /// Overrides `generator.seed` when present
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// `None` analyses the whole session
    #[serde(default)]
    pub filter: Option<SessionFilter>,
    #[serde(default)]
    pub projection: ProjectionConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
    #[serde(default)]
    pub events: EventDetectionConfig,
    /// Keep every n-th trajectory point (기본: 5)
    #[serde(default = "default_stride")]
    pub trajectory_stride: usize,
}

impl Default for DashboardRequest {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            seed: None,
            generator: GeneratorConfig::default(),
            filter: None,
            projection: ProjectionConfig::default(),
            summary: SummaryConfig::default(),
            events: EventDetectionConfig::default(),
            trajectory_stride: default_stride(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct DashboardResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub fingerprint: String,
    pub position: PlayerPosition,
    pub period_minutes: (f64, f64),
    pub summary: SessionSummary,
    pub key_events: Vec<KeyEvent>,
    pub trajectory: Vec<PitchPoint>,
    pub hot_spots: Vec<ProjectedHotSpot>,
    pub markings: Vec<PitchMarking>,
}

/// Build the dashboard document for an already generated session.
pub fn build_dashboard(session: &SessionData, request: &DashboardRequest) -> Result<DashboardResponse> {
    let filter = request.filter.unwrap_or_else(SessionFilter::full_match);
    let window = filter.apply(session)?;

    let summary = SessionSummary::from_samples(window, &request.summary)?;
    let key_events = detect_key_events(window, &request.events);

    // origin from the whole session so a period view does not shift the pitch
    let projector = FieldProjector::new(request.projection)?;
    let origin = FieldProjector::origin(&session.trajectory())?;
    let trajectory: Vec<_> = window.iter().map(|s| s.position()).collect();
    let projection = projector.project_with_origin(origin, &trajectory, &session.hot_spots);
    let thinned = projection.every_nth(request.trajectory_stride)?;

    let geometry = FieldGeometry {
        length_m: request.projection.field_length_m,
        width_m: request.projection.field_width_m,
        ..FieldGeometry::standard()
    };

    let (from, to) = filter.period_minutes;
    let period_minutes = (from, to.min(session.last_sample_minute()));

    debug!(
        window = window.len(),
        key_events = key_events.len(),
        points = thinned.len(),
        "dashboard assembled"
    );

    Ok(DashboardResponse {
        schema_version: SCHEMA_VERSION,
        seed: session.seed,
        fingerprint: session.fingerprint()?,
        position: filter.position,
        period_minutes,
        summary,
        key_events,
        trajectory: thinned,
        hot_spots: projection.hot_spots,
        markings: geometry.markings(),
    })
}

/// Generate a session from `request` and build its dashboard.
pub fn dashboard_from_request(request: &DashboardRequest) -> Result<DashboardResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(TelemetryError::config(format!(
            "Unsupported schema version: {}",
            request.schema_version
        )));
    }

    let mut config = request.generator.clone();
    if let Some(seed) = request.seed {
        config.seed = seed;
    }

    let session = SeriesGenerator::new(config)?.generate()?;
    build_dashboard(&session, request)
}

/// JSON in, JSON out form of [`dashboard_from_request`].
pub fn build_dashboard_json(request_json: &str) -> Result<String> {
    let request: DashboardRequest = serde_json::from_str(request_json)?;
    info!(seed = ?request.seed, filtered = request.filter.is_some(), "dashboard request");

    let response = dashboard_from_request(&request)?;
    Ok(serde_json::to_string(&response)?)
}

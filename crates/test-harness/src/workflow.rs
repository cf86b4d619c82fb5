//! `OverlayBench`: a fluent API for scripting photo overlays in tests.
//!
//! Drives the real `PhotoCompositor` against a `RecordingCanvas`, so every
//! scenario exercises the production drawing path without rasterizing.

use analysis_format::{load_analysis, Analysis};
use claw_canvas::{Photo, RecordingCanvas, Snapshot};
use claw_render::{GripperRenderMode, OverlayConfig, OverlayPlan, PhotoCompositor};
use claw_types::{AnchorPoint, BBox, CameraHint, Direction, Point2, Step};

use crate::helpers::*;
use crate::oracle::{self, OracleVerdict};
use crate::report::TraceReport;

/// A fluent builder for composing and checking photo overlays in tests.
pub struct OverlayBench {
    photo_png: Vec<u8>,
    photo: Photo,
    steps: Vec<Step>,
    hint: Option<CameraHint>,
    config: OverlayConfig,
    canvas: RecordingCanvas,
    plan: Option<OverlayPlan>,
    history: Vec<String>,
}

impl OverlayBench {
    /// A bench over a uniform gray photo of `width` x `height`.
    pub fn new(width: u32, height: u32) -> Result<Self, HarnessError> {
        Self::with_photo(solid_photo_png(width, height, [90, 90, 100, 255])?)
    }

    /// A bench over arbitrary encoded photo bytes.
    pub fn with_photo(photo_png: Vec<u8>) -> Result<Self, HarnessError> {
        let photo = Photo::decode(&photo_png)?;
        let canvas = RecordingCanvas::new(photo.width() as f64, photo.height() as f64);
        Ok(Self {
            photo_png,
            photo,
            steps: Vec::new(),
            hint: None,
            config: OverlayConfig::default(),
            canvas,
            plan: None,
            history: Vec::new(),
        })
    }

    /// Load steps and camera hint from an analysis JSON document.
    pub fn load(&mut self, json: &str) -> Result<Analysis, HarnessError> {
        let analysis = load_analysis(json)?;
        self.steps = analysis.steps.clone();
        self.hint = analysis.camera_hint;
        self.history.push(format!("load {} steps", self.steps.len()));
        Ok(analysis)
    }

    pub fn with_config(mut self, config: OverlayConfig) -> Self {
        self.config = config;
        self
    }

    // ── Step Scripting ──────────────────────────────────────────────────

    /// Append a step targeting `(x%, y%)`.
    pub fn step(&mut self, x_percent: f64, y_percent: f64, action: &str) -> &mut Self {
        let index = self.steps.len() + 1;
        self.steps
            .push(Step::new(index, action, AnchorPoint::new(x_percent, y_percent)));
        self.history.push(format!("step {index} at ({x_percent}, {y_percent})"));
        self
    }

    /// Set the direction of the most recent step.
    pub fn direction(&mut self, direction: Direction) -> &mut Self {
        if let Some(last) = self.steps.last_mut() {
            last.direction = direction;
        }
        self
    }

    /// Give the most recent step a source box, in percent.
    pub fn source_bbox(&mut self, x: f64, y: f64, w: f64, h: f64) -> &mut Self {
        if let Some(last) = self.steps.last_mut() {
            last.source_bbox = Some(BBox::new(x, y, w, h));
        }
        self
    }

    pub fn hint(&mut self, horizontal_deg: f64, vertical_deg: f64) -> &mut Self {
        self.hint = Some(CameraHint::new(horizontal_deg, vertical_deg));
        self
    }

    // ── Composition ─────────────────────────────────────────────────────

    fn compositor(&self) -> PhotoCompositor {
        PhotoCompositor::new(self.config)
    }

    fn fresh_canvas(&mut self) {
        self.canvas = RecordingCanvas::new(self.photo.width() as f64, self.photo.height() as f64);
    }

    /// Compose the single-move overlay for `steps[active]`.
    pub fn compose(&mut self, active: usize) -> Result<&OverlayPlan, HarnessError> {
        self.fresh_canvas();
        let plan = self.compositor().compose_on(
            &mut self.canvas,
            &self.photo,
            &self.steps,
            active,
            self.hint.as_ref(),
        );
        self.history.push(format!("compose step {active}: {:?}", plan.mode));
        Ok(self.plan.insert(plan))
    }

    /// Compose the all-steps overview.
    pub fn compose_overview(&mut self) -> Result<&OverlayPlan, HarnessError> {
        self.fresh_canvas();
        let plan = self
            .compositor()
            .compose_overview_on(&mut self.canvas, &self.photo, &self.steps);
        self.history.push(format!("overview of {} steps", self.steps.len()));
        Ok(self.plan.insert(plan))
    }

    /// Rasterize `steps[active]` through the byte-level entry point.
    pub fn rasterize(&self, active: usize) -> Result<Snapshot, HarnessError> {
        Ok(self
            .compositor()
            .try_compose(&self.photo_png, &self.steps, active, self.hint.as_ref())?)
    }

    // ── Inspection ──────────────────────────────────────────────────────

    pub fn canvas(&self) -> &RecordingCanvas {
        &self.canvas
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn plan(&self) -> Result<&OverlayPlan, HarnessError> {
        self.plan.as_ref().ok_or_else(|| HarnessError::NotComposed {
            context: self.history.join(" -> "),
        })
    }

    /// Resolved target of step `index` (zero-based).
    pub fn target(&self, index: usize) -> Result<Point2, HarnessError> {
        let plan = self.plan()?;
        plan.targets
            .get(index)
            .copied()
            .ok_or_else(|| HarnessError::AssertionFailed {
                detail: format!("no target {index}, only {}", plan.targets.len()),
            })
    }

    pub fn size(&self) -> (f64, f64) {
        (self.photo.width() as f64, self.photo.height() as f64)
    }

    // ── Checks ──────────────────────────────────────────────────────────

    pub fn run_oracles(&self) -> Result<Vec<OracleVerdict>, HarnessError> {
        let (w, h) = self.size();
        Ok(oracle::run_overlay_oracles(&self.canvas, &self.plan()?.targets, w, h))
    }

    /// Fail with the first failing oracle, if any.
    pub fn assert_oracles_pass(&self) -> Result<(), HarnessError> {
        match self.run_oracles()?.into_iter().find(|v| !v.passed) {
            Some(v) => Err(HarnessError::OracleFailure {
                oracle: v.oracle_name,
                detail: v.detail,
            }),
            None => Ok(()),
        }
    }

    pub fn assert_mode(&self, expected: Option<GripperRenderMode>) -> Result<(), HarnessError> {
        let actual = self.plan()?.mode;
        if actual == expected {
            Ok(())
        } else {
            Err(HarnessError::AssertionFailed {
                detail: format!("expected mode {expected:?}, got {actual:?}"),
            })
        }
    }

    pub fn report(&self) -> TraceReport {
        let mut report = TraceReport::from_canvas(&self.canvas);
        if let Ok(verdicts) = self.run_oracles() {
            report.oracle_results = verdicts;
        }
        report
    }
}

//! Test harness for the guidance renderers.
//!
//! Scripts overlay and diagram scenarios against the recording canvas,
//! checks the geometric guarantees at every step, and produces readable
//! reports of what was drawn.
//!
//! # Key Components
//!
//! - [`OverlayBench`]: Fluent API for building and checking photo overlays
//! - [`oracle`]: Verification functions returning pass/fail verdicts
//! - [`report`]: Structured text summaries of draw-call traces
//! - [`helpers`]: Synthetic photos, canned analyses, point math
//! - [`assertions`]: Rich assertion helpers with diagnostics

pub mod assertions;
pub mod helpers;
pub mod oracle;
pub mod report;
pub mod workflow;

pub use helpers::HarnessError;
pub use oracle::OracleVerdict;
pub use report::TraceReport;
pub use workflow::OverlayBench;

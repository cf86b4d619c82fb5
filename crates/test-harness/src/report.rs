//! Structured text reports of draw-call traces.
//!
//! Reports are plain text so a failing scenario can print exactly what was
//! drawn, in order, next to the oracle verdicts.

use std::fmt;

use claw_canvas::{DrawCall, RecordingCanvas};

use crate::oracle::OracleVerdict;

/// Summary of one recorded trace.
#[derive(Debug, Clone, Default)]
pub struct TraceReport {
    pub width: f64,
    pub height: f64,
    pub clears: usize,
    pub fills: usize,
    pub strokes: usize,
    pub dashed_strokes: usize,
    pub images: usize,
    pub texts: Vec<String>,
    pub oracle_results: Vec<OracleVerdict>,
}

impl TraceReport {
    pub fn from_canvas(canvas: &RecordingCanvas) -> Self {
        use claw_canvas::Canvas;

        let mut report = TraceReport {
            width: canvas.width(),
            height: canvas.height(),
            ..Default::default()
        };
        for call in canvas.calls() {
            match call {
                DrawCall::Clear(_) => report.clears += 1,
                DrawCall::Fill { .. } => report.fills += 1,
                DrawCall::Stroke { style, .. } => {
                    report.strokes += 1;
                    if style.is_dashed() {
                        report.dashed_strokes += 1;
                    }
                }
                DrawCall::Image { .. } => report.images += 1,
                DrawCall::Text { text, .. } => report.texts.push(text.clone()),
            }
        }
        report
    }

    pub fn all_passed(&self) -> bool {
        self.oracle_results.iter().all(|v| v.passed)
    }

    /// Format the report as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== Trace Report ({}x{}) ===\n\n", self.width, self.height));
        out.push_str(&format!(
            "Calls: {} clear, {} fill, {} stroke ({} dashed), {} image, {} text\n",
            self.clears,
            self.fills,
            self.strokes,
            self.dashed_strokes,
            self.images,
            self.texts.len(),
        ));

        if !self.texts.is_empty() {
            out.push_str("\nText:\n");
            for t in &self.texts {
                out.push_str(&format!("  \"{t}\"\n"));
            }
        }

        if !self.oracle_results.is_empty() {
            let passed = self.oracle_results.iter().filter(|v| v.passed).count();
            out.push_str(&format!(
                "\nOracles ({}/{} passed):\n",
                passed,
                self.oracle_results.len()
            ));
            for v in &self.oracle_results {
                let mark = if v.passed { "PASS" } else { "FAIL" };
                out.push_str(&format!("  [{mark}] {}: {}\n", v.oracle_name, v.detail));
            }
        }
        out
    }
}

impl fmt::Display for TraceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

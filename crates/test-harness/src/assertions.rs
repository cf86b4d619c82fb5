//! Rich assertion helpers with diagnostic output.
//!
//! Every failure names the context and includes what was actually drawn.

use claw_canvas::RecordingCanvas;
use claw_types::Point2;

use crate::helpers::{closest_pair, HarnessError};

// ── Text ────────────────────────────────────────────────────────────────────

/// Assert some drawn label contains `needle`.
pub fn assert_text_drawn(canvas: &RecordingCanvas, needle: &str, ctx: &str) -> Result<(), HarnessError> {
    let texts = canvas.texts();
    if texts.iter().any(|t| t.contains(needle)) {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{ctx}] no text containing {needle:?}. Drawn: [{}]", texts.join(", ")),
        })
    }
}

/// Assert no drawn label contains `needle`.
pub fn assert_text_absent(canvas: &RecordingCanvas, needle: &str, ctx: &str) -> Result<(), HarnessError> {
    match canvas.texts().into_iter().find(|t| t.contains(needle)) {
        Some(t) => Err(HarnessError::AssertionFailed {
            detail: format!("[{ctx}] unexpected text {t:?}"),
        }),
        None => Ok(()),
    }
}

// ── Counts ──────────────────────────────────────────────────────────────────

/// Assert the number of image draws (host photo plus any crops).
pub fn assert_image_count(canvas: &RecordingCanvas, expected: usize, ctx: &str) -> Result<(), HarnessError> {
    let actual = canvas.images().count();
    if actual == expected {
        Ok(())
    } else {
        let alphas: Vec<String> = canvas.images().map(|(_, _, a)| format!("{a:.2}")).collect();
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{ctx}] expected {expected} image draws, got {actual} (alphas: [{}])",
                alphas.join(", ")
            ),
        })
    }
}

/// Assert the number of dashed strokes.
pub fn assert_dashed_count(canvas: &RecordingCanvas, expected: usize, ctx: &str) -> Result<(), HarnessError> {
    let actual = canvas.strokes().filter(|(_, s)| s.is_dashed()).count();
    if actual == expected {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{ctx}] expected {expected} dashed strokes, got {actual}"),
        })
    }
}

// ── Geometry ────────────────────────────────────────────────────────────────

/// Assert two points agree within `tol`.
pub fn assert_point_near(actual: Point2, expected: Point2, tol: f64, ctx: &str) -> Result<(), HarnessError> {
    let d = actual.distance_to(&expected);
    if d <= tol {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{ctx}] expected ({:.3}, {:.3}), got ({:.3}, {:.3}), off by {d:.3} (tol={tol})",
                expected.x, expected.y, actual.x, actual.y,
            ),
        })
    }
}

/// Assert every point is inside the surface inset by `margin`.
pub fn assert_within_margin(
    points: &[Point2],
    width: f64,
    height: f64,
    margin: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let mx = margin.min(width / 2.0);
    let my = margin.min(height / 2.0);
    for (i, p) in points.iter().enumerate() {
        if p.x < mx - 1e-9 || p.x > width - mx + 1e-9 || p.y < my - 1e-9 || p.y > height - my + 1e-9 {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{ctx}] point {i} at ({:.2}, {:.2}) outside [{mx}, {}] x [{my}, {}]",
                    p.x,
                    p.y,
                    width - mx,
                    height - my,
                ),
            });
        }
    }
    Ok(())
}

/// Assert the closest pair of points is at least `min_dist` apart.
pub fn assert_separated(points: &[Point2], min_dist: f64, ctx: &str) -> Result<(), HarnessError> {
    match closest_pair(points) {
        Some((i, j, d)) if d + 1e-9 < min_dist => Err(HarnessError::AssertionFailed {
            detail: format!("[{ctx}] points {i} and {j} are {d:.3} apart, need {min_dist}"),
        }),
        _ => Ok(()),
    }
}

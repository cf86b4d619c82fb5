use std::path::Path;

use claw_types::{AnchorPoint, BBox, CameraHint, Direction, Step, TechniqueId};
use tracing::{debug, info, instrument, warn};

use crate::analysis::Analysis;
use crate::errors::LoadError;
use crate::raw::{RawAnalysis, RawBBox, RawBoxField, RawHint, RawLabel, RawNumber, RawStep};

/// Parse an analysis result from JSON.
///
/// Accepts camelCase or snake_case keys, and either a `steps` list or the
/// single-move shape (`next_move` with a top-level `claw_bbox` and
/// `move_number`). Missing targets become 50 and all targets are clamped
/// into `[0, 100]`. Source boxes without a positive size are dropped.
#[instrument(skip(json), fields(bytes = json.len()))]
pub fn load_analysis(json: &str) -> Result<Analysis, LoadError> {
    let raw: RawAnalysis =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    let move_number = raw
        .move_number
        .as_ref()
        .and_then(RawNumber::value)
        .filter(|n| *n >= 1.0)
        .map(|n| n as usize)
        .unwrap_or(1);

    let mut steps: Vec<Step> = if raw.steps.is_empty() {
        raw.next_move
            .iter()
            .map(|m| convert_step(move_number, m))
            .collect()
    } else {
        raw.steps
            .iter()
            .enumerate()
            .map(|(i, s)| convert_step(i + 1, s))
            .collect()
    };
    if steps.is_empty() {
        return Err(LoadError::NoSteps);
    }

    // the top-level box locates the gripper before the first move
    if let Some(first) = steps.first_mut() {
        if first.source_bbox.is_none() {
            first.source_bbox = raw.claw_bbox.as_ref().and_then(RawBoxField::as_box).and_then(convert_bbox);
        }
    }

    let (technique, technique_name) = resolve_technique(&raw);
    let camera_hint = raw.camera_hint.as_ref().and_then(convert_hint);

    info!(
        steps = steps.len(),
        technique = ?technique,
        has_hint = camera_hint.is_some(),
        "analysis loaded"
    );
    Ok(Analysis {
        technique,
        technique_name,
        steps,
        camera_hint,
        move_number,
    })
}

/// Read and parse an analysis result from a file.
pub fn load_analysis_file(path: impl AsRef<Path>) -> Result<Analysis, LoadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .map_err(|e| LoadError::ReadError(format!("{}: {e}", path.display())))?;
    load_analysis(&json)
}

fn convert_step(index: usize, raw: &RawStep) -> Step {
    let percent = |v: &Option<RawNumber>| v.as_ref().and_then(RawNumber::value).unwrap_or(50.0);
    let target = AnchorPoint::new(percent(&raw.target_x_percent), percent(&raw.target_y_percent))
        .clamped(0.0, 100.0);

    let action = raw.action.clone().unwrap_or_default();
    let mut step = Step::new(index, action, target);
    if let Some(label) = raw.label_text.as_ref().filter(|l| !l.trim().is_empty()) {
        step.label_text = label.clone();
    }
    step.expected_result = raw.expected_result.clone().unwrap_or_default();
    step.direction = raw
        .direction
        .as_ref()
        .and_then(RawLabel::as_str)
        .map(Direction::parse)
        .unwrap_or_default();
    step.source_bbox = raw.source_bbox.as_ref().and_then(RawBoxField::as_box).and_then(convert_bbox);

    debug!(
        index,
        direction = ?step.direction,
        x = target.x_percent,
        y = target.y_percent,
        has_bbox = step.source_bbox.is_some(),
        "step converted"
    );
    step
}

fn convert_bbox(raw: &RawBBox) -> Option<BBox> {
    let field = |v: &Option<RawNumber>| v.as_ref().and_then(RawNumber::value);
    let (Some(x), Some(y), Some(w), Some(h)) = (field(&raw.x), field(&raw.y), field(&raw.w), field(&raw.h)) else {
        debug!("dropping source box with a missing or non-numeric field");
        return None;
    };
    let bbox = BBox::new(x, y, w, h);
    if bbox.is_usable() {
        Some(bbox)
    } else {
        debug!(?bbox, "dropping source box without a usable size");
        None
    }
}

fn convert_hint(raw: &RawHint) -> Option<CameraHint> {
    let h = raw.horizontal_deg.as_ref().and_then(RawNumber::value);
    let v = raw.vertical_deg.as_ref().and_then(RawNumber::value);
    if h.is_none() && v.is_none() {
        return None;
    }
    let canonical = CameraHint::CANONICAL;
    let hint = CameraHint::new(
        h.unwrap_or(canonical.horizontal_deg),
        v.unwrap_or(canonical.vertical_deg),
    );
    Some(hint.clamped())
}

/// First recognized name among the technique field and the setup type.
fn resolve_technique(raw: &RawAnalysis) -> (Option<TechniqueId>, Option<String>) {
    let mut names: Vec<&str> = raw
        .technique
        .as_ref()
        .map(|t| t.names())
        .unwrap_or_default();
    if let Some(setup) = raw
        .situation_analysis
        .as_ref()
        .and_then(|s| s.setup_type.as_deref())
    {
        // "hashiwatashi / maeotoshi" lists several candidates
        names.extend(setup.split(['/', ',']));
    }

    let reported = names
        .iter()
        .map(|n| n.trim())
        .find(|n| !n.is_empty())
        .map(str::to_owned);
    let technique = names.iter().find_map(|n| TechniqueId::parse(n));
    if technique.is_none() {
        if let Some(name) = &reported {
            warn!(technique = %name, "unrecognized technique name");
        }
    }
    (technique, reported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_target_defaults_to_center() {
        let a = load_analysis(r#"{"steps": [{"action": "grab"}]}"#).unwrap();
        assert_eq!(a.steps[0].target, AnchorPoint::CENTER);
        assert_eq!(a.steps[0].direction, Direction::Center);
    }

    #[test]
    fn test_string_numbers_are_accepted() {
        let a = load_analysis(
            r#"{"steps": [{"targetXPercent": "30", "targetYPercent": "72%"}], "moveNumber": "3"}"#,
        )
        .unwrap();
        assert_eq!(a.steps[0].target, AnchorPoint::new(30.0, 72.0));
        assert_eq!(a.move_number, 3);
    }

    #[test]
    fn test_empty_is_no_steps() {
        assert!(matches!(load_analysis("{}"), Err(LoadError::NoSteps)));
        assert!(matches!(load_analysis("[1, 2"), Err(LoadError::ParseError(_))));
    }

    #[test]
    fn test_hint_fills_missing_component() {
        let a = load_analysis(r#"{"steps": [{}], "cameraHint": {"verticalDeg": 95}}"#).unwrap();
        assert_eq!(a.camera_hint, Some(CameraHint::new(0.0, 80.0)));
    }

    #[test]
    fn test_setup_type_lists_candidates() {
        let a = load_analysis(
            r#"{"next_move": {}, "situation_analysis": {"setup_type": "probability / maeotoshi"}}"#,
        )
        .unwrap();
        assert_eq!(a.technique, Some(TechniqueId::ZigZagWalk));
        assert_eq!(a.technique_name.as_deref(), Some("probability"));
    }
}

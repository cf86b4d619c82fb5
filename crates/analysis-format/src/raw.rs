//! Wire shapes of the analysis service, as loosely as it actually sends them.

use serde::Deserialize;

/// A number that may arrive as a JSON number or as a numeric string.
/// Anything else is kept so that it reads as missing instead of failing
/// the whole document.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawNumber {
    Num(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawNumber {
    pub(crate) fn value(&self) -> Option<f64> {
        let v = match self {
            RawNumber::Num(v) => *v,
            RawNumber::Text(s) => s.trim().trim_end_matches('%').parse().ok()?,
            RawNumber::Other(_) => return None,
        };
        v.is_finite().then_some(v)
    }
}

/// `technique` is either a bare name or an object of localized names.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawTechnique {
    Name(String),
    Detail {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        name: Option<String>,
        #[serde(default, alias = "nameEn")]
        name_en: Option<String>,
        #[serde(default, alias = "nameJp")]
        name_jp: Option<String>,
    },
}

impl RawTechnique {
    /// Candidate names, most specific first.
    pub(crate) fn names(&self) -> Vec<&str> {
        match self {
            RawTechnique::Name(n) => vec![n.as_str()],
            RawTechnique::Detail {
                id,
                name,
                name_en,
                name_jp,
            } => [id, name, name_en, name_jp]
                .into_iter()
                .flatten()
                .map(String::as_str)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawSituation {
    #[serde(default, alias = "setupType")]
    pub setup_type: Option<String>,
}

/// A label that should be a string; any other JSON value reads as missing.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawLabel {
    Text(String),
    Other(serde_json::Value),
}

impl RawLabel {
    pub(crate) fn as_str(&self) -> Option<&str> {
        match self {
            RawLabel::Text(s) => Some(s),
            RawLabel::Other(_) => None,
        }
    }
}

/// Every field is optional here; a box missing any of them is dropped later.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawBBox {
    #[serde(default, alias = "x_percent", alias = "xPercent")]
    pub x: Option<RawNumber>,
    #[serde(default, alias = "y_percent", alias = "yPercent")]
    pub y: Option<RawNumber>,
    #[serde(default, alias = "w_percent", alias = "wPercent", alias = "width")]
    pub w: Option<RawNumber>,
    #[serde(default, alias = "h_percent", alias = "hPercent", alias = "height")]
    pub h: Option<RawNumber>,
}

/// A source box, or something that is not one (`"none"`, `false`, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawBoxField {
    Box(RawBBox),
    Other(serde_json::Value),
}

impl RawBoxField {
    pub(crate) fn as_box(&self) -> Option<&RawBBox> {
        match self {
            RawBoxField::Box(b) => Some(b),
            RawBoxField::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawHint {
    #[serde(default, alias = "horizontalDeg", alias = "horizontal")]
    pub horizontal_deg: Option<RawNumber>,
    #[serde(default, alias = "verticalDeg", alias = "vertical")]
    pub vertical_deg: Option<RawNumber>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawStep {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub direction: Option<RawLabel>,
    #[serde(default, alias = "labelText", alias = "label")]
    pub label_text: Option<String>,
    #[serde(default, alias = "expectedResult")]
    pub expected_result: Option<String>,
    #[serde(default, alias = "targetXPercent")]
    pub target_x_percent: Option<RawNumber>,
    #[serde(default, alias = "targetYPercent")]
    pub target_y_percent: Option<RawNumber>,
    #[serde(default, alias = "sourceBBox", alias = "sourceBbox")]
    pub source_bbox: Option<RawBoxField>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawAnalysis {
    #[serde(default)]
    pub technique: Option<RawTechnique>,
    #[serde(default, alias = "situationAnalysis")]
    pub situation_analysis: Option<RawSituation>,
    #[serde(default)]
    pub steps: Vec<RawStep>,
    #[serde(default, alias = "cameraHint")]
    pub camera_hint: Option<RawHint>,
    #[serde(default, alias = "nextMove")]
    pub next_move: Option<RawStep>,
    #[serde(default, alias = "clawBbox", alias = "clawBBox")]
    pub claw_bbox: Option<RawBoxField>,
    #[serde(default, alias = "moveNumber")]
    pub move_number: Option<RawNumber>,
}

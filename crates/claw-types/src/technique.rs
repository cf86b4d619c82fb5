use serde::{Deserialize, Serialize};

/// The fixed set of techniques the diagram composer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechniqueId {
    /// Box tipped upright so its height drops between narrow rails.
    UprightTip,
    /// Box rotated until its long side runs along the rails, then slipped through.
    LengthwiseSlip,
    /// Box pushed from one end across a two-rail bridge.
    BridgeShift,
    /// One prong hooks a corner and drags the box off a ledge.
    CornerDrag,
    /// Repeated nudges on one edge walk the box toward the exit.
    EdgeNudge,
    /// Pressing the inner end levers the outer end up and over.
    LeverFlip,
    /// Alternately pulling the rear corners walks the box forward.
    ZigZagWalk,
}

impl TechniqueId {
    pub const ALL: [TechniqueId; 7] = [
        TechniqueId::UprightTip,
        TechniqueId::LengthwiseSlip,
        TechniqueId::BridgeShift,
        TechniqueId::CornerDrag,
        TechniqueId::EdgeNudge,
        TechniqueId::LeverFlip,
        TechniqueId::ZigZagWalk,
    ];

    /// Romanized arcade name, as used by the analysis service.
    pub fn arcade_name(self) -> &'static str {
        match self {
            TechniqueId::UprightTip => "tatehame",
            TechniqueId::LengthwiseSlip => "yokohame",
            TechniqueId::BridgeShift => "hashiwatashi",
            TechniqueId::CornerDrag => "yose",
            TechniqueId::EdgeNudge => "zurashi",
            TechniqueId::LeverFlip => "kururinpa",
            TechniqueId::ZigZagWalk => "maeotoshi",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TechniqueId::UprightTip => "tip the box upright so it drops between narrow rails",
            TechniqueId::LengthwiseSlip => "turn the box lengthwise and slip it between the rails",
            TechniqueId::BridgeShift => "push one end repeatedly to shift the box across the rails",
            TechniqueId::CornerDrag => "hook a corner with one prong and drag the box over the edge",
            TechniqueId::EdgeNudge => "nudge the same edge repeatedly toward the exit",
            TechniqueId::LeverFlip => "press the inner end so the outer end levers up and flips",
            TechniqueId::ZigZagWalk => "pull the rear corners in turn to walk the box forward",
        }
    }

    /// English names the analysis service is known to send.
    pub fn english_names(self) -> &'static [&'static str] {
        match self {
            TechniqueId::UprightTip => &[
                "box tipped upright between narrow rails",
                "upright drop",
                "vertical drop",
            ],
            TechniqueId::LengthwiseSlip => &[
                "box slipped lengthwise between two rails",
                "lengthwise drop",
                "sideways slip",
            ],
            TechniqueId::BridgeShift => &["bridge shift", "bridge push", "push across the bridge"],
            TechniqueId::CornerDrag => &["corner drag", "corner hook", "drag off the ledge"],
            TechniqueId::EdgeNudge => &["edge nudge", "edge push"],
            TechniqueId::LeverFlip => &["lever-tip flip", "lever flip", "seesaw flip"],
            TechniqueId::ZigZagWalk => &["zig-zag forward walk", "zig-zag walk", "corner walk"],
        }
    }

    /// Accepts the romanized arcade name, the snake_case id, one of the
    /// English names, or the description. Case, spacing and punctuation are
    /// ignored.
    pub fn parse(name: &str) -> Option<Self> {
        let key = normalize(name);
        if key.is_empty() {
            return None;
        }
        TechniqueId::ALL.into_iter().find(|t| {
            key == t.arcade_name()
                || key == format!("{t:?}").to_ascii_lowercase()
                || key == normalize(t.description())
                || t.english_names().iter().any(|n| key == normalize(n))
        })
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl std::fmt::Display for TechniqueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.arcade_name())
    }
}

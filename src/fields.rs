//! Field definitions and the static rule table for the daily-entry form.

/// The three metrics captured by a daily entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Sleep,
    Water,
    Mood,
}

impl FieldId {
    pub const ALL: [FieldId; 3] = [FieldId::Sleep, FieldId::Water, FieldId::Mood];

    /// Position in [`FIELD_SPECS`].
    pub fn index(self) -> usize {
        match self {
            FieldId::Sleep => 0,
            FieldId::Water => 1,
            FieldId::Mood => 2,
        }
    }

    /// Name used in the JSON request body and in server-side `loc` paths.
    pub fn wire_name(self) -> &'static str {
        match self {
            FieldId::Sleep => "sleep_hours",
            FieldId::Water => "water_litres",
            FieldId::Mood => "mood",
        }
    }

    /// Reverse mapping from a server `loc` path segment.
    pub fn from_wire(name: &str) -> Option<FieldId> {
        FieldId::ALL.iter().copied().find(|f| f.wire_name() == name)
    }

    /// Path segment of the chart endpoint for this metric.
    pub fn chart_slug(self) -> &'static str {
        match self {
            FieldId::Sleep => "sleep",
            FieldId::Water => "water",
            FieldId::Mood => "mood",
        }
    }
}

/// How a raw input string is parsed before any range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parse {
    Float,
    Integer,
}

/// A threshold beyond which a valid value still draws a non-blocking advisory.
#[derive(Debug, Clone, Copy)]
pub struct SoftBound {
    pub max: f64,
    pub message: &'static str,
}

/// Static validation rules for one input field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: &'static str,
    pub required: bool,
    pub parse: Parse,
    /// Inclusive bounds; values outside them are rejected.
    pub hard_range: (f64, f64),
    pub range_message: &'static str,
    pub soft: Option<SoftBound>,
}

/// The rule table. The mood range is [1, 10] for both the submit-time and
/// the on-blur check.
pub static FIELD_SPECS: [FieldSpec; 3] = [
    FieldSpec {
        id: FieldId::Sleep,
        label: "Sleep hours",
        required: true,
        parse: Parse::Float,
        hard_range: (0.0, 24.0),
        range_message: "Sleep hours must be between 0 and 24",
        soft: Some(SoftBound {
            max: 16.0,
            message: "That's a lot of sleep, are you sure?",
        }),
    },
    FieldSpec {
        id: FieldId::Water,
        label: "Water intake",
        required: true,
        parse: Parse::Float,
        hard_range: (0.0, 10.0),
        range_message: "Water intake must be between 0 and 10 litres",
        soft: Some(SoftBound {
            max: 5.0,
            message: "That's a lot of water, are you sure?",
        }),
    },
    FieldSpec {
        id: FieldId::Mood,
        label: "Mood rating",
        required: true,
        parse: Parse::Integer,
        hard_range: (1.0, 10.0),
        range_message: "Mood rating must be between 1 and 10",
        soft: None,
    },
];

pub fn spec_for(id: FieldId) -> &'static FieldSpec {
    &FIELD_SPECS[id.index()]
}

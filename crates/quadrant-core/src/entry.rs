// File: crates/quadrant-core/src/entry.rs
// Summary: One plotted person (scores, previous scores, internal flag) and the sample dataset.

use std::fmt;

/// One data point on the chart.
/// Scores nominally lie in [-100, 100]; nothing enforces it.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub name: String,
    pub skill: f64,
    pub will: f64,
    pub prev_skill: f64,
    pub prev_will: f64,
    pub is_internal: bool,
}

impl Entry {
    /// Entry without history: previous scores equal the current ones.
    pub fn new(name: impl Into<String>, skill: f64, will: f64, is_internal: bool) -> Self {
        Self { name: name.into(), skill, will, prev_skill: skill, prev_will: will, is_internal }
    }

    pub fn with_previous(mut self, prev_skill: f64, prev_will: f64) -> Self {
        self.prev_skill = prev_skill;
        self.prev_will = prev_will;
        self
    }

    /// True when either score changed since the previous measurement.
    pub fn has_moved(&self) -> bool {
        self.prev_skill != self.skill || self.prev_will != self.will
    }

    pub fn quadrant(&self) -> Quadrant {
        Quadrant::classify(self.will, self.skill)
    }
}

/// One of the four regions split by the zero lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    HighWillHighSkill,
    LowWillHighSkill,
    HighWillLowSkill,
    LowWillLowSkill,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::HighWillHighSkill,
        Quadrant::LowWillHighSkill,
        Quadrant::HighWillLowSkill,
        Quadrant::LowWillLowSkill,
    ];

    /// Zero counts as "high" on both axes.
    pub fn classify(will: f64, skill: f64) -> Self {
        match (will >= 0.0, skill >= 0.0) {
            (true, true) => Quadrant::HighWillHighSkill,
            (false, true) => Quadrant::LowWillHighSkill,
            (true, false) => Quadrant::HighWillLowSkill,
            (false, false) => Quadrant::LowWillLowSkill,
        }
    }

    /// Two-line annotation text.
    pub fn caption(self) -> &'static str {
        match self {
            Quadrant::HighWillHighSkill => "High Will\nHigh Skill",
            Quadrant::LowWillHighSkill => "Low Will\nHigh Skill",
            Quadrant::HighWillLowSkill => "High Will\nLow Skill",
            Quadrant::LowWillLowSkill => "Low Will\nLow Skill",
        }
    }

    /// Fixed annotation anchor in data units.
    pub fn anchor(self) -> (f64, f64) {
        match self {
            Quadrant::HighWillHighSkill => (50.0, 50.0),
            Quadrant::LowWillHighSkill => (-50.0, 50.0),
            Quadrant::HighWillLowSkill => (50.0, -50.0),
            Quadrant::LowWillLowSkill => (-50.0, -50.0),
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.caption().replace('\n', " / "))
    }
}

/// Case-insensitive truthiness of the internal/external column.
/// "true", "yes", "1" and "internal" are internal; anything else is external.
pub fn parse_internal_flag(raw: &str) -> bool {
    let v = raw.trim().to_ascii_lowercase();
    matches!(v.as_str(), "true" | "yes" | "1" | "internal")
}

/// The built-in dataset used when no CSV is given or it cannot be used.
pub fn sample_entries() -> Vec<Entry> {
    vec![
        Entry::new("Alice", 80.0, 90.0, true).with_previous(70.0, 80.0),
        Entry::new("Bob", -30.0, 70.0, true).with_previous(-10.0, 60.0),
        Entry::new("Charlie", 60.0, -40.0, true).with_previous(30.0, -20.0),
        Entry::new("Diana", -50.0, -60.0, true).with_previous(-70.0, -80.0),
        Entry::new("Eve", 10.0, 20.0, false).with_previous(10.0, 10.0),
        Entry::new("Frank", -20.0, 30.0, false).with_previous(-30.0, 10.0),
    ]
}

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Per-language repository counts for the first and second account, keyed in
/// first-seen order.
pub type LanguageUsageMap = IndexMap<String, LanguageCounts>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageCounts {
    pub first: u32,
    pub second: u32,
}

impl LanguageCounts {
    pub fn is_shared(&self) -> bool {
        self.first > 0 && self.second > 0
    }

    pub fn combined(&self) -> u32 {
        self.first + self.second
    }
}

// Serialized as a `[first, second]` pair.
impl Serialize for LanguageCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.first, self.second].serialize(serializer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    TechStack,
    Activity,
    Scope,
    Collaboration,
    Community,
}

impl FactorKind {
    pub const ALL: [FactorKind; 5] = [
        FactorKind::TechStack,
        FactorKind::Activity,
        FactorKind::Scope,
        FactorKind::Collaboration,
        FactorKind::Community,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FactorKind::TechStack => "Tech Stack Compatibility",
            FactorKind::Activity => "Activity Pattern",
            FactorKind::Scope => "Project Scope Alignment",
            FactorKind::Collaboration => "Collaboration Style",
            FactorKind::Community => "Community Engagement",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FactorKind::TechStack => "💻",
            FactorKind::Activity => "⏱️",
            FactorKind::Scope => "📊",
            FactorKind::Collaboration => "🤝",
            FactorKind::Community => "👥",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorResult {
    pub kind: FactorKind,
    pub name: &'static str,
    pub score: u8,
    pub description: String,
    pub icon: &'static str,
}

impl FactorResult {
    pub fn new(kind: FactorKind, score: u8, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: kind.name(),
            score,
            description: description.into(),
            icon: kind.icon(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTag {
    DreamTeam,
    GreatMatch,
    SolidMatch,
    TechStackAligned,
    InSync,
    ExperiencedDuo,
    PowerCoders,
    MentorMentee,
    ComplementarySkills,
    HackathonReady,
}

impl MatchTag {
    pub fn label(self) -> &'static str {
        match self {
            MatchTag::DreamTeam => "Dream Team",
            MatchTag::GreatMatch => "Great Match",
            MatchTag::SolidMatch => "Solid Match",
            MatchTag::TechStackAligned => "Tech Stack Aligned",
            MatchTag::InSync => "In Sync",
            MatchTag::ExperiencedDuo => "Experienced Duo",
            MatchTag::PowerCoders => "Power Coders",
            MatchTag::MentorMentee => "Mentor-Mentee",
            MatchTag::ComplementarySkills => "Complementary Skills",
            MatchTag::HackathonReady => "Hackathon Ready",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MatchTag::DreamTeam => "🔥",
            MatchTag::GreatMatch => "✨",
            MatchTag::SolidMatch => "👍",
            MatchTag::TechStackAligned => "🧩",
            MatchTag::InSync => "⏱️",
            MatchTag::ExperiencedDuo => "🏆",
            MatchTag::PowerCoders => "🚀",
            MatchTag::MentorMentee => "🧠",
            MatchTag::ComplementarySkills => "💡",
            MatchTag::HackathonReady => "⚡",
        }
    }
}

impl Serialize for MatchTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityReport {
    pub overall_score: u8,
    pub factors: [FactorResult; 5],
    pub match_tags: Vec<MatchTag>,
    pub language_overlap: LanguageUsageMap,
}

impl CompatibilityReport {
    pub fn factor(&self, kind: FactorKind) -> &FactorResult {
        // factors are stored in FactorKind::ALL order
        &self.factors[kind as usize]
    }
}

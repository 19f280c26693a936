use serde::{Deserialize, Serialize};

/// A line-by-line comparison of two texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDiff {
    /// Tagged lines in output order.
    #[serde(default)]
    pub lines: Vec<DiffLine>,
    /// Summary counts derived from `lines`.
    #[serde(default)]
    pub stats: DiffStats,
}

impl TextDiff {
    /// Wrap a line listing and compute its stats.
    #[must_use]
    pub fn from_lines(lines: Vec<DiffLine>) -> Self {
        let stats = DiffStats::from_lines(&lines);
        Self { lines, stats }
    }
}

/// Summary information about a line listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DiffStats {
    /// Lines present only in the changed text.
    pub added: u32,
    /// Lines present only in the original text.
    pub removed: u32,
    /// Lines shared by both texts.
    pub common: u32,
}

impl DiffStats {
    /// A stats instance with every count at zero.
    pub const ZERO: Self = Self {
        added: 0,
        removed: 0,
        common: 0,
    };

    /// Convenience constructor for explicit values.
    #[must_use]
    pub const fn new(added: u32, removed: u32, common: u32) -> Self {
        Self {
            added,
            removed,
            common,
        }
    }

    /// Tally the kinds of the provided lines.
    #[must_use]
    pub fn from_lines(lines: &[DiffLine]) -> Self {
        lines.iter().fold(Self::ZERO, |stats, line| match line.kind {
            DiffLineKind::Added => Self {
                added: stats.added + 1,
                ..stats
            },
            DiffLineKind::Removed => Self {
                removed: stats.removed + 1,
                ..stats
            },
            DiffLineKind::Common => Self {
                common: stats.common + 1,
                ..stats
            },
        })
    }

    /// True when neither side has lines the other lacks.
    #[must_use]
    pub const fn is_identical(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

/// A single line of a text comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    /// Where the line comes from.
    pub kind: DiffLineKind,
    /// Raw text of the line, untrimmed.
    pub text: String,
    /// 1-based line number in the original text, for common and removed lines.
    #[serde(default)]
    pub original_line: Option<u32>,
    /// 1-based line number in the changed text, for common and added lines.
    #[serde(default)]
    pub changed_line: Option<u32>,
}

impl DiffLine {
    /// A line shared by both texts.
    #[must_use]
    pub fn common(text: impl Into<String>, original_line: u32, changed_line: u32) -> Self {
        Self {
            kind: DiffLineKind::Common,
            text: text.into(),
            original_line: Some(original_line),
            changed_line: Some(changed_line),
        }
    }

    /// A line present only in the changed text.
    #[must_use]
    pub fn added(text: impl Into<String>, changed_line: u32) -> Self {
        Self {
            kind: DiffLineKind::Added,
            text: text.into(),
            original_line: None,
            changed_line: Some(changed_line),
        }
    }

    /// A line present only in the original text.
    #[must_use]
    pub fn removed(text: impl Into<String>, original_line: u32) -> Self {
        Self {
            kind: DiffLineKind::Removed,
            text: text.into(),
            original_line: Some(original_line),
            changed_line: None,
        }
    }
}

/// Classification of a line's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffLineKind {
    /// Present in both texts.
    Common,
    /// Present only in the changed text.
    Added,
    /// Present only in the original text.
    Removed,
}

impl DiffLineKind {
    /// Two-character gutter marker used by plain-text listings.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Common => "  ",
            Self::Added => "+ ",
            Self::Removed => "- ",
        }
    }

    /// Whether the line belongs to the original text.
    #[must_use]
    pub const fn in_original(self) -> bool {
        matches!(self, Self::Common | Self::Removed)
    }

    /// Whether the line belongs to the changed text.
    #[must_use]
    pub const fn in_changed(self) -> bool {
        matches!(self, Self::Common | Self::Added)
    }
}

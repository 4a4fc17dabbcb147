//! Enumerated timeline options and their defaults.

use serde::Serialize;

/// Direction of the timeline track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Markers stacked top to bottom on a vertical line (default).
    Vertical,
    /// Markers left to right on a horizontal line, content below.
    Horizontal,
}

/// Where content sits relative to a vertical track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// All content to the left of the track (default).
    Left,
    /// All content to the right of the track.
    Right,
    /// Even events left, odd events right.
    Alternating,
    /// Alternating around a centered track, text mirrored toward the track.
    Center,
}

/// Partitioning applied after sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    None,
    Year,
    Month,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Date label templates offered to widget authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateFormat {
    /// `MMM d, yyyy` e.g. "Mar 1, 2024" (default).
    Short,
    /// `MMMM d, yyyy` e.g. "March 1, 2024".
    Long,
    /// `yyyy-MM-dd`.
    Iso,
    /// `MM/dd/yyyy`.
    Us,
    /// `dd/MM/yyyy`.
    Eu,
    /// `MMMM yyyy` e.g. "March 2024".
    MonthYear,
    /// `yyyy`.
    Year,
}

impl Orientation {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical" => Some(Orientation::Vertical),
            "horizontal" => Some(Orientation::Horizontal),
            _ => None,
        }
    }
}

impl LayoutMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Some(LayoutMode::Left),
            "right" => Some(LayoutMode::Right),
            "alternating" | "alternate" => Some(LayoutMode::Alternating),
            "center" | "centre" => Some(LayoutMode::Center),
            _ => None,
        }
    }
}

impl GroupBy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Some(GroupBy::None),
            "year" => Some(GroupBy::Year),
            "month" => Some(GroupBy::Month),
            "category" => Some(GroupBy::Category),
            _ => None,
        }
    }
}

impl SortOrder {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(SortOrder::Asc),
            "desc" | "descending" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

impl DateFormat {
    /// Accepts either the key name (`"long"`) or the template text (`"MMMM d, yyyy"`).
    pub fn parse(s: &str) -> Option<Self> {
        let t = s.trim();
        let by_key = match t.to_ascii_lowercase().as_str() {
            "short" => Some(DateFormat::Short),
            "long" => Some(DateFormat::Long),
            "iso" => Some(DateFormat::Iso),
            "us" => Some(DateFormat::Us),
            "eu" => Some(DateFormat::Eu),
            "month-year" | "monthyear" => Some(DateFormat::MonthYear),
            "year" => Some(DateFormat::Year),
            _ => None,
        };
        by_key.or_else(|| {
            DateFormat::ALL
                .iter()
                .copied()
                .find(|f| f.template() == t)
        })
    }

    pub const ALL: [DateFormat; 7] = [
        DateFormat::Short,
        DateFormat::Long,
        DateFormat::Iso,
        DateFormat::Us,
        DateFormat::Eu,
        DateFormat::MonthYear,
        DateFormat::Year,
    ];

    /// Human-facing template string.
    pub fn template(&self) -> &'static str {
        match self {
            DateFormat::Short => "MMM d, yyyy",
            DateFormat::Long => "MMMM d, yyyy",
            DateFormat::Iso => "yyyy-MM-dd",
            DateFormat::Us => "MM/dd/yyyy",
            DateFormat::Eu => "dd/MM/yyyy",
            DateFormat::MonthYear => "MMMM yyyy",
            DateFormat::Year => "yyyy",
        }
    }

    /// Equivalent chrono format string.
    pub fn strftime(&self) -> &'static str {
        match self {
            DateFormat::Short => "%b %-d, %Y",
            DateFormat::Long => "%B %-d, %Y",
            DateFormat::Iso => "%Y-%m-%d",
            DateFormat::Us => "%m/%d/%Y",
            DateFormat::Eu => "%d/%m/%Y",
            DateFormat::MonthYear => "%B %Y",
            DateFormat::Year => "%Y",
        }
    }
}

pub const DEFAULT_ORIENTATION: Orientation = Orientation::Vertical;
pub const DEFAULT_LAYOUT: LayoutMode = LayoutMode::Left;
pub const DEFAULT_GROUP_BY: GroupBy = GroupBy::None;
pub const DEFAULT_SORT_ORDER: SortOrder = SortOrder::Asc;
pub const DEFAULT_DATE_FORMAT: DateFormat = DateFormat::Short;

/// Label used for events without a category when grouping by category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";
/// Label used for events whose date cannot be parsed when grouping by year or month.
pub const UNDATED_LABEL: &str = "Undated";

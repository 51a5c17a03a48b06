//! Static dashboard content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every figure on the dashboard is a literal. Each `PageKey` maps to one
//! `PageContent` in a fixed table; `components::page_blocks` renders the
//! blocks. Nothing is fetched or computed.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

mod table;

use crate::components::icon::Icon;
use crate::state::dashboard::PageKey;

/// Accent color of a card, value, bar, or badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Teal,
    Cyan,
    Emerald,
    Green,
    Red,
    Orange,
    Yellow,
    Blue,
    Purple,
    Slate,
}

impl Tone {
    /// BEM modifier applied next to the element's base class.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Tone::Teal => "tone--teal",
            Tone::Cyan => "tone--cyan",
            Tone::Emerald => "tone--emerald",
            Tone::Green => "tone--green",
            Tone::Red => "tone--red",
            Tone::Orange => "tone--orange",
            Tone::Yellow => "tone--yellow",
            Tone::Blue => "tone--blue",
            Tone::Purple => "tone--purple",
            Tone::Slate => "tone--slate",
        }
    }
}

/// Headline metric card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
    pub tone: Tone,
    pub icon: Option<Icon>,
}

/// Labelled horizontal bar, width in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bar {
    pub label: &'static str,
    pub value: &'static str,
    pub percent: u8,
    pub tone: Tone,
}

/// Label/value pair. `tone` highlights the value when set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fact {
    pub label: &'static str,
    pub value: &'static str,
    pub tone: Option<Tone>,
}

/// Leading square of a feed row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
    Text(&'static str),
    Icon(Icon),
}

/// Right-hand side of a feed row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trailing {
    /// Muted text such as a relative timestamp.
    Note(&'static str),
    /// Colored text.
    Highlight(&'static str),
    /// Filled pill such as a priority tag.
    Pill(&'static str),
}

/// One row in an activity feed, detection list, or leaderboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedItem {
    pub badge: Badge,
    pub headline: &'static str,
    pub detail: &'static str,
    pub trailing: Trailing,
    pub tone: Tone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub tone: Tone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    Processed,
    Processing,
}

impl SubmissionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Processed => "✓ Processed",
            SubmissionStatus::Processing => "⏳ Processing",
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            SubmissionStatus::Processed => Tone::Green,
            SubmissionStatus::Processing => Tone::Yellow,
        }
    }
}

/// Row of the crowdsourced video submissions table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Submission {
    pub timestamp: &'static str,
    pub contributor: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub status: SubmissionStatus,
}

/// Button in a card header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardAction {
    pub label: &'static str,
    pub icon: Option<Icon>,
}

/// A rendered section of a dashboard page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    /// Grid of headline cards.
    StatCards(&'static [StatCard]),
    /// Card with labelled progress bars.
    Bars { title: &'static str, rows: &'static [Bar] },
    /// Card with label/value rows.
    Facts { title: &'static str, rows: &'static [Fact] },
    /// Card with a grid of label-over-value fields and an optional action
    /// button.
    Fields {
        title: &'static str,
        action: Option<CardAction>,
        fields: &'static [Fact],
    },
    Feed { title: &'static str, items: &'static [FeedItem] },
    /// Placeholder panel where the hazard map would render.
    MapCanvas { caption: &'static str, detail: &'static str },
    Legend { title: &'static str, entries: &'static [LegendEntry] },
    /// Column chart, heights in percent.
    Trend {
        title: &'static str,
        heights: &'static [u8],
        labels: &'static [&'static str],
    },
    Submissions {
        title: &'static str,
        columns: &'static [&'static str],
        rows: &'static [Submission],
    },
    /// Side-by-side layout of nested blocks.
    Columns(&'static [Block]),
}

/// Header text and blocks for one dashboard page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageContent {
    pub page: PageKey,
    pub title: &'static str,
    pub description: &'static str,
    pub blocks: &'static [Block],
}

/// Look up the precomputed content for `page`.
#[must_use]
pub fn page_content(page: PageKey) -> &'static PageContent {
    &table::PAGE_CONTENT[page as usize]
}

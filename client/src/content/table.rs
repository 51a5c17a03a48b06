//! Literal figures for each dashboard page, indexed by `PageKey`
//! discriminant.

use super::{
    Badge, Bar, Block, CardAction, Fact, FeedItem, LegendEntry, PageContent, StatCard, Submission, SubmissionStatus,
    Tone, Trailing,
};
use crate::components::icon::Icon;
use crate::state::dashboard::PageKey;

pub(super) static PAGE_CONTENT: [PageContent; 5] = [
    PageContent {
        page: PageKey::Dashboard,
        title: "System Overview",
        description: "RoadSense monitoring dashboard - YOLOv8 & DeepSORT road distress detection system.",
        blocks: OVERVIEW,
    },
    PageContent {
        page: PageKey::MapView,
        title: "GIS Hazard Map",
        description: "PostGIS-powered geographic distribution of detected road hazards.",
        blocks: MAP_VIEW,
    },
    PageContent {
        page: PageKey::Reports,
        title: "Analytics & Reports",
        description: "DPWH-compliant reporting and detection analytics.",
        blocks: REPORTS,
    },
    PageContent {
        page: PageKey::Uploads,
        title: "Crowdsourced Data",
        description: "Video submissions and contributor analytics from mobile crowdsourcing.",
        blocks: UPLOADS,
    },
    PageContent {
        page: PageKey::Profile,
        title: "Profile",
        description: "Manage your account settings and preferences.",
        blocks: PROFILE,
    },
];

// =============================================================================
// DASHBOARD
// =============================================================================

const OVERVIEW: &[Block] = &[
    Block::StatCards(&[
        StatCard {
            label: "Total Detections",
            value: "847",
            caption: "Last 30 days",
            tone: Tone::Teal,
            icon: Some(Icon::CheckCircle),
        },
        StatCard {
            label: "Critical Hazards",
            value: "23",
            caption: "Pending review",
            tone: Tone::Red,
            icon: Some(Icon::Alert),
        },
        StatCard {
            label: "Coverage Area",
            value: "152 km",
            caption: "Roads monitored",
            tone: Tone::Purple,
            icon: Some(Icon::Map),
        },
        StatCard {
            label: "Detection Accuracy",
            value: "94.3%",
            caption: "YOLOv8 model",
            tone: Tone::Cyan,
            icon: Some(Icon::Bolt),
        },
    ]),
    Block::Columns(&[
        Block::Bars {
            title: "Hazard Distribution",
            rows: &[
                Bar { label: "Potholes", value: "342 (40%)", percent: 40, tone: Tone::Red },
                Bar { label: "Cracks", value: "245 (29%)", percent: 29, tone: Tone::Orange },
                Bar { label: "Speed Bumps", value: "186 (22%)", percent: 22, tone: Tone::Yellow },
                Bar { label: "Flooding", value: "74 (9%)", percent: 9, tone: Tone::Blue },
            ],
        },
        Block::Facts {
            title: "System Performance",
            rows: &[
                Fact { label: "YOLOv8 Inference Time", value: "23ms/frame", tone: Some(Tone::Teal) },
                Fact { label: "DeepSORT Tracking", value: "Active", tone: Some(Tone::Teal) },
                Fact { label: "GPU Utilization (RTX 3050)", value: "67%", tone: Some(Tone::Purple) },
                Fact { label: "PostGIS Database", value: "Online", tone: Some(Tone::Green) },
                Fact { label: "Active Contributors", value: "156 drivers", tone: Some(Tone::Cyan) },
            ],
        },
    ]),
    Block::Feed {
        title: "Recent Detections",
        items: &[
            FeedItem {
                badge: Badge::Text("P"),
                headline: "Pothole detected",
                detail: "Maharlika Highway, Km 45.2",
                trailing: Trailing::Note("2 mins ago"),
                tone: Tone::Red,
            },
            FeedItem {
                badge: Badge::Text("C"),
                headline: "Road crack identified",
                detail: "NLEX North Bound, Km 23.8",
                trailing: Trailing::Note("8 mins ago"),
                tone: Tone::Orange,
            },
            FeedItem {
                badge: Badge::Text("F"),
                headline: "Flooding detected",
                detail: "Quirino Highway, Station 5",
                trailing: Trailing::Note("15 mins ago"),
                tone: Tone::Blue,
            },
        ],
    },
];

// =============================================================================
// MAP VIEW
// =============================================================================

const MAP_VIEW: &[Block] = &[
    Block::MapCanvas {
        caption: "Interactive PostGIS Map View",
        detail: "GPS-tracked hazard locations with clustering analysis",
    },
    Block::StatCards(&[
        StatCard {
            label: "High-Risk Zones",
            value: "8 areas",
            caption: "Cluster density > 15",
            tone: Tone::Red,
            icon: None,
        },
        StatCard {
            label: "GPS Coverage",
            value: "152.4 km",
            caption: "Total road length",
            tone: Tone::Purple,
            icon: None,
        },
        StatCard {
            label: "Geo-tagged Videos",
            value: "1,247",
            caption: "With GPS logs",
            tone: Tone::Cyan,
            icon: None,
        },
        StatCard {
            label: "Map Queries",
            value: "5,432",
            caption: "PostGIS requests",
            tone: Tone::Emerald,
            icon: None,
        },
    ]),
    Block::Legend {
        title: "Hazard Density Legend",
        entries: &[
            LegendEntry { label: "Critical (>20 hazards/km)", tone: Tone::Red },
            LegendEntry { label: "High (10-20 hazards/km)", tone: Tone::Orange },
            LegendEntry { label: "Medium (5-10 hazards/km)", tone: Tone::Yellow },
            LegendEntry { label: "Low (<5 hazards/km)", tone: Tone::Green },
        ],
    },
];

// =============================================================================
// REPORTS
// =============================================================================

const REPORTS: &[Block] = &[
    Block::Fields {
        title: "Generate DPWH Report",
        action: Some(CardAction { label: "Export Report", icon: None }),
        fields: &[
            Fact { label: "Report Period", value: "Jan 1-31, 2026", tone: None },
            Fact { label: "Total Incidents", value: "847 detected", tone: Some(Tone::Teal) },
            Fact { label: "Report Status", value: "Ready", tone: Some(Tone::Green) },
        ],
    },
    Block::Columns(&[
        Block::Trend {
            title: "Monthly Detection Trends",
            heights: &[60, 75, 50, 85, 70, 90, 100],
            labels: &["Week 1", "Week 2", "Week 3", "Week 4"],
        },
        Block::Feed {
            title: "Priority Maintenance",
            items: &[
                FeedItem {
                    badge: Badge::Icon(Icon::Alert),
                    headline: "Maharlika Highway",
                    detail: "42 critical potholes",
                    trailing: Trailing::Pill("Urgent"),
                    tone: Tone::Red,
                },
                FeedItem {
                    badge: Badge::Icon(Icon::Alert),
                    headline: "NLEX Segment 4",
                    detail: "28 road cracks",
                    trailing: Trailing::Pill("High"),
                    tone: Tone::Orange,
                },
                FeedItem {
                    badge: Badge::Icon(Icon::Alert),
                    headline: "Quirino Highway",
                    detail: "15 moderate issues",
                    trailing: Trailing::Pill("Medium"),
                    tone: Tone::Yellow,
                },
            ],
        },
    ]),
    Block::Fields {
        title: "YOLOv8 Model Performance",
        action: None,
        fields: &[
            Fact { label: "Precision", value: "94.3%", tone: Some(Tone::Teal) },
            Fact { label: "Recall", value: "91.7%", tone: Some(Tone::Purple) },
            Fact { label: "F1 Score", value: "93.0%", tone: Some(Tone::Cyan) },
            Fact { label: "mAP@50", value: "92.8%", tone: Some(Tone::Emerald) },
        ],
    },
];

// =============================================================================
// UPLOADS
// =============================================================================

const UPLOADS: &[Block] = &[
    Block::StatCards(&[
        StatCard {
            label: "Total Videos",
            value: "1,247",
            caption: "GPS-synced footage",
            tone: Tone::Teal,
            icon: None,
        },
        StatCard {
            label: "Processing Queue",
            value: "18",
            caption: "Pending analysis",
            tone: Tone::Yellow,
            icon: None,
        },
        StatCard {
            label: "Active Contributors",
            value: "156",
            caption: "Drivers/Motorists",
            tone: Tone::Purple,
            icon: None,
        },
        StatCard {
            label: "Data Quality",
            value: "96.2%",
            caption: "GPS accuracy",
            tone: Tone::Emerald,
            icon: None,
        },
    ]),
    Block::Submissions {
        title: "Recent Video Submissions",
        columns: &["Timestamp", "Contributor", "Location (GPS)", "Duration", "Status"],
        rows: &[
            Submission {
                timestamp: "Jan 6, 10:23 AM",
                contributor: "Driver_A45",
                location: "14.6091°N, 121.0223°E",
                duration: "4:32 min",
                status: SubmissionStatus::Processed,
            },
            Submission {
                timestamp: "Jan 6, 10:18 AM",
                contributor: "Driver_C22",
                location: "14.5995°N, 120.9842°E",
                duration: "3:45 min",
                status: SubmissionStatus::Processed,
            },
            Submission {
                timestamp: "Jan 6, 10:15 AM",
                contributor: "Driver_B89",
                location: "14.6349°N, 121.0325°E",
                duration: "5:12 min",
                status: SubmissionStatus::Processing,
            },
            Submission {
                timestamp: "Jan 6, 10:08 AM",
                contributor: "Driver_D12",
                location: "14.5547°N, 121.0244°E",
                duration: "2:58 min",
                status: SubmissionStatus::Processed,
            },
            Submission {
                timestamp: "Jan 6, 10:02 AM",
                contributor: "Driver_E67",
                location: "14.5764°N, 120.9851°E",
                duration: "6:20 min",
                status: SubmissionStatus::Processing,
            },
        ],
    },
    Block::Feed {
        title: "Top Contributors This Month",
        items: &[
            FeedItem {
                badge: Badge::Text("1"),
                headline: "Driver_A45",
                detail: "87 video submissions",
                trailing: Trailing::Highlight("324.5 km covered"),
                tone: Tone::Teal,
            },
            FeedItem {
                badge: Badge::Text("2"),
                headline: "Driver_C22",
                detail: "64 video submissions",
                trailing: Trailing::Note("245.2 km covered"),
                tone: Tone::Slate,
            },
            FeedItem {
                badge: Badge::Text("3"),
                headline: "Driver_B89",
                detail: "52 video submissions",
                trailing: Trailing::Note("198.7 km covered"),
                tone: Tone::Slate,
            },
        ],
    },
];

// =============================================================================
// PROFILE
// =============================================================================

const PROFILE: &[Block] = &[
    Block::Columns(&[
        Block::Fields {
            title: "Personal Information",
            action: Some(CardAction { label: "Edit Profile", icon: Some(Icon::Edit) }),
            fields: &[
                Fact { label: "Username", value: "Driver123", tone: None },
                Fact { label: "Email", value: "driver@roadsense.com", tone: None },
                Fact { label: "Member Since", value: "January 2026", tone: None },
                Fact { label: "Account Type", value: "Contributor", tone: None },
            ],
        },
        Block::Facts {
            title: "Contribution Statistics",
            rows: &[
                Fact { label: "Videos Submitted", value: "24", tone: Some(Tone::Teal) },
                Fact { label: "Distance Tracked", value: "1,250 km", tone: Some(Tone::Teal) },
                Fact { label: "Hazards Detected", value: "156", tone: Some(Tone::Teal) },
                Fact { label: "Contribution Points", value: "850", tone: Some(Tone::Teal) },
            ],
        },
    ]),
    Block::Feed {
        title: "Recent Activity",
        items: &[
            FeedItem {
                badge: Badge::Icon(Icon::Upload),
                headline: "Uploaded video footage",
                detail: "Maharlika Highway - 5.2 km",
                trailing: Trailing::Note("2 hours ago"),
                tone: Tone::Teal,
            },
            FeedItem {
                badge: Badge::Icon(Icon::FileText),
                headline: "Report generated",
                detail: "Monthly summary exported",
                trailing: Trailing::Note("1 day ago"),
                tone: Tone::Purple,
            },
            FeedItem {
                badge: Badge::Icon(Icon::CheckCircle),
                headline: "Achievement unlocked",
                detail: "100 km milestone reached",
                trailing: Trailing::Note("3 days ago"),
                tone: Tone::Emerald,
            },
        ],
    },
];

use super::*;

fn flatten(blocks: &'static [Block]) -> Vec<&'static Block> {
    let mut out = Vec::new();
    for block in blocks {
        match block {
            Block::Columns(inner) => out.extend(flatten(inner)),
            other => out.push(other),
        }
    }
    out
}

#[test]
fn every_page_has_its_own_entry() {
    for page in PageKey::ALL {
        let content = page_content(page);
        assert_eq!(content.page, page);
        assert!(!content.title.is_empty());
        assert!(!content.description.is_empty());
        assert!(!content.blocks.is_empty());
    }
}

#[test]
fn page_titles_match_product_copy() {
    let titles: Vec<&str> = PageKey::ALL.iter().map(|p| page_content(*p).title).collect();
    assert_eq!(
        titles,
        ["System Overview", "GIS Hazard Map", "Analytics & Reports", "Crowdsourced Data", "Profile"]
    );
}

#[test]
fn titles_are_unique_so_exactly_one_block_matches() {
    for page in PageKey::ALL {
        let matching = PageKey::ALL
            .iter()
            .filter(|other| page_content(**other).title == page_content(page).title)
            .count();
        assert_eq!(matching, 1);
    }
}

#[test]
fn overview_hazard_distribution_sums_to_one_hundred() {
    let blocks = flatten(page_content(PageKey::Dashboard).blocks);
    let rows = blocks
        .iter()
        .find_map(|b| match b {
            Block::Bars { title: "Hazard Distribution", rows } => Some(*rows),
            _ => None,
        })
        .unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows.iter().map(|r| u32::from(r.percent)).sum::<u32>(), 100);
}

#[test]
fn bars_and_trends_stay_within_one_hundred_percent() {
    for page in PageKey::ALL {
        for block in flatten(page_content(page).blocks) {
            match block {
                Block::Bars { rows, .. } => assert!(rows.iter().all(|r| r.percent <= 100)),
                Block::Trend { heights, .. } => assert!(heights.iter().all(|h| *h <= 100)),
                _ => {}
            }
        }
    }
}

#[test]
fn submissions_table_rows_match_column_count() {
    let blocks = flatten(page_content(PageKey::Uploads).blocks);
    let (columns, rows) = blocks
        .iter()
        .find_map(|b| match b {
            Block::Submissions { columns, rows, .. } => Some((*columns, *rows)),
            _ => None,
        })
        .unwrap();
    assert_eq!(columns.len(), 5);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows.iter().filter(|r| r.status == SubmissionStatus::Processing).count(), 2);
}

#[test]
fn profile_shows_driver123() {
    let blocks = flatten(page_content(PageKey::Profile).blocks);
    let has_username = blocks.iter().any(|b| match b {
        Block::Fields { fields, .. } => fields.iter().any(|f| f.label == "Username" && f.value == "Driver123"),
        _ => false,
    });
    assert!(has_username);
}

#[test]
fn tone_classes_are_bem_modifiers() {
    assert_eq!(Tone::Teal.class(), "tone--teal");
    assert_eq!(SubmissionStatus::Processed.tone(), Tone::Green);
    assert_eq!(SubmissionStatus::Processing.label(), "⏳ Processing");
}

#[test]
fn card_actions_carry_their_icons() {
    let actions: Vec<CardAction> = PageKey::ALL
        .iter()
        .flat_map(|p| flatten(page_content(*p).blocks))
        .filter_map(|b| match b {
            Block::Fields { action, .. } => *action,
            _ => None,
        })
        .collect();

    assert_eq!(
        actions,
        [
            CardAction { label: "Export Report", icon: None },
            CardAction { label: "Edit Profile", icon: Some(Icon::Edit) },
        ]
    );
}

//! Renders the static content blocks of a dashboard page.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::content::{Badge, Bar, Block, Fact, FeedItem, LegendEntry, StatCard, Submission, Trailing};

/// All blocks of one page, top to bottom.
#[component]
pub fn PageBlocks(blocks: &'static [Block]) -> impl IntoView {
    view! { <div class="page-blocks">{blocks.iter().map(|b| render_block(*b)).collect_view()}</div> }
}

fn render_block(block: Block) -> AnyView {
    match block {
        Block::StatCards(cards) => view! {
            <div class="stat-grid">{cards.iter().map(|c| stat_card(*c)).collect_view()}</div>
        }
        .into_any(),
        Block::Bars { title, rows } => view! {
            <section class="content-card">
                <h2 class="content-card__title">{title}</h2>
                <div class="bar-list">{rows.iter().map(|r| bar_row(*r)).collect_view()}</div>
            </section>
        }
        .into_any(),
        Block::Facts { title, rows } => view! {
            <section class="content-card">
                <h2 class="content-card__title">{title}</h2>
                <div class="fact-list">{rows.iter().map(|f| fact_row(*f)).collect_view()}</div>
            </section>
        }
        .into_any(),
        Block::Fields { title, action, fields } => view! {
            <section class="content-card">
                <div class="content-card__header">
                    <h2 class="content-card__title">{title}</h2>
                    {action.map(|a| {
                        view! {
                            <button class="btn btn--primary btn--small">
                                {a.icon.map(|icon| view! { <IconSvg icon=icon/> })}
                                {a.label}
                            </button>
                        }
                    })}
                </div>
                <div class="field-grid">{fields.iter().map(|f| field(*f)).collect_view()}</div>
            </section>
        }
        .into_any(),
        Block::Feed { title, items } => view! {
            <section class="content-card">
                <h2 class="content-card__title">{title}</h2>
                <div class="feed">{items.iter().map(|i| feed_item(*i)).collect_view()}</div>
            </section>
        }
        .into_any(),
        Block::MapCanvas { caption, detail } => view! {
            <section class="content-card map-canvas">
                <IconSvg icon=Icon::Map class="map-canvas__icon"/>
                <p class="map-canvas__caption">{caption}</p>
                <p class="map-canvas__detail">{detail}</p>
            </section>
        }
        .into_any(),
        Block::Legend { title, entries } => view! {
            <section class="content-card">
                <h3 class="content-card__subtitle">{title}</h3>
                <div class="legend">{entries.iter().map(|e| legend_entry(*e)).collect_view()}</div>
            </section>
        }
        .into_any(),
        Block::Trend { title, heights, labels } => view! {
            <section class="content-card">
                <h2 class="content-card__title">{title}</h2>
                <div class="trend">
                    {heights
                        .iter()
                        .map(|h| view! { <div class="trend__bar" style:height=format!("{h}%")></div> })
                        .collect_view()}
                </div>
                <div class="trend__labels">
                    {labels.iter().map(|l| view! { <span>{*l}</span> }).collect_view()}
                </div>
            </section>
        }
        .into_any(),
        Block::Submissions { title, columns, rows } => view! {
            <section class="content-card">
                <h2 class="content-card__title">{title}</h2>
                <table class="data-table">
                    <thead>
                        <tr>{columns.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}</tr>
                    </thead>
                    <tbody>{rows.iter().map(|r| submission_row(*r)).collect_view()}</tbody>
                </table>
            </section>
        }
        .into_any(),
        Block::Columns(inner) => view! {
            <div class="columns">{inner.iter().map(|b| render_block(*b)).collect_view()}</div>
        }
        .into_any(),
    }
}

fn stat_card(card: StatCard) -> impl IntoView {
    view! {
        <div class="content-card stat-card">
            <div class="stat-card__body">
                <h3 class="stat-card__label">{card.label}</h3>
                <p class=format!("stat-card__value {}", card.tone.class())>{card.value}</p>
                <p class="stat-card__caption">{card.caption}</p>
            </div>
            {card.icon.map(|icon| {
                view! {
                    <div class=format!("stat-card__icon {}", card.tone.class())>
                        <IconSvg icon=icon/>
                    </div>
                }
            })}
        </div>
    }
}

fn bar_row(bar: Bar) -> impl IntoView {
    view! {
        <div class="bar-list__row">
            <div class="bar-list__labels">
                <span>{bar.label}</span>
                <span class="bar-list__value">{bar.value}</span>
            </div>
            <div class="bar-list__track">
                <div class=format!("bar-list__fill {}", bar.tone.class()) style:width=format!("{}%", bar.percent)></div>
            </div>
        </div>
    }
}

fn value_class(base: &str, fact: Fact) -> String {
    match fact.tone {
        Some(tone) => format!("{base} {}", tone.class()),
        None => base.to_owned(),
    }
}

fn fact_row(fact: Fact) -> impl IntoView {
    view! {
        <div class="fact-list__row">
            <span class="fact-list__label">{fact.label}</span>
            <span class=value_class("fact-list__value", fact)>{fact.value}</span>
        </div>
    }
}

fn field(fact: Fact) -> impl IntoView {
    view! {
        <div class="field-grid__item">
            <p class="field-grid__label">{fact.label}</p>
            <p class=value_class("field-grid__value", fact)>{fact.value}</p>
        </div>
    }
}

fn feed_item(item: FeedItem) -> impl IntoView {
    let badge = match item.badge {
        Badge::Text(text) => view! { <span>{text}</span> }.into_any(),
        Badge::Icon(icon) => view! { <IconSvg icon=icon/> }.into_any(),
    };
    let trailing = match item.trailing {
        Trailing::Note(text) => view! { <span class="feed__note">{text}</span> }.into_any(),
        Trailing::Highlight(text) => {
            view! { <span class=format!("feed__highlight {}", item.tone.class())>{text}</span> }.into_any()
        }
        Trailing::Pill(text) => view! { <span class=format!("pill {}", item.tone.class())>{text}</span> }.into_any(),
    };
    view! {
        <div class=format!("feed__item {}", item.tone.class())>
            <div class="feed__lead">
                <div class="feed__badge">{badge}</div>
                <div>
                    <p class="feed__headline">{item.headline}</p>
                    <p class="feed__detail">{item.detail}</p>
                </div>
            </div>
            {trailing}
        </div>
    }
}

fn legend_entry(entry: LegendEntry) -> impl IntoView {
    view! {
        <div class="legend__entry">
            <div class=format!("legend__swatch {}", entry.tone.class())></div>
            <span>{entry.label}</span>
        </div>
    }
}

fn submission_row(row: Submission) -> impl IntoView {
    view! {
        <tr>
            <td>{row.timestamp}</td>
            <td>{row.contributor}</td>
            <td>{row.location}</td>
            <td>{row.duration}</td>
            <td>
                <span class=row.status.tone().class()>{row.status.label()}</span>
            </td>
        </tr>
    }
}

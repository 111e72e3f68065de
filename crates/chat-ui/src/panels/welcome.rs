//! Welcome screen — shown while the conversation is empty.
//!
//! Quick-start suggestion cards, a news panel, and trending topic chips.
//! Clicking any of them only fills the input draft; nothing is sent.

use egui::{self, RichText, ScrollArea};

use crate::state::UiState;
use crate::theme::*;

pub struct Suggestion {
    pub title: &'static str,
    pub description: &'static str,
}

pub const QUICK_SUGGESTIONS: [Suggestion; 4] = [
    Suggestion {
        title: "Explain complex concepts",
        description: "Break down difficult topics into simple terms",
    },
    Suggestion {
        title: "Research assistance",
        description: "Find and analyze information from various sources",
    },
    Suggestion {
        title: "Data analysis",
        description: "Analyze trends and patterns in your data",
    },
    Suggestion {
        title: "Current events",
        description: "Get updates on latest news and developments",
    },
];

pub struct NewsItem {
    pub title: &'static str,
    pub source: &'static str,
    pub time: &'static str,
    pub category: &'static str,
}

pub const NEWS_ITEMS: [NewsItem; 4] = [
    NewsItem {
        title: "AI Breakthrough in Medical Diagnosis",
        source: "TechNews",
        time: "2h ago",
        category: "Technology",
    },
    NewsItem {
        title: "Climate Change Summit Reaches Key Agreement",
        source: "Global Times",
        time: "4h ago",
        category: "Environment",
    },
    NewsItem {
        title: "New Space Telescope Discovers Distant Galaxy",
        source: "Space Daily",
        time: "6h ago",
        category: "Science",
    },
    NewsItem {
        title: "Cryptocurrency Market Shows Recovery Signs",
        source: "Finance World",
        time: "8h ago",
        category: "Finance",
    },
];

pub const TRENDING_TOPICS: [&str; 6] = [
    "AI Development",
    "Climate Tech",
    "Space Exploration",
    "Quantum Computing",
    "Renewable Energy",
    "Biotechnology",
];

/// Draft text a suggestion card or trending chip produces.
pub fn suggestion_prompt(topic: &str) -> String {
    format!("Tell me about {topic}")
}

/// Render the welcome screen into the available space.
pub fn welcome_screen(ui: &mut egui::Ui, state: &mut UiState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("What can I help you with today?")
                        .color(ACCENT_SOFT)
                        .size(28.0)
                        .strong(),
                );
                ui.add_space(4.0);
                ui.label(
                    RichText::new(
                        "Ask me anything and I'll provide detailed, accurate answers \
                         with sources and analysis.",
                    )
                    .color(TEXT_SECONDARY),
                );
            });
            ui.add_space(24.0);

            section_heading(ui, "Quick Start");
            ui.columns(2, |cols| {
                for (idx, suggestion) in QUICK_SUGGESTIONS.iter().enumerate() {
                    let col = &mut cols[idx % 2];
                    if card(col, |ui| {
                        ui.label(
                            RichText::new(suggestion.title)
                                .color(TEXT_PRIMARY)
                                .strong(),
                        );
                        ui.label(RichText::new(suggestion.description).color(TEXT_SECONDARY).small());
                    }) {
                        state.input_text = suggestion_prompt(&suggestion.title.to_lowercase());
                    }
                }
            });
            ui.add_space(16.0);

            section_heading(ui, "Latest News");
            ui.columns(2, |cols| {
                for (idx, item) in NEWS_ITEMS.iter().enumerate() {
                    let col = &mut cols[idx % 2];
                    card(col, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(item.category).color(ACCENT_SOFT).small());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(RichText::new(item.time).color(TEXT_MUTED).small());
                                },
                            );
                        });
                        ui.label(RichText::new(item.title).color(TEXT_PRIMARY).strong());
                        ui.label(RichText::new(item.source).color(TEXT_MUTED).small());
                    });
                }
            });
            ui.add_space(16.0);

            section_heading(ui, "Trending Topics");
            ui.horizontal_wrapped(|ui| {
                for topic in TRENDING_TOPICS {
                    let chip = egui::Button::new(RichText::new(topic).color(TEXT_PRIMARY))
                        .fill(BG_SURFACE)
                        .corner_radius(egui::CornerRadius::same(16));
                    if ui.add(chip).clicked() {
                        state.input_text = suggestion_prompt(topic);
                    }
                }
            });
            ui.add_space(16.0);
        });
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).color(TEXT_PRIMARY).size(18.0).strong());
    ui.add_space(6.0);
}

/// A clickable card. Returns true when clicked.
fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) -> bool {
    let response = egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(CARD_ROUNDING)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        })
        .response;
    let response = response.interact(egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.clicked()
}

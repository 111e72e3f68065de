//! History sidebar — the list of stored sessions plus the New Chat button.

use chat_types::session::{SessionId, SessionSummary};
use egui::{self, RichText, ScrollArea};

use crate::state::{UiAction, UiState};
use crate::theme::*;

/// Render the sidebar. `sessions` is newest-first; `active` highlights the
/// session currently in view.
pub fn history_sidebar(
    ui: &mut egui::Ui,
    state: &mut UiState,
    sessions: &[SessionSummary],
    active: Option<SessionId>,
) -> Option<UiAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label(RichText::new("Chat History").color(TEXT_PRIMARY).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✕").clicked() {
                state.history_open = false;
            }
        });
    });
    ui.separator();

    let new_chat = egui::Button::new(RichText::new("+ New Chat").color(TEXT_PRIMARY).strong())
        .fill(ACCENT)
        .corner_radius(CARD_ROUNDING)
        .min_size(egui::Vec2::new(ui.available_width(), 32.0));
    if ui.add(new_chat).clicked() {
        action = Some(UiAction::NewChat);
        state.history_open = false;
    }
    ui.add_space(8.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for session in sessions {
                if session_row(ui, session, active == Some(session.id)) {
                    action = Some(UiAction::LoadSession(session.id));
                    state.history_open = false;
                }
                ui.add_space(4.0);
            }
        });

    action
}

/// One clickable session entry. Returns true when clicked.
fn session_row(ui: &mut egui::Ui, session: &SessionSummary, is_active: bool) -> bool {
    let bg = if is_active { BG_SURFACE } else { BG_SECONDARY };
    let response = egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(&session.title)
                    .color(TEXT_PRIMARY)
                    .strong()
                    .small(),
            );
            ui.label(RichText::new(&session.preview).color(TEXT_MUTED).small());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(
                        session
                            .created_at
                            .with_timezone(&chrono::Local)
                            .format("%b %e, %Y")
                            .to_string(),
                    )
                    .color(TEXT_MUTED)
                    .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{} messages", session.message_count))
                            .color(TEXT_MUTED)
                            .small(),
                    );
                });
            });
        })
        .response
        .interact(egui::Sense::click());

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.clicked()
}

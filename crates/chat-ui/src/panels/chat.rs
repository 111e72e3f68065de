//! Conversation panel — transcript, typing indicator, and the input area.

use chat_core::controller::TurnState;
use chat_types::message::{Message, Role};
use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use crate::panels::welcome;
use crate::state::{input_rows, strip_submit_newline, UiAction, UiState};
use crate::theme::*;

const INPUT_AREA_HEIGHT: f32 = 84.0;

/// Render the conversation panel. Returns the action the user triggered,
/// if any.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    messages: &[Message],
    turn_state: TurnState,
) -> Option<UiAction> {
    let mut action = None;
    let awaiting = turn_state == TurnState::Awaiting;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                let transcript_height = ui.available_height() - INPUT_AREA_HEIGHT;

                if messages.is_empty() {
                    ui.allocate_ui(Vec2::new(ui.available_width(), transcript_height), |ui| {
                        welcome::welcome_screen(ui, state);
                    });
                } else {
                    ScrollArea::vertical()
                        .max_height(transcript_height)
                        .auto_shrink([false, false])
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for message in messages {
                                render_message(ui, message);
                                ui.add_space(6.0);
                            }
                            if awaiting {
                                render_typing_indicator(ui);
                            }
                        });
                }

                ui.add_space(8.0);
                if let Some(a) = input_area(ui, state, awaiting) {
                    action = Some(a);
                }
            });
        });

    action
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (label, label_color, bg) = match (message.role, message.failed) {
        (Role::User, _) => ("You", TEXT_SECONDARY, BG_SECONDARY),
        (Role::Assistant, false) => ("AI Assistant", ACCENT_SOFT, BG_SECONDARY),
        (Role::Assistant, true) => ("AI Assistant", ERROR, ERROR_BG),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).color(label_color).strong().small());
                ui.label(
                    RichText::new(
                        message
                            .timestamp
                            .with_timezone(&chrono::Local)
                            .format("%H:%M")
                            .to_string(),
                    )
                    .color(TEXT_MUTED)
                    .small(),
                );
            });
            let body_color = if message.failed { ERROR } else { TEXT_PRIMARY };
            ui.label(RichText::new(&message.content).color(body_color));

            if !message.sources.is_empty() {
                ui.add_space(4.0);
                ui.label(RichText::new("Sources").color(TEXT_SECONDARY).small().strong());
                for source in &message.sources {
                    egui::Frame::default()
                        .fill(BG_SURFACE)
                        .corner_radius(PANEL_ROUNDING)
                        .inner_margin(6.0)
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&source.title).color(TEXT_PRIMARY).small());
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    ui.label(
                                        RichText::new(&source.domain).color(TEXT_MUTED).small(),
                                    );
                                });
                            });
                        });
                }
            }
        });
}

fn render_typing_indicator(ui: &mut egui::Ui) {
    // Cycle one to three dots on a half-second beat
    let time = ui.input(|i| i.time);
    let dots = ".".repeat((time * 2.0) as usize % 3 + 1);
    ui.horizontal(|ui| {
        ui.label(RichText::new("AI Assistant").color(ACCENT_SOFT).strong().small());
        ui.label(RichText::new("thinking").color(TEXT_MUTED).small());
        ui.label(RichText::new(dots).color(TEXT_MUTED).small());
    });
    ui.ctx().request_repaint_after(std::time::Duration::from_millis(250));
}

fn input_area(ui: &mut egui::Ui, state: &mut UiState, awaiting: bool) -> Option<UiAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(CARD_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let rows = input_rows(&state.input_text);
                let output = egui::TextEdit::multiline(&mut state.input_text)
                    .hint_text("Ask me anything...")
                    .desired_rows(rows)
                    .desired_width(ui.available_width() - 70.0)
                    .font(egui::FontId::proportional(14.0))
                    .show(ui);
                let response = output.response;

                // Enter submits; Shift+Enter keeps the newline the editor
                // already inserted. The newline lands at the cursor, which
                // may sit mid-draft.
                let submit_key = response.has_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift);
                if submit_key {
                    let cursor = output
                        .state
                        .cursor
                        .char_range()
                        .map(|range| range.primary.index)
                        .unwrap_or_else(|| state.input_text.chars().count());
                    state.input_text = strip_submit_newline(&state.input_text, cursor);
                }

                let can_send = !state.input_text.trim().is_empty() && !awaiting;
                let send_btn = ui.add_enabled(
                    can_send,
                    egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                        .fill(if can_send { ACCENT } else { BG_SURFACE })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(60.0, 0.0)),
                );

                if (submit_key && can_send) || send_btn.clicked() {
                    let text = state.input_text.trim().to_string();
                    state.input_text.clear();
                    action = Some(UiAction::Submit(text));
                    response.request_focus();
                }
            });
        });

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Press Enter to send, Shift + Enter for new line")
                .color(TEXT_MUTED)
                .small(),
        );
    });

    action
}

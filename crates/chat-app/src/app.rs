//! Main egui application — composes the panels and owns the stores.
//!
//! All conversation state mutates on the UI thread. The only off-thread
//! work is a dispatched assistant request; its reply comes home through
//! the event bus and is applied here during `update`.

use std::sync::Arc;
use std::time::Duration;

use egui::{CentralPanel, RichText, SidePanel, TopBottomPanel};

use chat_core::controller::ConversationController;
use chat_core::event_bus::EventBus;
use chat_core::ports::AssistantPort;
use chat_core::store::SessionStore;
use chat_platform::dispatch::dispatch;
use chat_platform::responder::MockResponder;
use chat_platform::seed;
use chat_types::event::ChatEvent;
use chat_ui::panels::{chat, sidebar};
use chat_ui::state::{UiAction, UiState};
use chat_ui::theme;

pub struct ChatApp {
    ui_state: UiState,
    store: SessionStore,
    controller: ConversationController,
    bus: EventBus,
    responder: Arc<dyn AssistantPort>,
}

impl ChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        theme::apply_theme(&cc.egui_ctx);
        Self::with_responder(Arc::new(MockResponder::new()))
    }

    fn with_responder(responder: Arc<dyn AssistantPort>) -> Self {
        Self {
            ui_state: UiState::new(),
            store: SessionStore::with_sessions(seed::demo_sessions()),
            controller: ConversationController::new(),
            bus: EventBus::new(),
            responder,
        }
    }

    /// Apply replies that arrived since the last frame.
    fn drain_events(&mut self) {
        for event in self.bus.drain() {
            match event {
                ChatEvent::ReplyReady { request_id, reply } => {
                    self.controller.resolve(&mut self.store, request_id, reply);
                }
            }
        }
    }

    fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::Submit(text) => {
                match self.controller.submit(&mut self.store, &text) {
                    Ok(turn) => dispatch(self.responder.clone(), turn, self.bus.clone()),
                    // Empty input and Busy both leave state untouched; the
                    // UI already disables send for them.
                    Err(e) => log::warn!("submit rejected: {e}"),
                }
            }
            UiAction::NewChat => {
                self.controller.start_new_chat(&mut self.store);
                // A fresh conversation also starts with a fresh draft
                self.ui_state.input_text.clear();
            }
            UiAction::LoadSession(id) => {
                if let Err(e) = self.controller.load_session(&mut self.store, id) {
                    log::warn!("could not load session: {e}");
                }
            }
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let toggle = if self.ui_state.history_open {
                "✕ History"
            } else {
                "☰ History"
            };
            if ui.button(toggle).clicked() {
                self.ui_state.history_open = !self.ui_state.history_open;
            }
            ui.label(
                RichText::new("✨ AI Assistant")
                    .color(theme::ACCENT_SOFT)
                    .size(18.0)
                    .strong(),
            );
        });
        ui.add_space(4.0);
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        // Keep polling while a reply is in flight so the bus is drained
        // promptly even without user input.
        if self.controller.is_awaiting() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        let mut action: Option<UiAction> = None;

        TopBottomPanel::top("header").show(ctx, |ui| {
            self.render_header(ui);
        });

        if self.ui_state.history_open {
            let summaries = self.store.summaries();
            let active = self.store.active();
            SidePanel::left("history")
                .default_width(300.0)
                .show(ctx, |ui| {
                    action = sidebar::history_sidebar(ui, &mut self.ui_state, &summaries, active);
                });
        }

        let panel_action = CentralPanel::default().show(ctx, |ui| {
            chat::chat_panel(
                ui,
                &mut self.ui_state,
                self.controller.messages(),
                self.controller.state(),
            )
        });
        if action.is_none() {
            action = panel_action.inner;
        }

        if let Some(action) = action {
            self.apply_action(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> ChatApp {
        ChatApp::with_responder(Arc::new(MockResponder::instant()))
    }

    #[test]
    fn test_new_chat_clears_draft_and_conversation() {
        let mut app = test_app();
        app.apply_action(UiAction::Submit("hello".to_string()));
        app.ui_state.input_text = "half-typed draft".to_string();

        app.apply_action(UiAction::NewChat);

        assert!(app.ui_state.input_text.is_empty());
        assert!(app.controller.messages().is_empty());
        assert!(app.store.active().is_none());
    }

    #[test]
    fn test_load_session_routes_through_controller() {
        let mut app = test_app();
        let target = app.store.summaries()[0].id;

        app.apply_action(UiAction::LoadSession(target));

        assert_eq!(app.store.active(), Some(target));
        assert_eq!(app.controller.messages().len(), 2);
    }
}

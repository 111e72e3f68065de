#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use chat_core::controller::ConversationController;
    use chat_core::event_bus::EventBus;
    use chat_core::ports::AssistantPort;
    use chat_core::store::SessionStore;
    use chat_types::event::ChatEvent;
    use chat_types::reply::AssistantRequest;

    use crate::dispatch::dispatch;
    use crate::responder::MockResponder;
    use crate::seed::demo_sessions;

    fn request(prompt: &str) -> AssistantRequest {
        AssistantRequest {
            prompt: prompt.to_string(),
            history: Vec::new(),
        }
    }

    // ─── MockResponder Tests ─────────────────────────────────

    #[test]
    fn test_mock_reply_quotes_the_prompt() {
        let responder = MockResponder::instant();
        let reply = futures::executor::block_on(responder.respond(request("quantum computing")))
            .unwrap();
        assert!(reply.content.contains("\"quantum computing\""));
        assert!(reply.content.contains("demo response"));
    }

    #[test]
    fn test_mock_reply_carries_two_demo_sources() {
        let responder = MockResponder::instant();
        let reply = futures::executor::block_on(responder.respond(request("anything"))).unwrap();
        assert_eq!(reply.sources.len(), 2);
        assert_eq!(reply.sources[0].domain, "example.com");
        assert_eq!(reply.sources[1].domain, "demo.org");
    }

    #[test]
    fn test_mock_honors_delay() {
        let responder = MockResponder::with_delay(Duration::from_millis(30));
        let start = Instant::now();
        futures::executor::block_on(responder.respond(request("slow"))).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    // ─── Dispatch Tests ──────────────────────────────────────

    fn wait_for_events(bus: &EventBus) -> Vec<ChatEvent> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !bus.has_pending() {
            assert!(Instant::now() < deadline, "no reply arrived on the bus");
            std::thread::sleep(Duration::from_millis(5));
        }
        bus.drain()
    }

    #[test]
    fn test_dispatch_emits_tagged_reply_on_bus() {
        let mut store = SessionStore::new();
        let mut controller = ConversationController::new();
        let bus = EventBus::new();

        let turn = controller.submit(&mut store, "hello dispatcher").unwrap();
        let expected_id = turn.request_id;
        dispatch(Arc::new(MockResponder::instant()), turn, bus.clone());

        match &wait_for_events(&bus)[..] {
            [ChatEvent::ReplyReady { request_id, reply }] => {
                assert_eq!(*request_id, expected_id);
                let reply = reply.as_ref().unwrap();
                assert!(reply.content.contains("hello dispatcher"));
            }
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[test]
    fn test_dispatched_reply_completes_the_turn() {
        let mut store = SessionStore::new();
        let mut controller = ConversationController::new();
        let bus = EventBus::new();

        let turn = controller.submit(&mut store, "full cycle").unwrap();
        dispatch(Arc::new(MockResponder::instant()), turn, bus.clone());

        for event in wait_for_events(&bus) {
            let ChatEvent::ReplyReady { request_id, reply } = event;
            assert!(controller.resolve(&mut store, request_id, reply));
        }
        assert_eq!(controller.messages().len(), 2);
        assert!(!controller.is_awaiting());
    }

    // ─── Seed Tests ──────────────────────────────────────────

    #[test]
    fn test_demo_sessions_shape() {
        let sessions = demo_sessions();
        assert_eq!(sessions.len(), 3);
        assert_eq!(sessions[0].title, "Python data analysis tips");
        for session in &sessions {
            assert_eq!(session.message_count(), 2);
            assert_eq!(session.messages[0].content, session.preview);
        }
    }

    #[test]
    fn test_demo_sessions_newest_first() {
        let sessions = demo_sessions();
        assert!(sessions[0].created_at > sessions[1].created_at);
        assert!(sessions[1].created_at > sessions[2].created_at);
    }

    #[test]
    fn test_demo_sessions_load_into_store() {
        let mut store = SessionStore::with_sessions(demo_sessions());
        let mut controller = ConversationController::new();
        let target = store.summaries()[1].id;

        controller.load_session(&mut store, target).unwrap();
        assert_eq!(
            controller.messages()[0].content,
            "Explain neural networks in simple terms"
        );
        assert_eq!(controller.messages().len(), 2);
    }
}

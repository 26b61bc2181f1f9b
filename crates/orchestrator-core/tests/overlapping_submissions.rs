use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use orchestrator_core::{
    mocks::ChannelOutbound,
    ports::{InterpreterPort, SubmissionError},
    SubmissionCore,
};
use protocol::{Interpretation, Message};
use serde_json::json;
use tokio::sync::{mpsc, oneshot};

/// Interpreter whose responses are released by the test, keyed by the
/// submitted text, so settlement order can be forced.
struct GatedInterpreter {
    gates: Mutex<HashMap<String, oneshot::Receiver<Interpretation>>>,
}

#[async_trait::async_trait]
impl InterpreterPort for GatedInterpreter {
    async fn interpret(&self, dream: &str) -> Result<Interpretation, SubmissionError> {
        let gate = self
            .gates
            .lock()
            .unwrap()
            .remove(dream)
            .expect("unexpected dream text");
        Ok(gate.await.expect("gate dropped"))
    }
}

/// Two overlapping submissions: the older one settles last, and its result
/// is dropped instead of overwriting the newer one.
#[tokio::test]
async fn stale_result_is_dropped_silently() {
    let (tx, mut rx) = mpsc::channel(10);

    let (release_first, gate_first) = oneshot::channel();
    let (release_second, gate_second) = oneshot::channel();
    let mut gates = HashMap::new();
    gates.insert("first dream".to_string(), gate_first);
    gates.insert("second dream".to_string(), gate_second);

    let core = Arc::new(SubmissionCore::new(
        GatedInterpreter { gates: Mutex::new(gates) },
        ChannelOutbound(tx),
    ));

    let c1 = core.clone();
    let t1 = tokio::spawn(async move {
        c1.handle(Message::submit_dream("first dream", None)).await
    });
    // token 1 is allocated before the second submission starts
    assert!(matches!(
        rx.recv().await.unwrap(),
        Message::SubmissionStarted(s) if s.token == 1
    ));

    let c2 = core.clone();
    let t2 = tokio::spawn(async move {
        c2.handle(Message::submit_dream("second dream", None)).await
    });
    assert!(matches!(
        rx.recv().await.unwrap(),
        Message::SubmissionStarted(s) if s.token == 2
    ));

    // Newer submission settles first and is surfaced.
    release_second
        .send(Interpretation {
            archetype: "Sage".into(),
            content: json!("calm"),
        })
        .unwrap();
    match rx.recv().await.unwrap() {
        Message::InterpretationReady(r) => {
            assert_eq!(r.token, 2);
            assert_eq!(r.archetype, "Sage");
        }
        other => panic!("expected InterpretationReady, got {:?}", other),
    }
    t2.await.unwrap().unwrap();

    // The older submission settles afterwards: dropped, log line only.
    release_first
        .send(Interpretation {
            archetype: "Nightmare".into(),
            content: json!("dread"),
        })
        .unwrap();
    t1.await.unwrap().unwrap();

    match rx.recv().await.unwrap() {
        Message::Status(s) => assert!(s.text.contains("stale")),
        other => panic!("expected stale-drop Status, got {:?}", other),
    }
    assert!(rx.try_recv().is_err(), "stale result must never surface");
}

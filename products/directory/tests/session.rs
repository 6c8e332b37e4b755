mod common;

use std::collections::BTreeSet;
use std::time::Duration;

use futures::channel::mpsc;
use products_directory::{
    CardHandle, DirectoryController, EmployeeCardView, LoadSummary, MemoryDocument, Turn, UiEvent,
    load_all, run,
};

use common::{Reply, ScriptedProvider, person};

fn controller() -> DirectoryController<MemoryDocument> {
    DirectoryController::with_cards(MemoryDocument::new(), EmployeeCardView::with_seed(9))
}

fn card_handle(controller: &DirectoryController<MemoryDocument>, name: &str) -> CardHandle {
    controller
        .document()
        .cards()
        .find(|card| card.name == name)
        .map(|card| card.handle)
        .expect("card rendered")
}

#[tokio::test]
async fn failed_slots_do_not_stop_siblings() {
    let mut replies = Vec::new();
    for i in 0..12 {
        if i % 5 == 1 {
            replies.push(Reply::Fail);
        } else {
            replies.push(Reply::Person(person("Emp", &format!("No{i}"), &format!("emp{i}"))));
        }
    }
    let provider = ScriptedProvider::new(replies);
    let mut controller = controller();

    let summary = load_all(&mut controller, &provider, 12).await;

    assert_eq!(
        summary,
        LoadSummary {
            requested: 12,
            loaded: 9,
            failed: 3
        }
    );
    assert_eq!(controller.registry().len(), 9);
    assert_eq!(controller.document().cards().count(), 9);
    assert_eq!(controller.registry().filtered_len(), 9);
}

#[tokio::test]
async fn employees_appear_in_completion_order() {
    let provider = ScriptedProvider::new(vec![
        Reply::Delayed(Duration::from_millis(60), person("Slow", "One", "slow1")),
        Reply::Delayed(Duration::from_millis(5), person("Quick", "Two", "quick2")),
        Reply::Person(person("Instant", "Three", "instant3")),
    ]);
    let mut controller = controller();

    load_all(&mut controller, &provider, 3).await;

    let loaded: BTreeSet<_> = controller
        .registry()
        .all()
        .iter()
        .map(|e| e.username().to_string())
        .collect();
    assert_eq!(
        loaded,
        BTreeSet::from(["instant3".into(), "quick2".into(), "slow1".into()])
    );
    let last = controller.registry().all().last().unwrap();
    assert_eq!(last.username(), "slow1");
    let rendered: Vec<_> = controller.document().cards().map(|c| c.name.clone()).collect();
    assert_eq!(rendered.last().map(String::as_str), Some("Slow One"));
}

#[tokio::test]
async fn search_then_navigate_in_one_session() {
    let provider = ScriptedProvider::new(vec![
        Reply::Person(person("Ann", "Lee", "ann9")),
        Reply::Person(person("Ben", "Lee", "ben3")),
        Reply::Person(person("Cara", "Moss", "cmoss")),
    ]);
    let mut controller = controller();
    let (tx, rx) = mpsc::unbounded();
    let mut tx = Some(tx);
    let mut loaded = 0;

    let summary = run(&mut controller, &provider, 3, rx, |controller, turn| {
        let Some(sender) = tx.as_ref() else {
            return;
        };
        match turn {
            Turn::Loaded { employee, .. } => {
                if employee.is_some() {
                    loaded += 1;
                }
                if loaded == 3 {
                    sender
                        .unbounded_send(UiEvent::SearchInput("LEE".into()))
                        .unwrap();
                }
            }
            Turn::Event {
                event: UiEvent::SearchInput(_),
                outcome,
            } => {
                assert!(outcome.is_ok());
                let ben = card_handle(controller, "Ben Lee");
                sender.unbounded_send(UiEvent::CardSelected(ben)).unwrap();
                sender.unbounded_send(UiEvent::ModalNext).unwrap();
                tx = None;
            }
            Turn::Event { .. } => {}
        }
    })
    .await;

    assert_eq!(summary.loaded, 3);
    let registry = controller.registry();
    let filtered: Vec<_> = registry.filtered().map(|e| e.name().to_string()).collect();
    let mut sorted = filtered.clone();
    sorted.sort();
    assert_eq!(sorted, ["Ann Lee", "Ben Lee"]);

    let doc = controller.document();
    let cards: Vec<_> = doc.cards().map(|c| c.name.clone()).collect();
    assert_eq!(cards, filtered);

    let ben = registry
        .filtered()
        .find(|e| e.username() == "ben3")
        .map(|e| e.id())
        .unwrap();
    let after_ben = registry.next(ben).unwrap().name().to_string();
    let modals: Vec<_> = doc.modals().map(|m| m.name.clone()).collect();
    assert_eq!(modals, [after_ben]);
    assert_eq!(doc.overlay_count(), 1);
    assert_eq!(doc.modals().next().unwrap().birthday, "6/15/1990");
}

#[tokio::test]
async fn session_ends_with_hung_fetches_outstanding() {
    let provider = ScriptedProvider::new(vec![
        Reply::Person(person("Ann", "Lee", "ann9")),
        Reply::Person(person("Ben", "Lee", "ben3")),
        Reply::Hang,
    ]);
    let mut controller = controller();
    let (tx, rx) = mpsc::unbounded::<UiEvent>();
    let mut tx = Some(tx);

    let summary = run(&mut controller, &provider, 3, rx, |controller, _turn| {
        if controller.registry().len() == 2 {
            tx.take();
        }
    })
    .await;

    assert_eq!(summary.loaded, 2);
    assert_eq!(summary.pending(), 1);
    assert_eq!(controller.document().cards().count(), 2);
}

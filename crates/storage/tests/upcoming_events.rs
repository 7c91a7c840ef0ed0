/// Upcoming event tests against the in-memory store
///
/// Tests cover:
/// - Name ordering of the public listing
/// - Validation and trimming on insert
use chrono::NaiveDate;
use storage::{
    MemoryStore, dto::events::NewUpcomingEvent, error::StorageError, services::events,
};

fn event(name: &str, day: u32) -> NewUpcomingEvent {
    NewUpcomingEvent {
        name: name.to_string(),
        description: None,
        location: None,
        date: NaiveDate::from_ymd_opt(2025, 11, day)
            .and_then(|d| d.and_hms_opt(18, 0, 0))
            .unwrap(),
    }
}

#[tokio::test]
async fn events_listed_by_name() {
    let store = MemoryStore::new();
    events::add_upcoming_event(&store, &event("Winter Cup", 1))
        .await
        .unwrap();
    events::add_upcoming_event(&store, &event("autumn sprint", 20))
        .await
        .unwrap();
    events::add_upcoming_event(&store, &event("Beginner Night", 5))
        .await
        .unwrap();

    let names: Vec<String> = events::list_upcoming_events(&store)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();

    assert_eq!(names, ["autumn sprint", "Beginner Night", "Winter Cup"]);
}

#[tokio::test]
async fn event_fields_are_trimmed_on_insert() {
    let store = MemoryStore::new();
    let created = events::add_upcoming_event(
        &store,
        &NewUpcomingEvent {
            location: Some("  Lab 3 ".to_string()),
            description: Some(" ".to_string()),
            ..event("  Kickoff  ", 3)
        },
    )
    .await
    .unwrap();

    assert_eq!(created.name, "Kickoff");
    assert_eq!(created.location.as_deref(), Some("Lab 3"));
    assert_eq!(created.description, None);
    assert_eq!(events::list_upcoming_events(&store).await.unwrap(), vec![created]);
}

#[tokio::test]
async fn blank_event_name_is_rejected_without_writing() {
    let store = MemoryStore::new();

    let err = events::add_upcoming_event(&store, &event("   ", 3))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::Validation(_)));
    assert!(events::list_upcoming_events(&store).await.unwrap().is_empty());
}

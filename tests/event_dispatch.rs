//! Handlers publishing through the outbound queue and dispatcher.

mod common;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use assessment_service::adapters::memory::{
    InMemoryAssessmentRepository, InMemoryFeedbackRepository, InMemoryUserDirectory,
};
use assessment_service::adapters::{outbound_queue, EventDispatcher, InMemoryEventBus};
use assessment_service::application::{AssessmentServices, CreateAssessmentCommand};
use assessment_service::domain::assessment::SubmissionStatus;
use assessment_service::domain::foundation::{EventKind, UserId};

use common::TestApp;

#[tokio::test]
async fn queued_events_reach_the_transport() {
    let seeded = TestApp::new().await;
    let transport = Arc::new(InMemoryEventBus::new());
    let (publisher, queue) = outbound_queue(16);
    let dispatcher = EventDispatcher::new(queue, transport.clone());
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let task = tokio::spawn(dispatcher.run(shutdown_rx));

    let services = AssessmentServices::new(
        seeded.catalog.clone(),
        seeded.templates.clone(),
        Arc::new(InMemoryAssessmentRepository::new()),
        Arc::new(InMemoryFeedbackRepository::new()),
        Arc::new(InMemoryUserDirectory::new()),
        Arc::new(publisher),
        "assessment-service-test",
    );

    services
        .create_assessment_handler()
        .handle(CreateAssessmentCommand {
            user_id: UserId::new(),
            reflection: "Quarterly reflection".to_string(),
            status: SubmissionStatus::Submitted,
            ratings: seeded.self_ratings(&[("Execution & Results", 4)]).await,
        })
        .await
        .unwrap();

    for _ in 0..50 {
        if transport.event_count() > 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    shutdown_tx.send(true).unwrap();
    let stats = task.await.unwrap();

    assert_eq!(stats.delivered(), 1);
    let events = transport.events_of_kind(EventKind::AssessmentSubmitted);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].source, "assessment-service-test");
}

#[tokio::test]
async fn full_queue_drops_event_but_keeps_write() {
    let seeded = TestApp::new().await;
    let (publisher, _queue) = outbound_queue(1);
    let assessments = Arc::new(InMemoryAssessmentRepository::new());
    let services = AssessmentServices::new(
        seeded.catalog.clone(),
        seeded.templates.clone(),
        assessments.clone(),
        Arc::new(InMemoryFeedbackRepository::new()),
        Arc::new(InMemoryUserDirectory::new()),
        Arc::new(publisher),
        "assessment-service",
    );
    let handler = services.create_assessment_handler();

    for _ in 0..2 {
        handler
            .handle(CreateAssessmentCommand {
                user_id: UserId::new(),
                reflection: "Draft notes".to_string(),
                status: SubmissionStatus::Draft,
                ratings: seeded.self_ratings(&[("Growth & Innovation", 3)]).await,
            })
            .await
            .unwrap();
    }

    assert_eq!(assessments.len().await, 2);
    assert_eq!(services.emitter.emitted_count(), 1);
    assert_eq!(services.emitter.failed_count(), 1);
}

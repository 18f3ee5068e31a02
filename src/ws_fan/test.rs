use crate::api::helpers;
use crate::state::state::ServerState;
use crate::ws_fan::fan;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::RwLock;

#[tokio::test]
pub async fn test_broadcast_reaches_every_open_subscriber() {
    let server_state = Arc::new(RwLock::new(ServerState::new()));
    let (first_sender, mut first_receiver) = mpsc::unbounded_channel();
    let (second_sender, mut second_receiver) = mpsc::unbounded_channel();
    server_state.write().await.add_subscriber(first_sender);
    server_state.write().await.add_subscriber(second_sender);

    let notification = helpers::updated_opportunity_notification("Park Cleanup");
    fan::broadcast_update(&notification, &server_state).await;

    //each connected subscriber got exactly one frame
    for receiver in [&mut first_receiver, &mut second_receiver] {
        let message = receiver.try_recv().unwrap();
        let text = message.to_str().unwrap();
        assert_eq!(text.contains("\"type\":\"opportunity\""), true);
        assert_eq!(text.contains("Park Cleanup"), true);
        assert_eq!(receiver.try_recv().is_err(), true);
    }
}

//no replay for subscribers that show up after the event
#[tokio::test]
pub async fn test_late_subscriber_gets_no_backlog() {
    let server_state = Arc::new(RwLock::new(ServerState::new()));
    let (early_sender, mut early_receiver) = mpsc::unbounded_channel();
    server_state.write().await.add_subscriber(early_sender);

    let notification = helpers::new_opportunity_notification("Park Cleanup", "Riverside Park");
    fan::broadcast_update(&notification, &server_state).await;

    let (late_sender, mut late_receiver) = mpsc::unbounded_channel();
    server_state.write().await.add_subscriber(late_sender);

    assert_eq!(early_receiver.try_recv().is_ok(), true);
    assert_eq!(late_receiver.try_recv().is_err(), true);
}

#[tokio::test]
pub async fn test_dead_subscriber_does_not_break_fan_out() {
    let server_state = Arc::new(RwLock::new(ServerState::new()));
    let (dead_sender, dead_receiver) = mpsc::unbounded_channel();
    let (live_sender, mut live_receiver) = mpsc::unbounded_channel();
    server_state.write().await.add_subscriber(dead_sender);
    server_state.write().await.add_subscriber(live_sender);

    //the receiving half going away is what a dropped connection looks like
    drop(dead_receiver);

    let notification = helpers::updated_opportunity_notification("Park Cleanup");
    fan::broadcast_update(&notification, &server_state).await;
    assert_eq!(live_receiver.try_recv().is_ok(), true);
}

#[tokio::test]
pub async fn test_removed_subscriber_is_no_longer_reached() {
    let server_state = Arc::new(RwLock::new(ServerState::new()));
    let (sender, mut receiver) = mpsc::unbounded_channel();
    let subscriber_id = server_state.write().await.add_subscriber(sender);
    server_state.write().await.remove_subscriber(&subscriber_id);

    let notification = helpers::updated_opportunity_notification("Park Cleanup");
    fan::broadcast_update(&notification, &server_state).await;
    assert_eq!(receiver.try_recv().is_err(), true);
}

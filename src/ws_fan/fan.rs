use crate::api::types::LiveNotification;
use crate::state::state::ServerState;
use std::sync::Arc;
use tokio::sync::RwLock;
use warp::ws::Message;

//this notifies all connected subscribers of server updates
//like an opportunity being posted or edited
pub async fn broadcast_update(
    notification: &LiveNotification,
    server_state: &Arc<RwLock<ServerState>>,
) {
    let serialized = serde_json::to_string(notification).unwrap();
    let read_state = server_state.read().await;
    for (_subscriber_id, sender) in read_state.peer_map.iter() {
        if let Err(_disconnected) = sender.send(Message::text(serialized.to_owned())) {
            //subscriber disconnection is handled in its own connection task
        }
    }
}

use crate::state::types::PeerMap;
use tokio::sync::mpsc;
use warp::ws::Message;

//Holds all server memory state, which is only the set of
//currently connected live-update subscribers. Everything durable
//lives in postgres.
pub struct ServerState {
    pub peer_map: PeerMap,
    next_subscriber_id: usize,
}

impl ServerState {
    pub fn new() -> Self {
        Self {
            peer_map: PeerMap::new(),
            next_subscriber_id: 0,
        }
    }

    pub fn add_subscriber(&mut self, sender: mpsc::UnboundedSender<Message>) -> usize {
        let subscriber_id = self.next_subscriber_id;
        self.next_subscriber_id += 1;
        self.peer_map.insert(subscriber_id, sender);
        return subscriber_id;
    }

    pub fn remove_subscriber(&mut self, subscriber_id: &usize) {
        self.peer_map.remove(subscriber_id);
    }
}

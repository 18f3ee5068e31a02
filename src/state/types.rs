use std::collections::HashMap;
use tokio::sync::mpsc;
use warp::ws::Message;

//subscriber id -> write half of the connection.
//broadcasting walks this map under the state lock.
pub type PeerMap = HashMap<usize, mpsc::UnboundedSender<Message>>;

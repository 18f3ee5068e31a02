/*
The request router. Every HTTP operation is a warp filter that
feeds the matching handler, plus the /ws upgrade that hands a
connection over to the live update subscriber lifecycle.
*/
use crate::api::handler;
use crate::api::helpers;
use crate::api::types::{
    EventsQuery, OpportunityInput, RegisterRequest, RoleChangeRequest, SignupRequest,
};
use crate::data_store::sql_execution_handler::ExecutionHandler;
use crate::logging;
use crate::state::state::ServerState;
use futures::lock::Mutex;
use futures_util::{SinkExt, StreamExt};
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::RwLock;
use tokio_stream::wrappers::UnboundedReceiverStream;
use warp::ws::{Message, WebSocket};
use warp::{Filter, Rejection, Reply};

pub fn build_routes(
    server_state: Arc<RwLock<ServerState>>,
    execution_handler: Arc<Mutex<ExecutionHandler>>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let register = warp::path!("api" / "register")
        .and(warp::post())
        .and(json_body::<RegisterRequest>())
        .and(with_auth_header())
        .and(with_execution_handler(execution_handler.clone()))
        .and_then(handler::register);

    let login = warp::path!("api" / "login")
        .and(warp::get())
        .and(with_auth_header())
        .and(with_execution_handler(execution_handler.clone()))
        .and_then(handler::login);

    let list_events = warp::path!("api" / "events")
        .and(warp::get())
        .and(warp::query::<EventsQuery>())
        .and(with_execution_handler(execution_handler.clone()))
        .and_then(handler::list_opportunities);

    let create_signup = warp::path!("api" / "signup")
        .and(warp::post())
        .and(json_body::<SignupRequest>())
        .and(with_auth_header())
        .and(with_execution_handler(execution_handler.clone()))
        .and_then(handler::sign_up_for_opportunity);

    let list_signups = warp::path!("api" / "signups")
        .and(warp::get())
        .and(with_auth_header())
        .and(with_execution_handler(execution_handler.clone()))
        .and_then(handler::list_signups_for_user);

    let cancel_signup = warp::path!("api" / "signups" / i32)
        .and(warp::delete())
        .and(with_auth_header())
        .and(with_execution_handler(execution_handler.clone()))
        .and_then(handler::cancel_signup);

    let list_users = warp::path!("api" / "users")
        .and(warp::get())
        .and(with_auth_header())
        .and(with_execution_handler(execution_handler.clone()))
        .and_then(handler::list_users);

    let change_role = warp::path!("api" / "users" / i32 / "role")
        .and(warp::patch())
        .and(json_body::<RoleChangeRequest>())
        .and(with_auth_header())
        .and(with_execution_handler(execution_handler.clone()))
        .and_then(handler::change_user_role);

    let org_dashboard = warp::path!("api" / "org" / "dashboard")
        .and(warp::get())
        .and(with_auth_header())
        .and(with_execution_handler(execution_handler.clone()))
        .and_then(handler::org_dashboard);

    let create_opportunity = warp::path!("api")
        .and(warp::post())
        .and(json_body::<OpportunityInput>())
        .and(with_auth_header())
        .and(with_execution_handler(execution_handler.clone()))
        .and(with_server_state(server_state.clone()))
        .and_then(handler::create_opportunity);

    let get_opportunity = warp::path!("api" / i32)
        .and(warp::get())
        .and(with_execution_handler(execution_handler.clone()))
        .and_then(handler::get_opportunity);

    let update_opportunity = warp::path!("api" / i32)
        .and(warp::put())
        .and(json_body::<OpportunityInput>())
        .and(with_auth_header())
        .and(with_execution_handler(execution_handler.clone()))
        .and(with_server_state(server_state.clone()))
        .and_then(handler::update_opportunity);

    let delete_opportunity = warp::path!("api" / i32)
        .and(warp::delete())
        .and(with_auth_header())
        .and(with_execution_handler(execution_handler))
        .and_then(handler::delete_opportunity);

    let live_updates = warp::path("ws")
        .and(warp::path::end())
        .and(warp::ws())
        .and(with_server_state(server_state))
        .map(|ws: warp::ws::Ws, server_state: Arc<RwLock<ServerState>>| {
            ws.on_upgrade(move |socket| subscriber_connected(socket, server_state))
        });

    //fixed paths have to be tried before the `/api/:id` family
    return live_updates
        .or(register)
        .or(login)
        .or(list_events)
        .or(create_signup)
        .or(list_signups)
        .or(cancel_signup)
        .or(list_users)
        .or(change_role)
        .or(org_dashboard)
        .or(create_opportunity)
        .or(get_opportunity)
        .or(update_opportunity)
        .or(delete_opportunity);
}

fn with_execution_handler(
    execution_handler: Arc<Mutex<ExecutionHandler>>,
) -> impl Filter<Extract = (Arc<Mutex<ExecutionHandler>>,), Error = Infallible> + Clone {
    warp::any().map(move || execution_handler.clone())
}

fn with_server_state(
    server_state: Arc<RwLock<ServerState>>,
) -> impl Filter<Extract = (Arc<RwLock<ServerState>>,), Error = Infallible> + Clone {
    warp::any().map(move || server_state.clone())
}

fn with_auth_header() -> impl Filter<Extract = (Option<String>,), Error = Rejection> + Clone {
    warp::header::optional::<String>("authorization")
}

fn json_body<T: DeserializeOwned + Send>() -> impl Filter<Extract = (T,), Error = Rejection> + Clone
{
    warp::body::content_length_limit(1024 * 16).and(warp::body::json())
}

//per connection lifecycle: queue outbound frames through a channel,
//greet, register with the fan out state, then sit on the socket
//until the peer goes away and unregister.
async fn subscriber_connected(socket: WebSocket, server_state: Arc<RwLock<ServerState>>) {
    let (mut ws_sender, mut ws_receiver) = socket.split();
    let (sender, receiver) = mpsc::unbounded_channel();
    let mut outbound = UnboundedReceiverStream::new(receiver);

    //pump queued frames out on a separate task so a slow subscriber
    //never holds up a broadcast
    tokio::spawn(async move {
        while let Some(message) = outbound.next().await {
            if ws_sender.send(message).await.is_err() {
                break;
            }
        }
    });

    //the welcome frame is queued before registration, so it always
    //arrives ahead of any broadcast this peer can observe
    let welcome = helpers::welcome_notification();
    let _ = sender.send(Message::text(serde_json::to_string(&welcome).unwrap()));
    let subscriber_id = server_state.write().await.add_subscriber(sender);
    logging::console::log_event(&format!("live update subscriber {} connected", subscriber_id));

    //subscribers never send us anything meaningful, we only read to
    //notice the close
    while let Some(incoming) = ws_receiver.next().await {
        match incoming {
            Ok(message) => {
                if message.is_close() {
                    break;
                }
            }
            Err(_) => break,
        }
    }

    server_state.write().await.remove_subscriber(&subscriber_id);
    logging::console::log_event(&format!(
        "live update subscriber {} disconnected",
        subscriber_id
    ));
}

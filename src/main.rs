mod server;
use std::{env, net::SocketAddr};

use crate::data_store::sql_execution_handler::ExecutionHandler;
use crate::state::state::ServerState;
use anyhow::Result;
use futures::lock::Mutex;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_postgres::NoTls;
use warp::Filter;

pub mod logging {
    pub mod console;
}
pub mod common {
    pub mod errors;
    pub mod response_logic;
}
pub mod state {
    pub mod state;
    pub mod types;
}
pub mod data_store {
    pub mod creation_queries;
    pub mod db_models;
    pub mod delete_queries;
    pub mod insert_queries;
    pub mod select_queries;
    pub mod sql_execution_handler;
    pub mod update_queries;
    #[cfg(test)]
    pub mod test;
}
pub mod auth {
    pub mod authentication_handler;
    pub mod password_handler;
    #[cfg(test)]
    pub mod test;
}
pub mod api {
    pub mod data_capturer;
    pub mod data_fetcher;
    pub mod handler;
    pub mod helpers;
    pub mod permission_configs;
    pub mod types;
    #[cfg(test)]
    pub mod test;
}
pub mod ws_fan {
    pub mod fan;
    #[cfg(test)]
    pub mod test;
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();
    let addr: SocketAddr = env::var("GN_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_owned())
        .parse()?;

    if env::var("GN_PEPPER").is_err() {
        log::warn!("GN_PEPPER is not set, falling back to the built-in development pepper");
    }

    //fatal when postgres can't be reached, everything past this point is recoverable
    let mut execution_handler = setup_execution_handler().await?;
    if let Err(e) = execution_handler.create_all_tables_if_needed().await {
        logging::console::log_failure("could not bootstrap tables");
        return Err(e.into());
    }
    logging::console::log_success("connected to postgres and bootstrapped tables");

    let execution_handler = Arc::new(Mutex::new(execution_handler));
    let server_state = Arc::new(RwLock::new(ServerState::new()));

    logging::console::log_start(&addr.to_string());
    let routes = server::build_routes(server_state, execution_handler)
        .recover(common::response_logic::handle_rejection);
    warp::serve(routes).run(addr).await;
    Ok(())
}

async fn setup_execution_handler() -> Result<ExecutionHandler> {
    let conn_str = env::var("GN_DB_CONN")
        .unwrap_or_else(|_| "host=localhost user=postgres port=5432 password=password".to_owned());
    let (client, connection) = tokio_postgres::connect(&conn_str, NoTls).await?;
    //the connection object drives the actual io with postgres,
    //it has to be polled on its own task for the client to make progress
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("postgres connection error: {}", e);
        }
    });
    return Ok(ExecutionHandler::new(client));
}

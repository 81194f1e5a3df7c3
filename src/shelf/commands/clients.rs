use crate::commands::{ClientUpdate, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Client;
use crate::store::DataStore;
use tracing::debug;

pub fn create<S: DataStore>(
    store: &mut S,
    id: i32,
    name: String,
    email: String,
) -> Result<CmdResult> {
    let client = Client::new(id, name, email);
    store.add_client(client.clone())?;
    debug!(id, "client added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "======> Client: {} With ID: {} Added Successfully <======",
        client.name, id
    )));
    Ok(result.with_clients(vec![client]))
}

pub fn read<S: DataStore>(store: &S, id: i32) -> Result<CmdResult> {
    let client = store.get_client(id)?.clone();
    Ok(CmdResult::default().with_clients(vec![client]))
}

pub fn update<S: DataStore>(store: &mut S, id: i32, update: &ClientUpdate) -> Result<CmdResult> {
    let client = store.get_client_mut(id)?;
    client.name = update.name.clone();
    client.email = update.email.clone();
    debug!(id, "client updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "======> Client with ID: {} Updated Successfully <======",
        id
    )));
    Ok(result.with_clients(vec![client.clone()]))
}

pub fn delete<S: DataStore>(store: &mut S, id: i32) -> Result<CmdResult> {
    store.remove_client(id)?;
    debug!(id, "client removed");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "======> Client with ID: {} Removed Successfully <======",
        id
    )));
    Ok(result)
}

pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    let clients: Vec<Client> = store.clients().into_iter().cloned().collect();
    let mut result = CmdResult::default();
    if clients.is_empty() {
        result.add_message(CmdMessage::info("No clients found."));
    }
    Ok(result.with_clients(clients))
}

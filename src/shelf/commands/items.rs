use crate::commands::{CmdMessage, CmdResult, ItemUpdate};
use crate::error::{Result, ShelfError};
use crate::model::{Item, ItemKind};
use crate::store::DataStore;
use tracing::debug;

pub fn create<S: DataStore>(
    store: &mut S,
    kind: ItemKind,
    id: i32,
    title: String,
    pages: i32,
) -> Result<CmdResult> {
    let item = Item::new(kind, id, title, pages);
    store.add_item(item.clone())?;
    debug!(id, %kind, "item added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "======> {}: {} With ID: {} Added Successfully <======",
        kind,
        item.title(),
        id
    )));
    Ok(result.with_items(vec![item]))
}

pub fn read<S: DataStore>(store: &S, id: i32) -> Result<CmdResult> {
    let item = store.get_item(id)?.clone();
    Ok(CmdResult::default().with_items(vec![item]))
}

/// Fails unless item `id` exists and is of the given kind.
pub fn check_kind<S: DataStore>(store: &S, id: i32, kind: ItemKind) -> Result<()> {
    let stored = store.get_item(id)?.kind();
    if stored != kind {
        return Err(ShelfError::KindMismatch {
            id,
            stored,
            requested: kind,
        });
    }
    Ok(())
}

pub fn update<S: DataStore>(store: &mut S, id: i32, update: &ItemUpdate) -> Result<CmdResult> {
    check_kind(store, id, update.kind)?;

    let item = store.get_item_mut(id)?;
    item.set_title(update.title.clone());
    item.set_pages(update.pages);
    debug!(id, kind = %update.kind, "item updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "======> {} with ID: {} Updated Successfully <======",
        update.kind, id
    )));
    Ok(result.with_items(vec![item.clone()]))
}

pub fn delete<S: DataStore>(store: &mut S, id: i32) -> Result<CmdResult> {
    let removed = store.remove_item(id)?;
    debug!(id, kind = %removed.kind(), "item removed");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "======> Item with ID: {} Removed Successfully <======",
        id
    )));
    Ok(result)
}

pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    let items: Vec<Item> = store.items().into_iter().cloned().collect();
    let mut result = CmdResult::default();
    if items.is_empty() {
        result.add_message(CmdMessage::info("No items found."));
    }
    Ok(result.with_items(items))
}

use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::{Client, EntityKind, Item};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// In-memory library. Does NOT persist data.
#[derive(Debug, Default)]
pub struct Library {
    items: BTreeMap<i32, Item>,
    clients: BTreeMap<i32, Client>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(kind: EntityKind, id: i32) -> ShelfError {
    ShelfError::NotFound { kind, id }
}

impl DataStore for Library {
    fn add_item(&mut self, item: Item) -> Result<()> {
        match self.items.entry(item.id()) {
            Entry::Occupied(_) => Err(ShelfError::DuplicateKey {
                kind: EntityKind::Item,
                id: item.id(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(item);
                Ok(())
            }
        }
    }

    fn get_item(&self, id: i32) -> Result<&Item> {
        self.items
            .get(&id)
            .ok_or_else(|| not_found(EntityKind::Item, id))
    }

    fn get_item_mut(&mut self, id: i32) -> Result<&mut Item> {
        self.items
            .get_mut(&id)
            .ok_or_else(|| not_found(EntityKind::Item, id))
    }

    fn remove_item(&mut self, id: i32) -> Result<Item> {
        self.items
            .remove(&id)
            .ok_or_else(|| not_found(EntityKind::Item, id))
    }

    fn items(&self) -> Vec<&Item> {
        self.items.values().collect()
    }

    fn add_client(&mut self, client: Client) -> Result<()> {
        match self.clients.entry(client.id) {
            Entry::Occupied(_) => Err(ShelfError::DuplicateKey {
                kind: EntityKind::Client,
                id: client.id,
            }),
            Entry::Vacant(slot) => {
                slot.insert(client);
                Ok(())
            }
        }
    }

    fn get_client(&self, id: i32) -> Result<&Client> {
        self.clients
            .get(&id)
            .ok_or_else(|| not_found(EntityKind::Client, id))
    }

    fn get_client_mut(&mut self, id: i32) -> Result<&mut Client> {
        self.clients
            .get_mut(&id)
            .ok_or_else(|| not_found(EntityKind::Client, id))
    }

    fn remove_client(&mut self, id: i32) -> Result<Client> {
        self.clients
            .remove(&id)
            .ok_or_else(|| not_found(EntityKind::Client, id))
    }

    fn clients(&self) -> Vec<&Client> {
        self.clients.values().collect()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ItemKind;

    pub struct LibraryFixture {
        pub store: Library,
    }

    impl Default for LibraryFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl LibraryFixture {
        pub fn new() -> Self {
            Self {
                store: Library::new(),
            }
        }

        pub fn with_book(mut self, id: i32, title: &str, pages: i32) -> Self {
            let book = Item::new(ItemKind::Book, id, title.to_string(), pages);
            self.store.add_item(book).unwrap();
            self
        }

        pub fn with_magazine(mut self, id: i32, title: &str, pages: i32) -> Self {
            let mag = Item::new(ItemKind::Magazine, id, title.to_string(), pages);
            self.store.add_item(mag).unwrap();
            self
        }

        pub fn with_client(mut self, id: i32, name: &str, email: &str) -> Self {
            let client = Client::new(id, name.to_string(), email.to_string());
            self.store.add_client(client).unwrap();
            self
        }
    }
}

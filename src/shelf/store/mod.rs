//! # Storage Layer
//!
//! The [`DataStore`] trait is the repository contract for shelf: two
//! independent id-keyed collections, one of items and one of clients.
//!
//! ## Implementations
//!
//! - [`memory::Library`]: the only backend. Ordered maps, no persistence;
//!   everything is gone when the process exits.
//!
//! ## Error Contract
//!
//! Repository operations fail with exactly two kinds of error:
//! - `ShelfError::DuplicateKey` when inserting an id that is already present.
//!   The stored entry is left untouched.
//! - `ShelfError::NotFound` when fetching or removing an absent id.
//!
//! Items and clients live in separate id spaces, so item 5 and client 5 can
//! coexist.

use crate::error::Result;
use crate::model::{Client, Item};

pub mod memory;

pub trait DataStore {
    /// Insert a new item. Fails if its id is taken.
    fn add_item(&mut self, item: Item) -> Result<()>;

    fn get_item(&self, id: i32) -> Result<&Item>;

    /// Mutable handle to a stored item. Changes are visible immediately.
    fn get_item_mut(&mut self, id: i32) -> Result<&mut Item>;

    fn remove_item(&mut self, id: i32) -> Result<Item>;

    /// All items, ascending by id.
    fn items(&self) -> Vec<&Item>;

    /// Insert a new client. Fails if its id is taken.
    fn add_client(&mut self, client: Client) -> Result<()>;

    fn get_client(&self, id: i32) -> Result<&Client>;

    fn get_client_mut(&mut self, id: i32) -> Result<&mut Client>;

    fn remove_client(&mut self, id: i32) -> Result<Client>;

    /// All clients, ascending by id.
    fn clients(&self) -> Vec<&Client>;
}

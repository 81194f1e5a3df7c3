//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for all
//! library operations, whatever UI is driving them.
//!
//! The facade dispatches to `commands::*` and returns `Result<CmdResult>`.
//! It holds no business logic and never touches stdin or stdout; the menu
//! layer owns all terminal concerns.
//!
//! `LibraryApi<S: DataStore>` is generic over the storage backend, so tests
//! can hand it a pre-populated store from the fixtures.

use crate::commands;
use crate::error::Result;
use crate::model::ItemKind;
use crate::store::DataStore;

pub struct LibraryApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> LibraryApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_item(
        &mut self,
        kind: ItemKind,
        id: i32,
        title: String,
        pages: i32,
    ) -> Result<commands::CmdResult> {
        commands::items::create(&mut self.store, kind, id, title, pages)
    }

    pub fn read_item(&self, id: i32) -> Result<commands::CmdResult> {
        commands::items::read(&self.store, id)
    }

    pub fn check_item_kind(&self, id: i32, kind: ItemKind) -> Result<()> {
        commands::items::check_kind(&self.store, id, kind)
    }

    pub fn update_item(
        &mut self,
        id: i32,
        update: &commands::ItemUpdate,
    ) -> Result<commands::CmdResult> {
        commands::items::update(&mut self.store, id, update)
    }

    pub fn delete_item(&mut self, id: i32) -> Result<commands::CmdResult> {
        commands::items::delete(&mut self.store, id)
    }

    pub fn list_items(&self) -> Result<commands::CmdResult> {
        commands::items::list(&self.store)
    }

    pub fn create_client(
        &mut self,
        id: i32,
        name: String,
        email: String,
    ) -> Result<commands::CmdResult> {
        commands::clients::create(&mut self.store, id, name, email)
    }

    pub fn read_client(&self, id: i32) -> Result<commands::CmdResult> {
        commands::clients::read(&self.store, id)
    }

    pub fn update_client(
        &mut self,
        id: i32,
        update: &commands::ClientUpdate,
    ) -> Result<commands::CmdResult> {
        commands::clients::update(&mut self.store, id, update)
    }

    pub fn delete_client(&mut self, id: i32) -> Result<commands::CmdResult> {
        commands::clients::delete(&mut self.store, id)
    }

    pub fn list_clients(&self) -> Result<commands::CmdResult> {
        commands::clients::list(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{ClientUpdate, CmdMessage, CmdResult, ItemUpdate, MessageLevel};

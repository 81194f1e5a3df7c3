use super::{Menu, Session};
use crate::api::{CmdMessage, CmdResult, ItemUpdate};
use crate::error::Result;
use crate::model::ItemKind;
use crate::store::DataStore;
use std::io::{BufRead, Write};

const BANNER: &str = "=====> Item Menu <=====\n\
1- Create Item\n\
2- Read Item\n\
3- Update Item\n\
4- Delete Item\n\
5- List Items\n\
0- Exit Item Menu";

#[derive(Debug, Clone, Copy, Default)]
pub struct ItemMenu;

impl Menu for ItemMenu {
    fn banner(&self) -> &'static str {
        BANNER
    }

    fn farewell(&self) -> &'static str {
        "Returning to Main Menu..."
    }

    fn dispatch<S: DataStore, R: BufRead, W: Write>(
        &self,
        choice: i32,
        session: &mut Session<S, R, W>,
    ) -> Result<()> {
        let outcome = match choice {
            1 => create(session),
            2 => read(session),
            3 => update(session),
            4 => delete(session),
            5 => session.api.list_items(),
            _ => return session.say("Wrong Choice!! (1-5)"),
        };
        session.report(outcome)
    }
}

/// Asks Book or Magazine. `None` means the answer was out of range.
fn choose_kind<S: DataStore, R: BufRead, W: Write>(
    session: &mut Session<S, R, W>,
    verb: &str,
) -> Result<Option<ItemKind>> {
    session.say(&format!("1- {verb} Book\n2- {verb} Magazine"))?;
    let choice = session.input.read_int()?;
    Ok(ItemKind::from_choice(choice))
}

fn wrong_kind_choice() -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::error("Wrong Choice Choose 1-2"));
    result
}

fn create<S: DataStore, R: BufRead, W: Write>(session: &mut Session<S, R, W>) -> Result<CmdResult> {
    let Some(kind) = choose_kind(session, "Create")? else {
        return Ok(wrong_kind_choice());
    };

    session.input.ask("Enter ID: ")?;
    let id = session.input.read_int()?;
    session.input.ask("Enter Name: ")?;
    let title = session.input.read_alphabetic()?;
    session.input.ask("Enter Number of Pages: ")?;
    let pages = session.input.read_int()?;
    session.api.create_item(kind, id, title, pages)
}

fn read<S: DataStore, R: BufRead, W: Write>(session: &mut Session<S, R, W>) -> Result<CmdResult> {
    session.input.ask("Enter Item ID: ")?;
    let id = session.input.read_int()?;
    session.api.read_item(id)
}

fn update<S: DataStore, R: BufRead, W: Write>(session: &mut Session<S, R, W>) -> Result<CmdResult> {
    let Some(kind) = choose_kind(session, "Update")? else {
        return Ok(wrong_kind_choice());
    };

    session.input.ask("Enter ID: ")?;
    let id = session.input.read_int()?;
    // The stored variant is authoritative; a mismatch stops here.
    session.api.check_item_kind(id, kind)?;

    session.input.ask("Enter Updated Name: ")?;
    let title = session.input.read_alphabetic()?;
    session.input.ask("Enter Updated Number Of Pages: ")?;
    let pages = session.input.read_int()?;
    session.api.update_item(id, &ItemUpdate::new(kind, title, pages))
}

fn delete<S: DataStore, R: BufRead, W: Write>(session: &mut Session<S, R, W>) -> Result<CmdResult> {
    session.input.ask("Enter Item ID: ")?;
    let id = session.input.read_int()?;
    session.api.delete_item(id)
}

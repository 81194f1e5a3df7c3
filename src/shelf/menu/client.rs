use super::{Menu, Session};
use crate::api::{ClientUpdate, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use std::io::{BufRead, Write};

const BANNER: &str = "=====> Client Menu <=====\n\
1- Create Client\n\
2- Read Client\n\
3- Update Client\n\
4- Delete Client\n\
5- List Clients\n\
0- Exit Client Menu";

#[derive(Debug, Clone, Copy, Default)]
pub struct ClientMenu;

impl Menu for ClientMenu {
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
            5 => session.api.list_clients(),
            _ => return session.say("Wrong Choice! Please choose from (1-5)"),
        };
        session.report(outcome)
    }
}

fn create<S: DataStore, R: BufRead, W: Write>(session: &mut Session<S, R, W>) -> Result<CmdResult> {
    session.input.ask("Enter Client ID: ")?;
    let id = session.input.read_int()?;
    session.input.ask("Enter Client Name: ")?;
    let name = session.input.read_alphabetic()?;
    session.input.ask("Enter Client Email: ")?;
    let email = session.input.read_email()?;
    session.api.create_client(id, name, email)
}

fn read<S: DataStore, R: BufRead, W: Write>(session: &mut Session<S, R, W>) -> Result<CmdResult> {
    session.input.ask("Enter Client ID: ")?;
    let id = session.input.read_int()?;
    session.api.read_client(id)
}

fn update<S: DataStore, R: BufRead, W: Write>(session: &mut Session<S, R, W>) -> Result<CmdResult> {
    session.input.ask("Enter Client ID: ")?;
    let id = session.input.read_int()?;
    // Bail out before asking for new values
    session.api.read_client(id)?;

    session.input.ask("Enter Client Updated Name: ")?;
    let name = session.input.read_alphabetic()?;
    session.input.ask("Enter Client Updated Email: ")?;
    let email = session.input.read_email()?;
    session.api.update_client(id, &ClientUpdate::new(name, email))
}

fn delete<S: DataStore, R: BufRead, W: Write>(session: &mut Session<S, R, W>) -> Result<CmdResult> {
    session.input.ask("Enter Client ID: ")?;
    let id = session.input.read_int()?;
    session.api.delete_client(id)
}

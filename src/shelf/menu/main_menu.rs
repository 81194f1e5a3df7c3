use super::{ClientMenu, ItemMenu, Menu, Session};
use crate::error::Result;
use crate::store::DataStore;
use std::io::{BufRead, Write};

const BANNER: &str = "=====> Main Menu <=====\n1- Clients\n2- Items\n0- Exit Main Menu";

/// Root level: picks which sub-menu to enter.
#[derive(Debug, Clone, Copy, Default)]
pub struct MainMenu;

impl Menu for MainMenu {
    fn banner(&self) -> &'static str {
        BANNER
    }

    fn farewell(&self) -> &'static str {
        "Exiting system..."
    }

    fn dispatch<S: DataStore, R: BufRead, W: Write>(
        &self,
        choice: i32,
        session: &mut Session<S, R, W>,
    ) -> Result<()> {
        match choice {
            1 => ClientMenu.run(session),
            2 => ItemMenu.run(session),
            _ => session.say("Invalid choice! Please choose 0-2"),
        }
    }
}

//! # Menu State Machine
//!
//! Three nested menu levels share one read-dispatch loop:
//!
//! ```text
//! MainMenu ──1──> ClientMenu   (create / read / update / delete / list)
//!          ──2──> ItemMenu     (create / read / update / delete / list)
//! ```
//!
//! Each level prints its banner, reads a line and parses it as an integer.
//! `0` leaves the level, an unparsable line prints `Invalid Choice.` and the
//! banner again, anything else goes to [`Menu::dispatch`]. A child level runs
//! to completion before control returns to its parent.
//!
//! All levels borrow the same [`Session`], which owns the library API and the
//! prompter. Routine failures (duplicate id, unknown id, wrong item kind,
//! exhausted prompt) are reported by the action that hit them; end of input
//! and I/O errors unwind every level.

use crate::api::{CmdResult, LibraryApi};
use crate::error::Result;
use crate::input::Prompter;
use crate::store::DataStore;
use crate::validation;
use std::io::{BufRead, Write};

mod client;
mod item;
mod main_menu;
mod print;

pub use client::ClientMenu;
pub use item::ItemMenu;
pub use main_menu::MainMenu;

pub struct Session<S: DataStore, R, W> {
    pub api: LibraryApi<S>,
    pub input: Prompter<R, W>,
}

impl<S: DataStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(api: LibraryApi<S>, input: Prompter<R, W>) -> Self {
        Self { api, input }
    }

    pub fn out(&mut self) -> &mut W {
        self.input.writer()
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.out(), "{}", line)?;
        Ok(())
    }

    /// Renders the outcome of one menu action.
    ///
    /// Recoverable errors become a message; the rest are returned.
    pub fn report(&mut self, outcome: Result<CmdResult>) -> Result<()> {
        match outcome {
            Ok(result) => print::print_result(self.out(), &result),
            Err(err) if err.is_recoverable() => print::print_error(self.out(), &err),
            Err(err) => Err(err),
        }
    }
}

pub trait Menu {
    fn banner(&self) -> &'static str;

    /// Printed when the user leaves this level with `0`.
    fn farewell(&self) -> &'static str;

    fn dispatch<S: DataStore, R: BufRead, W: Write>(
        &self,
        choice: i32,
        session: &mut Session<S, R, W>,
    ) -> Result<()>;

    fn run<S: DataStore, R: BufRead, W: Write>(&self, session: &mut Session<S, R, W>) -> Result<()> {
        loop {
            writeln!(session.out())?;
            session.say(self.banner())?;
            let line = session.input.read_line()?;
            match validation::parse_int(&line) {
                Some(0) => return session.say(self.farewell()),
                Some(choice) => self.dispatch(choice, session)?,
                None => session.say("Invalid Choice.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::model::ItemKind;
    use crate::store::memory::fixtures::LibraryFixture;
    use crate::store::memory::Library;
    use std::io::Cursor;

    type TestSession = Session<Library, Cursor<Vec<u8>>, Vec<u8>>;

    fn session_with(store: Library, script: &str) -> TestSession {
        let input = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        Session::new(LibraryApi::new(store), input)
    }

    fn run_main(store: Library, script: &str) -> (TestSession, String) {
        let mut session = session_with(store, script);
        MainMenu.run(&mut session).unwrap();
        let out = String::from_utf8(session.input.writer().clone()).unwrap();
        (session, out)
    }

    #[test]
    fn exit_immediately() {
        let (_, out) = run_main(Library::new(), "0\n");
        assert!(out.contains("=====> Main Menu <====="));
        assert!(out.contains("Exiting system..."));
    }

    #[test]
    fn invalid_main_choices_redisplay_the_banner() {
        let (_, out) = run_main(Library::new(), "abc\n7\n0\n");
        assert!(out.contains("Invalid Choice."));
        assert!(out.contains("Invalid choice! Please choose 0-2"));
        assert_eq!(out.matches("=====> Main Menu <=====").count(), 3);
    }

    #[test]
    fn book_crud_end_to_end() {
        let script = "2\n\
                      1\n1\n1\nOOP\n300\n\
                      2\n1\n\
                      3\n1\n1\nAI\n310\n\
                      2\n1\n\
                      4\n1\n\
                      2\n1\n\
                      0\n0\n";
        let (session, out) = run_main(Library::new(), script);

        assert!(out.contains("Book: OOP With ID: 1 Added Successfully"));
        assert!(out.contains("Book Name: OOP"));
        assert!(out.contains("Number of Pages: 300"));
        assert!(out.contains("Book Name: AI"));
        assert!(out.contains("Number of Pages: 310"));
        assert!(out.contains("Item with ID: 1 Removed Successfully"));
        assert!(out.contains("Item with ID 1 doesn't exist"));
        assert!(session.api.store().items().is_empty());
    }

    #[test]
    fn client_crud_end_to_end() {
        let script = "1\n\
                      1\n3\nAda\nada@math.com\n\
                      3\n3\nGrace\ngrace@navy.com\n\
                      2\n3\n\
                      0\n0\n";
        let (session, out) = run_main(Library::new(), script);

        assert!(out.contains("Client: Ada With ID: 3 Added Successfully"));
        assert!(out.contains("Client: Grace"));
        assert!(out.contains("Email: grace@navy.com"));
        assert_eq!(session.api.store().get_client(3).unwrap().name, "Grace");
    }

    #[test]
    fn client_prompts_reject_bad_fields() {
        let script = "1\n1\nx\n3\nAda1\nAda\nada@Math.com\nada@math.com\n0\n0\n";
        let (session, out) = run_main(Library::new(), script);

        assert!(out.contains("Please enter a valid Integer!!"));
        assert!(out.contains("Please enter a valid Alphabetic!!"));
        assert!(out.contains("Please enter a valid Email!!"));
        assert_eq!(session.api.store().get_client(3).unwrap().email, "ada@math.com");
    }

    #[test]
    fn duplicate_client_is_reported_and_session_continues() {
        let store = LibraryFixture::new()
            .with_client(1, "Ada", "ada@math.com")
            .store;
        let script = "1\n1\n1\nBob\nbob@x.com\n0\n0\n";
        let (session, out) = run_main(store, script);

        assert!(out.contains("Client with ID 1 already exists"));
        assert!(out.contains("Exiting system..."));
        assert_eq!(session.api.store().get_client(1).unwrap().name, "Ada");
    }

    #[test]
    fn sentinel_in_submenu_returns_without_mutation() {
        let store = LibraryFixture::new().with_book(1, "OOP", 300).store;
        let (session, out) = run_main(store, "2\n0\n1\n0\n0\n");

        assert_eq!(out.matches("Returning to Main Menu...").count(), 2);
        assert_eq!(out.matches("=====> Main Menu <=====").count(), 3);
        assert_eq!(session.api.store().items().len(), 1);
        assert!(session.api.store().clients().is_empty());
    }

    #[test]
    fn wrong_sub_choice_aborts_create() {
        let (session, out) = run_main(Library::new(), "2\n1\n3\n0\n0\n");

        assert!(out.contains("Wrong Choice Choose 1-2"));
        assert!(!out.contains("Enter ID"));
        assert!(session.api.store().items().is_empty());
    }

    #[test]
    fn update_with_wrong_kind_is_flagged() {
        let store = LibraryFixture::new().with_magazine(2, "Wired", 80).store;
        let (session, out) = run_main(store, "2\n3\n1\n2\n0\n0\n");

        assert!(out.contains("Item 2 is a Magazine, not a Book"));
        assert!(!out.contains("Enter Updated Name"));
        let item = session.api.store().get_item(2).unwrap();
        assert_eq!(item.kind(), ItemKind::Magazine);
        assert_eq!(item.title(), "Wired");
    }

    #[test]
    fn update_unknown_client_aborts_before_prompts() {
        let (_, out) = run_main(Library::new(), "1\n3\n9\n0\n0\n");
        assert!(out.contains("Client with ID 9 doesn't exist"));
        assert!(!out.contains("Enter Client Updated Name"));
    }

    #[test]
    fn list_shows_items_in_id_order() {
        let store = LibraryFixture::new()
            .with_book(20, "Second", 2)
            .with_magazine(10, "First", 1)
            .store;
        let (_, out) = run_main(store, "2\n5\n0\n0\n");

        let first = out.find("Magazine Title: First").unwrap();
        let second = out.find("Book Name: Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn list_empty_clients() {
        let (_, out) = run_main(Library::new(), "1\n5\n0\n0\n");
        assert!(out.contains("No clients found."));
    }

    #[test]
    fn out_of_range_submenu_choice() {
        let (_, out) = run_main(Library::new(), "2\n9\n0\n1\n6\n0\n0\n");
        assert!(out.contains("Wrong Choice!! (1-5)"));
        assert!(out.contains("Wrong Choice! Please choose from (1-5)"));
    }

    #[test]
    fn non_utf8_input_keeps_the_session_alive() {
        let input = Prompter::new(
            Cursor::new(b"\xff\n2\n1\n1\n\xfe\x01\n7\nOOP\n300\n0\n0\n".to_vec()),
            Vec::new(),
        );
        let mut session = Session::new(LibraryApi::new(Library::new()), input);
        MainMenu.run(&mut session).unwrap();

        assert_eq!(session.api.store().get_item(7).unwrap().title(), "OOP");
        let out = String::from_utf8(session.input.into_writer()).unwrap();
        assert!(out.contains("Invalid Choice."));
        assert!(out.contains("Please enter a valid Integer!!"));
        assert!(out.contains("Exiting system..."));
    }

    #[test]
    fn end_of_input_unwinds_every_level() {
        let mut session = session_with(Library::new(), "2\n1\n1\n");
        let err = MainMenu.run(&mut session).unwrap_err();
        assert!(matches!(err, ShelfError::EndOfInput));
    }

    #[test]
    fn exhausted_prompt_aborts_only_the_action() {
        let input = Prompter::new(
            Cursor::new(b"1\n1\nx\ny\n0\n0\n".to_vec()),
            Vec::new(),
        )
        .with_max_attempts(Some(2));
        let mut session = Session::new(LibraryApi::new(Library::new()), input);
        MainMenu.run(&mut session).unwrap();

        let out = String::from_utf8(session.input.into_writer()).unwrap();
        assert!(out.contains("gave up after 2 invalid answers"));
        assert!(out.contains("Exiting system..."));
    }
}

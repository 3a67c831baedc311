//! Interactive menu
//!
//! A numbered text menu over the catalog. Each entry maps to one catalog
//! operation; user mistakes (unknown id, bad status, empty field) are
//! reported and the loop carries on. I/O and storage errors end the loop.

use std::io::{BufRead, Write};

use anyhow::Result;

use bookshelf_core::{Catalog, CatalogResult};

use crate::output::book_line;
use crate::prompt::read_line;

const MENU: &str = "\
Menu:
1. Add a book
2. Delete a book
3. Search books
4. List all books
5. Change book status
0. Exit";

/// What the loop should do after handling one choice
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu session bound to a catalog and a pair of streams
pub struct Menu<'a, R, W> {
    catalog: &'a mut Catalog,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(catalog: &'a mut Catalog, input: R, out: W) -> Self {
        Self {
            catalog,
            input,
            out,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{}", MENU)?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };

            if self.handle(&choice)? == Flow::Exit {
                break;
            }
        }

        writeln!(self.out, "Goodbye.")?;
        Ok(())
    }

    fn handle(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => self.add(),
            "2" => self.delete(),
            "3" => self.search(),
            "4" => self.list(),
            "5" => self.change_status(),
            "0" => Ok(Flow::Exit),
            _ => {
                writeln!(self.out, "Invalid choice. Please try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt("Author: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(year) = self.prompt("Year: ")? else {
            return Ok(Flow::Exit);
        };

        let result = self.catalog.add(title.clone(), author.clone(), year.clone());
        if let Some(id) = self.report(result)? {
            writeln!(
                self.out,
                "Added \"{}\" ({}, {}) with ID {}.",
                title, author, year, id
            )?;
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_id("ID of the book to delete: ")? else {
            return Ok(Flow::Continue);
        };

        let result = self.catalog.delete(id);
        if self.report(result)?.is_some() {
            writeln!(self.out, "Book with ID {} deleted.", id)?;
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(term) = self.prompt("Title, author or year: ")? else {
            return Ok(Flow::Exit);
        };

        let found = self.catalog.search(&term);
        if found.is_empty() {
            writeln!(self.out, "No books found.")?;
        } else {
            writeln!(self.out, "Found books:")?;
            for book in found {
                writeln!(self.out, "{}", book_line(book))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<Flow> {
        if self.catalog.is_empty() {
            writeln!(self.out, "Catalog is empty.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.out, "All books:")?;
        for book in self.catalog.list() {
            writeln!(self.out, "{}", book_line(book))?;
        }
        Ok(Flow::Continue)
    }

    fn change_status(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_id("ID of the book: ")? else {
            return Ok(Flow::Continue);
        };
        let Some(status) = self.prompt("New status (available/checked-out): ")? else {
            return Ok(Flow::Exit);
        };

        let result = self.catalog.change_status(id, &status).map(|b| b.status());
        if let Some(status) = self.report(result)? {
            writeln!(self.out, "Status of book with ID {} changed to \"{}\".", id, status)?;
        }
        Ok(Flow::Continue)
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        read_line(&mut self.input, &mut self.out, prompt)
    }

    /// Read a book id; reports unparsable input and returns `None`
    fn prompt_id(&mut self, prompt: &str) -> Result<Option<u64>> {
        let Some(text) = self.prompt(prompt)? else {
            return Ok(None);
        };
        match text.parse() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.out, "Error: '{}' is not a valid ID.", text)?;
                Ok(None)
            }
        }
    }

    /// Print user errors and swallow them; propagate everything else
    fn report<T>(&mut self, result: CatalogResult<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_user_error() => {
                writeln!(self.out, "Error: {}.", e.to_string().trim_end_matches('.'))?;
                Ok(None)
            }
            Err(e) => Err(anyhow::Error::from(e)),
        }
    }
}

/// Run the menu on stdin/stdout
pub fn run(catalog: &mut Catalog) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Menu::new(catalog, stdin.lock(), stdout.lock()).run()
}

//! Book command handlers

use anyhow::{Context, Result};

use bookshelf_core::{BookStatus, Catalog, CatalogError};

use crate::output::Output;
use crate::prompt::confirm;

/// Add a new book
pub fn add(
    catalog: &mut Catalog,
    title: String,
    author: String,
    year: String,
    output: &Output,
) -> Result<()> {
    let id = catalog.add(title, author, year)?;
    let book = catalog
        .get(id)
        .context("Book missing right after it was added")?;

    output.success(&format!(
        "Added \"{}\" ({}, {}) with ID {}",
        book.title(),
        book.author(),
        book.year(),
        id
    ));
    if output.is_quiet() {
        output.print_book(book);
    }

    Ok(())
}

/// Delete a book
pub fn delete(catalog: &mut Catalog, id: u64, yes: bool, output: &Output) -> Result<()> {
    // Look up first so an unknown id never prompts
    let Some(book) = catalog.get(id) else {
        return Err(CatalogError::NotFound { id }.into());
    };

    if output.should_prompt() && !yes {
        println!("Delete book: {} - {}", book.id(), book.title());
        if !confirm("Are you sure?")? {
            output.message("Cancelled.");
            return Ok(());
        }
    }

    catalog.delete(id)?;
    output.success(&format!("Deleted book with ID {}", id));

    Ok(())
}

/// Search by title, author or year
pub fn search(catalog: &Catalog, term: String, output: &Output) -> Result<()> {
    let books = catalog.search(&term);
    output.print_books(books, "No books found.");
    Ok(())
}

/// List all books
pub fn list(catalog: &Catalog, output: &Output) -> Result<()> {
    output.print_books(catalog.list(), "Catalog is empty.");
    Ok(())
}

/// Change a book's lending status
pub fn status(catalog: &mut Catalog, id: u64, status: BookStatus, output: &Output) -> Result<()> {
    let book = catalog.set_status(id, status)?;

    output.success(&format!("Status of book with ID {} set to \"{}\"", id, status));
    if output.is_quiet() {
        output.print_book(book);
    }

    Ok(())
}

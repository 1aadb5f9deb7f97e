//! Numbered console menu over the catalog service

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{
    error::AppError,
    models::book::CreateBook,
    services::catalog::CatalogService,
};

const MENU: &str = "\
=== Library Management ===
1. Add a book by ISBN (Open Library lookup)
2. Add a book manually
3. Remove a book
4. Find a book
5. List all books
6. Exit";

/// Interactive menu reading choices from `input` and rendering to `output`
pub struct Menu<R, W> {
    catalog: CatalogService,
    input: R,
    output: W,
}

impl<R, W> Menu<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(catalog: CatalogService, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Run until the user exits or input is exhausted
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            self.write_line("").await?;
            self.write_line(MENU).await?;
            let Some(choice) = self.prompt("Enter your choice (1-6): ").await? else {
                break;
            };

            match choice.as_str() {
                "1" => self.add_by_isbn().await?,
                "2" => self.add_manually().await?,
                "3" => self.remove().await?,
                "4" => self.find().await?,
                "5" => self.list().await?,
                "6" => {
                    self.write_line("Goodbye!").await?;
                    break;
                }
                _ => {
                    self.write_line("Invalid choice. Please enter a number between 1 and 6.")
                        .await?
                }
            }
        }
        self.output.flush().await
    }

    async fn add_by_isbn(&mut self) -> io::Result<()> {
        let Some(isbn) = self.prompt("Enter ISBN: ").await? else {
            return Ok(());
        };
        self.write_line("Fetching book details from Open Library...").await?;

        match self.catalog.add_book_by_isbn(&isbn).await {
            Ok(book) => self.write_line(&format!("Added: {}", book)).await,
            Err(e) => self.report(&e).await,
        }
    }

    async fn add_manually(&mut self) -> io::Result<()> {
        let Some(title) = self.prompt("Enter title: ").await? else {
            return Ok(());
        };
        let Some(author) = self.prompt("Enter author: ").await? else {
            return Ok(());
        };
        let Some(isbn) = self.prompt("Enter ISBN: ").await? else {
            return Ok(());
        };

        let data = CreateBook {
            title,
            author,
            isbn,
        };
        match self.catalog.add_book(data).await {
            Ok(book) => self.write_line(&format!("Added: {}", book)).await,
            Err(e) => self.report(&e).await,
        }
    }

    async fn remove(&mut self) -> io::Result<()> {
        let Some(isbn) = self.prompt("Enter ISBN of the book to remove: ").await? else {
            return Ok(());
        };

        match self.catalog.remove_book(&isbn).await {
            Ok(book) => {
                self.write_line(&format!("Removed book with ISBN: {}", book.isbn))
                    .await
            }
            Err(e) => self.report(&e).await,
        }
    }

    async fn find(&mut self) -> io::Result<()> {
        let Some(isbn) = self.prompt("Enter ISBN to search for: ").await? else {
            return Ok(());
        };

        match self.catalog.get_book(&isbn).await {
            Ok(book) => self.write_line(&format!("Found: {}", book)).await,
            Err(e) => self.report(&e).await,
        }
    }

    async fn list(&mut self) -> io::Result<()> {
        let books = self.catalog.list_books().await;
        if books.is_empty() {
            return self.write_line("The library is empty.").await;
        }

        self.write_line("--- Library Books ---").await?;
        for book in &books {
            self.write_line(&book.to_string()).await?;
        }
        self.write_line("---------").await
    }

    async fn report(&mut self, error: &AppError) -> io::Result<()> {
        let message = match error {
            AppError::Validation(msg) | AppError::NotFound(msg) | AppError::Conflict(msg) => {
                msg.clone()
            }
            other => other.to_string(),
        };
        self.write_line(&format!("Error: {}", message)).await
    }

    /// Print `label` and read one trimmed line; `None` on end of input
    async fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.output.write_all(label.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.write_all(line.as_bytes()).await?;
        self.output.write_all(b"\n").await
    }
}

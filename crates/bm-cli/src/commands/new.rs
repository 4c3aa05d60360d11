// crates/bm-cli/src/commands/new.rs - Add a book

use bm_core::{Book, Marker, Output, Result, id};
use rand::Rng;

use crate::context::Context;

/// Add a book at page 1 under a freshly generated ID
pub fn handle(ctx: &Context, title: &str, out: &mut dyn Output) -> Result<()> {
    handle_with_rng(ctx, title, &mut rand::thread_rng(), out)
}

/// Add a book, drawing the ID digits from `rng`
///
/// The ID is not checked against existing books: if it happens to match
/// one, that book is replaced.
pub fn handle_with_rng<R: Rng + ?Sized>(
    ctx: &Context,
    title: &str,
    rng: &mut R,
    out: &mut dyn Output,
) -> Result<()> {
    let storage = ctx.storage();
    let mut books = storage.load()?;

    let book_id = id::generate_with_rng(title, rng);
    books.insert(book_id.clone(), Book::new(title));

    storage.save(&books)?;

    out.emit(
        Marker::Added,
        &format!("Created a new book \"{title}\", id: {book_id}."),
    );
    Ok(())
}

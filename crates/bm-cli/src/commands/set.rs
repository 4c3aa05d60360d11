// crates/bm-cli/src/commands/set.rs - Move a bookmark

use bm_core::{ArgsError, Error, Marker, Output, Result};

use super::format_status;
use crate::context::Context;

/// Set the page a book is opened at
///
/// The page is parsed before the storage file is touched, so a typo never
/// creates or rewrites anything.
pub fn handle(ctx: &Context, id: &str, page: &str, out: &mut dyn Output) -> Result<()> {
    let page_number = ArgsError::parse_int(page)?;

    let storage = ctx.storage();
    let mut books = storage.load()?;

    let book = books
        .get_mut(id)
        .ok_or_else(|| Error::NotFound(id.to_string()))?;
    book.page_number = page_number;
    let status = format_status(&book.title, id, book.page_number);

    storage.save(&books)?;

    out.emit(Marker::Updated, &status);
    Ok(())
}

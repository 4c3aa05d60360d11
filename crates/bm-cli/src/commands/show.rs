use bm_core::{Error, Marker, Output, Result};

use super::format_status;
use crate::context::Context;

/// Print the bookmark of a single book
pub fn handle(ctx: &Context, id: &str, out: &mut dyn Output) -> Result<()> {
    let books = ctx.storage().load()?;
    let book = books.get(id).ok_or_else(|| Error::NotFound(id.to_string()))?;

    out.emit(Marker::Plain, &format_status(&book.title, id, book.page_number));
    Ok(())
}

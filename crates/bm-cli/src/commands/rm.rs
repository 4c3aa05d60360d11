use bm_core::{Error, Marker, Output, Result};

use crate::context::Context;

/// Forget a book
pub fn handle(ctx: &Context, id: &str, out: &mut dyn Output) -> Result<()> {
    let storage = ctx.storage();
    let mut books = storage.load()?;

    let book = books
        .remove(id)
        .ok_or_else(|| Error::NotFound(id.to_string()))?;

    storage.save(&books)?;

    out.emit(
        Marker::Removed,
        &format!("Deleted book \"{}\" ({id}).", book.title),
    );
    Ok(())
}

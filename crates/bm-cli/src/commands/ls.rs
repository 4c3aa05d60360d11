use bm_core::{Marker, Output, Result};

use super::format_status;
use crate::context::Context;

/// Print every book, ordered by ID
pub fn handle(ctx: &Context, out: &mut dyn Output) -> Result<()> {
    let books = ctx.storage().load()?;

    for (id, book) in &books {
        out.emit(
            Marker::Plain,
            &format!("- {}", format_status(&book.title, id, book.page_number)),
        );
    }

    Ok(())
}

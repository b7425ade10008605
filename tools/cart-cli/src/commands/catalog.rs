//! Catalog listing.

use anyhow::{bail, Result};
use cart_core::ids::ItemId;

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    let Some(id) = args.id else {
        ctx.output.catalog(&catalog);
        return Ok(());
    };

    let Some(item) = catalog.get(ItemId::new(id)) else {
        bail!("Item not in catalog: {}", id);
    };

    if ctx.output.is_json() {
        ctx.output.json(item);
        return Ok(());
    }

    ctx.output.header(&item.name);
    ctx.output.kv("id", &item.id.to_string());
    ctx.output.kv("price", &format!("${}", item.price));
    Ok(())
}

//! Static HTML rendering.

use std::fs;

use anyhow::{Context as _, Result};
use card_core::render::render_card;
use card_core::state::CardState;

use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let product = ctx.load_product(&args.product)?;
    let state = CardState::from_flags(args.added, args.hovering);

    ctx.output
        .debug(&format!("Rendering {} in state {}", product.id, state.as_str()));
    let html = render_card(&product, &state, &ctx.config);

    match args.output {
        Some(path) => {
            let path = ctx.resolve_path(&path);
            fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "product": product.id,
                    "state": state,
                    "output": path.display().to_string(),
                    "bytes": html.len(),
                }));
            } else {
                ctx.output
                    .success(&format!("Wrote {} ({} bytes)", path.display(), html.len()));
            }
        }
        None => println!("{}", html),
    }

    Ok(())
}

//! Command handler for the transform operation

use remodel_core::{load_document, TreeTransformer};

use crate::cli::Cli;
use crate::error::Result;
use crate::output;

/// Load the input document, transform it, and write the result
pub fn handle_transform(cli: &Cli) -> Result<()> {
    let config = cli.transform_config();

    if config.convert_category_ids {
        tracing::info!("converting category ids to catalog ids");
    }

    let mut transformer = TreeTransformer::new(&config)?;
    let document = load_document(&cli.input)?;

    tracing::debug!(input = %cli.input.display(), "transforming document");
    let transformed = transformer.transform(&document);

    let rendered = output::render_json(&transformed, cli.indent)?;
    output::write_output(&rendered, cli.output.as_deref())?;

    if config.convert_category_ids {
        tracing::info!(
            conversions = transformer.category_conversions(),
            "category conversions complete"
        );
    }

    Ok(())
}

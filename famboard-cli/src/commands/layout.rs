use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use famboard_core::layout::{LayoutOptions, TimedItem, layout_day_with};

/// Read items as JSON from `file` (or stdin for "-") and print their layout as JSON.
pub fn run(file: &Path) -> Result<()> {
    let content = if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?
    };

    let options = super::load_config()?.layout_options();
    println!("{}", layout_json(&content, &options)?);

    Ok(())
}

fn layout_json(content: &str, options: &LayoutOptions) -> Result<String> {
    let items: Vec<TimedItem> =
        serde_json::from_str(content).context("Expected a JSON array of timed items")?;

    let results = layout_day_with(&items, options);
    Ok(serde_json::to_string_pretty(&results)?)
}

//! Catalog CLI command: fetch the upstream catalog and print it.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::state::AppState;

/// Fetch the catalog and render it as a colored table.
///
/// # Examples
///
/// ```bash
/// rdex catalog
/// rdex catalog --json
/// ```
pub async fn list_catalog(state: &AppState, json: bool) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("Fetching catalog...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let catalog = state.team_service.fetch_catalog().await;

    spinner.finish_and_clear();
    let catalog = catalog?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    if catalog.is_empty() {
        println!();
        println!(
            "  {} The upstream catalog is empty.",
            style("i").blue().bold()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Type").fg(Color::White),
    ]);

    for creature in &catalog {
        table.add_row(vec![
            Cell::new(creature.id).fg(Color::DarkGrey),
            Cell::new(&creature.name).fg(Color::Cyan),
            Cell::new(&creature.type_name),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} creature{}",
        style(catalog.len()).bold(),
        if catalog.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

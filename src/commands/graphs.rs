//! Graphs command implementation.
//!
//! The graphs command:
//! 1. Loads the snapshot history
//! 2. Computes the player universe and final display names
//! 3. Renders one line chart per tracked statistic and rasterizes it
//! 4. Writes `<field>.png` for each chart
//!
//! Every chart is rendered before the first one is written, so an
//! inconsistent history leaves the output directory untouched.

use super::models::GraphArgs;
use crate::aggregator::{extract_all_series, final_labels};
use crate::chart::{generate_line_chart, rasterize_png, ChartConfig};
use crate::output::{chart_path, write_png};
use crate::parser::{load_history, History, StatField};
use crate::utils::config::MAX_CHART_SIDE;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the graphs command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * History directory missing or containing a malformed snapshot
/// * A player absent from one of the snapshots
/// * File write errors
pub fn execute_graphs(args: GraphArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/4: Loading history...");
    let history = load_history(&args.history_dir).with_context(|| {
        format!("Failed to load history from {}", args.history_dir.display())
    })?;

    info!("Step 2/4: Rendering charts...");
    let config = ChartConfig::new()
        .with_size(args.width, args.height)
        .with_utc_offset(args.utc_offset_hours);
    let charts = render_charts(&history, &config)?;

    info!("Step 3/4: Rasterizing charts...");
    let images = charts
        .iter()
        .map(|(field, svg)| -> Result<(StatField, Vec<u8>)> {
            let png = rasterize_png(svg)
                .with_context(|| format!("Failed to rasterize {} chart", field))?;
            Ok((*field, png))
        })
        .collect::<Result<Vec<_>>>()?;

    info!("Step 4/4: Writing charts to {}...", args.output_dir.display());
    for (field, png) in &images {
        let path = chart_path(&args.output_dir, *field);
        write_png(png, &path)
            .with_context(|| format!("Failed to write chart {}", path.display()))?;
    }

    info!(
        "Graphs completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Render one SVG chart per tracked field
///
/// **Public** - used by execute_graphs, callable without touching the disk
pub fn render_charts(history: &History, config: &ChartConfig) -> Result<Vec<(StatField, String)>> {
    let universe = history.player_universe();
    let labels = final_labels(history, &universe).context("Cannot label chart lines")?;
    let timestamps = history.timestamps();

    debug!("{} players across {} snapshots", universe.len(), history.len());

    StatField::ALL
        .iter()
        .map(|&field| -> Result<(StatField, String)> {
            println!("Generating {} graph...", field);

            let series = extract_all_series(history, &universe, field)
                .with_context(|| format!("Cannot extract {} series", field))?;
            let field_config = config.clone().with_title(format!("{} per player", field));
            let svg = generate_line_chart(&timestamps, &series, &labels, Some(&field_config))
                .with_context(|| format!("Failed to generate {} chart", field))?;

            Ok((field, svg))
        })
        .collect()
}

/// Validate graphs arguments
///
/// **Public** - can be called before execute_graphs for early validation
pub fn validate_graph_args(args: &GraphArgs) -> Result<()> {
    if !args.history_dir.is_dir() {
        anyhow::bail!(
            "History directory does not exist: {}",
            args.history_dir.display()
        );
    }

    if !(-12..=14).contains(&args.utc_offset_hours) {
        anyhow::bail!("UTC offset must be between -12 and +14 hours");
    }

    if args.width < 200 || args.height < 200 {
        anyhow::bail!("Chart size must be at least 200x200 pixels");
    }

    if args.width > MAX_CHART_SIDE || args.height > MAX_CHART_SIDE {
        anyhow::bail!(
            "Chart size must be at most {}x{} pixels",
            MAX_CHART_SIDE,
            MAX_CHART_SIDE
        );
    }

    if args.output_dir.is_file() {
        anyhow::bail!(
            "Output directory is a file: {}",
            args.output_dir.display()
        );
    }

    Ok(())
}

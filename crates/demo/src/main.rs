// File: crates/demo/src/main.rs
// Summary: Demo assembles a fake page (control panel, chart surface, sinks), binds the export
// controls, and fires clicks so downloads land under target/out.

use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use export_core::controls::{ATTR_CHART_ID, ATTR_FILENAME, ATTR_FORMAT};
use export_core::{
    ControlAttrs, ControlPanel, DirectorySink, ExportController, LogNavigator, PngSurface,
    StaticRecords, SurfaceRegistry,
};
use serde::{Deserialize, Serialize};

/// One projection row, shaped the way the server-side report generator
/// expects it on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProjectionRow {
    period: String,
    revenue: f64,
    cost: f64,
    profit: f64,
    #[serde(rename = "profitMargin")]
    profit_margin: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Accept output dir and projections CSV from CLI, with fallbacks
    let out_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "target/out".to_string());
    let csv_path = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "projections.csv".to_string());

    let rows = match load_projection_csv(Path::new(&csv_path)) {
        Some(rows) => rows,
        None => {
            println!("No usable CSV at {csv_path}; using built-in sample rows");
            sample_rows()
        }
    };
    println!("Loaded {} projection rows", rows.len());

    // Fake page: one chart surface, a directory download sink, a logging navigator
    let surfaces = Rc::new(SurfaceRegistry::new());
    surfaces.register(Rc::new(PngSurface::new(
        "revenue-chart",
        revenue_chart_png(&rows)?,
    )));

    let controller = ExportController::new(
        surfaces,
        Rc::new(DirectorySink::new(&out_dir)),
        Rc::new(LogNavigator),
    );

    let mut panel = ControlPanel::new();
    let buttons = [
        panel.add_control(
            &["export-png"],
            ControlAttrs::new()
                .with(ATTR_CHART_ID, "revenue-chart")
                .with(ATTR_FILENAME, "revenue.png"),
        ),
        // No data-filename: falls back to chart.png
        panel.add_control(
            &["export-png"],
            ControlAttrs::new().with(ATTR_CHART_ID, "revenue-chart"),
        ),
        // Points at a surface the page never registered; logged and skipped
        panel.add_control(
            &["export-png"],
            ControlAttrs::new().with(ATTR_CHART_ID, "costs-chart"),
        ),
        panel.add_control(
            &["export-projection"],
            ControlAttrs::new().with(ATTR_FORMAT, "pdf"),
        ),
        panel.add_control(
            &["export-projection"],
            ControlAttrs::new().with(ATTR_FORMAT, "excel"),
        ),
        panel.add_control(
            &["export-projection"],
            ControlAttrs::new().with(ATTR_FORMAT, "csv"),
        ),
    ];

    let provider = Rc::new(StaticRecords(serde_json::to_value(&rows)?));
    let (images, data) = controller.bind_controls(&mut panel, provider);
    println!("Bound {images} image controls and {data} data controls");

    for index in buttons {
        panel.click(index);
    }

    println!("Downloads written under {out_dir}");
    Ok(())
}

/// Render the revenue series as a small column-chart PNG; stands in for the
/// page's live chart canvas.
fn revenue_chart_png(rows: &[ProjectionRow]) -> Result<Vec<u8>> {
    const WIDTH: u32 = 640;
    const HEIGHT: u32 = 360;

    let max_revenue = rows
        .iter()
        .map(|r| r.revenue)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0);
    let bar_width = (WIDTH / rows.len().max(1) as u32).max(1);

    let img = image::ImageBuffer::from_fn(WIDTH, HEIGHT, |x, y| {
        let bar = (x / bar_width) as usize;
        let filled = rows
            .get(bar)
            .map(|r| {
                let bar_height = ((r.revenue / max_revenue) * (HEIGHT as f64 - 20.0)) as u32;
                y >= HEIGHT - bar_height
            })
            .unwrap_or(false);
        if filled {
            image::Rgba([64u8, 160, 255, 255])
        } else {
            image::Rgba([18u8, 18, 20, 255])
        }
    });

    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .context("encoding chart raster")?;
    Ok(bytes)
}

/// Load projection rows from a CSV with period,revenue,cost,profit,profitMargin
/// headers. Returns None when the file is missing or yields no usable rows.
fn load_projection_csv(path: &Path) -> Option<Vec<ProjectionRow>> {
    let mut reader = csv::Reader::from_path(path).ok()?;
    let mut rows = Vec::new();
    for record in reader.deserialize::<ProjectionRow>() {
        match record {
            Ok(row) => rows.push(row),
            Err(err) => println!("Skipping malformed row: {err}"),
        }
    }
    if rows.is_empty() {
        None
    } else {
        Some(rows)
    }
}

fn sample_rows() -> Vec<ProjectionRow> {
    let quarters = [
        ("2026 Q1", 1250.5, 800.0),
        ("2026 Q2", 1310.0, 815.25),
        ("2026 Q3", 1402.75, 840.5),
        ("2026 Q4", 1488.0, 871.0),
    ];
    quarters
        .into_iter()
        .map(|(period, revenue, cost)| {
            let profit = revenue - cost;
            ProjectionRow {
                period: period.to_string(),
                revenue,
                cost,
                profit,
                profit_margin: (profit / revenue * 1000.0).round() / 10.0,
            }
        })
        .collect()
}

use clap::{Parser, Subcommand};
use dd_app::charts::{BAR_CAPTION, LINE_CAPTION, SCATTER_CAPTION};
use dd_app::dataset::SourceKind;
use dd_app::{
    AppResult, ChartOutcome, DashboardConfig, Notice, SelectionState, StaticPoint, Table,
    category_line_chart, current_data, current_data_notice, load_csv, load_json,
    range_scatter_chart, static_bar_chart, submit,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dd-cli")]
#[command(about = "Datadash CLI - collect survey rows and chart them", long_about = None)]
struct Cli {
    /// Dashboard config YAML (defaults to ./data/data.csv and ./data/data.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the directory holding the data files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append one survey row to the CSV file
    Submit {
        /// Category label
        category: String,
        /// Value (stored as typed, charted when numeric)
        value: String,
    },
    /// Print the current contents of the CSV file
    Show {
        /// Only print the first N rows
        #[arg(long)]
        head: Option<usize>,
    },
    /// Render the three dashboard charts as text
    Charts {
        /// Category for the line chart (defaults to the first one found)
        #[arg(long)]
        category: Option<String>,
        /// Lower bound of the scatter filter (inclusive)
        #[arg(long, requires = "high", allow_negative_numbers = true)]
        low: Option<i64>,
        /// Upper bound of the scatter filter (inclusive)
        #[arg(long, requires = "low", allow_negative_numbers = true)]
        high: Option<i64>,
    },
    /// Print the resolved configuration, or write it to a file
    Config {
        /// Write the configuration as YAML to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = DashboardConfig::load_or_default(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    tracing::debug!(
        csv = %config.csv_path().display(),
        json = %config.json_path().display(),
        "resolved data files"
    );

    match cli.command {
        Commands::Submit { category, value } => cmd_submit(&config, &category, &value),
        Commands::Show { head } => cmd_show(&config, head),
        Commands::Charts {
            category,
            low,
            high,
        } => cmd_charts(&config, category, low.zip(high)),
        Commands::Config { output } => cmd_config(&config, output.as_deref()),
    }
}

fn cmd_submit(config: &DashboardConfig, category: &str, value: &str) -> AppResult<()> {
    let store = config.record_store()?;
    let submission = submit(&store, category, value)?;
    println!("✓ {}", submission.confirmation);
    println!("  {}", submission.echo);
    println!("  Saved at {}", submission.record.timestamp);
    Ok(())
}

fn cmd_show(config: &DashboardConfig, head: Option<usize>) -> AppResult<()> {
    println!("Current data in {}", config.csv_path().display());
    let loaded = current_data(&config.csv_path());
    if let Some(notice) = current_data_notice(&loaded) {
        print_notice(&notice);
        return Ok(());
    }

    let table = match head {
        Some(n) => loaded.data.head(n),
        None => loaded.data,
    };
    print_table(&table);
    Ok(())
}

fn cmd_charts(
    config: &DashboardConfig,
    category: Option<String>,
    range: Option<(i64, i64)>,
) -> AppResult<()> {
    let csv = load_csv(&config.csv_path());
    print_notice(&csv.status.notice(&config.csv_file, SourceKind::Csv));
    let json = load_json(&config.json_path());
    print_notice(&json.status.notice(&config.json_file, SourceKind::Json));

    let mut selection = SelectionState::default();
    if let Some(category) = category {
        selection.category.select(category);
    }
    if let Some((low, high)) = range {
        selection.range.select(low, high);
    }

    println!();
    println!("Graph 1: Static - Data Points from JSON");
    match static_bar_chart(&json.data) {
        ChartOutcome::Ready(points) => {
            print_bars(&points);
            println!("  {BAR_CAPTION}");
        }
        ChartOutcome::Notice(notice) => print_notice(&notice),
    }

    println!();
    println!("Graph 2: Dynamic - Values by Category (CSV data)");
    match category_line_chart(&csv.data, &mut selection.category) {
        ChartOutcome::Ready(chart) => {
            println!("  Categories: {}", chart.categories.join(", "));
            println!("  Selected:   {}", chart.selected);
            for [row, value] in &chart.points {
                println!("  row {:>4}  {}", row, value);
            }
            println!("  {LINE_CAPTION}");
        }
        ChartOutcome::Notice(notice) => print_notice(&notice),
    }

    println!();
    println!("Graph 3: Dynamic - Filtered Scatter Plot");
    match range_scatter_chart(&csv.data, &mut selection.range) {
        ChartOutcome::Ready(chart) => {
            println!("  Slider bounds: {} ..= {}", chart.bounds.0, chart.bounds.1);
            println!("  Selected:      {} ..= {}", chart.selected.0, chart.selected.1);
            for point in &chart.points {
                println!(
                    "  {:<28} {:>10}  {}",
                    point.timestamp, point.value, point.category
                );
            }
            println!("  {SCATTER_CAPTION}");
        }
        ChartOutcome::Notice(notice) => print_notice(&notice),
    }

    Ok(())
}

fn cmd_config(config: &DashboardConfig, output: Option<&Path>) -> AppResult<()> {
    match output {
        Some(path) => {
            config.save_yaml(path)?;
            println!("✓ Wrote config to {}", path.display());
        }
        None => {
            println!("Data directory: {}", config.data_dir.display());
            println!("  CSV:  {}", config.csv_path().display());
            println!("  JSON: {}", config.json_path().display());
        }
    }
    Ok(())
}

fn print_notice(notice: &Notice) {
    let marker = match notice {
        Notice::Success(_) => "✓",
        Notice::Info(_) => "i",
        Notice::Warning(_) => "!",
        Notice::Error(_) => "✗",
    };
    println!("{} {}", marker, notice.message());
}

fn print_table(table: &Table) {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let render = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", render(table.headers.as_slice()));
    println!(
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    );
    for row in &table.rows {
        println!("{}", render(row.as_slice()));
    }
    println!("({} rows)", table.len());
}

fn print_bars(points: &[StaticPoint]) {
    let width = 40usize;
    let max = points
        .iter()
        .map(|p| p.value.abs())
        .fold(0.0f64, f64::max);
    let label_width = points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);

    for point in points {
        let filled = if max > 0.0 {
            ((point.value.abs() / max) * width as f64).round() as usize
        } else {
            0
        };
        println!(
            "  {:<label_width$} {} {}",
            point.label,
            "#".repeat(filled.min(width)),
            point.value,
            label_width = label_width
        );
    }
}

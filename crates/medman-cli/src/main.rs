//! med CLI: command-line bookkeeping for named measurements.
//!
//! This is the presentation layer: it validates user input, hands
//! well-formed records to the controller, and renders the results. The
//! controller never sees an invalid measurement.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};
use tracing_subscriber::EnvFilter;

use medman_core::{
    filter, validate, AppConfig, FilterCriteria, LocalStore, Measurement, MeasurementController,
    StoreEvent, Theme,
};

#[derive(Parser)]
#[command(
    name = "med",
    about = "📏 medman-rs: measurement bookkeeping",
    version,
    author
)]
struct Cli {
    /// Path to the data file
    #[arg(long, global = true, default_value = "./medidas.json")]
    store: PathBuf,

    /// Path to the config file (units, name policy)
    #[arg(long, global = true, default_value = "./medman.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new measurement
    Add {
        /// Measurement name (e.g. "Cintura")
        name: String,
        /// Numeric value (e.g. "80" or "16.5")
        value: String,
        /// Unit label, one of the configured units
        unit: String,
    },
    /// List all recorded measurements
    List,
    /// Remove a measurement by its list index
    Remove {
        /// 0-based index as shown by `med list`
        index: usize,
    },
    /// List measurements matching the given criteria
    Find {
        /// Case-insensitive substring of the name
        #[arg(long, default_value = "")]
        name: String,
        /// Substring of the value's decimal form
        #[arg(long, default_value = "")]
        value: String,
        /// Exact unit, or the all-units sentinel
        #[arg(long, default_value = "")]
        unit: String,
    },
    /// Show the configured unit set
    Units,
    /// Show or change the display theme
    Theme {
        action: Option<ThemeAction>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)?;
    let store = LocalStore::open(&cli.store);
    let mut controller = MeasurementController::initialize(store, config);

    // CLI analog of the original UI's toast notifications.
    controller.subscribe(|event| match event {
        StoreEvent::Added => println!("✓ Measurement added."),
        StoreEvent::Removed => println!("✓ Measurement removed."),
    });

    match cli.command {
        Commands::Add { name, value, unit } => {
            cmd_add(&mut controller, &name, &value, &unit)?;
        }
        Commands::List => {
            cmd_list(&controller);
        }
        Commands::Remove { index } => {
            controller.remove(index)?;
        }
        Commands::Find { name, value, unit } => {
            cmd_find(&controller, FilterCriteria { name, value, unit });
        }
        Commands::Units => {
            cmd_units(&controller);
        }
        Commands::Theme { action } => {
            cmd_theme(&mut controller, action)?;
        }
    }

    Ok(())
}

// ─── Command implementations ──────────────────────────────────────────────────

fn cmd_add(
    controller: &mut MeasurementController,
    name: &str,
    value: &str,
    unit: &str,
) -> Result<()> {
    // Validation happens here, at the boundary; a rejected input never
    // reaches the controller.
    let measurement = validate::parse_measurement(name, value, unit, controller.config())?;
    controller.add(measurement)?;
    Ok(())
}

fn cmd_list(controller: &MeasurementController) {
    print_measurements(controller.measurements());
}

fn cmd_find(controller: &MeasurementController, criteria: FilterCriteria) {
    if criteria.is_empty() {
        // Clearing the filters re-renders the unfiltered collection.
        print_measurements(controller.measurements());
        return;
    }
    // Keep the live-collection indices so the printed "#" column is a valid
    // handle for `med remove`.
    let all_units = &controller.config().all_units_label;
    let matched: Vec<(usize, &Measurement)> = controller
        .measurements()
        .iter()
        .enumerate()
        .filter(|(_, m)| filter::matches(m, &criteria, all_units))
        .collect();
    if matched.is_empty() {
        println!("No measurements match.");
        return;
    }
    println!("{}", render_rows(&matched));
}

fn cmd_units(controller: &MeasurementController) {
    let config = controller.config();
    for unit in &config.units {
        println!("{unit}");
    }
    println!("({} matches any unit when filtering)", config.all_units_label);
}

fn cmd_theme(controller: &mut MeasurementController, action: Option<ThemeAction>) -> Result<()> {
    let theme = match action {
        None => controller.theme(),
        Some(ThemeAction::Light) => {
            controller.set_theme(Theme::Light)?;
            Theme::Light
        }
        Some(ThemeAction::Dark) => {
            controller.set_theme(Theme::Dark)?;
            Theme::Dark
        }
        Some(ThemeAction::Toggle) => controller.toggle_theme()?,
    };
    println!("Theme: {theme}");
    Ok(())
}

// ─── Rendering ────────────────────────────────────────────────────────────────

fn print_measurements(items: &[Measurement]) {
    if items.is_empty() {
        println!("No measurements recorded yet.");
        return;
    }
    let rows: Vec<(usize, &Measurement)> = items.iter().enumerate().collect();
    println!("{}", render_rows(&rows));
}

fn render_rows(rows: &[(usize, &Measurement)]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["#", "Name", "Value", "Unit"]);
    for (index, m) in rows {
        table.add_row([
            index.to_string(),
            m.name.clone(),
            m.value.to_string(),
            m.unit.clone(),
        ]);
    }
    table
}

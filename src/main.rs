use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use eco_inspector::export::{export_csv, export_json};
use eco_inspector::format::{
    format_currency, format_energy, format_surface, format_volume, format_weight,
};
use eco_inspector::query::{execute, parse_commands, RecordingViewer};
use eco_inspector::scene::{AnalysisContext, SceneSnapshot};
use eco_inspector::session::Session;
use eco_inspector::ui::App;

#[derive(Parser, Debug)]
#[command(name = "eco-inspector")]
#[command(about = "Eco Inspector - environmental impact and element search for BIM models")]
#[command(version)]
struct Args {
    /// Path to a scene snapshot (JSON)
    #[arg(required = true)]
    file: PathBuf,

    /// Export the material breakdown to CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export the impact report to JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Export the model index to JSON
    #[arg(long, value_name = "FILE")]
    index_json: Option<PathBuf>,

    /// Print the model context and key figures
    #[arg(long)]
    summary: bool,

    /// Resolve a French or English search term and print the matches
    #[arg(long, value_name = "TERM")]
    search: Option<String>,

    /// Re-fetch the scene for the search instead of using cached records
    #[arg(long, requires = "search")]
    live: bool,

    /// Execute the COMMANDS block of an assistant reply
    #[arg(long, value_name = "FILE")]
    commands: Option<PathBuf>,
}

impl Args {
    fn is_headless(&self) -> bool {
        self.csv.is_some()
            || self.json.is_some()
            || self.index_json.is_some()
            || self.summary
            || self.search.is_some()
            || self.commands.is_some()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let scene = SceneSnapshot::from_file(&args.file)?;
    let mut session = Session::load(AnalysisContext::new(&scene, &scene)).await?;

    if let Some(csv_path) = &args.csv {
        export_csv(&session.metrics(), csv_path)?;
        println!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&session.metrics(), json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    if let Some(json_path) = &args.index_json {
        export_json(session.index(), json_path)?;
        println!("Exported index to JSON: {}", json_path.display());
    }

    if args.summary {
        print_summary(&scene.name, &session);
    }

    if let Some(term) = &args.search {
        let ids = if args.live {
            session.search_live(term).await
        } else {
            session.resolve(term)
        };
        println!("\"{term}\": {} element(s)", ids.len());
        for id in ids {
            let name = session.record(id).map_or("?", |r| r.name.as_str());
            println!("  #{id} {name}");
        }
    }

    if let Some(path) = &args.commands {
        let reply = std::fs::read_to_string(path)?;
        let mut viewer = RecordingViewer::default();
        for outcome in execute(&session, &mut viewer, parse_commands(&reply)).await {
            println!("[{}] {:?}: {}", outcome.command, outcome.status, outcome.message);
        }
        for action in &viewer.actions {
            println!("  viewer <- {action:?}");
        }
    }

    if args.is_headless() {
        return Ok(());
    }

    let app = App::new(
        scene.name.clone(),
        session.metrics(),
        session.index().clone(),
        session.records().to_vec(),
    );
    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}

fn print_summary(model_name: &str, session: &Session<'_, SceneSnapshot, SceneSnapshot>) {
    let m = session.metrics();
    println!("Model: {model_name}");
    println!("{}", session.index().describe());
    println!();
    println!("Elements analyzed: {}", m.elements_analyzed);
    println!("Surface:           {}", format_surface(m.surface_total));
    println!("Volume:            {}", format_volume(m.volume_total));
    println!("Mass:              {}", format_weight(m.mass_total));
    println!("Carbon footprint:  {} CO2", format_weight(m.carbon_footprint));
    println!("Energy:            {}", format_energy(m.energy_consumption));
    println!("Cost estimate:     {}", format_currency(m.cost_estimate));
    println!("Recyclability:     {:.1}%", m.recyclability_percent);
    println!("Certification:     {}", m.certification);
}

use crate::infra::{fixture_reference_point, FixtureShelterStore};
use clap::Args;
use shelterwatch::config::AppConfig;
use shelterwatch::dashboard::filter::{OccupancyRange, RegionSelector, ShelterFilter};
use shelterwatch::dashboard::source::CsvShelterStore;
use shelterwatch::dashboard::DashboardSession;
use shelterwatch::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// CSV data directory (defaults to the configured SHELTER_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Region selector; omit or pass "all" for every region
    #[arg(long)]
    pub(crate) region: Option<String>,
    /// Lower bound of the occupancy-rate window
    #[arg(long, default_value_t = 0.0)]
    pub(crate) rate_min: f64,
    /// Upper bound of the occupancy-rate window
    #[arg(long, default_value_t = 100.0)]
    pub(crate) rate_max: f64,
    /// List every filtered shelter marker in the output
    #[arg(long)]
    pub(crate) list_shelters: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// List every filtered shelter marker in the output
    #[arg(long)]
    pub(crate) list_shelters: bool,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        data_dir,
        region,
        rate_min,
        rate_max,
        list_shelters,
    } = args;

    let config = AppConfig::load()?;
    let data_dir = data_dir.unwrap_or(config.data.data_dir);

    let store = CsvShelterStore::new(&data_dir);
    let session = DashboardSession::initialize(&store, config.threat.reference_point)?;

    println!("Shelter risk report ({})", data_dir.display());
    let filter = build_filter(region, rate_min, rate_max)?;
    render_dashboard(&session, &filter, list_shelters);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let session = DashboardSession::initialize(&FixtureShelterStore, fixture_reference_point())?;

    println!("Shelter risk dashboard demo (built-in fixture data)");
    render_dashboard(&session, &ShelterFilter::default(), args.list_shelters);

    Ok(())
}

fn build_filter(
    region: Option<String>,
    rate_min: f64,
    rate_max: f64,
) -> Result<ShelterFilter, AppError> {
    let region = region
        .map(RegionSelector::from)
        .unwrap_or(RegionSelector::All);
    let occupancy = OccupancyRange::new(rate_min, rate_max)?;
    Ok(ShelterFilter { region, occupancy })
}

fn render_dashboard(session: &DashboardSession, filter: &ShelterFilter, list_shelters: bool) {
    println!(
        "Loaded {} shelters ({} skipped for bad coordinates), bombardment radius {:.1} km",
        session.shelters().len(),
        session.skipped_shelters(),
        session.max_range_km()
    );
    println!(
        "Reference point: ({:.4}, {:.4})",
        session.reference_point().latitude,
        session.reference_point().longitude
    );

    let analytics = session.analytics();

    println!("\nMean occupancy by region");
    if analytics.region_ranking.is_empty() {
        println!("- no rated shelters loaded");
    }
    for entry in &analytics.region_ranking {
        println!(
            "- {}: {:.1}% across {} rated of {} shelters",
            entry.region, entry.mean_occupancy_rate, entry.rated_count, entry.shelter_count
        );
    }

    println!("\nHighest-risk shelters");
    for entry in &analytics.top_risk {
        let rate = match entry.occupancy_rate {
            Some(rate) => format!("{rate:.1}%"),
            None => "unrated".to_string(),
        };
        println!(
            "- [{}] {} ({}) | occupancy {} | score {}",
            entry.severity_label, entry.address, entry.region, rate, entry.risk_score
        );
    }

    let view = session.map_view(filter);
    println!(
        "\nMap: {} markers, {} range circles, {} demarcation vertices",
        view.markers.len(),
        view.range_circles.len(),
        view.demarcation_line.len()
    );

    if view.markers.is_empty() {
        println!("No shelter matches the current filter.");
    } else if list_shelters {
        for marker in &view.markers {
            let rate = match marker.occupancy_rate {
                Some(rate) => format!("{rate:.1}%"),
                None => "unrated".to_string(),
            };
            println!(
                "- {} | {} ({}) | occupancy {} | score {} | {}",
                marker.id, marker.address, marker.region, rate, marker.risk_score, marker.color
            );
        }
    }
}

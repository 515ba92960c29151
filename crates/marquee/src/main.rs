use std::path::PathBuf;

use anyhow::Context;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use clap::Parser;
use marquee_catalog::MovieLibrary;
use marquee_core::{
    BackOffice, ConfigManager, Product, ProductCategory, SnapshotManager, TheaterType,
};

/// Back-office console for cinema chains with schedule conflict checking and live theater status.
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "Marquee cinema back-office")]
struct Args {
    /// Path to the configuration file (default: config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Load venue state from a snapshot file instead of seeding demo data
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save the venue state to the snapshots directory before exiting
    #[arg(long, default_value = "false")]
    save: bool,

    /// Evaluate the status board at this instant instead of the wall clock
    #[arg(long, value_parser = parse_datetime)]
    now: Option<NaiveDateTime>,
}

fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .map_err(|e| format!("Invalid datetime (expected YYYY-MM-DDTHH:MM): {}", e))
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    let mut config = ConfigManager::new(args.config);
    let settings = config.load()?;
    let now = args.now.unwrap_or_else(|| chrono::Local::now().naive_local());

    println!("Configuring {} back-office:", settings.venue_name);
    println!("Maintenance window: {} minutes", settings.maintenance_window_minutes);
    println!("Snapshots directory: {}", settings.snapshots_dir);
    println!("Clock: {}", now.format("%Y-%m-%d %H:%M"));

    let mut snapshots = SnapshotManager::new(PathBuf::from(&settings.snapshots_dir));

    let mut store = BackOffice::with_settings(&settings);
    if let Some(path) = &args.load {
        snapshots
            .load_snapshot(path)
            .with_context(|| format!("loading snapshot {}", path.display()))?;
        snapshots.apply_snapshot_to_store(&mut store)?;
        println!("Loaded snapshot: {}", path.display());
    } else {
        seed_demo_venue(&mut store, now)?;
    }

    print_schedule(&store, now);
    print_status_board(&store, now);
    print_roster(&store);
    print_concessions(&store);

    if args.save {
        let file_name = format!("{}.marquee", settings.venue_name.replace(' ', "_").to_lowercase());
        let path = snapshots.save_snapshot_as(
            &store,
            settings.venue_name.clone(),
            PathBuf::from(&settings.snapshots_dir).join(file_name),
        )?;
        println!("\nSaved snapshot to {}", path.display());
    }

    Ok(())
}

/// The walkthrough venue: three theaters, three booked titles, a day of
/// screenings, one maintenance visit, and a small roster.
fn seed_demo_venue(store: &mut BackOffice, now: NaiveDateTime) -> Result<(), anyhow::Error> {
    let today = now.date();
    let library = MovieLibrary::new();

    let sala_1 = store.add_theater(
        "Sala 1",
        100,
        TheaterType::TwoD,
        vec!["Air conditioning".to_string(), "Dolby sound".to_string()],
        today,
    )?;
    let sala_2 = store.add_theater(
        "Sala 2",
        150,
        TheaterType::ThreeD,
        vec![
            "Air conditioning".to_string(),
            "Dolby sound".to_string(),
            "Reclining seats".to_string(),
        ],
        today,
    )?;
    let sala_imax = store.add_theater(
        "Sala IMAX",
        200,
        TheaterType::Imax,
        vec![
            "Air conditioning".to_string(),
            "IMAX sound".to_string(),
            "Giant screen".to_string(),
        ],
        today,
    )?;

    let spider_man = store.add_movie(
        library
            .get("spider-man-no-way-home")
            .context("missing catalog title")?,
    );
    let captain_america = store.add_movie(
        library
            .get("captain-america")
            .context("missing catalog title")?,
    );
    let conjuring = store.add_movie(library.get("the-conjuring").context("missing catalog title")?);

    let showings = [
        (sala_1, spider_man, 10, 75),
        (sala_2, captain_america, 14, 120),
        (sala_imax, conjuring, 18, 180),
    ];
    for (theater, movie, hour, tickets) in showings {
        let start = today.and_hms_opt(hour, 0, 0).context("bad seed hour")?;
        let screening = store.schedule_screening(theater, movie, start)?;
        store.record_ticket_sales(screening, tickets)?;
    }

    store.add_maintenance(sala_1, today.and_hms_opt(9, 0, 0).context("bad seed hour")?, "General cleaning and equipment check")?;
    store.add_maintenance(
        sala_2,
        (today + Duration::days(30)).and_hms_opt(9, 0, 0).context("bad seed hour")?,
        "3D projector maintenance",
    )?;

    let ana = store.add_staff("Ana Torres", "ana@marquee.example", "555-0100");
    let luis = store.add_staff("Luis Vega", "luis@marquee.example", "555-0101");
    let projectionist = store.add_role("Projectionist", "Runs the booth");
    let usher = store.add_role("Usher", "Seats guests and checks tickets");
    store.assign_role(
        ana,
        projectionist,
        NaiveTime::from_hms_opt(9, 0, 0).context("bad shift time")?,
        NaiveTime::from_hms_opt(17, 0, 0).context("bad shift time")?,
    )?;
    store.assign_role(
        luis,
        usher,
        NaiveTime::from_hms_opt(12, 0, 0).context("bad shift time")?,
        NaiveTime::from_hms_opt(20, 0, 0).context("bad shift time")?,
    )?;

    store.add_product(Product {
        id: 0,
        name: "Large Popcorn".to_string(),
        price_cents: 850,
        category: ProductCategory::Snacks,
        description: "Butter popcorn, large tub".to_string(),
        stock: 40,
        promotion_price_cents: None,
    });
    store.add_product(Product {
        id: 0,
        name: "Movie Night Combo".to_string(),
        price_cents: 1500,
        category: ProductCategory::Combos,
        description: "Two drinks and a large popcorn".to_string(),
        stock: 25,
        promotion_price_cents: Some(1200),
    });

    Ok(())
}

fn print_schedule(store: &BackOffice, now: NaiveDateTime) {
    let today: NaiveDate = now.date();
    println!("\nToday's screenings:");
    for screening in store.screenings_filtered(Some(today), None) {
        let theater = store
            .theater(screening.theater_id)
            .map(|t| t.name.as_str())
            .unwrap_or("?");
        let title = store
            .movie(screening.movie_id)
            .map(|m| m.title.as_str())
            .unwrap_or("(unknown title)");
        println!(
            "  {} - {}  {:<10} {}  ({} tickets sold)",
            screening.start_time.format("%H:%M"),
            screening.end_time.format("%H:%M"),
            theater,
            title,
            screening.tickets_sold
        );
    }
}

fn print_status_board(store: &BackOffice, now: NaiveDateTime) {
    let mut theaters: Vec<_> = store.theaters().collect();
    theaters.sort_by_key(|t| t.id);

    println!("\nStatus board at {}:", now.format("%H:%M"));
    for theater in theaters {
        println!(
            "  {:<10} {:>4} seats  {:<5} {}",
            theater.name,
            theater.capacity,
            theater.theater_type.to_string(),
            store.status_of(theater.id, now)
        );
    }
}

fn print_roster(store: &BackOffice) {
    let mut assignments: Vec<_> = store.assignments().collect();
    assignments.sort_by_key(|a| (a.start_time, a.id));

    println!("\nShift roster:");
    for assignment in assignments {
        let who = store
            .staff_member(assignment.staff_id)
            .map(|s| s.name.as_str())
            .unwrap_or("?");
        let role = store
            .role(assignment.role_id)
            .map(|r| r.name.as_str())
            .unwrap_or("?");
        println!(
            "  {} - {}  {:<12} {}",
            assignment.start_time.format("%H:%M"),
            assignment.end_time.format("%H:%M"),
            role,
            who
        );
    }
}

fn print_concessions(store: &BackOffice) {
    let mut products: Vec<_> = store.products().collect();
    products.sort_by_key(|p| p.id);

    println!("\nConcession stand:");
    for product in products {
        let cents = product.effective_price_cents();
        println!(
            "  {:<18} {:<10} ${}.{:02}  ({} in stock)",
            product.name,
            product.category.to_string(),
            cents / 100,
            cents % 100,
            product.stock
        );
    }
}

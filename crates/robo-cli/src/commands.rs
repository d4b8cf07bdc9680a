use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span};

use robo_cli::output::ReportWriter;
use robo_cli::tables::{cost_table, glance_table, options_table, results_table, schema_table};
use robo_ingest::{IngestOptions, NormalizedCatalog, load_catalog};
use robo_model::{Flag, Record};
use robo_query::{FilterCriteria, NumericRange, SelectorOptions, SortKey, apply, estimate};
use robo_report::{ImageOutcome, ReportOptions, ReportRenderer};

use crate::cli::{
    CatalogArgs, EstimateArgs, FilterArgs, GlanceArgs, ListArgs, ReportArgs, YesNo,
};

fn load(args: &CatalogArgs) -> Result<NormalizedCatalog> {
    let options = IngestOptions::default().with_skip_rows(args.skip_rows);
    let loaded = load_catalog(&args.csv, &options)
        .with_context(|| format!("load catalog {}", args.csv.display()))?;
    if loaded.dropped_rows > 0 {
        eprintln!(
            "note: skipped {} row(s) without a name or manufacturer",
            loaded.dropped_rows
        );
    }
    Ok(loaded)
}

fn criteria(args: &FilterArgs) -> FilterCriteria {
    let mut criteria = FilterCriteria::new()
        .with_search(args.search.as_deref().unwrap_or_default())
        .with_manufacturer(args.manufacturer.as_deref().unwrap_or_default())
        .with_grades(args.grades.iter().cloned())
        .with_battery_types(&args.battery_types)
        .with_devices(&args.devices);

    type SetFlag = fn(FilterCriteria, Flag) -> FilterCriteria;
    let flags: [(Option<YesNo>, SetFlag); 8] = [
        (args.rechargeable, FilterCriteria::with_rechargeable),
        (args.needs_batteries, FilterCriteria::with_needs_batteries),
        (args.set_available, FilterCriteria::with_set_available),
        (args.screen_free, FilterCriteria::with_screen_free),
        (args.consumables, FilterCriteria::with_consumables),
        (args.visual, FilterCriteria::with_visual),
        (args.auditory, FilterCriteria::with_auditory),
        (args.fine_motor, FilterCriteria::with_fine_motor),
    ];
    for (value, set) in flags {
        if let Some(value) = value {
            criteria = set(criteria, value.into());
        }
    }
    if let Some(internet) = args.internet {
        criteria = criteria.with_internet(internet.into());
    }
    if let Some(range) = range(args.min_price, args.max_price) {
        criteria = criteria.with_price_range(range);
    }
    if let Some(range) = range(args.min_age, args.max_age) {
        criteria = criteria.with_age_range(range);
    }
    if let Some(range) = range(args.min_space, args.max_space) {
        criteria = criteria.with_space_range(range);
    }
    criteria
}

fn range(min: Option<f64>, max: Option<f64>) -> Option<NumericRange> {
    (min.is_some() || max.is_some()).then(|| NumericRange::new(min, max))
}

pub fn run_list(args: &ListArgs) -> Result<()> {
    let loaded = load(&args.catalog)?;
    let result = apply(&loaded.catalog, &criteria(&args.filters), args.sort);
    if args.json {
        let json = serde_json::to_string_pretty(&result).context("serialize results")?;
        println!("{json}");
        return Ok(());
    }
    println!("{}", result.summary());
    if !result.is_empty() {
        println!("{}", results_table(result.records()));
    }
    Ok(())
}

pub fn run_glance(args: &GlanceArgs) -> Result<()> {
    let loaded = load(&args.catalog)?;
    let result = apply(&loaded.catalog, &criteria(&args.filters), SortKey::Price);
    println!("{}", result.summary());
    if !result.is_empty() {
        println!("{}", glance_table(result.records()));
    }
    Ok(())
}

pub fn run_estimate(args: &EstimateArgs) -> Result<()> {
    let loaded = load(&args.catalog)?;
    let record = find(&loaded, &args.name)?;
    let options = estimate(record, args.students);
    println!("{} - {} student(s)", record.name, args.students);
    if args.students < 1 {
        println!("Class size must be at least 1.");
    } else if options.is_empty() {
        println!("Not enough pricing data to estimate costs.");
    } else {
        println!("{}", cost_table(&options));
    }
    Ok(())
}

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let loaded = load(&args.catalog)?;
    let targets: Vec<&Record> = match &args.name {
        Some(name) => vec![find(&loaded, name)?],
        None => apply(&loaded.catalog, &criteria(&args.filters), SortKey::Name).into_records(),
    };
    if targets.is_empty() {
        println!("No matching robots; nothing to render.");
        return Ok(());
    }

    let mut options = ReportOptions::default()
        .with_class_size(args.class_size)
        .with_fetch_images(!args.offline)
        .with_image_timeout(Duration::from_secs(args.image_timeout));
    if let Some(standards) = &args.standards {
        options = options.with_standards(standards.as_str());
    }
    let renderer = ReportRenderer::new(options).context("create report renderer")?;

    let mut writer = ReportWriter::create(&renderer, &args.out)?;

    let span = info_span!("report", count = targets.len());
    let _guard = span.enter();

    let progress = ProgressBar::new(targets.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}") {
        progress.set_style(style.progress_chars("=> "));
    }
    if targets.len() == 1 {
        progress.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }

    let mut failed_images = 0usize;
    for record in &targets {
        progress.set_message(record.name.clone());
        let written = writer.write(record)?;
        if matches!(written.image, ImageOutcome::Failed(_)) && !args.offline {
            failed_images += 1;
        }
        progress.println(format!("{} -> {}", record.name, written.path.display()));
        progress.inc(1);
    }
    progress.finish_and_clear();

    info!(reports = targets.len(), failed_images, "reports written");
    println!(
        "Wrote {} report(s) to {}",
        targets.len(),
        args.out.display()
    );
    if failed_images > 0 {
        println!("{failed_images} image(s) could not be downloaded; placeholders were used.");
    }
    Ok(())
}

pub fn run_schema(args: &CatalogArgs) -> Result<()> {
    let loaded = load(args)?;
    let report = &loaded.report;
    println!("{}", schema_table(report));
    if !report.device_labels.is_empty() {
        println!("Device columns: {}", report.device_labels.join(", "));
    }
    if !report.unmapped_headers.is_empty() {
        println!("Unused columns: {}", report.unmapped_headers.join(", "));
    }
    println!("{} robot(s) loaded", loaded.catalog.len());
    Ok(())
}

pub fn run_options(args: &CatalogArgs) -> Result<()> {
    let loaded = load(args)?;
    println!("{}", options_table(&SelectorOptions::from_catalog(&loaded.catalog)));
    Ok(())
}

fn find<'a>(loaded: &'a NormalizedCatalog, name: &str) -> Result<&'a Record> {
    loaded
        .catalog
        .find_by_name(name)
        .ok_or_else(|| anyhow!("no robot named '{name}' in the catalog"))
}

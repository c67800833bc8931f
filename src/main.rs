use anyhow::Context;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

use tumor_outcomes::algorithm::population::{
    assignable_treatment_group, validate_population_definitions,
};
use tumor_outcomes::utils::logging::{create_spinner, finish_and_clear, finish_progress_bar};
use tumor_outcomes::{
    AnalysisRequest, PatientRecord, PopulationBreakdown, TREATMENT_GROUP_TABLE,
    build_reference_entries, render_table, stratify_by_treatment,
};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let cohort_path = PathBuf::from(
        args.next()
            .context("usage: tumor-outcomes <cohort.json> [request.json]")?,
    );
    let request = match args.next() {
        Some(path) => AnalysisRequest::from_json_file(&PathBuf::from(&path))
            .with_context(|| format!("Failed to load analysis request from {path}"))?,
        None => AnalysisRequest::default(),
    };
    let populations = request.populations_or_default();
    validate_population_definitions(&populations)?;
    let measurement_types = request.measurement_types_or_default();
    info!("{}", request.config);

    let start = Instant::now();
    let spinner = create_spinner(Some("Loading cohort"));
    let content = std::fs::read_to_string(&cohort_path)
        .with_context(|| format!("Failed to read cohort from {}", cohort_path.display()))?;
    let patients: Vec<PatientRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse cohort from {}", cohort_path.display()))?;
    finish_progress_bar(&spinner, Some(&format!("Loaded {} patients", patients.len())));

    let spinner = create_spinner(Some("Building reference entries"));
    let entries = build_reference_entries(&patients, TREATMENT_GROUP_TABLE);
    let entries_by_treatment = stratify_by_treatment(&entries, assignable_treatment_group);
    finish_and_clear(&spinner);

    let breakdown = PopulationBreakdown::new(populations, measurement_types, request.config);
    let result = breakdown.analyze(&entries_by_treatment);

    print!("{}", render_table(&result, breakdown.config())?);
    println!("{}", serde_json::to_string_pretty(&result)?);

    info!("Analysis finished in {:?}", start.elapsed());
    Ok(())
}

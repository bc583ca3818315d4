use crate::cli::BuildArgs;
use crate::config::{AppConfig, PartialBuildConfig};
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use dnahelix::core::scene::memory::InMemoryScene;
use dnahelix::engine::progress::ProgressReporter;
use dnahelix::workflows::generate::{self, GenerationReport};
use std::fmt::Write as _;
use tracing::info;

pub fn run(args: BuildArgs, quiet: bool) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialBuildConfig::from_file(path)?,
        None => PartialBuildConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let app_config = partial_config.merge_with_cli(&args)?;

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let mut scene = InMemoryScene::new();
    let report = build_scene(&mut scene, &app_config, &reporter)?;

    print!("{}", format_summary(&report, &scene, args.list));
    Ok(())
}

pub fn build_scene(
    scene: &mut InMemoryScene,
    app_config: &AppConfig,
    reporter: &ProgressReporter,
) -> Result<GenerationReport> {
    info!(
        "Invoking the generation workflow for {} base(s) in {}-form.",
        app_config.sequence.chars().count(),
        app_config.core_config.form
    );
    Ok(generate::run(
        scene,
        &app_config.sequence,
        &app_config.core_config,
        reporter,
    )?)
}

pub fn format_summary(report: &GenerationReport, scene: &InMemoryScene, list: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "✓ {}-DNA helix: {} pair(s) over {} position(s), height {:.3}",
        report.form, report.pairs_placed, report.sequence_length, report.height
    );
    let _ = writeln!(
        out,
        "  {} base block(s), {} backbone segment(s), {} joint(s), {} material(s)",
        report.base_blocks,
        report.backbones,
        report.joints,
        scene.material_count()
    );
    for skipped in &report.skipped {
        let _ = writeln!(
            out,
            "  skipped '{}' at position {}",
            skipped.symbol, skipped.index
        );
    }

    if list {
        for &id in &report.objects {
            let Some(obj) = scene.object(id) else {
                continue;
            };
            let loc = obj.transform.location;
            let _ = writeln!(
                out,
                "  {:<16} {:<10} ({:>7.3}, {:>7.3}, {:>7.3})  {}",
                obj.name,
                obj.primitive.kind(),
                loc.x,
                loc.y,
                loc.z,
                scene.material_name_of(id).unwrap_or("-")
            );
        }
    }
    out
}

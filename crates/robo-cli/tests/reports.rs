//! Report files written to an output directory.

use std::collections::BTreeSet;
use std::path::Path;

use robo_cli::output::{ReportWriter, unique_path};
use robo_model::Record;
use robo_report::{ImageOutcome, ReportOptions, ReportRenderer};
use tempfile::TempDir;

fn offline_renderer() -> ReportRenderer {
    ReportRenderer::new(ReportOptions::default().with_fetch_images(false)).expect("renderer")
}

fn is_pdf(path: &Path) -> bool {
    std::fs::read(path).is_ok_and(|bytes| bytes.starts_with(b"%PDF-"))
}

#[test]
fn colliding_names_get_numbered_suffixes() {
    let dir = Path::new("out");
    let mut used = BTreeSet::new();
    assert_eq!(unique_path(dir, "bee-bot.pdf", &mut used), dir.join("bee-bot.pdf"));
    assert_eq!(unique_path(dir, "bee-bot.pdf", &mut used), dir.join("bee-bot-2.pdf"));
    assert_eq!(unique_path(dir, "bee-bot.pdf", &mut used), dir.join("bee-bot-3.pdf"));
    assert_eq!(unique_path(dir, "dash.pdf", &mut used), dir.join("dash.pdf"));
}

#[test]
fn reports_for_same_named_robots_are_all_kept() {
    let temp = TempDir::new().expect("temp dir");
    let out = temp.path().join("reports");
    let renderer = offline_renderer();
    let mut writer = ReportWriter::create(&renderer, &out).expect("create writer");

    let records = [
        Record::new("Bee-Bot", "TTS"),
        Record::new("Bee Bot", "Terrapin"),
        Record::new("Dash", "Wonder Workshop"),
    ];
    let paths: Vec<_> = records
        .iter()
        .map(|record| writer.write(record).expect("write report").path)
        .collect();

    assert_eq!(
        paths,
        vec![
            out.join("bee-bot.pdf"),
            out.join("bee-bot-2.pdf"),
            out.join("dash.pdf")
        ]
    );
    for path in &paths {
        assert!(is_pdf(path), "{}", path.display());
    }
    assert_eq!(std::fs::read_dir(&out).expect("list output").count(), 3);
}

#[test]
fn record_without_image_reports_missing() {
    let temp = TempDir::new().expect("temp dir");
    let renderer = offline_renderer();
    let mut writer = ReportWriter::create(&renderer, temp.path()).expect("create writer");
    let written = writer.write(&Record::new("Cubetto", "Primo Toys")).expect("write report");
    assert_eq!(written.image, ImageOutcome::Missing);
    assert!(is_pdf(&written.path));
}

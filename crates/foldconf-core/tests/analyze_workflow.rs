use foldconf::core::models::residue::ConfidenceBand;
use foldconf::engine::progress::ProgressReporter;
use foldconf::plot::DisabledChart;
use foldconf::workflows::analyze::{self, AnalyzeConfigBuilder, WorkflowError};
use std::fs;
use std::path::Path;

const HEADER: &str = "data_P78358
#
_entry.id P78358
#
loop_
_atom_site.group_PDB
_atom_site.id
_atom_site.type_symbol
_atom_site.label_atom_id
_atom_site.label_alt_id
_atom_site.label_comp_id
_atom_site.label_asym_id
_atom_site.label_entity_id
_atom_site.label_seq_id
_atom_site.pdbx_PDB_ins_code
_atom_site.Cartn_x
_atom_site.Cartn_y
_atom_site.Cartn_z
_atom_site.occupancy
_atom_site.B_iso_or_equiv
_atom_site.auth_seq_id
_atom_site.auth_asym_id
_atom_site.pdbx_PDB_model_num
";

fn fixture_score(index: isize) -> f64 {
    match index {
        1..=80 => 60.0,
        81..=168 => 95.0,
        _ => 75.0,
    }
}

fn write_fixture(dir: &Path, summary: &str) -> (std::path::PathBuf, std::path::PathBuf) {
    let mut cif = HEADER.to_string();
    let mut serial = 1;
    for i in 1..=180isize {
        for (atom, element) in [("N", "N"), ("CA", "C"), ("C", "C"), ("O", "O")] {
            cif.push_str(&format!(
                "ATOM {} {} {} . SER A 1 {} ? 10.000 -4.250 7.125 1.00 {:.2} {} A 1\n",
                serial,
                element,
                atom,
                i,
                fixture_score(i),
                i
            ));
            serial += 1;
        }
    }
    cif.push_str("#\n");

    let cif_path = dir.join("P78358.cif");
    let summary_path = dir.join("P78358_summary_confidences.json");
    fs::write(&cif_path, cif).unwrap();
    fs::write(&summary_path, summary).unwrap();
    (cif_path, summary_path)
}

#[test]
fn full_pipeline_produces_expected_statistics_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let (cif_path, summary_path) = write_fixture(
        dir.path(),
        r#"{"ptm": 0.45, "ranking_score": 0.58, "fraction_disordered": 0.44, "has_clash": false, "num_recycles": 10.0}"#,
    );
    let report_path = dir.path().join("model_info.txt");

    let config = AnalyzeConfigBuilder::new()
        .cif_path(cif_path)
        .summary_path(summary_path)
        .report_path(report_path.clone())
        .plot_path(Some(dir.path().join("ny_eso1_confidence_plot.png")))
        .build()
        .unwrap();

    let outcome = analyze::run(&config, &DisabledChart, &ProgressReporter::new()).unwrap();
    let analysis = &outcome.analysis;

    assert_eq!(analysis.residue_count(), 180);
    assert_eq!(analysis.band(ConfidenceBand::High).count, 88);
    assert_eq!(analysis.band(ConfidenceBand::Medium).count, 12);
    assert_eq!(analysis.band(ConfidenceBand::Low).count, 80);
    assert_eq!(
        analysis.band(ConfidenceBand::Low).ranges.labels(),
        vec!["1-80".to_string()]
    );

    let layout = &analysis.layout;
    let n_term = analysis.region_mean(layout.n_terminal()).unwrap();
    assert!((n_term - (80.0 * 60.0 + 95.0) / 81.0).abs() < 1e-9);
    assert!((analysis.region_mean(layout.core_domain()).unwrap() - 95.0).abs() < 1e-9);
    assert!((analysis.region_mean(layout.c_terminal()).unwrap() - 75.0).abs() < 1e-9);

    let epitope = analysis.epitope.as_ref().unwrap();
    assert_eq!(epitope.count, 9);
    assert!((epitope.mean - 95.0).abs() < 1e-9);

    assert_eq!(outcome.plot_path, None);
    assert!(!dir.path().join("ny_eso1_confidence_plot.png").exists());

    let report = fs::read_to_string(&report_path).unwrap();
    assert!(report.is_ascii());
    assert!(report.contains("NY-ESO-1"));
    assert!(report.contains("1-80"));
    assert!(report.contains("157-165"));
}

#[test]
fn malformed_summary_aborts_without_report() {
    let dir = tempfile::tempdir().unwrap();
    let (cif_path, summary_path) = write_fixture(dir.path(), "{ not json");
    let report_path = dir.path().join("model_info.txt");

    let config = AnalyzeConfigBuilder::new()
        .cif_path(cif_path)
        .summary_path(summary_path)
        .report_path(report_path.clone())
        .build()
        .unwrap();

    let result = analyze::run(&config, &DisabledChart, &ProgressReporter::new());
    assert!(matches!(result, Err(WorkflowError::Summary { .. })));
    assert!(!report_path.exists());
}

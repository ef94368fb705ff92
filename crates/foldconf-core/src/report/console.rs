use super::thresholds;
use crate::core::models::residue::ConfidenceBand;
use crate::engine::analysis::Analysis;

const RULE_WIDTH: usize = 70;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Console recap of the key statistics. Informational only, not a stable format.
pub fn summary_lines(a: &Analysis) -> Vec<String> {
    let mut lines = vec![
        rule(),
        "ANALYSIS COMPLETE".to_string(),
        rule(),
        String::new(),
        format!("Total residues: {}", a.residue_count()),
        String::new(),
        "Quality Metrics:".to_string(),
        format!("  pTM score:           {:.3}", a.ptm),
        format!("  Ranking score:       {:.3}", a.ranking_score),
    ];
    if let Some(fd) = a.metrics.fraction_disordered {
        lines.push(format!(
            "  Fraction disordered: {:.2} ({:.0}%)",
            fd,
            fd * 100.0
        ));
    }
    lines.push(format!("  Mean pLDDT:          {:.2}", a.overall.mean));

    lines.push(String::new());
    lines.push("Confidence distribution:".to_string());
    for (band, label) in ConfidenceBand::ALL
        .into_iter()
        .zip(["High (>90):    ", "Medium (70-90):", "Low (<70):     "])
    {
        let b = a.band(band);
        lines.push(format!(
            "  {} {:3} residues ({:.1}%)",
            label, b.count, b.percentage
        ));
    }

    if let Some(e) = &a.epitope {
        lines.push(String::new());
        lines.push(format!("Epitope region ({}):", e.region.bounds()));
        lines.push(format!("  Mean pLDDT: {:.2}", e.mean));
        lines.push(format!("  Quality: {}", thresholds::epitope_quality(e.mean)));
    }

    lines.push(String::new());
    lines.push(rule());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::metrics::GlobalMetrics;
    use crate::core::models::region::RegionLayout;
    use crate::core::models::residue::ResidueRecord;

    #[test]
    fn summary_lines_mirror_key_statistics() {
        let residues = (1..=180)
            .map(|i| ResidueRecord::new(i, "GLY", if i <= 100 { 60.0 } else { 95.0 }))
            .collect();
        let metrics = GlobalMetrics {
            ptm: Some(0.5),
            ranking_score: Some(0.7),
            fraction_disordered: Some(0.25),
            ..Default::default()
        };
        let analysis = Analysis::compute(residues, metrics, &RegionLayout::default()).unwrap();
        let lines = summary_lines(&analysis);

        assert!(lines.contains(&"Total residues: 180".to_string()));
        assert!(lines.contains(&"  Fraction disordered: 0.25 (25%)".to_string()));
        assert!(lines.contains(&"  High (>90):      80 residues (44.4%)".to_string()));
        assert!(lines.contains(&"  Low (<70):      100 residues (55.6%)".to_string()));
        assert!(lines.contains(&"  Quality: High \u{2713}".to_string()));
        assert_eq!(lines.first(), lines.last());
    }
}

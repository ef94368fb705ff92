use super::thresholds::{self, EPITOPE_FLOOR, EPITOPE_HIGH, MAX_LISTED_RANGES};
use super::{ReportContext, file_name};
use crate::core::models::residue::ConfidenceBand;
use crate::engine::analysis::{Analysis, BandBreakdown};
use std::fmt::{self, Write};

const ARROW: &str = "\u{2192}";
const CHECK: &str = "\u{2713}";
const CROSS: &str = "\u{2717}";
const PLUS_MINUS: &str = "\u{00B1}";

/// Renders the full report. Decorative glyphs are left as Unicode; see [`super::ascii::to_ascii`].
pub fn render_report(analysis: &Analysis, ctx: &ReportContext) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_document(&mut out, analysis, ctx);
    out
}

fn write_document(out: &mut String, a: &Analysis, ctx: &ReportContext) -> fmt::Result {
    write_model_information(out, a, ctx)?;
    write_quality_metrics(out, a, ctx)?;
    write_per_residue(out, a)?;
    write_distribution(out, a)?;
    write_regions(out, a)?;
    write_epitope(out, a)?;
    write_rationale(out, ctx)?;
    write_validation(out, a, ctx)?;
    write_closing(out, a, ctx)
}

fn write_model_information(out: &mut String, a: &Analysis, ctx: &ReportContext) -> fmt::Result {
    let p = ctx.profile;
    let title = format!("{} Model Information", p.method);
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(title.len()))?;
    writeln!(out)?;
    writeln!(out, "Structure: {} full-length protein", p.display_name())?;
    writeln!(out, "UniProt ID: {}", p.uniprot)?;
    writeln!(out, "Sequence Length: {} amino acids", a.residue_count())?;
    writeln!(out, "Prediction Method: {}", p.method)?;
    writeln!(out, "Prediction Date: {}", p.prediction_date)?;
    writeln!(out, "Model Files: {}", ctx.model_name())?;
    writeln!(out)
}

fn write_quality_metrics(out: &mut String, a: &Analysis, ctx: &ReportContext) -> fmt::Result {
    let p = ctx.profile;
    writeln!(out, "## {} Quality Metrics", p.method)?;
    writeln!(out)?;
    writeln!(out, "pTM (predicted TM-score): {:.3}", a.ptm)?;
    writeln!(out, "  {} Overall structure confidence (0-1 scale)", ARROW)?;
    writeln!(
        out,
        "  {} Score of {:.3} indicates {} quality",
        ARROW,
        a.ptm,
        thresholds::ptm_quality(a.ptm)
    )?;
    writeln!(out)?;

    if let Some(iptm) = a.metrics.iptm {
        writeln!(out, "ipTM (interface pTM): {:.3}", iptm)?;
        writeln!(out)?;
    }

    writeln!(out, "Ranking Score: {:.3}", a.ranking_score)?;
    writeln!(out, "  {} {}'s combined quality metric", ARROW, p.method)?;
    writeln!(out)?;

    match a.metrics.fraction_disordered {
        Some(fd) => {
            writeln!(out, "Fraction Disordered: {:.2} ({:.0}%)", fd, fd * 100.0)?;
            writeln!(
                out,
                "  {} Expected for {} ({} region)",
                ARROW,
                p.name,
                a.layout.n_terminal().name
            )?;
        }
        None => writeln!(out, "Fraction Disordered: not reported")?,
    }
    writeln!(out)?;

    match a.metrics.has_clash() {
        Some(false) => writeln!(out, "Has Clashes: No {}", CHECK)?,
        Some(true) => writeln!(out, "Has Clashes: Yes {}", CROSS)?,
        None => writeln!(out, "Has Clashes: not reported")?,
    }
    match a.metrics.recycle_count() {
        Some(n) => writeln!(out, "Number of Recycles: {}", n)?,
        None => writeln!(out, "Number of Recycles: not reported")?,
    }
    writeln!(out)
}

fn write_per_residue(out: &mut String, a: &Analysis) -> fmt::Result {
    let s = &a.overall;
    writeln!(out, "## Per-Residue Confidence (pLDDT)")?;
    writeln!(out)?;
    writeln!(out, "Mean pLDDT: {:.2}", s.mean)?;
    writeln!(out, "Median pLDDT: {:.2}", s.median)?;
    writeln!(out, "Standard Deviation: {:.2}", s.std_dev)?;
    writeln!(out, "Range: {:.1} - {:.1}", s.min, s.max)?;
    writeln!(out)
}

fn write_distribution(out: &mut String, a: &Analysis) -> fmt::Result {
    writeln!(out, "## Confidence Distribution")?;
    for band in ConfidenceBand::ALL {
        writeln!(out)?;
        write_band(out, a.band(band))?;
    }
    writeln!(out)
}

fn write_band(out: &mut String, b: &BandBreakdown) -> fmt::Result {
    writeln!(
        out,
        "{} Confidence ({}): {} residues ({:.1}%)",
        b.band,
        b.band.criterion(),
        b.count,
        b.percentage
    )?;
    if b.ranges.is_empty() {
        return writeln!(out, "  Residue ranges: None");
    }
    let limit = match b.band {
        ConfidenceBand::Low => usize::MAX,
        ConfidenceBand::High | ConfidenceBand::Medium => MAX_LISTED_RANGES,
    };
    let (shown, hidden) = b.ranges.render_truncated(limit);
    writeln!(out, "  Residue ranges: {}", shown)?;
    if hidden > 0 {
        writeln!(out, "  ... and {} more ranges", hidden)?;
    }
    Ok(())
}

fn write_regions(out: &mut String, a: &Analysis) -> fmt::Result {
    writeln!(out, "## Regional Analysis")?;
    for stats in &a.regions {
        let s = &stats.summary;
        writeln!(out)?;
        writeln!(out, "{}:", stats.region)?;
        writeln!(out, "  Mean pLDDT: {:.2} {} {:.2}", s.mean, PLUS_MINUS, s.std_dev)?;
        writeln!(out, "  Range: {:.1} - {:.1}", s.min, s.max)?;
        writeln!(out, "  Residues analyzed: {}", s.count)?;
    }
    Ok(())
}

fn write_epitope(out: &mut String, a: &Analysis) -> fmt::Result {
    let Some(e) = &a.epitope else {
        return Ok(());
    };
    writeln!(out)?;
    writeln!(out)?;
    writeln!(
        out,
        "## Known Immunogenic Epitope ({}: {})",
        e.region.bounds(),
        e.region.name
    )?;
    writeln!(out)?;
    writeln!(out, "Sequence in model: {}", e.sequence)?;
    writeln!(out, "Mean pLDDT: {:.2}", e.mean)?;
    writeln!(out, "Minimum pLDDT: {:.1}", e.min)?;
    writeln!(
        out,
        "All residues >{:.0}: {}",
        EPITOPE_FLOOR,
        if e.all_above(EPITOPE_FLOOR) {
            format!("Yes {}", CHECK)
        } else {
            format!("No {}", CROSS)
        }
    )?;
    writeln!(
        out,
        "Quality Assessment: {}",
        thresholds::epitope_assessment(e.mean)
    )
}

fn write_rationale(out: &mut String, ctx: &ReportContext) -> fmt::Result {
    let p = ctx.profile;
    writeln!(out)?;
    writeln!(out, "## Rationale for Modeling")?;
    writeln!(out)?;
    writeln!(
        out,
        "No experimental structure of full-length {} ({} aa) exists in PDB.",
        p.name,
        p.chain_length()
    )?;
    if !p.reference_structures.is_empty() {
        writeln!(out, "Available experimental data limited to:")?;
        for reference in &p.reference_structures {
            writeln!(out, "- PDB {}: {}", reference.pdb_id, reference.note)?;
        }
    }
    writeln!(out)?;
    writeln!(out, "This model provides:")?;
    writeln!(out, "1. Full-length structural context for {}", p.name)?;
    writeln!(out, "2. Visualization of protein domains and epitope regions")?;
    writeln!(out, "3. Structural basis for understanding immunogenicity")?;
    writeln!(out, "4. Context for peptide presentation on MHC molecules")?;
    writeln!(out)
}

fn write_validation(out: &mut String, a: &Analysis, ctx: &ReportContext) -> fmt::Result {
    writeln!(out, "## Validation")?;
    writeln!(out)?;
    writeln!(out, "### 1. {} Quality Assessment", ctx.profile.method)?;
    writeln!(
        out,
        "- pTM score: {:.3} ({} quality)",
        a.ptm,
        match thresholds::ptm_quality(a.ptm) {
            "low" => "lower",
            label => label,
        }
    )?;
    writeln!(
        out,
        "- Mean pLDDT: {:.2} ({} overall confidence)",
        a.overall.mean,
        thresholds::mean_confidence(a.overall.mean)
    )?;
    if let Some(fd) = a.metrics.fraction_disordered {
        writeln!(
            out,
            "- Model shows expected disorder: {:.0}% disordered",
            fd * 100.0
        )?;
        writeln!(
            out,
            "  (consistent with {} region)",
            a.layout.n_terminal().name
        )?;
    }
    match a.metrics.has_clash() {
        Some(true) => writeln!(out, "- Structural clashes reported {}", CROSS)?,
        Some(false) => writeln!(out, "- No structural clashes detected {}", CHECK)?,
        None => writeln!(out, "- Clash check not reported")?,
    }
    writeln!(out)?;

    // Absent regions read as 0.0 here so the gradient lines always render.
    let layout = &a.layout;
    let n_term = a.region_mean(layout.n_terminal()).unwrap_or(0.0);
    let core = a.region_mean(layout.core_domain()).unwrap_or(0.0);
    let c_term = a.region_mean(layout.c_terminal()).unwrap_or(0.0);

    writeln!(out, "### 2. Regional Confidence Analysis")?;
    writeln!(
        out,
        "- N-terminal region ({}): Mean pLDDT {:.1}",
        layout.n_terminal().bounds(),
        n_term
    )?;
    writeln!(
        out,
        "  {} {}",
        ARROW,
        if n_term < thresholds::DISORDERED_REGION_MAX {
            format!(
                "Low-moderate confidence expected for disordered region {}",
                CHECK
            )
        } else {
            "Higher than expected confidence".to_string()
        }
    )?;
    writeln!(
        out,
        "- {} ({}): Mean pLDDT {:.1}",
        layout.core_domain().name,
        layout.core_domain().bounds(),
        core
    )?;
    writeln!(
        out,
        "  {} {}",
        ARROW,
        if core > n_term {
            format!(
                "Higher confidence as expected for structured domain {}",
                CHECK
            )
        } else {
            "Lower than expected".to_string()
        }
    )?;
    writeln!(
        out,
        "- C-terminal region ({}): Mean pLDDT {:.1}",
        layout.c_terminal().bounds(),
        c_term
    )?;
    if core > n_term {
        writeln!(
            out,
            "- Confidence gradient consistent with known biochemical properties {}",
            CHECK
        )?;
    } else {
        writeln!(
            out,
            "- Confidence gradient differs from known biochemical properties {}",
            CROSS
        )?;
    }
    writeln!(out)?;

    writeln!(out, "### 3. Epitope Region Quality")?;
    if let Some(e) = &a.epitope {
        writeln!(
            out,
            "- Immunogenic epitope ({}): Mean pLDDT {:.2}",
            e.region.bounds(),
            e.mean
        )?;
        if e.mean > EPITOPE_HIGH {
            writeln!(
                out,
                "- High confidence supports reliable structural analysis {}",
                CHECK
            )?;
        } else {
            writeln!(
                out,
                "- Moderate confidence - compare with experimental data"
            )?;
        }
        writeln!(out, "- Can be directly compared with experimental structures")?;
        writeln!(
            out,
            "- Suitable for visualization of epitope presentation context"
        )?;
    } else {
        writeln!(out, "- Epitope residues not present in the model")?;
    }
    writeln!(out)
}

fn write_closing(out: &mut String, a: &Analysis, ctx: &ReportContext) -> fmt::Result {
    let p = ctx.profile;
    let layout = &a.layout;
    let epitope = layout.epitope();
    let epitope_high = a.epitope.as_ref().is_some_and(|e| e.mean > EPITOPE_HIGH);
    let disorder_pct = a.metrics.fraction_disordered.map(|fd| fd * 100.0);

    writeln!(out, "### 4. Structural Features")?;
    writeln!(out, "- Model reflects known characteristics:")?;
    writeln!(
        out,
        "  * {} region: flexible, lower confidence",
        layout.n_terminal().name
    )?;
    writeln!(
        out,
        "  * {}: more structured, higher confidence",
        layout.core_domain().name
    )?;
    writeln!(
        out,
        "  * Small protein size ({} aa) - no large globular domains expected",
        p.chain_length()
    )?;
    writeln!(out, "- Disorder prediction consistent with literature")?;
    writeln!(out, "- No unexpected structural features")?;
    writeln!(out)?;

    writeln!(out, "### 5. Comparison Potential")?;
    match p.reference_structures.first() {
        Some(reference) => writeln!(
            out,
            "- Epitope region ({}) can be aligned with PDB {}",
            epitope.bounds(),
            reference.pdb_id
        )?,
        None => writeln!(
            out,
            "- Epitope region ({}) can be aligned with experimental structures",
            epitope.bounds()
        )?,
    }
    writeln!(out, "- Backbone conformation suitable for comparison")?;
    writeln!(
        out,
        "- High enough confidence for comparative structural analysis"
    )?;
    writeln!(out)?;

    writeln!(out, "## Limitations")?;
    writeln!(out)?;
    writeln!(
        out,
        "- N-terminal region has lower confidence due to intrinsic disorder"
    )?;
    if let Some(pct) = disorder_pct {
        writeln!(out, "  ({:.0}% of protein predicted as disordered)", pct)?;
    }
    writeln!(
        out,
        "- pTM score of {:.2} indicates {} global structure quality",
        a.ptm,
        if a.ptm > thresholds::PTM_HIGH {
            "good"
        } else {
            "moderate"
        }
    )?;
    writeln!(
        out,
        "- Conformations in flexible regions represent one possible state"
    )?;
    writeln!(
        out,
        "- No experimental validation for full-length structure exists"
    )?;
    writeln!(
        out,
        "- Fine structural details in low-confidence regions may not be accurate"
    )?;
    writeln!(out)?;

    writeln!(out, "## Suitable Applications")?;
    writeln!(out)?;
    for item in [
        "Epitope mapping and visualization",
        "Understanding structural context of immunogenic regions",
        "Designing vaccine constructs",
        "Comparative analysis with peptide-MHC structures",
        "Context for reviewing pMHC-TCR interactions",
        "Illustrating protein domains in review papers",
    ] {
        writeln!(out, "{} {}", CHECK, item)?;
    }
    writeln!(out)?;
    for item in [
        "Not suitable for detailed drug design targeting full-length protein",
        "N-terminal region conformations should not be over-interpreted",
        "Quantitative binding predictions not recommended",
    ] {
        writeln!(out, "{} {}", CROSS, item)?;
    }
    writeln!(out)?;

    writeln!(out, "## Files Included")?;
    writeln!(out)?;
    writeln!(
        out,
        "- {} (3D structure with pLDDT in B-factor)",
        file_name(ctx.model_path)
    )?;
    writeln!(
        out,
        "- {} ({} quality metrics)",
        file_name(ctx.summary_path),
        p.method
    )?;
    writeln!(
        out,
        "- {} (this analysis report)",
        file_name(ctx.report_path)
    )?;
    if let Some(plot) = ctx.plot_path {
        writeln!(
            out,
            "- {} (optional: confidence visualization)",
            file_name(plot)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## Conclusion")?;
    writeln!(out)?;
    writeln!(
        out,
        "Model provides valuable structural context for {} in the context of",
        p.name
    )?;
    writeln!(
        out,
        "pMHC-TCR review. Despite moderate overall quality (pTM: {:.2}, mean pLDDT:",
        a.ptm
    )?;
    writeln!(
        out,
        "{:.2}), the {} confidence in the immunogenic epitope region ({})",
        a.overall.mean,
        if epitope_high { "high" } else { "moderate" },
        epitope.bounds()
    )?;
    writeln!(
        out,
        "makes this suitable for comparative visualization and structural discussion."
    )?;
    if let Some(pct) = disorder_pct {
        writeln!(
            out,
            "The high fraction of disorder ({:.0}%) is expected and consistent",
            pct
        )?;
        writeln!(
            out,
            "with the known flexible nature of the {} region of {}.",
            layout.n_terminal().name,
            p.name
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Appropriate for inclusion in review papers with clear documentation of"
    )?;
    writeln!(
        out,
        "confidence levels and comparison with experimental peptide-MHC structures."
    )
}

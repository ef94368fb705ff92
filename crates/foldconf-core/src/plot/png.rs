use super::{ChartError, ChartRenderer, HISTOGRAM_BINS, histogram_counts};
use crate::core::models::region::Region;
use crate::core::models::residue::{HIGH_CONFIDENCE_THRESHOLD, MEDIUM_CONFIDENCE_THRESHOLD};
use crate::engine::analysis::Analysis;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;
use tracing::info;

const TRACE_COLOR: RGBColor = RGBColor(70, 130, 180);
const HIGH_LINE_COLOR: RGBColor = RGBColor(0, 128, 0);
const MEDIUM_LINE_COLOR: RGBColor = RGBColor(255, 165, 0);
const REGION_COLORS: [RGBColor; 3] = [
    RGBColor(128, 128, 128),
    RGBColor(0, 0, 255),
    RGBColor(144, 238, 144),
];
const EPITOPE_COLOR: RGBColor = RGBColor(255, 0, 0);
const DASH_LENGTH: u32 = 8;
const DASH_GAP: u32 = 5;

/// Two stacked panels: per-residue trace over shaded regions, and the score histogram.
///
/// Nothing textual is drawn, so no font backend is required.
#[derive(Debug, Clone, Copy)]
pub struct PngChart {
    pub width: u32,
    pub height: u32,
}

impl Default for PngChart {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 800,
        }
    }
}

impl ChartRenderer for PngChart {
    fn render(&self, analysis: &Analysis, path: &Path) -> Result<(), ChartError> {
        self.draw(analysis, path).map_err(|e| ChartError::Render {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        info!("Confidence plot written to {}", path.display());
        Ok(())
    }
}

impl PngChart {
    fn draw(&self, analysis: &Analysis, path: &Path) -> Result<(), Box<dyn Error>> {
        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;
        let panels = root.split_evenly((2, 1));

        draw_profile(&panels[0], analysis)?;
        draw_histogram(&panels[1], analysis)?;

        root.present()?;
        Ok(())
    }
}

fn draw_profile<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    analysis: &Analysis,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let first = analysis.residues.first().map_or(0, |r| r.index) as f64;
    let last = analysis.residues.last().map_or(1, |r| r.index) as f64;
    let x_max = if last > first { last } else { first + 1.0 };

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .build_cartesian_2d(first..x_max, 0.0f64..100.0f64)?;

    for y in (20..100).step_by(20) {
        draw_hline(&mut chart, first, x_max, y as f64, BLACK.mix(0.1).into())?;
    }

    let layout = &analysis.layout;
    for (region, color) in layout.regions().iter().zip(REGION_COLORS) {
        shade(&mut chart, region, color.mix(0.1))?;
    }
    shade(&mut chart, layout.epitope(), EPITOPE_COLOR.mix(0.3))?;

    for (y, color) in [
        (HIGH_CONFIDENCE_THRESHOLD, HIGH_LINE_COLOR),
        (MEDIUM_CONFIDENCE_THRESHOLD, MEDIUM_LINE_COLOR),
    ] {
        draw_dashed(
            &mut chart,
            [(first, y), (x_max, y)],
            color.mix(0.5).stroke_width(1),
        )?;
    }

    chart.draw_series(LineSeries::new(
        analysis.residues.iter().map(|r| (r.index as f64, r.score)),
        TRACE_COLOR.stroke_width(2),
    ))?;
    Ok(())
}

fn draw_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    analysis: &Analysis,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let scores: Vec<f64> = analysis.residues.iter().map(|r| r.score).collect();
    let counts = histogram_counts(&scores, 0.0, 100.0, HISTOGRAM_BINS);
    let width = 100.0 / HISTOGRAM_BINS as f64;
    let y_max = counts
        .iter()
        .map(|(_, count)| *count as f64)
        .fold(0.0f64, f64::max)
        .max(1.0)
        * 1.1;

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .build_cartesian_2d(0.0f64..100.0f64, 0.0f64..y_max)?;

    for (bin_start, count) in counts {
        if count == 0 {
            continue;
        }
        chart.draw_series(std::iter::once(Rectangle::new(
            [(bin_start, 0.0), (bin_start + width, count as f64)],
            TRACE_COLOR.mix(0.7).filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(bin_start, 0.0), (bin_start + width, count as f64)],
            BLACK.stroke_width(1),
        )))?;
    }

    for (x, color) in [
        (HIGH_CONFIDENCE_THRESHOLD, HIGH_LINE_COLOR),
        (MEDIUM_CONFIDENCE_THRESHOLD, MEDIUM_LINE_COLOR),
    ] {
        draw_dashed(
            &mut chart,
            [(x, 0.0), (x, y_max)],
            color.mix(0.7).stroke_width(2),
        )?;
    }
    Ok(())
}

type Chart2d<'a, DB> = ChartContext<
    'a,
    DB,
    Cartesian2d<plotters::coord::types::RangedCoordf64, plotters::coord::types::RangedCoordf64>,
>;

fn shade<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    region: &Region,
    color: RGBAColor,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    chart.draw_series(std::iter::once(Rectangle::new(
        [(region.start as f64, 0.0), (region.end as f64, 100.0)],
        color.filled(),
    )))?;
    Ok(())
}

fn draw_hline<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    x0: f64,
    x1: f64,
    y: f64,
    style: ShapeStyle,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    chart.draw_series(std::iter::once(PathElement::new(vec![(x0, y), (x1, y)], style)))?;
    Ok(())
}

/// Threshold marker; grid lines stay solid via [`draw_hline`].
fn draw_dashed<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    segment: [(f64, f64); 2],
    style: ShapeStyle,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    chart.draw_series(DashedLineSeries::new(segment, DASH_LENGTH, DASH_GAP, style))?;
    Ok(())
}

use std::path::Path;

use plotters::{
    coord::Shift,
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};
use tracing::warn;

use crate::{analytics::Summary, error::Error, invariants::ClientAddress};

pub const REPORT_FILE: &str = "access_report.svg";

const CANVAS: (u32, u32) = (1400, 600);
const FOOTER_HEIGHT: u32 = 80;
const FONT: &str = "sans-serif";

const NOT_FOUND_RED: RGBColor = RGBColor(203, 24, 29);
const ANNOTATION_BLUE: RGBColor = RGBColor(31, 119, 180);
// viridis, dark to light
const VIRIDIS: [RGBColor; 10] = [
    RGBColor(68, 1, 84),
    RGBColor(72, 40, 120),
    RGBColor(62, 73, 137),
    RGBColor(49, 104, 142),
    RGBColor(38, 130, 142),
    RGBColor(31, 158, 137),
    RGBColor(53, 183, 121),
    RGBColor(110, 206, 88),
    RGBColor(181, 222, 43),
    RGBColor(253, 231, 37),
];

type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Footer text: the 404 total, then the busiest client.
pub fn annotations(summary: &Summary) -> [String; 2] {
    let requests = match summary.top_address() {
        Some((ip, count)) => format!("Number of requests from {ip} = {count}"),
        None => "No client requests recorded".to_string(),
    };
    [format!("Total 404 errors: {}", summary.not_found), requests]
}

/// Writes the two-panel chart as SVG to `path`.
pub fn render(summary: &Summary, path: &Path) -> Result<(), Error> {
    if summary.top_addresses.is_empty() {
        warn!("no client addresses to rank, address panel left empty");
    }
    draw(summary, path).map_err(|e| Error::Render {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn draw(summary: &Summary, path: &Path) -> Result<(), DrawingAreaErrorKind<std::io::Error>> {
    let root = SVGBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;

    let (panels, footer) = root.split_vertically((CANVAS.1 - FOOTER_HEIGHT) as i32);
    let (left, right) = panels.split_horizontally((CANVAS.0 / 2) as i32);

    draw_not_found(&left, summary.not_found)?;
    draw_top_addresses(&right, &summary.top_addresses)?;
    draw_annotations(&footer, &annotations(summary))?;

    root.present()
}

fn draw_not_found<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    total: usize,
) -> DrawResult<DB> {
    // three segments, the bar takes the middle one
    let mut chart = ChartBuilder::on(area)
        .caption("Total Number of 404 Errors", (FONT, 22).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0usize..2).into_segmented(), 0usize..headroom(total))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(3)
        .x_label_formatter(&|v: &SegmentValue<usize>| match v {
            SegmentValue::CenterOf(1) => "Total 404 Errors".to_string(),
            _ => String::new(),
        })
        .y_desc("Count")
        .draw()?;

    chart.draw_series(std::iter::once(bar(
        [(SegmentValue::Exact(1), 0), (SegmentValue::Exact(2), total)],
        NOT_FOUND_RED,
        (0, 0, 24, 24),
    )))?;
    Ok(())
}

fn draw_top_addresses<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    ranking: &[(ClientAddress, usize)],
) -> DrawResult<DB> {
    let slots = ranking.len().max(1);
    let x_max = headroom(ranking.first().map_or(0, |(_, count)| *count));

    // Segment 0 is padding above the x axis; rank 0 lands in the topmost
    // segment.
    let mut chart = ChartBuilder::on(area)
        .caption("Top IPs by Number of Requests", (FONT, 22).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(130)
        .build_cartesian_2d(0usize..x_max, (0usize..slots).into_segmented())?;

    let label = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(pos) if (1..=ranking.len()).contains(pos) => {
            ranking[ranking.len() - pos].0.as_str().to_string()
        }
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(slots + 1)
        .y_label_formatter(&label)
        .x_desc("Number of Requests")
        .y_desc("IP Address")
        .draw()?;

    chart.draw_series(ranking.iter().enumerate().map(|(rank, (_, count))| {
        let pos = ranking.len() - rank;
        let upper = if pos >= slots {
            SegmentValue::Last
        } else {
            SegmentValue::Exact(pos + 1)
        };
        bar(
            [(0, SegmentValue::Exact(pos)), (*count, upper)],
            VIRIDIS[rank * VIRIDIS.len() / ranking.len()],
            (6, 6, 0, 0),
        )
    }))?;
    Ok(())
}

fn draw_annotations<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    [not_found, requests]: &[String; 2],
) -> DrawResult<DB> {
    let (width, height) = area.dim_in_pixel();
    let center = (width / 2) as i32;
    let height = height as i32;
    let lines = [
        (requests, ANNOTATION_BLUE, height / 3),
        (not_found, NOT_FOUND_RED, 2 * height / 3),
    ];
    for (text, color, y) in lines {
        let style = (FONT, 18)
            .into_font()
            .color(&color)
            .pos(Pos::new(HPos::Center, VPos::Center));
        area.draw_text(text, &style, (center, y))?;
    }
    Ok(())
}

fn bar<X, Y>(
    corners: [(X, Y); 2],
    color: RGBColor,
    (t, b, l, r): (u32, u32, u32, u32),
) -> Rectangle<(X, Y)> {
    let mut rect = Rectangle::new(corners, color.filled());
    rect.set_margin(t, b, l, r);
    rect
}

/// Axis upper bound leaving some room above the largest value.
fn headroom(max: usize) -> usize {
    max + max / 10 + 1
}

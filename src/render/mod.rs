//! SVG previews of timeline layouts and chart shapes, drawn with Plotters.
//!
//! The renderer only draws geometry that the layout engine or the chart plotter
//! already computed; it never decides positions itself. Color tokens are parsed here
//! and nowhere else.

pub mod text;
pub mod util;

use anyhow::{Context, Result, anyhow};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_svg::SVGBackend;
use std::f64::consts::{PI, TAU};
use std::path::Path;

use crate::chart::{ChartKind, PlottedShape};
use crate::theme::ThemeTokens;
use crate::timeline::group::flatten;
use crate::timeline::{ContentAlignment, Orientation, TimelineView};
use text::{aligned_x, wrap_lines};
use util::token_color;

const TITLE_FONT_PX: u32 = 14;
const DATE_FONT_PX: u32 = 12;
const HEADER_FONT_PX: u32 = 15;

#[inline]
fn px(v: f64) -> i32 {
    v.round() as i32
}

fn canvas_dim(v: f64) -> u32 {
    if v.is_finite() && v >= 1.0 {
        v.ceil() as u32
    } else {
        1
    }
}

/// Render a timeline view to an SVG document.
pub fn timeline_svg(view: &TimelineView, theme: &ThemeTokens) -> Result<String> {
    let w = canvas_dim(view.layout.width);
    let h = canvas_dim(view.layout.height);
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (w, h)).into_drawing_area();
        root.fill(&token_color(&theme.background))
            .map_err(|e| anyhow!("{:?}", e))?;
        draw_timeline(&root, view, theme)?;
        root.present().map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(buf)
}

fn hpos_for(alignment: ContentAlignment) -> HPos {
    match alignment {
        ContentAlignment::Left => HPos::Left,
        ContentAlignment::Right => HPos::Right,
        ContentAlignment::Center => HPos::Center,
    }
}

fn draw_timeline<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    view: &TimelineView,
    theme: &ThemeTokens,
) -> Result<()> {
    let layout = &view.layout;
    let track_color = token_color(&layout.track_color);
    let text_color = token_color(&theme.text);
    let muted_color = token_color(&theme.muted_text);

    if let Some(track) = layout.track {
        root.draw(&PathElement::new(
            vec![
                (px(track.start.x), px(track.start.y)),
                (px(track.end.x), px(track.end.y)),
            ],
            track_color.stroke_width(2),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }

    let header_anchor = match layout.orientation {
        Orientation::Vertical => Pos::new(HPos::Center, VPos::Top),
        Orientation::Horizontal => Pos::new(HPos::Left, VPos::Top),
    };
    let header_style = TextStyle::from((FontFamily::SansSerif, HEADER_FONT_PX))
        .color(&text_color)
        .pos(header_anchor);
    for header in &layout.groups {
        root.draw(&Text::new(
            header.label.clone(),
            (px(header.position.x), px(header.position.y)),
            header_style.clone(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }

    let max_lines = if view.settings.compact_mode { 1 } else { 2 };
    let events = flatten(&view.groups);
    for (event, placed) in events.iter().zip(layout.events.iter()) {
        if let Some(branch) = placed.connector {
            root.draw(&PathElement::new(
                vec![
                    (px(branch.start.x), px(branch.start.y)),
                    (px(branch.end.x), px(branch.end.y)),
                ],
                track_color.stroke_width(1),
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
        }

        let marker_color = token_color(&placed.marker_color);
        root.draw(&Circle::new(
            (px(placed.marker.x), px(placed.marker.y)),
            px(placed.marker_size / 2.0).max(1),
            marker_color.filled(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;

        let hpos = hpos_for(placed.alignment);
        let x = px(aligned_x(
            placed.content_origin.x,
            placed.content_width,
            placed.alignment,
        ));
        let mut y = px(placed.content_origin.y);

        if let Some(date) = &placed.date_label {
            let style = TextStyle::from((FontFamily::SansSerif, DATE_FONT_PX))
                .color(&muted_color)
                .pos(Pos::new(hpos, VPos::Top));
            root.draw(&Text::new(date.clone(), (x, y), style))
                .map_err(|e| anyhow!("{:?}", e))?;
            y += DATE_FONT_PX as i32 + 4;
        }

        let title = match &placed.icon {
            Some(icon) => format!("{icon} {}", event.title),
            None => event.title.clone(),
        };
        let title_style = TextStyle::from((FontFamily::SansSerif, TITLE_FONT_PX))
            .color(&text_color)
            .pos(Pos::new(hpos, VPos::Top));
        let max_px = placed.content_width.max(0.0) as u32;
        for line in wrap_lines(&title, TITLE_FONT_PX, max_px, max_lines) {
            root.draw(&Text::new(line, (x, y), title_style.clone()))
                .map_err(|e| anyhow!("{:?}", e))?;
            y += TITLE_FONT_PX as i32 + 2;
        }
    }

    if let Some(p) = &view.progress {
        let (_, h) = root.dim_in_pixel();
        let style = TextStyle::from((FontFamily::SansSerif, DATE_FONT_PX))
            .color(&muted_color)
            .pos(Pos::new(HPos::Left, VPos::Bottom));
        let label = format!("{}/{} completed ({:.0}%)", p.completed, p.total, p.percent);
        root.draw(&Text::new(label, (4, h as i32 - 4), style))
            .map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}

/// Render chart shapes to an SVG document.
pub fn chart_svg(
    kind: ChartKind,
    shapes: &[PlottedShape],
    width: u32,
    height: u32,
    theme: &ThemeTokens,
) -> Result<String> {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (width.max(1), height.max(1)))
            .into_drawing_area();
        root.fill(&token_color(&theme.background))
            .map_err(|e| anyhow!("{:?}", e))?;
        draw_shapes(&root, kind, shapes, theme)?;
        root.present().map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(buf)
}

/// Outline of a ring sector as a polygon; a zero inner radius closes through the center.
fn sector_polygon(
    cx: f64,
    cy: f64,
    inner: f64,
    outer: f64,
    start: f64,
    end: f64,
) -> Vec<(i32, i32)> {
    let mut sweep = end - start;
    if sweep < 0.0 {
        sweep += TAU;
    }
    let sweep = sweep.clamp(0.0, TAU);
    let steps = ((sweep / (PI / 90.0)).ceil() as usize).max(2);
    let arc = |r: f64, k: usize| {
        let a = start + sweep * k as f64 / steps as f64;
        (px(cx + r * a.cos()), px(cy + r * a.sin()))
    };
    let mut pts: Vec<(i32, i32)> = (0..=steps).map(|k| arc(outer, k)).collect();
    if inner <= 0.0 {
        pts.push((px(cx), px(cy)));
    } else {
        pts.extend((0..=steps).rev().map(|k| arc(inner, k)));
    }
    pts
}

fn draw_shapes<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    kind: ChartKind,
    shapes: &[PlottedShape],
    theme: &ThemeTokens,
) -> Result<()> {
    let series = token_color(theme.series_color(0));

    if kind == ChartKind::Line {
        let path: Vec<(i32, i32)> = shapes
            .iter()
            .filter_map(|s| match s {
                PlottedShape::Point { x, y, .. } => Some((px(*x), px(*y))),
                _ => None,
            })
            .collect();
        if path.len() > 1 {
            root.draw(&PathElement::new(path, series.stroke_width(2)))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
    }

    // Slices and bars are categories and cycle the palette; the rest share one series color.
    let per_shape_color = kind.is_radial() || kind == ChartKind::Bar;
    for (i, shape) in shapes.iter().enumerate() {
        let color = if per_shape_color {
            token_color(theme.series_color(i))
        } else {
            series
        };
        match shape {
            PlottedShape::Point { x, y, .. } => {
                let r = if kind == ChartKind::Line { 3 } else { 4 };
                root.draw(&Circle::new((px(*x), px(*y)), r, series.filled()))
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
            PlottedShape::Rect {
                x,
                y,
                width,
                height,
                ..
            } => {
                root.draw(&Rectangle::new(
                    [(px(*x), px(*y)), (px(x + width), px(y + height))],
                    color.filled(),
                ))
                .map_err(|e| anyhow!("{:?}", e))?;
            }
            PlottedShape::Circle { x, y, radius, .. } => {
                root.draw(&Circle::new(
                    (px(*x), px(*y)),
                    px(*radius).max(1),
                    color.mix(0.7).filled(),
                ))
                .map_err(|e| anyhow!("{:?}", e))?;
            }
            PlottedShape::Sector {
                center_x,
                center_y,
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
                ..
            } => {
                root.draw(&Polygon::new(
                    sector_polygon(
                        *center_x,
                        *center_y,
                        *inner_radius,
                        *outer_radius,
                        *start_angle,
                        *end_angle,
                    ),
                    color.filled(),
                ))
                .map_err(|e| anyhow!("{:?}", e))?;
            }
        }
    }
    Ok(())
}

/// Write an SVG document to disk.
pub fn save_svg<P: AsRef<Path>>(svg: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

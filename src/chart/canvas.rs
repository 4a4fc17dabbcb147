use anyhow::Result;

use super::index::{ChartPointIndex, HoverOutcome};
use super::plot::{ChartData, ChartKind, plot_shapes};
use crate::render;
use crate::theme::ThemeTokens;

/// One chart surface and the shapes of its latest render.
///
/// Each canvas owns its own index; a render overwrites the previous shapes so a
/// hover never sees geometry from an older pass.
#[derive(Debug, Clone)]
pub struct ChartCanvas {
    width: u32,
    height: u32,
    kind: Option<ChartKind>,
    index: ChartPointIndex,
}

impl ChartCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            kind: None,
            index: ChartPointIndex::new(width as f64, height as f64),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Recompute shapes for `data`, replacing whatever the last render registered.
    pub fn render(&mut self, data: &ChartData) -> &ChartPointIndex {
        let shapes = plot_shapes(data, self.width as f64, self.height as f64);
        self.index.replace(shapes);
        self.kind = Some(data.kind);
        &self.index
    }

    /// Render and draw to an SVG string.
    pub fn render_svg(&mut self, data: &ChartData, theme: &ThemeTokens) -> Result<String> {
        self.render(data);
        render::chart_svg(
            data.kind,
            self.index.shapes(),
            self.width,
            self.height,
            theme,
        )
    }

    /// Change the surface size. Shapes are stale until the next render and are dropped.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.index.resize(width as f64, height as f64);
        self.index.clear();
        self.kind = None;
    }

    pub fn kind(&self) -> Option<ChartKind> {
        self.kind
    }

    pub fn index(&self) -> &ChartPointIndex {
        &self.index
    }

    pub fn hover(&self, x: f64, y: f64) -> HoverOutcome {
        self.index.hover(x, y)
    }
}

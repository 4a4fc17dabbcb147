//! Per-canvas registry of plotted shapes and the hover lookup over it.

use serde::Serialize;

use super::shapes::{HoverMatch, PlottedShape};

/// Which hit rules apply for the current render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HitMode {
    /// Doughnut/pie: only sectors are tested.
    Sector,
    /// Bars, points and bubbles.
    Cartesian,
}

/// Result of a pointer lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum HoverOutcome {
    /// Pointer is outside the canvas bounds.
    Outside,
    /// Pointer is on the canvas but over no shape.
    Miss,
    Hit(HoverMatch),
}

/// Shapes drawn by one render of one canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPointIndex {
    width: f64,
    height: f64,
    shapes: Vec<PlottedShape>,
    /// Set once a sector is registered; switches the index to sector rules.
    sector_center: Option<(f64, f64)>,
}

impl ChartPointIndex {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
            sector_center: None,
        }
    }

    /// Index pre-filled with `shapes`.
    pub fn with_shapes(width: f64, height: f64, shapes: Vec<PlottedShape>) -> Self {
        let mut idx = Self::new(width, height);
        idx.replace(shapes);
        idx
    }

    pub fn register(&mut self, shape: PlottedShape) {
        if let PlottedShape::Sector {
            center_x, center_y, ..
        } = &shape
            && self.sector_center.is_none()
        {
            self.sector_center = Some((*center_x, *center_y));
        }
        self.shapes.push(shape);
    }

    /// Drop every shape from the previous render.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.sector_center = None;
    }

    /// Overwrite the shape list with a new render's shapes.
    pub fn replace(&mut self, shapes: Vec<PlottedShape>) {
        self.clear();
        for s in shapes {
            self.register(s);
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn shapes(&self) -> &[PlottedShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn sector_center(&self) -> Option<(f64, f64)> {
        self.sector_center
    }

    pub fn mode(&self) -> HitMode {
        if self.sector_center.is_some() {
            HitMode::Sector
        } else {
            HitMode::Cartesian
        }
    }

    /// Bounds are inclusive; NaN coordinates count as outside.
    pub fn contains_pointer(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height
    }

    /// Best shape under or near `(x, y)`: minimum hit distance, ties to the first registered.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&PlottedShape> {
        let want_sectors = self.mode() == HitMode::Sector;
        let mut best: Option<(f64, &PlottedShape)> = None;
        for shape in self.shapes.iter().filter(|s| s.is_sector() == want_sectors) {
            if let Some(d) = shape.hit_distance(x, y) {
                // Strict `<` keeps the earliest shape on ties.
                if best.is_none_or(|(bd, _)| d < bd) {
                    best = Some((d, shape));
                }
            }
        }
        best.map(|(_, s)| s)
    }

    /// Pointer lookup as a tooltip handler sees it.
    pub fn hover(&self, x: f64, y: f64) -> HoverOutcome {
        if !self.contains_pointer(x, y) {
            return HoverOutcome::Outside;
        }
        match self.hit_test(x, y) {
            Some(shape) => HoverOutcome::Hit(HoverMatch::from(shape)),
            None => HoverOutcome::Miss,
        }
    }
}

use egui::Pos2;
use serde::{Deserialize, Serialize};

/// A freehand line: points in drawing order plus the marker width it was started with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Pos2>,
    width: f32,
}

impl Stroke {
    pub fn new(points: Vec<Pos2>, width: f32) -> Self {
        Self { points, width }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// A stroke needs at least two points to be a line rather than a click
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 2
    }
}

// Stroke being drawn; each update is snapshotted into a fresh `Stroke`
#[derive(Debug, Clone, PartialEq)]
pub struct MutableStroke {
    points: Vec<Pos2>,
    width: f32,
}

impl MutableStroke {
    pub fn new(width: f32) -> Self {
        Self {
            points: Vec::new(),
            width,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn to_stroke(&self) -> Stroke {
        Stroke::new(self.points.clone(), self.width)
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

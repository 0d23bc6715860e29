//! Scene state behind the trajectory canvas

use capacitor_physics::{calc_charge_path, DomainError, PhysicalParameters, Trajectory};
use glam::Vec2;

use crate::scale::{RenderScale, CAPACITORS_SHIFT};

/// Paths kept on screen at one scale; the oldest is dropped beyond this.
pub const MAX_OVERLAID_PATHS: usize = 16;

pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];

pub const PLATE_STROKE: Stroke = Stroke {
    width: 2.0,
    color: [0, 0, 0],
};

pub const PATH_STROKE: Stroke = Stroke {
    width: 1.0,
    color: [100, 100, 100],
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: [u8; 3],
}

/// Drawing primitive in canvas pixel coordinates (origin top-left, y down).
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Line { from: Vec2, to: Vec2, stroke: Stroke },
    Polyline { points: Vec<Vec2>, stroke: Stroke },
}

/// Result of a successful run: the computed path and the values shown next
/// to the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOutcome {
    pub trajectory: Trajectory,
    /// Horizontal distance covered between the plates (m)
    pub final_x: f64,
    /// Time spent between the plates (s)
    pub elapsed_time: f64,
}

/// What the form side of the shell asks of the canvas.
pub trait TrajectoryView {
    /// Compute and draw the path for `params` at horizontal scale `scale`.
    fn trajectory_requested(
        &mut self,
        params: &PhysicalParameters,
        scale: f64,
    ) -> Result<RunOutcome, DomainError>;

    /// Rebuild the scene from the retained state.
    fn redraw(&mut self);
}

/// Canvas with the two capacitor plates and the paths drawn since the last
/// clear.
///
/// Paths computed at the same horizontal scale are overlaid; a run with a
/// different scale starts from an empty capacitor.
pub struct TrajectoryCanvas {
    width: f32,
    height: f32,
    paths: Vec<(Trajectory, RenderScale)>,
    last_scale: Option<f64>,
    shapes: Vec<Shape>,
}

impl TrajectoryCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        let mut canvas = Self {
            width,
            height,
            paths: Vec::new(),
            last_scale: None,
            shapes: Vec::new(),
        };
        canvas.redraw();
        canvas
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if width == self.width && height == self.height {
            return;
        }

        self.width = width;
        self.height = height;
        self.redraw();
    }

    /// Drop every drawn path and leave only the plates.
    pub fn reset(&mut self) {
        self.paths.clear();
        self.last_scale = None;
        self.redraw();
        log::debug!("canvas reset");
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    fn draw_plates(&mut self) {
        let mid = self.height / 2.0;
        for y in [mid - CAPACITORS_SHIFT, mid + CAPACITORS_SHIFT] {
            self.shapes.push(Shape::Line {
                from: Vec2::new(0.0, y),
                to: Vec2::new(self.width, y),
                stroke: PLATE_STROKE,
            });
        }
    }

    fn draw_path(&mut self, trajectory: &Trajectory, scale: &RenderScale) {
        let points = trajectory
            .samples()
            .iter()
            .map(|&sample| scale.to_pixels(sample, self.height))
            .collect();

        self.shapes.push(Shape::Polyline {
            points,
            stroke: PATH_STROKE,
        });
    }
}

impl TrajectoryView for TrajectoryCanvas {
    fn trajectory_requested(
        &mut self,
        params: &PhysicalParameters,
        scale: f64,
    ) -> Result<RunOutcome, DomainError> {
        if !scale.is_finite() {
            return Err(DomainError::NonFinite { quantity: "scale" });
        }

        let trajectory = calc_charge_path(params)?;
        let render_scale = RenderScale::for_trajectory(scale, &trajectory)?;

        if self.last_scale != Some(scale) {
            self.paths.clear();
            self.redraw();
        }
        self.last_scale = Some(scale);

        let repeated = self
            .paths
            .last()
            .is_some_and(|(last, _)| *last == trajectory);
        if !repeated {
            if self.paths.len() == MAX_OVERLAID_PATHS {
                self.paths.remove(0);
                self.redraw();
            }
            self.draw_path(&trajectory, &render_scale);
            self.paths.push((trajectory.clone(), render_scale));
        }

        let outcome = RunOutcome {
            final_x: trajectory.final_x(),
            elapsed_time: trajectory.elapsed_time(),
            trajectory,
        };

        log::debug!(
            "drew path {} at scale {scale}: x = {}, t = {}",
            self.paths.len(),
            outcome.final_x,
            outcome.elapsed_time
        );

        Ok(outcome)
    }

    fn redraw(&mut self) {
        self.shapes.clear();
        self.draw_plates();

        let paths = std::mem::take(&mut self.paths);
        for (trajectory, scale) in &paths {
            self.draw_path(trajectory, scale);
        }
        self.paths = paths;
    }
}

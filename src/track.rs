//! Closed figure-eight track: parametric curve, surface zones, friction lookup.

use nalgebra::{Point2, Vector2};
use std::collections::HashMap;
use std::f32::consts::TAU;

/// Fallback when a zone carries a surface label missing from the table.
pub const DEFAULT_MU: f32 = 0.6;

pub const POLYLINE_SAMPLES: usize = 400;
pub const PROGRESS_SAMPLES: usize = 300;
pub const ROAD_HALF_WIDTH: f32 = 26.0;

/// Offset curves at constant half-width, cached at construction.
#[derive(Clone)]
pub struct RoadBoundary {
    pub outer: Vec<Point2<f32>>,
    pub inner: Vec<Point2<f32>>,
    /// Outer ring followed by the inner ring reversed, closed.
    pub polygon: Vec<Point2<f32>>,
}

pub struct Track {
    pub center: Point2<f32>,
    pub sx: f32, // horizontal scale (world units)
    pub sy: f32, // vertical scale (world units)
    pub zones: usize,
    zone_surface: Vec<String>,
    mu_map: HashMap<String, f32>,
    pub polyline: Vec<Point2<f32>>,
    pub road: RoadBoundary,
}

impl Track {
    pub fn new(center: Point2<f32>, scale_x: f32, scale_y: f32, zones: usize) -> Self {
        let mu_map: HashMap<String, f32> = [
            ("Asphalt", 0.90),
            ("Terra", 0.60),
            ("Dirt", 0.50),
            ("Rasen", 0.35),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let mut track = Self {
            center,
            sx: scale_x,
            sy: scale_y,
            zones,
            zone_surface: vec!["Asphalt".to_string(); zones],
            mu_map,
            polyline: Vec::new(),
            road: RoadBoundary {
                outer: Vec::new(),
                inner: Vec::new(),
                polygon: Vec::new(),
            },
        };

        let polyline: Vec<Point2<f32>> = (0..POLYLINE_SAMPLES)
            .map(|i| track.curve_point(i as f32 / POLYLINE_SAMPLES as f32))
            .collect();
        track.polyline = polyline;
        track.road = track.build_road_boundary(ROAD_HALF_WIDTH);
        track
    }

    /// Point on the closed curve at progress `t` in [0, 1).
    ///
    /// x = sin(2πt), y = sin(4πt) traces a figure eight; the crossing sits at
    /// the track center.
    pub fn curve_point(&self, t: f32) -> Point2<f32> {
        let a = TAU * t;
        Point2::new(
            self.center.x + self.sx * a.sin(),
            self.center.y + self.sy * (2.0 * a).sin(),
        )
    }

    /// Unit tangent at `t`, from the analytic derivative.
    pub fn curve_tangent(&self, t: f32) -> Vector2<f32> {
        let a = TAU * t;
        let v = Vector2::new(
            self.sx * a.cos() * TAU,
            self.sy * (2.0 * a).cos() * 2.0 * TAU,
        );
        let len = v.norm();
        if len > 1e-9 {
            v / len
        } else {
            // degenerate derivative, point along +x
            Vector2::x()
        }
    }

    /// Progress of the sample point nearest to `pos`, searched exhaustively
    /// over `samples` uniform steps.
    ///
    /// The curve self-intersects, so gradient or bisection refinement can lock
    /// onto the wrong branch; the exhaustive scan cannot. Ties keep the lowest
    /// `t` (strict `<`).
    pub fn nearest_progress(&self, pos: &Point2<f32>, samples: usize) -> f32 {
        let mut best_t = 0.0;
        let mut best_d2 = f32::INFINITY;
        for i in 0..samples {
            let t = i as f32 / samples as f32;
            let d2 = (self.curve_point(t) - pos).norm_squared();
            if d2 < best_d2 {
                best_d2 = d2;
                best_t = t;
            }
        }
        best_t
    }

    /// Zone index for a progress value, clamped into `[0, zones-1]`.
    pub fn zone_of(&self, progress: f32) -> usize {
        let t = progress.rem_euclid(1.0);
        ((t * self.zones as f32) as usize).min(self.zones - 1)
    }

    pub fn surface_of(&self, progress: f32) -> &str {
        &self.zone_surface[self.zone_of(progress)]
    }

    /// Friction coefficient of the surface under `progress`.
    pub fn friction_at(&self, progress: f32) -> f32 {
        self.mu_map
            .get(self.surface_of(progress))
            .copied()
            .unwrap_or(DEFAULT_MU)
    }

    pub fn set_all_surfaces(&mut self, name: &str) {
        for surface in &mut self.zone_surface {
            *surface = name.to_string();
        }
    }

    pub fn set_zone_surface(&mut self, zone: usize, name: &str) {
        if let Some(surface) = self.zone_surface.get_mut(zone) {
            *surface = name.to_string();
        }
    }

    /// Offset the sampled curve by ±`half_width` along the local normal
    /// (tangent rotated 90°). Purely geometric; the base curve never changes
    /// after construction, so the result is cached in `self.road`.
    pub fn build_road_boundary(&self, half_width: f32) -> RoadBoundary {
        let n = self.polyline.len();
        let mut outer = Vec::with_capacity(n);
        let mut inner = Vec::with_capacity(n);

        for (i, p) in self.polyline.iter().enumerate() {
            let tg = self.curve_tangent(i as f32 / n as f32);
            let normal = Vector2::new(-tg.y, tg.x);
            outer.push(p + normal * half_width);
            inner.push(p - normal * half_width);
        }

        let mut polygon = outer.clone();
        polygon.extend(inner.iter().rev().copied());
        if let Some(first) = polygon.first().copied() {
            polygon.push(first);
        }

        RoadBoundary {
            outer,
            inner,
            polygon,
        }
    }
}

//! Category distribution as pie slices.
//!
//! This is the drawing-independent half of the chart: angles, labels and
//! colours for each category. The GUI turns it into canvas paths.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::core::model::CategoryCount;

pub const CHART_TITLE: &str = "CATEGORY DISTRIBUTION";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn lerp(self, other: Self, t: f32) -> Self {
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

// Stops of a cool-to-warm diverging ramp.
const COOL: Color = Color::rgb(59, 76, 192);
const NEUTRAL: Color = Color::rgb(221, 221, 221);
const WARM: Color = Color::rgb(180, 4, 38);

/// Colour at `t` in `[0, 1]` along the cool-to-warm ramp.
pub fn ramp_color(t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.5 {
        COOL.lerp(NEUTRAL, t * 2.0)
    } else {
        NEUTRAL.lerp(WARM, (t - 0.5) * 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub category: String,
    pub count: usize,
    /// Share of the total, in `[0, 1]`.
    pub fraction: f32,
    /// Radians, measured clockwise on screen from three o'clock.
    pub start_angle: f32,
    pub end_angle: f32,
    pub color: Color,
}

impl PieSlice {
    /// Percentage label, e.g. `"42.9%"`.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.fraction * 100.0)
    }

    pub fn mid_angle(&self) -> f32 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// One slice per category, starting at twelve o'clock.
    pub fn from_counts(counts: &[CategoryCount]) -> Self {
        let total: usize = counts.iter().map(|c| c.count).sum();
        if total == 0 {
            return Self::default();
        }

        let steps = counts.len().saturating_sub(1).max(1) as f32;
        let mut angle = -FRAC_PI_2;
        let slices = counts
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let fraction = c.count as f32 / total as f32;
                let start_angle = angle;
                angle += fraction * TAU;
                PieSlice {
                    category: c.category.clone(),
                    count: c.count,
                    fraction,
                    start_angle,
                    end_angle: angle,
                    color: ramp_color(i as f32 / steps),
                }
            })
            .collect();
        Self { slices }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Which screen dimension a quiver scale is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleUnits {
    Width,
    Height,
}

/// Recorded scatter draw: one marker per entry of the coordinate arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterCommand {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub colors: Vec<Color>,
    pub size: f64,
    pub edge_color: Color,
    pub z_order: i32,
}

/// Recorded quiver draw: one arrow per entry, anchored at its tail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuiverCommand {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub u: Vec<f64>,
    pub v: Vec<f64>,
    pub colors: Vec<Color>,
    pub scale: f64,
    pub scale_units: ScaleUnits,
    pub edge_color: Color,
    pub head_width: f64,
    pub line_width: f64,
    pub z_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendCommand {
    pub entries: Vec<LegendEntry>,
    pub frame_on: bool,
    pub z_order: i32,
}

/// Command-recording 2D axis handle.
///
/// This crate owns no renderer; an `Axes2` collects what an external
/// plotting backend would draw, in draw order, plus the few pieces of
/// axis state the drawers read back (limits for the aspect ratio, the
/// x-axis label).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axes2 {
    pub xlim: (f64, f64),
    pub ylim: (f64, f64),
    x_label: String,
    pub scatters: Vec<ScatterCommand>,
    pub quivers: Vec<QuiverCommand>,
    pub legend: Option<LegendCommand>,
}

impl Axes2 {
    #[must_use]
    pub fn new(xlim: (f64, f64), ylim: (f64, f64)) -> Self {
        Self {
            xlim,
            ylim,
            x_label: String::new(),
            scatters: Vec::new(),
            quivers: Vec::new(),
            legend: None,
        }
    }

    /// Height-over-width ratio of the current limits.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        (self.ylim.0 - self.ylim.1) / (self.xlim.0 - self.xlim.1)
    }

    /// The narrower screen dimension, used as quiver scale units.
    #[must_use]
    pub fn narrow_dimension(&self) -> ScaleUnits {
        if self.aspect() < 1.0 {
            ScaleUnits::Width
        } else {
            ScaleUnits::Height
        }
    }

    #[must_use]
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn set_x_label(&mut self, label: impl Into<String>) {
        self.x_label = label.into();
    }

    pub fn scatter(&mut self, command: ScatterCommand) {
        self.scatters.push(command);
    }

    pub fn quiver(&mut self, command: QuiverCommand) {
        self.quivers.push(command);
    }

    /// Install (or replace) the legend.
    pub fn set_legend(&mut self, entries: Vec<LegendEntry>) {
        self.legend = Some(LegendCommand {
            entries,
            frame_on: false,
            z_order: 0,
        });
    }

    /// Restyle an existing legend. A missing legend is an expected
    /// transient state and is silently skipped; returns whether a legend
    /// was there to restyle.
    pub fn restyle_legend(&mut self, frame_on: bool, z_order: i32) -> bool {
        match self.legend.as_mut() {
            Some(legend) => {
                legend.frame_on = frame_on;
                legend.z_order = z_order;
                true
            }
            None => false,
        }
    }
}

impl Default for Axes2 {
    fn default() -> Self {
        Self::new((0.0, 1.0), (0.0, 1.0))
    }
}

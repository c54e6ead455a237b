//! Ruler and protractor measurement state.
//!
//! Clicks accumulate into a single pick buffer shared by both tools. Each
//! active tool counts the click against a shared counter; once the counter
//! passes that tool's capacity the buffer is wiped and the overflowing click
//! is dropped. Both tools may be active at the same time, in which case one
//! click is counted (and stored) twice; the ruler's overflow then wipes the
//! buffer every other click, so it never holds more than three picks.

use std::fmt;

use egui::Color32;

use crate::data::dataset::Point;
use crate::error::{Result, ScatterError};

/// Measurement tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Ruler,
    Protractor,
}

impl Tool {
    /// Tools in the order a click is processed.
    pub const ALL: [Tool; 2] = [Tool::Ruler, Tool::Protractor];

    /// Number of picks that complete a measurement.
    pub fn capacity(self) -> usize {
        match self {
            Tool::Ruler => 2,
            Tool::Protractor => 3,
        }
    }

    /// Fixed overlay colour, independent of the theme.
    pub fn color(self) -> Color32 {
        match self {
            Tool::Ruler => Color32::from_rgb(255, 0, 0),
            Tool::Protractor => Color32::from_rgb(0, 0, 255),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Ruler => write!(f, "Ruler"),
            Tool::Protractor => write!(f, "Protractor"),
        }
    }
}

/// Independent on/off flags for each tool. The UI derives button styling
/// from these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolFlags {
    pub ruler: bool,
    pub protractor: bool,
}

impl ToolFlags {
    pub fn is_active(&self, tool: Tool) -> bool {
        match tool {
            Tool::Ruler => self.ruler,
            Tool::Protractor => self.protractor,
        }
    }

    pub fn any(&self) -> bool {
        self.ruler || self.protractor
    }

    /// Active tools in processing order.
    pub fn active(&self) -> impl Iterator<Item = Tool> {
        let flags = *self;
        Tool::ALL.into_iter().filter(move |t| flags.is_active(*t))
    }

    fn flag_mut(&mut self, tool: Tool) -> &mut bool {
        match tool {
            Tool::Ruler => &mut self.ruler,
            Tool::Protractor => &mut self.protractor,
        }
    }
}

/// Euclidean distance in data units.
pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.distance_to(&p2)
}

/// Angle at vertex `p2` in degrees, via the law of cosines.
///
/// Fails with [`ScatterError::DegenerateMeasurement`] when `p2` coincides with
/// `p1` or `p3`.
pub fn angle(p1: Point, p2: Point, p3: Point) -> Result<f64> {
    let a = p1.distance_to(&p2);
    let b = p2.distance_to(&p3);
    let c = p1.distance_to(&p3);
    if a == 0.0 || b == 0.0 {
        return Err(ScatterError::DegenerateMeasurement {
            tool: Tool::Protractor,
        });
    }
    let cos = ((a * a + b * b - c * c) / (2.0 * a * b)).clamp(-1.0, 1.0);
    Ok(cos.acos().to_degrees())
}

/// Round to two decimals, as displayed.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A computed measurement value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    /// Ruler distance in data units.
    Distance(f64),
    /// Protractor angle in degrees.
    Angle(f64),
}

impl Measurement {
    pub fn value(&self) -> f64 {
        match self {
            Measurement::Distance(v) | Measurement::Angle(v) => *v,
        }
    }

    /// Value rounded to two decimals.
    pub fn rounded(&self) -> f64 {
        round2(self.value())
    }

    pub fn label(&self) -> String {
        match self {
            Measurement::Distance(d) => format!("Distance: {:.2}", d),
            Measurement::Angle(a) => format!("Angle: {:.2}°", a),
        }
    }
}

/// A measurement whose pick buffer is full for its tool.
#[derive(Debug)]
pub struct CompletedMeasurement {
    pub tool: Tool,
    pub picks: Vec<Point>,
    pub outcome: Result<Measurement>,
}

impl CompletedMeasurement {
    /// Overlay label; a degenerate angle reads "undefined" instead of NaN.
    pub fn label(&self) -> String {
        match (&self.outcome, self.tool) {
            (Ok(m), _) => m.label(),
            (Err(_), Tool::Ruler) => "Distance: undefined".to_string(),
            (Err(_), Tool::Protractor) => "Angle: undefined".to_string(),
        }
    }
}

/// What a click did to the pick buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No tool is active.
    Ignored,
    /// The click was stored; `picks` is the new buffer length.
    Picked { picks: usize },
    /// The click overflowed a tool's capacity and wiped the buffer.
    Cleared,
}

/// View of the state machine for the primary (first active) tool.
#[derive(Debug)]
pub enum Phase {
    Idle,
    Picking { tool: Tool, picks: usize },
    /// The buffer holds exactly the tool's capacity; carries the result.
    Complete(CompletedMeasurement),
}

/// Tool flags plus the shared pick buffer and click counter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementState {
    tools: ToolFlags,
    picks: Vec<Point>,
    click_count: usize,
}

impl MeasurementState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tools(&self) -> ToolFlags {
        self.tools
    }

    pub fn is_active(&self, tool: Tool) -> bool {
        self.tools.is_active(tool)
    }

    /// Flip a tool's flag and return the new value. The pick buffer is kept.
    pub fn toggle(&mut self, tool: Tool) -> bool {
        let flag = self.tools.flag_mut(tool);
        *flag = !*flag;
        tracing::debug!(%tool, active = *flag, "tool toggled");
        *flag
    }

    pub fn picks(&self) -> &[Point] {
        &self.picks
    }

    pub fn click_count(&self) -> usize {
        self.click_count
    }

    /// Feed a data-space click into every active tool.
    pub fn on_click(&mut self, point: Point) -> ClickOutcome {
        if !self.tools.any() {
            return ClickOutcome::Ignored;
        }
        let mut cleared = false;
        for tool in self.tools.active() {
            self.click_count += 1;
            if self.click_count > tool.capacity() {
                self.clear();
                cleared = true;
            } else {
                self.picks.push(point);
                cleared = false;
            }
        }
        if cleared {
            ClickOutcome::Cleared
        } else {
            ClickOutcome::Picked {
                picks: self.picks.len(),
            }
        }
    }

    /// Empty the pick buffer and reset the click counter.
    pub fn clear(&mut self) {
        self.picks.clear();
        self.click_count = 0;
    }

    /// First active tool, in processing order.
    pub fn primary_tool(&self) -> Option<Tool> {
        self.tools.active().next()
    }

    pub fn phase(&self) -> Phase {
        let Some(tool) = self.primary_tool() else {
            return Phase::Idle;
        };
        match self.completed_for(tool) {
            Some(measurement) => Phase::Complete(measurement),
            None => Phase::Picking {
                tool,
                picks: self.picks.len(),
            },
        }
    }

    /// Measurements whose tool is active and whose buffer holds exactly that
    /// tool's capacity.
    pub fn completed(&self) -> Vec<CompletedMeasurement> {
        self.tools
            .active()
            .filter_map(|tool| self.completed_for(tool))
            .collect()
    }

    fn completed_for(&self, tool: Tool) -> Option<CompletedMeasurement> {
        let outcome = match (tool, self.picks.as_slice()) {
            (Tool::Ruler, [p1, p2]) => Ok(Measurement::Distance(distance(*p1, *p2))),
            (Tool::Protractor, [p1, p2, p3]) => angle(*p1, *p2, *p3).map(Measurement::Angle),
            _ => return None,
        };
        Some(CompletedMeasurement {
            tool,
            picks: self.picks.clone(),
            outcome,
        })
    }
}

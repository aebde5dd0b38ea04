//! Range slider widget - pick a number between two bounds.

use std::sync::Arc;

use petaldom::{Color, Element, Style};

use super::field::{field_builders, publish, FieldProps};
use super::{HasState, NeedsState};
use crate::error::PetalError;
use crate::handler_context::{HandlerRegistry, ON_ACTIVATE, ON_CHANGE};
use crate::state::State;
use crate::value::FieldValue;

/// Number of cells in the drawn track, thumb included.
const TRACK_WIDTH: usize = 20;

/// Bounds and step of a slider. `min <= max` and `step > 0` always hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    min: f64,
    max: f64,
    step: f64,
}

impl SliderRange {
    pub fn try_new(min: f64, max: f64, step: f64) -> Result<Self, PetalError> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(PetalError::InvalidRange { min, max });
        }
        if !(step > 0.0 && step.is_finite()) {
            return Err(PetalError::InvalidStep(step));
        }
        Ok(Self { min, max, step })
    }

    /// Parse textual bounds such as `"10"` and `"100"`, with a step of 1.
    pub fn parse_bounds(min: &str, max: &str) -> Result<Self, PetalError> {
        Self::try_new(parse_number(min)?, parse_number(max)?, 1.0)
    }

    pub fn with_step(self, step: f64) -> Result<Self, PetalError> {
        Self::try_new(self.min, self.max, step)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Clamp `value` into the range and snap it to the nearest step from `min`.
    pub fn clamp_snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let mut snapped = self.min + ((clamped - self.min) / self.step).round() * self.step;
        if snapped > self.max {
            snapped -= self.step;
        }
        snapped.clamp(self.min, self.max)
    }

    /// Starting value: `default` or `min`, clamped and snapped.
    pub fn default_value(&self, default: Option<f64>) -> f64 {
        self.clamp_snap(default.unwrap_or(self.min))
    }

    /// Thumb cell for `value` on a track of `width` cells.
    fn thumb_position(&self, value: f64, width: usize) -> usize {
        let span = self.max - self.min;
        if span <= 0.0 || width < 2 {
            return 0;
        }
        let ratio = (value - self.min) / span;
        ((ratio * (width - 1) as f64).round() as usize).min(width - 1)
    }
}

fn parse_number(input: &str) -> Result<f64, PetalError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| PetalError::InvalidNumber {
            input: input.to_string(),
        })
}

/// Persistent value of a slider. Unset until the first build, which seeds
/// it from the slider's default value.
#[derive(Debug, Clone, Default)]
pub struct SliderState {
    value: State<Option<f64>>,
}

impl SliderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<f64> {
        self.value.get()
    }
}

/// A range slider builder.
///
/// Uses typestate pattern to enforce `state()` is called before `build()`.
///
/// # Example
///
/// ```ignore
/// let price = SliderState::new();
///
/// let element = RangeSlider::new("price", SliderRange::parse_bounds("10", "100")?)
///     .label("Select price range")
///     .default_value(10.0)
///     .sink(form.sink())
///     .state(&price)
///     .build(&registry);
///
/// registry.activate("price-inc");
/// ```
pub struct RangeSlider<S = NeedsState> {
    state_marker: S,
    field: FieldProps,
    range: SliderRange,
    default_value: Option<f64>,
    on_change: Option<Arc<dyn Fn(f64) + Send + Sync>>,
}

impl RangeSlider<NeedsState> {
    pub fn new(name: impl Into<String>, range: SliderRange) -> Self {
        Self {
            state_marker: NeedsState,
            field: FieldProps::new(name),
            range,
            default_value: None,
            on_change: None,
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &SliderState) -> RangeSlider<HasState<'_, SliderState>> {
        RangeSlider {
            state_marker: HasState(s),
            field: self.field,
            range: self.range,
            default_value: self.default_value,
            on_change: self.on_change,
        }
    }
}

impl<S> RangeSlider<S> {
    field_builders!();

    pub fn default_value(mut self, value: f64) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn on_change(mut self, f: impl Fn(f64) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(f));
        self
    }
}

impl<'a> RangeSlider<HasState<'a, SliderState>> {
    /// Current value, seeding the state first if needed.
    pub fn value(&self) -> f64 {
        let state = &self.state_marker.0.value;
        match state.get() {
            Some(value) => value,
            None => {
                let value = self.range.default_value(self.default_value);
                state.set(Some(value));
                value
            }
        }
    }

    /// Build the slider element.
    ///
    /// The track takes `on_change` value events; `{id}-dec` and `{id}-inc`
    /// step the value down and up.
    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let value = self.value();
        let id = self.field.element_id();
        let disabled = self.field.disabled;

        log::debug!(
            "RangeSlider::build id={} value={} range={}..={} step={}",
            id,
            value,
            self.range.min,
            self.range.max,
            self.range.step
        );

        let thumb = self.range.thumb_position(value, TRACK_WIDTH);
        let track: String = (0..TRACK_WIDTH)
            .map(|cell| match cell.cmp(&thumb) {
                std::cmp::Ordering::Less => '=',
                std::cmp::Ordering::Equal => '●',
                std::cmp::Ordering::Greater => '-',
            })
            .collect();

        let dec_id = format!("{id}-dec");
        let inc_id = format!("{id}-inc");
        let button = |id: &str, glyph: &str| {
            Element::text(glyph)
                .id(id)
                .class("slider-step")
                .focusable(!disabled)
                .clickable(!disabled)
                .disabled(disabled)
        };

        let elem = Element::row()
            .id(&id)
            .class("range-slider")
            .gap(1)
            .focusable(!disabled)
            .disabled(disabled)
            .data("value", value.to_string())
            .children([
                button(&dec_id, "[-]"),
                Element::text(track)
                    .class("slider-track")
                    .style(Style::new().foreground(Color::var("primary"))),
                button(&inc_id, "[+]"),
                Element::text(format!("{value}")).class("slider-value"),
            ]);

        if !disabled {
            let setter = SliderSetter {
                name: self.field.name.clone(),
                range: self.range,
                sink: self.field.sink.clone(),
                on_change: self.on_change.clone(),
                state: self.state_marker.0.clone(),
            };
            let step = self.range.step;

            let track_setter = setter.clone();
            registry.register(
                &id,
                ON_CHANGE,
                Arc::new(move |hx| {
                    if let Some(value) = hx.changed_value() {
                        track_setter.set(value);
                    }
                }),
            );

            let dec_setter = setter.clone();
            registry.register(
                &dec_id,
                ON_ACTIVATE,
                Arc::new(move |_hx| dec_setter.nudge(-step)),
            );
            registry.register(&inc_id, ON_ACTIVATE, Arc::new(move |_hx| setter.nudge(step)));
        }

        self.field.wrap(elem)
    }
}

#[derive(Clone)]
struct SliderSetter {
    name: String,
    range: SliderRange,
    sink: Option<crate::form::SharedSink>,
    on_change: Option<Arc<dyn Fn(f64) + Send + Sync>>,
    state: SliderState,
}

impl SliderSetter {
    fn set(&self, requested: f64) {
        let value = self.range.clamp_snap(requested);
        log::debug!("slider {} requested={} value={}", self.name, requested, value);
        self.state.value.set(Some(value));
        publish(self.sink.as_ref(), &self.name, FieldValue::Number(value));
        if let Some(on_change) = &self.on_change {
            on_change(value);
        }
    }

    fn nudge(&self, delta: f64) {
        let current = self.state.value().unwrap_or(self.range.min);
        self.set(current + delta);
    }
}

//! Oscilloscope module.
//!
//! Animated trace renderer: fills a float sample buffer each update and
//! draws it as a line strip or as histogram bars. Exercises every parameter
//! kind the registry supports.

use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};

use crate::params::{Module, ModuleContext, ParamId, Parameter};
use crate::render::RenderModule;

/// Trace color, matching the classic green-phosphor look.
const TRACE_COLOR: Color32 = Color32::from_rgb(64, 224, 112);

/// Background color of the scope face.
const FACE_COLOR: Color32 = Color32::from_rgb(18, 22, 18);

/// How the captured buffer is displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Connected line strip through all samples.
    #[default]
    Waveform = 0,
    /// Amplitude bars, one per bucket of samples.
    Histogram = 1,
}

impl DisplayMode {
    /// Labels in selection-index order.
    pub const LABELS: [&'static str; 2] = ["Waveform", "Histogram"];

    fn from_index(index: usize) -> Self {
        match index {
            1 => DisplayMode::Histogram,
            _ => DisplayMode::Waveform,
        }
    }
}

/// A demo oscilloscope renderer.
///
/// # Parameters
///
/// - **Gain** (double, 0–10): vertical scale applied to the trace
/// - **Frequency** (double, 0.1–20): cycles shown across the viewport
/// - **Samples** (int, 64–2048): resolution of the trace buffer
/// - **Mode** (enum): Waveform or Histogram display
/// - **Freeze** (bool): holds the current trace
/// - **Title** (text): caption drawn in the corner
pub struct Oscilloscope {
    module: Module,
    gain: ParamId,
    frequency: ParamId,
    samples: ParamId,
    mode: ParamId,
    freeze: ParamId,
    title: ParamId,
    /// Trace samples in [-gain, gain], refilled while not frozen.
    buffer: Vec<f32>,
    /// Running phase in radians.
    phase: f64,
    viewport: (f32, f32),
}

impl Oscilloscope {
    /// Default number of trace samples.
    pub const DEFAULT_SAMPLES: i32 = 512;

    /// Creates an oscilloscope and registers its parameters.
    pub fn new(ctx: &mut ModuleContext) -> Self {
        let mut module = Module::new(ctx, "Oscilloscope");
        let params = module.params_mut();

        let mut gain_param = Parameter::double("Gain", 1.0);
        gain_param.set_limits_double(0.0, 10.0);
        let gain = params.push(gain_param);

        let mut frequency_param = Parameter::double("Frequency", 2.0);
        frequency_param.set_limits_double(0.1, 20.0);
        let frequency = params.push(frequency_param);

        let mut samples_param = Parameter::int("Samples", Self::DEFAULT_SAMPLES);
        samples_param.set_limits_int(64, 2048);
        let samples = params.push(samples_param);

        let mode = params.push(Parameter::choice("Mode", &DisplayMode::LABELS, 0));
        let freeze = params.push(Parameter::toggle("Freeze", false));
        let title = params.push(Parameter::text("Title", "Channel 1"));

        Self {
            module,
            gain,
            frequency,
            samples,
            mode,
            freeze,
            title,
            buffer: Vec::new(),
            phase: 0.0,
            viewport: (0.0, 0.0),
        }
    }

    /// Returns the current display mode.
    pub fn display_mode(&self) -> DisplayMode {
        let index = self.module.params()[self.mode].as_index().unwrap_or(0);
        DisplayMode::from_index(index)
    }

    /// Returns the current trace buffer.
    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    /// Returns the last viewport size reported through `resize`.
    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    fn refill_buffer(&mut self) {
        let params = self.module.params();
        let gain = params[self.gain].as_double().unwrap_or(1.0);
        let cycles = params[self.frequency].as_double().unwrap_or(2.0);
        let count = params[self.samples].as_int().unwrap_or(Self::DEFAULT_SAMPLES) as usize;

        self.buffer.resize(count, 0.0);
        for (i, sample) in self.buffer.iter_mut().enumerate() {
            let t = i as f64 / count as f64;
            *sample = ((self.phase + t * cycles * std::f64::consts::TAU).sin() * gain) as f32;
        }
    }

    fn draw_waveform(&self, painter: &Painter, rect: Rect) {
        if self.buffer.len() < 2 {
            return;
        }
        let half = rect.height() * 0.5;
        let center = rect.center().y;
        let step = rect.width() / (self.buffer.len() - 1) as f32;

        let points: Vec<Pos2> = self
            .buffer
            .iter()
            .enumerate()
            .map(|(i, &sample)| {
                let y = center - sample.clamp(-1.0, 1.0) * half;
                Pos2::new(rect.left() + i as f32 * step, y)
            })
            .collect();
        painter.add(Shape::line(points, Stroke::new(1.5, TRACE_COLOR)));
    }

    fn draw_histogram(&self, painter: &Painter, rect: Rect) {
        const BARS: usize = 48;
        if self.buffer.is_empty() {
            return;
        }
        let bucket = self.buffer.len().div_ceil(BARS);
        let bar_width = rect.width() / BARS as f32;
        let base = rect.bottom();

        for (i, chunk) in self.buffer.chunks(bucket).enumerate() {
            let peak = chunk.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()));
            let height = peak.clamp(0.0, 1.0) * rect.height();
            let left = rect.left() + i as f32 * bar_width;
            let bar = Rect::from_min_max(
                Pos2::new(left + 1.0, base - height),
                Pos2::new(left + bar_width - 1.0, base),
            );
            painter.rect_filled(bar, 1.0, TRACE_COLOR);
        }
    }
}

impl RenderModule for Oscilloscope {
    fn module(&self) -> &Module {
        &self.module
    }

    fn module_mut(&mut self) -> &mut Module {
        &mut self.module
    }

    fn initialize(&mut self) {
        self.phase = 0.0;
        self.refill_buffer();
    }

    fn update(&mut self, delta_time: f32) {
        let frozen = self.module.params()[self.freeze].as_bool().unwrap_or(false);
        if frozen {
            return;
        }
        let cycles = self.module.params()[self.frequency].as_double().unwrap_or(2.0);
        self.phase += delta_time as f64 * cycles * std::f64::consts::TAU * 0.25;
        self.phase %= std::f64::consts::TAU;
        self.refill_buffer();
    }

    fn render(&mut self, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, 2.0, FACE_COLOR);

        match self.display_mode() {
            DisplayMode::Waveform => self.draw_waveform(painter, rect),
            DisplayMode::Histogram => self.draw_histogram(painter, rect),
        }

        let title = self.module.params()[self.title].as_text().unwrap_or("");
        if !title.is_empty() {
            let anchor = rect.left_top() + eframe::egui::vec2(6.0, 4.0);
            painter.text(
                anchor,
                Align2::LEFT_TOP,
                title,
                FontId::proportional(12.0),
                Color32::from_rgb(158, 158, 158),
            );
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamKind;

    #[test]
    fn test_registers_all_parameter_kinds() {
        let mut ctx = ModuleContext::new();
        let scope = Oscilloscope::new(&mut ctx);

        let kinds: Vec<ParamKind> = scope.module().params().iter().map(|p| p.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ParamKind::Double,
                ParamKind::Double,
                ParamKind::Int,
                ParamKind::Enum,
                ParamKind::Bool,
                ParamKind::Text,
            ]
        );
    }

    #[test]
    fn test_update_fills_buffer() {
        let mut ctx = ModuleContext::new();
        let mut scope = Oscilloscope::new(&mut ctx);
        scope.initialize();
        assert_eq!(scope.buffer().len(), Oscilloscope::DEFAULT_SAMPLES as usize);

        scope.update(1.0 / 60.0);
        assert!(scope.buffer().iter().any(|&s| s != 0.0));
    }

    #[test]
    fn test_gain_scales_trace() {
        let mut ctx = ModuleContext::new();
        let mut scope = Oscilloscope::new(&mut ctx);
        scope.initialize();
        let gain = scope.gain;

        scope.module_mut().params_mut()[gain].set_double(0.0);
        scope.update(1.0 / 60.0);
        assert!(scope.buffer().iter().all(|&s| s == 0.0));

        scope.module_mut().params_mut()[gain].set_double(2.0);
        scope.update(1.0 / 60.0);
        let peak = scope.buffer().iter().fold(0.0f32, |acc, &s| acc.max(s.abs()));
        assert!(peak > 1.0);
    }

    #[test]
    fn test_freeze_holds_trace() {
        let mut ctx = ModuleContext::new();
        let mut scope = Oscilloscope::new(&mut ctx);
        scope.initialize();
        scope.update(0.1);

        let before = scope.buffer().to_vec();
        let freeze = scope.freeze;
        scope.module_mut().params_mut()[freeze].set_bool(true);
        scope.update(0.1);
        assert_eq!(scope.buffer(), before.as_slice());
    }

    #[test]
    fn test_samples_parameter_resizes_buffer() {
        let mut ctx = ModuleContext::new();
        let mut scope = Oscilloscope::new(&mut ctx);
        scope.initialize();
        let samples = scope.samples;

        scope.module_mut().params_mut()[samples].set_int(128);
        scope.update(0.01);
        assert_eq!(scope.buffer().len(), 128);

        // Out-of-range request clamps at the limit.
        scope.module_mut().params_mut()[samples].set_int(1_000_000);
        scope.update(0.01);
        assert_eq!(scope.buffer().len(), 2048);
    }

    #[test]
    fn test_display_mode_follows_parameter() {
        let mut ctx = ModuleContext::new();
        let mut scope = Oscilloscope::new(&mut ctx);
        assert_eq!(scope.display_mode(), DisplayMode::Waveform);
        let mode = scope.mode;

        scope.module_mut().params_mut()[mode].set_index(1);
        assert_eq!(scope.display_mode(), DisplayMode::Histogram);

        // Clamped index maps back to the last mode.
        scope.module_mut().params_mut()[mode].set_index(9);
        assert_eq!(scope.display_mode(), DisplayMode::Histogram);
    }

    #[test]
    fn test_resize_records_viewport() {
        let mut ctx = ModuleContext::new();
        let mut scope = Oscilloscope::new(&mut ctx);
        scope.resize(800.0, 450.0);
        assert_eq!(scope.viewport(), (800.0, 450.0));
    }
}

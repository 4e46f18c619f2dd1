//! The renderer capability.
//!
//! Anything drawn in the viewer canvas implements `RenderModule`: an object
//! that embeds a [`Module`](crate::params::Module) and knows how to paint
//! itself each frame.

use egui::{Painter, Rect};

use crate::params::Module;

/// The capability shared by all renderable modules.
///
/// The host drives the lifecycle: `initialize` once after construction,
/// then per frame `update` with the elapsed time followed by `render` into
/// the canvas painter. `resize` fires whenever the canvas rect changes.
/// Implementations read their parameter values during `update`/`render`
/// through the handles they kept at registration time.
///
/// # Example
///
/// ```
/// use egui::{Painter, Rect};
/// use modview::params::{Module, ModuleContext};
/// use modview::render::RenderModule;
///
/// struct Blank {
///     module: Module,
/// }
///
/// impl RenderModule for Blank {
///     fn module(&self) -> &Module {
///         &self.module
///     }
///
///     fn module_mut(&mut self) -> &mut Module {
///         &mut self.module
///     }
///
///     fn initialize(&mut self) {}
///     fn update(&mut self, _delta_time: f32) {}
///     fn render(&mut self, _painter: &Painter, _rect: Rect) {}
///     fn resize(&mut self, _width: f32, _height: f32) {}
/// }
///
/// let mut ctx = ModuleContext::new();
/// let blank = Blank { module: Module::new(&mut ctx, "Blank") };
/// assert_eq!(blank.module().name(), "Blank");
/// ```
pub trait RenderModule {
    /// Returns the embedded module (name, parameters, presets).
    fn module(&self) -> &Module;

    /// Returns the embedded module mutably, for the property tree and
    /// preset controls.
    fn module_mut(&mut self) -> &mut Module;

    /// One-time setup after construction, before the first frame.
    fn initialize(&mut self);

    /// Advances internal state by `delta_time` seconds.
    fn update(&mut self, delta_time: f32);

    /// Paints the module into `rect` of the canvas.
    fn render(&mut self, painter: &Painter, rect: Rect);

    /// Notifies the module that the canvas size changed.
    fn resize(&mut self, width: f32, height: f32);
}

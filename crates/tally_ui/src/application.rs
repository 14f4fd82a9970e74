use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Theme, Window, WindowId};

use crate::error::UiError;
use crate::event::{DisplayMode, Event, MouseButton};
use crate::layout::{Bounds, Point, Size};
use crate::renderer::Renderer;
use crate::widget::EventResult;
use crate::Element;

/// The trait applications implement to run on this toolkit.
///
/// The runtime owns the loop: it calls `view` to build the widget tree,
/// routes events into `update`, and calls `tick` once per rendered frame
/// so animations can drive themselves.
pub trait Application {
    /// Messages produced by widgets and handled in `update`.
    type Message;

    /// Construct the initial application state.
    fn new() -> Self;

    /// The window title.
    fn title(&self) -> String;

    /// Handle a message, mutating application state.
    fn update(&mut self, message: Self::Message);

    /// Build the widget tree for the current state.
    fn view(&self) -> Element<Self::Message>;

    /// Called once after each rendered frame. Returning a message keeps
    /// the frame loop running; returning `None` lets it go idle.
    fn tick(&self) -> Option<Self::Message> {
        None
    }

    /// Called when the platform light/dark preference is known or changes.
    fn display_mode_changed(&self, _mode: DisplayMode) -> Option<Self::Message> {
        None
    }
}

/// Window and logging settings for [`run`].
#[derive(Debug, Clone)]
pub struct Settings {
    pub window_title: Option<String>,
    pub window_size: (u32, u32),
    pub min_window_size: Option<(u32, u32)>,
    pub resizable: bool,
    pub log_level: log::LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: None,
            window_size: (800, 600),
            min_window_size: None,
            resizable: true,
            log_level: log::LevelFilter::Info,
        }
    }
}

/// Run an application until its window is closed.
pub fn run<A: Application>(settings: Settings) -> Result<(), UiError> {
    env_logger::Builder::new()
        .filter_level(settings.log_level)
        .init();

    let event_loop = EventLoop::new()?;

    let mut runner = Runner {
        app: A::new(),
        settings,
        window: None,
        renderer: None,
        cursor: Point::ZERO,
        error: None,
    };

    event_loop.run_app(&mut runner)?;

    match runner.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct Runner<A: Application> {
    app: A,
    settings: Settings,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    cursor: Point,
    error: Option<UiError>,
}

impl<A: Application> Runner<A> {
    /// Route a toolkit event through the widget tree and apply the result.
    fn dispatch(&mut self, event: Event) {
        let Some(window) = &self.window else {
            return;
        };
        let Some(renderer) = &self.renderer else {
            return;
        };

        let (width, height) = renderer.size();
        let bounds = Bounds::new(0.0, 0.0, width as f32, height as f32);

        let mut root = self.app.view();
        root.layout(Size::new(bounds.width, bounds.height));

        match root.on_event(&event, bounds) {
            EventResult::None => {}
            EventResult::Redraw => window.request_redraw(),
            EventResult::Message(message) => {
                self.app.update(message);
                window.request_redraw();
            }
        }
    }

    fn notify_display_mode(&mut self, theme: Theme) {
        let mode = match theme {
            Theme::Light => DisplayMode::Light,
            Theme::Dark => DisplayMode::Dark,
        };
        if let Some(message) = self.app.display_mode_changed(mode) {
            self.app.update(message);
        }
    }
}

impl<A: Application> ApplicationHandler for Runner<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        let title = self
            .settings
            .window_title
            .clone()
            .unwrap_or_else(|| self.app.title());

        let mut attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(LogicalSize::new(
                self.settings.window_size.0,
                self.settings.window_size.1,
            ))
            .with_resizable(self.settings.resizable);
        if let Some((w, h)) = self.settings.min_window_size {
            attributes = attributes.with_min_inner_size(LogicalSize::new(w, h));
        }

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.error = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(Renderer::new(window.clone())) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => {
                self.error = Some(e.into());
                event_loop.exit();
                return;
            }
        }

        // The platform theme is only known once the window exists.
        if let Some(theme) = window.theme() {
            self.notify_display_mode(theme);
        }

        log::info!(
            "Window created at {}x{}",
            self.settings.window_size.0,
            self.settings.window_size.1
        );

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::ThemeChanged(theme) => {
                self.notify_display_mode(theme);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x as f32, position.y as f32);
                self.dispatch(Event::MouseMoved {
                    position: self.cursor,
                });
            }
            WindowEvent::CursorLeft { .. } => {
                self.dispatch(Event::CursorLeft);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    winit::event::MouseButton::Left => MouseButton::Left,
                    winit::event::MouseButton::Right => MouseButton::Right,
                    winit::event::MouseButton::Middle => MouseButton::Middle,
                    winit::event::MouseButton::Other(n) => MouseButton::Other(n),
                    // Navigation buttons have no meaning here.
                    winit::event::MouseButton::Back | winit::event::MouseButton::Forward => {
                        return;
                    }
                };
                let event = match state {
                    ElementState::Pressed => Event::MousePressed {
                        button,
                        position: self.cursor,
                    },
                    ElementState::Released => Event::MouseReleased {
                        button,
                        position: self.cursor,
                    },
                };
                self.dispatch(event);
            }
            WindowEvent::RedrawRequested => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.render(self.app.view());
                }
                // Keep rendering while the application has animation to run.
                if let Some(message) = self.app.tick() {
                    self.app.update(message);
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }
            _ => {}
        }
    }
}

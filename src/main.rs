//! Flow Field - particles tracing a field of angles
//!
//! Keys: `d` debug grid, `t`/Enter type text, `p` procedural field, Esc quit.
//! An optional first argument is used as the initial text.

mod app;
mod renderer;

use app::App;
use app::keybindings::{self, Key as BindingKey, KeyEvent, Modifiers};
use flow_field::Settings;
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use std::ffi::CString;
use std::num::NonZeroU32;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, ModifiersState, NamedKey};
use winit::window::{Window, WindowAttributes, WindowId};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load();
    let initial_text = std::env::args().nth(1);

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut handler = AppHandler::new(settings, initial_text);
    event_loop.run_app(&mut handler).expect("Event loop failed");
}

struct AppHandler {
    state: Option<AppState>,
    settings: Settings,
    initial_text: Option<String>,
    modifiers: ModifiersState,
}

struct AppState {
    window: Window,
    gl_context: PossiblyCurrentContext,
    gl_surface: Surface<WindowSurface>,
    app: App,
}

impl AppHandler {
    fn new(settings: Settings, initial_text: Option<String>) -> Self {
        Self {
            state: None,
            settings,
            initial_text,
            modifiers: ModifiersState::default(),
        }
    }
}

/// Translate a winit key into the binding table's key type
fn binding_key(key: &Key) -> Option<BindingKey> {
    match key {
        Key::Named(NamedKey::Escape) => Some(BindingKey::Escape),
        Key::Named(NamedKey::Enter) => Some(BindingKey::Enter),
        Key::Named(NamedKey::Backspace) => Some(BindingKey::Backspace),
        Key::Named(NamedKey::Space) => Some(BindingKey::Space),
        Key::Character(c) => c.chars().next().map(BindingKey::Char),
        _ => None,
    }
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title("Flow Field")
            .with_inner_size(LogicalSize::new(1280.0, 720.0));

        let config_template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_multisampling(4);

        let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attrs));

        let (window, gl_config) = display_builder
            .build(event_loop, config_template, |configs| {
                configs
                    .reduce(|accum, config| {
                        if config.num_samples() > accum.num_samples() {
                            config
                        } else {
                            accum
                        }
                    })
                    .expect("No GL configs found")
            })
            .expect("Failed to create window");

        let window = window.expect("Window not created");
        let gl_display = gl_config.display();

        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(None))
            .build(Some(
                window
                    .window_handle()
                    .expect("Failed to get window handle")
                    .as_raw(),
            ));

        let gl_context = unsafe {
            gl_display
                .create_context(&gl_config, &context_attrs)
                .expect("Failed to create GL context")
        };

        let size = window.inner_size();
        let surface_attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            window
                .window_handle()
                .expect("Failed to get window handle")
                .as_raw(),
            NonZeroU32::new(size.width.max(1)).expect("width is at least 1"),
            NonZeroU32::new(size.height.max(1)).expect("height is at least 1"),
        );

        let gl_surface = unsafe {
            gl_display
                .create_window_surface(&gl_config, &surface_attrs)
                .expect("Failed to create surface")
        };

        let gl_context = gl_context
            .make_current(&gl_surface)
            .expect("Failed to make context current");

        let renderer = unsafe {
            femtovg::renderer::OpenGl::new_from_function_cstr(|name| {
                let cstr = CString::new(name.to_bytes()).expect("GL symbol names have no NUL");
                gl_display.get_proc_address(&cstr) as *const _
            })
            .expect("Failed to create renderer")
        };

        let mut app = App::new(renderer, size.width, size.height, self.settings.clone());
        if let Some(text) = self.initial_text.take() {
            app.submit_text(&text);
        }

        self.state = Some(AppState {
            window,
            gl_context,
            gl_surface,
            app,
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let (Some(width), Some(height)) =
                    (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                {
                    state.gl_surface.resize(&state.gl_context, width, height);
                    state.app.resize(size.width, size.height);
                    state.window.request_redraw();
                }
            }

            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let Some(key) = binding_key(&event.logical_key) else {
                    return;
                };
                let modifiers = Modifiers {
                    ctrl: self.modifiers.control_key(),
                    shift: self.modifiers.shift_key(),
                    alt: self.modifiers.alt_key(),
                };
                let key_event = KeyEvent::new(key, modifiers);
                let Some(action) = keybindings::resolve(&key_event, state.app.prompt_open())
                else {
                    return;
                };

                let result = state.app.execute(action);
                if result.should_exit() {
                    event_loop.exit();
                } else if result.needs_redraw() {
                    state.window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                state.app.render();
                state
                    .gl_surface
                    .swap_buffers(&state.gl_context)
                    .expect("Failed to swap buffers");
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // One tick per display refresh
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

//! Laser Dude entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use laser_dude::sim::GameEvent;

/// Log one frame event
fn log_event(event: &GameEvent) {
    match event {
        GameEvent::LaserFired { position } => {
            log::debug!("Fire! laser at ({:.0}, {:.0})", position.x, position.y)
        }
        GameEvent::EnemyDestroyed { enemy, position } => {
            log::info!("Enemy {} destroyed at ({:.0}, {:.0})", enemy, position.x, position.y)
        }
        GameEvent::PlayerHit { enemy, position } => {
            log::info!("Dude hit by enemy {} at ({:.0}, {:.0})", enemy, position.x, position.y)
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use laser_dude::engine::Key;
    use laser_dude::error::{GameError, Result};
    use laser_dude::renderer::RenderState;
    use laser_dude::settings::Settings;
    use laser_dude::sim::{GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
    }

    impl Game {
        fn new(settings: Settings, width: f32, height: f32, seed: u64) -> Self {
            Self {
                state: GameState::new(settings, width, height, seed),
                render_state: None,
            }
        }

        /// Advance and draw one animation frame
        fn frame(&mut self, time: f64) {
            tick(&mut self.state, time);
            for event in self.state.drain_events() {
                super::log_event(&event);
            }
            self.render();
        }

        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    fn window() -> Result<web_sys::Window> {
        web_sys::window().ok_or_else(|| GameError::Browser("no window".into()))
    }

    /// Logical (CSS pixel) canvas size, falling back to the configured size
    fn canvas_size(canvas: &HtmlCanvasElement, settings: &Settings) -> (f32, f32) {
        let w = canvas.client_width();
        let h = canvas.client_height();
        if w > 0 && h > 0 {
            (w as f32, h as f32)
        } else {
            (settings.canvas_width, settings.canvas_height)
        }
    }

    /// Size the canvas backing store for the device pixel ratio
    fn fit_canvas(canvas: &HtmlCanvasElement, width: f32, height: f32, dpr: f64) -> (u32, u32) {
        let pw = ((width as f64 * dpr) as u32).max(1);
        let ph = ((height as f64 * dpr) as u32).max(1);
        canvas.set_width(pw);
        canvas.set_height(ph);
        (pw, ph)
    }

    pub async fn run() -> Result<()> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Laser Dude starting...");

        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| GameError::Browser("no document".into()))?;

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_elements_by_tag_name("canvas")
            .item(0)
            .ok_or_else(|| GameError::Browser("no canvas element".into()))?
            .dyn_into()
            .map_err(|_| GameError::Browser("first canvas is not a canvas".into()))?;

        let settings = Settings::load();
        settings.validate()?;
        // Write the effective settings back to LocalStorage
        if let Err(e) = settings.save() {
            log::warn!("{}", e);
        }

        let (width, height) = canvas_size(&canvas, &settings);
        let (pw, ph) = fit_canvas(&canvas, width, height, window.device_pixel_ratio());

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let game = Rc::new(RefCell::new(Game::new(settings, width, height, seed)));
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| GameError::Graphics(format!("surface creation failed: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| GameError::Graphics(format!("no adapter: {e}")))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, pw, ph).await?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&window, &canvas, game.clone());
        setup_resize(&window, canvas, game.clone());

        request_animation_frame(game);

        log::info!("Laser Dude running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) {
        // Keyboard: default action is stopped for game keys only
        for (kind, down) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.key_code();
                if Key::from_code(code).is_some() {
                    event.stop_propagation();
                    event.prevent_default();
                }
                game.borrow_mut().state.scene.input.set_key(code, down);
            });
            let _ = window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse buttons and movement
        for (kind, button) in [("mousedown", Some(true)), ("mouseup", Some(false)), ("mousemove", None)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let input = &mut g.state.scene.input;
                if let Some(down) = button {
                    input.set_mouse_button(down);
                }
                input.set_mouse_position(event.offset_x() as f32, event.offset_y() as f32);
                event.stop_propagation();
                event.prevent_default();
            });
            let _ = canvas.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Focus lost: keyup events won't arrive, so drop held keys
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().state.scene.input.clear();
                log::info!("Input cleared (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(window: &web_sys::Window, canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let mut g = game.borrow_mut();
            let (width, height) = canvas_size(&canvas, &g.state.settings);
            let (pw, ph) = fit_canvas(&canvas, width, height, window.device_pixel_ratio());
            g.state.scene.resize(width, height);
            if let Some(ref mut render_state) = g.render_state {
                render_state.resize(pw, ph);
            }
            log::info!("Canvas resized to {}x{}", width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Laser Dude failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Laser Dude (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let settings = laser_dude::Settings::load();
    if let Err(e) = settings.validate() {
        log::error!("{}", e);
        std::process::exit(1);
    }

    let summary = headless::run(settings, 10.0);
    println!(
        "{} frames: {} shots, {} enemies destroyed, {} hits taken",
        summary.frames, summary.shots, summary.destroyed, summary.hits
    );
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use laser_dude::Settings;
    use laser_dude::engine::Key;
    use laser_dude::sim::{GameEvent, GameState, tick};

    /// Timestamp step for a 60 Hz display
    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[derive(Debug, Default)]
    pub struct Summary {
        pub frames: u64,
        pub shots: usize,
        pub destroyed: usize,
        pub hits: usize,
    }

    /// Arrow key held during the given second of the demo
    fn scripted_key(second: u64) -> Key {
        match second % 4 {
            0 => Key::Up,
            1 => Key::Right,
            2 => Key::Down,
            _ => Key::Left,
        }
    }

    /// Play `seconds` of game time with a scripted input, firing throughout
    pub fn run(settings: Settings, seconds: f64) -> Summary {
        let seed = settings.seed.unwrap_or(0x1a5e_d00d);
        let (w, h) = (settings.canvas_width, settings.canvas_height);
        let mut state = GameState::new(settings, w, h, seed);
        let mut summary = Summary::default();

        state.scene.input.press(Key::Space);
        let frames = (seconds * 1000.0 / FRAME_MS) as u64;

        for frame in 0..frames {
            let time = frame as f64 * FRAME_MS;
            let second = (time / 1000.0) as u64;

            for key in [Key::Up, Key::Right, Key::Down, Key::Left] {
                state.scene.input.release(key);
            }
            state.scene.input.press(scripted_key(second));

            tick(&mut state, time);
            for event in state.drain_events() {
                super::log_event(&event);
                match event {
                    GameEvent::LaserFired { .. } => summary.shots += 1,
                    GameEvent::EnemyDestroyed { .. } => summary.destroyed += 1,
                    GameEvent::PlayerHit { .. } => summary.hits += 1,
                }
            }
        }

        summary.frames = state.frame;
        summary
    }

}

//! Horse Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use horse_dash::persistence::LocalStorageStore;
    use horse_dash::platform::{Clock, PerformanceClock, SwipeTracker, key_to_direction, viewport};
    use horse_dash::renderer::CanvasRenderer;
    use horse_dash::{Command, FrameResult, Game, Settings};

    /// Page-level state shared by the frame callback and the event closures
    struct App {
        game: Game<LocalStorageStore, CanvasRenderer>,
        canvas: HtmlCanvasElement,
        swipe: SwipeTracker,
        clock: PerformanceClock,
        /// A requestAnimationFrame chain is pending
        loop_active: bool,
    }

    impl App {
        /// Size the canvas to the window and return the arena side.
        /// Resizing a canvas also clears it.
        fn resize_canvas(&self) -> i32 {
            let margin = self.game.session.settings.viewport_margin;
            let side = viewport::measure(margin).unwrap_or(0);
            self.canvas.set_width(side as u32);
            self.canvas.set_height(side as u32);
            side
        }

        /// Apply a command, restarting (and re-measuring) if the game is over.
        /// Returns true when the frame loop needs to be started.
        fn command(&mut self, command: Command) -> bool {
            let side = if self.game.is_over() {
                self.resize_canvas()
            } else {
                self.game.session.arena.side
            };
            let now = self.clock.now_ms();
            self.game.handle(command, side, now) && !self.loop_active
        }

        /// Start over at the current window size
        fn restart(&mut self) -> bool {
            let side = self.resize_canvas();
            let now = self.clock.now_ms();
            self.game.start(side, now);
            !self.loop_active
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Horse Dash starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };
        let Some(renderer) = CanvasRenderer::new(&canvas) else {
            log::error!("Canvas has no 2D context");
            return;
        };

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or(js_sys::Date::now() as u64);
        let clock = PerformanceClock;

        let side = viewport::measure(settings.viewport_margin).unwrap_or(0);
        canvas.set_width(side as u32);
        canvas.set_height(side as u32);

        let game = Game::new(
            settings,
            side,
            seed,
            clock.now_ms(),
            LocalStorageStore,
            renderer,
        );
        log::info!("Game initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App {
            game,
            canvas,
            swipe: SwipeTracker::new(),
            clock,
            loop_active: false,
        }));

        setup_input_handlers(app.clone());
        setup_resize_handler(app.clone());
        start_loop(app);

        log::info!("Horse Dash running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let command = match key_to_direction(&event.code()) {
                    Some(direction) => {
                        event.prevent_default();
                        Command::Turn(direction)
                    }
                    None => Command::Poke,
                };
                let restart = app.borrow_mut().command(command);
                if restart {
                    start_loop(app.clone());
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start: begin a swipe, or restart after game over
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let mut a = app.borrow_mut();
                if a.game.is_over() {
                    let restart = a.command(Command::Poke);
                    drop(a);
                    if restart {
                        start_loop(app.clone());
                    }
                    return;
                }
                if let Some(touch) = event.touches().get(0) {
                    a.swipe
                        .begin(Vec2::new(touch.client_x() as f32, touch.client_y() as f32));
                }
            });
            let _ = window
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end: one direction per gesture. Only touchstart restarts.
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let Some(touch) = event.changed_touches().get(0) else {
                    return;
                };
                let mut a = app.borrow_mut();
                let end = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
                let current = a.game.session.actor.direction;
                let settings = a.game.session.settings.clone();
                if let Some(direction) = a.swipe.end(end, current, &settings) {
                    a.game.steer(direction);
                }
            });
            let _ = window
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// A resize starts a new game at the new size
    fn setup_resize_handler(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let app_ref = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let restart = app_ref.borrow_mut().restart();
            if restart {
                start_loop(app_ref.clone());
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn start_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().loop_active = true;
        request_animation_frame(app);
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let result = app.borrow_mut().game.frame(time);
        match result {
            FrameResult::Continue => request_animation_frame(app),
            FrameResult::Stop(message) => {
                app.borrow_mut().loop_active = false;
                log::info!("{}", message);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Horse Dash (native) starting...");
    log::info!("Native mode plays a headless autopilot demo - use `trunk serve` for the web version");

    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless autopilot session on a synthetic 60 Hz clock
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use horse_dash::persistence::MemoryStore;
    use horse_dash::platform::{Clock, ManualClock};
    use horse_dash::renderer::CommandRecorder;
    use horse_dash::sim::choose_direction;
    use horse_dash::{Command, FrameResult, Game, Settings};

    const ARENA_SIDE: i32 = 600;
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Ten minutes of play
    const MAX_FRAMES: u32 = 60 * 60 * 10;
    const LOOKAHEAD_SECS: f32 = 0.15;

    pub fn run() {
        let settings = Settings::load();
        let seed = settings.seed.unwrap_or(42);
        let clock = ManualClock::new(0.0);

        let mut game = Game::new(
            settings,
            ARENA_SIDE,
            seed,
            clock.now_ms(),
            MemoryStore::new(),
            CommandRecorder::new(),
        );
        log::info!("Demo seed: {}", seed);

        let mut frames = 0;
        let message = loop {
            if frames >= MAX_FRAMES {
                break None;
            }
            let heading = choose_direction(&game.session, LOOKAHEAD_SECS);
            game.handle(Command::Turn(heading), ARENA_SIDE, clock.now_ms());

            frames += 1;
            if let FrameResult::Stop(message) = game.frame(clock.advance(FRAME_MS)) {
                break Some(message);
            }
        };

        match message {
            Some(message) => println!(
                "{} ({:?} after {} frames)",
                message,
                game.session.game_over_reason(),
                frames
            ),
            None => println!(
                "Still running after {} frames with score {}",
                frames,
                game.session.score()
            ),
        }
        log::info!("Recorded {} draw commands", game.renderer().len());
    }
}

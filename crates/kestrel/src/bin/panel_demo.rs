//! # Panel Demo
//!
//! Headless run of the demo panel: two overlapping buttons and the FPS
//! readout on a 1280x720 surface, driven by a scripted input session.
//!
//! Run with: `cargo run --bin panel_demo -- [ui.toml]`
//!
//! Set `RUST_LOG=kestrel_ui=trace` to watch every event being dispatched.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use kestrel::FrameLoop;
use kestrel_ui::{
    ButtonAction, ButtonStyle, ControlsManager, EventAction, FixedSurface, KeyAction,
    MonospaceMetrics, MouseButton, RenderRegistry, UIRenderer, UiConfig, Widget,
};

const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;

/// One scripted window callback, in window coordinates (Y down).
#[derive(Debug, Clone, Copy)]
enum Step {
    Move(f64, f64),
    Press(f64, f64),
    Release(f64, f64),
    Key(u32),
    Idle,
}

const SESSION: &[Step] = &[
    Step::Move(40.0, 690.0),
    Step::Idle,
    Step::Move(150.0, 690.0),
    Step::Press(150.0, 690.0),
    Step::Release(150.0, 690.0),
    Step::Move(60.0, 690.0),
    Step::Press(60.0, 690.0),
    Step::Release(60.0, 690.0),
    Step::Key(32),
    Step::Move(900.0, 100.0),
    Step::Press(900.0, 100.0),
    Step::Idle,
];

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("info,kestrel_ui=debug") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("info"),
        },
    };

    if let Err(err) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("panel_demo: tracing subscriber not installed: {err}");
    }
}

fn load_config() -> Result<UiConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("Loading UI configuration from {}", path);
            Ok(UiConfig::load(path)?)
        }
        None => Ok(UiConfig::default()),
    }
}

fn build(config: UiConfig) -> Result<FrameLoop, Box<dyn std::error::Error>> {
    let renderer = Rc::new(RefCell::new(UIRenderer::new()));
    let registry: Rc<RefCell<dyn RenderRegistry>> = renderer.clone();
    let mut manager = ControlsManager::with_config(
        Rc::new(FixedSurface::new(WIDTH, HEIGHT)),
        Rc::new(MonospaceMetrics::DEFAULT),
        registry,
        config,
    );

    let save = manager.create_button("Save", 20.0, 10.0, 200.0, 40.0, ButtonStyle::Curve)?;
    let quit = manager.create_button("Quit", 120.0, 10.0, 200.0, 40.0, ButtonStyle::Rectangle)?;

    save.borrow_mut().on(EventAction::LButtonRelease, |button, _| {
        tracing::info!("Save clicked (widget {})", button.id().raw());
        Ok(())
    });
    quit.borrow_mut().on(EventAction::LButtonRelease, |button, _| {
        tracing::info!("Quit clicked (widget {})", button.id().raw());
        button.set_title("Bye")?;
        Ok(())
    });
    quit.borrow_mut().on(EventAction::KeyPress, |_, event| {
        tracing::info!("Quit saw key {:?}", event.action());
        Ok(())
    });

    Ok(FrameLoop::new(manager, renderer).with_fps_panel()?)
}

fn feed(frame_loop: &mut FrameLoop, step: Step) {
    let manager = frame_loop.manager_mut();
    match step {
        Step::Move(x, y) => manager.on_cursor_move(x, y),
        Step::Press(x, y) => manager.on_mouse_button(MouseButton::Left, ButtonAction::Press, x, y),
        Step::Release(x, y) => {
            manager.on_mouse_button(MouseButton::Left, ButtonAction::Release, x, y);
        }
        Step::Key(code) => manager.on_key(KeyAction::Press, code),
        Step::Idle => {}
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = load_config()?;
    let mut frame_loop = build(config)?;
    tracing::info!(
        "Panel ready: {} widgets on {}x{}",
        frame_loop.manager().widget_count(),
        WIDTH,
        HEIGHT
    );

    let start = Instant::now();
    for (i, &step) in SESSION.iter().enumerate() {
        feed(&mut frame_loop, step);

        let now = start + Duration::from_millis(16 * (i as u64 + 1));
        match frame_loop.frame(now) {
            Ok(stats) => tracing::debug!(
                "Frame {}: {:?}, dt {:.3}s, {} commands",
                stats.frame,
                step,
                stats.dt,
                stats.commands
            ),
            Err(err) => tracing::error!("Frame failed: {}", err),
        }
    }

    let manager = frame_loop.manager();
    tracing::info!(
        "Session done: {} frames, docked {:?}, focus {:?}, {} events pending",
        frame_loop.frame_count(),
        manager.cursor_docked_control(),
        manager.focus(),
        manager.pending_events()
    );
    Ok(())
}

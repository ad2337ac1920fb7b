mod core;
mod platform;
mod radar;

use crate::core::config;
use crate::core::types::Color;
use crate::platform::renderer::Renderer;
use crate::platform::renderer_cairo::RendererCairo;
use crate::platform::window_x11::WindowX11;
use crate::radar::assets::RadarAssets;
use crate::radar::config::RadarConfig;
use crate::radar::frame::Mode;
use crate::radar::view::{Phase, RadarView};
use std::time::Instant;

struct Args {
    ripples: u32,
    mode: Mode,
    color: u32,
    cycle_ms: u64,
    assets_dir: String,
    size: i32,
}

fn parse_args() -> Args {
    let mut args = Args {
        ripples: config::DEFAULT_RIPPLE_COUNT,
        mode: Mode::ExpandOutward,
        color: config::DEFAULT_RIPPLE_COLOR,
        cycle_ms: config::DEFAULT_CYCLE_MS,
        assets_dir: "assets".to_string(),
        size: config::DEFAULT_SIZE,
    };

    let argv: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--ripples" if i + 1 < argv.len() => {
                i += 1;
                // Bad values become 0 and are rejected by config validation
                args.ripples = argv[i].parse().unwrap_or(0);
            }
            "--mode" if i + 1 < argv.len() => {
                i += 1;
                args.mode = match argv[i].as_str() {
                    "in" => Mode::ContractInward,
                    _ => Mode::ExpandOutward,
                };
            }
            "--color" if i + 1 < argv.len() => {
                i += 1;
                let hex = argv[i].trim_start_matches('#');
                args.color =
                    u32::from_str_radix(hex, 16).unwrap_or(config::DEFAULT_RIPPLE_COLOR);
            }
            "--cycle" if i + 1 < argv.len() => {
                i += 1;
                args.cycle_ms = argv[i].parse().unwrap_or(0);
            }
            "--assets" if i + 1 < argv.len() => {
                i += 1;
                args.assets_dir = argv[i].clone();
            }
            "--size" if i + 1 < argv.len() => {
                i += 1;
                args.size = argv[i].parse().unwrap_or(config::DEFAULT_SIZE);
            }
            _ => {}
        }
        i += 1;
    }

    args
}

fn main() {
    env_logger::init();

    let args = parse_args();

    let radar_config = RadarConfig {
        ripple_color: Color::from_hex(args.color, 1.0),
        ripple_count: args.ripples,
        mode: args.mode,
        cycle_ms: args.cycle_ms,
        tick_ms: config::DEFAULT_TICK_MS,
    };

    let assets = match RadarAssets::load(&args.assets_dir) {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("radar-view: {}", e);
            std::process::exit(1);
        }
    };

    let mut radar = match RadarView::new(radar_config, assets) {
        Ok(view) => view,
        Err(e) => {
            eprintln!("radar-view: {}", e);
            std::process::exit(1);
        }
    };

    // Create window
    let mut window = WindowX11::new();
    if !window.create(args.size, args.size, "Radar View") {
        eprintln!("Failed to create X11 window");
        std::process::exit(1);
    }

    // Create renderer
    let cr = match window.create_cairo_context() {
        Some(cr) => cr,
        None => {
            eprintln!("Failed to create Cairo context");
            std::process::exit(1);
        }
    };
    let mut renderer = RendererCairo::new(cr);

    radar.start();

    let mut last_time = Instant::now();

    // Main loop
    loop {
        if !window.poll_events() {
            break;
        }

        // Left click inside the radar disc, or Space, toggles the animation
        let (w, h) = (window.width() as f64, window.height() as f64);
        let mut toggle = window
            .take_clicks()
            .iter()
            .any(|c| c.button == 1 && radar.hit_test(c.x, c.y, w, h));
        let mut quit = false;
        for event in window.take_key_events() {
            if !event.pressed {
                continue;
            }
            match event.keycode {
                // Esc: quit
                9 => quit = true,
                // Ctrl+Q: quit
                24 if event.ctrl => quit = true,
                // Space: toggle
                65 => toggle = true,
                _ => {}
            }
        }
        if quit {
            break;
        }

        if toggle {
            if radar.is_running() {
                radar.stop();
            } else {
                radar.start();
            }
        }

        // Delta time
        let now = Instant::now();
        let dt = now.duration_since(last_time).as_secs_f64() * 1000.0;
        last_time = now;

        radar.update(dt);

        // Render
        if let Some(cr) = window.create_cairo_context() {
            renderer.set_context(cr);
        }

        renderer.begin_frame(window.width(), window.height());
        renderer.fill_rect(0.0, 0.0, w, h, Color::from_hex(config::BG_COLOR, 1.0));
        radar.render(&renderer, w, h);
        draw_hud(&renderer, &radar);
        renderer.end_frame();

        window.flush();

        std::thread::sleep(std::time::Duration::from_millis(config::FRAME_SLEEP_MS));
    }

    // The surface is going away; never leave the driver ticking
    radar.stop();
}

fn draw_hud(renderer: &dyn Renderer, radar: &RadarView) {
    let text = match radar.phase() {
        Phase::Stopped => format!("stopped  progress {:>2}", radar.progress()),
        Phase::Running => format!("ripple  progress {:>2}", radar.progress()),
        Phase::Scanning => format!(
            "scanning  progress {:>2}  sweep {:>3}",
            radar.progress(),
            radar.rotate_degree()
        ),
    };
    renderer.draw_text(12.0, 10.0, &text, 12.0, Color::from_hex(config::HUD_TEXT, 0.9));
}

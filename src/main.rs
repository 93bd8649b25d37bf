// What you SEE:
// • A white disk follows the mouse; a second white disk stays put.
// • The two external tangents run from the moving disk past the fixed one
//   to the window edge, and the wedge between them (beyond the fixed disk)
//   is filled light blue.
// • S saves the current frame as PNG. ESC or closing the window quits.

mod config;
mod draw;
mod error;
mod fill;
mod raster;
mod scene;
mod snapshot;
mod tangent;
mod types;

use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{debug, error, info, warn};

use config::Args;
use draw::{Drawer, InputEvent};
use error::Error;
use scene::TangentRenderer;
use snapshot::save_png;
use types::{FrameBuffer, Palette};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    args.validate()?;

    /* --- Scene + screen buffer ---
       Visual: this is the image you actually see each frame. */
    let mut renderer = TangentRenderer::new(args.primary(), args.anchor(), Palette::default());
    let mut screen = FrameBuffer::new(args.width, args.height);

    /* --- Headless: one frame to disk, no window --- */
    if let Some(path) = &args.snapshot {
        let report = renderer.render(&mut screen);
        save_png(&screen, path)?;
        info!("wrote {} ({:?})", path.display(), report);
        return Ok(());
    }

    let mut drawer = Drawer::new(&args.title, args.width, args.height, args.fps)?;
    info!("window open: {}x{} @ {} fps", args.width, args.height, args.fps);
    debug!("primary {:?}, anchor {:?}", renderer.primary(), renderer.anchor());

    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut frame_no: u64 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    'frames: loop {
        /* 1) Drain input: quit, cursor moves, snapshot requests. */
        let mut want_snapshot = false;
        for event in drawer.poll_events() {
            match event {
                InputEvent::Quit => break 'frames,
                InputEvent::MouseMotion { x, y } => renderer.move_primary(x, y),
                InputEvent::Snapshot => want_snapshot = true,
            }
        }

        /* 2) Clear + redraw disks, tangents and the wedge. */
        let report = renderer.render(&mut screen);

        /* 3) Optional PNG of exactly what is about to be shown. */
        if want_snapshot {
            let path = args.snapshot_dir.join(format!("tangents-{frame_no}.png"));
            match save_png(&screen, &path) {
                Ok(()) => info!("saved {}", path.display()),
                Err(e) => warn!("snapshot failed: {e}"),
            }
        }

        /* 4) Present to the window. */
        drawer.present(&screen)?;
        frame_no += 1;

        /* 5) FPS once per second (RUST_LOG=debug). */
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            debug!("FPS: {:.1} | last frame: {:?}", frames_this_second as f32 / secs, report);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    info!("window closed after {frame_no} frames");
    Ok(())
}

//! Render a single normal UI frame from a measurement snapshot.
//!
//! Run with: cargo run --example render_frame -- out.png

use std::path::Path;

use gc9307_preview::color;
use gc9307_preview::normal_ui::{NormalUiPort, NormalUiSnapshot};
use gc9307_preview::png::write_png_rgb;
use gc9307_preview::{frame, TileLayout};

fn main() -> Result<(), gc9307_preview::Error> {
    let out = std::env::args().nth(1).unwrap_or_else(|| "gc9307-frame.png".to_string());

    let snapshot = NormalUiSnapshot {
        usb_a: NormalUiPort::present(5_120_000, 1_480_000, 7_577_600),
        usb_c: NormalUiPort::not_present(),
    };
    let layout = TileLayout::NORMAL_UI;
    let canvas = frame::render(&layout, &snapshot.lines()?, color::BLACK)?;

    let bytes = write_png_rgb(Path::new(&out), canvas.as_bytes(), canvas.width(), canvas.height())?;
    println!("Wrote {out} ({bytes} bytes)");
    Ok(())
}

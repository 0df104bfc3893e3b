//! Render a custom preview set described in YAML.
//!
//! Run with: cargo run --example custom_set -- /tmp/gc9307-demo
//!
//! Writes one compact toast frame and one buzzer clip under the given root
//! (default: a `gc9307-demo` directory in the system temp dir).

use std::path::PathBuf;

use gc9307_preview::{manifest_json, PreviewConfig, RenderConfig};

const YAML: &str = r##"
out_dir: images
layout: compact-toast
frames:
  - name: gc9307-ota-progress.png
    pad: true
    rows:
      - "OTA 42/100"
      - text: "DO NOT UNPLUG"
        color: "#FF9800"
      - ""
audio_dir: audio
tone:
  duty_pct: 8
clips:
  - name: ota-done
    segments:
      - { kind: tone, ms: 100 }
      - { kind: silence, ms: 120 }
"##;

fn main() -> Result<(), gc9307_preview::Error> {
    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("gc9307-demo"));

    let config = PreviewConfig::from_yaml(YAML)?;
    let written = config.generate(&RenderConfig::default().with_root(&root))?;

    println!("{}", manifest_json(&written)?);
    Ok(())
}

use std::path::Path;

use gc9307_preview::assets::{
    ACTION_AUDIO_DIR, ACTION_IMAGES_DIR, NETWORK_TOAST_DIR, NORMAL_UI_DIR,
};
use gc9307_preview::{color, generate_all, AssetKind, BuiltinSet, Error, Rgb, RenderConfig};

fn decode(path: &Path) -> image::RgbImage {
    let img = image::open(path).unwrap();
    assert_eq!(img.color(), image::ColorType::Rgb8);
    img.into_rgb8()
}

fn rgb_at(img: &image::RgbImage, x: u32, y: u32) -> Rgb {
    let [r, g, b] = img.get_pixel(x, y).0;
    Rgb::new(r, g, b)
}

fn le_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
}

#[test]
fn test_generate_all_layout_on_disk() {
    let root = tempfile::tempdir().unwrap();
    let config = RenderConfig::default().with_root(root.path());
    let written = generate_all(&config).unwrap();

    let pngs = written.iter().filter(|a| a.kind == AssetKind::Png).count();
    let wavs = written.iter().filter(|a| a.kind == AssetKind::Wav).count();
    assert_eq!(pngs, 3 + 2 + 12);
    assert_eq!(wavs, 2 + 6);

    for asset in &written {
        assert!(asset.path.starts_with(root.path()));
        assert_eq!(std::fs::metadata(&asset.path).unwrap().len() as usize, asset.bytes);
    }

    for dir in [NORMAL_UI_DIR, NETWORK_TOAST_DIR, ACTION_IMAGES_DIR, ACTION_AUDIO_DIR] {
        assert!(root.path().join(dir).is_dir(), "missing {dir}");
    }
}

#[test]
fn test_normal_ui_pixels() {
    let root = tempfile::tempdir().unwrap();
    let config = RenderConfig::default().with_root(root.path());
    BuiltinSet::NormalUi.generate(&config).unwrap();
    let dir = root.path().join(NORMAL_UI_DIR);

    let normal = decode(&dir.join("gc9307-normal-ui-preview-normal.png"));
    assert_eq!(normal.dimensions(), (320, 172));
    assert_eq!(rgb_at(&normal, 0, 0), color::BLACK);
    // Top bar of the leading '5' in tile (0, 0)
    assert_eq!(rgb_at(&normal, 7, 22), color::OK_VOLTAGE);
    assert_eq!(rgb_at(&normal, 7 + 17, 22 + 3), color::OK_VOLTAGE);

    // Middle bar of the leading '-' in "--.--V"
    let absent = decode(&dir.join("gc9307-normal-ui-preview-not-present.png"));
    assert_eq!(rgb_at(&absent, 7, 22 + 12), color::NOT_PRESENT);
    assert_eq!(rgb_at(&absent, 7, 22), color::BLACK);
}

#[test]
fn test_network_toast_pixels() {
    let root = tempfile::tempdir().unwrap();
    let config = RenderConfig::default().with_root(root.path());
    BuiltinSet::NetworkToast.generate(&config).unwrap();

    let img = decode(
        &root
            .path()
            .join(NETWORK_TOAST_DIR)
            .join("gc9307-network-toast-connected.png"),
    );
    assert_eq!(img.dimensions(), (320, 172));
    // Top bar of 'I' in tile (0, 0): grid at (0, 38), glyph inset (2, 4)
    assert_eq!(rgb_at(&img, 2, 42), color::INFO);
    assert_eq!(rgb_at(&img, 13, 44), color::INFO);
    assert_eq!(rgb_at(&img, 1, 42), color::BLACK);
    // Bottom row of tiles is blank
    assert!((0..320).all(|x| rgb_at(&img, x, 38 + 64 + 16) == color::BLACK));
}

#[test]
fn test_action_audition_wav() {
    let root = tempfile::tempdir().unwrap();
    let config = RenderConfig::default().with_root(root.path());
    BuiltinSet::Actions.generate(&config).unwrap();
    let dir = root.path().join(ACTION_AUDIO_DIR);

    let confirm = std::fs::read(dir.join("action-confirm.wav")).unwrap();
    // 30 ms click + 120 ms tail at 44.1 kHz
    let samples = 1323 + 5292;
    assert_eq!(&confirm[..4], b"RIFF");
    assert_eq!(&confirm[8..12], b"WAVE");
    assert_eq!(le_u32(&confirm, 24), 44_100);
    assert_eq!(le_u32(&confirm, 40) as usize, samples * 2);
    assert_eq!(confirm.len(), 44 + samples * 2);

    let first = i16::from_le_bytes([confirm[44], confirm[45]]);
    assert_eq!(first, 8191);
    let last = i16::from_le_bytes([confirm[confirm.len() - 2], confirm[confirm.len() - 1]]);
    assert_eq!(last, 0);

    let deny = std::fs::read(dir.join("action-deny.wav")).unwrap();
    assert_eq!(le_u32(&deny, 40) as usize, (1323 + 1764 + 1323 + 5292) * 2);
}

#[test]
fn test_regeneration_is_deterministic() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let first = generate_all(&RenderConfig::default().with_root(a.path())).unwrap();
    generate_all(&RenderConfig::default().with_root(b.path())).unwrap();

    for asset in &first {
        let rel = asset.path.strip_prefix(a.path()).unwrap();
        assert_eq!(
            std::fs::read(&asset.path).unwrap(),
            std::fs::read(b.path().join(rel)).unwrap(),
            "{} differs between runs",
            rel.display()
        );
    }
}

#[test]
fn test_dry_run_leaves_root_empty() {
    let root = tempfile::tempdir().unwrap();
    let config = RenderConfig::default().with_root(root.path()).dry_run();
    let written = generate_all(&config).unwrap();
    assert_eq!(written.len(), 25);
    assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
}

#[test]
fn test_unwritable_root_is_io_error() {
    let root = tempfile::tempdir().unwrap();
    let file = root.path().join("not-a-dir");
    std::fs::write(&file, b"x").unwrap();

    let config = RenderConfig::default().with_root(&file);
    let err = BuiltinSet::Tones.generate(&config).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

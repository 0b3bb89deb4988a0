use std::path::{Path, PathBuf};

use super::*;

const FONT_DIRS: &[&str] = &[
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/Library/Fonts",
    "/System/Library/Fonts",
    "C:\\Windows\\Fonts",
];

/// Walks `dir` for the first `.ttf` that fontdue can parse.
fn find_ttf(dir: &Path, depth: usize) -> Option<Vec<u8>> {
    if depth == 0 {
        return None;
    }
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .collect();
    entries.sort();
    for path in &entries {
        let is_ttf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ttf"));
        if is_ttf {
            if let Ok(data) = std::fs::read(path) {
                if parse_font(&data).is_ok() {
                    return Some(data);
                }
            }
        }
    }
    entries
        .iter()
        .filter(|p| p.is_dir())
        .find_map(|p| find_ttf(p, depth - 1))
}

/// Any TrueType font installed on the machine, or `None` on bare systems.
fn system_font() -> Option<Vec<u8>> {
    FONT_DIRS.iter().find_map(|dir| find_ttf(Path::new(dir), 5))
}

fn label(family: FontFamily, style: FontStyle, size: f32) -> LabelFont {
    LabelFont::new(family, style, size)
}

#[test]
fn garbage_bytes_are_rejected() {
    let err = FontdueMeasurer::from_bytes(b"definitely not a font").unwrap_err();
    assert!(err.to_string().contains("invalid font data"));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing.ttf");
    let err = FontdueMeasurer::from_path(&path).unwrap_err();
    assert!(format!("{err:#}").contains("missing.ttf"));
}

#[test]
fn unparsable_file_reports_parse_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.ttf");
    std::fs::write(&path, b"\0\x01\0\0broken").expect("write");
    let err = FontdueMeasurer::from_path(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parsing font file"));
}

#[test]
fn registering_garbage_names_the_face() {
    let Some(data) = system_font() else {
        eprintln!("no system TrueType font found; skipping");
        return;
    };
    let mut measurer = FontdueMeasurer::from_bytes(&data).expect("system font");
    let err = measurer
        .register(FontFamily::FiraCode, FontStyle::Bold, b"nope")
        .unwrap_err();
    assert!(format!("{err:#}").contains("FiraCode Bold"));
}

#[test]
fn height_is_positive_and_grows_with_size() {
    let Some(data) = system_font() else {
        eprintln!("no system TrueType font found; skipping");
        return;
    };
    let measurer = FontdueMeasurer::from_bytes(&data).expect("system font");
    let mut previous = 0;
    for size in [6.0, 8.0, 10.0, 12.0, 14.0, 18.0, 24.0, 36.0, 72.0] {
        let h = measurer.preferred_height("XXX", &label(FontFamily::SystemUi, FontStyle::Regular, size));
        assert!(h >= 1, "size {size} gave {h}");
        assert!(h >= previous, "size {size} gave {h}, smaller than {previous}");
        previous = h;
    }
}

#[test]
fn height_is_rounded_up_line_span() {
    let Some(data) = system_font() else {
        eprintln!("no system TrueType font found; skipping");
        return;
    };
    let reference = parse_font(&data).expect("system font");
    let measurer = FontdueMeasurer::from_bytes(&data).expect("system font");
    for size in [9.0f32, 13.0, 17.5] {
        let lm = reference.horizontal_line_metrics(size).expect("line metrics");
        let expected = (lm.ascent - lm.descent).ceil().max(1.0) as u32;
        let got = measurer.preferred_height("XXX", &label(FontFamily::SystemUi, FontStyle::Regular, size));
        assert_eq!(got, expected, "size {size}");
    }
}

#[test]
fn unregistered_family_uses_primary_face() {
    let Some(data) = system_font() else {
        eprintln!("no system TrueType font found; skipping");
        return;
    };
    let measurer = FontdueMeasurer::from_bytes(&data).expect("system font");
    let primary = measurer.preferred_height("XXX", &label(FontFamily::SystemUi, FontStyle::Regular, 14.0));
    let other = measurer.preferred_height("XXX", &label(FontFamily::JetBrainsMono, FontStyle::Italic, 14.0));
    assert_eq!(primary, other);
}

#[test]
fn face_lookup_prefers_exact_style_then_regular() {
    let Some(data) = system_font() else {
        eprintln!("no system TrueType font found; skipping");
        return;
    };
    let mut measurer = FontdueMeasurer::from_bytes(&data).expect("system font");
    measurer
        .register(FontFamily::FiraCode, FontStyle::Regular, &data)
        .expect("register regular");
    measurer
        .register(FontFamily::FiraCode, FontStyle::Bold, &data)
        .expect("register bold");

    let bold = label(FontFamily::FiraCode, FontStyle::Bold, 12.0);
    let italic = label(FontFamily::FiraCode, FontStyle::Italic, 12.0);
    let other = label(FontFamily::JetBrainsMono, FontStyle::Bold, 12.0);

    assert!(std::ptr::eq(measurer.face_for(&bold), &measurer.faces[&(FontFamily::FiraCode, FontStyle::Bold)]));
    assert!(std::ptr::eq(
        measurer.face_for(&italic),
        &measurer.faces[&(FontFamily::FiraCode, FontStyle::Regular)]
    ));
    assert!(std::ptr::eq(measurer.face_for(&other), &measurer.primary));
}

use super::*;

#[test]
fn canvas_bounds_cover_full_area() {
    let c = Canvas::new(800, 400);
    assert_eq!(c.bounds(), Rect::new(0.0, 0.0, 800.0, 400.0));
}

#[test]
fn hex_parse_and_display_agree() {
    let c = Rgba8::from_hex("#7D9F35").unwrap();
    assert_eq!(c, Rgba8::rgb(0x7D, 0x9F, 0x35));
    assert_eq!(c.to_string(), "#7D9F35");

    let c = Rgba8::from_hex("00000080").unwrap();
    assert_eq!(c.a, 0x80);
    assert_eq!(c.to_string(), "#00000080");
}

#[test]
fn hex_parse_rejects_malformed() {
    assert!(Rgba8::from_hex("#123").is_err());
    assert!(Rgba8::from_hex("#GG0000").is_err());
}

#[test]
fn opacity_rounds_to_nearest_byte() {
    assert_eq!(Rgba8::BLACK.with_opacity(0.5).a, 128);
    assert_eq!(Rgba8::BLACK.with_opacity(2.0).a, 255);
}

#[test]
fn premul_scales_color_channels() {
    assert_eq!(Rgba8::rgba(255, 128, 0, 255).to_premul(), [255, 128, 0, 255]);
    assert_eq!(Rgba8::rgba(255, 255, 255, 0).to_premul(), [0, 0, 0, 0]);
    assert_eq!(Rgba8::rgba(255, 0, 0, 128).to_premul(), [128, 0, 0, 128]);
}

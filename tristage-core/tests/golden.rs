//! Pixel-exact regression of the reference pyramid at 0 degrees, 400x400.

use tristage_core::{
    render_frame, render_sequence, AngleSweep, Axonometric, Canvas, Color, Mesh, RenderConfig,
    ScreenPoint,
};

/// FNV-1a over the packed RGB bytes.
fn digest(canvas: &Canvas) -> u64 {
    canvas
        .to_rgb_bytes()
        .iter()
        .fold(0xcbf2_9ce4_8422_2325, |hash, &byte| {
            (hash ^ byte as u64).wrapping_mul(0x0000_0100_0000_01b3)
        })
}

fn reference_frame() -> tristage_core::Frame {
    render_frame(&Mesh::pyramid(), 0.0, &RenderConfig::default())
}

#[test]
fn projected_vertices() {
    let points = Axonometric::for_canvas(400).project_mesh(&Mesh::pyramid(), 0.0);
    assert_eq!(
        points,
        vec![
            ScreenPoint::new(200, 80),
            ScreenPoint::new(26, 280),
            ScreenPoint::new(200, 180),
            ScreenPoint::new(286, 330),
        ]
    );
}

#[test]
fn edges_stage_golden() {
    let frame = reference_frame();
    assert_eq!(frame.edges.lit_pixel_count(), 1126);
    assert_eq!(frame.edges.get_pixel(200, 80).unwrap(), Color::new(255, 100, 127));
    assert_eq!(digest(&frame.edges), 0xe4a3_447e_ed1d_3cba);
}

#[test]
fn filled_stage_golden() {
    let frame = reference_frame();
    assert_eq!(frame.filled.lit_pixel_count(), 30556);
    assert_eq!(frame.filled.get_pixel(200, 200).unwrap(), Color::new(71, 71, 142));
    assert_eq!(frame.filled.get_pixel(150, 200).unwrap(), Color::new(83, 83, 125));
    assert_eq!(frame.filled.get_pixel(60, 270).unwrap(), Color::new(94, 94, 189));
    assert_eq!(digest(&frame.filled), 0x1a43_0164_3697_9769);
}

#[test]
fn filtered_stage_golden() {
    let frame = reference_frame();
    assert_eq!(frame.filtered.lit_pixel_count(), 30556);
    // centre pixel has mask 0
    assert_eq!(frame.filtered.get_pixel(200, 200).unwrap(), Color::new(71, 71, 142));
    assert_eq!(frame.filtered.get_pixel(150, 200).unwrap(), Color::new(83, 87, 124));
    assert_eq!(frame.filtered.get_pixel(60, 270).unwrap(), Color::new(97, 113, 164));
    assert_eq!(digest(&frame.filtered), 0xce3a_a09b_b299_eb75);
}

#[test]
fn triptych_concatenates_stages() {
    let frame = reference_frame();
    let triptych = frame.triptych();
    assert_eq!((triptych.width(), triptych.height()), (1200, 400));
    assert_eq!(triptych.get_pixel(200, 80), Some(Color::new(255, 100, 127)));
    assert_eq!(triptych.get_pixel(400 + 200, 200), Some(Color::new(71, 71, 142)));
    assert_eq!(triptych.get_pixel(800 + 150, 200), Some(Color::new(83, 87, 124)));
}

#[test]
fn rendering_is_repeatable() {
    let mesh = Mesh::pyramid();
    let config = RenderConfig::default();
    let a = render_frame(&mesh, 120.0, &config);
    let b = render_frame(&mesh, 120.0, &config);
    assert_eq!(a.triptych().as_bytes(), b.triptych().as_bytes());
}

#[test]
fn parallel_sweep_matches_reference_frame() {
    let frames = render_sequence(&Mesh::pyramid(), &AngleSweep::full_turn(), &RenderConfig::default());
    assert_eq!(frames.len(), 45);
    assert!(frames.windows(2).all(|w| w[0].angle < w[1].angle));
    assert_eq!(digest(&frames[0].filled), 0x1a43_0164_3697_9769);
}

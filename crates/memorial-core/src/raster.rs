//! CPU rasterizer for exported cards.
//!
//! Draws the card silhouette filled with the stone color on a transparent
//! canvas, then the inscription rule, weathering, cracks and blood drip.
//! Text is not typeset.

use image::{Rgba, RgbaImage};

use crate::error::ExportError;
use crate::export::{CardSnapshot, Rasterizer};
use crate::stone::{EngravingColor, Shape, StoneColor};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const MOSS: [u8; 3] = [0x4a, 0x67, 0x41];
const BLOOD: Rgba<u8> = Rgba([0x8b, 0x00, 0x00, 0xff]);

/// Fills the shape silhouette; the default export rasterizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilhouetteRasterizer;

impl Rasterizer for SilhouetteRasterizer {
    fn rasterize(&self, card: &CardSnapshot, scale: u32) -> Result<RgbaImage, ExportError> {
        let scale = scale.max(1);
        let width = card.width_px.saturating_mul(scale);
        let height = card.effective_height().saturating_mul(scale);
        if width == 0 || height == 0 {
            return Err(ExportError::Rasterize(format!(
                "card has no area ({}x{})",
                width, height
            )));
        }

        let shape = card.shape.known().unwrap_or(Shape::Rectangle);
        let base = card.color.known().unwrap_or(StoneColor::GraniteGray).rgb();
        let engraving = card.engraving.known().unwrap_or(EngravingColor::Gold).rgb();
        let (w, h) = (width as f32, height as f32);

        let mut img = RgbaImage::from_pixel(width, height, TRANSPARENT);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
            if !covers(shape, px, py, w, h) {
                continue;
            }
            let ny = py / h;
            let mut rgb = shade(base, 1.0 - 0.15 * ny);

            if !card.name.is_empty() && on_inscription_rule(px, py, w, h) {
                rgb = engraving;
            }
            if card.mossy && ny > 0.82 {
                rgb = blend(rgb, MOSS, 0.6);
            }
            if card.cracked && on_crack(px, py, w, h, scale as f32) {
                rgb = shade(rgb, 0.3);
            }
            *pixel = Rgba([rgb[0], rgb[1], rgb[2], 0xff]);
        }

        if card.dripping {
            draw_drips(&mut img, shape, scale);
        }

        Ok(img)
    }
}

/// Whether the silhouette of `shape` covers pixel center (`x`, `y`) on a `w` by `h` canvas.
pub fn covers(shape: Shape, x: f32, y: f32, w: f32, h: f32) -> bool {
    let cx = w / 2.0;
    match shape {
        Shape::Rectangle => true,
        Shape::Arched => {
            let r = w / 2.0;
            y >= r || (x - cx).powi(2) + (y - r).powi(2) <= r * r
        }
        Shape::Oval => {
            let (rx, ry) = (w / 2.0, h / 2.0);
            ((x - cx) / rx).powi(2) + ((y - h / 2.0) / ry).powi(2) <= 1.0
        }
        Shape::Cross => {
            let upright = (x - cx).abs() <= w / 6.0;
            let arm = y >= h * 0.18 && y <= h * 0.38;
            upright || arm
        }
        Shape::Heart => {
            let hx = (x / w - 0.5) * 2.4;
            let hy = (0.55 - y / h) * 2.4;
            let a = hx * hx + hy * hy - 1.0;
            a * a * a - hx * hx * hy * hy * hy <= 0.0
        }
    }
}

fn on_inscription_rule(x: f32, y: f32, w: f32, h: f32) -> bool {
    (y / h - 0.46).abs() < 0.008 && (x / w - 0.5).abs() < 0.3
}

/// A zigzag running down the upper left of the stone.
fn on_crack(x: f32, y: f32, w: f32, h: f32, thickness: f32) -> bool {
    let ny = y / h;
    if !(0.1..=0.6).contains(&ny) {
        return false;
    }
    let period = 0.08;
    let phase = (ny / period).fract();
    let tri = if phase < 0.5 { phase * 2.0 } else { 2.0 - phase * 2.0 };
    let crack_x = w * (0.3 + 0.08 * tri);
    (x - crack_x).abs() <= thickness
}

fn draw_drips(img: &mut RgbaImage, shape: Shape, scale: u32) {
    let (width, height) = img.dimensions();
    let (w, h) = (width as f32, height as f32);
    let drips = [(0.2, 0.12), (0.45, 0.2), (0.7, 0.09)];
    let half = (scale * 2) as f32;

    for (fx, len) in drips {
        let cx = w * fx;
        let Some(top) = (0..height).find(|&y| covers(shape, cx, y as f32 + 0.5, w, h)) else {
            continue;
        };
        let bottom = (top as f32 + h * len) as u32;
        for y in top..bottom.min(height) {
            for x in (cx - half).max(0.0) as u32..((cx + half) as u32).min(width) {
                img.put_pixel(x, y, BLOOD);
            }
        }
    }
}

fn shade(rgb: [u8; 3], factor: f32) -> [u8; 3] {
    rgb.map(|c| (c as f32 * factor).clamp(0.0, 255.0) as u8)
}

fn blend(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    [0, 1, 2].map(|i| (a[i] as f32 * (1.0 - t) + b[i] as f32 * t).round() as u8)
}

// SPDX-License-Identifier: MPL-2.0
//! Hero illustration: a generated SVG scene, an optional user-supplied image,
//! and a static placeholder block used whenever either cannot be shown.

use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, typography};
use iced::widget::{container, image, svg, Container, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};
use resvg::usvg;
use std::path::PathBuf;

const WIDTH: f32 = 400.0;
const HEIGHT: f32 = 240.0;
const SUN_CENTER: (f32, f32) = (300.0, 70.0);
const SUN_RADIUS: f32 = 34.0;
const RAY_COUNT: usize = 12;
const PANEL_COUNT: usize = 4;

/// What the hero region currently displays.
#[derive(Debug, Clone)]
pub enum Illustration {
    Generated(svg::Handle),
    Image(image::Handle),
    Placeholder,
}

impl Default for Illustration {
    fn default() -> Self {
        Self::generated()
    }
}

impl Illustration {
    /// Builds the generated scene, or the placeholder if it does not parse.
    #[must_use]
    pub fn generated() -> Self {
        let source = scene_svg();
        match parse(source.as_bytes()) {
            Ok(_) => Illustration::Generated(svg::Handle::from_memory(source.into_bytes())),
            Err(err) => {
                tracing::warn!(error = %err, "generated illustration is invalid, using placeholder");
                Illustration::Placeholder
            }
        }
    }

    /// Maps the outcome of [`load_hero_image`] to what should be displayed.
    #[must_use]
    pub fn from_load_result(result: Result<image::Handle>) -> Self {
        match result {
            Ok(handle) => Illustration::Image(handle),
            Err(err) => {
                tracing::warn!(error = %err, "hero image failed to load, using placeholder");
                Illustration::Placeholder
            }
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Illustration::Placeholder)
    }
}

fn parse(data: &[u8]) -> Result<usvg::Tree> {
    Ok(usvg::Tree::from_data(data, &usvg::Options::default())?)
}

fn hex(color: Color) -> String {
    let [r, g, b, _] = color.into_rgba8();
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Generates the hero scene: sky, sun with rays, ground and a row of panels.
#[must_use]
pub fn scene_svg() -> String {
    let (cx, cy) = SUN_CENTER;
    let ground_y = HEIGHT * 0.72;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    );
    svg.push_str(&format!(
        r#"<defs><linearGradient id="sky" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="{}"/><stop offset="1" stop-color="{}"/></linearGradient></defs>"#,
        hex(palette::SKY_500),
        hex(palette::SUN_300),
    ));
    svg.push_str(&format!(
        r#"<rect width="{WIDTH}" height="{HEIGHT}" fill="url(#sky)"/>"#
    ));
    svg.push_str(&rays(cx, cy, SUN_RADIUS + 8.0, SUN_RADIUS + 22.0));
    svg.push_str(&format!(
        r#"<circle cx="{cx}" cy="{cy}" r="{SUN_RADIUS}" fill="{}"/>"#,
        hex(palette::SUN_300)
    ));
    svg.push_str(&format!(
        r#"<rect x="0" y="{ground_y}" width="{WIDTH}" height="{}" fill="{}"/>"#,
        HEIGHT - ground_y,
        hex(palette::LEAF_500)
    ));
    for i in 0..PANEL_COUNT {
        svg.push_str(&panel(24.0 + (i as f32) * 80.0, ground_y - 34.0));
    }
    svg.push_str("</svg>");
    svg
}

/// Evenly spaced rays around (`cx`, `cy`) between the two radii.
fn rays(cx: f32, cy: f32, inner: f32, outer: f32) -> String {
    let sun = hex(palette::SUN_500);
    (0..RAY_COUNT)
        .map(|i| {
            let angle = (i as f32) * std::f32::consts::TAU / RAY_COUNT as f32;
            let (sin, cos) = angle.sin_cos();
            format!(
                r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{sun}" stroke-width="4" stroke-linecap="round"/>"#,
                cx + inner * cos,
                cy + inner * sin,
                cx + outer * cos,
                cy + outer * sin,
            )
        })
        .collect()
}

/// A tilted 64x40 panel at (`x`, `y`) with a 3x2 cell grid.
fn panel(x: f32, y: f32) -> String {
    const W: f32 = 64.0;
    const H: f32 = 40.0;
    let fill = hex(palette::PANEL_700);
    let grid = hex(palette::GRAY_200);
    let line = |x1: f32, y1: f32, x2: f32, y2: f32| {
        format!(
            r#"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="{grid}" stroke-width="1"/>"#
        )
    };

    let first_col = x + W / 3.0;
    let second_col = x + W * 2.0 / 3.0;
    format!(
        r#"<g transform="skewX(-12)"><rect x="{x}" y="{y}" width="{W}" height="{H}" rx="3" fill="{fill}"/>{}{}{}</g>"#,
        line(first_col, y, first_col, y + H),
        line(second_col, y, second_col, y + H),
        line(x, y + H / 2.0, x + W, y + H / 2.0),
    )
}

/// Square sun-only artwork, used for the window icon.
#[must_use]
pub fn sun_svg() -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 64 64">{}<circle cx="32" cy="32" r="15" fill="{}"/></svg>"#,
        rays(32.0, 32.0, 20.0, 29.0),
        hex(palette::SUN_300)
    )
}

/// Reads and decodes the configured hero image.
pub async fn load_hero_image(path: PathBuf) -> Result<image::Handle> {
    let bytes = tokio::fs::read(&path).await?;
    let decoded = image_rs::load_from_memory(&bytes)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Image("image has empty dimensions".into()));
    }
    Ok(image::Handle::from_rgba(width, height, decoded.into_raw()))
}

/// Renders the illustration at the given `scale`.
pub fn view<'a, M: 'a>(
    illustration: &'a Illustration,
    i18n: &I18n,
    scale: f32,
) -> Element<'a, M> {
    let height = Length::Fixed(sizing::ILLUSTRATION_HEIGHT * scale);

    match illustration {
        Illustration::Generated(handle) => svg::Svg::new(handle.clone())
            .width(Length::Fill)
            .height(height)
            .into(),
        Illustration::Image(handle) => image::Image::new(handle.clone())
            .width(Length::Fill)
            .height(height)
            .into(),
        Illustration::Placeholder => Container::new(
            Text::new(i18n.tr("illustration-placeholder")).size(typography::BODY),
        )
        .width(Length::Fill)
        .height(height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(placeholder_style)
        .into(),
    }
}

fn placeholder_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        text_color: Some(palette.background.strong.text),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generated_scene_parses() {
        let tree = parse(scene_svg().as_bytes()).expect("scene should parse");
        assert_eq!(tree.size().width(), WIDTH);
        assert_eq!(tree.size().height(), HEIGHT);
    }

    #[test]
    fn generated_illustration_is_not_placeholder() {
        assert!(matches!(Illustration::generated(), Illustration::Generated(_)));
    }

    #[test]
    fn scene_contains_every_ray_and_panel() {
        let scene = scene_svg();
        assert_eq!(scene.matches("skewX(-12)").count(), PANEL_COUNT);
        assert_eq!(scene.matches("stroke-linecap").count(), RAY_COUNT);
        assert!(scene.ends_with("</svg>"));
    }

    #[test]
    fn sun_artwork_parses() {
        assert!(parse(sun_svg().as_bytes()).is_ok());
    }

    #[test]
    fn hex_formats_palette_colors() {
        assert_eq!(hex(palette::WHITE), "#ffffff");
        assert_eq!(hex(palette::BLACK), "#000000");
    }

    #[tokio::test]
    async fn missing_hero_image_falls_back_to_placeholder() {
        let dir = tempdir().expect("temp dir");
        let result = load_hero_image(dir.path().join("missing.png")).await;
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(Illustration::from_load_result(result).is_placeholder());
    }

    #[tokio::test]
    async fn undecodable_hero_image_falls_back_to_placeholder() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").expect("write");

        let result = load_hero_image(path).await;
        assert!(matches!(result, Err(Error::Image(_))));
        assert!(Illustration::from_load_result(result).is_placeholder());
    }

    #[tokio::test]
    async fn valid_hero_image_is_shown() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("hero.png");
        image_rs::RgbaImage::from_pixel(4, 2, image_rs::Rgba([255, 165, 0, 255]))
            .save(&path)
            .expect("write png");

        let result = load_hero_image(path).await;
        assert!(matches!(
            Illustration::from_load_result(result),
            Illustration::Image(_)
        ));
    }
}

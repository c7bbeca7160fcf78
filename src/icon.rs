// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the generated sun artwork at runtime to produce a RGBA icon
//! for the window title bar. Falls back to `None` if rendering fails.

use crate::ui::illustration;
use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized icon, in pixels.
const ICON_SIZE: u32 = 128;

/// Rasterize the sun artwork to a 128x128 RGBA buffer.
/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let (rgba, size) = render_rgba(ICON_SIZE)?;
    icon::from_rgba(rgba, size, size).ok()
}

fn render_rgba(target: u32) -> Option<(Vec<u8>, u32)> {
    let source = illustration::sun_svg();
    let tree = match usvg::Tree::from_data(source.as_bytes(), &usvg::Options::default()) {
        Ok(t) => t,
        Err(err) => {
            tracing::warn!(error = %err, "window icon artwork does not parse");
            return None;
        }
    };

    let orig_size = tree.size();
    let scale_x = target as f32 / orig_size.width();
    let scale_y = target as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(target, target)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some((pixmap.data().to_vec(), target))
}

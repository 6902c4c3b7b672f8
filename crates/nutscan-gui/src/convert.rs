use image::DynamicImage;

/// Longest texture side uploaded to the GPU; larger images are downscaled.
pub const MAX_TEXTURE_SIDE: u32 = 2048;

/// Convert a decoded image to an egui ColorImage (sRGBA, unmultiplied).
pub fn to_color_image(image: &DynamicImage) -> egui::ColorImage {
    let rgba = if image.width().max(image.height()) > MAX_TEXTURE_SIDE {
        image.thumbnail(MAX_TEXTURE_SIDE, MAX_TEXTURE_SIDE).to_rgba8()
    } else {
        image.to_rgba8()
    };
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

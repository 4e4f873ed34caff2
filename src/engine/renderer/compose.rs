//! Banner over background compositing.

use image::RgbaImage;

use super::banner::Banner;

/// Pastes `banner` over `background`, centred vertically at `x = 0`, using
/// the banner's own alpha as the mask.
///
/// Rows that fall outside the background are clipped. Returns the vertical
/// offset that was used.
pub fn composite(background: &mut RgbaImage, banner: &Banner) -> i64 {
    let offset_y = background.height() as i64 / 2 - banner.height() as i64 / 2;
    overlay(background, &banner.image, 0, offset_y);
    offset_y
}

/// Alpha-composites `top` onto `base` with its top-left corner at `(x, y)`.
pub fn overlay(base: &mut RgbaImage, top: &RgbaImage, x: i64, y: i64) {
    for (dx, dy, pixel) in top.enumerate_pixels() {
        let target_x = x + dx as i64;
        let target_y = y + dy as i64;
        if target_x < 0
            || target_y < 0
            || target_x >= base.width() as i64
            || target_y >= base.height() as i64
        {
            continue;
        }
        let alpha = pixel[3];
        match alpha {
            0 => {}
            255 => base.put_pixel(target_x as u32, target_y as u32, *pixel),
            _ => {
                let bg = base.get_pixel_mut(target_x as u32, target_y as u32);
                *bg = blend_pixel(bg, pixel);
            }
        }
    }
}

/// Blends `fg` onto `bg` by `fg`'s alpha.
///
/// Color channels are a plain lerp, the same as a masked paste, so a
/// transparent background still pulls the fill toward its own color.
/// Alpha is source-over, which keeps an opaque background opaque.
fn blend_pixel(bg: &image::Rgba<u8>, fg: &image::Rgba<u8>) -> image::Rgba<u8> {
    let a = fg[3] as u32;
    let inv = 255 - a;
    let mix = |f: u8, b: u8| ((f as u32 * a + b as u32 * inv + 127) / 255) as u8;
    image::Rgba([
        mix(fg[0], bg[0]),
        mix(fg[1], bg[1]),
        mix(fg[2], bg[2]),
        (a + (bg[3] as u32 * inv + 127) / 255) as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn banner(image: RgbaImage) -> Banner {
        Banner {
            image,
            line_origins: Vec::new(),
        }
    }

    #[test]
    fn banner_is_centred_vertically() {
        let mut bg = RgbaImage::from_pixel(10, 100, Rgba([200, 200, 200, 255]));
        let b = banner(RgbaImage::from_pixel(10, 20, Rgba([0, 0, 0, 255])));
        let offset = composite(&mut bg, &b);

        assert_eq!(offset, 40);
        assert_eq!(bg.get_pixel(5, 39).0, [200, 200, 200, 255]);
        assert_eq!(bg.get_pixel(5, 40).0, [0, 0, 0, 255]);
        assert_eq!(bg.get_pixel(5, 59).0, [0, 0, 0, 255]);
        assert_eq!(bg.get_pixel(5, 60).0, [200, 200, 200, 255]);
    }

    #[test]
    fn translucent_fill_blends_with_background() {
        let mut bg = RgbaImage::from_pixel(4, 4, Rgba([200, 100, 0, 255]));
        let b = banner(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 128])));
        composite(&mut bg, &b);
        assert_eq!(bg.get_pixel(0, 0).0, [100, 50, 0, 255]);
    }

    #[test]
    fn fill_over_transparent_background_lerps_color() {
        let mut bg = RgbaImage::from_pixel(2, 2, Rgba([10, 10, 10, 0]));
        let b = banner(RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 128])));
        composite(&mut bg, &b);
        assert_eq!(bg.get_pixel(1, 1).0, [5, 5, 5, 128]);
    }

    #[test]
    fn transparent_pixels_show_background() {
        let mut bg = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));
        let b = banner(RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 0])));
        composite(&mut bg, &b);
        assert_eq!(bg.get_pixel(2, 2).0, [1, 2, 3, 255]);
    }

    #[test]
    fn taller_banner_is_clipped() {
        let mut bg = RgbaImage::from_pixel(8, 10, Rgba([50, 50, 50, 255]));
        let b = banner(RgbaImage::from_pixel(8, 30, Rgba([255, 255, 255, 255])));
        let offset = composite(&mut bg, &b);
        assert_eq!(offset, -10);
        assert_eq!(bg.dimensions(), (8, 10));
        assert!(bg.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }
}

/// Axis-aligned rectangle in logical card pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.h / 2.0
    }

    /// Same rectangle grown by `by` on every side.
    pub fn inflate(&self, by: f64) -> Self {
        Self::new(self.x - by, self.y - by, self.w + 2.0 * by, self.h + 2.0 * by)
    }
}

/// Source region of a `src_w` x `src_h` image that fills a `dst_w` x `dst_h`
/// box without distortion, cropping the overflow evenly (CSS `object-fit:
/// cover`).
pub fn cover_crop(src_w: f64, src_h: f64, dst_w: f64, dst_h: f64) -> Rect {
    if src_w <= 0.0 || src_h <= 0.0 || dst_w <= 0.0 || dst_h <= 0.0 {
        return Rect::new(0.0, 0.0, src_w.max(0.0), src_h.max(0.0));
    }
    let scale = (dst_w / src_w).max(dst_h / src_h);
    let w = dst_w / scale;
    let h = dst_h / scale;
    Rect::new((src_w - w) / 2.0, (src_h - h) / 2.0, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_images_are_cropped_horizontally() {
        let crop = cover_crop(400.0, 200.0, 96.0, 128.0);
        assert_eq!(crop.h, 200.0);
        assert_eq!(crop.w, 150.0);
        assert_eq!(crop.x, 125.0);
        assert_eq!(crop.y, 0.0);
    }

    #[test]
    fn tall_images_are_cropped_vertically() {
        let crop = cover_crop(300.0, 800.0, 96.0, 128.0);
        assert_eq!(crop.w, 300.0);
        assert_eq!(crop.h, 400.0);
        assert_eq!(crop.y, 200.0);
    }

    #[test]
    fn degenerate_sizes_use_the_whole_source() {
        assert_eq!(cover_crop(0.0, 10.0, 96.0, 128.0), Rect::new(0.0, 0.0, 0.0, 10.0));
    }

    #[test]
    fn inflate_grows_every_side() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(r.inflate(2.0), Rect::new(8.0, 8.0, 24.0, 24.0));
        assert_eq!(r.center_x(), 20.0);
    }
}

pub(crate) mod decode;
pub(crate) mod media;

/// A decoded bitmap, straight RGBA8, at its natural size.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    pub rgba: image::RgbaImage,
}

impl LoadedImage {
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    pub fn natural_size(&self) -> kurbo::Size {
        kurbo::Size::new(f64::from(self.width()), f64::from(self.height()))
    }
}

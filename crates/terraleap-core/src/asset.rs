use std::collections::HashMap;

use crate::mask::Mask;

/// Handle a renderer uses to find the pixels behind a [`Frame`].
pub type ImageId = u32;

/// Named animation clips, e.g. `"run_left"` → frames.
pub type ClipMap = HashMap<String, Vec<Frame>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The store has no asset under this category/name.
    UnknownAsset { category: String, name: String },
    /// A required clip is absent from a loaded clip map.
    MissingClip(String),
    /// A clip exists but holds no frames.
    EmptyClip(String),
    /// Requested frame size is zero or does not divide the sheet.
    BadFrameSize { width: u32, height: u32 },
    /// Pixel buffer length does not match its dimensions.
    BufferSize { expected: usize, actual: usize },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAsset { category, name } => write!(f, "unknown asset: {category}/{name}"),
            Self::MissingClip(name) => write!(f, "missing animation clip: {name}"),
            Self::EmptyClip(name) => write!(f, "animation clip has no frames: {name}"),
            Self::BadFrameSize { width, height } => {
                write!(f, "bad frame size: {width}x{height}")
            },
            Self::BufferSize { expected, actual } => {
                write!(
                    f,
                    "pixel buffer size mismatch: expected {expected} bytes, got {actual}"
                )
            },
        }
    }
}

impl std::error::Error for AssetError {}

/// One drawable image plus its precomputed opaque-pixel mask.
///
/// The mask is computed once at load time and already reflects `scale` and
/// `flipped`, so collision never touches pixel buffers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub image: ImageId,
    /// Integer upscale the renderer applies when blitting.
    pub scale: u32,
    /// Renderer should mirror the image horizontally.
    pub flipped: bool,
    mask: Mask,
}

impl Frame {
    pub fn new(image: ImageId, mask: Mask) -> Self {
        Self {
            image,
            scale: 1,
            flipped: false,
            mask,
        }
    }

    pub fn from_rgba(image: ImageId, pixels: &RgbaImage) -> Result<Self, AssetError> {
        let mask = Mask::from_rgba(pixels.width, pixels.height, &pixels.pixels).ok_or(
            AssetError::BufferSize {
                expected: pixels.width as usize * pixels.height as usize * 4,
                actual: pixels.pixels.len(),
            },
        )?;
        Ok(Self::new(image, mask))
    }

    pub fn width(&self) -> u32 {
        self.mask.width()
    }

    pub fn height(&self) -> u32 {
        self.mask.height()
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn scale2x(&self) -> Self {
        Self {
            image: self.image,
            scale: self.scale * 2,
            flipped: self.flipped,
            mask: self.mask.scale2x(),
        }
    }

    pub fn mirrored(&self) -> Self {
        Self {
            image: self.image,
            scale: self.scale,
            flipped: !self.flipped,
            mask: self.mask.flipped_horizontal(),
        }
    }
}

/// Straight-alpha RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RgbaImage {
    /// Fully transparent image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, AssetError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(AssetError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Copy out a `w`x`h` region starting at `(x, y)`; pixels past the edge
    /// come out transparent.
    pub fn sub_image(&self, x: u32, y: u32, w: u32, h: u32) -> Self {
        let mut out = Self::new(w, h);
        for dy in 0..h {
            for dx in 0..w {
                let (sx, sy) = (x + dx, y + dy);
                if sx < self.width && sy < self.height {
                    out.put(dx, dy, self.pixel(sx, sy));
                }
            }
        }
        out
    }

    /// Slice a horizontal sprite strip into `frame_width`-wide frames.
    /// Trailing columns narrower than a frame are dropped.
    pub fn slice_strip(&self, frame_width: u32, frame_height: u32) -> Result<Vec<Self>, AssetError> {
        if frame_width == 0 || frame_height == 0 || frame_height > self.height {
            return Err(AssetError::BadFrameSize {
                width: frame_width,
                height: frame_height,
            });
        }
        Ok((0..self.width / frame_width)
            .map(|i| self.sub_image(i * frame_width, 0, frame_width, frame_height))
            .collect())
    }

    /// Make near-white pixels (every channel above `threshold`) transparent.
    /// Used for images shipped without an alpha channel.
    pub fn clear_light_background(&mut self, threshold: u8) {
        for px in self.pixels.chunks_exact_mut(4) {
            if px[0] > threshold && px[1] > threshold && px[2] > threshold {
                px.copy_from_slice(&[255, 255, 255, 0]);
            }
        }
    }
}

/// Source of pre-sliced frames. Consulted once at startup, never per tick.
pub trait AssetStore {
    /// Load every clip in `category/name`. With `mirrored`, each clip is
    /// registered as `<clip>_right` plus a flipped `<clip>_left`.
    fn load_animation_frames(
        &mut self,
        category: &str,
        name: &str,
        frame_width: u32,
        frame_height: u32,
        mirrored: bool,
    ) -> Result<ClipMap, AssetError>;

    /// Square terrain tile of `size` pixels.
    fn load_tile(&mut self, size: u32) -> Result<Frame, AssetError>;

    /// Single still image (HUD icons, background, goal).
    fn load_image(&mut self, category: &str, name: &str) -> Result<Frame, AssetError>;
}

/// Register `frames` under `clip`, adding the `_right`/`_left` pair when
/// `mirrored` is set.
pub fn insert_clip(map: &mut ClipMap, clip: &str, frames: Vec<Frame>, mirrored: bool) {
    if mirrored {
        let left = frames.iter().map(Frame::mirrored).collect();
        map.insert(format!("{clip}_right"), frames);
        map.insert(format!("{clip}_left"), left);
    } else {
        map.insert(clip.to_string(), frames);
    }
}

/// Look up a clip that must exist and be non-empty.
pub fn require_clip<'a>(map: &'a ClipMap, clip: &str) -> Result<&'a [Frame], AssetError> {
    match map.get(clip) {
        Some(frames) if frames.is_empty() => Err(AssetError::EmptyClip(clip.to_string())),
        Some(frames) => Ok(frames),
        None => Err(AssetError::MissingClip(clip.to_string())),
    }
}

//! goldenframe renders a golden-ratio decomposition overlay onto raster images.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: image bytes -> [`LoadedImage`] (straight RGBA8 at natural size)
//! 2. **Size**: natural size -> display panel (aspect kept) and golden panel (aspect forced to φ)
//! 3. **Decompose**: golden box + [`Orientation`] -> [`Decomposition`] (rectangles, squares, arcs)
//! 4. **Render**: [`PanelPlan`] display lists executed by the CPU backend into [`FrameRGBA`]s
//!
//! The decomposition is pure: the same rectangle and orientation always produce the same
//! steps. Orientation comes from the *original* image and is fixed for the whole decomposition.
//!
//! [`Session`] sequences overlapping loads so that only the newest one is presented.
#![forbid(unsafe_code)]

mod assets;
mod config;
mod foundation;
mod geometry;
mod layout;
mod pipeline;
mod render;
mod session;

pub use assets::LoadedImage;
pub use assets::decode::{ResizeFilter, decode_image, resize_to};
pub use assets::media::{admit_dropped, is_image_media_type, media_type_for_path};
pub use config::{OverlayStyle, RenderConfig, StrokeStyle};
pub use foundation::core::{BezPath, GOLDEN_RATIO, Orientation, Point, Rect, Rgba8, Size};
pub use foundation::error::{GoldenError, GoldenResult};
pub use geometry::decompose::{
    Corner, Decomposition, DecompositionStep, MAX_STEPS, MIN_SIDE, Side, SpiralArc, Square,
    StepRule, StopReason, decompose, step_rule,
};
pub use layout::sizing::{display_size, golden_box, golden_size, pixel_extent, ratio_label};
pub use pipeline::{CONVERTED_MESSAGE, Presentation, process_image, process_loaded};
pub use render::{FrameRGBA, render_overlay, render_resized};
pub use render::cpu::CpuBackend;
pub use render::plan::{DrawOp, PanelPlan, plan_overlay, plan_resized};
pub use session::{Completion, LoadTicket, Session, SessionState, Upload, UploadVia};

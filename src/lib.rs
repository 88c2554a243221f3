///////////////////////////////////////////////////////////////////////////////////////////////////
//
// Imports
//
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::{Data, ImageBuf, Widget, WidgetExt};

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Modules
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub mod config;
pub mod error;
pub mod fling;
pub mod geometry;
pub mod gesture;
pub mod pod;
pub mod quadrant;
pub mod rotation;
pub mod velocity;

pub use config::PodConfig;
pub use error::{load_pod_image, load_pod_image_file, PodError};
pub use gesture::{GestureState, PodGesture};
pub use pod::PodImage;
pub use quadrant::{Quadrant, QuadrantFlags};
pub use rotation::{RotationController, RotationData, RotationState};

///////////////////////////////////////////////////////////////////////////////////////////////////
//
// Pod
//
///////////////////////////////////////////////////////////////////////////////////////////////////
/// A spinnable round image bound to any data that carries a rotation.
pub fn pod<T: Data + RotationData>(image: ImageBuf, config: PodConfig) -> impl Widget<T> {
    PodImage::new(image).controller(RotationController::new(config))
}

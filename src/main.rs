use std::sync::Arc;

use druid::piet::ImageFormat;
use druid::widget::{Button, CrossAxisAlignment, Flex, Label, MainAxisAlignment};
use druid::{theme, AppLauncher, Color, Data, ImageBuf, Lens, LocalizedString, Widget, WidgetExt, WindowDesc};

use druid_color_thesaurus::*;

use druid_pod_rotation_widget::{load_pod_image_file, pod, PodConfig, RotationData, RotationState};

//////////////////////////////////////////////////////////////////////////////////////
// Constants
//////////////////////////////////////////////////////////////////////////////////////
pub const BACKGROUND: Color = black::ONYX;
pub const PATTERN_SIDE: usize = 256;

//////////////////////////////////////////////////////////////////////////////////////
//
// AppData
//
//////////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Data, Lens, PartialEq)]
pub struct AppData {
    pub rotation: RotationState,
}

impl RotationData for AppData {
    fn get_transform(&self) -> druid::Affine {
        self.rotation.transform
    }

    fn set_transform(&mut self, transform: druid::Affine) {
        self.rotation.transform = transform;
    }
}

//////////////////////////////////////////////////////////////////////////////////////
//
// Main
//
//////////////////////////////////////////////////////////////////////////////////////

fn main() {
    let image = match std::env::args().nth(1) {
        Some(path) => match load_pod_image_file(&path) {
            Ok(image) => image,
            Err(err) => {
                // The console logger is only installed once the app launches.
                eprintln!("{}, falling back to the built-in pattern", err);
                pattern_image(PATTERN_SIDE)
            }
        },
        None => pattern_image(PATTERN_SIDE),
    };

    let main_window = WindowDesc::new(make_ui(image))
        .window_size((420.0, 520.0))
        .title(LocalizedString::new("Pod Rotation"));

    let data = AppData {
        rotation: RotationState::new(),
    };

    AppLauncher::with_window(main_window)
        .configure_env(|env, _| {
            env.set(theme::WINDOW_BACKGROUND_COLOR, gray::DAVYS_GRAY);
            env.set(theme::TEXT_COLOR, white::ALABASTER)
        })
        .log_to_console()
        .launch(data)
        .expect("launch failed");
}

fn make_ui(image: ImageBuf) -> impl Widget<AppData> {
    Flex::column()
        .with_flex_child(pod(image, PodConfig::default()).padding(10.0), 1.0)
        .with_child(make_control_bar())
        .main_axis_alignment(MainAxisAlignment::SpaceAround)
        .cross_axis_alignment(CrossAxisAlignment::Center)
}

fn make_control_bar() -> impl Widget<AppData> {
    Flex::row()
        .with_child(Label::new(|data: &AppData, _: &_| {
            format!("Rotation: {:.1}°", data.rotation.angle())
        }))
        .with_default_spacer()
        .with_child(Button::new("Reset").on_click(|_ctx, data: &mut AppData, _env| {
            data.rotation.reset();
        }))
        .main_axis_alignment(MainAxisAlignment::SpaceBetween)
        .cross_axis_alignment(CrossAxisAlignment::Center)
        .must_fill_main_axis(true)
        .padding(5.0)
        .background(BACKGROUND)
}

/// Colour wheel with a marker stripe so the rotation is visible without an image file.
fn pattern_image(side: usize) -> ImageBuf {
    let mut pixels = vec![0u8; side * side * 4];
    let center = side as f64 / 2.0;

    for row in 0..side {
        for col in 0..side {
            let x = col as f64 + 0.5 - center;
            let y = center - (row as f64 + 0.5);
            let hue = y.atan2(x).to_degrees().rem_euclid(360.0);
            let marker = x > 0.0 && y.abs() < side as f64 / 32.0;

            let color = if marker {
                white::ALABASTER
            } else {
                Color::hlc(hue, 60.0, 50.0)
            };
            let (r, g, b, _) = color.as_rgba8();

            let offset = (row * side + col) * 4;
            pixels[offset..offset + 4].copy_from_slice(&[r, g, b, 0xff]);
        }
    }

    ImageBuf::from_raw(Arc::<[u8]>::from(pixels), ImageFormat::RgbaSeparate, side, side)
}

pub const TAG_HOVER_TRANSFORM: &str = "scale(1.1)";
pub const TAG_REST_TRANSFORM: &str = "scale(1)";
pub const TILT_REST_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

const CARD_SPEED_STEP: f64 = 10.0;
const ORB_SPEED_STEP: f64 = 0.02;
const TILT_DAMPING: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn from_inner(width: Option<f64>, height: Option<f64>) -> Self {
        Self {
            width: width.unwrap_or(1280.0),
            height: height.unwrap_or(720.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[allow(clippy::cast_precision_loss)]
fn speed_for(index: usize, step: f64) -> f64 {
    (index + 1) as f64 * step
}

pub fn floating_card_offset(index: usize, client_x: f64, client_y: f64, viewport: Viewport) -> (f64, f64) {
    let speed = speed_for(index, CARD_SPEED_STEP);
    let x = (client_x / viewport.width - 0.5) * speed;
    let y = (client_y / viewport.height - 0.5) * speed;
    (x, y)
}

pub fn orb_offset(index: usize, client_x: f64, client_y: f64, viewport: Viewport) -> (f64, f64) {
    let speed = speed_for(index, ORB_SPEED_STEP);
    let x = (client_x - viewport.width / 2.0) * speed;
    let y = (client_y - viewport.height / 2.0) * speed;
    (x, y)
}

pub fn translate_transform((x, y): (f64, f64)) -> String {
    format!("translate({x}px, {y}px)")
}

pub fn tilt_angles(client_x: f64, client_y: f64, rect: CardRect) -> (f64, f64) {
    let x = client_x - rect.left;
    let y = client_y - rect.top;
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;

    ((y - center_y) / TILT_DAMPING, (center_x - x) / TILT_DAMPING)
}

pub fn tilt_transform((rotate_x, rotate_y): (f64, f64)) -> String {
    format!("perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) translateY(-10px)")
}

pub fn tag_transform(hovered: bool) -> &'static str {
    if hovered {
        TAG_HOVER_TRANSFORM
    } else {
        TAG_REST_TRANSFORM
    }
}

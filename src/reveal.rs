pub const REVEAL_SELECTOR: &str = ".skill-card, .project-card, .contact-method, .coding-card";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

const HIDDEN_OPACITY: &str = "0";
const HIDDEN_TRANSFORM: &str = "translateY(30px)";
const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";
const SHOWN_OPACITY: &str = "1";
const SHOWN_TRANSFORM: &str = "translateY(0)";

pub trait StyleTarget {
    fn set_style(&self, property: &str, value: &str);
}

pub fn prepare_hidden<T: StyleTarget + ?Sized>(target: &T) {
    target.set_style("opacity", HIDDEN_OPACITY);
    target.set_style("transform", HIDDEN_TRANSFORM);
    target.set_style("transition", REVEAL_TRANSITION);
}

pub fn reveal_if_intersecting<T: StyleTarget + ?Sized>(target: &T, is_intersecting: bool) -> bool {
    if !is_intersecting {
        return false;
    }

    target.set_style("opacity", SHOWN_OPACITY);
    target.set_style("transform", SHOWN_TRANSFORM);
    true
}

pub fn disable_motion<'a, T, I>(targets: I) -> usize
where
    T: StyleTarget + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut count = 0;
    for target in targets {
        target.set_style("animation", "none");
        target.set_style("transition", "none");
        count += 1;
    }
    count
}

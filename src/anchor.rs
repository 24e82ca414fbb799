pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const ANCHOR_SCROLL_OFFSET: f64 = 80.0;

pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub trait AnchorView {
    fn offset_top_of(&self, id: &str) -> Option<f64>;
    fn smooth_scroll_to(&self, top: f64);
}

pub fn follow_anchor<V: AnchorView + ?Sized>(view: &V, href: &str) -> Option<f64> {
    let id = anchor_target_id(href)?;
    let top = view.offset_top_of(id)? - ANCHOR_SCROLL_OFFSET;
    view.smooth_scroll_to(top);
    Some(top)
}

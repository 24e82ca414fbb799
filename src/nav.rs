use std::cell::RefCell;

pub const SECTION_LOOKAHEAD: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    HamburgerClick,
    LinkClick,
    Escape,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn handle(&mut self, event: NavEvent) -> bool {
        self.open = match event {
            NavEvent::HamburgerClick => !self.open,
            NavEvent::LinkClick | NavEvent::Escape => false,
        };
        self.open
    }
}

pub fn focus_trap_target(key: &str, shift: bool, focused: Option<usize>, count: usize) -> Option<usize> {
    if key != "Tab" || count == 0 {
        return None;
    }

    let last = count - 1;
    match (shift, focused) {
        (true, Some(0)) => Some(last),
        (false, Some(index)) if index == last => Some(0),
        _ => None,
    }
}

pub trait NavView {
    fn set_menu_open(&self, open: bool);
    fn focusable_count(&self) -> usize;
    fn focused_index(&self) -> Option<usize>;
    fn focus(&self, index: usize);
}

pub struct NavController<V: NavView> {
    menu: RefCell<NavMenu>,
    view: V,
}

impl<V: NavView> NavController<V> {
    pub fn new(view: V) -> Self {
        Self {
            menu: RefCell::new(NavMenu::default()),
            view,
        }
    }

    pub fn is_open(&self) -> bool {
        self.menu.borrow().is_open()
    }

    pub fn dispatch(&self, event: NavEvent) {
        let open = self.menu.borrow_mut().handle(event);
        self.view.set_menu_open(open);
    }

    /// Returns `true` when focus was wrapped and the key's default action
    /// must be suppressed.
    pub fn trap_focus(&self, key: &str, shift: bool) -> bool {
        if !self.is_open() {
            return false;
        }

        match focus_trap_target(key, shift, self.view.focused_index(), self.view.focusable_count()) {
            Some(index) => {
                self.view.focus(index);
                true
            }
            None => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, scroll_y: f64) -> bool {
        let top = self.offset_top - SECTION_LOOKAHEAD;
        scroll_y > top && scroll_y <= top + self.height
    }
}

pub fn link_targets_section(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

/// Last matching section wins; with no match the previous id is kept.
#[derive(Clone, Debug, Default)]
pub struct ActiveLinkTracker {
    active: Option<String>,
}

impl ActiveLinkTracker {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn update(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
        if let Some(section) = sections.iter().rev().find(|section| section.contains(scroll_y)) {
            self.active = Some(section.id.clone());
        }
        self.active.as_deref()
    }
}

pub trait SectionView {
    fn scroll_y(&self) -> f64;
    fn sections(&self) -> Vec<SectionBounds>;
    fn mark_active(&self, section_id: &str);
}

pub struct ActiveLinkHighlighter<V: SectionView> {
    tracker: RefCell<ActiveLinkTracker>,
    view: V,
}

impl<V: SectionView> ActiveLinkHighlighter<V> {
    pub fn new(view: V) -> Self {
        Self {
            tracker: RefCell::new(ActiveLinkTracker::default()),
            view,
        }
    }

    pub fn refresh(&self) {
        let sections = self.view.sections();
        let mut tracker = self.tracker.borrow_mut();
        if let Some(active) = tracker.update(self.view.scroll_y(), &sections) {
            self.view.mark_active(active);
        }
    }

    pub fn active(&self) -> Option<String> {
        self.tracker.borrow().active().map(str::to_string)
    }
}

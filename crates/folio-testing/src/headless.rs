//! In-memory surface that records every write made to its elements.

use folio_core::{ElementSpec, Surface, VisualElement};
use folio_graphics::Point;
use std::cell::RefCell;
use std::rc::Rc;

/// Snapshot of an element created on a [`HeadlessSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct ElementRecord {
    pub spec: ElementSpec,
    pub position: Point,
    pub scale: f32,
    pub visible: bool,
    pub removed: bool,
    /// Number of position writes received.
    pub moves: usize,
}

impl ElementRecord {
    fn new(spec: ElementSpec) -> Self {
        Self {
            spec,
            position: Point::ZERO,
            scale: 1.0,
            visible: true,
            removed: false,
            moves: 0,
        }
    }
}

struct HeadlessElement {
    record: Rc<RefCell<ElementRecord>>,
}

impl VisualElement for HeadlessElement {
    fn set_position(&mut self, position: Point) {
        let mut record = self.record.borrow_mut();
        record.position = position;
        record.moves += 1;
    }

    fn set_scale(&mut self, scale: f32) {
        self.record.borrow_mut().scale = scale;
    }

    fn set_visible(&mut self, visible: bool) {
        self.record.borrow_mut().visible = visible;
    }

    fn remove(&mut self) {
        self.record.borrow_mut().removed = true;
    }
}

/// Surface without a display. Clones share the same element list.
#[derive(Clone, Default)]
pub struct HeadlessSurface {
    elements: Rc<RefCell<Vec<Rc<RefCell<ElementRecord>>>>>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element_count(&self) -> usize {
        self.elements.borrow().len()
    }

    /// Latest state of the most recently created element with `class_name`.
    pub fn element(&self, class_name: &str) -> Option<ElementRecord> {
        self.elements
            .borrow()
            .iter()
            .rev()
            .find(|record| record.borrow().spec.class_name == class_name)
            .map(|record| record.borrow().clone())
    }

    /// Like [`Self::element`] but panics with a readable message.
    pub fn expect_element(&self, class_name: &str) -> ElementRecord {
        match self.element(class_name) {
            Some(record) => record,
            None => panic!(
                "no element with class '{}' among {:?}",
                class_name,
                self.class_names()
            ),
        }
    }

    pub fn class_names(&self) -> Vec<String> {
        self.elements
            .borrow()
            .iter()
            .map(|record| record.borrow().spec.class_name.clone())
            .collect()
    }
}

impl Surface for HeadlessSurface {
    fn create_element(&self, spec: &ElementSpec) -> Box<dyn VisualElement> {
        log::trace!("headless surface creating '{}'", spec.class_name);
        let record = Rc::new(RefCell::new(ElementRecord::new(spec.clone())));
        self.elements.borrow_mut().push(Rc::clone(&record));
        Box::new(HeadlessElement { record })
    }
}

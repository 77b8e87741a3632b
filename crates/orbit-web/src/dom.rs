//! DOM-backed geometry provider and marker sink.

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use orbit_engine::{
    parse_inset_shorthand, parse_length, ContainerSize, GeometryProvider, Insets, MarkerGeometry,
    MarkerId, MarkerSink,
};

/// Attributes holding the last offset written to a marker.
const OFFSET_X_ATTR: &str = "data-orbit-x";
const OFFSET_Y_ATTR: &str = "data-orbit-y";

/// Container element and its markers, resolved once from selectors.
#[derive(Clone)]
pub struct MarkerSet {
    pub container: Option<HtmlElement>,
    pub markers: Vec<HtmlElement>,
}

impl MarkerSet {
    /// Look up the container and the markers inside it.
    /// A missing container yields an empty set; the engine then stays inert.
    pub fn query(document: &Document, container_selector: &str, marker_selector: &str) -> Self {
        let container = document
            .query_selector(container_selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        let markers = match &container {
            Some(container) => collect_markers(container, marker_selector),
            None => Vec::new(),
        };

        Self { container, markers }
    }
}

fn collect_markers(container: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = container.query_selector_all(selector) else {
        log::warn!("orbit: invalid marker selector {:?}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Reads container and marker geometry from layout and computed style.
pub struct DomGeometry {
    window: Window,
    set: MarkerSet,
}

impl DomGeometry {
    pub fn new(window: Window, set: MarkerSet) -> Self {
        Self { window, set }
    }

    fn measure(&self, container: &HtmlElement, marker: &HtmlElement) -> MarkerGeometry {
        let style = self.window.get_computed_style(marker).ok().flatten();
        let read = |name: &str| {
            style
                .as_ref()
                .and_then(|s| s.get_property_value(name).ok())
                .and_then(|v| parse_length(&v))
        };

        // A marker this engine already positioned reports where it was left.
        let insets = match written_offset(marker) {
            Some(offset) => Insets::top_left(offset.y, offset.x),
            None => Insets {
                top: read("top"),
                right: read("right"),
                bottom: read("bottom"),
                left: read("left"),
            },
        };

        let inset_shorthand = style
            .as_ref()
            .and_then(|s| s.get_property_value("inset").ok())
            .filter(|v| !v.is_empty() && v != "auto");

        let rect = marker.get_bounding_client_rect();
        let origin = container.get_bounding_client_rect();
        let screen_offset = Vec2::new(
            (rect.left() - origin.left()) as f32,
            (rect.top() - origin.top()) as f32,
        );

        MarkerGeometry {
            width: read("width"),
            height: read("height"),
            insets,
            inset_shorthand,
            screen_offset,
        }
    }
}

fn written_offset(marker: &HtmlElement) -> Option<Vec2> {
    let x = marker.get_attribute(OFFSET_X_ATTR).and_then(|v| parse_length(&v))?;
    let y = marker.get_attribute(OFFSET_Y_ATTR).and_then(|v| parse_length(&v))?;
    Some(Vec2::new(x, y))
}

impl GeometryProvider for DomGeometry {
    fn container(&self) -> Option<ContainerSize> {
        let rect = self.set.container.as_ref()?.get_bounding_client_rect();
        Some(ContainerSize::new(rect.width() as f32, rect.height() as f32))
    }

    fn markers(&self) -> Vec<MarkerGeometry> {
        let Some(container) = &self.set.container else {
            return Vec::new();
        };
        self.set
            .markers
            .iter()
            .map(|marker| self.measure(container, marker))
            .collect()
    }
}

/// Writes marker offsets as CSS transforms.
pub struct DomSink {
    markers: Vec<HtmlElement>,
}

impl DomSink {
    pub fn new(set: &MarkerSet) -> Self {
        Self {
            markers: set.markers.clone(),
        }
    }
}

impl MarkerSink for DomSink {
    fn prepare(&mut self, marker: MarkerId) {
        let Some(el) = self.markers.get(marker.index()) else {
            return;
        };
        for (name, value) in [
            ("position", "absolute"),
            ("top", "0"),
            ("left", "0"),
            ("right", "auto"),
            ("bottom", "auto"),
        ] {
            set_style(el, name, value);
        }
    }

    fn set_offset(&mut self, marker: MarkerId, x: f32, y: f32) {
        let Some(el) = self.markers.get(marker.index()) else {
            return;
        };
        set_style(el, "transform", &format!("translate({}px, {}px)", x, y));
        let _ = el.set_attribute(OFFSET_X_ATTR, &x.to_string());
        let _ = el.set_attribute(OFFSET_Y_ATTR, &y.to_string());
    }
}

fn set_style(el: &HtmlElement, name: &str, value: &str) {
    if el.style().set_property(name, value).is_err() {
        log::debug!("orbit: could not set {} on marker", name);
    }
}

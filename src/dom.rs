use crate::config;
use crate::constants::*;
use motion_core::{ChannelValues, ElementConfig, ElementId, Rect, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// All elements carrying the opt-in marker, in document order.
pub fn discover(document: &web::Document) -> anyhow::Result<Vec<web::HtmlElement>> {
    let nodes = document
        .query_selector_all(INTERACTIVE_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) {
            out.push(el);
        }
    }
    Ok(out)
}

#[inline]
pub fn read_config(el: &web::HtmlElement) -> ElementConfig {
    config::element_config(|name| el.get_attribute(name))
}

pub fn mark_classes(el: &web::HtmlElement, config: &ElementConfig) {
    let cl = el.class_list();
    for class in config::element_classes(config) {
        _ = cl.add_1(class);
    }
}

fn ensure_layer(
    document: &web::Document,
    el: &web::HtmlElement,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let existing = el
        .query_selector(&format!(":scope > .{}", class))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if let Some(layer) = existing.and_then(|l| l.dyn_into::<web::HtmlElement>().ok()) {
        return Ok(layer);
    }

    let layer = document
        .create_element("span")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    layer.set_class_name(&format!("{} {}", LAYER_CLASS, class));
    _ = layer.set_attribute(ATTR_GENERATED, "true");
    _ = layer.set_attribute("aria-hidden", "true");
    el.append_child(&layer)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(layer)
}

/// Append the border/shimmer/glow layers and the particle burst. Safe to
/// repeat: existing layers and particles are reused.
pub fn ensure_decoration_layers(
    document: &web::Document,
    el: &web::HtmlElement,
) -> anyhow::Result<()> {
    for class in DECORATION_LAYERS {
        ensure_layer(document, el, class)?;
    }

    let particles = ensure_layer(document, el, PARTICLE_LAYER)?;
    if particles.child_element_count() > 0 {
        return Ok(());
    }
    for vector in PARTICLE_VECTORS {
        let particle = document
            .create_element("span")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        particle.set_class_name(PARTICLE_CLASS);
        let style = particle.style();
        for (name, value) in config::particle_style(vector) {
            _ = style.set_property(name, &value);
        }
        particles
            .append_child(&particle)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(())
}

/// Live elements of one session, indexed by `ElementId`.
pub struct DomSurface {
    elements: Vec<web::HtmlElement>,
}

impl DomSurface {
    pub fn new(elements: Vec<web::HtmlElement>) -> Self {
        Self { elements }
    }

    #[inline]
    fn get(&self, id: ElementId) -> Option<&web::HtmlElement> {
        self.elements.get(id.0 as usize)
    }
}

impl Surface for DomSurface {
    fn rect(&mut self, id: ElementId) -> Option<Rect> {
        let el = self.get(id)?;
        if !el.is_connected() {
            return None;
        }
        let r = el.get_bounding_client_rect();
        Some(Rect::new(
            r.left() as f32,
            r.top() as f32,
            r.width() as f32,
            r.height() as f32,
        ))
    }

    fn apply_frame(&mut self, id: ElementId, values: &ChannelValues) {
        let Some(el) = self.get(id) else {
            return;
        };
        let style = el.style();
        for &(channel, value) in values {
            _ = style.set_property(channel.css_name(), &channel.format(value));
        }
    }
}

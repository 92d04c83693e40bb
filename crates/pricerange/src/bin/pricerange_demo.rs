//! # Price Range Demo
//!
//! Builds a page with two filters, the form markup (nested mount point,
//! hidden fields) and the table-filter markup (mount point found by class,
//! number inputs), then scripts a drag, a track click and a touch drag.
//!
//! Usage: `pricerange_demo [config.toml]`
//!
//! Logging is controlled by `RUST_LOG`, e.g. `RUST_LOG=debug`.

use std::error::Error;

use pricerange::ui::config::attr;
use pricerange::ui::{HandleSide, Rect, SliderConfig};
use pricerange::{class, Document, Element, ElementId, Role, SliderId, FILTER_ATTRIBUTE};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Builds the form variant; its defaults come from the optional config file.
fn form_filter(
    doc: &mut Document,
    page: ElementId,
    config: &SliderConfig,
) -> Result<ElementId, Box<dyn Error>> {
    let container = doc.append(
        Some(page),
        Element::filter_container()
            .with_attr(attr::MIN, config.domain_min.to_string())
            .with_attr(attr::MAX, config.domain_max.to_string())
            .with_attr(attr::STEP, config.step.to_string())
            .with_attr(attr::FROM_LABEL, config.from_label.clone())
            .with_attr(attr::TO_LABEL, config.to_label.clone()),
        Rect::new(20.0, 20.0, 440.0, 120.0),
    )?;
    doc.append(
        Some(container),
        Element::new(Role::FromValue),
        Rect::new(20.0, 20.0, 100.0, 24.0),
    )?;
    doc.append(
        Some(container),
        Element::new(Role::ToValue),
        Rect::new(360.0, 20.0, 100.0, 24.0),
    )?;
    doc.append(
        Some(container),
        Element::new(Role::SliderMount),
        Rect::new(20.0, 80.0, 440.0, 40.0),
    )?;
    doc.append(Some(container), Element::field("min_price"), Rect::ZERO)?;
    doc.append(Some(container), Element::field("max_price"), Rect::ZERO)?;
    Ok(container)
}

/// Builds the table-filter variant: number inputs beside a mount point
/// found by class.
fn table_filter(doc: &mut Document, page: ElementId) -> Result<ElementId, Box<dyn Error>> {
    let container = doc.append(
        Some(page),
        Element::new(Role::Generic)
            .with_attr(FILTER_ATTRIBUTE, "")
            .with_attr(attr::MAX, "500")
            .with_attr(attr::STEP, "5")
            .with_attr(attr::SHOW_LABELS, "false"),
        Rect::new(20.0, 200.0, 440.0, 80.0),
    )?;
    doc.append(
        Some(container),
        Element::new(Role::Generic).with_class(class::MOUNT),
        Rect::new(20.0, 200.0, 440.0, 40.0),
    )?;
    doc.append(Some(container), Element::field("price_min"), Rect::new(20.0, 250.0, 100.0, 24.0))?;
    doc.append(Some(container), Element::field("price_max"), Rect::new(360.0, 250.0, 100.0, 24.0))?;
    Ok(container)
}

fn handle_center(doc: &Document, slider: SliderId, side: HandleSide) -> Option<(f32, f32)> {
    let handle = doc.slider(slider)?.handle(side)?;
    doc.rect(handle).map(|rect| rect.center())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(|e| format!("tracing init failed: {e}"))?;

    let config = match std::env::args().nth(1) {
        Some(path) => SliderConfig::load(path)?,
        None => SliderConfig::default(),
    };

    let mut doc = Document::new();
    let page = doc.append(
        None,
        Element::new(Role::Generic),
        Rect::new(0.0, 0.0, 480.0, 320.0),
    )?;
    let form = form_filter(&mut doc, page, &config)?;
    table_filter(&mut doc, page)?;

    let changes = doc.add_listener(page, 64)?;
    let sliders = doc.mount_all()?;
    info!(count = sliders.len(), "page ready");

    let Some(form_slider) = doc.slider_for(form) else {
        return Err("form filter did not mount".into());
    };

    // Drag the min handle a third of the way across.
    if let Some((x, y)) = handle_center(&doc, form_slider, HandleSide::Min) {
        doc.pointer_down(x, y);
        for step in 1..=30u8 {
            doc.pointer_move(x + f32::from(step) * 5.0, y + 40.0);
        }
        doc.pointer_up(x + 150.0, y + 40.0);
    }

    // Click the bare track left of the min handle.
    let track = doc
        .slider(form_slider)
        .and_then(|instance| instance.track())
        .and_then(|track| doc.rect(track));
    if let Some(track) = track {
        let (x, y) = (track.x + 40.0, track.center().1);
        doc.pointer_down(x, y);
        doc.pointer_up(x, y);
    }

    // Touch drag on the table filter's max handle.
    if let Some(&table_slider) = sliders.iter().find(|&&id| id != form_slider) {
        if let Some((x, y)) = handle_center(&doc, table_slider, HandleSide::Max) {
            doc.touch_start(x, y);
            doc.touch_move(x - 120.0, y);
            doc.touch_end();
        }
    }

    for event in changes.drain() {
        println!(
            "{} on {:?}: {} .. {}",
            event.name(),
            event.target,
            event.min(),
            event.max()
        );
    }

    for id in doc.slider_ids() {
        let values = doc.values(id)?;
        println!("slider {}: {} .. {}", id.raw(), values.min, values.max);
        doc.destroy(id)?;
    }

    Ok(())
}

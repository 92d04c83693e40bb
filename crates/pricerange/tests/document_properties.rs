//! Property tests for pointer sequences routed through a document.

use pricerange::ui::{HandleSide, Rect};
use pricerange::{Document, Element, Role};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Input {
    Down(f32, f32),
    Move(f32, f32),
    Up(f32, f32),
    Click(f32),
}

fn input() -> impl Strategy<Value = Input> {
    let x = -50.0f32..200.0;
    prop_oneof![
        (x.clone(), 40.0f32..80.0).prop_map(|(x, y)| Input::Down(x, y)),
        (x.clone(), -100.0f32..300.0).prop_map(|(x, y)| Input::Move(x, y)),
        (x.clone(), -100.0f32..300.0).prop_map(|(x, y)| Input::Up(x, y)),
        x.prop_map(Input::Click),
    ]
}

proptest! {
    #[test]
    fn fields_and_events_track_values(inputs in prop::collection::vec(input(), 1..60)) {
        let mut doc = Document::new();
        let container = doc
            .append(
                None,
                Element::filter_container().with_attr("data-max", "100").with_attr("data-step", "2"),
                Rect::new(0.0, 0.0, 120.0, 100.0),
            )
            .unwrap();
        doc.append(Some(container), Element::new(Role::SliderMount), Rect::new(0.0, 50.0, 120.0, 20.0))
            .unwrap();
        doc.append(Some(container), Element::field("min_price"), Rect::ZERO).unwrap();
        doc.append(Some(container), Element::field("max_price"), Rect::ZERO).unwrap();
        let slider = doc.mount_from_attributes(container).unwrap();
        let events = doc.add_listener(container, 256).unwrap();

        let mut changes = 0;
        for input in inputs {
            let result = match input {
                Input::Down(x, y) => doc.pointer_down(x, y),
                Input::Move(x, y) => doc.pointer_move(x, y),
                Input::Up(x, y) => doc.pointer_up(x, y),
                Input::Click(x) => doc.click(x, 60.0),
            };
            changes += result.changes;

            let values = doc.values(slider).unwrap();
            prop_assert!(0.0 <= values.min && values.min <= values.max && values.max <= 100.0);
            prop_assert_eq!(values.min % 2.0, 0.0);
            prop_assert_eq!(values.max % 2.0, 0.0);

            let instance = doc.slider(slider).unwrap();
            for (side, value) in [(HandleSide::Min, values.min), (HandleSide::Max, values.max)] {
                let field = instance.field(side).unwrap();
                prop_assert_eq!(doc.element(field).unwrap().value(), value.to_string());
            }
        }

        let received = events.drain();
        prop_assert_eq!(received.len(), changes);
        for event in received {
            prop_assert_eq!(event.target, container);
            prop_assert!(event.min() <= event.max());
        }
    }
}

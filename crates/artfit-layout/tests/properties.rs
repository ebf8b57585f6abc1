//! Property tests for artboard fitting.

use artfit_core::{Bounds, ElementId, SceneGraph};
use artfit_layout::{fit_container, FitOptions};
use artfit_scene::Document;
use proptest::prelude::*;

const EPSILON: f64 = 1e-6;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn layer() -> impl Strategy<Value = (Bounds, bool)> {
    (
        -1000.0..1000.0f64,
        -1000.0..1000.0f64,
        0.0..500.0f64,
        0.0..500.0f64,
        prop::bool::weighted(0.8),
    )
        .prop_map(|(x, y, w, h, visible)| (Bounds::new(x, y, w, h), visible))
}

fn build(layers: &[(Bounds, bool)]) -> (Document, ElementId, Vec<ElementId>) {
    let mut doc = Document::new();
    let page = doc.add_page("Page 1");
    let board = doc.add_container(page, "Board", Bounds::new(40.0, 60.0, 800.0, 600.0));
    let ids = layers
        .iter()
        .enumerate()
        .map(|(i, &(rect, visible))| {
            if visible {
                doc.add_layer(board, format!("Layer {}", i), rect)
            } else {
                doc.add_hidden_layer(board, format!("Layer {}", i), rect)
            }
        })
        .collect();
    (doc, board, ids)
}

proptest! {
    #[test]
    fn visible_content_touches_every_side(
        layers in prop::collection::vec(layer(), 1..16)
            .prop_filter("needs a visible layer", |l| l.iter().any(|(_, v)| *v))
    ) {
        let (mut doc, board, ids) = build(&layers);
        fit_container(&mut doc, board, &FitOptions::default()).unwrap();

        let fitted = doc.rect(board).unwrap();
        prop_assert!(approx_eq(fitted.x, 40.0) && approx_eq(fitted.y, 60.0));

        let visible: Vec<Bounds> = ids
            .iter()
            .zip(&layers)
            .filter(|(_, (_, v))| *v)
            .map(|(&id, _)| doc.rect(id).unwrap())
            .collect();
        let bbox = Bounds::enclosing(visible).unwrap();

        prop_assert!(approx_eq(bbox.left(), 0.0));
        prop_assert!(approx_eq(bbox.top(), 0.0));
        prop_assert!(approx_eq(bbox.right(), fitted.width));
        prop_assert!(approx_eq(bbox.bottom(), fitted.height));
    }

    #[test]
    fn fitted_size_matches_extrema_exactly(
        layers in prop::collection::vec(layer(), 1..16)
            .prop_filter("needs a visible layer", |l| l.iter().any(|(_, v)| *v))
    ) {
        let (mut doc, board, _) = build(&layers);
        fit_container(&mut doc, board, &FitOptions::default()).unwrap();

        let visible: Vec<Bounds> = layers.iter().filter(|(_, v)| *v).map(|(r, _)| *r).collect();
        let min_x = visible.iter().map(Bounds::left).fold(f64::INFINITY, f64::min);
        let min_y = visible.iter().map(Bounds::top).fold(f64::INFINITY, f64::min);
        let max_x = visible.iter().map(Bounds::right).fold(f64::NEG_INFINITY, f64::max);
        let max_y = visible.iter().map(Bounds::bottom).fold(f64::NEG_INFINITY, f64::max);

        let fitted = doc.rect(board).unwrap();
        prop_assert_eq!(fitted.width, max_x - min_x);
        prop_assert_eq!(fitted.height, max_y - min_y);
    }

    #[test]
    fn fitting_twice_changes_nothing(layers in prop::collection::vec(layer(), 0..16)) {
        let (mut doc, board, ids) = build(&layers);
        let options = FitOptions::default();

        fit_container(&mut doc, board, &options).unwrap();
        let board_once = doc.rect(board).unwrap();
        let children_once: Vec<Bounds> = ids.iter().map(|&id| doc.rect(id).unwrap()).collect();

        fit_container(&mut doc, board, &options).unwrap();
        let board_twice = doc.rect(board).unwrap();

        prop_assert!(approx_eq(board_once.width, board_twice.width));
        prop_assert!(approx_eq(board_once.height, board_twice.height));
        for (&id, once) in ids.iter().zip(&children_once) {
            let twice = doc.rect(id).unwrap();
            prop_assert!(approx_eq(once.x, twice.x) && approx_eq(once.y, twice.y));
        }
    }

    #[test]
    fn relative_positions_preserved(layers in prop::collection::vec(layer(), 2..16)) {
        let (mut doc, board, ids) = build(&layers);
        fit_container(&mut doc, board, &FitOptions::including_hidden()).unwrap();

        let first_before = layers[0].0;
        let first_after = doc.rect(ids[0]).unwrap();
        for (&id, (before, _)) in ids.iter().zip(&layers).skip(1) {
            let after = doc.rect(id).unwrap();
            prop_assert!(approx_eq(after.x - first_after.x, before.x - first_before.x));
            prop_assert!(approx_eq(after.y - first_after.y, before.y - first_before.y));
            prop_assert!(approx_eq(after.width, before.width));
            prop_assert!(approx_eq(after.height, before.height));
        }
    }
}

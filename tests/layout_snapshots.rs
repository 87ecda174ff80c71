//! Snapshot tests for materialized layouts.
//!
//! The textual dumps below are the exact box sets hosts receive for a given
//! viewport; the snapshots protect the offset arithmetic against regression
//! in a form that is easy to eyeball in review.

use viewslice::config::EngineConfig;
use viewslice::engine::{GridEngine, ListEngine};
use viewslice::model::{PositionedItem, TrackWidth};

// ===== Test Helpers =====

/// Render a box set as one line per item, in emission order.
fn dump(items: &[PositionedItem]) -> String {
    items
        .iter()
        .map(|p| match p.bounds.width {
            TrackWidth::Fill => format!(
                "#{} top={} height={} width=fill",
                p.index, p.bounds.top, p.bounds.height
            ),
            TrackWidth::Px(w) => format!(
                "#{} top={} left={} width={} height={}",
                p.index, p.bounds.top, p.bounds.left, w, p.bounds.height
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn no_overscan() -> EngineConfig {
    EngineConfig {
        overscan_count: 0,
        ..EngineConfig::default()
    }
}

#[test]
fn variable_list_window_boxes() {
    let mut engine = ListEngine::new(no_overscan());
    engine
        .replace_items(&[20.0, 40.0, 60.0, 20.0], |s: &f64, _| *s)
        .unwrap();
    engine.on_resize(30.0);
    let update = engine.on_scroll(50.0);

    let boxes = engine.materialize(update.range.unwrap());
    insta::assert_snapshot!(dump(&boxes), @r"
    #1 top=20 height=40 width=fill
    #2 top=60 height=60 width=fill
    ");
}

#[test]
fn full_list_boxes_tile_the_content_exactly() {
    let mut engine = ListEngine::new(no_overscan());
    engine
        .replace_items(&[20.0, 40.0, 60.0, 20.0], |s: &f64, _| *s)
        .unwrap();
    let update = engine.on_resize(140.0);

    let boxes = engine.materialize(update.range.unwrap());
    insta::assert_snapshot!(dump(&boxes), @r"
    #0 top=0 height=20 width=fill
    #1 top=20 height=40 width=fill
    #2 top=60 height=60 width=fill
    #3 top=120 height=20 width=fill
    ");
}

#[test]
fn grid_window_boxes_with_gap() {
    let config = EngineConfig {
        overscan_count: 0,
        gap: 10.0,
        ..EngineConfig::default()
    };
    let mut grid = GridEngine::new(config, 30.0, 20.0).unwrap();
    grid.set_len(10);
    grid.set_container_width(100.0); // two columns
    grid.on_resize(60.0);
    let window = grid.on_scroll(35.0);

    let boxes = grid.materialize(window.rows.unwrap());
    insta::assert_snapshot!(dump(&boxes), @r"
    #2 top=30 left=0 width=30 height=20
    #3 top=30 left=40 width=30 height=20
    #4 top=60 left=0 width=30 height=20
    #5 top=60 left=40 width=30 height=20
    #6 top=90 left=0 width=30 height=20
    #7 top=90 left=40 width=30 height=20
    #8 top=120 left=0 width=30 height=20
    #9 top=120 left=40 width=30 height=20
    ");
}

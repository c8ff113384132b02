//! Tests for the table controller.

use gridstate::column::Column;
use gridstate::key::{RowId, RowKey};
use gridstate::row::{Row, TableRow};
use gridstate::selection::SelectionMode;
use gridstate::sort::SortDirection;
use gridstate::table::{EventResult, Table, TableEvent};

fn person(id: i32, name: &str, age: i32) -> Row {
    Row::new().set("id", id).set("name", name).set("age", age)
}

fn people() -> Vec<Row> {
    vec![
        person(1, "Carol", 45),
        person(2, "Alice", 36),
        person(3, "Bob", 51),
    ]
}

fn table() -> Table<Row> {
    Table::new(vec![
        Column::new("name", "Name").sortable(),
        Column::new("age", "Age").sortable(),
        Column::new("id", "ID"),
    ])
    .with_rows(people())
    .with_row_key(RowKey::field("id"))
}

fn drain(table: &Table<Row>) -> Vec<TableEvent<Row>> {
    let mut events = Vec::new();
    while let Some(event) = table.poll_event() {
        events.push(event);
    }
    events
}

fn names(rows: &[Row]) -> Vec<String> {
    rows.iter().map(|r| r.field("name").to_string()).collect()
}

// =============================================================================
// Sorting
// =============================================================================

#[test]
fn test_sort_starts_unsorted() {
    let table = table();
    assert_eq!(table.sort(), None);
    assert_eq!(names(&table.ordered_rows()), ["Carol", "Alice", "Bob"]);
}

#[test]
fn test_toggle_sort_cycles_direction() {
    let table = table();
    assert_eq!(table.toggle_sort("age"), EventResult::Consumed);
    assert_eq!(table.sort().unwrap().direction, SortDirection::Ascending);
    assert_eq!(names(&table.ordered_rows()), ["Alice", "Carol", "Bob"]);

    table.toggle_sort("age");
    assert_eq!(table.sort().unwrap().direction, SortDirection::Descending);
    assert_eq!(names(&table.ordered_rows()), ["Bob", "Carol", "Alice"]);

    table.toggle_sort("age");
    assert_eq!(table.sort().unwrap().direction, SortDirection::Ascending);
}

#[test]
fn test_switching_column_resets_to_ascending() {
    let table = table();
    table.toggle_sort("age");
    table.toggle_sort("age"); // age descending
    table.toggle_sort("name");
    let sort = table.sort().unwrap();
    assert_eq!(sort.column_key, "name");
    assert_eq!(sort.direction, SortDirection::Ascending);
}

#[test]
fn test_non_sortable_column_is_ignored() {
    let table = table();
    assert_eq!(table.toggle_sort("id"), EventResult::Ignored);
    assert_eq!(table.sort(), None);
    assert!(drain(&table).is_empty());
}

#[test]
fn test_unknown_column_is_ignored() {
    let table = table();
    assert_eq!(table.toggle_sort("salary"), EventResult::Ignored);
    assert_eq!(table.sort(), None);
}

#[test]
fn test_toggle_sort_emits_sort_changed_only() {
    let table = table();
    table.toggle_sort("age");
    let events = drain(&table);
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        TableEvent::SortChanged { column_key, direction }
            if column_key == "age" && *direction == SortDirection::Ascending
    ));
}

#[test]
fn test_ordered_rows_recomputed_after_set_rows() {
    let table = table();
    table.toggle_sort("age");
    table.set_rows(vec![person(9, "Zed", 20), person(8, "Yve", 70)]);
    assert_eq!(names(&table.ordered_rows()), ["Zed", "Yve"]);
}

// =============================================================================
// Row selection
// =============================================================================

#[test]
fn test_toggle_row_selects_by_identity() {
    let table = table();
    assert_eq!(table.toggle_row(1), EventResult::Consumed);
    assert!(table.is_selected(&RowId::from(2))); // Alice
    assert!(table.is_selected_at(1));
}

#[test]
fn test_toggle_row_out_of_bounds_is_ignored() {
    let table = table();
    assert_eq!(table.toggle_row(99), EventResult::Ignored);
    assert!(table.selected_ids().is_empty());
    assert!(drain(&table).is_empty());
}

#[test]
fn test_selection_persists_across_sort() {
    let table = table();
    table.toggle_row(1); // Alice, id 2
    table.toggle_sort("age");
    assert!(table.is_selected(&RowId::from(2)));
    // Alice is now first in the ordered view.
    assert!(table.is_selected_at(0));
    assert_eq!(names(&table.selected_rows()), ["Alice"]);
}

#[test]
fn test_multiple_mode_toggles_on_and_off() {
    let table = table();
    table.toggle_row(0);
    table.toggle_row(2);
    assert_eq!(table.selected_ids(), vec![RowId::from(1), RowId::from(3)]);
    table.toggle_row(0);
    assert_eq!(table.selected_ids(), vec![RowId::from(3)]);
}

#[test]
fn test_single_mode_is_exclusive() {
    let table = table().with_selection_mode(SelectionMode::Single);
    table.toggle_row(0);
    table.toggle_row(1);
    assert_eq!(table.selected_ids(), vec![RowId::from(2)]);
}

#[test]
fn test_single_mode_reclick_keeps_selection_and_emits() {
    let table = table().with_selection_mode(SelectionMode::Single);
    table.toggle_row(0);
    table.toggle_row(0);
    assert_eq!(table.selected_ids(), vec![RowId::from(1)]);
    let events = drain(&table);
    assert_eq!(events.len(), 2);
}

#[test]
fn test_selection_event_payload_is_view_ordered() {
    let table = table();
    table.toggle_sort("age"); // Alice, Carol, Bob
    drain(&table);
    table.toggle_row(2); // Bob
    table.toggle_row(0); // Alice
    let events = drain(&table);
    // Second payload holds both rows in view order, not click order.
    match &events[1] {
        TableEvent::SelectionChanged { rows } => {
            assert_eq!(names(rows), ["Alice", "Bob"]);
        }
        other => panic!("expected SelectionChanged, got {other:?}"),
    }
}

// =============================================================================
// Select-all
// =============================================================================

#[test]
fn test_select_all_selects_everything() {
    let table = table();
    assert_eq!(table.toggle_select_all(), EventResult::Consumed);
    assert!(table.is_all_selected());
    let events = drain(&table);
    match &events[0] {
        TableEvent::SelectionChanged { rows } => {
            assert_eq!(names(rows), ["Carol", "Alice", "Bob"]);
        }
        other => panic!("expected SelectionChanged, got {other:?}"),
    }
}

#[test]
fn test_select_all_twice_toggles_back_to_empty() {
    let table = table();
    table.toggle_select_all();
    table.toggle_select_all();
    assert!(table.selected_ids().is_empty());
    let events = drain(&table);
    assert!(matches!(
        &events[1],
        TableEvent::SelectionChanged { rows } if rows.is_empty()
    ));
}

#[test]
fn test_select_all_completes_partial_selection() {
    let table = table();
    table.toggle_row(0);
    table.toggle_select_all();
    assert!(table.is_all_selected());
}

#[test]
fn test_select_all_drops_identities_outside_current_view() {
    let table = table();
    table.toggle_row(0); // id 1
    table.set_rows(vec![person(8, "Yve", 70), person(9, "Zed", 20)]);
    table.toggle_select_all();
    assert_eq!(table.selected_ids(), vec![RowId::from(8), RowId::from(9)]);
}

#[test]
fn test_select_all_on_empty_view_is_silent() {
    let table = Table::<Row>::new(vec![
        Column::new("name", "Name").sortable(),
    ]);
    assert_eq!(table.toggle_select_all(), EventResult::Ignored);
    assert!(table.selected_ids().is_empty());
    assert!(drain(&table).is_empty());
}

// =============================================================================
// Clear, tri-state, misc
// =============================================================================

#[test]
fn test_clear_selection_does_not_emit() {
    let table = table();
    table.toggle_row(0);
    drain(&table);
    table.clear_selection();
    assert!(table.selected_ids().is_empty());
    assert!(drain(&table).is_empty());
}

#[test]
fn test_tri_state_flags() {
    let table = table();
    assert!(!table.is_all_selected());
    assert!(!table.is_partially_selected());

    table.toggle_row(0);
    assert!(!table.is_all_selected());
    assert!(table.is_partially_selected());

    table.toggle_select_all();
    assert!(table.is_all_selected());
    assert!(!table.is_partially_selected());
}

#[test]
fn test_empty_table_accessors() {
    let table = Table::<Row>::new(Vec::new());
    assert!(table.is_empty());
    assert!(table.ordered_rows().is_empty());
    assert!(!table.is_all_selected());
}

#[test]
fn test_index_key_fallback_tracks_view_position() {
    let table = Table::new(vec![
        Column::new("age", "Age").sortable(),
    ])
    .with_rows(people());
    table.toggle_row(1);
    assert!(table.is_selected(&RowId::from(1usize)));
    assert!(table.is_selected_at(1));
}

#[test]
fn test_duplicate_identities_select_together() {
    let _ = simplelog::SimpleLogger::init(
        simplelog::LevelFilter::Warn,
        simplelog::Config::default(),
    );
    let table = Table::new(vec![Column::new("name", "Name").sortable()])
        .with_row_key(RowKey::field("id"))
        .with_rows(vec![
            person(1, "Carol", 45),
            person(1, "Alice", 36),
            person(2, "Bob", 51),
        ]);
    // Rows sharing an identity select and deselect as one.
    table.toggle_row(0);
    assert!(table.is_selected_at(0));
    assert!(table.is_selected_at(1));
    assert_eq!(names(&table.selected_rows()), ["Carol", "Alice"]);
}

#[test]
fn test_clones_share_state() {
    let table = table();
    let handle = table.clone();
    handle.toggle_row(0);
    assert!(table.is_selected(&RowId::from(1)));
    assert_eq!(table.id(), handle.id());
}

#[test]
fn test_dirty_flag() {
    let table = table();
    table.clear_dirty();
    assert!(!table.is_dirty());
    table.toggle_row(0);
    assert!(table.is_dirty());
    table.clear_dirty();
    assert!(!table.is_dirty());
}

mod helpers;

use anyhow::Result;
use helpers::{TestStorage, SCENARIO_NOTES};
use simple_note::application::{filter_notes, QueryEngine};

#[test]
fn given_scenario_notes_when_searching_dra_in_all_then_returns_only_report() -> Result<()> {
    // Arrange
    let storage = TestStorage::new()?.with_raw(Some(SCENARIO_NOTES), None)?;
    let store = storage.open_store()?;

    // Act
    let result = filter_notes(store.list(), "dra", "All");

    // Assert
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Report");
    Ok(())
}

#[test]
fn given_query_matching_nothing_when_filtering_then_result_is_empty() -> Result<()> {
    let storage = TestStorage::new()?.with_raw(Some(SCENARIO_NOTES), None)?;
    let store = storage.open_store()?;

    assert!(filter_notes(store.list(), "quarterly", "All").is_empty());
    assert!(filter_notes(store.list(), "quarterly", "Work").is_empty());
    Ok(())
}

#[test]
fn given_all_category_when_filtering_without_search_then_returns_everything() -> Result<()> {
    let storage = TestStorage::new()?.with_raw(Some(SCENARIO_NOTES), None)?;
    let store = storage.open_store()?;

    let result = QueryEngine::everything().apply(store.list());

    assert_eq!(result.len(), store.list().len());
    assert_eq!(result[0].title, "Groceries");
    Ok(())
}

#[test]
fn given_upper_case_query_when_filtering_then_matches_lower_case_content() -> Result<()> {
    let storage = TestStorage::new()?.with_raw(Some(SCENARIO_NOTES), None)?;
    let store = storage.open_store()?;

    let result = filter_notes(store.list(), "MILK", "All");

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].category, "Personal");
    Ok(())
}

#[test]
fn given_store_with_selected_category_when_viewing_then_uses_active_filter() -> Result<()> {
    let storage = TestStorage::new()?.with_raw(Some(SCENARIO_NOTES), None)?;
    let mut store = storage.open_store()?;

    store.select_category("Work");
    let result = store.view("");

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Report");
    Ok(())
}

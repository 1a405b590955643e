//! Start screen (category editor), result panel, and summary rendering

use wasm_bindgen::JsValue;
use web_sys::Document;

use super::dom;
use crate::deck::CategoryEditor;
use crate::game::GameState;
use crate::scoring::points_caption;

/// Rebuild the editable category list
///
/// Remove buttons carry `data-index`; a single delegated listener on
/// `#cat-list` turns clicks into actions.
pub fn render_editor(doc: &Document, editor: &CategoryEditor) -> Result<(), JsValue> {
    let list = dom::by_id(doc, "cat-list")?;
    dom::clear(&list);

    if editor.is_empty() {
        let empty = dom::create(doc, "div", "cat-empty")?;
        empty.set_text_content(Some("Add at least one category to play."));
        list.append_child(&empty)?;
    }

    for (index, category) in editor.entries().iter().enumerate() {
        let row = dom::create(doc, "div", "cat-row")?;
        let label = dom::create(doc, "span", "cat-pair")?;
        label.set_text_content(Some(&format!("{} ↔ {}", category.left, category.right)));
        let remove = dom::create(doc, "button", "cat-remove")?;
        remove.set_attribute("data-index", &index.to_string())?;
        remove.set_text_content(Some("Remove"));
        row.append_child(&label)?;
        row.append_child(&remove)?;
        list.append_child(&row)?;
    }

    dom::set_text(
        doc,
        "rounds-preview",
        &format!("Rounds: {} (uses the current list)", editor.preview_rounds()),
    )
}

pub fn render_result(doc: &Document, state: &GameState) -> Result<(), JsValue> {
    let panel = dom::by_id(doc, "result-panel")?;
    match state.last_result() {
        Some(record) => {
            dom::set_text(doc, "result-stats", &record.breakdown())?;
            dom::set_text(doc, "result-caption", &points_caption(record.points))?;
            dom::set_shown(&panel, true)
        }
        None => dom::set_shown(&panel, false),
    }
}

pub fn render_summary(doc: &Document, state: &GameState) -> Result<(), JsValue> {
    dom::set_text(doc, "final-score", &state.score().to_string())?;

    let list = dom::by_id(doc, "history-list")?;
    dom::clear(&list);
    for record in state.history() {
        let row = dom::create(doc, "div", "history-row")?;

        let pair = dom::create(doc, "div", "history-pair")?;
        pair.set_text_content(Some(&format!(
            "{} ↔ {}",
            record.category.left, record.category.right
        )));
        if !record.clue.is_empty() {
            let clue = dom::create(doc, "span", "history-clue")?;
            clue.set_text_content(Some(&format!("“{}”", record.clue)));
            pair.append_child(&clue)?;
        }

        let stats = dom::create(doc, "div", "history-stats")?;
        stats.set_text_content(Some(&record.summary_line()));

        row.append_child(&pair)?;
        row.append_child(&stats)?;
        list.append_child(&row)?;
    }
    Ok(())
}

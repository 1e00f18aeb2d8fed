use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use serde_json::{Map, Value};

use crate::document::{Document, Field, Step, ARRAY, INPUT_MODE};
use crate::keywords::Keywords;
use crate::report::ConversionReport;

/// True when `step` should become an input-mode step: its title carries a personal
/// title keyword, or one of its field names carries a personal field keyword.
/// Steps that already are `input-mode` never qualify.
pub fn is_personal_data_step(step: Step<'_>, keywords: &Keywords) -> bool {
    if step.is_input_mode() {
        return false;
    }
    let has_title = step.title().is_some_and(|t| keywords.matches_title(t));
    let has_fields = step
        .fields()
        .iter()
        .any(|f| keywords.matches_field_name(Field::new(f).name()));
    has_title || has_fields
}

/// Builds the input-mode replacement for `step`.
///
/// Keys keep their original order; `input_mode_field`, `manual_fields` and any
/// defaulted bound are appended, `fields` is dropped.
pub fn convert_step(step: Step<'_>) -> Result<Map<String, Value>> {
    let id = step
        .id()
        .ok_or_else(|| anyhow!("step has no string or numeric `id`"))?;
    let default_max = if step.kind() == Some(ARRAY) { 2 } else { 1 };
    let manual_fields: Vec<Value> = step
        .fields()
        .iter()
        .filter(|f| !Field::new(f).is_file())
        .cloned()
        .collect();

    let mut converted = step.as_map().clone();
    converted.insert("type".into(), Value::from(INPUT_MODE));
    converted.insert("input_mode_field".into(), Value::from(format!("{id}_mode")));
    converted.entry("min").or_insert_with(|| Value::from(1));
    converted.entry("max").or_insert_with(|| Value::from(default_max));
    converted.insert("manual_fields".into(), Value::Array(manual_fields));
    converted.shift_remove("fields");
    Ok(converted)
}

/// Converts every qualifying step of every document in place.
///
/// Fails on the first qualifying step that cannot be converted; `docs` may then be
/// partly converted and should not be saved.
pub fn convert_documents(docs: &mut [Document], keywords: &Keywords) -> Result<ConversionReport> {
    let mut report = ConversionReport {
        documents_seen: docs.len(),
        ..Default::default()
    };

    for (doc_index, doc) in docs.iter_mut().enumerate() {
        let code = doc.code().map(str::to_owned);
        let Some(steps) = doc.steps_mut() else {
            continue;
        };

        let mut converted_ids = Vec::new();
        for (step_index, slot) in steps.iter_mut().enumerate() {
            let Some(step) = Step::from_value(slot) else {
                warn!("document #{doc_index}: step #{step_index} is not an object, left as is");
                continue;
            };
            if !is_personal_data_step(step, keywords) {
                continue;
            }

            let converted = convert_step(step).with_context(|| {
                format!(
                    "converting document #{doc_index} ({}) step #{step_index}",
                    code.as_deref().unwrap_or("no code")
                )
            })?;
            converted_ids.extend(step.id());
            info!(
                "document #{doc_index}: step #{step_index} {:?} -> input-mode",
                step.title().unwrap_or_default()
            );
            *slot = Value::Object(converted);
        }

        report.record(doc_index, code, converted_ids);
    }

    Ok(report)
}

// ABOUTME: HTTP request handlers for name generation
// ABOUTME: Submit, regenerate, current state, and form options for the front-end

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use namecraft_core::{Gender, NameCategory, NamingRequest, Style};
use namecraft_generator::GenerationState;

use super::AppState;
use crate::error::AppError;

/// Submit a naming request and wait for the outcome
pub async fn generate_names(
    State(state): State<AppState>,
    payload: Result<Json<NamingRequest>, JsonRejection>,
) -> Result<Json<GenerationState>, AppError> {
    let Json(request) = payload?;
    info!("Received {} naming request", request.category());

    state.generator.submit(request).await?;
    Ok(Json(state.generator.state()))
}

/// Generate a fresh batch for the last submitted request
pub async fn regenerate_names(
    State(state): State<AppState>,
) -> Result<Json<GenerationState>, AppError> {
    state.generator.regenerate().await?;
    Ok(Json(state.generator.state()))
}

pub async fn get_state(State(state): State<AppState>) -> Json<GenerationState> {
    Json(state.generator.state())
}

#[derive(Serialize)]
pub struct OptionItem<T: Serialize> {
    pub value: T,
    pub label: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOption {
    pub value: NameCategory,
    pub label: &'static str,
    pub subject_label: &'static str,
    pub uses_gender: bool,
    pub uses_birth_year: bool,
}

#[derive(Serialize)]
pub struct FormOptions {
    pub categories: Vec<CategoryOption>,
    pub genders: Vec<OptionItem<Gender>>,
    pub styles: Vec<OptionItem<Style>>,
}

/// Choices and labels the form needs to render
pub async fn get_options() -> Json<FormOptions> {
    let categories = NameCategory::ALL
        .into_iter()
        .map(|category| CategoryOption {
            value: category,
            label: category.label(),
            subject_label: category.subject_label(),
            uses_gender: category.uses_gender(),
            uses_birth_year: category == NameCategory::Person,
        })
        .collect();

    let genders = Gender::ALL
        .into_iter()
        .map(|gender| OptionItem {
            value: gender,
            label: gender.label(),
        })
        .collect();

    let styles = Style::ALL
        .into_iter()
        .map(|style| OptionItem {
            value: style,
            label: style.label(),
        })
        .collect();

    Json(FormOptions {
        categories,
        genders,
        styles,
    })
}

//! Recipe Form Controller
//!
//! In-memory draft of the recipe form. Scalar inputs are kept as the raw
//! text the user typed and only parsed by `validate`/`submit`.

pub mod drafts;

use crate::error::{SubmitError, ValidationError};
use crate::models::{Difficulty, Recipe};

/// Ingredient checkboxes offered by the form
pub const INGREDIENT_OPTIONS: &[&str] = &[
    "Salt", "Sugar", "Flour", "Eggs", "Milk", "Butter", "Cheese", "Chicken", "Beef", "Fish",
    "Garlic", "Onion", "Pepper", "Olive Oil",
];

pub const MSG_NAME_REQUIRED: &str = "Name is required.";
pub const MSG_REQUIRED: &str = "Required.";
pub const MSG_NOT_A_NUMBER: &str = "Must be a number.";

pub const CONFIRM_RECIPE_UPDATE: &str = "Are you sure you want to update the recipe?";

/// Yes/no prompt asked before an edit is sent
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// `window.confirm`; answers "no" when there is no window
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Split a textarea into trimmed, non-blank lines
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Scalar inputs of the recipe form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    PrepTime,
    CookTime,
    Servings,
    Difficulty,
    Cuisine,
}

impl Field {
    /// Wire name, also used as the validation key
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::PrepTime => "prepTimeMinutes",
            Field::CookTime => "cookTimeMinutes",
            Field::Servings => "servings",
            Field::Difficulty => "difficulty",
            Field::Cuisine => "cuisine",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScalarFields {
    name: String,
    prep_time: String,
    cook_time: String,
    servings: String,
    difficulty: String,
    cuisine: String,
}

impl Default for ScalarFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            prep_time: String::new(),
            cook_time: String::new(),
            servings: String::new(),
            // first option of the select, as the browser would pick
            difficulty: Difficulty::Easy.as_str().to_string(),
            cuisine: String::new(),
        }
    }
}

/// Validated scalar part of the payload
#[derive(Debug, Clone, PartialEq)]
pub struct BaseFields {
    pub name: String,
    pub prep_time_minutes: f64,
    pub cook_time_minutes: f64,
    pub servings: Option<f64>,
    pub difficulty: Difficulty,
    pub cuisine: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormController {
    mode: FormMode,
    fields: ScalarFields,
    selected: Vec<String>,
    steps: Vec<String>,
}

impl FormController {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            fields: ScalarFields::default(),
            selected: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Edit-mode controller seeded from an existing recipe.
    ///
    /// This is the only place the selection and step list are taken from
    /// the record; later `hydrate` calls touch scalars only.
    pub fn for_edit(recipe: &Recipe) -> Self {
        let mut controller = Self {
            mode: FormMode::Edit,
            fields: ScalarFields::default(),
            selected: recipe.ingredients.clone(),
            steps: recipe.instructions.clone(),
        };
        controller.hydrate(recipe);
        controller
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.fields.name,
            Field::PrepTime => &self.fields.prep_time,
            Field::CookTime => &self.fields.cook_time,
            Field::Servings => &self.fields.servings,
            Field::Difficulty => &self.fields.difficulty,
            Field::Cuisine => &self.fields.cuisine,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::PrepTime => self.fields.prep_time = value,
            Field::CookTime => self.fields.cook_time = value,
            Field::Servings => self.fields.servings = value,
            Field::Difficulty => self.fields.difficulty = value,
            Field::Cuisine => self.fields.cuisine = value,
        }
    }

    /// Copy scalar fields from `recipe`
    pub fn hydrate(&mut self, recipe: &Recipe) {
        self.fields = ScalarFields {
            name: recipe.name.clone(),
            prep_time: recipe.prep_time_minutes.to_string(),
            cook_time: recipe.cook_time_minutes.to_string(),
            servings: recipe.servings.map(|s| s.to_string()).unwrap_or_default(),
            difficulty: recipe.difficulty.as_str().to_string(),
            cuisine: recipe.cuisine.clone().unwrap_or_default(),
        };
    }

    // ========================
    // Selection
    // ========================

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, item: &str) -> bool {
        self.selected.iter().any(|s| s == item)
    }

    pub fn toggle_option(&mut self, item: &str) {
        if self.is_selected(item) {
            self.selected.retain(|s| s != item);
        } else {
            self.selected.push(item.to_string());
        }
    }

    // ========================
    // Steps
    // ========================

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn set_step(&mut self, index: usize, text: impl Into<String>) {
        if let Some(step) = self.steps.get_mut(index) {
            *step = text.into();
        }
    }

    pub fn append_step(&mut self) {
        self.steps.push(String::new());
    }

    pub fn remove_step(&mut self, index: usize) {
        if index < self.steps.len() {
            self.steps.remove(index);
        }
    }

    /// Replace all steps with the non-blank lines of a pasted block
    pub fn replace_steps_from_text(&mut self, text: &str) {
        self.steps = split_lines(text);
    }

    // ========================
    // Validation & Submit
    // ========================

    pub fn validate(&self) -> Vec<ValidationError> {
        match self.base_fields() {
            Ok(_) => Vec::new(),
            Err(errors) => errors,
        }
    }

    pub fn base_fields(&self) -> Result<BaseFields, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let name = self.fields.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::new(Field::Name.key(), MSG_NAME_REQUIRED));
        }
        let prep = required_number(Field::PrepTime, &self.fields.prep_time, &mut errors);
        let cook = required_number(Field::CookTime, &self.fields.cook_time, &mut errors);
        let servings = optional_number(Field::Servings, &self.fields.servings, &mut errors);
        let difficulty = Difficulty::parse(self.fields.difficulty.trim());
        if difficulty.is_none() {
            errors.push(ValidationError::new(Field::Difficulty.key(), MSG_REQUIRED));
        }

        let (Some(prep_time_minutes), Some(cook_time_minutes), Some(difficulty)) =
            (prep, cook, difficulty)
        else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        let cuisine = self.fields.cuisine.trim();
        Ok(BaseFields {
            name: name.to_string(),
            prep_time_minutes,
            cook_time_minutes,
            servings,
            difficulty,
            cuisine: (!cuisine.is_empty()).then(|| cuisine.to_string()),
        })
    }

    /// Merge base fields with the current selection and steps
    pub fn payload(&self, base: BaseFields) -> Recipe {
        Recipe {
            id: None,
            name: base.name,
            ingredients: self.selected.clone(),
            instructions: self.steps.clone(),
            prep_time_minutes: base.prep_time_minutes,
            cook_time_minutes: base.cook_time_minutes,
            servings: base.servings,
            difficulty: base.difficulty,
            cuisine: base.cuisine,
            image: None,
            rating: None,
        }
    }

    /// Validate, confirm in edit mode, then hand the payload to `on_submit`.
    ///
    /// The controller is never modified here.
    pub fn submit<C, F>(&self, confirm: &C, on_submit: F) -> Result<(), SubmitError>
    where
        C: Confirm + ?Sized,
        F: FnOnce(Recipe),
    {
        let base = self.base_fields().map_err(SubmitError::Invalid)?;
        if self.mode == FormMode::Edit && !confirm.confirm(CONFIRM_RECIPE_UPDATE) {
            log::debug!("[recipe-form] update declined");
            return Err(SubmitError::ConfirmationDeclined);
        }
        on_submit(self.payload(base));
        Ok(())
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

fn required_number(field: Field, raw: &str, errors: &mut Vec<ValidationError>) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(ValidationError::new(field.key(), MSG_REQUIRED));
        return None;
    }
    parse_number(field, raw, errors)
}

fn optional_number(field: Field, raw: &str, errors: &mut Vec<ValidationError>) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    parse_number(field, raw, errors)
}

/// Any finite number; sign and range are not checked
fn parse_number(field: Field, raw: &str, errors: &mut Vec<ValidationError>) -> Option<f64> {
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => {
            errors.push(ValidationError::new(field.key(), MSG_NOT_A_NUMBER));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn filled() -> FormController {
        let mut form = FormController::new();
        form.set(Field::Name, "Cake");
        form.set(Field::PrepTime, "10");
        form.set(Field::CookTime, "30");
        form.set(Field::Difficulty, "Easy");
        form
    }

    fn existing() -> Recipe {
        Recipe {
            id: Some(7),
            name: "Soup".into(),
            ingredients: vec!["Onion".into(), "Garlic".into()],
            instructions: vec!["Chop".into(), "Boil".into()],
            prep_time_minutes: 5.0,
            cook_time_minutes: 40.0,
            servings: Some(2.0),
            difficulty: Difficulty::Medium,
            cuisine: Some("French".into()),
            image: None,
            rating: None,
        }
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut form = FormController::new();
        form.toggle_option("Salt");
        let before = form.selected().to_vec();
        form.toggle_option("Eggs");
        form.toggle_option("Eggs");
        assert_eq!(form.selected(), before.as_slice());

        form.toggle_option("Salt");
        assert!(form.selected().is_empty());
    }

    #[test]
    fn test_append_then_remove_last_is_noop() {
        let mut form = FormController::new();
        form.append_step();
        form.set_step(0, "Mix");
        let before = form.steps().to_vec();

        form.append_step();
        form.remove_step(form.steps().len() - 1);
        assert_eq!(form.steps(), before.as_slice());
    }

    #[test]
    fn test_remove_step_shifts_later_steps() {
        let mut form = FormController::new();
        form.replace_steps_from_text("a\nb\nc\nd");
        form.remove_step(1);
        assert_eq!(form.steps(), &["a", "c", "d"]);
    }

    #[test]
    fn test_blank_steps_allowed_and_out_of_bounds_ignored() {
        let mut form = FormController::new();
        form.append_step();
        form.append_step();
        form.set_step(5, "nowhere");
        form.remove_step(9);
        assert_eq!(form.steps(), &["", ""]);
    }

    #[test]
    fn test_submit_merges_selection_and_steps() {
        let mut form = filled();
        form.toggle_option("Salt");
        form.toggle_option("Eggs");
        form.append_step();
        form.set_step(0, "Mix");
        form.append_step();
        form.set_step(1, "Bake");

        let calls = Cell::new(0);
        let mut sent = None;
        let never = |_: &str| -> bool { panic!("create mode must not ask") };
        form.submit(&never, |payload| {
            calls.set(calls.get() + 1);
            sent = Some(payload);
        })
        .unwrap();

        assert_eq!(calls.get(), 1);
        let payload = sent.unwrap();
        assert_eq!(payload.name, "Cake");
        assert_eq!(payload.prep_time_minutes, 10.0);
        assert_eq!(payload.cook_time_minutes, 30.0);
        assert_eq!(payload.difficulty, Difficulty::Easy);
        assert_eq!(payload.ingredients, vec!["Salt", "Eggs"]);
        assert_eq!(payload.instructions, vec!["Mix", "Bake"]);
    }

    #[test]
    fn test_declined_edit_does_not_submit() {
        let form = FormController::for_edit(&existing());
        let snapshot = form.clone();
        let asked = Cell::new(0);
        let decline = |message: &str| {
            assert_eq!(message, CONFIRM_RECIPE_UPDATE);
            asked.set(asked.get() + 1);
            false
        };

        let result = form.submit(&decline, |_| panic!("callback must not run"));
        assert_eq!(result, Err(SubmitError::ConfirmationDeclined));
        assert_eq!(asked.get(), 1);
        assert_eq!(form, snapshot);
    }

    #[test]
    fn test_accepted_edit_submits() {
        let form = FormController::for_edit(&existing());
        let mut sent = None;
        form.submit(&|_: &str| true, |payload| sent = Some(payload)).unwrap();
        let payload = sent.unwrap();
        assert_eq!(payload.ingredients, vec!["Onion", "Garlic"]);
        assert_eq!(payload.servings, Some(2.0));
        assert_eq!(payload.cuisine.as_deref(), Some("French"));
    }

    #[test]
    fn test_missing_required_fields_block_submit() {
        let mut form = FormController::new();
        form.set(Field::Difficulty, "");
        let result = form.submit(&|_: &str| true, |_| panic!("callback must not run"));
        let Err(SubmitError::Invalid(errors)) = result else {
            panic!("expected validation errors");
        };
        assert_eq!(
            errors,
            vec![
                ValidationError::new("name", MSG_NAME_REQUIRED),
                ValidationError::new("prepTimeMinutes", MSG_REQUIRED),
                ValidationError::new("cookTimeMinutes", MSG_REQUIRED),
                ValidationError::new("difficulty", MSG_REQUIRED),
            ]
        );
    }

    #[test]
    fn test_non_numeric_time_rejected() {
        let mut form = filled();
        form.set(Field::CookTime, "half an hour");
        form.set(Field::Servings, "NaN");
        assert_eq!(
            form.validate(),
            vec![
                ValidationError::new("cookTimeMinutes", MSG_NOT_A_NUMBER),
                ValidationError::new("servings", MSG_NOT_A_NUMBER),
            ]
        );
    }

    #[test]
    fn test_numbers_have_no_range_check() {
        let mut form = filled();
        form.set(Field::PrepTime, "-5");
        form.set(Field::CookTime, "1.5");
        form.set(Field::Servings, "-2");
        assert!(form.validate().is_empty());

        let base = form.base_fields().unwrap();
        assert_eq!(base.prep_time_minutes, -5.0);
        assert_eq!(base.cook_time_minutes, 1.5);
        assert_eq!(base.servings, Some(-2.0));
    }

    #[test]
    fn test_hydrate_shows_whole_minutes_without_decimals() {
        let form = FormController::for_edit(&existing());
        assert_eq!(form.get(Field::PrepTime), "5");
        assert_eq!(form.get(Field::Servings), "2");
    }

    #[test]
    fn test_no_cross_field_validation() {
        let mut form = filled();
        form.set(Field::PrepTime, "500");
        form.set(Field::CookTime, "0");
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_hydrate_keeps_selection_and_steps() {
        let mut form = FormController::for_edit(&existing());
        form.toggle_option("Salt");
        form.append_step();

        let mut renamed = existing();
        renamed.name = "Stew".into();
        renamed.ingredients = vec![];
        renamed.instructions = vec![];
        form.hydrate(&renamed);

        assert_eq!(form.get(Field::Name), "Stew");
        assert_eq!(form.selected(), &["Onion", "Garlic", "Salt"]);
        assert_eq!(form.steps(), &["Chop", "Boil", ""]);
    }

    #[test]
    fn test_split_lines_drops_blank_lines() {
        assert_eq!(split_lines("  flour \n\n eggs\r\n   \nmilk"), vec!["flour", "eggs", "milk"]);
        assert!(split_lines("").is_empty());
    }
}

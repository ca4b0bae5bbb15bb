//! Update function for the formula builder component.
//!
//! Elm-style: `update` receives the component state, the `Context` and a
//! `Msg`, applies the change through the `BuilderSession` and returns whether
//! the view should re-render. Rejected operations leave the session untouched
//! and are reported with a toast.

use chrono::Utc;
use common::catalog::Catalog;
use common::model::catalog::Demographic;
use common::model::profile::HealthProfile;
use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{fetch_recommendations, fetch_stacks, post_formula, save_profile, show_toast, ToastKind};
use super::messages::Msg;
use super::state::FormulaBuilder;

pub fn update(component: &mut FormulaBuilder, ctx: &Context<FormulaBuilder>, msg: Msg) -> bool {
    match msg {
        Msg::CatalogLoaded(ingredients) => match Catalog::new(ingredients) {
            Ok(catalog) => {
                log!(format!("catalog loaded with {} ingredients", catalog.len()));
                component.catalog = Some(catalog);
                true
            }
            Err(e) => {
                show_toast(&format!("The ingredient catalog is invalid: {}", e), ToastKind::Error);
                false
            }
        },
        Msg::StacksLoaded(stacks) => {
            component.stacks = stacks;
            true
        }
        Msg::SetDemographic(demographic) => {
            switch_demographic(component, ctx, demographic);
            component.profile.gender = demographic;
            remember_profile(ctx, component.profile.clone());
            true
        }
        Msg::SetPreferredForm(form) => {
            component.profile.preferred_form = form;
            component.session.apply_profile(&component.profile);
            remember_profile(ctx, component.profile.clone());
            true
        }
        Msg::ProfileLoaded(profile) => {
            component.profile = profile;
            let before = component.session.demographic();
            component.session.apply_profile(&component.profile);
            if let Some(demographic) = ctx.props().demographic {
                component.session.set_demographic(Some(demographic));
            }
            let after = component.session.demographic();
            if after != before {
                switch_demographic(component, ctx, after);
            }
            true
        }
        Msg::ProfileSaved(profile) => {
            component.profile = profile;
            false
        }

        Msg::ChooseProductType(product_type) => report(component.session.choose_product_type(product_type)),
        Msg::ChooseGoal(goal) => {
            let accepted = report(component.session.choose_goal(&goal));
            if accepted {
                request_recommendations(ctx, goal);
            }
            accepted
        }
        Msg::UpdateGoalText(text) => {
            component.goal_text = text;
            true
        }
        Msg::SubmitGoalText => {
            let goal = component.goal_text.trim().to_string();
            if goal.is_empty() {
                show_toast("Describe your goal or pick one of the suggestions.", ToastKind::Info);
                return false;
            }
            ctx.link().send_message(Msg::ChooseGoal(goal));
            false
        }
        Msg::SkipGoal => report(component.session.skip_goal()),
        Msg::RecommendationsLoaded(ids) => {
            component.recommended = ids;
            true
        }
        Msg::AddRecommended => {
            let ids = component.recommended.clone();
            add_ids(component, ids.iter().map(String::as_str))
        }

        Msg::Search(term) => {
            component.search = term;
            true
        }
        Msg::FilterCategory(category) => {
            component.category = category;
            true
        }
        Msg::Add(id) => add_ids(component, std::iter::once(id.as_str())),
        Msg::ApplyStack(stack_id) => {
            let ids = component
                .stacks
                .iter()
                .find(|s| s.id == stack_id)
                .map(|s| s.ingredient_ids.clone())
                .unwrap_or_default();
            add_ids(component, ids.iter().map(String::as_str))
        }
        Msg::Remove(id) => match component.session.draft_mut() {
            Some(draft) => draft.selection.remove(&id),
            None => false,
        },
        Msg::SetDosage(id, dosage) => match component.session.draft_mut() {
            Some(draft) => match draft.selection.set_dosage(&id, dosage) {
                Ok(changed) => changed,
                Err(e) => {
                    show_toast(&e.to_string(), ToastKind::Error);
                    false
                }
            },
            None => false,
        },
        Msg::SetForm(id, form) => match component.session.draft_mut() {
            Some(draft) => match draft.selection.set_form(&id, &form) {
                Ok(changed) => changed,
                Err(e) => {
                    show_toast(&e.to_string(), ToastKind::Error);
                    false
                }
            },
            None => false,
        },

        Msg::Rename(name) => edit(component, |draft| draft.name = name),
        Msg::Describe(text) => edit(component, |draft| draft.description = Some(text)),
        Msg::SetDeliveryForm(form) => edit(component, |draft| draft.delivery_form = form),
        Msg::SetPackaging(packaging) => edit(component, |draft| draft.packaging = packaging),
        Msg::SetSubscription(plan) => edit(component, |draft| draft.subscription = plan),

        Msg::Review => report(component.session.review()),
        Msg::BackToBuilder => report(component.session.back_to_builder()),
        Msg::Submit => {
            let record = match component.session.begin_submit(Utc::now()) {
                Ok(record) => record,
                Err(e) => {
                    show_toast(&e.to_string(), ToastKind::Error);
                    return false;
                }
            };

            let link = ctx.link().clone();
            spawn_local(async move {
                match post_formula(&record).await {
                    Ok(id) => link.send_message(Msg::Submitted(id)),
                    Err(e) => link.send_message(Msg::SubmitFailed(e)),
                }
            });
            true
        }
        Msg::Submitted(id) => {
            let accepted = report(component.session.mark_persisted(id));
            if accepted {
                show_toast("Formula saved.", ToastKind::Info);
            }
            true
        }
        Msg::SubmitFailed(e) => {
            component.session.submit_failed();
            show_toast(&format!("Error saving the formula: {}", e), ToastKind::Error);
            true
        }
        Msg::Discard => report(component.session.discard()),
        Msg::StartOver => {
            let demographic = component.session.demographic();
            component.session = Default::default();
            component.session.apply_profile(&component.profile);
            component.session.set_demographic(demographic);
            component.goal_text.clear();
            component.recommended.clear();
            component.search.clear();
            component.category = None;
            true
        }
    }
}

/// Shows a rejected transition to the user. Returns whether it was accepted.
fn report(result: Result<(), common::error::FormulaError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            show_toast(&e.to_string(), ToastKind::Error);
            false
        }
    }
}

fn edit(component: &mut FormulaBuilder, change: impl FnOnce(&mut common::builder::FormulaDraft)) -> bool {
    match component.session.draft_mut() {
        Some(draft) => {
            change(draft);
            true
        }
        None => false,
    }
}

/// Adds the catalog entries for `ids`, skipping unknown and already selected ones.
fn add_ids<'a>(component: &mut FormulaBuilder, ids: impl Iterator<Item = &'a str>) -> bool {
    let Some(catalog) = &component.catalog else {
        return false;
    };
    let ingredients = catalog.resolve(ids);
    let demographic = component.session.demographic();
    match component.session.draft_mut() {
        Some(draft) => draft.selection.add_many(&ingredients, demographic) > 0,
        None => false,
    }
}

/// Switches the demographic used for new dosages and reloads its stacks.
fn switch_demographic(component: &mut FormulaBuilder, ctx: &Context<FormulaBuilder>, demographic: Option<Demographic>) {
    component.session.set_demographic(demographic);
    component.stacks.clear();
    if let Some(demographic) = demographic {
        load_stacks(ctx, demographic);
    }
}

/// Stores the profile so the next visit starts from the same choices.
fn remember_profile(ctx: &Context<FormulaBuilder>, profile: HealthProfile) {
    let link = ctx.link().clone();
    spawn_local(async move {
        match save_profile(&profile).await {
            Ok(saved) => link.send_message(Msg::ProfileSaved(saved)),
            Err(e) => show_toast(&format!("Could not save your profile: {}", e), ToastKind::Error),
        }
    });
}

pub fn load_stacks(ctx: &Context<FormulaBuilder>, demographic: Demographic) {
    let link = ctx.link().clone();
    spawn_local(async move {
        match fetch_stacks(demographic).await {
            Ok(stacks) => link.send_message(Msg::StacksLoaded(stacks)),
            Err(e) => log!(format!("could not load stacks: {}", e)),
        }
    });
}

fn request_recommendations(ctx: &Context<FormulaBuilder>, goal: String) {
    let link = ctx.link().clone();
    spawn_local(async move {
        match fetch_recommendations(goal).await {
            Ok(ids) => link.send_message(Msg::RecommendationsLoaded(ids)),
            Err(e) => show_toast(&format!("Could not load recommendations: {}", e), ToastKind::Error),
        }
    });
}

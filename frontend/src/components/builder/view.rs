//! View rendering for the formula builder component.
//!
//! One screen per `BuilderStage`. The building screen is split into the
//! catalog on the left and the current formula with its price on the right.
//! Every figure is recomputed from the session on each render.

use common::builder::summary::MAX_DESCRIPTION_LEN;
use common::builder::{format_price, BuilderStage, DosageRange, FormulaDraft, SelectedIngredient};
use common::catalog::stacks::HEALTH_GOALS;
use common::model::catalog::{CatalogIngredient, Category, Demographic};
use common::model::formula::{DeliveryForm, PackagingOption, ProductType, SubscriptionPlan};
use std::sync::Arc;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::format_dosage;
use super::messages::Msg;
use super::state::FormulaBuilder;

pub fn view(component: &FormulaBuilder, ctx: &Context<FormulaBuilder>) -> Html {
    let link = ctx.link();
    let screen = match component.session.stage() {
        BuilderStage::ChoosingProductType => build_product_step(component, link),
        BuilderStage::ChoosingGoalOrBuilding => build_goal_step(component, link),
        BuilderStage::Building => build_builder(component, link),
        BuilderStage::ReviewingSummary => build_summary(component, link),
        BuilderStage::Persisted => build_finished(
            &format!(
                "Your formula was saved with id {}.",
                component.session.persisted_id().unwrap_or_default()
            ),
            link,
        ),
        BuilderStage::Discarded => build_finished("The formula was discarded.", link),
    };

    html! {
        <div class="formula-builder">
            <h1>{"Build your formula"}</h1>
            { screen }
        </div>
    }
}

fn build_product_step(component: &FormulaBuilder, link: &Scope<FormulaBuilder>) -> Html {
    let current = component.session.demographic();
    html! {
        <div class="step product-step">
            <div class="demographic">
                <span>{"Formulated for: "}</span>
                { for Demographic::ALL.iter().map(|d| {
                    let d = *d;
                    let class = if current == Some(d) { "chip active" } else { "chip" };
                    let label = match d {
                        Demographic::Men => "Men",
                        Demographic::Women => "Women",
                    };
                    html! { <button class={class} onclick={link.callback(move |_| Msg::SetDemographic(Some(d)))}>{label}</button> }
                }) }
                <button
                    class={if current.is_none() { "chip active" } else { "chip" }}
                    onclick={link.callback(|_| Msg::SetDemographic(None))}
                >{"Not specified"}</button>
            </div>
            { build_preferred_form(component.session.preferred_form(), link) }
            <h2>{"What would you like to create?"}</h2>
            <div class="card-grid">
                { for ProductType::ALL.iter().map(|p| {
                    let p = *p;
                    html! {
                        <button class="card" onclick={link.callback(move |_| Msg::ChooseProductType(p))}>
                            <h3>{p.label()}</h3>
                            <p>{p.description()}</p>
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

fn build_preferred_form(current: Option<DeliveryForm>, link: &Scope<FormulaBuilder>) -> Html {
    html! {
        <div class="preferred-form">
            <span>{"I usually take: "}</span>
            { for DeliveryForm::ALL.iter().map(|f| {
                let f = *f;
                let class = if current == Some(f) { "chip active" } else { "chip" };
                html! { <button class={class} onclick={link.callback(move |_| Msg::SetPreferredForm(Some(f)))}>{f.label()}</button> }
            }) }
            <button
                class={if current.is_none() { "chip active" } else { "chip" }}
                onclick={link.callback(|_| Msg::SetPreferredForm(None))}
            >{"No preference"}</button>
        </div>
    }
}

fn build_goal_step(component: &FormulaBuilder, link: &Scope<FormulaBuilder>) -> Html {
    html! {
        <div class="step goal-step">
            <h2>{"What is your main health goal?"}</h2>
            <div class="card-grid">
                { for HEALTH_GOALS.iter().map(|goal| {
                    let name = goal.name.to_string();
                    html! {
                        <button class="card goal" onclick={link.callback(move |_| Msg::ChooseGoal(name.clone()))}>
                            <span class="icon">{goal.icon}</span>
                            <span>{goal.name}</span>
                        </button>
                    }
                }) }
            </div>
            <div class="goal-text">
                <input
                    type="text"
                    placeholder="Or describe it in your own words"
                    value={component.goal_text.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateGoalText(input.value())
                    })}
                />
                <button onclick={link.callback(|_| Msg::SubmitGoalText)}>{"Get suggestions"}</button>
            </div>
            <div class="actions">
                <button class="secondary" onclick={link.callback(|_| Msg::SkipGoal)}>{"Skip and build from scratch"}</button>
                <button class="danger" onclick={link.callback(|_| Msg::Discard)}>{"Discard"}</button>
            </div>
        </div>
    }
}

fn build_builder(component: &FormulaBuilder, link: &Scope<FormulaBuilder>) -> Html {
    let Some(draft) = component.session.draft() else {
        return html! {};
    };
    html! {
        <div class="step builder-step">
            <div class="catalog-panel">
                { build_recommendations(component, link) }
                { build_stacks(component, link) }
                { build_catalog_filters(component, link) }
                { build_catalog_list(component, link) }
            </div>
            <div class="formula-panel">
                <input
                    class="formula-name"
                    type="text"
                    value={draft.name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::Rename(input.value())
                    })}
                />
                { build_selection(draft, link) }
                { build_options(draft, link) }
                { build_price(draft) }
                <div class="actions">
                    <button
                        disabled={draft.selection.is_empty()}
                        onclick={link.callback(|_| Msg::Review)}
                    >{"Review formula"}</button>
                    <button class="danger" onclick={link.callback(|_| Msg::Discard)}>{"Discard"}</button>
                </div>
            </div>
        </div>
    }
}

fn build_recommendations(component: &FormulaBuilder, link: &Scope<FormulaBuilder>) -> Html {
    let (Some(goal), false) = (component.session.goal(), component.recommended.is_empty()) else {
        return html! {};
    };
    let names: Vec<String> = component
        .catalog
        .as_ref()
        .map(|c| c.resolve(component.recommended.iter().map(String::as_str)))
        .unwrap_or_default()
        .iter()
        .map(|i| i.name.clone())
        .collect();
    html! {
        <div class="recommendations">
            <h3>{format!("Suggested for \"{}\"", goal)}</h3>
            <p>{names.join(", ")}</p>
            <button onclick={link.callback(|_| Msg::AddRecommended)}>{"Add all suggestions"}</button>
        </div>
    }
}

fn build_stacks(component: &FormulaBuilder, link: &Scope<FormulaBuilder>) -> Html {
    if component.stacks.is_empty() {
        return html! {};
    }
    html! {
        <div class="stacks">
            <h3>{"Popular stacks"}</h3>
            { for component.stacks.iter().map(|stack| {
                let id = stack.id.clone();
                html! {
                    <div class="stack">
                        <strong>{stack.name.clone()}</strong>
                        { if stack.popular { html! { <span class="badge">{"Popular"}</span> } } else { html! {} } }
                        <p>{stack.description.clone()}</p>
                        <button onclick={link.callback(move |_| Msg::ApplyStack(id.clone()))}>{"Add stack"}</button>
                    </div>
                }
            }) }
        </div>
    }
}

fn build_catalog_filters(component: &FormulaBuilder, link: &Scope<FormulaBuilder>) -> Html {
    html! {
        <div class="catalog-filters">
            <input
                type="search"
                placeholder="Search ingredients"
                value={component.search.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::Search(input.value())
                })}
            />
            <div class="chips">
                <button
                    class={if component.category.is_none() { "chip active" } else { "chip" }}
                    onclick={link.callback(|_| Msg::FilterCategory(None))}
                >{"All"}</button>
                { for Category::ALL.iter().map(|c| {
                    let c = *c;
                    let style = c.style();
                    let class = if component.category == Some(c) { "chip active" } else { "chip" };
                    html! {
                        <button class={class} onclick={link.callback(move |_| Msg::FilterCategory(Some(c)))}>
                            {format!("{} {}", style.icon, style.label)}
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

fn build_catalog_list(component: &FormulaBuilder, link: &Scope<FormulaBuilder>) -> Html {
    if component.catalog.is_none() {
        return html! { <p class="loading">{"Loading ingredients..."}</p> };
    }
    let visible = component.visible_ingredients();
    if visible.is_empty() {
        return html! { <p class="empty">{"No ingredients match your search."}</p> };
    }
    html! {
        <ul class="catalog-list">
            { for visible.into_iter().map(|i| build_catalog_item(i, component.is_selected(&i.id), link)) }
        </ul>
    }
}

fn build_catalog_item(ingredient: &Arc<CatalogIngredient>, selected: bool, link: &Scope<FormulaBuilder>) -> Html {
    let style = ingredient.category.style();
    let id = ingredient.id.clone();
    html! {
        <li class="catalog-item">
            <div>
                <strong>{ingredient.name.clone()}</strong>
                <span class={classes!("badge", style.color)}>{style.label}</span>
                <span class={classes!("badge", ingredient.source.badge_color())}>{ingredient.source.as_str()}</span>
                <p>{ingredient.description.clone()}</p>
                <small>{format!("max {}", format_dosage(ingredient.max_dosage, &ingredient.unit))}</small>
            </div>
            <button disabled={selected} onclick={link.callback(move |_| Msg::Add(id.clone()))}>
                { if selected { "Added" } else { "Add" } }
            </button>
        </li>
    }
}

fn build_selection(draft: &FormulaDraft, link: &Scope<FormulaBuilder>) -> Html {
    if draft.selection.is_empty() {
        return html! { <p class="empty">{"Add ingredients from the catalog to start."}</p> };
    }
    html! {
        <ul class="selection">
            { for draft.selection.iter().map(|entry| build_selected_item(entry, link)) }
        </ul>
    }
}

fn build_selected_item(entry: &SelectedIngredient, link: &Scope<FormulaBuilder>) -> Html {
    let ingredient = entry.ingredient();
    let band = entry.band();
    let range = DosageRange::for_max(ingredient.max_dosage);
    let slider_id = entry.id().to_string();
    let form_id = entry.id().to_string();
    let remove_id = entry.id().to_string();
    let current_form = entry.form().to_string();

    html! {
        <li class="selected-item">
            <div class="header">
                <strong>{ingredient.name.clone()}</strong>
                <span class={classes!("badge", band.color())}>{band.label()}</span>
                <button class="icon" onclick={link.callback(move |_| Msg::Remove(remove_id.clone()))}>{"✕"}</button>
            </div>
            <input
                type="range"
                min={range.min.to_string()}
                max={range.max.to_string()}
                step={range.step.to_string()}
                value={entry.dosage().to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetDosage(slider_id.clone(), input.value_as_number())
                })}
            />
            <div class="details">
                <span>{format_dosage(entry.dosage(), &ingredient.unit)}</span>
                <select onchange={link.callback(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::SetForm(form_id.clone(), select.value())
                })}>
                    { for ingredient.forms.iter().map(|form| html! {
                        <option value={form.clone()} selected={*form == current_form}>{form.clone()}</option>
                    }) }
                </select>
                <span>{format_price(entry.cost())}</span>
            </div>
        </li>
    }
}

/// Builds a `<select>` over a fixed list of options, sending the chosen one.
fn option_select<T>(options: &[T], current: T, label: fn(&T) -> &'static str, on_pick: Callback<T>) -> Html
where
    T: Copy + PartialEq + 'static,
{
    let choices = options.to_vec();
    let onchange = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        if let Some(choice) = select.value().parse::<usize>().ok().and_then(|i| choices.get(i)) {
            on_pick.emit(*choice);
        }
    });
    html! {
        <select {onchange}>
            { for options.iter().enumerate().map(|(i, option)| html! {
                <option value={i.to_string()} selected={*option == current}>{label(option)}</option>
            }) }
        </select>
    }
}

fn build_options(draft: &FormulaDraft, link: &Scope<FormulaBuilder>) -> Html {
    html! {
        <div class="options">
            <label>
                {"Delivery form"}
                { option_select(&DeliveryForm::ALL, draft.delivery_form, DeliveryForm::label, link.callback(Msg::SetDeliveryForm)) }
            </label>
            <label>
                {"Packaging"}
                { option_select(&PackagingOption::ALL, draft.packaging, PackagingOption::label, link.callback(Msg::SetPackaging)) }
            </label>
            <label>
                {"Subscription"}
                { option_select(&SubscriptionPlan::ALL, draft.subscription, SubscriptionPlan::label, link.callback(Msg::SetSubscription)) }
            </label>
        </div>
    }
}

fn build_price(draft: &FormulaDraft) -> Html {
    let quote = draft.quote();
    html! {
        <table class="price">
            <tr><td>{"Ingredients"}</td><td>{format_price(quote.formula_cost)}</td></tr>
            <tr><td>{"Packaging"}</td><td>{format_price(quote.packaging_surcharge)}</td></tr>
            {
                if quote.discount_amount > 0.0 {
                    html! { <tr><td>{"Subscription discount"}</td><td>{format!("-{}", format_price(quote.discount_amount))}</td></tr> }
                } else {
                    html! {}
                }
            }
            <tr class="total"><td>{"Monthly price"}</td><td>{format_price(quote.final_price)}</td></tr>
        </table>
    }
}

fn build_summary(component: &FormulaBuilder, link: &Scope<FormulaBuilder>) -> Html {
    let Some(draft) = component.session.draft() else {
        return html! {};
    };
    let submitting = component.session.is_submitting();
    html! {
        <div class="step summary-step">
            <h2>{draft.name.clone()}</h2>
            <p>{format!("{} · {}", draft.product_type.label(), draft.delivery_form.label())}</p>
            <table class="summary-lines">
                <tr><th>{"Ingredient"}</th><th>{"Dosage"}</th><th>{"Form"}</th><th>{"Safety"}</th></tr>
                { for draft.selection.iter().map(|entry| {
                    let band = entry.band();
                    html! {
                        <tr>
                            <td>{entry.ingredient().name.clone()}</td>
                            <td>{format_dosage(entry.dosage(), &entry.ingredient().unit)}</td>
                            <td>{entry.form()}</td>
                            <td><span class={classes!("badge", band.color())}>{band.label()}</span></td>
                        </tr>
                    }
                }) }
            </table>
            <p>{format!("Daily serving: {}", draft.daily_serving())}</p>
            <p>{format!("{} · {}", draft.packaging.label(), draft.subscription.label())}</p>
            { build_price(draft) }
            <textarea
                class="description"
                placeholder="Notes about this formula (optional)"
                maxlength={MAX_DESCRIPTION_LEN.to_string()}
                disabled={submitting}
                value={draft.description.clone().unwrap_or_default()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::Describe(input.value())
                })}
            />
            <div class="actions">
                <button class="secondary" disabled={submitting} onclick={link.callback(|_| Msg::BackToBuilder)}>{"Back to builder"}</button>
                <button disabled={submitting} onclick={link.callback(|_| Msg::Submit)}>
                    { if submitting { "Saving..." } else { "Save formula" } }
                </button>
                <button class="danger" disabled={submitting} onclick={link.callback(|_| Msg::Discard)}>{"Discard"}</button>
            </div>
        </div>
    }
}

fn build_finished(message: &str, link: &Scope<FormulaBuilder>) -> Html {
    html! {
        <div class="step finished-step">
            <p>{message.to_string()}</p>
            <button onclick={link.callback(|_| Msg::StartOver)}>{"Build another formula"}</button>
        </div>
    }
}

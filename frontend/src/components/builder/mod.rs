//! Formula builder: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `FormulaBuilderProps`, `FormulaBuilder`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, load the ingredient catalog, the stored health profile
//!   and, when the demographic is known, its popular stacks.

use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use helpers::{fetch_catalog, fetch_profile, show_toast, ToastKind};
pub use messages::Msg;
pub use props::FormulaBuilderProps;
pub use state::FormulaBuilder;

impl Component for FormulaBuilder {
    type Message = Msg;
    type Properties = FormulaBuilderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut builder = FormulaBuilder::new();
        builder.session.set_demographic(ctx.props().demographic);
        builder
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                match fetch_catalog().await {
                    Ok(ingredients) => link.send_message(Msg::CatalogLoaded(ingredients)),
                    Err(e) => show_toast(&format!("Error loading the ingredient catalog: {}", e), ToastKind::Error),
                }
            });

            let link = ctx.link().clone();
            spawn_local(async move {
                match fetch_profile().await {
                    Ok(profile) => link.send_message(Msg::ProfileLoaded(profile)),
                    Err(e) => gloo_console::log!(format!("no health profile: {}", e)),
                }
            });

            if let Some(demographic) = self.session.demographic() {
                update::load_stacks(ctx, demographic);
            }
        }
    }
}

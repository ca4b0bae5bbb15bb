//! Properties for the `FormulaBuilder` component.

use common::model::catalog::Demographic;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FormulaBuilderProps {
    /// Demographic of the signed-in user, when known.
    ///
    /// Seeds recommended dosages and selects which popular stacks are offered.
    /// The user can still change it on the first screen. Absence is valid:
    /// dosages then start at half the ingredient maximum.
    #[prop_or_default]
    pub demographic: Option<Demographic>,
}

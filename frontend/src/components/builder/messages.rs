use common::catalog::stacks::PopularStack;
use common::model::catalog::{CatalogIngredient, Category, Demographic};
use common::model::formula::{DeliveryForm, PackagingOption, ProductType, SubscriptionPlan};
use common::model::profile::HealthProfile;

#[derive(Clone)]
pub enum Msg {
    CatalogLoaded(Vec<CatalogIngredient>),
    StacksLoaded(Vec<PopularStack>),
    SetDemographic(Option<Demographic>),
    SetPreferredForm(Option<DeliveryForm>),
    ProfileLoaded(HealthProfile),
    ProfileSaved(HealthProfile),

    ChooseProductType(ProductType),
    ChooseGoal(String),
    UpdateGoalText(String),
    SubmitGoalText,
    SkipGoal,
    RecommendationsLoaded(Vec<String>),
    AddRecommended,

    Search(String),
    FilterCategory(Option<Category>),
    Add(String),
    ApplyStack(String),
    Remove(String),
    SetDosage(String, f64),
    SetForm(String, String),

    Rename(String),
    Describe(String),
    SetDeliveryForm(DeliveryForm),
    SetPackaging(PackagingOption),
    SetSubscription(SubscriptionPlan),

    Review,
    BackToBuilder,
    Submit,
    Submitted(String),
    SubmitFailed(String),
    Discard,
    StartOver,
}

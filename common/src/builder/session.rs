//! Builder session state machine.
//!
//! ```text
//! ChoosingProductType -> ChoosingGoalOrBuilding -> Building <-> ReviewingSummary
//!                                                                 |
//!                                                                 v
//!                                                             Persisted
//! any non-terminal state --discard--> Discarded
//! ```
//!
//! Transitions are driven by the user. A rejected transition returns
//! `FormulaError::InvalidTransition` and leaves the session as it was.
//! Discarding drops the draft; nothing is autosaved.
//!
//! Between `begin_submit` and `mark_persisted` / `submit_failed` a save is in
//! flight: the draft is frozen and only those two calls are accepted.

use crate::builder::summary::{FormulaDraft, assemble};
use crate::error::FormulaError;
use crate::model::catalog::Demographic;
use crate::model::formula::{DeliveryForm, FormulaRecord, ProductType};
use crate::model::profile::HealthProfile;
use chrono::{DateTime, Utc};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderStage {
    ChoosingProductType,
    ChoosingGoalOrBuilding,
    Building,
    ReviewingSummary,
    Persisted,
    Discarded,
}

impl BuilderStage {
    pub fn name(&self) -> &'static str {
        match self {
            BuilderStage::ChoosingProductType => "choosing a product type",
            BuilderStage::ChoosingGoalOrBuilding => "choosing a goal",
            BuilderStage::Building => "building",
            BuilderStage::ReviewingSummary => "reviewing the summary",
            BuilderStage::Persisted => "persisted",
            BuilderStage::Discarded => "discarded",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BuilderStage::Persisted | BuilderStage::Discarded)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuilderSession {
    stage: BuilderStage,
    draft: Option<FormulaDraft>,
    demographic: Option<Demographic>,
    preferred_form: Option<DeliveryForm>,
    goal: Option<String>,
    persisted_id: Option<String>,
    submitting: bool,
}

impl Default for BuilderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderSession {
    pub fn new() -> Self {
        Self {
            stage: BuilderStage::ChoosingProductType,
            draft: None,
            demographic: None,
            preferred_form: None,
            goal: None,
            persisted_id: None,
            submitting: false,
        }
    }

    pub fn stage(&self) -> BuilderStage {
        self.stage
    }

    pub fn draft(&self) -> Option<&FormulaDraft> {
        self.draft.as_ref()
    }

    /// Mutable access to the draft while it can still be edited.
    pub fn draft_mut(&mut self) -> Option<&mut FormulaDraft> {
        if self.submitting {
            return None;
        }
        match self.stage {
            BuilderStage::ChoosingGoalOrBuilding
            | BuilderStage::Building
            | BuilderStage::ReviewingSummary => self.draft.as_mut(),
            _ => None,
        }
    }

    pub fn demographic(&self) -> Option<Demographic> {
        self.demographic
    }

    pub fn goal(&self) -> Option<&str> {
        self.goal.as_deref()
    }

    pub fn persisted_id(&self) -> Option<&str> {
        self.persisted_id.as_deref()
    }

    pub fn preferred_form(&self) -> Option<DeliveryForm> {
        self.preferred_form
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Demographic only seeds dosages of ingredients added afterwards.
    pub fn set_demographic(&mut self, demographic: Option<Demographic>) {
        self.demographic = demographic;
    }

    /// Takes the demographic and preferred delivery form from a stored
    /// profile. Fields the profile leaves empty keep their current value.
    pub fn apply_profile(&mut self, profile: &HealthProfile) {
        if profile.gender.is_some() {
            self.demographic = profile.gender;
        }
        if profile.preferred_form.is_some() {
            self.preferred_form = profile.preferred_form;
        }
    }

    pub fn choose_product_type(&mut self, product_type: ProductType) -> Result<(), FormulaError> {
        self.require_stage(BuilderStage::ChoosingProductType, "choose a product type")?;
        let mut draft = FormulaDraft::new(product_type);
        if let Some(form) = self.preferred_form {
            draft.delivery_form = form;
        }
        self.draft = Some(draft);
        self.move_to(BuilderStage::ChoosingGoalOrBuilding);
        Ok(())
    }

    /// Records `goal` on the session and on the draft, so it ends up in the
    /// assembled record.
    pub fn choose_goal(&mut self, goal: &str) -> Result<(), FormulaError> {
        self.require_stage(BuilderStage::ChoosingGoalOrBuilding, "choose a goal")?;
        if let Some(draft) = self.draft.as_mut() {
            draft.goals = vec![goal.to_string()];
        }
        self.goal = Some(goal.to_string());
        self.move_to(BuilderStage::Building);
        Ok(())
    }

    pub fn skip_goal(&mut self) -> Result<(), FormulaError> {
        self.require_stage(BuilderStage::ChoosingGoalOrBuilding, "start building")?;
        self.move_to(BuilderStage::Building);
        Ok(())
    }

    /// Moves to the summary. The draft must hold at least one ingredient.
    pub fn review(&mut self) -> Result<(), FormulaError> {
        self.require_stage(BuilderStage::Building, "review the formula")?;
        if self.draft.as_ref().is_none_or(|d| d.selection.is_empty()) {
            return Err(FormulaError::EmptyFormula);
        }
        self.move_to(BuilderStage::ReviewingSummary);
        Ok(())
    }

    pub fn back_to_builder(&mut self) -> Result<(), FormulaError> {
        self.require_idle("go back to the builder")?;
        self.require_stage(BuilderStage::ReviewingSummary, "go back to the builder")?;
        self.move_to(BuilderStage::Building);
        Ok(())
    }

    /// Assembles the record to save and freezes the session until the save
    /// is resolved. A second call while a save is pending is rejected.
    pub fn begin_submit(&mut self, created_at: DateTime<Utc>) -> Result<FormulaRecord, FormulaError> {
        self.require_idle("save the formula")?;
        self.require_stage(BuilderStage::ReviewingSummary, "save the formula")?;
        let draft = self.draft.as_ref().ok_or(FormulaError::EmptyFormula)?;
        let record = assemble(draft, created_at)?;
        debug!("builder session: save pending");
        self.submitting = true;
        Ok(record)
    }

    /// Unfreezes the session after a failed save so the user can retry.
    pub fn submit_failed(&mut self) {
        if self.submitting {
            debug!("builder session: save failed");
        }
        self.submitting = false;
    }

    /// Records that storage accepted the formula under `id`.
    pub fn mark_persisted(&mut self, id: impl Into<String>) -> Result<(), FormulaError> {
        self.require_stage(BuilderStage::ReviewingSummary, "persist the formula")?;
        self.submitting = false;
        self.persisted_id = Some(id.into());
        self.move_to(BuilderStage::Persisted);
        Ok(())
    }

    /// Drops the draft. Allowed from every non-terminal stage unless a save
    /// is pending.
    pub fn discard(&mut self) -> Result<(), FormulaError> {
        self.require_idle("discard the formula")?;
        if self.stage.is_terminal() {
            return Err(self.rejected("discard the formula"));
        }
        self.draft = None;
        self.goal = None;
        self.move_to(BuilderStage::Discarded);
        Ok(())
    }

    fn require_stage(&self, stage: BuilderStage, action: &'static str) -> Result<(), FormulaError> {
        if self.stage == stage {
            Ok(())
        } else {
            Err(self.rejected(action))
        }
    }

    fn require_idle(&self, action: &'static str) -> Result<(), FormulaError> {
        if self.submitting {
            Err(self.rejected(action))
        } else {
            Ok(())
        }
    }

    fn rejected(&self, action: &'static str) -> FormulaError {
        let stage = if self.submitting {
            "saving the formula"
        } else {
            self.stage.name()
        };
        FormulaError::InvalidTransition { stage, action }
    }

    fn move_to(&mut self, stage: BuilderStage) {
        debug!("builder session: {:?} -> {:?}", self.stage, stage);
        self.stage = stage;
    }
}

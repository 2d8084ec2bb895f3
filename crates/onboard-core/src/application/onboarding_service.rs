use crate::{
    domain::business::{Business, BusinessId, Contact, Fein, Industry, StageDecision, WorkflowStage},
    domain::repository::BusinessRepository,
    domain::validation,
    CoreError,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Contact fields as supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactPayload {
    /// Contact name
    pub name: String,

    /// Contact phone number
    pub phone: String,
}

/// Request to create a business record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBusinessRequest {
    /// Federal Employer Identification Number
    pub fein: String,

    /// Business name
    pub name: String,

    /// Optional industry wire name
    pub industry: Option<String>,

    /// Optional contact
    pub contact: Option<ContactPayload>,
}

/// Request to update a business record; every field is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBusinessRequest {
    /// New business name
    pub name: Option<String>,

    /// Industry wire name
    pub industry: Option<String>,

    /// Contact to attach or replace
    pub contact: Option<ContactPayload>,

    /// Workflow decision, only honored in the sales approved stage
    pub status: Option<String>,
}

/// Service for moving businesses through the onboarding workflow
pub struct OnboardingService {
    /// Repository for business records
    repository: Arc<dyn BusinessRepository>,
}

impl OnboardingService {
    /// Create a new onboarding service
    pub fn new(repository: Arc<dyn BusinessRepository>) -> Self {
        Self { repository }
    }

    /// Create a business and run the workflow transition once.
    ///
    /// A business created with an eligible industry lands directly in market
    /// approved, with an ineligible industry in market declined, and with no
    /// industry it stays new.
    pub async fn create_business(
        &self,
        request: CreateBusinessRequest,
    ) -> Result<Business, CoreError> {
        let fein = Fein::parse(&request.fein)?;
        validation::validate_business_name(&request.name)?;

        let industry = request
            .industry
            .as_deref()
            .map(Industry::parse)
            .transpose()?;
        let contact = request
            .contact
            .map(|c| Contact::new(c.name, c.phone))
            .transpose()?;

        let mut business = Business::new(fein, request.name, industry, contact);
        business.progress_workflow(None);

        self.repository.insert(&business).await?;

        tracing::info!(
            business_id = %business.id,
            fein = %business.fein,
            stage = %business.workflow_stage,
            "Business created"
        );

        Ok(business)
    }

    /// Fetch a business by ID
    pub async fn get_business(&self, id: &BusinessId) -> Result<Business, CoreError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::BusinessNotFound(id.0.clone()))
    }

    /// List all businesses in creation order
    pub async fn list_businesses(&self) -> Result<Vec<Business>, CoreError> {
        self.repository.list_all().await
    }

    /// Apply a full or partial update and run the workflow transition once.
    ///
    /// Field validation runs first, then the stage preconditions against the
    /// business's current stage, then assignment, then the transition. The
    /// updated record is written back in a single store operation.
    pub async fn update_business(
        &self,
        id: &BusinessId,
        request: UpdateBusinessRequest,
    ) -> Result<Business, CoreError> {
        let mut business = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::BusinessNotFound(id.0.clone()))?;

        // Field validation before anything is assigned
        if let Some(name) = &request.name {
            validation::validate_business_name(name)?;
        }
        let industry = request
            .industry
            .as_deref()
            .map(Industry::parse)
            .transpose()?;
        let contact = request
            .contact
            .as_ref()
            .map(|c| Contact::new(c.name.clone(), c.phone.clone()))
            .transpose()?;

        check_stage_preconditions(&business, &request)?;

        if let Some(name) = request.name {
            business.name = name;
        }
        if let Some(industry) = industry {
            business.industry = Some(industry);
        }
        if let Some(contact) = contact {
            business.set_contact(contact);
        }
        business.update_timestamp();

        let decision = request.status.as_deref().and_then(StageDecision::parse);
        let stage_before = business.workflow_stage;
        business.progress_workflow(decision);

        self.repository.update(&business).await?;

        if business.workflow_stage == stage_before {
            tracing::info!(
                business_id = %business.id,
                stage = %business.workflow_stage,
                "Business updated"
            );
        } else {
            tracing::info!(
                business_id = %business.id,
                from = %stage_before,
                to = %business.workflow_stage,
                "Workflow advanced"
            );
        }

        Ok(business)
    }

    /// Delete a business together with its contact
    pub async fn delete_business(&self, id: &BusinessId) -> Result<(), CoreError> {
        let business = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::BusinessNotFound(id.0.clone()))?;

        self.repository.delete(id).await?;

        tracing::info!(business_id = %business.id, fein = %business.fein, "Business deleted");

        Ok(())
    }
}

/// Enforce the progression preconditions for the business's current stage.
///
/// The checks look at the incoming payload and the stored record, never at
/// the post-transition state.
fn check_stage_preconditions(
    business: &Business,
    request: &UpdateBusinessRequest,
) -> Result<(), CoreError> {
    match business.workflow_stage {
        WorkflowStage::New => {
            if request.industry.is_none() && business.industry.is_none() {
                return Err(CoreError::WorkflowPrecondition(
                    "Industry is required to progress from new state.".to_string(),
                ));
            }
        }
        WorkflowStage::MarketApproved => {
            if request.contact.is_none() && business.contact.is_none() {
                return Err(CoreError::WorkflowPrecondition(
                    "Contact information is required to progress from market approved state."
                        .to_string(),
                ));
            }
        }
        WorkflowStage::SalesApproved => match request.status.as_deref() {
            None => {
                return Err(CoreError::WorkflowPrecondition(
                    "Status is required to progress from sales approved state.".to_string(),
                ));
            }
            Some(status) if StageDecision::parse(status).is_none() => {
                return Err(CoreError::WorkflowPrecondition(
                    "Invalid status. Must be 'won' or 'lost'.".to_string(),
                ));
            }
            Some(_) => {}
        },
        // Terminal stages accept updates; the transition function no-ops
        WorkflowStage::MarketDeclined | WorkflowStage::Won | WorkflowStage::Lost => {}
    }

    Ok(())
}

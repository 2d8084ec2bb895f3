use crate::domain::validation::{self, error_codes, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Onboarding workflow stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    /// Business has been recorded but not yet reviewed
    New,

    /// Market review approved the business for sales
    MarketApproved,

    /// Market review declined the business (terminal)
    MarketDeclined,

    /// Sales review approved the business for a final decision
    SalesApproved,

    /// Deal closed in our favor (terminal)
    Won,

    /// Deal lost (terminal)
    Lost,
}

impl WorkflowStage {
    /// Check if the stage has no outgoing transitions
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            WorkflowStage::MarketDeclined | WorkflowStage::Won | WorkflowStage::Lost
        )
    }

    /// Wire name of the stage
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStage::New => "new",
            WorkflowStage::MarketApproved => "market_approved",
            WorkflowStage::MarketDeclined => "market_declined",
            WorkflowStage::SalesApproved => "sales_approved",
            WorkflowStage::Won => "won",
            WorkflowStage::Lost => "lost",
        }
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Industry category of a business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    /// Restaurants and food service
    Restaurants,

    /// Retail stores
    Stores,

    /// Wholesale trade
    Wholesale,

    /// Service providers
    Services,
}

impl Industry {
    /// Parse an industry from its wire name
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "restaurants" => Ok(Industry::Restaurants),
            "stores" => Ok(Industry::Stores),
            "wholesale" => Ok(Industry::Wholesale),
            "services" => Ok(Industry::Services),
            _ => Err(ValidationError {
                code: error_codes::INVALID_INDUSTRY,
                message: "Industry must be one of: restaurants, stores, wholesale, services."
                    .to_string(),
                field: Some("industry"),
            }),
        }
    }

    /// Check if the market review approves this industry
    #[inline]
    pub fn is_market_eligible(&self) -> bool {
        matches!(self, Industry::Restaurants | Industry::Stores)
    }

    /// Wire name of the industry
    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Restaurants => "restaurants",
            Industry::Stores => "stores",
            Industry::Wholesale => "wholesale",
            Industry::Services => "services",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final decision supplied by the caller to close the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageDecision {
    /// The deal was won
    Won,

    /// The deal was lost
    Lost,
}

impl StageDecision {
    /// Parse a decision from its wire name, returning None for anything else
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "won" => Some(StageDecision::Won),
            "lost" => Some(StageDecision::Lost),
            _ => None,
        }
    }
}

/// Value object: Business ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusinessId(pub String);

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value object: a validated Federal Employer Identification Number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fein(String);

impl Fein {
    /// Parse a FEIN, requiring exactly nine decimal digits
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        validation::validate_fein(value)?;
        Ok(Fein(value.to_string()))
    }

    /// The FEIN digits as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contact person for a business, owned by exactly one business record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact name
    pub name: String,

    /// Contact phone number in international format
    pub phone: String,
}

impl Contact {
    /// Create a contact, validating the name and phone number
    pub fn new(name: String, phone: String) -> Result<Self, ValidationError> {
        validation::validate_contact_name(&name)?;
        validation::validate_phone(&phone)?;
        Ok(Contact { name, phone })
    }
}

/// Aggregate: a business moving through the onboarding workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    /// Unique identifier
    pub id: BusinessId,

    /// Federal Employer Identification Number, unique across all businesses
    pub fein: Fein,

    /// Business name
    pub name: String,

    /// Industry category, may be supplied at creation or later
    pub industry: Option<Industry>,

    /// Current workflow stage, only ever derived by the transition function
    pub workflow_stage: WorkflowStage,

    /// Contact person, absent until supplied by the caller
    pub contact: Option<Contact>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Business {
    /// Create a new business in the `new` stage
    pub fn new(
        fein: Fein,
        name: String,
        industry: Option<Industry>,
        contact: Option<Contact>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: BusinessId(Uuid::new_v4().to_string()),
            fein,
            name,
            industry,
            workflow_stage: WorkflowStage::New,
            contact,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the timestamp
    #[inline]
    pub fn update_timestamp(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Attach or replace the contact
    pub fn set_contact(&mut self, contact: Contact) {
        self.contact = Some(contact);
        self.update_timestamp();
    }

    /// Run the workflow transition function exactly once.
    ///
    /// The next stage is derived from the current stage, the stored fields,
    /// and the caller's decision. Stages never cascade: supplying an industry
    /// and a decision in the same request advances at most one stage. Returns
    /// true when the stage changed.
    pub fn progress_workflow(&mut self, decision: Option<StageDecision>) -> bool {
        let next = match self.workflow_stage {
            WorkflowStage::New => match self.industry {
                Some(industry) if industry.is_market_eligible() => {
                    Some(WorkflowStage::MarketApproved)
                }
                Some(_) => Some(WorkflowStage::MarketDeclined),
                None => None,
            },
            WorkflowStage::MarketApproved if self.contact.is_some() => {
                Some(WorkflowStage::SalesApproved)
            }
            WorkflowStage::SalesApproved => match decision {
                Some(StageDecision::Won) => Some(WorkflowStage::Won),
                Some(StageDecision::Lost) => Some(WorkflowStage::Lost),
                None => None,
            },
            _ => None,
        };

        match next {
            Some(stage) => {
                self.workflow_stage = stage;
                self.update_timestamp();
                true
            }
            None => false,
        }
    }

    /// Advisory text describing what input is needed to progress.
    ///
    /// This is a UI hint only; it is never consulted for validation.
    pub fn next_step_info(&self) -> &'static str {
        match self.workflow_stage {
            WorkflowStage::New => "Provide industry to progress.",
            WorkflowStage::MarketApproved => {
                "Provide contact information (name and phone) to progress to sales approved stage."
            }
            WorkflowStage::SalesApproved => {
                "Provide status ('won' or 'lost') to complete the workflow."
            }
            WorkflowStage::MarketDeclined | WorkflowStage::Won | WorkflowStage::Lost => {
                "Workflow completed. No further steps available."
            }
        }
    }
}

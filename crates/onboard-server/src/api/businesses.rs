//! Business API for managing onboarding records
//!
//! This module contains the handlers for the business API.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
    http::StatusCode,
};
use serde::{Serialize, Deserialize};
use std::sync::Arc;
use tracing::{info, error};

use onboard_core::{
    Business, CreateBusinessRequest, Industry, UpdateBusinessRequest, WorkflowStage,
};

use crate::server::OnboardServer;
use crate::api::errors::api_error_response;

/// Contact information embedded in a business response
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactBody {
    pub name: String,
    pub phone: String,
}

/// Response representation of a business
///
/// The workflow decision field is write-only, so it never appears here.
#[derive(Debug, Serialize, Deserialize)]
pub struct BusinessResponse {
    pub id: String,
    pub fein: String,
    pub name: String,
    pub industry: Option<Industry>,
    pub workflow_stage: WorkflowStage,
    pub contact: Option<ContactBody>,
    pub next_step: String,
}

impl From<&Business> for BusinessResponse {
    fn from(business: &Business) -> Self {
        Self {
            id: business.id.0.clone(),
            fein: business.fein.as_str().to_string(),
            name: business.name.clone(),
            industry: business.industry,
            workflow_stage: business.workflow_stage,
            contact: business.contact.as_ref().map(|contact| ContactBody {
                name: contact.name.clone(),
                phone: contact.phone.clone(),
            }),
            next_step: business.next_step_info().to_string(),
        }
    }
}

/// Handler for listing businesses
pub async fn list_businesses_handler(
    State(server): State<Arc<OnboardServer>>,
) -> impl IntoResponse {
    info!("Listing all businesses");

    match server.list_businesses().await {
        Ok(businesses) => {
            let response: Vec<BusinessResponse> =
                businesses.iter().map(BusinessResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        },
        Err(err) => {
            error!(?err, "Failed to list businesses");
            api_error_response(&err)
        }
    }
}

/// Handler for creating a business
pub async fn create_business_handler(
    State(server): State<Arc<OnboardServer>>,
    Json(request): Json<CreateBusinessRequest>,
) -> impl IntoResponse {
    info!(fein = %request.fein, "Creating business");

    match server.create_business(request).await {
        Ok(business) => {
            (StatusCode::CREATED, Json(BusinessResponse::from(&business))).into_response()
        },
        Err(err) => {
            error!(?err, "Failed to create business");
            api_error_response(&err)
        }
    }
}

/// Handler for getting a business by ID
pub async fn get_business_handler(
    State(server): State<Arc<OnboardServer>>,
    Path(business_id): Path<String>,
) -> impl IntoResponse {
    info!(%business_id, "Getting business");

    match server.get_business(&business_id).await {
        Ok(business) => {
            (StatusCode::OK, Json(BusinessResponse::from(&business))).into_response()
        },
        Err(err) => {
            error!(?err, %business_id, "Failed to get business");
            api_error_response(&err)
        }
    }
}

/// Handler for updating a business
///
/// Field updates and the workflow transition run in one request. PUT and
/// PATCH behave identically since every request field is optional.
pub async fn update_business_handler(
    State(server): State<Arc<OnboardServer>>,
    Path(business_id): Path<String>,
    Json(request): Json<UpdateBusinessRequest>,
) -> impl IntoResponse {
    info!(%business_id, "Updating business");

    match server.update_business(&business_id, request).await {
        Ok(business) => {
            (StatusCode::OK, Json(BusinessResponse::from(&business))).into_response()
        },
        Err(err) => {
            error!(?err, %business_id, "Failed to update business");
            api_error_response(&err)
        }
    }
}

/// Handler for advancing the workflow of a business
///
/// Shares the update semantics, so a payload carrying field changes applies
/// them before the transition runs.
pub async fn update_workflow_handler(
    State(server): State<Arc<OnboardServer>>,
    Path(business_id): Path<String>,
    Json(request): Json<UpdateBusinessRequest>,
) -> impl IntoResponse {
    info!(%business_id, "Advancing workflow");

    match server.update_business(&business_id, request).await {
        Ok(business) => {
            (StatusCode::OK, Json(BusinessResponse::from(&business))).into_response()
        },
        Err(err) => {
            error!(?err, %business_id, "Failed to advance workflow");
            api_error_response(&err)
        }
    }
}

/// Handler for deleting a business
pub async fn delete_business_handler(
    State(server): State<Arc<OnboardServer>>,
    Path(business_id): Path<String>,
) -> impl IntoResponse {
    info!(%business_id, "Deleting business");

    match server.delete_business(&business_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            error!(?err, %business_id, "Failed to delete business");
            api_error_response(&err)
        }
    }
}

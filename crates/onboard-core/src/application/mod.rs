/// Business onboarding service
pub mod onboarding_service;

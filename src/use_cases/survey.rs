//! Survey use-cases.

use std::sync::Arc;

use crate::models::{Scorecard, ScorecardPayload, Survey};
use crate::repository::SurveyRepository;
use crate::streaming::{ResourceStreamHandle, bridge_future};

pub struct GetSurveysListUseCase {
    repository: Arc<dyn SurveyRepository>,
}

impl GetSurveysListUseCase {
    pub fn new(repository: Arc<dyn SurveyRepository>) -> Self {
        Self { repository }
    }

    pub fn invoke(&self) -> ResourceStreamHandle<Vec<Survey>> {
        let repository = self.repository.clone();
        bridge_future(
            async move { repository.get_all_surveys().await },
            "Failed to load surveys",
        )
    }
}

pub struct SubmitSurveyUseCase {
    repository: Arc<dyn SurveyRepository>,
}

impl SubmitSurveyUseCase {
    pub fn new(repository: Arc<dyn SurveyRepository>) -> Self {
        Self { repository }
    }

    pub fn invoke(
        &self,
        survey_id: i64,
        payload: ScorecardPayload,
    ) -> ResourceStreamHandle<Scorecard> {
        let repository = self.repository.clone();
        bridge_future(
            async move { repository.submit_score(survey_id, payload).await },
            "Failed to submit survey",
        )
    }
}

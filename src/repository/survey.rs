//! Survey repository.

use async_trait::async_trait;

use crate::client::FineractClient;
use crate::error::FineractError;
use crate::models::{Scorecard, ScorecardPayload, Survey};

#[async_trait]
pub trait SurveyRepository: Send + Sync {
    async fn get_all_surveys(&self) -> Result<Vec<Survey>, FineractError>;

    async fn get_survey(&self, survey_id: i64) -> Result<Survey, FineractError>;

    async fn submit_score(
        &self,
        survey_id: i64,
        payload: ScorecardPayload,
    ) -> Result<Scorecard, FineractError>;
}

pub struct SurveyRepositoryImpl {
    client: FineractClient,
}

impl SurveyRepositoryImpl {
    pub fn new(client: FineractClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SurveyRepository for SurveyRepositoryImpl {
    async fn get_all_surveys(&self) -> Result<Vec<Survey>, FineractError> {
        self.client.surveys().get_all_surveys().await
    }

    async fn get_survey(&self, survey_id: i64) -> Result<Survey, FineractError> {
        self.client.surveys().get_survey(survey_id).await
    }

    async fn submit_score(
        &self,
        survey_id: i64,
        payload: ScorecardPayload,
    ) -> Result<Scorecard, FineractError> {
        self.client.surveys().submit_score(survey_id, &payload).await
    }
}

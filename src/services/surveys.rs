//! Survey endpoints.

use crate::endpoints;
use crate::error::FineractError;
use crate::http::HttpExecutor;
use crate::models::{Scorecard, ScorecardPayload, Survey};

#[derive(Clone)]
pub struct SurveysService {
    http: HttpExecutor,
}

impl SurveysService {
    pub(crate) fn new(http: HttpExecutor) -> Self {
        Self { http }
    }

    pub async fn get_all_surveys(&self) -> Result<Vec<Survey>, FineractError> {
        self.http.get_json(endpoints::SURVEYS, &[]).await
    }

    pub async fn get_survey(&self, survey_id: i64) -> Result<Survey, FineractError> {
        self.http.get_json(&endpoints::survey(survey_id), &[]).await
    }

    /// Submit a filled-in scorecard for a survey.
    pub async fn submit_score(
        &self,
        survey_id: i64,
        payload: &ScorecardPayload,
    ) -> Result<Scorecard, FineractError> {
        self.http
            .post_json(&endpoints::survey_scorecards(survey_id), payload)
            .await
    }
}

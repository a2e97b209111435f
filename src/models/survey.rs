//! Survey and scorecard records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: Option<i64>,
    pub key: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub question_datas: Vec<QuestionData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionData {
    pub id: Option<i64>,
    pub key: Option<String>,
    pub text: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub sequence_no: i32,
    #[serde(default)]
    pub response_datas: Vec<ResponseData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseData {
    pub id: Option<i64>,
    pub text: Option<String>,
    #[serde(default)]
    pub sequence_no: i32,
    #[serde(default)]
    pub value: i32,
}

/// One answered question inside a scorecard submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardValue {
    pub question_id: i64,
    pub response_id: i64,
    pub value: i32,
}

/// A submitted scorecard as echoed back by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub client_id: Option<i64>,
    pub survey_id: Option<i64>,
    pub created_on: Option<String>,
    #[serde(default)]
    pub scorecard_values: Vec<ScorecardValue>,
}

/// Body for `POST /surveys/{id}/scorecards`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardPayload {
    pub user_id: i64,
    pub client_id: i64,
    pub created_on: String,
    #[serde(default)]
    pub scorecard_values: Vec<ScorecardValue>,
}

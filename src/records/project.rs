use serde::Serialize;
use serde_json::Value;

use super::FromRaw;
use super::fields::{as_record, int_field, string_field};
use crate::error::ApiResult;

/// A Motus project as listed by the `projects` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub project_id: i64,
    pub name: String,
    pub code: String,
    pub permissions_tag: i64,
    pub permissions_sensor: i64,
}

impl FromRaw for Project {
    /// Builds a project from one element of the `projects` payload.
    fn from_raw(raw: &Value) -> ApiResult<Self> {
        let proj = as_record(raw, "project")?;

        Ok(Self {
            project_id: int_field(proj, "id")?,
            name: string_field(proj, "name")?,
            code: string_field(proj, "code")?,
            permissions_tag: int_field(proj, "tagPermissions")?,
            permissions_sensor: int_field(proj, "sensorPermissions")?,
        })
    }
}

//! Blocking HTTP client for the GridRoute API.

use anyhow::{bail, Result};
use gridroute_core::{Cell, Grid, Mode, Scenario};
use serde::Deserialize;
use serde_json::json;

/// Client for talking to a running GridRoute server.
pub struct GridRouteClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
pub struct RouteReply {
    pub status: String,
    pub grid: Grid,
    #[serde(default)]
    pub route: Option<Vec<Cell>>,
}

#[derive(Debug, Deserialize)]
pub struct GridReply {
    pub grid: Grid,
}

impl GridRouteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Plan a route to the exit, optionally from a mid-route position.
    pub fn plan_route(&self, mode: Mode, current: Option<Cell>) -> Result<RouteReply> {
        let mut body = json!({ "mode": mode.as_str() });
        if let Some(cell) = current {
            body["current"] = json!({ "x": cell.x, "y": cell.y });
        }
        let response = self
            .http
            .post(format!("{}/v1/route", self.base_url))
            .json(&body)
            .send()?;
        if !response.status().is_success() {
            bail!("route request failed: {}", response.status());
        }
        Ok(response.json()?)
    }

    /// Flip one obstacle cell.
    pub fn toggle(&self, x: i64, y: i64) -> Result<GridReply> {
        let response = self
            .http
            .post(format!("{}/v1/grid/toggle", self.base_url))
            .json(&json!({ "x": x, "y": y }))
            .send()?;
        if !response.status().is_success() {
            bail!("toggle request failed: {}", response.status());
        }
        Ok(response.json()?)
    }

    /// Replace the grid with a named obstacle layout.
    pub fn apply_scenario(&self, scenario: Scenario) -> Result<GridReply> {
        let response = self
            .http
            .post(format!("{}/v1/grid/scenario", self.base_url))
            .json(&json!({ "name": scenario.as_str() }))
            .send()?;
        if !response.status().is_success() {
            bail!("scenario request failed: {}", response.status());
        }
        Ok(response.json()?)
    }

    /// Read the current grid without planning.
    pub fn grid(&self) -> Result<GridReply> {
        let response = self
            .http
            .get(format!("{}/v1/grid", self.base_url))
            .send()?;
        if !response.status().is_success() {
            bail!("grid request failed: {}", response.status());
        }
        Ok(response.json()?)
    }
}

use dioxus::prelude::*;
use showcase_common::catalog::DashboardData;

#[derive(Clone, Debug, PartialEq, Store)]
pub struct DashboardState {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<DashboardData>,
    /// "Coming soon" notice from an unbuilt quick action
    pub notice: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            data: None,
            notice: None,
        }
    }
}

use serde::{Deserialize, Serialize};

/// Page-level settings. Templates may override any subset of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub search_input_id: String,
    pub table_row_selector: String,
    pub remembered_email_key: String,
    pub alert_duration_ms: u32,
    pub hint_duration_ms: u32,
    pub create_user_path: String,
    pub user_path_prefix: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            search_input_id: "userSearch".to_string(),
            table_row_selector: ".custom-table tbody tr".to_string(),
            remembered_email_key: "helix_remembered_email".to_string(),
            alert_duration_ms: 5000,
            hint_duration_ms: 2000,
            create_user_path: "/auth/admin/users/create/".to_string(),
            user_path_prefix: "/auth/admin/users/".to_string(),
        }
    }
}

impl UiConfig {
    pub fn user_view_path(&self, user_id: &str) -> String {
        format!("{}{}/view/", self.user_path_prefix, user_id)
    }
}

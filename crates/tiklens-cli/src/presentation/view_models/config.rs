use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub config_path: String,
    pub file_exists: bool,
    pub export_path: Option<String>,
    pub page_size: usize,
    pub comparison_page_size: usize,
    pub view_mode: Option<String>,
    /// Keys changed by `config set`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updated: Vec<String>,
}

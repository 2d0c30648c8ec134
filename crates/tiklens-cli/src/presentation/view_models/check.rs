use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CheckViewModel {
    pub path: String,
    pub export_date: Option<String>,
    pub followers: SectionCheckViewModel,
    pub following: SectionCheckViewModel,
    pub mutuals: usize,
}

impl CheckViewModel {
    pub fn error_count(&self) -> usize {
        self.followers.errors.len() + self.following.errors.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionCheckViewModel {
    pub found: usize,
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<EntryErrorViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryErrorViewModel {
    pub index: usize,
    pub reason: String,
}

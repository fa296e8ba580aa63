use crates::domain::value_objects::confirmation::MessageSource;
use serde::Serialize;

use crate::usecases::global_link::GlobalLink;

pub const SUCCESS_STATUS: &str = "Link generated successfully!";

/// What the page renders after a successful trigger press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub status: String,
    pub file_name: String,
    pub link: String,
    /// Value of the read-only copy field.
    pub copy_field: String,
    pub direct_link: Option<String>,
    pub file_id: Option<String>,
    pub message: String,
    pub message_source: MessageSource,
}

impl From<GlobalLink> for PageView {
    fn from(global_link: GlobalLink) -> Self {
        Self {
            status: SUCCESS_STATUS.to_string(),
            copy_field: global_link.link.clone(),
            message: global_link.confirmation.text().to_string(),
            message_source: global_link.confirmation.source(),
            file_name: global_link.file_name,
            link: global_link.link,
            direct_link: global_link.upload.direct_link,
            file_id: global_link.upload.file_id,
        }
    }
}

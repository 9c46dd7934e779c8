use serde::Serialize;

/// Output of every delete command.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: bool,
    pub id: i64,
}

impl DeletedResponse {
    pub const fn new(id: i64) -> Self {
        Self { deleted: true, id }
    }
}

use contracts::shared::list::{ListPage, ListQuery};
use contracts::system::audit::AuditLogRecord;

use crate::shared::api_client::{CollectionClient, FetchError};
use crate::shared::api_utils::mock_enabled;
use crate::shared::mock;

const CLIENT: CollectionClient = CollectionClient::new("/api/audit-logs");

/// One page of the audit trail; filtering and pagination happen
/// server-side.
pub async fn fetch_audit_logs(query: &ListQuery) -> Result<ListPage<AuditLogRecord>, FetchError> {
    if mock_enabled() {
        return Ok(mock::page_of(&mock::AUDIT_LOGS, query));
    }
    CLIENT.list(query).await
}

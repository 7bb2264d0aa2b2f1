use contracts::shared::list::{ListPage, ListQuery};
use contracts::system::activity::UserActivityRecord;

use crate::shared::api_client::{CollectionClient, FetchError};
use crate::shared::api_utils::mock_enabled;
use crate::shared::mock;

const CLIENT: CollectionClient = CollectionClient::new("/api/user-activities");

pub async fn fetch_activities(
    query: &ListQuery,
) -> Result<ListPage<UserActivityRecord>, FetchError> {
    if mock_enabled() {
        return Ok(mock::page_of(&mock::ACTIVITIES, query));
    }
    CLIENT.list(query).await
}

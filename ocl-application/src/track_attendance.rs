use super::*;

pub fn join_crawl(
    connections: &memory::Connections,
    crawl_id: &Id,
    participant_id: &Id,
) -> Result<()> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::join_crawl(conn, crawl_id, participant_id))?)
}

pub fn leave_crawl(
    connections: &memory::Connections,
    crawl_id: &Id,
    participant_id: &Id,
) -> Result<()> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::leave_crawl(conn, crawl_id, participant_id))?)
}

/// Records a live position report and refreshes the venue check-ins
/// of the participant on the crawl. Returns the venues the
/// participant is now checked in at, nearest first.
pub fn report_position(
    connections: &memory::Connections,
    crawl_id: &Id,
    participant_id: &Id,
    pos: MapPoint,
) -> Result<Vec<Id>> {
    let now = Timestamp::now();
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::report_position(conn, crawl_id, participant_id, pos, now))?)
}

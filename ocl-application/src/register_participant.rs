use super::*;

pub fn register_participant(
    connections: &memory::Connections,
    new_participant: usecases::NewParticipant,
) -> Result<Participant> {
    let now = Timestamp::now();
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::register_participant(conn, new_participant, now))?)
}

use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewParticipant {
    pub name: String,
    pub username: String,
    pub password: String,
}

/// Registers a new participant with a unique username.
pub fn register_participant<R: ParticipantRepo>(
    repo: &R,
    new: NewParticipant,
    now: Timestamp,
) -> Result<Participant> {
    let NewParticipant {
        name,
        username,
        password,
    } = new;
    if name.trim().is_empty() {
        return Err(Error::Name);
    }
    let username = username.parse::<Username>()?;
    let password = password.parse::<Password>()?;
    if repo.try_get_participant_by_username(&username)?.is_some() {
        return Err(Error::ParticipantExists);
    }
    let participant = Participant {
        id: Id::new(),
        name,
        username,
        password,
        last_position: None,
        created_at: now,
    };
    log::info!("Registering participant {}", participant.username);
    repo.create_participant(&participant)?;
    Ok(participant)
}

use super::*;

impl<'a> ParticipantRepo for DbConnection<'a> {
    fn create_participant(&self, participant: &Participant) -> Result<()> {
        let mut participants = self.store.participants.write();
        if participants.contains_key(&participant.id) {
            return Err(repo::Error::AlreadyExists);
        }
        // The login handle must be unique as well.
        if participants
            .values()
            .any(|existing| existing.username == participant.username)
        {
            return Err(repo::Error::AlreadyExists);
        }
        participants.insert(participant.id.clone(), participant.clone());
        Ok(())
    }

    fn update_participant_position(&self, id: &Id, position: &LastPosition) -> Result<()> {
        let mut participants = self.store.participants.write();
        let participant = participants.get_mut(id).ok_or(repo::Error::NotFound)?;
        participant.last_position = Some(*position);
        Ok(())
    }

    fn get_participant(&self, id: &Id) -> Result<Participant> {
        self.store
            .participants
            .read()
            .get(id)
            .cloned()
            .ok_or(repo::Error::NotFound)
    }

    fn get_participants(&self, ids: &[&Id]) -> Result<Vec<Participant>> {
        let participants = self.store.participants.read();
        Ok(ids
            .iter()
            .filter_map(|id| participants.get(*id).cloned())
            .collect())
    }

    fn try_get_participant_by_username(&self, username: &Username) -> Result<Option<Participant>> {
        let participants = self.store.participants.read();
        Ok(participants
            .values()
            .find(|participant| &participant.username == username)
            .cloned())
    }

    fn all_participants(&self) -> Result<Vec<Participant>> {
        Ok(self.store.participants.read().values().cloned().collect())
    }

    fn count_participants(&self) -> Result<usize> {
        Ok(self.store.participants.read().len())
    }
}
